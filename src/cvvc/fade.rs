//! Cosine fades on 16-bit sample buffers.

use std::f64::consts::FRAC_PI_2;

/// Shortest crossfade window, in samples.
pub const MIN_CROSSFADE_SAMPLES: usize = 10;

/// Fade the last `fraction` of `samples` to silence along a quarter cosine.
///
/// At least one sample is faded. Samples before the fade window are copied
/// unchanged.
pub fn fade_out(samples: &[i16], fraction: f64) -> Vec<i16> {
    let mut out = samples.to_vec();
    if out.is_empty() {
        return out;
    }

    let fade_len = scaled_len(out.len(), fraction).clamp(1, out.len());
    let start = out.len() - fade_len;
    for (i, sample) in out[start..].iter_mut().enumerate() {
        let gain = (i as f64 / fade_len as f64 * FRAC_PI_2).cos();
        *sample = to_i16(f64::from(*sample) * gain);
    }
    out
}

/// Window length used by [`crossfade`] for buffers of `a_len` and `b_len` samples.
///
/// `fraction` of the shorter buffer, never below [`MIN_CROSSFADE_SAMPLES`].
/// When that would not fit in both buffers the window drops to half the
/// shorter buffer (still floored at the minimum), and buffers shorter than the
/// minimum are overlapped completely.
pub fn crossfade_len(a_len: usize, b_len: usize, fraction: f64) -> usize {
    let shorter = a_len.min(b_len);
    let mut len = scaled_len(a_len, fraction)
        .min(scaled_len(b_len, fraction))
        .max(MIN_CROSSFADE_SAMPLES);
    if len > a_len || len > b_len {
        len = (shorter / 2).max(MIN_CROSSFADE_SAMPLES);
    }
    len.min(shorter)
}

/// Join `a` and `b` with an equal-power (cosine/sine) crossfade.
///
/// The result is `a` minus its tail window, the blended window, then the rest
/// of `b`, so it is [`crossfade_len`] samples shorter than `a` and `b` laid
/// end to end. An empty input returns the other buffer unchanged.
pub fn crossfade(a: &[i16], b: &[i16], fraction: f64) -> Vec<i16> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }

    let len = crossfade_len(a.len(), b.len(), fraction);
    log::debug!(
        "crossfade {} + {} samples over {len} samples",
        a.len(),
        b.len()
    );

    let head = a.len() - len;
    let mut out = Vec::with_capacity(a.len() + b.len() - len);
    out.extend_from_slice(&a[..head]);
    for (i, (&tail, &lead)) in a[head..].iter().zip(&b[..len]).enumerate() {
        let phase = i as f64 / len as f64 * FRAC_PI_2;
        out.push(to_i16(
            f64::from(tail) * phase.cos() + f64::from(lead) * phase.sin(),
        ));
    }
    out.extend_from_slice(&b[len..]);
    out
}

/// `floor(len * fraction)`.
pub(crate) fn scaled_len(len: usize, fraction: f64) -> usize {
    (len as f64 * fraction).floor().max(0.0) as usize
}

fn to_i16(value: f64) -> i16 {
    value.round().clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
