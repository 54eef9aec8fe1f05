//! Frequency <-> period conversions.
//!
//! Periods are integer microseconds or float milliseconds, frequencies are
//! f32 Hz. A zero period or frequency is not guarded; the division behaves
//! as the underlying numerics do.

/// frequency (Hz) of a signal with the given period in us
#[inline]
pub fn period_us_to_freq_hz(period_us: u64) -> f32 {
    1e6 / period_us as f32
}

#[inline]
pub fn period_ms_to_freq_hz(period_ms: f32) -> f32 {
    period_us_to_freq_hz((period_ms * 1e3) as u64)
}

/// period in us of a signal with the given frequency, truncated
#[inline]
pub fn freq_hz_to_period_us(freq_hz: f32) -> u64 {
    (1e6 / freq_hz) as u64
}

#[inline]
pub fn freq_hz_to_period_ms(freq_hz: f32) -> f32 {
    freq_hz_to_period_us(freq_hz) as f32 / 1e3
}
