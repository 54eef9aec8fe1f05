//! Clock divider and counter wrap computation.

use fugit::HertzU32;

/// Fractional clock divider that makes a counter with the given wrap run at
/// `target_freq_hz`.
///
/// The counter counts `wrap + 1` ticks per output cycle, so
/// divider = sys_clk / (target_freq_hz * (wrap + 1)).
///
/// `sys_clk` is the system clock the PWM peripheral counts from, as reported
/// by the HAL's clock tree.
#[inline]
pub fn clkdiv_for_freq(sys_clk: HertzU32, target_freq_hz: f32, wrap: u16) -> f32 {
    sys_clk.to_Hz() as f32 / (target_freq_hz * (wrap as f32 + 1.0))
}

/// Wrap value giving `divisions` counter ticks per cycle, saturated to the
/// 16-bit counter range.
#[inline]
pub fn wrap_for_divisions(divisions: u32) -> u16 {
    divisions.saturating_sub(1).min(u16::MAX as u32) as u16
}
