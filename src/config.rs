//! PWM slice configuration descriptor.
//!
//! [`SliceConfig`] is the value the conversions in this crate ultimately
//! produce: a fractional clock divider plus a 16-bit counter wrap, ready to
//! program into a PWM slice through whatever HAL owns the hardware.

use fugit::HertzU32;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::divider::clkdiv_for_freq;
use crate::period::{period_ms_to_freq_hz, period_us_to_freq_hz};

/// Smallest divider the DIV register can hold.
pub const MIN_CLKDIV: f32 = 1.0;

/// Largest divider the DIV register can hold (8 integer bits, 4 fractional).
pub const MAX_CLKDIV: f32 = 255.0 + 15.0 / 16.0;

#[derive(Clone, Copy, Debug, PartialEq, defmt::Format)]
pub struct SliceConfig {
    clkdiv: f32,
    wrap: u16,
}

impl SliceConfig {
    #[inline]
    pub fn new(clkdiv: f32, wrap: u16) -> SliceConfig {
        SliceConfig { clkdiv, wrap }
    }

    /// Config for a given output frequency on a slice counting to `wrap`.
    #[inline]
    pub fn from_freq(sys_clk: HertzU32, target_freq_hz: f32, wrap: u16) -> SliceConfig {
        SliceConfig {
            clkdiv: clkdiv_for_freq(sys_clk, target_freq_hz, wrap),
            wrap,
        }
    }

    /// Config for a given output period in us.
    #[inline]
    pub fn from_period_us(sys_clk: HertzU32, period_us: u64, wrap: u16) -> SliceConfig {
        SliceConfig::from_freq(sys_clk, period_us_to_freq_hz(period_us), wrap)
    }

    /// Config for a given output period in ms.
    #[inline]
    pub fn from_period_ms(sys_clk: HertzU32, period_ms: f32, wrap: u16) -> SliceConfig {
        SliceConfig::from_freq(sys_clk, period_ms_to_freq_hz(period_ms), wrap)
    }

    /// Raw divider as computed, unclamped.
    #[inline]
    pub fn clkdiv(&self) -> f32 {
        self.clkdiv
    }

    #[inline]
    pub fn wrap(&self) -> u16 {
        self.wrap
    }

    /// Integer part of the divider in the DIV register's 8.4 fixed point,
    /// clamped into [`MIN_CLKDIV`, `MAX_CLKDIV`].
    #[inline]
    pub fn div_int(&self) -> u8 {
        self.div_fixed().0
    }

    /// Fractional part of the divider in sixteenths, 0-15.
    #[inline]
    pub fn div_frac(&self) -> u8 {
        self.div_fixed().1
    }

    fn div_fixed(&self) -> (u8, u8) {
        let clkdiv = self.clkdiv.clamp(MIN_CLKDIV, MAX_CLKDIV);
        let int = clkdiv.floor();
        let mut div_int = int as u8;
        let mut div_frac = ((clkdiv - int) * 16.0).round() as u8;
        if div_frac == 16 {
            // rounding carried into the integer part; clamp keeps it <= 255
            div_frac = 0;
            div_int += 1;
        }
        (div_int, div_frac)
    }
}
