//! Duty-cycle <-> pulse-width conversions.

use crate::level::duty_cycle_to_level;
use crate::period::freq_hz_to_period_us;

#[inline]
pub fn pulse_us_to_duty_cycle(pulse_us: u64, period_us: u64) -> f32 {
    pulse_us as f32 / period_us as f32
}

#[inline]
pub fn pulse_ms_to_duty_cycle(pulse_ms: f32, period_ms: f32) -> f32 {
    pulse_us_to_duty_cycle((pulse_ms * 1e3) as u64, (period_ms * 1e3) as u64)
}

/// pulse width in us of a `duty_cycle` fraction at `freq_hz`, truncated
#[inline]
pub fn duty_cycle_to_pulse_us(duty_cycle: f32, freq_hz: f32) -> u64 {
    (duty_cycle * freq_hz_to_period_us(freq_hz) as f32) as u64
}

#[inline]
pub fn duty_cycle_to_pulse_ms(duty_cycle: f32, freq_hz: f32) -> f32 {
    duty_cycle_to_pulse_us(duty_cycle, freq_hz) as f32 / 1e3
}

/// A duty-cycle fraction, kept in [0, 1].
///
/// Out-of-range inputs saturate on construction, so a `DutyCycle` is always
/// safe to turn into a compare level.
#[derive(Clone, Copy, Debug, PartialEq, defmt::Format)]
pub struct DutyCycle(f32);

impl DutyCycle {
    #[inline]
    pub fn new(fraction: f32) -> DutyCycle {
        DutyCycle(fraction.clamp(0.0, 1.0))
    }

    /// duty cycle: 0-100
    #[inline]
    pub fn from_percent(percent: f32) -> DutyCycle {
        DutyCycle::new(percent / 100.0)
    }

    #[inline]
    pub fn from_pulse_us(pulse_us: u64, period_us: u64) -> DutyCycle {
        DutyCycle::new(pulse_us_to_duty_cycle(pulse_us, period_us))
    }

    /// fraction of a counter level relative to its wrap
    #[inline]
    pub fn from_level(level: u16, wrap: u16) -> DutyCycle {
        DutyCycle::new(level as f32 / wrap as f32)
    }

    #[inline]
    pub fn fraction(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn percent(&self) -> f32 {
        self.0 * 100.0
    }

    #[inline]
    pub fn to_level(&self, wrap: u16) -> u16 {
        duty_cycle_to_level(self.0, wrap)
    }

    #[inline]
    pub fn to_pulse_us(&self, freq_hz: f32) -> u64 {
        duty_cycle_to_pulse_us(self.0, freq_hz)
    }
}
