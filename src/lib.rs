#![cfg_attr(not(test), no_std)]

//! Unit conversions for configuring a PWM slice.
//!
//! Turns high-level parameters (frequency in Hz, period in us/ms, duty-cycle
//! fraction, pulse width) into the clock divider and 16-bit counter wrap a
//! PWM peripheral is programmed with. Pure arithmetic only: hardware access
//! and clock queries stay with the HAL, which passes its system clock in and
//! takes a [`SliceConfig`] back.
//!
//! Out-of-range values saturate instead of failing; division by a zero
//! period or frequency is not guarded.

pub mod config;
pub mod divider;
pub mod duty;
pub mod level;
pub mod period;

pub use config::{SliceConfig, MAX_CLKDIV, MIN_CLKDIV};
pub use divider::{clkdiv_for_freq, wrap_for_divisions};
pub use duty::{
    duty_cycle_to_pulse_ms, duty_cycle_to_pulse_us, pulse_ms_to_duty_cycle,
    pulse_us_to_duty_cycle, DutyCycle,
};
pub use level::{duty_cycle_to_level, pulse_ms_to_level, pulse_us_to_level};
pub use period::{
    freq_hz_to_period_ms, freq_hz_to_period_us, period_ms_to_freq_hz, period_us_to_freq_hz,
};
