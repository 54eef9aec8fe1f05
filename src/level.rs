//! Pulse width / duty fraction -> counter compare level.
//!
//! Levels are clamped into [0, wrap]; out-of-range inputs saturate rather
//! than fail.

/// Compare level producing a pulse of `pulse_us` within a `period_us` frame.
///
/// Integer math; the level is the pulse's share of the `wrap + 1` counter
/// ticks, clamped to `wrap`.
#[inline]
pub fn pulse_us_to_level(pulse_us: u64, period_us: u64, wrap: u16) -> u16 {
    let level = pulse_us * (wrap as u64 + 1) / period_us;
    level.min(wrap as u64) as u16
}

#[inline]
pub fn pulse_ms_to_level(pulse_ms: f32, period_ms: f32, wrap: u16) -> u16 {
    pulse_us_to_level((pulse_ms * 1e3) as u64, (period_ms * 1e3) as u64, wrap)
}

/// Compare level for a duty-cycle fraction in [0, 1]; saturates outside it.
#[inline]
pub fn duty_cycle_to_level(duty_cycle: f32, wrap: u16) -> u16 {
    let level = (duty_cycle.clamp(0.0, 1.0) * wrap as f32) as u16;
    level.min(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servo_center_pulse() {
        // 1.5 ms pulse in a 20 ms frame, 1 us per tick
        assert_eq!(pulse_us_to_level(1_500, 20_000, 19_999), 1_500);
        assert_eq!(pulse_ms_to_level(1.5, 20.0, 19_999), 1_500);
    }

    #[test]
    fn full_period_pulse_hits_wrap() {
        assert_eq!(pulse_us_to_level(20_000, 20_000, 19_999), 19_999);
    }

    #[test]
    fn over_long_pulse_clamps_to_wrap() {
        assert_eq!(pulse_us_to_level(25_000, 20_000, 19_999), 19_999);
        assert_eq!(pulse_ms_to_level(40.0, 20.0, 19_999), 19_999);
    }

    #[test]
    fn zero_pulse_is_level_zero() {
        assert_eq!(pulse_us_to_level(0, 20_000, 19_999), 0);
    }

    #[test]
    fn duty_maps_onto_wrap() {
        assert_eq!(duty_cycle_to_level(0.0, 1_000), 0);
        assert_eq!(duty_cycle_to_level(0.5, 1_000), 500);
        assert_eq!(duty_cycle_to_level(1.0, 1_000), 1_000);
    }

    #[test]
    fn out_of_range_duty_saturates() {
        assert_eq!(duty_cycle_to_level(-0.25, 1_000), 0);
        assert_eq!(duty_cycle_to_level(1.75, 1_000), 1_000);
    }
}
