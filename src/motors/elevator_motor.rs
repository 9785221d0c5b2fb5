// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Elevator gearbox interface.
//!
//! Converts raw encoder ticks into normalized carriage height and a single "positive = up"
//! command into the two gearbox motor outputs.
//!
//! Geometry parameters:
//! - `counts_per_unit`: encoder counts per normalized height unit
//! - `motor_inverted`: positive motor output lowers the carriage
//! - `follower_inverted`: the second gearbox motor is mirrored relative to the leader

use crate::config::ElevatorConfig;

/// Leader/follower motor pair on the elevator gearbox with its height encoder.
#[derive(Copy, Clone, Debug)]
pub struct ElevatorMotor {
    counts_per_unit: f32,
    /// Raw count captured when the carriage last sat on the home switch.
    zero_ticks: i32,
    motor_inverted: bool,
    follower_inverted: bool,
}

/// Outputs for the two gearbox motors.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PairOutput {
    pub leader: f32,
    pub follower: f32,
}

impl ElevatorMotor {
    pub fn new(config: &ElevatorConfig) -> Self {
        Self {
            counts_per_unit: config.counts_per_unit,
            zero_ticks: 0,
            motor_inverted: config.motor_inverted,
            follower_inverted: config.follower_inverted,
        }
    }

    /// Convert encoder ticks to normalized height above the zero reference.
    #[inline]
    pub fn height(&self, raw_ticks: i32) -> f32 {
        let counts = raw_ticks.wrapping_sub(self.zero_ticks);
        counts as f32 / self.counts_per_unit
    }

    /// Take the current count as height zero.
    pub fn zero(&mut self, raw_ticks: i32) {
        self.zero_ticks = raw_ticks;
    }

    /// Split a carriage command (positive = up) into the two motor outputs.
    pub fn outputs(&self, command: f32) -> PairOutput {
        let leader = if self.motor_inverted { -command } else { command };
        let follower = if self.follower_inverted { -leader } else { leader };
        PairOutput { leader, follower }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motor() -> ElevatorMotor {
        ElevatorMotor::new(&ElevatorConfig::default().with_counts_per_unit(1000.0))
    }

    #[test]
    fn converts_ticks_to_height() {
        let m = motor();
        assert!((m.height(550) - 0.55).abs() < 1e-6);
    }

    #[test]
    fn zeroing_moves_the_reference() {
        let mut m = motor();
        m.zero(120);
        assert_eq!(m.height(120), 0.0);
        assert!((m.height(620) - 0.5).abs() < 1e-6);
        assert!((m.height(0) + 0.12).abs() < 1e-6);
    }

    #[test]
    fn default_wiring_inverts_both_stages() {
        let out = motor().outputs(0.4);
        assert_eq!(out.leader, -0.4);
        assert_eq!(out.follower, 0.4);
    }

    #[test]
    fn straight_wiring_passes_command_through() {
        let config = ElevatorConfig {
            motor_inverted: false,
            follower_inverted: false,
            ..ElevatorConfig::default()
        };
        let out = ElevatorMotor::new(&config).outputs(0.4);
        assert_eq!(out, PairOutput { leader: 0.4, follower: 0.4 });
    }
}
