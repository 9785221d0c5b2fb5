// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Arcade mixing for the differential drivetrain.
//!
//! A [`CommandVector`] is mixed into left/right wheel outputs as:
//! - left = forward + rotation
//! - right = forward - rotation
//!
//! Both inputs are scaled by `speed_scale` first. If either side exceeds 1.0 in magnitude,
//! both are divided by the larger one so the turn ratio is preserved.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::DriveConfig;

/// Drivetrain command for one tick. Rotation positive = clockwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CommandVector {
    pub forward: f32,
    pub rotation: f32,
    pub speed_scale: f32,
}

impl CommandVector {
    pub const STOPPED: CommandVector = CommandVector {
        forward: 0.0,
        rotation: 0.0,
        speed_scale: 0.0,
    };

    pub const fn new(forward: f32, rotation: f32, speed_scale: f32) -> Self {
        Self {
            forward,
            rotation,
            speed_scale,
        }
    }
}

impl Default for CommandVector {
    fn default() -> Self {
        Self::STOPPED
    }
}

/// Drivetrain speed presets selected with the triggers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpeedLevel {
    Slow,
    Normal,
    Fast,
    Max,
}

impl SpeedLevel {
    /// Left alone slows down, right alone speeds up, both together go flat out.
    pub fn from_triggers(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => SpeedLevel::Slow,
            (false, true) => SpeedLevel::Fast,
            (true, true) => SpeedLevel::Max,
            (false, false) => SpeedLevel::Normal,
        }
    }

    pub fn scale(self, config: &DriveConfig) -> f32 {
        match self {
            SpeedLevel::Slow => config.speed_slow,
            SpeedLevel::Normal => config.speed_normal,
            SpeedLevel::Fast => config.speed_fast,
            SpeedLevel::Max => config.speed_max,
        }
    }
}

/// Left/right wheel outputs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WheelOutput {
    pub left: f32,
    pub right: f32,
}

fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Square an input keeping its sign.
#[inline]
fn square(value: f32) -> f32 {
    value.powi(2).copysign(value)
}

/// Mix a command into wheel outputs, both within [-1, 1].
pub fn arcade_mix(command: CommandVector, square_inputs: bool) -> WheelOutput {
    let scale = sanitize(command.speed_scale);
    let mut forward = sanitize(command.forward * scale);
    let mut rotation = sanitize(command.rotation * scale);
    if square_inputs {
        forward = square(forward);
        rotation = square(rotation);
    }

    let left = forward + rotation;
    let right = forward - rotation;
    let greatest = left.abs().max(right.abs());
    if greatest > 1.0 {
        WheelOutput {
            left: left / greatest,
            right: right / greatest,
        }
    } else {
        WheelOutput { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn speed_level_from_triggers() {
        assert_eq!(SpeedLevel::from_triggers(false, false), SpeedLevel::Normal);
        assert_eq!(SpeedLevel::from_triggers(true, false), SpeedLevel::Slow);
        assert_eq!(SpeedLevel::from_triggers(false, true), SpeedLevel::Fast);
        assert_eq!(SpeedLevel::from_triggers(true, true), SpeedLevel::Max);
        let config = DriveConfig::default();
        assert_eq!(SpeedLevel::Slow.scale(&config), 0.5);
        assert_eq!(SpeedLevel::Max.scale(&config), 1.0);
    }

    #[test]
    fn straight_forward_drives_both_sides_equally() {
        let out = arcade_mix(CommandVector::new(0.5, 0.0, 1.0), false);
        assert!((out.left - 0.5).abs() < EPS);
        assert!((out.right - 0.5).abs() < EPS);
    }

    #[test]
    fn clockwise_rotation_spins_left_forward() {
        let out = arcade_mix(CommandVector::new(0.0, 0.4, 1.0), false);
        assert!((out.left - 0.4).abs() < EPS);
        assert!((out.right + 0.4).abs() < EPS);
    }

    #[test]
    fn squaring_keeps_sign() {
        let out = arcade_mix(CommandVector::new(-0.5, 0.0, 1.0), true);
        assert!((out.left + 0.25).abs() < EPS);
    }

    #[test]
    fn desaturates_preserving_ratio() {
        let out = arcade_mix(CommandVector::new(1.0, 0.5, 1.0), false);
        assert!((out.left - 1.0).abs() < EPS);
        assert!((out.right - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn speed_scale_applies_before_mixing() {
        let out = arcade_mix(CommandVector::new(1.0, 0.0, 0.7), false);
        assert!((out.left - 0.7).abs() < EPS);
    }

    #[test]
    fn stopped_and_nan_give_zero() {
        assert_eq!(arcade_mix(CommandVector::STOPPED, true), WheelOutput::default());
        let out = arcade_mix(CommandVector::new(f32::NAN, 0.0, 1.0), false);
        assert_eq!(out, WheelOutput::default());
    }
}
