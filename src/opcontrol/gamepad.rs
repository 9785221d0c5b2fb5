// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator device snapshots.
//!
//! The outer process polls the real devices once per tick and fills these in. Axes follow the
//! usual gamepad convention: stick Y is negative when pushed away from the driver.

use crate::config::DriveConfig;
use crate::drive::TargetReading;

/// D-pad direction, decoded from the POV hat angle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DPad {
    Up,
    Right,
    Down,
    Left,
}

impl DPad {
    /// Cardinal angles only. Diagonals and a released hat decode to `None`.
    pub fn from_pov(pov: Option<u16>) -> Option<Self> {
        match pov? {
            0 => Some(DPad::Up),
            90 => Some(DPad::Right),
            180 => Some(DPad::Down),
            270 => Some(DPad::Left),
            _ => None,
        }
    }
}

/// Gamepad state for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Gamepad {
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_bumper: bool,
    pub right_bumper: bool,
    pub back: bool,
    pub start: bool,
    pub left_stick_button: bool,
    pub right_stick_button: bool,

    /// POV hat angle in degrees, `None` when released.
    pub pov: Option<u16>,

    pub left_x: f32,
    pub left_y: f32,
    pub right_x: f32,
    pub right_y: f32,
    /// Analog triggers, 0.0 released to 1.0 fully pulled.
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl Gamepad {
    #[inline]
    pub fn dpad(&self) -> Option<DPad> {
        DPad::from_pov(self.pov)
    }

    #[inline]
    pub fn left_trigger_pressed(&self, config: &DriveConfig) -> bool {
        self.left_trigger > config.trigger_threshold
    }

    #[inline]
    pub fn right_trigger_pressed(&self, config: &DriveConfig) -> bool {
        self.right_trigger > config.trigger_threshold
    }
}

/// Flight joystick state for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Joystick {
    pub axes: [f32; 4],
}

impl Joystick {
    /// Axis value, 0.0 for an axis the device does not have.
    pub fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }
}

/// Which device drives the robot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DriveScheme {
    /// The driver gamepad does everything.
    #[default]
    SingleController,
    /// The second gamepad's sticks drive.
    DualController,
    /// The flight joystick drives.
    Joystick,
}

/// Everything the operators (and the target tracker) provide for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OperatorInput {
    /// Gamepad 1.
    pub driver: Gamepad,
    /// Gamepad 2.
    pub operator: Gamepad,
    pub joystick: Joystick,
    pub scheme: DriveScheme,
    /// Latest tracker sample, `None` when the tracker is not reporting.
    pub target: Option<TargetReading>,
}
