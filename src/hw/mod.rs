// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Boundary
//!
//! Traits the control core talks through, plus thin `embedded-hal` adapters for the pieces the
//! core drives directly.
//!
//! | Item | Direction | Purpose |
//! | ---- | --------- | ------- |
//! | [`ActuatorDriver`] | out | one normalized command per [`Channel`] per tick, plus the safety feed |
//! | [`Sensors`] | in | break beams, elevator home switch, elevator encoder ticks |
//! | [`PinSensors`] | in | [`Sensors`] over `InputPin`s and a tick-reader closure |
//! | [`Led`] | out | single digital status line |

pub mod inputs;
pub mod led;

pub use inputs::PinSensors;
pub use led::{ActiveLevel, Led};

/// Motor channels driven by the control core.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    DriveLeft,
    DriveRight,
    ElevatorLeader,
    ElevatorFollower,
    RollerFirst,
    RollerSecond,
    AlgaeGrabber,
    AlgaeArm,
}

impl Channel {
    pub const COUNT: usize = 8;

    /// Every channel, in the order commands are written each tick.
    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::DriveLeft,
        Channel::DriveRight,
        Channel::ElevatorLeader,
        Channel::ElevatorFollower,
        Channel::RollerFirst,
        Channel::RollerSecond,
        Channel::AlgaeGrabber,
        Channel::AlgaeArm,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Motor controller bank with a motor-safety watchdog.
///
/// The implementation zeroes every output if `feed` is not called within its expiration window.
pub trait ActuatorDriver {
    /// Command one channel. `value` is normalized to [-1, 1].
    fn set(&mut self, channel: Channel, value: f32);

    /// Re-affirm all outputs for another watchdog window.
    fn feed(&mut self);
}

/// One tick's worth of sensor readings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// First break beam (piece has entered the end effector).
    pub stage1: bool,
    /// Second break beam (piece is fully staged).
    pub stage2: bool,
    /// Elevator bottom limit switch engaged.
    pub elevator_home: bool,
    /// Raw elevator encoder count.
    pub elevator_ticks: i32,
}

/// Sensor source polled once per tick.
pub trait Sensors {
    fn read(&mut self) -> SensorSnapshot;
}

impl Sensors for SensorSnapshot {
    fn read(&mut self) -> SensorSnapshot {
        *self
    }
}
