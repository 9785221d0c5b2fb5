// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Operator Control
//!
//! Turns the per-tick operator device snapshot into mechanism requests.
//!
//! - [`gamepad`] - device snapshots ([`OperatorInput`], [`Gamepad`], [`Joystick`]).
//! - [`teleop`] - button mapping for the driver-controlled period.
//!
//! Raw devices are polled by the outer process. Edge detection lives here, in [`Edge`].

pub mod gamepad;
pub mod teleop;

pub use gamepad::{DPad, DriveScheme, Gamepad, Joystick, OperatorInput};
pub use teleop::{ElevatorRequest, TeleopIntent, TeleopMapper};

/// Rising-edge detector for a boolean polled once per tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct Edge {
    last: bool,
}

impl Edge {
    /// True on the tick `now` goes from false to true.
    pub fn rising(&mut self, now: bool) -> bool {
        let rose = now && !self.last;
        self.last = now;
        rose
    }

    /// Take `now` as the previous sample, so a level already high does not fire.
    pub fn reset(&mut self, now: bool) {
        self.last = now;
    }
}
