// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Status Lights
//!
//! - [`code`] - status codes and their 3-bit encoding.
//! - [`blinker`] - non-blocking flash sequencer.
//! - [`leds`] - [`StatusDisplay`] over three `embedded-hal` output pins.

pub mod blinker;
pub mod code;
pub mod leds;

pub use blinker::Blinker;
pub use code::Status;
pub use leds::StatusLeds;

/// Anything that can present a [`Status`]. Written once per tick.
pub trait StatusDisplay {
    fn show(&mut self, status: Status);

    /// Status currently presented.
    fn shown(&self) -> Status;
}

/// Display that only remembers the last status. For robots without status lights.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoDisplay {
    last: Status,
}

impl StatusDisplay for NoDisplay {
    fn show(&mut self, status: Status) {
        self.last = status;
    }

    fn shown(&self) -> Status {
        self.last
    }
}
