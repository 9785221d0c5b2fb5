// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Three-line parallel link to the LED controller.

use embedded_hal::digital::OutputPin;

use crate::hw::Led;
use crate::status::{Status, StatusDisplay};

/// Drives the status code onto three output lines, pin 1 carrying the most significant bit.
pub struct StatusLeds<P1: OutputPin, P2: OutputPin, P3: OutputPin> {
    bit2: Led<P1>,
    bit1: Led<P2>,
    bit0: Led<P3>,
    shown: Status,
}

impl<P1: OutputPin, P2: OutputPin, P3: OutputPin> StatusLeds<P1, P2, P3> {
    /// Lines start at `Blank`.
    pub fn new(bit2: Led<P1>, bit1: Led<P2>, bit0: Led<P3>) -> Self {
        let mut leds = Self {
            bit2,
            bit1,
            bit0,
            shown: Status::Blank,
        };
        leds.write(Status::Blank);
        leds
    }

    fn write(&mut self, status: Status) {
        let [b2, b1, b0] = status.bits();
        self.bit2.set(b2);
        self.bit1.set(b1);
        self.bit0.set(b0);
        self.shown = status;
    }

    pub fn free(self) -> (Led<P1>, Led<P2>, Led<P3>) {
        (self.bit2, self.bit1, self.bit0)
    }
}

impl<P1: OutputPin, P2: OutputPin, P3: OutputPin> StatusDisplay for StatusLeds<P1, P2, P3> {
    fn show(&mut self, status: Status) {
        if status != self.shown {
            self.write(status);
        }
    }

    fn shown(&self) -> Status {
        self.shown
    }
}
