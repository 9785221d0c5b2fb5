// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status codes understood by the LED controller.
//!
//! | Status | Code | Pins 1 2 3 |
//! | ------ | ---- | ---------- |
//! | `Blank` | 0 | 0 0 0 |
//! | `Disconnect` | 1 | 0 0 1 |
//! | `Disabled` | 2 | 0 1 0 |
//! | `Idle` | 3 | 0 1 1 |
//! | `Autonomous` | 4 | 1 0 0 |
//! | `Loaded` | 5 | 1 0 1 |
//! | `Ready` | 6 | 1 1 0 |

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Blank,
    Disconnect,
    Disabled,
    Idle,
    Autonomous,
    Loaded,
    Ready,
}

impl Status {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Status::Blank => 0,
            Status::Disconnect => 1,
            Status::Disabled => 2,
            Status::Idle => 3,
            Status::Autonomous => 4,
            Status::Loaded => 5,
            Status::Ready => 6,
        }
    }

    /// Pin levels, most significant bit on pin 1.
    pub fn bits(self) -> [bool; 3] {
        let code = self.code();
        [(code >> 2) & 1 == 1, (code >> 1) & 1 == 1, code & 1 == 1]
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Blank => "BLANK",
            Status::Disconnect => "DISCONNECT",
            Status::Disabled => "DISABLED",
            Status::Idle => "IDLE",
            Status::Autonomous => "AUTONOMOUS",
            Status::Loaded => "LOADED",
            Status::Ready => "READY",
        }
    }
}
