// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Autonomous
//!
//! - [`program`] - named programs as elapsed-time phase tables.
//! - [`sequencer`] - walks a program forward one tick at a time.
//!
//! | Program | Routine |
//! | ------- | ------- |
//! | `Default` | drive off the starting line |
//! | `ScoreL3` | drive to the reef, raise to L3, release, back away, home |
//! | `ScoreL4` | same as `ScoreL3` at L4 |
//! | `DoNothing` | stay put |

pub mod program;
pub mod sequencer;

pub use program::{Phase, Program};
pub use sequencer::AutoSequencer;
