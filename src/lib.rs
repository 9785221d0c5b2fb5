// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Reef Robot Control Core
//!
//! This crate contains the fixed-period control core of a competition robot: an elevator
//! positioned in closed loop, a two-beam game-piece staging pipeline, elapsed-time autonomous
//! programs and the operator mapping for the driver-controlled period. It is `no_std`, does not
//! allocate, and talks to hardware only through the traits in [`hw`].
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`robot`] | Per-mode tick entry points, command frame, watchdog feed |
//! | [`control`] | PID, elevator, staging and algae controllers |
//! | [`motors`] | Elevator gearbox geometry and motor pairing |
//! | [`drive`] | Arcade mixing, speed levels, target assist |
//! | [`auton`] | Autonomous programs and their sequencer |
//! | [`opcontrol`] | Operator device snapshots and button mapping |
//! | [`status`] | LED status codes, blinker, LED output pins |
//! | [`hw`] | Actuator/sensor traits and `embedded-hal` adapters |
//! | [`tools`] | Range mapping helpers |
//! | [`config`] | Calibrated constants and validation |
//! | [`telemetry`] | Read-only snapshot for publishing |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod auton;
pub mod config;
pub mod control;
pub mod drive;
pub mod error;
pub mod hw;
pub mod motors;
pub mod opcontrol;
pub mod robot;
pub mod status;
pub mod telemetry;
pub mod tools;

pub use config::RobotConfig;
pub use error::ConfigError;
pub use robot::{CommandFrame, Mode, Robot};
