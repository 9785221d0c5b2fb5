// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Mechanism controllers. Each one turns a standing directive plus this tick's sensor readings
//! into normalized actuator commands and never blocks.
//!
//! ## Modules
//!
//! - [`pid`] - General-purpose PID controller implementation.
//! - [`elevator`] - Closed-loop height controller with gravity bias, presets and homing.
//! - [`staging`] - Two-beam game-piece staging through the end-effector rollers.
//! - [`algae`] - Open-loop algae grabber and arm.

pub mod algae;
pub mod elevator;
pub mod pid;
pub mod staging;

pub use algae::{Algae, AlgaeOutput, AlgaeRequest};
pub use elevator::{Elevator, ElevatorDirective, ElevatorState, Position};
pub use pid::Pid;
pub use staging::{RollerOutput, Staging, StagingDirective, StagingState};
