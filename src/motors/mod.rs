// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! Mechanism-level wrappers that sit between the controllers and the raw [`Channel`] outputs.
//!
//! ## Modules
//!
//! - [`elevator_motor`] - Elevator gearbox pair with tick-to-height conversion.
//!
//! [`Channel`]: crate::hw::Channel

pub mod elevator_motor;

pub use elevator_motor::{ElevatorMotor, PairOutput};
