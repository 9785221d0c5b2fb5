// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error types.
//!
//! Only construction can fail. Once a [`Robot`](crate::robot::Robot) exists every tick path is
//! infallible and always emits a command.

use thiserror::Error;

/// Rejected configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("loop period must be positive, got {0} s")]
    LoopPeriod(f32),

    #[error("elevator counts per unit must be positive, got {0}")]
    CountsPerUnit(f32),

    #[error("elevator output band [{min}, {max}] must satisfy -1 <= min <= 0 <= max <= 1")]
    OutputBand { min: f32, max: f32 },

    #[error("gravity bias {0} lies outside the elevator output band")]
    GravityBias(f32),

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must lie within [-1, 1], got {value}")]
    Speed { name: &'static str, value: f32 },

    #[error("drive speed level {name} must lie within (0, 1], got {value}")]
    SpeedLevel { name: &'static str, value: f32 },

    #[error("blink period must be positive, got {0} s")]
    BlinkPeriod(f32),
}
