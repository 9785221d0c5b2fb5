// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Drivetrain
//!
//! - [`arcade`] - command vector, speed levels and arcade mixing.
//! - [`assist`] - steering and ranging from the external target tracker.
//!
//! [`Drive`] keeps the last command so there is always one to resend.

pub mod arcade;
pub mod assist;

pub use arcade::{arcade_mix, CommandVector, SpeedLevel, WheelOutput};
pub use assist::{AssistMode, TargetReading};

use crate::config::DriveConfig;

pub struct Drive {
    config: DriveConfig,
    command: CommandVector,
    output: WheelOutput,
}

impl Drive {
    pub fn new(config: DriveConfig) -> Self {
        Self {
            config,
            command: CommandVector::STOPPED,
            output: WheelOutput::default(),
        }
    }

    /// Take this tick's command and return the wheel outputs for it.
    pub fn drive(&mut self, command: CommandVector) -> WheelOutput {
        self.command = command;
        self.output = arcade_mix(command, self.config.square_inputs);
        self.output
    }

    pub fn stop(&mut self) -> WheelOutput {
        self.drive(CommandVector::STOPPED)
    }

    #[inline]
    pub fn command(&self) -> CommandVector {
        self.command
    }

    #[inline]
    pub fn output(&self) -> WheelOutput {
        self.output
    }
}
