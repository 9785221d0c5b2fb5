// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Algae grabber and arm, both open loop.

use crate::config::AlgaeConfig;

/// Requested algae motions for one tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AlgaeRequest {
    pub grab_in: bool,
    pub grab_out: bool,
    pub arm_up: bool,
    pub arm_down: bool,
}

/// Grabber and arm outputs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AlgaeOutput {
    pub grabber: f32,
    pub arm: f32,
}

pub struct Algae {
    config: AlgaeConfig,
    output: AlgaeOutput,
}

impl Algae {
    pub fn new(config: AlgaeConfig) -> Self {
        Self {
            config,
            output: AlgaeOutput::default(),
        }
    }

    /// Map a request onto both channels. Inward/upward wins when both directions are held.
    pub fn command(&mut self, request: AlgaeRequest) -> AlgaeOutput {
        let grabber = if request.grab_in {
            self.config.grabber_in_speed
        } else if request.grab_out {
            self.config.grabber_out_speed
        } else {
            0.0
        };
        let arm = if request.arm_up {
            self.config.arm_up_speed
        } else if request.arm_down {
            self.config.arm_down_speed
        } else {
            0.0
        };
        self.output = AlgaeOutput { grabber, arm };
        self.output
    }

    pub fn stop(&mut self) -> AlgaeOutput {
        self.command(AlgaeRequest::default())
    }

    #[inline]
    pub fn output(&self) -> AlgaeOutput {
        self.output
    }
}
