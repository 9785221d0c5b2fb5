// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Game-piece staging through the end-effector rollers.
//!
//! Two break beams sit along the roller path. The first one trips when a piece enters, the
//! second once it is fully staged. Intake pulls fast until the first beam, slow until the
//! second, then stops and refuses to move the piece again until it is released.
//!
//! ```text
//!            stage1             stage2
//! Unstaged ----------> Partly ----------> Staged
//!     ^                                      |
//!     +---------------- release -------------+
//! ```
//!
//! The second beam is authoritative: a trip on stage2 alone stages the piece.

use log::debug;

use crate::config::StagingConfig;
use crate::hw::SensorSnapshot;

/// How far a piece has travelled through the end effector.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum StagingState {
    Unstaged,
    PartlyStaged,
    Staged,
}

impl StagingState {
    /// State implied by the two beams alone.
    pub fn observed(stage1: bool, stage2: bool) -> Self {
        if stage2 {
            StagingState::Staged
        } else if stage1 {
            StagingState::PartlyStaged
        } else {
            StagingState::Unstaged
        }
    }

    /// Intake transition. Never moves backwards.
    pub fn advance(self, stage1: bool, stage2: bool) -> Self {
        self.max(Self::observed(stage1, stage2))
    }

    pub fn name(self) -> &'static str {
        match self {
            StagingState::Unstaged => "UNSTAGED",
            StagingState::PartlyStaged => "PARTLY STAGED",
            StagingState::Staged => "STAGED",
        }
    }
}

/// What the rollers are asked to do this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StagingDirective {
    Stop,
    Intake,
    Release,
    Manual(f32),
}

/// Outputs for the two end-effector rollers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RollerOutput {
    pub first: f32,
    pub second: f32,
}

/// End-effector staging controller.
pub struct Staging {
    config: StagingConfig,
    state: StagingState,
    last_speed: f32,
}

impl Staging {
    pub fn new(config: StagingConfig) -> Self {
        Self {
            config,
            state: StagingState::Unstaged,
            last_speed: 0.0,
        }
    }

    /// Pull a piece in. Returns the roller speed (positive = inward).
    pub fn intake(&mut self, stage1: bool, stage2: bool) -> f32 {
        if self.is_loaded() {
            return self.emit(0.0);
        }

        let next = self.state.advance(stage1, stage2);
        if next != self.state {
            debug!("staging: {} -> {}", self.state.name(), next.name());
            self.state = next;
        }

        let speed = match self.state {
            StagingState::Unstaged => self.config.fast_pull_speed,
            StagingState::PartlyStaged => self.config.slow_pull_speed,
            StagingState::Staged => 0.0,
        };
        self.emit(speed)
    }

    /// Eject whatever is in the end effector and forget it.
    pub fn release(&mut self) -> f32 {
        if self.state != StagingState::Unstaged {
            debug!("staging: {} -> {} (release)", self.state.name(), StagingState::Unstaged.name());
        }
        self.state = StagingState::Unstaged;
        self.emit(self.config.release_speed)
    }

    pub fn stop(&mut self) -> f32 {
        self.emit(0.0)
    }

    /// Open-loop roller override. Leaves the staging state alone.
    pub fn manual_shift(&mut self, speed: f32) -> f32 {
        self.emit(speed)
    }

    /// Evaluate one directive against this tick's beams.
    pub fn apply(&mut self, directive: StagingDirective, sensors: &SensorSnapshot) -> f32 {
        match directive {
            StagingDirective::Stop => self.stop(),
            StagingDirective::Intake => self.intake(sensors.stage1, sensors.stage2),
            StagingDirective::Release => self.release(),
            StagingDirective::Manual(speed) => self.manual_shift(speed),
        }
    }

    fn emit(&mut self, speed: f32) -> f32 {
        self.last_speed = if speed.is_nan() {
            0.0
        } else {
            speed.clamp(-1.0, 1.0)
        };
        self.last_speed
    }

    /// Split the last roller speed across the two rollers.
    pub fn outputs(&self) -> RollerOutput {
        let second = if self.config.second_roller_inverted {
            -self.last_speed
        } else {
            self.last_speed
        };
        RollerOutput {
            first: self.last_speed,
            second,
        }
    }

    #[inline]
    pub fn state(&self) -> StagingState {
        self.state
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.state == StagingState::Staged
    }

    #[inline]
    pub fn past_stage1(&self) -> bool {
        self.state >= StagingState::PartlyStaged
    }
}
