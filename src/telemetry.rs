// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Read-only snapshot of the control core for an external publisher.

use crate::auton::Program;
use crate::control::{Position, StagingState};
use crate::drive::{CommandVector, WheelOutput};
use crate::robot::Mode;
use crate::status::Status;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub mode: Mode,
    pub driver_station_attached: bool,

    pub drive_command: CommandVector,
    pub wheels: WheelOutput,

    pub elevator_position: Position,
    pub elevator_target: Option<Position>,
    pub elevator_height: f32,
    pub elevator_raw_ticks: i32,
    pub elevator_endstop: bool,
    pub elevator_command: f32,
    /// Integrator contribution of the height loop.
    pub elevator_integral: f32,

    pub staging: StagingState,
    pub loaded: bool,

    pub status: Status,
    pub flashing: bool,

    /// Running autonomous program, `None` outside autonomous or for an unknown name.
    pub auto_program: Option<Program>,
    /// Current autonomous phase label, `None` outside autonomous.
    pub auto_phase: Option<&'static str>,
}
