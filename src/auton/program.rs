// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Autonomous programs as phase tables keyed on elapsed time.
//!
//! Each program is a list of [`Phase`]s with increasing start times. The first one starts at
//! 0.0 s and the last one is a steady "Finished" phase with every mechanism stopped, so any
//! `t >= 0` falls in exactly one phase.

use crate::control::{ElevatorDirective, Position, StagingDirective};
use crate::drive::CommandVector;

/// Label of the terminal phase of every program.
pub const FINISHED: &str = "Finished";
/// Label used when no known program was selected.
pub const SAFETY_FALLBACK: &str = "Safety Fallback";

/// One row of a phase table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phase {
    /// Elapsed time at which this phase takes over, in seconds.
    pub start: f32,
    pub label: &'static str,
    pub elevator: ElevatorDirective,
    pub staging: StagingDirective,
    pub drive: CommandVector,
}

impl Phase {
    const fn new(
        start: f32,
        label: &'static str,
        elevator: ElevatorDirective,
        staging: StagingDirective,
        drive: CommandVector,
    ) -> Self {
        Self {
            start,
            label,
            elevator,
            staging,
            drive,
        }
    }

    const fn finished(start: f32) -> Self {
        Self::new(
            start,
            FINISHED,
            ElevatorDirective::Hold,
            StagingDirective::Stop,
            CommandVector::STOPPED,
        )
    }
}

/// Safe commands for an unknown program: drive stopped, elevator held, rollers stopped.
pub const FALLBACK: Phase = Phase::new(
    0.0,
    SAFETY_FALLBACK,
    ElevatorDirective::Hold,
    StagingDirective::Stop,
    CommandVector::STOPPED,
);

const FORWARD: CommandVector = CommandVector::new(0.5, 0.0, 1.0);
const BACKWARD: CommandVector = CommandVector::new(-0.3, 0.0, 1.0);

const DEFAULT: [Phase; 2] = [
    Phase::new(
        0.0,
        "Driving Off Line",
        ElevatorDirective::Hold,
        StagingDirective::Stop,
        FORWARD,
    ),
    Phase::finished(2.0),
];

const SCORE_L3: [Phase; 6] = [
    Phase::new(
        0.0,
        "Driving to Reef",
        ElevatorDirective::Hold,
        StagingDirective::Stop,
        FORWARD,
    ),
    Phase::new(
        2.5,
        "Raising Elevator to L3",
        ElevatorDirective::Preset(Position::L3),
        StagingDirective::Stop,
        CommandVector::STOPPED,
    ),
    Phase::new(
        6.0,
        "Scoring Coral",
        ElevatorDirective::Preset(Position::L3),
        StagingDirective::Release,
        CommandVector::STOPPED,
    ),
    Phase::new(
        7.5,
        "Backing Away",
        ElevatorDirective::Preset(Position::L3),
        StagingDirective::Stop,
        BACKWARD,
    ),
    Phase::new(
        9.0,
        "Lowering Elevator",
        ElevatorDirective::Home,
        StagingDirective::Stop,
        CommandVector::STOPPED,
    ),
    Phase::finished(13.0),
];

const SCORE_L4: [Phase; 6] = [
    Phase::new(
        0.0,
        "Driving to Reef",
        ElevatorDirective::Hold,
        StagingDirective::Stop,
        FORWARD,
    ),
    Phase::new(
        2.5,
        "Raising Elevator to L4",
        ElevatorDirective::Preset(Position::L4),
        StagingDirective::Stop,
        CommandVector::STOPPED,
    ),
    Phase::new(
        7.0,
        "Scoring Coral",
        ElevatorDirective::Preset(Position::L4),
        StagingDirective::Release,
        CommandVector::STOPPED,
    ),
    Phase::new(
        8.5,
        "Backing Away",
        ElevatorDirective::Preset(Position::L4),
        StagingDirective::Stop,
        BACKWARD,
    ),
    Phase::new(
        10.0,
        "Lowering Elevator",
        ElevatorDirective::Home,
        StagingDirective::Stop,
        CommandVector::STOPPED,
    ),
    Phase::finished(14.0),
];

const DO_NOTHING: [Phase; 1] = [Phase::finished(0.0)];

/// Selectable autonomous programs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Program {
    Default,
    ScoreL3,
    ScoreL4,
    DoNothing,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Default,
        Program::ScoreL3,
        Program::ScoreL4,
        Program::DoNothing,
    ];

    /// Look a program up by its chooser name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|program| program.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Program::Default => "Default",
            Program::ScoreL3 => "ScoreL3",
            Program::ScoreL4 => "ScoreL4",
            Program::DoNothing => "DoNothing",
        }
    }

    pub fn phases(self) -> &'static [Phase] {
        match self {
            Program::Default => &DEFAULT,
            Program::ScoreL3 => &SCORE_L3,
            Program::ScoreL4 => &SCORE_L4,
            Program::DoNothing => &DO_NOTHING,
        }
    }

    /// Index of the phase active at `t`. Negative or NaN times map to the first phase.
    pub fn phase_index(self, t: f32) -> usize {
        let phases = self.phases();
        phases
            .iter()
            .rposition(|phase| phase.start <= t)
            .unwrap_or(0)
    }
}
