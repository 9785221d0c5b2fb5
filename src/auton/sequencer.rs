// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Elapsed-time phase machine for the autonomous period.
//!
//! A sequencer is created when autonomous starts and dropped when it ends. Phases only move
//! forward: a caller handing in an earlier `t` than before keeps the current phase.

use log::{info, warn};

use crate::auton::program::{Phase, Program, FALLBACK};

/// Drives one autonomous program.
#[derive(Clone, Debug)]
pub struct AutoSequencer {
    program: Option<Program>,
    phase_index: usize,
    phase: Phase,
}

impl AutoSequencer {
    /// Arm a program by name. Unknown names arm the safety fallback.
    pub fn start(name: &str) -> Self {
        let program = Program::from_name(name);
        match program {
            Some(program) => info!("auton: running {}", program.name()),
            None => warn!("auton: unknown program {:?}, holding safe", name),
        }
        Self::with_program(program)
    }

    pub fn with_program(program: Option<Program>) -> Self {
        let phase = program.map_or(FALLBACK, |program| program.phases()[0]);
        Self {
            program,
            phase_index: 0,
            phase,
        }
    }

    /// Phase active at elapsed time `t` (seconds since autonomous start).
    pub fn tick(&mut self, t: f32) -> Phase {
        let Some(program) = self.program else {
            return FALLBACK;
        };

        let index = program.phase_index(t).max(self.phase_index);
        if index != self.phase_index {
            self.phase_index = index;
            self.phase = program.phases()[index];
            info!("auton: {} at {}s", self.phase.label, t);
        }
        self.phase
    }

    #[inline]
    pub fn program(&self) -> Option<Program> {
        self.program
    }

    /// Label of the current phase.
    #[inline]
    pub fn phase_label(&self) -> &'static str {
        self.phase.label
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        match self.program {
            Some(program) => self.phase_index + 1 == program.phases().len(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auton::program::{FINISHED, SAFETY_FALLBACK};
    use crate::control::{ElevatorDirective, Position, StagingDirective};
    use crate::drive::CommandVector;

    #[test]
    fn starts_in_first_phase() {
        let sequencer = AutoSequencer::start("ScoreL3");
        assert_eq!(sequencer.program(), Some(Program::ScoreL3));
        assert_eq!(sequencer.phase_label(), "Driving to Reef");
        assert!(!sequencer.is_finished());
    }

    #[test]
    fn score_l3_at_four_seconds() {
        let mut sequencer = AutoSequencer::start("ScoreL3");
        let phase = sequencer.tick(4.0);
        assert_eq!(phase.label, "Raising Elevator to L3");
        assert_eq!(phase.drive, CommandVector::STOPPED);
        assert_eq!(phase.elevator, ElevatorDirective::Preset(Position::L3));
        assert_eq!(sequencer.phase_label(), "Raising Elevator to L3");
    }

    #[test]
    fn phases_never_move_backwards() {
        let mut sequencer = AutoSequencer::start("ScoreL3");
        sequencer.tick(6.5);
        assert_eq!(sequencer.tick(1.0).label, "Scoring Coral");
    }

    #[test]
    fn finishes_and_stays_finished() {
        let mut sequencer = AutoSequencer::start("Default");
        assert_eq!(sequencer.tick(1.0).label, "Driving Off Line");
        for t in [2.0, 15.0, 1.0e5] {
            let phase = sequencer.tick(t);
            assert_eq!(phase.label, FINISHED);
            assert_eq!(phase.drive, CommandVector::STOPPED);
        }
        assert!(sequencer.is_finished());
    }

    #[test]
    fn unknown_program_holds_safe() {
        let mut sequencer = AutoSequencer::start("Custom1");
        assert_eq!(sequencer.program(), None);
        for t in [0.0, 4.0, 100.0] {
            let phase = sequencer.tick(t);
            assert_eq!(phase.label, SAFETY_FALLBACK);
            assert_eq!(phase.drive, CommandVector::STOPPED);
            assert_eq!(phase.elevator, ElevatorDirective::Hold);
            assert_eq!(phase.staging, StagingDirective::Stop);
        }
    }

    #[test]
    fn do_nothing_is_finished_immediately() {
        let mut sequencer = AutoSequencer::start("DoNothing");
        assert_eq!(sequencer.tick(0.0).label, FINISHED);
        assert!(sequencer.is_finished());
    }
}
