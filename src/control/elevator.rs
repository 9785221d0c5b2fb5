// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Closed-loop height controller for the elevator.
//!
//! The elevator holds one standing [`ElevatorDirective`] and turns it into exactly one carriage
//! command per [`tick`](Elevator::tick). Directives change only through the operations below;
//! between changes the same directive keeps being evaluated, so there is always a command to
//! send to the motor controllers.
//!
//! | Operation | Directive | Output |
//! | --------- | --------- | ------ |
//! | [`hold`](Elevator::hold) | `Hold` | gravity bias |
//! | [`manual_shift`](Elevator::manual_shift) | `Manual(speed)` | `speed` (positive = up) |
//! | [`request_preset`](Elevator::request_preset) | `Preset(p)` | PID toward the preset setpoint + gravity bias |
//! | [`home`](Elevator::home) | `Home` | descent, creep, then zero on the limit switch |
//!
//! Typical usage pattern:
//!
//! ```
//! use reefcore::config::ElevatorConfig;
//! use reefcore::control::{Elevator, Position};
//!
//! let mut elevator = Elevator::new(ElevatorConfig::default());
//! elevator.assume_home(0);
//! elevator.request_preset(Position::L3);
//!
//! // once per scheduler period
//! let command = elevator.tick(0, false, 0.02);
//! assert!(command > 0.0);
//! ```

use log::{debug, info};

use crate::config::ElevatorConfig;
use crate::control::Pid;
use crate::motors::ElevatorMotor;

/// Named elevator positions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    Home,
    L1,
    L2,
    L3,
    L4,
    Unknown,
}

/// Preset setpoints in normalized height units.
const SETPOINTS: [(Position, f32); 5] = [
    (Position::Home, 0.1),
    (Position::L1, 0.2),
    (Position::L2, 0.17),
    (Position::L3, 0.55),
    (Position::L4, 1.1),
];

impl Position {
    /// Setpoint for a preset. `Unknown` has none.
    pub fn setpoint(self) -> Option<f32> {
        SETPOINTS
            .iter()
            .find(|(position, _)| *position == self)
            .map(|(_, setpoint)| *setpoint)
    }

    pub fn name(self) -> &'static str {
        match self {
            Position::Home => "HOME",
            Position::L1 => "L1",
            Position::L2 => "L2",
            Position::L3 => "L3",
            Position::L4 => "L4",
            Position::Unknown => "UNKNOWN",
        }
    }
}

/// What the elevator is currently asked to do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ElevatorDirective {
    Hold,
    Manual(f32),
    Preset(Position),
    Home,
}

/// Position bookkeeping, owned by the elevator and only changed through its operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElevatorState {
    /// Last position the carriage was confidently at.
    pub last_known: Position,
    /// Position currently being driven to.
    pub target: Option<Position>,
}

/// Elevator position controller.
pub struct Elevator {
    config: ElevatorConfig,
    motor: ElevatorMotor,
    pid: Pid,
    state: ElevatorState,
    directive: ElevatorDirective,

    raw_ticks: i32,
    height: f32,
    home_switch: bool,
    last_command: f32,
    /// Set once the current homing run has reached the switch.
    homed: bool,
}

impl Elevator {
    /// Create an elevator with no position reference. Presets are refused until it is homed.
    pub fn new(config: ElevatorConfig) -> Self {
        let pid = Pid::new(config.kp, config.ki, config.kd)
            .with_output_limits(
                config.max_down - config.gravity_bias,
                config.max_up - config.gravity_bias,
            )
            .with_integral_limits(-config.integral_limit, config.integral_limit);
        Self {
            motor: ElevatorMotor::new(&config),
            config,
            pid,
            state: ElevatorState {
                last_known: Position::Unknown,
                target: None,
            },
            directive: ElevatorDirective::Hold,

            raw_ticks: 0,
            height: 0.0,
            home_switch: false,
            last_command: 0.0,
            homed: false,
        }
    }

    /// Take the current encoder count as home without running the homing routine.
    ///
    /// Only valid when the carriage is known to rest on its hard stop (power-on).
    pub fn assume_home(&mut self, raw_ticks: i32) {
        self.motor.zero(raw_ticks);
        self.raw_ticks = raw_ticks;
        self.height = 0.0;
        self.state.last_known = Position::Home;
    }

    /// Drive toward a preset. Ignored while the position reference is unknown.
    ///
    /// Returns whether the request was accepted.
    pub fn request_preset(&mut self, position: Position) -> bool {
        if self.state.last_known == Position::Unknown {
            debug!("elevator: {} request ignored, position unknown", position.name());
            return false;
        }
        if position.setpoint().is_none() {
            return false;
        }
        if self.directive != ElevatorDirective::Preset(position) {
            self.pid.reset();
            self.directive = ElevatorDirective::Preset(position);
            self.state.target = Some(position);
        }
        true
    }

    /// Hold the carriage with gravity compensation.
    pub fn hold(&mut self) {
        self.directive = ElevatorDirective::Hold;
        self.state.target = None;
    }

    /// Open-loop override, positive = up.
    pub fn manual_shift(&mut self, speed: f32) {
        self.directive = ElevatorDirective::Manual(speed);
        self.state.target = None;
    }

    /// Run the homing routine until the limit switch engages.
    pub fn home(&mut self) {
        if self.directive != ElevatorDirective::Home {
            self.pid.reset();
            self.directive = ElevatorDirective::Home;
            self.state.target = Some(Position::Home);
            self.homed = false;
        }
    }

    /// Drop integrator/derivative history. Called on every mode transition.
    pub fn reset_history(&mut self) {
        self.pid.reset();
    }

    /// Record a zero command without evaluating the directive. Used while disabled.
    pub fn rest(&mut self) {
        self.last_command = 0.0;
    }

    /// Take new sensor readings without producing a command.
    pub fn observe(&mut self, raw_ticks: i32, home_switch: bool) {
        self.raw_ticks = raw_ticks;
        self.home_switch = home_switch;
        self.height = self.motor.height(raw_ticks);
    }

    /// Evaluate the standing directive and return the carriage command (positive = up).
    ///
    /// `raw_ticks` and `home_switch` are this tick's sensor readings, `dt` the loop period.
    pub fn tick(&mut self, raw_ticks: i32, home_switch: bool, dt: f32) -> f32 {
        self.observe(raw_ticks, home_switch);

        let command = match self.directive {
            ElevatorDirective::Hold => self.config.gravity_bias,
            ElevatorDirective::Manual(speed) => speed,
            ElevatorDirective::Preset(position) => self.track(position, dt),
            ElevatorDirective::Home => self.homing_step(dt),
        };

        self.last_command = if command.is_nan() {
            0.0
        } else {
            command.clamp(-1.0, 1.0)
        };
        self.last_command
    }

    /// Closed loop toward a setpoint, gravity bias added, clamped to the output band.
    fn closed_loop(&mut self, setpoint: f32, dt: f32) -> f32 {
        let correction = self.pid.update(setpoint, self.height, dt);
        (correction + self.config.gravity_bias).clamp(self.config.max_down, self.config.max_up)
    }

    fn track(&mut self, position: Position, dt: f32) -> f32 {
        let Some(setpoint) = position.setpoint() else {
            return self.config.gravity_bias;
        };
        let command = self.closed_loop(setpoint, dt);

        // Arrival needs both a settled correction and a small height error; the command alone
        // sits near the gravity bias whenever the carriage is merely stalled.
        let settled = (command - self.config.gravity_bias).abs() <= self.config.settle_band;
        let on_target = (setpoint - self.height).abs() <= self.config.on_target_tolerance;
        if settled && on_target && self.state.last_known != position {
            info!("elevator: reached {} at height {}", position.name(), self.height);
            self.state.last_known = position;
        }
        command
    }

    fn homing_step(&mut self, dt: f32) -> f32 {
        if !self.home_switch && self.height > self.config.homing_threshold {
            self.closed_loop(0.0, dt)
        } else if !self.home_switch {
            self.config.homing_creep_speed
        } else {
            if !self.homed {
                info!("elevator: homed, encoder zeroed at {} ticks", self.raw_ticks);
            }
            self.motor.zero(self.raw_ticks);
            self.height = 0.0;
            self.state.last_known = Position::Home;
            self.homed = true;
            0.0
        }
    }

    /// Split the last command into leader/follower motor outputs.
    #[inline]
    pub fn motor_outputs(&self) -> crate::motors::PairOutput {
        self.motor.outputs(self.last_command)
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn raw_ticks(&self) -> i32 {
        self.raw_ticks
    }

    #[inline]
    pub fn home_switch(&self) -> bool {
        self.home_switch
    }

    /// True once the current homing run has engaged the switch.
    #[inline]
    pub fn homing_complete(&self) -> bool {
        self.directive == ElevatorDirective::Home && self.homed
    }

    #[inline]
    pub fn last_known(&self) -> Position {
        self.state.last_known
    }

    #[inline]
    pub fn target(&self) -> Option<Position> {
        self.state.target
    }

    #[inline]
    pub fn state(&self) -> ElevatorState {
        self.state
    }

    #[inline]
    pub fn directive(&self) -> ElevatorDirective {
        self.directive
    }

    #[inline]
    pub fn last_command(&self) -> f32 {
        self.last_command
    }

    /// Integrator contribution of the height loop.
    #[inline]
    pub fn integral(&self) -> f32 {
        self.pid.integral()
    }

    #[inline]
    pub fn gravity_bias(&self) -> f32 {
        self.config.gravity_bias
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const COUNTS: f32 = 10_000.0;
    const DT: f32 = 0.02;

    /// Carriage whose velocity follows the command in excess of the gravity bias.
    pub(crate) struct Plant {
        pub(crate) height: f32,
        pub(crate) bias: f32,
        pub(crate) gain: f32,
    }

    impl Plant {
        pub(crate) fn new(height: f32, bias: f32) -> Self {
            Self {
                height,
                bias,
                gain: 2.0,
            }
        }

        pub(crate) fn ticks(&self) -> i32 {
            (self.height * COUNTS) as i32
        }

        pub(crate) fn switch(&self) -> bool {
            self.height <= 0.0
        }

        pub(crate) fn step(&mut self, command: f32, dt: f32) {
            self.height = (self.height + (command - self.bias) * self.gain * dt).max(0.0);
        }
    }

    fn config() -> ElevatorConfig {
        ElevatorConfig::default().with_counts_per_unit(COUNTS)
    }

    fn homed() -> Elevator {
        let mut elevator = Elevator::new(config());
        elevator.assume_home(0);
        elevator
    }

    #[test]
    fn setpoint_table() {
        assert_eq!(Position::Home.setpoint(), Some(0.1));
        assert_eq!(Position::L1.setpoint(), Some(0.2));
        assert_eq!(Position::L2.setpoint(), Some(0.17));
        assert_eq!(Position::L3.setpoint(), Some(0.55));
        assert_eq!(Position::L4.setpoint(), Some(1.1));
        assert_eq!(Position::Unknown.setpoint(), None);
    }

    #[test]
    fn preset_ignored_while_unknown_and_standing_command_continues() {
        let mut elevator = Elevator::new(config());
        elevator.manual_shift(0.3);
        assert!(!elevator.request_preset(Position::L2));
        assert_eq!(elevator.directive(), ElevatorDirective::Manual(0.3));
        assert_eq!(elevator.target(), None);
        assert_eq!(elevator.tick(0, false, DT), 0.3);
    }

    #[test]
    fn hold_outputs_gravity_bias() {
        let mut elevator = homed();
        elevator.hold();
        assert_eq!(elevator.tick(5000, false, DT), config().gravity_bias);
    }

    #[test]
    fn manual_shift_is_clamped() {
        let mut elevator = homed();
        elevator.manual_shift(3.0);
        assert_eq!(elevator.tick(0, false, DT), 1.0);
        elevator.manual_shift(f32::NAN);
        assert_eq!(elevator.tick(0, false, DT), 0.0);
    }

    #[test]
    fn preset_drives_up_from_below() {
        let mut elevator = homed();
        assert!(elevator.request_preset(Position::L3));
        assert_eq!(elevator.target(), Some(Position::L3));
        let command = elevator.tick(0, true, DT);
        assert!(command > config().gravity_bias);
    }

    #[test]
    fn output_clamped_for_any_finite_error() {
        let mut elevator = homed();
        elevator.request_preset(Position::L4);
        for ticks in [i32::MIN / 2, -1_000_000, 0, 1_000_000, i32::MAX / 2] {
            let command = elevator.tick(ticks, false, DT);
            assert!((-1.0..=1.0).contains(&command));
            assert!(command >= config().max_down && command <= config().max_up);
        }
    }

    #[test]
    fn settles_on_l3_from_half_height() {
        let mut elevator = homed();
        let mut plant = Plant::new(0.5, config().gravity_bias);
        elevator.tick(plant.ticks(), false, DT);
        assert!((elevator.height() - 0.5).abs() < 1e-3);
        elevator.request_preset(Position::L3);

        let mut reached = false;
        for _ in 0..1500 {
            let command = elevator.tick(plant.ticks(), plant.switch(), DT);
            plant.step(command, DT);
            if elevator.last_known() == Position::L3 {
                reached = true;
                break;
            }
        }
        assert!(reached);
        assert!((plant.height - 0.55).abs() <= config().on_target_tolerance + 1e-3);
        assert_eq!(elevator.target(), Some(Position::L3));
    }

    #[test]
    fn last_known_does_not_advance_while_far_from_target() {
        let mut elevator = homed();
        elevator.request_preset(Position::L4);
        // Carriage stalled at the bottom: the command never settles.
        for _ in 0..200 {
            elevator.tick(0, true, DT);
        }
        assert_eq!(elevator.last_known(), Position::Home);
    }

    #[test]
    fn homing_descends_strictly_then_zeroes_on_switch() {
        let mut elevator = Elevator::new(config());
        let mut plant = Plant::new(0.8, config().gravity_bias);
        elevator.home();
        assert_eq!(elevator.target(), Some(Position::Home));

        let mut previous = f32::MAX;
        let mut engaged = false;
        for _ in 0..5000 {
            let switch = plant.switch();
            let command = elevator.tick(plant.ticks(), switch, DT);
            if switch {
                assert_eq!(command, 0.0);
                engaged = true;
                break;
            }
            assert!(elevator.height() < previous);
            previous = elevator.height();
            plant.step(command, DT);
        }
        assert!(engaged);
        assert_eq!(elevator.height(), 0.0);
        assert_eq!(elevator.last_known(), Position::Home);
        assert!(elevator.homing_complete());
    }

    #[test]
    fn homing_creeps_below_threshold() {
        let mut elevator = Elevator::new(config());
        elevator.home();
        let ticks = (0.05 * COUNTS) as i32;
        assert_eq!(elevator.tick(ticks, false, DT), config().homing_creep_speed);
    }

    #[test]
    fn homing_zeroes_reference_at_switch() {
        let mut elevator = Elevator::new(config());
        elevator.home();
        assert_eq!(elevator.tick(1234, true, DT), 0.0);
        assert_eq!(elevator.height(), 0.0);
        // Same count now reads as zero, one more unit above it as 1.0.
        elevator.hold();
        elevator.tick(1234 + COUNTS as i32, false, DT);
        assert!((elevator.height() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn re_requesting_same_preset_keeps_history() {
        let mut elevator = homed();
        elevator.request_preset(Position::L2);
        elevator.tick(0, true, DT);
        let integral = elevator.integral();
        assert!(integral > 0.0);
        elevator.request_preset(Position::L2);
        assert_eq!(elevator.integral(), integral);
        elevator.request_preset(Position::L1);
        assert_eq!(elevator.integral(), 0.0);
    }

    #[test]
    fn homing_drops_tracking_history() {
        let mut elevator = homed();
        elevator.request_preset(Position::L3);
        for _ in 0..10 {
            elevator.tick(0, true, DT);
        }
        assert!(elevator.integral() > 0.0);
        elevator.home();
        assert_eq!(elevator.integral(), 0.0);
    }

    #[test]
    fn reset_history_clears_integral_but_keeps_directive() {
        let mut elevator = homed();
        elevator.request_preset(Position::L2);
        elevator.tick(0, true, DT);
        elevator.reset_history();
        assert_eq!(elevator.integral(), 0.0);
        assert_eq!(elevator.directive(), ElevatorDirective::Preset(Position::L2));
    }

    #[test]
    fn rest_zeroes_last_command() {
        let mut elevator = homed();
        elevator.manual_shift(0.6);
        elevator.tick(0, true, DT);
        elevator.rest();
        assert_eq!(elevator.last_command(), 0.0);
        assert_eq!(elevator.motor_outputs().leader, 0.0);
    }

    #[test]
    fn motor_outputs_follow_wiring() {
        let mut elevator = homed();
        elevator.manual_shift(0.4);
        elevator.tick(0, true, DT);
        let out = elevator.motor_outputs();
        assert_eq!(out.leader, -0.4);
        assert_eq!(out.follower, 0.4);
    }
}
