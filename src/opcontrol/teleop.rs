// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Button-to-mechanism mapping for the driver-controlled period.
//!
//! | Input | Action |
//! | ----- | ------ |
//! | Gamepad 1 D-pad up / down | elevator manual up / down |
//! | Gamepad 1 start (press) | elevator homing |
//! | Gamepad 2 D-pad down / left / up / right | elevator L1 / L2 / L3 / L4 |
//! | Gamepad 2 A | elevator home preset |
//! | Gamepad 1 right / left bumper | intake / release |
//! | Gamepad 2 right / left bumper | rollers manual in / out |
//! | Gamepad 1 A / B | algae grabber in / out |
//! | Gamepad 1 X / Y | algae arm up / down |
//! | Gamepad 1 triggers | drive speed level |
//! | Gamepad 1 right / left stick button | aim / range on the target |

use crate::config::RobotConfig;
use crate::control::{AlgaeRequest, Position, StagingDirective};
use crate::drive::{AssistMode, CommandVector, SpeedLevel};
use crate::opcontrol::{DPad, DriveScheme, Edge, OperatorInput};

/// Elevator request from the sticks this tick. `None` means "no new request".
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ElevatorRequest {
    None,
    Manual(f32),
    Preset(Position),
    Home,
}

/// Everything the operators asked for this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TeleopIntent {
    pub elevator: ElevatorRequest,
    pub staging: StagingDirective,
    pub algae: AlgaeRequest,
    pub drive: CommandVector,
    pub assist: AssistMode,
}

/// Stateful mapper. Holds the edge detectors that need to survive between ticks.
#[derive(Default)]
pub struct TeleopMapper {
    home_button: Edge,
}

impl TeleopMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat edge-triggered buttons as held, so one held across a mode switch does not fire.
    pub fn reset(&mut self) {
        self.home_button.reset(true);
    }

    pub fn map(&mut self, input: &OperatorInput, config: &RobotConfig) -> TeleopIntent {
        TeleopIntent {
            elevator: self.elevator(input, config),
            staging: staging(input, config),
            algae: AlgaeRequest {
                grab_in: input.driver.a,
                grab_out: input.driver.b,
                arm_up: input.driver.x,
                arm_down: input.driver.y,
            },
            drive: drive(input, config),
            assist: AssistMode::from_buttons(
                input.driver.right_stick_button,
                input.driver.left_stick_button,
            ),
        }
    }

    fn elevator(&mut self, input: &OperatorInput, config: &RobotConfig) -> ElevatorRequest {
        let home_pressed = self.home_button.rising(input.driver.start);

        match input.driver.dpad() {
            Some(DPad::Up) => return ElevatorRequest::Manual(config.elevator.manual_up_speed),
            Some(DPad::Down) => return ElevatorRequest::Manual(config.elevator.manual_down_speed),
            _ => {}
        }
        if home_pressed {
            return ElevatorRequest::Home;
        }
        let preset = match input.operator.dpad() {
            Some(DPad::Down) => Some(Position::L1),
            Some(DPad::Left) => Some(Position::L2),
            Some(DPad::Up) => Some(Position::L3),
            Some(DPad::Right) => Some(Position::L4),
            None if input.operator.a => Some(Position::Home),
            None => None,
        };
        preset.map_or(ElevatorRequest::None, ElevatorRequest::Preset)
    }
}

fn staging(input: &OperatorInput, config: &RobotConfig) -> StagingDirective {
    if input.driver.right_bumper {
        StagingDirective::Intake
    } else if input.driver.left_bumper {
        StagingDirective::Release
    } else if input.operator.right_bumper {
        StagingDirective::Manual(config.staging.manual_speed)
    } else if input.operator.left_bumper {
        StagingDirective::Manual(-config.staging.manual_speed)
    } else {
        StagingDirective::Stop
    }
}

fn drive(input: &OperatorInput, config: &RobotConfig) -> CommandVector {
    let level = SpeedLevel::from_triggers(
        input.driver.left_trigger_pressed(&config.drive),
        input.driver.right_trigger_pressed(&config.drive),
    );
    let (forward, rotation) = match input.scheme {
        DriveScheme::SingleController => (-input.driver.left_y, input.driver.right_x),
        DriveScheme::DualController => (-input.operator.left_y, input.operator.right_x),
        DriveScheme::Joystick => (input.joystick.axis(0), input.joystick.axis(1)),
    };
    CommandVector::new(forward, rotation, level.scale(&config.drive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcontrol::Gamepad;

    fn map(mapper: &mut TeleopMapper, input: &OperatorInput) -> TeleopIntent {
        mapper.map(input, &RobotConfig::default())
    }

    #[test]
    fn idle_input_requests_nothing() {
        let mut mapper = TeleopMapper::new();
        let intent = map(&mut mapper, &OperatorInput::default());
        assert_eq!(intent.elevator, ElevatorRequest::None);
        assert_eq!(intent.staging, StagingDirective::Stop);
        assert_eq!(intent.algae, AlgaeRequest::default());
        assert_eq!(intent.assist, AssistMode::Off);
        assert_eq!(intent.drive, CommandVector::new(0.0, 0.0, 0.7));
    }

    #[test]
    fn operator_dpad_selects_presets() {
        let mut mapper = TeleopMapper::new();
        for (pov, position) in [
            (180, Position::L1),
            (270, Position::L2),
            (0, Position::L3),
            (90, Position::L4),
        ] {
            let input = OperatorInput {
                operator: Gamepad {
                    pov: Some(pov),
                    ..Gamepad::default()
                },
                ..OperatorInput::default()
            };
            assert_eq!(map(&mut mapper, &input).elevator, ElevatorRequest::Preset(position));
        }
    }

    #[test]
    fn manual_beats_presets() {
        let mut mapper = TeleopMapper::new();
        let input = OperatorInput {
            driver: Gamepad {
                pov: Some(0),
                ..Gamepad::default()
            },
            operator: Gamepad {
                a: true,
                ..Gamepad::default()
            },
            ..OperatorInput::default()
        };
        assert_eq!(map(&mut mapper, &input).elevator, ElevatorRequest::Manual(0.4));
    }

    #[test]
    fn home_fires_once_per_press() {
        let mut mapper = TeleopMapper::new();
        let held = OperatorInput {
            driver: Gamepad {
                start: true,
                ..Gamepad::default()
            },
            ..OperatorInput::default()
        };
        assert_eq!(map(&mut mapper, &held).elevator, ElevatorRequest::Home);
        assert_eq!(map(&mut mapper, &held).elevator, ElevatorRequest::None);
        map(&mut mapper, &OperatorInput::default());
        assert_eq!(map(&mut mapper, &held).elevator, ElevatorRequest::Home);
    }

    #[test]
    fn reset_swallows_held_home_button() {
        let mut mapper = TeleopMapper::new();
        let held = OperatorInput {
            driver: Gamepad {
                start: true,
                ..Gamepad::default()
            },
            ..OperatorInput::default()
        };
        mapper.reset();
        assert_eq!(map(&mut mapper, &held).elevator, ElevatorRequest::None);
        map(&mut mapper, &OperatorInput::default());
        assert_eq!(map(&mut mapper, &held).elevator, ElevatorRequest::Home);
    }

    #[test]
    fn bumpers_drive_staging() {
        let mut mapper = TeleopMapper::new();
        let mut input = OperatorInput::default();
        input.driver.right_bumper = true;
        input.driver.left_bumper = true;
        assert_eq!(map(&mut mapper, &input).staging, StagingDirective::Intake);
        input.driver.right_bumper = false;
        assert_eq!(map(&mut mapper, &input).staging, StagingDirective::Release);
        input.driver.left_bumper = false;
        input.operator.left_bumper = true;
        assert_eq!(map(&mut mapper, &input).staging, StagingDirective::Manual(-0.4));
    }

    #[test]
    fn drive_schemes_pick_their_device() {
        let mut mapper = TeleopMapper::new();
        let mut input = OperatorInput::default();
        input.driver.left_y = -0.5;
        input.driver.right_x = 0.25;
        input.operator.left_y = 0.3;
        input.joystick.axes = [0.6, -0.1, 0.0, 0.0];
        input.driver.left_trigger = 1.0;

        let single = map(&mut mapper, &input).drive;
        assert_eq!(single, CommandVector::new(0.5, 0.25, 0.5));

        input.scheme = DriveScheme::DualController;
        assert_eq!(map(&mut mapper, &input).drive.forward, -0.3);

        input.scheme = DriveScheme::Joystick;
        let stick = map(&mut mapper, &input).drive;
        assert_eq!((stick.forward, stick.rotation), (0.6, -0.1));
    }

    #[test]
    fn stick_buttons_select_assist() {
        let mut mapper = TeleopMapper::new();
        let mut input = OperatorInput::default();
        input.driver.right_stick_button = true;
        assert_eq!(map(&mut mapper, &input).assist, AssistMode::Aim);
        input.driver.left_stick_button = true;
        assert_eq!(map(&mut mapper, &input).assist, AssistMode::AimAndRange);
    }
}
