// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Robot Control Core
//!
//! [`Robot`] owns every mechanism controller and is driven by an outer scheduler that calls
//! exactly one tick method per loop period:
//!
//! | Mode | Entry | Per period |
//! | ---- | ----- | ---------- |
//! | Disabled | [`disabled_init`](Robot::disabled_init) | [`disabled_tick`](Robot::disabled_tick) |
//! | Autonomous | [`autonomous_init`](Robot::autonomous_init) | [`autonomous_tick`](Robot::autonomous_tick) |
//! | Teleop | [`teleop_init`](Robot::teleop_init) | [`teleop_tick`](Robot::teleop_tick) |
//!
//! Every tick reads the sensors once, builds one [`CommandFrame`] holding a value for every
//! [`Channel`], writes it to the [`ActuatorDriver`] and feeds the driver's safety watchdog.
//! There is no path through a tick that skips the feed.

use log::{debug, info, warn};

use crate::auton::AutoSequencer;
use crate::config::RobotConfig;
use crate::control::{Algae, Elevator, ElevatorDirective, Staging};
use crate::drive::{assist, Drive};
use crate::error::ConfigError;
use crate::hw::{ActuatorDriver, Channel, SensorSnapshot, Sensors};
use crate::opcontrol::{Edge, ElevatorRequest, OperatorInput, TeleopMapper};
use crate::status::{Blinker, Status, StatusDisplay};
use crate::telemetry::Telemetry;

/// Operating mode selected by the outer scheduler.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Disabled,
    Autonomous,
    Teleop,
}

/// One normalized value per actuator channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CommandFrame {
    values: [f32; Channel::COUNT],
}

impl CommandFrame {
    pub const STOPPED: CommandFrame = CommandFrame {
        values: [0.0; Channel::COUNT],
    };

    /// Store a value, clamped to [-1, 1]. NaN is stored as 0.
    pub fn set(&mut self, channel: Channel, value: f32) {
        self.values[channel.index()] = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> f32 {
        self.values[channel.index()]
    }
}

impl Default for CommandFrame {
    fn default() -> Self {
        Self::STOPPED
    }
}

/// The control core.
pub struct Robot<D, S, L>
where
    D: ActuatorDriver,
    S: Sensors,
    L: StatusDisplay,
{
    config: RobotConfig,
    driver: D,
    sensors: S,
    display: L,

    elevator: Elevator,
    staging: Staging,
    algae: Algae,
    drive: Drive,

    mapper: TeleopMapper,
    auton: Option<AutoSequencer>,
    blinker: Blinker<Status>,
    loaded_edge: Edge,

    mode: Mode,
    driver_station_attached: bool,
    snapshot: SensorSnapshot,
    frame: CommandFrame,
}

impl<D, S, L> Robot<D, S, L>
where
    D: ActuatorDriver,
    S: Sensors,
    L: StatusDisplay,
{
    /// Validate `config` and build the core in Disabled mode.
    ///
    /// The elevator is assumed to rest on its hard stop at power-on, so the current encoder
    /// count becomes the home reference.
    pub fn new(
        config: RobotConfig,
        driver: D,
        mut sensors: S,
        display: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let snapshot = sensors.read();
        let mut elevator = Elevator::new(config.elevator);
        elevator.assume_home(snapshot.elevator_ticks);

        Ok(Self {
            elevator,
            staging: Staging::new(config.staging),
            algae: Algae::new(config.algae),
            drive: Drive::new(config.drive),

            mapper: TeleopMapper::new(),
            auton: None,
            blinker: Blinker::new(),
            loaded_edge: Edge::default(),

            mode: Mode::Disabled,
            driver_station_attached: true,
            snapshot,
            frame: CommandFrame::STOPPED,

            config,
            driver,
            sensors,
            display,
        })
    }

    /// Report whether the driver station link is up. Shown as `Disconnect` on the lights.
    pub fn set_driver_station_attached(&mut self, attached: bool) {
        self.driver_station_attached = attached;
    }

    pub fn disabled_init(&mut self) {
        info!("robot: {:?} -> Disabled", self.mode);
        self.mode = Mode::Disabled;
        self.auton = None;
        self.elevator.reset_history();
        self.elevator.hold();
        self.blinker.cancel();
    }

    /// Every mechanism stopped.
    pub fn disabled_tick(&mut self) {
        self.read_sensors();
        self.elevator.rest();
        self.drive.stop();
        self.staging.stop();
        self.algae.stop();

        self.update_status(Status::Disabled);
        self.emit(CommandFrame::STOPPED);
    }

    /// Arm the named autonomous program. Unknown names run the safety fallback.
    pub fn autonomous_init(&mut self, program: &str) {
        info!("robot: {:?} -> Autonomous", self.mode);
        self.mode = Mode::Autonomous;
        self.elevator.reset_history();
        self.auton = Some(AutoSequencer::start(program));
    }

    /// Run the autonomous program at `t` seconds since autonomous start.
    pub fn autonomous_tick(&mut self, t: f32) {
        self.read_sensors();

        let sequencer = self.auton.get_or_insert_with(|| {
            warn!("robot: autonomous tick without autonomous_init, holding safe");
            AutoSequencer::with_program(None)
        });
        let phase = sequencer.tick(t);

        self.apply_elevator(phase.elevator);
        self.tick_elevator();
        self.staging.apply(phase.staging, &self.snapshot);
        self.algae.stop();
        self.drive.drive(phase.drive);

        self.update_status(Status::Autonomous);
        self.emit_mechanisms();
    }

    pub fn teleop_init(&mut self) {
        info!("robot: {:?} -> Teleop", self.mode);
        self.mode = Mode::Teleop;
        self.auton = None;
        self.elevator.reset_history();
        self.elevator.hold();
        self.mapper.reset();
        self.loaded_edge.reset(self.staging.is_loaded());
    }

    /// Map this tick's operator input onto the mechanisms.
    pub fn teleop_tick(&mut self, input: &OperatorInput) {
        self.read_sensors();
        let intent = self.mapper.map(input, &self.config);

        match intent.elevator {
            ElevatorRequest::Manual(speed) => self.elevator.manual_shift(speed),
            ElevatorRequest::Preset(position) => {
                self.elevator.request_preset(position);
            }
            ElevatorRequest::Home => self.elevator.home(),
            ElevatorRequest::None => {
                let latched = match self.elevator.directive() {
                    ElevatorDirective::Preset(_) => true,
                    ElevatorDirective::Home => !self.elevator.homing_complete(),
                    _ => false,
                };
                if !latched {
                    self.elevator.hold();
                }
            }
        }
        self.tick_elevator();

        self.staging.apply(intent.staging, &self.snapshot);
        let loaded = self.staging.is_loaded();
        if self.loaded_edge.rising(loaded) {
            let status = &self.config.status;
            self.blinker
                .start(Status::Loaded, status.loaded_flash_count, status.loaded_flash_period);
        }

        self.algae.command(intent.algae);

        let command = assist::assist(intent.drive, intent.assist, input.target, &self.config.drive);
        self.drive.drive(command);

        let idle = if loaded { Status::Ready } else { Status::Idle };
        self.update_status(idle);
        self.emit_mechanisms();
    }

    fn read_sensors(&mut self) {
        self.snapshot = self.sensors.read();
        self.elevator
            .observe(self.snapshot.elevator_ticks, self.snapshot.elevator_home);
    }

    fn apply_elevator(&mut self, directive: ElevatorDirective) {
        match directive {
            ElevatorDirective::Hold => self.elevator.hold(),
            ElevatorDirective::Manual(speed) => self.elevator.manual_shift(speed),
            ElevatorDirective::Preset(position) => {
                self.elevator.request_preset(position);
            }
            ElevatorDirective::Home => self.elevator.home(),
        }
    }

    fn tick_elevator(&mut self) {
        self.elevator.tick(
            self.snapshot.elevator_ticks,
            self.snapshot.elevator_home,
            self.config.loop_period,
        );
    }

    /// Pick the light status: link loss first, then a flash in progress, then the mode.
    fn update_status(&mut self, mode_status: Status) {
        let flashing = self.blinker.is_flashing();
        let flash = self.blinker.tick(self.config.loop_period);

        let status = if !self.driver_station_attached {
            Status::Disconnect
        } else if flashing {
            flash.unwrap_or(Status::Blank)
        } else {
            mode_status
        };
        if self.display.shown() != status {
            debug!("status: {}", status.name());
        }
        self.display.show(status);
    }

    fn emit_mechanisms(&mut self) {
        let mut frame = CommandFrame::STOPPED;

        let wheels = self.drive.output();
        frame.set(Channel::DriveLeft, wheels.left);
        frame.set(Channel::DriveRight, wheels.right);

        let elevator = self.elevator.motor_outputs();
        frame.set(Channel::ElevatorLeader, elevator.leader);
        frame.set(Channel::ElevatorFollower, elevator.follower);

        let rollers = self.staging.outputs();
        frame.set(Channel::RollerFirst, rollers.first);
        frame.set(Channel::RollerSecond, rollers.second);

        let algae = self.algae.output();
        frame.set(Channel::AlgaeGrabber, algae.grabber);
        frame.set(Channel::AlgaeArm, algae.arm);

        self.emit(frame);
    }

    /// Write every channel, then feed the watchdog.
    fn emit(&mut self, frame: CommandFrame) {
        self.frame = frame;
        for channel in Channel::ALL {
            self.driver.set(channel, frame.get(channel));
        }
        self.driver.feed();
    }

    pub fn telemetry(&self) -> Telemetry {
        let auton = self.auton.as_ref();
        Telemetry {
            mode: self.mode,
            driver_station_attached: self.driver_station_attached,

            drive_command: self.drive.command(),
            wheels: self.drive.output(),

            elevator_position: self.elevator.last_known(),
            elevator_target: self.elevator.target(),
            elevator_height: self.elevator.height(),
            elevator_raw_ticks: self.elevator.raw_ticks(),
            elevator_endstop: self.elevator.home_switch(),
            elevator_command: self.elevator.last_command(),
            elevator_integral: self.elevator.integral(),

            staging: self.staging.state(),
            loaded: self.staging.is_loaded(),

            status: self.display.shown(),
            flashing: self.blinker.is_flashing(),

            auto_program: auton.and_then(AutoSequencer::program),
            auto_phase: auton.map(AutoSequencer::phase_label),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last frame written to the driver.
    #[inline]
    pub fn frame(&self) -> &CommandFrame {
        &self.frame
    }

    #[inline]
    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    #[inline]
    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    #[inline]
    pub fn display(&self) -> &L {
        &self.display
    }

    /// Stop every channel directly, bypassing the mechanisms. Used on shutdown.
    pub fn stop_all(&mut self) {
        self.emit(CommandFrame::STOPPED);
    }
}
