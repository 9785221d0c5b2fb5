// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Robot configuration.
//!
//! Every tunable constant of the control core lives here. The `Default` impls hold the values
//! calibrated on the competition robot; the `with_*` helpers override single groups:
//!
//! ```
//! use reefcore::config::{ElevatorConfig, RobotConfig};
//!
//! let config = RobotConfig::default()
//!     .with_elevator(ElevatorConfig::default().with_gains(1.2, 0.8, 0.0))
//!     .with_loop_period(0.01);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;

/// Elevator calibration, gains and limits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    /// Encoder counts per normalized height unit.
    pub counts_per_unit: f32,

    /// PID gains.
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    /// Symmetric clamp on the integrator contribution.
    pub integral_limit: f32,

    /// Open-loop bias that cancels the carriage weight (positive = up).
    pub gravity_bias: f32,

    /// Output band applied after the gravity bias. `max_down <= 0 <= max_up`.
    pub max_down: f32,
    pub max_up: f32,

    /// Band on the closed-loop correction (command minus gravity bias) that counts as settled.
    pub settle_band: f32,
    /// Height error that counts as arrived.
    pub on_target_tolerance: f32,

    /// Above this height homing descends in closed loop, below it creeps open loop.
    pub homing_threshold: f32,
    /// Open-loop homing creep speed (negative = down).
    pub homing_creep_speed: f32,

    /// Operator manual speeds.
    pub manual_up_speed: f32,
    pub manual_down_speed: f32,

    /// Motor wiring: positive command drives the carriage down when set.
    pub motor_inverted: bool,
    /// The follower gearbox is mirrored relative to the leader.
    pub follower_inverted: bool,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            counts_per_unit: 8192.0,

            kp: 1.0,
            ki: 0.9,
            kd: 0.0,
            integral_limit: 0.5,

            gravity_bias: 0.07,

            max_down: -0.5,
            max_up: 1.0,

            settle_band: 0.05,
            on_target_tolerance: 0.02,

            homing_threshold: 0.1,
            homing_creep_speed: -0.05,

            manual_up_speed: 0.4,
            manual_down_speed: -0.2,

            motor_inverted: true,
            follower_inverted: true,
        }
    }
}

impl ElevatorConfig {
    pub fn with_gains(mut self, kp: f32, ki: f32, kd: f32) -> Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }

    pub fn with_gravity_bias(mut self, bias: f32) -> Self {
        self.gravity_bias = bias;
        self
    }

    pub fn with_output_band(mut self, max_down: f32, max_up: f32) -> Self {
        self.max_down = max_down;
        self.max_up = max_up;
        self
    }

    pub fn with_counts_per_unit(mut self, counts: f32) -> Self {
        self.counts_per_unit = counts;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.counts_per_unit > 0.0) {
            return Err(ConfigError::CountsPerUnit(self.counts_per_unit));
        }
        finite("elevator kp", self.kp)?;
        finite("elevator ki", self.ki)?;
        finite("elevator kd", self.kd)?;
        non_negative("elevator integral limit", self.integral_limit)?;

        let band_ok = self.max_down >= -1.0
            && self.max_down <= 0.0
            && self.max_up >= 0.0
            && self.max_up <= 1.0;
        if !band_ok {
            return Err(ConfigError::OutputBand {
                min: self.max_down,
                max: self.max_up,
            });
        }
        if !(self.gravity_bias >= self.max_down && self.gravity_bias <= self.max_up) {
            return Err(ConfigError::GravityBias(self.gravity_bias));
        }

        non_negative("elevator settle band", self.settle_band)?;
        non_negative("elevator on-target tolerance", self.on_target_tolerance)?;
        non_negative("elevator homing threshold", self.homing_threshold)?;
        speed("elevator homing creep speed", self.homing_creep_speed)?;
        speed("elevator manual up speed", self.manual_up_speed)?;
        speed("elevator manual down speed", self.manual_down_speed)
    }
}

/// End-effector roller speeds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StagingConfig {
    /// Pull speed while nothing has reached the first beam.
    pub fast_pull_speed: f32,
    /// Pull speed once the piece is past the first beam.
    pub slow_pull_speed: f32,
    /// Ejection speed (negative = reverse).
    pub release_speed: f32,
    /// Operator manual roller speed.
    pub manual_speed: f32,
    /// The second roller is mounted mirrored and runs against the first.
    pub second_roller_inverted: bool,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            fast_pull_speed: 0.5,
            slow_pull_speed: 0.2,
            release_speed: -0.3,
            manual_speed: 0.4,
            second_roller_inverted: true,
        }
    }
}

impl StagingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        speed("staging fast pull speed", self.fast_pull_speed)?;
        speed("staging slow pull speed", self.slow_pull_speed)?;
        speed("staging release speed", self.release_speed)?;
        speed("staging manual speed", self.manual_speed)
    }
}

/// Drivetrain speed levels and target-assist gains.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriveConfig {
    pub speed_slow: f32,
    pub speed_normal: f32,
    pub speed_fast: f32,
    pub speed_max: f32,

    /// Analog trigger travel that counts as pressed.
    pub trigger_threshold: f32,
    /// Square stick inputs (sign preserved) for finer low-speed control.
    pub square_inputs: bool,

    /// Target assist: proportional gain on the horizontal offset, applied before mapping.
    pub aim_kp: f32,
    /// Target assist: gain applied to the mapped aim command.
    pub aim_gain: f32,
    /// Target assist: horizontal offset added to the tracker reading, in degrees.
    pub aim_offset_deg: f32,
    /// Target assist: proportional gain on the area error.
    pub range_kp: f32,
    /// Target assist: target area (percent of image) at which ranging stops.
    pub desired_area: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            speed_slow: 0.5,
            speed_normal: 0.7,
            speed_fast: 0.8,
            speed_max: 1.0,

            trigger_threshold: 0.5,
            square_inputs: true,

            aim_kp: 0.4,
            aim_gain: 10.0,
            aim_offset_deg: 0.0,
            range_kp: 0.1,
            desired_area: 40.0,
        }
    }
}

impl DriveConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        speed_level("slow", self.speed_slow)?;
        speed_level("normal", self.speed_normal)?;
        speed_level("fast", self.speed_fast)?;
        speed_level("max", self.speed_max)?;
        non_negative("drive trigger threshold", self.trigger_threshold)?;
        finite("drive aim kp", self.aim_kp)?;
        finite("drive aim gain", self.aim_gain)?;
        finite("drive aim offset", self.aim_offset_deg)?;
        // The ranging map divides by 200 * range_kp.
        if self.range_kp == 0.0 || !self.range_kp.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "drive range kp",
                value: self.range_kp,
            });
        }
        non_negative("drive desired area", self.desired_area)
    }
}

/// Algae mechanism open-loop speeds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AlgaeConfig {
    pub grabber_in_speed: f32,
    pub grabber_out_speed: f32,
    pub arm_up_speed: f32,
    pub arm_down_speed: f32,
}

impl Default for AlgaeConfig {
    fn default() -> Self {
        Self {
            grabber_in_speed: 0.6,
            grabber_out_speed: -0.6,
            arm_up_speed: 0.5,
            arm_down_speed: -0.3,
        }
    }
}

impl AlgaeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        speed("algae grabber in speed", self.grabber_in_speed)?;
        speed("algae grabber out speed", self.grabber_out_speed)?;
        speed("algae arm up speed", self.arm_up_speed)?;
        speed("algae arm down speed", self.arm_down_speed)
    }
}

/// LED notification timing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatusConfig {
    /// Number of flashes when a piece is first staged.
    pub loaded_flash_count: u8,
    /// Seconds between toggles while flashing.
    pub loaded_flash_period: f32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            loaded_flash_count: 3,
            loaded_flash_period: 0.3,
        }
    }
}

/// Full control-core configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RobotConfig {
    /// Scheduler period in seconds.
    pub loop_period: f32,
    pub elevator: ElevatorConfig,
    pub staging: StagingConfig,
    pub drive: DriveConfig,
    pub algae: AlgaeConfig,
    pub status: StatusConfig,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            loop_period: 0.02,
            elevator: ElevatorConfig::default(),
            staging: StagingConfig::default(),
            drive: DriveConfig::default(),
            algae: AlgaeConfig::default(),
            status: StatusConfig::default(),
        }
    }
}

impl RobotConfig {
    pub fn with_loop_period(mut self, seconds: f32) -> Self {
        self.loop_period = seconds;
        self
    }

    pub fn with_elevator(mut self, elevator: ElevatorConfig) -> Self {
        self.elevator = elevator;
        self
    }

    pub fn with_staging(mut self, staging: StagingConfig) -> Self {
        self.staging = staging;
        self
    }

    pub fn with_drive(mut self, drive: DriveConfig) -> Self {
        self.drive = drive;
        self
    }

    pub fn with_algae(mut self, algae: AlgaeConfig) -> Self {
        self.algae = algae;
        self
    }

    pub fn with_status(mut self, status: StatusConfig) -> Self {
        self.status = status;
        self
    }

    /// Check every group. Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.loop_period > 0.0) || !self.loop_period.is_finite() {
            return Err(ConfigError::LoopPeriod(self.loop_period));
        }
        self.elevator.validate()?;
        self.staging.validate()?;
        self.drive.validate()?;
        self.algae.validate()?;
        if !(self.status.loaded_flash_period > 0.0) {
            return Err(ConfigError::BlinkPeriod(self.status.loaded_flash_period));
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn speed(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Speed { name, value })
    }
}

fn speed_level(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::SpeedLevel { name, value })
    }
}
