// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Target-assisted steering from an external target tracker.
//!
//! The tracker reports the horizontal offset to the target (`tx`, degrees, positive = target
//! to the right) and the area it covers in the image (`ta`, percent, 0 = no target).

use crate::config::DriveConfig;
use crate::drive::CommandVector;
use crate::tools::{map_range, map_tx};

/// One tracker sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TargetReading {
    pub tx: f32,
    pub ta: f32,
}

impl TargetReading {
    #[inline]
    pub fn has_target(&self) -> bool {
        self.ta > 0.0
    }
}

/// Which axes the tracker takes over.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AssistMode {
    Off,
    Aim,
    Range,
    AimAndRange,
}

impl AssistMode {
    pub fn from_buttons(aim: bool, range: bool) -> Self {
        match (aim, range) {
            (true, true) => AssistMode::AimAndRange,
            (true, false) => AssistMode::Aim,
            (false, true) => AssistMode::Range,
            (false, false) => AssistMode::Off,
        }
    }
}

/// Rotation that turns the robot onto the target.
pub fn aim_rotation(tx: f32, config: &DriveConfig) -> f32 {
    let unmapped = (tx + config.aim_offset_deg) * config.aim_kp;
    let rotation = map_tx(unmapped) * config.aim_gain;
    if rotation.is_nan() {
        0.0
    } else {
        rotation.clamp(-1.0, 1.0)
    }
}

/// Forward speed that closes the distance until the target covers `desired_area`.
///
/// Zero without a target.
pub fn range_forward(ta: f32, config: &DriveConfig) -> f32 {
    if !(ta > 0.0) {
        return 0.0;
    }
    let k = config.range_kp;
    let error = config.desired_area - ta;
    map_range(error * k, -100.0 * k, 100.0 * k, -1.0, 1.0).clamp(-1.0, 1.0)
}

/// Replace the assisted axes of `command` with tracker-driven values.
pub fn assist(
    command: CommandVector,
    mode: AssistMode,
    reading: Option<TargetReading>,
    config: &DriveConfig,
) -> CommandVector {
    let Some(reading) = reading.filter(TargetReading::has_target) else {
        return command;
    };
    let mut assisted = command;
    if matches!(mode, AssistMode::Aim | AssistMode::AimAndRange) {
        assisted.rotation = aim_rotation(reading.tx, config);
    }
    if matches!(mode, AssistMode::Range | AssistMode::AimAndRange) {
        assisted.forward = range_forward(reading.ta, config);
    }
    assisted
}
