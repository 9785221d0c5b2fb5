// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Generic PID controller for closed-loop control.
//!
//! Works in `no_std` and does not allocate memory.

/// PID controller with tunable gains, integral anti-windup and output clamping.
#[derive(Clone, Debug)]
pub struct Pid {
    /// Proportional gain
    kp: f32,
    /// Integral gain
    ki: f32,
    /// Derivative gain
    kd: f32,

    /// Integrator state, already scaled by `ki`
    integral: f32,
    /// Last process variable (for derivative term)
    prev_measurement: f32,

    /// Output clamp
    out_min: f32,
    out_max: f32,

    /// Integral anti-windup clamp
    int_min: f32,
    int_max: f32,

    first_update: bool,
}

impl Pid {
    /// Create a new PID controller.
    ///
    /// `kp`, `ki`, `kd` are the gain constants. Output and integrator default to [-1, 1].
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,

            integral: 0.0,
            prev_measurement: 0.0,

            out_min: -1.0,
            out_max: 1.0,

            int_min: -1.0,
            int_max: 1.0,

            first_update: true,
        }
    }

    /// Set output limits.
    pub fn with_output_limits(mut self, min: f32, max: f32) -> Self {
        self.out_min = min;
        self.out_max = max;
        self
    }

    /// Set integral limits for anti-windup.
    pub fn with_integral_limits(mut self, min: f32, max: f32) -> Self {
        self.int_min = min;
        self.int_max = max;
        self
    }

    /// Reset integrator + derivative history.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_measurement = 0.0;
        self.first_update = true;
    }

    /// Current integrator contribution.
    #[inline]
    pub fn integral(&self) -> f32 {
        self.integral
    }

    /// Update the controller.
    ///
    /// `setpoint`: desired value
    /// `measurement`: current value
    /// `dt`: timestep in seconds (e.g. 0.02 for 50 Hz control loop)
    ///
    /// A non-positive `dt` only evaluates the P term and leaves the history untouched.
    ///
    /// Returns a normalized command in [`out_min`, `out_max`].
    pub fn update(&mut self, setpoint: f32, measurement: f32, dt: f32) -> f32 {
        let error = setpoint - measurement;
        let p = self.kp * error;

        if !(dt > 0.0) {
            return p.clamp(self.out_min, self.out_max);
        }

        self.integral = (self.integral + error * dt * self.ki).clamp(self.int_min, self.int_max);
        let i = self.integral;

        // Derivative on measurement, so setpoint steps do not kick the output.
        let d = if self.first_update {
            self.first_update = false;
            0.0
        } else {
            self.kd * ((self.prev_measurement - measurement) / dt)
        };
        self.prev_measurement = measurement;

        let out = p + i + d;
        if out.is_nan() {
            return 0.0;
        }
        out.clamp(self.out_min, self.out_max)
    }
}
