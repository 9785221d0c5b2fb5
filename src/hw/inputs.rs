// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! [`Sensors`] implementation over `embedded-hal` input pins.
//!
//! The break beams and the home switch are plain digital inputs. The elevator encoder is read
//! through a closure so any counter (timer in encoder mode, CAN-reported position, ...) can feed
//! it.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::hw::{ActiveLevel, SensorSnapshot, Sensors};

/// Digital input with an active level.
pub struct DigitalInput<PIN: InputPin> {
    pin: PIN,
    active: ActiveLevel,
    name: &'static str,
}

impl<PIN: InputPin> DigitalInput<PIN> {
    pub fn new(pin: PIN, active: ActiveLevel, name: &'static str) -> Self {
        Self { pin, active, name }
    }

    /// Logical state. A failed read counts as inactive.
    pub fn is_active(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.active.is_active(high),
            Err(e) => {
                warn!("{} read failed: {:?}", self.name, e.kind());
                false
            }
        }
    }
}

/// Sensor bank built from three digital inputs and an encoder reader.
pub struct PinSensors<S1, S2, H, ReadTicks>
where
    S1: InputPin,
    S2: InputPin,
    H: InputPin,
    ReadTicks: FnMut() -> i32,
{
    stage1: DigitalInput<S1>,
    stage2: DigitalInput<S2>,
    home: DigitalInput<H>,
    read_ticks: ReadTicks,
}

impl<S1, S2, H, ReadTicks> PinSensors<S1, S2, H, ReadTicks>
where
    S1: InputPin,
    S2: InputPin,
    H: InputPin,
    ReadTicks: FnMut() -> i32,
{
    /// Break beams report a broken beam as active-low, the home switch closes to ground.
    pub fn new(stage1: S1, stage2: S2, home: H, read_ticks: ReadTicks) -> Self {
        Self::with_levels(
            stage1,
            stage2,
            home,
            read_ticks,
            ActiveLevel::Low,
            ActiveLevel::Low,
        )
    }

    pub fn with_levels(
        stage1: S1,
        stage2: S2,
        home: H,
        read_ticks: ReadTicks,
        beam_level: ActiveLevel,
        home_level: ActiveLevel,
    ) -> Self {
        Self {
            stage1: DigitalInput::new(stage1, beam_level, "stage1 beam"),
            stage2: DigitalInput::new(stage2, beam_level, "stage2 beam"),
            home: DigitalInput::new(home, home_level, "elevator home switch"),
            read_ticks,
        }
    }
}

impl<S1, S2, H, ReadTicks> Sensors for PinSensors<S1, S2, H, ReadTicks>
where
    S1: InputPin,
    S2: InputPin,
    H: InputPin,
    ReadTicks: FnMut() -> i32,
{
    fn read(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            stage1: self.stage1.is_active(),
            stage2: self.stage2.is_active(),
            elevator_home: self.home.is_active(),
            elevator_ticks: (self.read_ticks)(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct Level(bool);

    impl ErrorType for Level {
        type Error = ErrorKind;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    struct Broken;

    impl ErrorType for Broken {
        type Error = ErrorKind;
    }

    impl InputPin for Broken {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn active_low_beams_read_broken_when_pulled_low() {
        let mut sensors = PinSensors::new(Level(false), Level(true), Level(false), || 1234);
        let snapshot = sensors.read();
        assert!(snapshot.stage1);
        assert!(!snapshot.stage2);
        assert!(snapshot.elevator_home);
        assert_eq!(snapshot.elevator_ticks, 1234);
    }

    #[test]
    fn active_high_levels_pass_through() {
        let mut sensors = PinSensors::with_levels(
            Level(true),
            Level(false),
            Level(false),
            || -5,
            ActiveLevel::High,
            ActiveLevel::High,
        );
        let snapshot = sensors.read();
        assert!(snapshot.stage1);
        assert!(!snapshot.stage2);
        assert!(!snapshot.elevator_home);
        assert_eq!(snapshot.elevator_ticks, -5);
    }

    #[test]
    fn failed_read_counts_as_inactive() {
        let mut sensors = PinSensors::new(Broken, Broken, Broken, || 0);
        assert_eq!(sensors.read(), SensorSnapshot::default());
    }

    #[test]
    fn encoder_closure_is_polled_every_read() {
        let mut count = 0;
        let mut sensors = PinSensors::new(Level(true), Level(true), Level(true), || {
            count += 10;
            count
        });
        assert_eq!(sensors.read().elevator_ticks, 10);
        assert_eq!(sensors.read().elevator_ticks, 20);
    }
}
