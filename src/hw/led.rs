// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single digital output line (status LED or LED-controller input bit).

use embedded_hal::digital::OutputPin;

/// Whether a line is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Translate an electrical level into the logical state.
    #[inline]
    pub fn is_active(self, pin_high: bool) -> bool {
        match self {
            ActiveLevel::High => pin_high,
            ActiveLevel::Low => !pin_high,
        }
    }
}

/// Output line that remembers its active level and last commanded state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the line logically ON (true) or OFF (false).
    ///
    /// Pin errors are dropped; the remembered state follows the request either way.
    pub fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Output pin that records its electrical level.
    #[derive(Default)]
    pub(crate) struct FakePin {
        pub(crate) high: bool,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn active_low_starts_off_with_pin_high() {
        let led = Led::active_low(FakePin::default());
        assert!(!led.is_on());
        assert!(led.free().high);
    }

    #[test]
    fn active_high_follows_logical_state() {
        let mut led = Led::active_high(FakePin::default());
        led.on();
        assert!(led.is_on());
        led.toggle();
        assert!(!led.is_on());
        assert!(!led.free().high);
    }

    #[test]
    fn active_low_inverts_level() {
        let mut led = Led::active_low(FakePin::default());
        led.on();
        assert!(!led.free().high);
    }
}
