// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Non-blocking blinker.
//!
//! Flashes a signal a fixed number of times by polling: each [`tick`](Blinker::tick) adds the
//! elapsed time and toggles once a full period has passed since the last toggle. A flash starts
//! "on", and every off→on boundary completes one cycle. After the last cycle the blinker goes
//! idle and reports blank.
//!
//! ```
//! use reefcore::status::Blinker;
//!
//! let mut blinker = Blinker::new();
//! assert!(blinker.start('*', 2, 0.5));
//! assert_eq!(blinker.tick(0.0), Some('*'));
//! assert_eq!(blinker.tick(0.5), None);
//! ```

use log::debug;

#[derive(Copy, Clone, Debug, PartialEq)]
enum BlinkState<S> {
    Idle,
    Flashing {
        signal: S,
        total: u8,
        completed: u8,
        period: f32,
        since_toggle: f32,
        on: bool,
    },
}

/// Poll-driven on/off sequencer for a signal of type `S`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blinker<S> {
    state: BlinkState<S>,
}

impl<S: Copy> Default for Blinker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy> Blinker<S> {
    pub fn new() -> Self {
        Self {
            state: BlinkState::Idle,
        }
    }

    /// Start flashing `signal` `total` times, toggling every `period` seconds.
    ///
    /// No-op (returns false) while already flashing, or for zero flashes / non-positive period.
    pub fn start(&mut self, signal: S, total: u8, period: f32) -> bool {
        if self.is_flashing() || total == 0 || !(period > 0.0) {
            return false;
        }
        debug!("blinker: {} flashes every {}s", total, period);
        self.state = BlinkState::Flashing {
            signal,
            total,
            completed: 0,
            period,
            since_toggle: 0.0,
            on: true,
        };
        true
    }

    /// Advance by `dt` seconds. Returns the signal while it is shown, `None` when blank.
    pub fn tick(&mut self, dt: f32) -> Option<S> {
        let BlinkState::Flashing {
            signal,
            total,
            completed,
            period,
            since_toggle,
            on,
        } = &mut self.state
        else {
            return None;
        };

        if dt > 0.0 {
            *since_toggle += dt;
        }
        if *since_toggle >= *period {
            *since_toggle -= *period;
            *on = !*on;
            if *on {
                *completed += 1;
                if *completed >= *total {
                    self.state = BlinkState::Idle;
                    return None;
                }
            }
        }

        if *on {
            Some(*signal)
        } else {
            None
        }
    }

    /// Abort any flash in progress.
    pub fn cancel(&mut self) {
        self.state = BlinkState::Idle;
    }

    #[inline]
    pub fn is_flashing(&self) -> bool {
        matches!(self.state, BlinkState::Flashing { .. })
    }
}
