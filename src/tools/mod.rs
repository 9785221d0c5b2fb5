// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Small numeric helpers shared by the controllers.

pub mod range;

pub use range::{map_range, map_tx};
