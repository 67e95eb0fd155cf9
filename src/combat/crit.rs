//! Critical-hit profile and roll resolution
//!
//! A crit is decided by a single uniform roll in [1,100] against a target
//! number derived from the rate. The comparison is strictly greater-than, so
//! rate 0.0 never crits (even on a roll of 100) and rate 1.0 always does.

use crate::core::constants::CRIT_ROLL_MAX;
use serde::{Deserialize, Serialize};

/// Per-character critical-hit settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CritProfile {
    /// Probability of a critical hit, in [0,1]
    pub rate: f64,
    /// Damage scalar applied on a crit, >= 1.0
    pub multiplier: f64,
}

impl Default for CritProfile {
    fn default() -> Self {
        Self {
            rate: 0.0,
            multiplier: 1.0,
        }
    }
}

/// Decide whether a roll in [1,100] is a critical hit at the given rate
///
/// The target number is `100 - floor(rate * 100)`; only rolls strictly above
/// it crit, putting the crit chance in the top `rate` fraction of the range.
pub fn is_critical(roll: u32, rate: f64) -> bool {
    let target = CRIT_ROLL_MAX.saturating_sub((rate * CRIT_ROLL_MAX as f64).floor() as u32);
    roll > target
}

/// Scale base damage by the crit multiplier, truncating to whole damage
pub fn crit_damage(base: i32, multiplier: f64) -> i32 {
    (base as f64 * multiplier) as i32
}
