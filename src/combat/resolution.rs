//! Attack resolution
//!
//! Damage is Strength plus the bonus of whatever is equipped in the weapon
//! slot, scaled by the crit multiplier when the roll lands. There are no
//! damage types, resistances, or miss chances beyond the crit roll.

use crate::character::Character;
use crate::combat::crit::{crit_damage, is_critical};
use crate::core::constants::{CRIT_ROLL_MAX, STRENGTH_STAT, WEAPON_SLOT};
use rand::Rng;

impl Character {
    /// Base damage this character deals before the crit roll
    pub fn attack_damage(&self) -> i32 {
        let weapon_bonus = self.weapon_bonus(self.equipped(WEAPON_SLOT));
        self.stat(STRENGTH_STAT) + weapon_bonus
    }

    /// Attack a target, drawing the crit roll from the given source
    pub fn attack_with<R: Rng>(&self, target: &mut Character, rng: &mut R) {
        let base = self.attack_damage();
        let roll = rng.gen_range(1..=CRIT_ROLL_MAX);
        let critical = is_critical(roll, self.crit.rate);
        let damage = if critical {
            crit_damage(base, self.crit.multiplier)
        } else {
            base
        };
        tracing::debug!(
            attacker = %self.name(),
            defender = %target.name(),
            roll,
            critical,
            damage,
            "attack resolved"
        );
        target.take_damage(damage);
    }

    /// Attack a target with a thread-local roll source
    pub fn attack(&self, target: &mut Character) {
        self.attack_with(target, &mut rand::thread_rng());
    }

    pub fn critical_rate(&self) -> f64 {
        self.crit.rate
    }

    pub fn set_critical_rate(&mut self, rate: f64) {
        self.crit.rate = rate;
    }

    pub fn critical_multiplier(&self) -> f64 {
        self.crit.multiplier
    }

    pub fn set_critical_multiplier(&mut self, multiplier: f64) {
        self.crit.multiplier = multiplier;
    }
}
