//! Character aggregate: vitals, stats, progression, and owned components
//!
//! A `Character` is mutated in place by every operation. Combat entry points
//! (`attack`, `process_turn`) live in the `combat` module but operate on the
//! same aggregate.

pub mod classes;
pub mod inventory;

pub use classes::ClassKind;
pub use inventory::{Gear, Inventory};

use crate::combat::abilities::AbilityBook;
use crate::combat::crit::CritProfile;
use crate::combat::status::StatusEffects;
use crate::core::constants::{BASE_MAX_HEALTH, HEALTH_PER_LEVEL, XP_PER_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A playable or hostile character
///
/// Name-keyed maps use `BTreeMap` so iteration (turn processing, save output)
/// is deterministic by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) max_health: i32,
    pub(crate) current_health: i32,
    pub(crate) level: u32,
    pub(crate) experience: i32,
    pub(crate) stats: BTreeMap<String, i32>,
    pub(crate) inventory: Inventory,
    pub(crate) gear: Gear,
    pub(crate) weapon_damage: BTreeMap<String, i32>,
    #[serde(skip)]
    pub(crate) abilities: AbilityBook,
    pub(crate) statuses: StatusEffects,
    pub(crate) crit: CritProfile,
}

impl Character {
    /// Create a character at full health, level 1, with nothing learned or owned
    pub fn new(name: &str, health: i32) -> Self {
        Self {
            name: name.to_string(),
            max_health: health,
            current_health: health,
            level: 1,
            experience: 0,
            stats: BTreeMap::new(),
            inventory: Inventory::default(),
            gear: Gear::default(),
            weapon_damage: BTreeMap::new(),
            abilities: AbilityBook::default(),
            statuses: StatusEffects::default(),
            crit: CritProfile::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    // === Vitals ===

    pub fn health(&self) -> i32 {
        self.current_health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Set maximum health. Current health is untouched except for the clamp.
    pub fn set_max_health(&mut self, value: i32) {
        self.max_health = value;
        self.current_health = self.current_health.min(self.max_health);
    }

    /// Reduce current health, never below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.current_health = (self.current_health - amount).max(0);
    }

    /// Restore current health, never above maximum
    pub fn heal(&mut self, amount: i32) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    // === Stats ===

    pub fn set_stat(&mut self, stat: &str, value: i32) {
        self.stats.insert(stat.to_string(), value);
    }

    /// Unknown stats read as zero
    pub fn stat(&self, stat: &str) -> i32 {
        self.stats.get(stat).copied().unwrap_or(0)
    }

    // === Progression ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    /// Accumulate experience and normalize level/remainder
    ///
    /// Level is `total / 100 + 1`, carried experience is `total % 100`, and
    /// maximum health is re-derived from the new level. Current health is not
    /// raised when the maximum grows, only clamped if it shrinks below it.
    pub fn gain_experience(&mut self, amount: i32) {
        let total = (self.level as i32 - 1) * XP_PER_LEVEL + self.experience + amount;
        // Level never drops below 1, even if a negative award drives the
        // total negative
        let level = (total / XP_PER_LEVEL + 1).max(1);
        self.experience = total % XP_PER_LEVEL;
        if level as u32 != self.level {
            tracing::debug!(name = %self.name, from = self.level, to = level, "level changed");
        }
        self.level = level as u32;
        self.max_health = BASE_MAX_HEALTH + HEALTH_PER_LEVEL * (level - 1);
        self.current_health = self.current_health.min(self.max_health);
    }

    /// Restore progression fields from a save snapshot
    pub(crate) fn set_progression(&mut self, level: u32, experience: i32) {
        self.level = level.max(1);
        self.experience = experience;
        self.max_health = BASE_MAX_HEALTH + HEALTH_PER_LEVEL * (self.level as i32 - 1);
        self.current_health = self.max_health;
    }

    // === Inventory & gear ===

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn gear(&self) -> &Gear {
        &self.gear
    }

    /// Add `count` of an item, stacking onto any existing count
    pub fn add_to_inventory(&mut self, item: &str, count: i32) {
        self.inventory.add(item, count);
    }

    /// Consume items from a stack
    ///
    /// Fails (returning `false`, state untouched) when fewer than `count`
    /// are held.
    pub fn use_item(&mut self, item: &str, count: i32) -> bool {
        self.inventory.consume(item, count)
    }

    /// True while the item key exists, even at count zero
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    pub fn item_count(&self, item: &str) -> i32 {
        self.inventory.count(item)
    }

    /// Number of distinct item keys held
    pub fn inventory_size(&self) -> usize {
        self.inventory.distinct()
    }

    /// Equip an owned item into a gear slot
    ///
    /// The item key must be present in inventory (count zero is enough);
    /// equipping an unowned item is an invalid operation.
    pub fn equip(&mut self, item: &str, slot: &str) -> crate::core::Result<()> {
        if !self.inventory.contains(item) {
            return Err(crate::core::GameError::ItemNotOwned(item.to_string()));
        }
        self.gear.set(slot, item);
        Ok(())
    }

    /// Item equipped in a slot, empty string when the slot is unset
    pub fn equipped(&self, slot: &str) -> &str {
        self.gear.in_slot(slot)
    }

    /// Restore a gear slot from a save snapshot without the ownership check
    pub(crate) fn restore_gear(&mut self, slot: &str, item: &str) {
        self.gear.set(slot, item);
    }

    /// Associate a flat bonus damage with a weapon name
    ///
    /// Independent of inventory or equip state; consulted only while the
    /// weapon is equipped in the weapon slot.
    pub fn set_weapon_damage(&mut self, weapon: &str, damage: i32) {
        self.weapon_damage.insert(weapon.to_string(), damage);
    }

    /// Bonus damage registered for a weapon name, zero when unknown
    pub fn weapon_bonus(&self, weapon: &str) -> i32 {
        self.weapon_damage.get(weapon).copied().unwrap_or(0)
    }
}
