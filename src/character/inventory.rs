//! Inventory and gear components
//!
//! Both are thin ordered maps. An inventory key is never removed once
//! inserted: a stack consumed to zero still marks the item as owned, which is
//! what the equip ownership check looks at.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stackable item storage, item name -> count
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, i32>,
}

impl Inventory {
    /// Stack `count` onto the existing count, inserting when absent
    pub fn add(&mut self, item: &str, count: i32) {
        *self.items.entry(item.to_string()).or_insert(0) += count;
    }

    /// Remove `count` from a stack
    ///
    /// Returns `false` and leaves the stack untouched when fewer than
    /// `count` are held. The key stays present at count zero.
    pub fn consume(&mut self, item: &str, count: i32) -> bool {
        match self.items.get_mut(item) {
            Some(held) if *held >= count => {
                *held -= count;
                true
            }
            _ => false,
        }
    }

    /// Key presence, regardless of count
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Held count, zero when absent
    pub fn count(&self, item: &str) -> i32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct item keys
    pub fn distinct(&self) -> usize {
        self.items.len()
    }

    /// Iterate stacks in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Equipment slots, slot name -> equipped item name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gear {
    slots: BTreeMap<String, String>,
}

impl Gear {
    /// Put an item in a slot, replacing whatever was there
    pub fn set(&mut self, slot: &str, item: &str) {
        self.slots.insert(slot.to_string(), item.to_string());
    }

    /// Item in a slot, empty string when unset
    pub fn in_slot(&self, slot: &str) -> &str {
        self.slots.get(slot).map(String::as_str).unwrap_or("")
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(slot, item)| (slot.as_str(), item.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacks_accumulate() {
        let mut inv = Inventory::default();
        inv.add("Gold Coin", 5);
        inv.add("Gold Coin", 10);
        assert_eq!(inv.count("Gold Coin"), 15);
        assert_eq!(inv.distinct(), 1);
    }

    #[test]
    fn test_consume_rejects_overdraw() {
        let mut inv = Inventory::default();
        inv.add("Health Potion", 2);
        assert!(inv.consume("Health Potion", 1));
        assert!(!inv.consume("Health Potion", 2));
        assert_eq!(inv.count("Health Potion"), 1);
    }

    #[test]
    fn test_key_survives_empty_stack() {
        let mut inv = Inventory::default();
        inv.add("Torch", 1);
        assert!(inv.consume("Torch", 1));
        assert_eq!(inv.count("Torch"), 0);
        assert!(inv.contains("Torch"));
        assert!(!inv.contains("Lantern"));
    }

    #[test]
    fn test_gear_defaults_to_empty_string() {
        let mut gear = Gear::default();
        assert_eq!(gear.in_slot("Weapon"), "");
        gear.set("Weapon", "Longsword");
        gear.set("Weapon", "Dagger");
        assert_eq!(gear.in_slot("Weapon"), "Dagger");
        assert_eq!(gear.len(), 1);
    }
}
