//! Class archetype factories
//!
//! Each class maps to a signature stat and a starting weapon, the weapon
//! already equipped. Everything past the starting loadout is identical across
//! classes.

use crate::character::Character;
use crate::core::constants::{CLASS_BASE_HEALTH, CLASS_SIGNATURE_STAT, WEAPON_SLOT};
use serde::{Deserialize, Serialize};

/// Character class archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Warrior,
    Mage,
    Rogue,
}

impl ClassKind {
    /// Stat this class starts specialized in
    pub fn signature_stat(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Strength",
            ClassKind::Mage => "Intelligence",
            ClassKind::Rogue => "Dexterity",
        }
    }

    /// Weapon this class starts with, equipped
    pub fn starting_weapon(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Longsword",
            ClassKind::Mage => "Staff",
            ClassKind::Rogue => "Dagger",
        }
    }

    /// Build a level-1 character of this class
    pub fn create(self, name: &str) -> Character {
        let mut character = Character::new(name, CLASS_BASE_HEALTH);
        character.set_stat(self.signature_stat(), CLASS_SIGNATURE_STAT);
        character.add_to_inventory(self.starting_weapon(), 1);
        character
            .equip(self.starting_weapon(), WEAPON_SLOT)
            .expect("starting weapon was just added to inventory");
        character
    }
}

impl Character {
    pub fn warrior(name: &str) -> Character {
        ClassKind::Warrior.create(name)
    }

    pub fn mage(name: &str) -> Character {
        ClassKind::Mage.create(name)
    }

    pub fn rogue(name: &str) -> Character {
        ClassKind::Rogue.create(name)
    }
}
