//! Game tuning constants - all fixed values in one place

// Progression constants
pub const XP_PER_LEVEL: i32 = 100;
pub const BASE_MAX_HEALTH: i32 = 100;
pub const HEALTH_PER_LEVEL: i32 = 10;

// Combat constants
/// Inclusive upper bound of the critical-hit roll
pub const CRIT_ROLL_MAX: u32 = 100;
/// Gear slot consulted for bonus attack damage
pub const WEAPON_SLOT: &str = "Weapon";
/// Stat that contributes base attack damage
pub const STRENGTH_STAT: &str = "Strength";

// Status effect constants
pub const POISON_DAMAGE_PER_TURN: i32 = 5;

// Class archetype constants
pub const CLASS_BASE_HEALTH: i32 = 100;
pub const CLASS_SIGNATURE_STAT: i32 = 16;
