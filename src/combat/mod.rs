pub mod abilities;
pub mod crit;
pub mod resolution;
pub mod status;

pub use abilities::{AbilityBook, AbilityFn};
pub use crit::{crit_damage, is_critical, CritProfile};
pub use status::{StatusEffects, StatusRegistry};
