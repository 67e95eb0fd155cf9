//! Grimvale - Turn-Based RPG Character Core

pub mod character;
pub mod combat;
pub mod core;
pub mod party;
pub mod save;
