//! Name-keyed party container
//!
//! A thin collection over characters. Members are stored by value and keyed
//! by character name; adding a member with a duplicate name silently
//! replaces the previous one.

use crate::character::Character;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named group of characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    name: String,
    members: BTreeMap<String, Character>,
}

impl Party {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a member, keyed by its name; duplicate names replace
    pub fn add_member(&mut self, member: Character) {
        self.members.insert(member.name().to_string(), member);
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Remove a member by name, returning it if present
    pub fn remove_member(&mut self, name: &str) -> Option<Character> {
        self.members.remove(name)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn member(&self, name: &str) -> Option<&Character> {
        self.members.get(name)
    }

    pub fn member_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.members.get_mut(name)
    }

    /// Iterate members in name order
    pub fn members(&self) -> impl Iterator<Item = &Character> {
        self.members.values()
    }
}
