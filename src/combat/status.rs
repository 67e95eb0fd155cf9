//! Status effects and turn processing
//!
//! A status is a named, turn-limited recurring effect. What each status does
//! per turn lives in a process-wide registry built once; characters only
//! track remaining turn counts. Turn processing snapshots the active names
//! before applying anything, since effects are free to mutate the status map
//! of the character they run on.

use crate::character::Character;
use crate::core::constants::POISON_DAMAGE_PER_TURN;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Per-turn effect of a status, applied to the afflicted character
pub type StatusEffectFn = fn(&mut Character);

/// Fixed mapping from status name to per-turn effect
pub struct StatusRegistry {
    effects: BTreeMap<&'static str, StatusEffectFn>,
}

impl StatusRegistry {
    fn builtin() -> Self {
        let mut effects: BTreeMap<&'static str, StatusEffectFn> = BTreeMap::new();
        effects.insert("Poison", |character| {
            character.take_damage(POISON_DAMAGE_PER_TURN)
        });
        Self { effects }
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static StatusRegistry {
        static REGISTRY: OnceLock<StatusRegistry> = OnceLock::new();
        REGISTRY.get_or_init(StatusRegistry::builtin)
    }

    /// Per-turn effect for a status name, if one is registered
    pub fn effect(&self, name: &str) -> Option<StatusEffectFn> {
        self.effects.get(name).copied()
    }
}

/// Active statuses on a character, name -> remaining turns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    active: BTreeMap<String, u32>,
}

impl StatusEffects {
    /// Set the remaining turns for a status, replacing (not adding to) any
    /// existing count
    pub fn apply(&mut self, name: &str, turns: u32) {
        self.active.insert(name.to_string(), turns);
    }

    pub fn has(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    pub fn remaining(&self, name: &str) -> u32 {
        self.active.get(name).copied().unwrap_or(0)
    }

    /// Snapshot of active status names, in name order
    pub fn active_names(&self) -> Vec<String> {
        self.active.keys().cloned().collect()
    }

    /// Spend one turn of a status, removing it when it expires
    pub(crate) fn tick(&mut self, name: &str) {
        if let Some(turns) = self.active.get_mut(name) {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                self.active.remove(name);
            }
        }
    }
}

impl Character {
    /// Inflict a status for a number of turns
    ///
    /// Re-applying replaces the remaining count rather than stacking.
    pub fn apply_status_effect(&mut self, name: &str, turns: u32) {
        tracing::debug!(target_name = %self.name(), status = name, turns, "status applied");
        self.statuses.apply(name, turns);
    }

    pub fn has_status_effect(&self, name: &str) -> bool {
        self.statuses.has(name)
    }

    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    /// Run one turn of status processing
    ///
    /// Each active status applies its registered per-turn effect to this
    /// character, then loses one remaining turn; a status expiring this turn
    /// still applies before it is removed. A status name with no registry
    /// entry applies nothing and is logged as a configuration error.
    pub fn process_turn(&mut self) {
        let registry = StatusRegistry::global();
        // Snapshot before applying: an effect may alter the status map
        for name in self.statuses.active_names() {
            if self.statuses.remaining(&name) == 0 {
                // Zero-turn grant: expires without ever applying
                self.statuses.tick(&name);
                continue;
            }
            match registry.effect(&name) {
                Some(effect) => effect(self),
                None => {
                    tracing::warn!(status = %name, "status has no registered effect");
                }
            }
            self.statuses.tick(&name);
        }
    }
}
