//! Per-character ability book
//!
//! Abilities are arbitrary closures over (caster, target) registered at
//! runtime. The book hands out `Rc` clones so an ability can be invoked while
//! the caster is mutably borrowed, and so characters stay cheap to clone.

use crate::character::Character;
use ahash::AHashMap;
use std::fmt;
use std::rc::Rc;

/// An ability: free to mutate both parties, reports success
pub type AbilityFn = Rc<dyn Fn(&mut Character, &mut Character) -> bool>;

/// Named abilities a character has learned
#[derive(Clone, Default)]
pub struct AbilityBook {
    abilities: AHashMap<String, AbilityFn>,
}

impl AbilityBook {
    /// Register an ability, replacing any previous one under the same name
    pub fn learn(&mut self, name: &str, ability: AbilityFn) {
        self.abilities.insert(name.to_string(), ability);
    }

    /// Look up an ability by name
    pub fn get(&self, name: &str) -> Option<AbilityFn> {
        self.abilities.get(name).cloned()
    }

    pub fn knows(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Names of known abilities, unordered
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.abilities.keys().map(String::as_str)
    }
}

impl fmt::Debug for AbilityBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.abilities.keys()).finish()
    }
}

impl Character {
    /// Learn a named ability, overwriting any existing one
    pub fn learn_ability<F>(&mut self, name: &str, ability: F)
    where
        F: Fn(&mut Character, &mut Character) -> bool + 'static,
    {
        self.abilities.learn(name, Rc::new(ability));
    }

    /// Invoke a learned ability on a target
    ///
    /// Returns `false` with no side effects when the name is unregistered;
    /// otherwise returns whatever the ability reports.
    pub fn use_ability(&mut self, name: &str, target: &mut Character) -> bool {
        match self.abilities.get(name) {
            Some(ability) => (*ability)(self, target),
            None => {
                tracing::debug!(caster = %self.name(), ability = name, "unknown ability");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_mutates_target() {
        let mut caster = Character::new("Wizard", 60);
        let mut target = Character::new("Enemy", 100);
        caster.set_stat("Intelligence", 15);
        caster.learn_ability("Fireball", |user, target| {
            target.take_damage(user.stat("Intelligence") * 2);
            true
        });

        assert!(caster.use_ability("Fireball", &mut target));
        assert_eq!(target.health(), 70);
    }

    #[test]
    fn test_unknown_ability_is_a_soft_failure() {
        let mut caster = Character::new("Wizard", 60);
        let mut target = Character::new("Enemy", 100);

        assert!(!caster.use_ability("Lightning Bolt", &mut target));
        assert_eq!(target.health(), 100);
    }

    #[test]
    fn test_learning_overwrites() {
        let mut caster = Character::new("Wizard", 60);
        let mut target = Character::new("Enemy", 100);
        caster.learn_ability("Zap", |_, target| {
            target.take_damage(1);
            true
        });
        caster.learn_ability("Zap", |_, target| {
            target.take_damage(10);
            true
        });

        caster.use_ability("Zap", &mut target);
        assert_eq!(target.health(), 90);
        assert_eq!(caster.abilities.len(), 1);
    }

    #[test]
    fn test_ability_can_heal_an_ally() {
        let mut healer = Character::new("Cleric", 80);
        let mut ally = Character::new("Tank", 100);
        ally.take_damage(40);
        healer.set_stat("Intelligence", 22);
        healer.learn_ability("Heal", |caster, target| {
            target.heal(caster.stat("Intelligence"));
            true
        });

        healer.use_ability("Heal", &mut ally);
        assert_eq!(ally.health(), 82);
    }
}
