//! Battle flow integration tests
//!
//! Attacks, crits, abilities, status effects, and party management working
//! together, ending with a full scripted battle.

use grimvale::character::Character;
use grimvale::party::Party;

#[test]
fn test_basic_attack_deals_strength_damage() {
    let mut attacker = Character::new("Berserker", 100);
    let mut defender = Character::new("Guardian", 120);
    attacker.set_stat("Strength", 16);

    attacker.attack(&mut defender);
    assert_eq!(defender.health(), 104);
}

#[test]
fn test_weapon_damage_modifier_applies_while_equipped() {
    let mut attacker = Character::new("Swordsman", 80);
    let mut defender = Character::new("Target", 150);
    attacker.set_stat("Strength", 15);
    attacker.add_to_inventory("Steel Sword", 1);
    attacker.set_weapon_damage("Steel Sword", 10);
    attacker.equip("Steel Sword", "Weapon").unwrap();

    attacker.attack(&mut defender);
    assert_eq!(defender.health(), 125);
}

#[test]
fn test_critical_hit_modifiers() {
    let mut attacker = Character::new("Attacker", 100);
    let mut defender = Character::new("Defender", 100);
    attacker.set_stat("Strength", 10);

    attacker.set_critical_rate(1.0);
    attacker.set_critical_multiplier(2.0);
    attacker.attack(&mut defender);
    assert_eq!(defender.health(), 80);

    attacker.set_critical_rate(0.0);
    attacker.attack(&mut defender);
    assert_eq!(defender.health(), 70);
}

#[test]
fn test_special_abilities() {
    let mut attacker = Character::new("Wizard", 60);
    let mut target = Character::new("Enemy", 100);

    attacker.learn_ability("Fireball", |user, target| {
        target.take_damage(user.stat("Intelligence") * 2);
        true
    });
    attacker.set_stat("Intelligence", 15);

    assert!(attacker.use_ability("Fireball", &mut target));
    assert_eq!(target.health(), 70);

    assert!(!attacker.use_ability("Lightning Bolt", &mut target));
    assert_eq!(target.health(), 70);
}

#[test]
fn test_status_effect_lifecycle() {
    let mut target = Character::new("Target", 100);

    target.apply_status_effect("Poison", 3);
    assert!(target.has_status_effect("Poison"));

    target.process_turn();
    assert_eq!(target.health(), 95);
    target.process_turn();
    assert_eq!(target.health(), 90);
    target.process_turn();
    assert_eq!(target.health(), 85);
    assert!(!target.has_status_effect("Poison"));

    target.process_turn();
    assert_eq!(target.health(), 85);
}

#[test]
fn test_party_mechanics() {
    let mut adventuring_party = Party::new("Heroes of the Realm");
    adventuring_party.add_member(Character::warrior("Thordak"));
    adventuring_party.add_member(Character::mage("Ellaria"));

    assert_eq!(adventuring_party.member_count(), 2);
    assert!(adventuring_party.has_member("Thordak"));
    assert!(adventuring_party.has_member("Ellaria"));
    assert!(!adventuring_party.has_member("Vex"));

    adventuring_party.add_member(Character::rogue("Vex"));
    assert!(adventuring_party.has_member("Vex"));
    assert_eq!(adventuring_party.member_count(), 3);

    adventuring_party.remove_member("Ellaria");
    assert!(!adventuring_party.has_member("Ellaria"));
    assert_eq!(adventuring_party.member_count(), 2);
}

#[test]
fn test_complete_battle_scenario() {
    let mut warrior = Character::warrior("Hector");
    warrior.set_weapon_damage("Longsword", 15);
    warrior.set_stat("Strength", 20);

    let mut mage = Character::mage("Lilith");
    mage.set_stat("Intelligence", 22);
    mage.learn_ability("Fireball", |caster, target| {
        target.take_damage(caster.stat("Intelligence") * 2);
        true
    });
    mage.learn_ability("Heal", |caster, target| {
        target.heal(caster.stat("Intelligence"));
        true
    });

    let mut rogue = Character::rogue("Garrett");
    rogue.set_weapon_damage("Dagger", 8);
    rogue.set_stat("Dexterity", 18);
    rogue.learn_ability("Poison Strike", |caster, target| {
        target.take_damage(caster.stat("Dexterity"));
        target.apply_status_effect("Poison", 3);
        true
    });

    let mut boss = Character::new("Dragon", 300);
    boss.set_stat("Strength", 25);
    boss.learn_ability("Fire Breath", |_, target| {
        target.take_damage(30);
        true
    });

    // Round 1: warrior swings, boss answers with fire
    warrior.attack(&mut boss);
    assert_eq!(boss.health(), 265); // 300 - (20 strength + 15 weapon)

    assert!(boss.use_ability("Fire Breath", &mut warrior));
    assert_eq!(warrior.health(), 70);

    // Round 2: fireball, then a poisoned blade
    assert!(mage.use_ability("Fireball", &mut boss));
    assert_eq!(boss.health(), 221); // 265 - 44

    assert!(rogue.use_ability("Poison Strike", &mut boss));
    assert!(boss.has_status_effect("Poison"));
    assert_eq!(boss.health(), 203); // 221 - 18

    boss.process_turn();
    assert_eq!(boss.health(), 198); // poison ticks for 5

    // Round 3: the mage patches the warrior up
    assert!(mage.use_ability("Heal", &mut warrior));
    assert_eq!(warrior.health(), 92); // 70 + 22
}
