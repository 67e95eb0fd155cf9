//! Grimvale - Entry Point
//!
//! Console arena demo: a hero party against a boss. Commands drive attacks,
//! abilities, and turn processing; characters can be saved to and loaded from
//! the flat save format.

use grimvale::character::Character;
use grimvale::core::Result;
use grimvale::party::Party;
use grimvale::save;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("grimvale=debug")
        .init();

    tracing::info!("Grimvale starting...");

    // Seeded so demo battles replay identically
    let mut rng = ChaCha8Rng::seed_from_u64(0x4752494D);

    let mut party = build_party();
    let mut boss = build_boss();

    println!("\n=== GRIMVALE ARENA ===");
    println!("{} face {}", party.name(), boss.name());
    println!();
    println!("Commands:");
    println!("  attack <member>          - member attacks the boss");
    println!("  cast <member> <ability>  - member casts an ability at the boss");
    println!("  breath <member>          - boss breathes fire at a member");
    println!("  turn                     - process status effects on everyone");
    println!("  status / s               - show combatant status");
    println!("  save <member> <file>     - write a member to a save file");
    println!("  load <file>              - load a character into the party");
    println!("  dump <member>            - print a member as JSON");
    println!("  quit / q                 - exit");
    println!();

    loop {
        if boss.is_dead() {
            println!("{} has fallen. The arena is yours.", boss.name());
            break;
        }

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.as_slice() {
            ["attack", member] => match party.member(member) {
                Some(hero) => {
                    let before = boss.health();
                    hero.attack_with(&mut boss, &mut rng);
                    println!(
                        "{} hits {} for {} damage ({} HP left)",
                        member,
                        boss.name(),
                        before - boss.health(),
                        boss.health()
                    );
                }
                None => println!("No such party member: {member}"),
            },
            ["cast", member, ability] => match party.member_mut(member) {
                Some(hero) => {
                    let before = boss.health();
                    if hero.use_ability(ability, &mut boss) {
                        println!(
                            "{member} casts {ability}: {} takes {} damage",
                            boss.name(),
                            before - boss.health()
                        );
                    } else {
                        println!("{member} does not know {ability}");
                    }
                }
                None => println!("No such party member: {member}"),
            },
            ["breath", member] => match party.member_mut(member) {
                Some(hero) => {
                    if boss.use_ability("Fire Breath", hero) {
                        println!(
                            "{} breathes fire at {member} ({} HP left)",
                            boss.name(),
                            hero.health()
                        );
                    }
                }
                None => println!("No such party member: {member}"),
            },
            ["turn"] => {
                boss.process_turn();
                let names: Vec<String> =
                    party.members().map(|m| m.name().to_string()).collect();
                for name in names {
                    if let Some(hero) = party.member_mut(&name) {
                        hero.process_turn();
                    }
                }
                println!("Turn processed.");
            }
            ["status"] | ["s"] => display_status(&party, &boss),
            ["save", member, path] => match party.member(member) {
                Some(hero) => {
                    std::fs::write(path, save::serialize(hero))?;
                    println!("Saved {member} to {path}");
                }
                None => println!("No such party member: {member}"),
            },
            ["load", path] => {
                let text = std::fs::read_to_string(path)?;
                match save::deserialize(&text) {
                    Ok(loaded) => {
                        println!("{} (level {}) joins the party", loaded.name(), loaded.level());
                        party.add_member(loaded);
                    }
                    Err(e) => println!("Could not load {path}: {e}"),
                }
            }
            ["dump", member] => match party.member(member) {
                Some(hero) => println!("{}", serde_json::to_string_pretty(hero)?),
                None => println!("No such party member: {member}"),
            },
            ["quit"] | ["q"] => break,
            [] => {}
            _ => println!("Unknown command."),
        }
    }

    tracing::info!("Grimvale shutting down");
    Ok(())
}

/// Assemble the standard demo party: warrior, mage, rogue with loadouts
fn build_party() -> Party {
    let mut party = Party::new("Heroes of Light");

    let mut warrior = Character::warrior("Hector");
    warrior.set_weapon_damage("Longsword", 15);
    warrior.set_stat("Strength", 20);
    warrior.set_critical_rate(0.2);
    warrior.set_critical_multiplier(1.5);

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

    party.add_member(warrior);
    party.add_member(mage);
    party.add_member(rogue);
    party
}

fn build_boss() -> Character {
    let mut boss = Character::new("Dragon", 300);
    boss.set_stat("Strength", 25);
    boss.learn_ability("Fire Breath", |_, target| {
        target.take_damage(30);
        true
    });
    boss
}

fn display_status(party: &Party, boss: &Character) {
    println!("--- {} ---", party.name());
    for member in party.members() {
        println!(
            "  {:10} lvl {:2}  {:3}/{:3} HP  weapon: {}",
            member.name(),
            member.level(),
            member.health(),
            member.max_health(),
            if member.equipped("Weapon").is_empty() {
                "none"
            } else {
                member.equipped("Weapon")
            }
        );
    }
    let poisoned = if boss.has_status_effect("Poison") {
        " [poisoned]"
    } else {
        ""
    };
    println!(
        "--- {} ---  {:3}/{:3} HP{}",
        boss.name(),
        boss.health(),
        boss.max_health(),
        poisoned
    );
}
