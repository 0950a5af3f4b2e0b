use duel_engine::content::{damage, medic, sniper, tank};
use duel_engine::{Dice, Fighter, Role, UnknownArchetype};

#[test]
fn presets_match_archetype_table() {
    let t = tank(None);
    assert_eq!((t.max_health(), t.damage(), t.accuracy()), (140, 14, 0.45));
    assert_eq!(t.health(), 140);
    assert!(t.heal_profile().is_none());

    let m = medic(None);
    assert_eq!((m.max_health(), m.damage(), m.accuracy()), (90, 10, 0.55));
    let heal = m.heal_profile().expect("medic heals");
    assert_eq!(heal.amount, 18);
    assert_eq!(heal.chance, 0.30);

    let d = damage(None);
    assert_eq!((d.max_health(), d.damage(), d.accuracy()), (75, 18, 0.55));

    let s = sniper(None);
    assert_eq!((s.max_health(), s.damage(), s.accuracy()), (80, 15, 0.78));
}

#[test]
fn name_defaults_to_role_and_can_be_overridden() {
    assert_eq!(tank(None).name(), "Tank");
    let named = Fighter::from_role(Role::Sniper, Some("Nurbol"));
    assert_eq!(named.name(), "Nurbol");
    assert_eq!(named.role(), Role::Sniper);
}

#[test]
fn damage_clamps_at_zero() {
    let mut d = damage(None);
    d.apply_damage(500);
    assert_eq!(d.health(), 0);
    assert!(!d.is_alive());
}

#[test]
fn one_hp_fighter_dies_to_one_damage() {
    let mut d = damage(None);
    d.apply_damage(74);
    assert_eq!(d.health(), 1);
    assert!(d.is_alive());
    d.apply_damage(1);
    assert_eq!(d.health(), 0);
    assert!(!d.is_alive());
}

#[test]
fn heal_clamps_at_max() {
    let mut m = medic(None);
    m.apply_damage(1);
    assert_eq!(m.health(), 89);
    m.apply_heal(18);
    assert_eq!(m.health(), 90);
    assert!(m.is_full_health());
}

#[test]
fn attack_hits_when_roll_equals_accuracy() {
    let attacker = tank(None);
    let mut target = damage(None);
    let mut dice = Dice::from_scripted(vec![0.45]);
    let strike = attacker.attempt_attack(&mut target, &mut dice);
    assert!(strike.hit);
    assert_eq!(strike.damage, 14);
    assert_eq!(target.health(), 61);
}

#[test]
fn missed_attack_leaves_target_untouched() {
    let attacker = sniper(None);
    let mut target = medic(None);
    let before = target.clone();
    let mut dice = Dice::from_scripted(vec![0.79]);
    let strike = attacker.attempt_attack(&mut target, &mut dice);
    assert!(!strike.hit);
    assert_eq!(strike.damage, 0);
    assert_eq!(target, before);
}

#[test]
fn role_names_parse_case_insensitively() {
    assert_eq!("TANK".parse::<Role>(), Ok(Role::Tank));
    assert_eq!(" medic ".parse::<Role>(), Ok(Role::Medic));
    assert_eq!("Sniper".parse::<Role>(), Ok(Role::Sniper));

    let err = "wizard".parse::<Role>().unwrap_err();
    assert_eq!(err, UnknownArchetype("wizard".into()));
    assert!(err.to_string().contains("wizard"));
}

#[test]
fn display_shows_name_role_and_health() {
    let mut t = Fighter::from_role(Role::Tank, Some("Islam"));
    t.apply_damage(40);
    assert_eq!(t.to_string(), "Islam(Tank) HP:100/140");
}
