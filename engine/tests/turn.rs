use duel_engine::content::{damage, medic, sniper, tank};
use duel_engine::{resolve_turn, Dice, RandomSource, TurnOutcome};

#[test]
fn full_health_medic_attacks_even_on_a_heal_roll() {
    let mut m = medic(None);
    let mut t = tank(None);
    let mut dice = Dice::from_scripted(vec![0.0, 0.5, 0.99]);

    let outcome = resolve_turn(&mut m, &mut t, &mut dice);
    assert_eq!(outcome, TurnOutcome::Hit { damage: 10 });
    assert_eq!(m.health(), 90);
    assert_eq!(t.health(), 130);
    // heal roll and attack roll were both consumed
    assert_eq!(dice.next_unit(), 0.99);
}

#[test]
fn wounded_medic_heals_instead_of_attacking() {
    let mut m = medic(None);
    m.apply_damage(20);
    let mut t = tank(None);
    let mut dice = Dice::from_scripted(vec![0.29, 0.77]);

    let outcome = resolve_turn(&mut m, &mut t, &mut dice);
    assert_eq!(outcome, TurnOutcome::Heal { amount: 18 });
    assert_eq!(m.health(), 88);
    assert_eq!(t.health(), 140);
    assert_eq!(dice.next_unit(), 0.77);
}

#[test]
fn heal_near_max_is_clamped() {
    let mut m = medic(None);
    m.apply_damage(1);
    let mut d = damage(None);
    let mut dice = Dice::from_scripted(vec![0.1]);

    let outcome = resolve_turn(&mut m, &mut d, &mut dice);
    assert_eq!(outcome, TurnOutcome::Heal { amount: 18 });
    assert_eq!(m.health(), m.max_health());
}

#[test]
fn heal_roll_at_chance_falls_through_to_attack() {
    let mut m = medic(None);
    m.apply_damage(20);
    let mut s = sniper(None);
    let mut dice = Dice::from_scripted(vec![0.30, 0.9]);

    let outcome = resolve_turn(&mut m, &mut s, &mut dice);
    assert_eq!(outcome, TurnOutcome::Miss);
    assert_eq!(m.health(), 70);
    assert_eq!(s.health(), 80);
}

#[test]
fn non_medic_uses_a_single_draw() {
    let mut s = sniper(None);
    let mut d = damage(None);
    let mut dice = Dice::from_scripted(vec![0.78, 0.5]);

    let outcome = resolve_turn(&mut s, &mut d, &mut dice);
    assert_eq!(outcome, TurnOutcome::Hit { damage: 15 });
    assert_eq!(d.health(), 60);
    assert_eq!(dice.next_unit(), 0.5);
}

#[test]
fn damaged_tank_never_heals() {
    let mut t = tank(None);
    t.apply_damage(50);
    let mut d = damage(None);
    let mut dice = Dice::from_scripted(vec![0.0]);

    let outcome = resolve_turn(&mut t, &mut d, &mut dice);
    assert!(outcome.is_hit());
    assert_eq!(t.health(), 90);
}

#[test]
fn outcome_serializes_with_action_tag() {
    let hit = serde_json::to_value(TurnOutcome::Hit { damage: 18 }).unwrap();
    assert_eq!(hit, serde_json::json!({ "action": "hit", "damage": 18 }));
    let miss = serde_json::to_value(TurnOutcome::Miss).unwrap();
    assert_eq!(miss, serde_json::json!({ "action": "miss" }));
}
