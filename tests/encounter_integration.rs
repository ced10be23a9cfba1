//! Encounter engine integration tests
//!
//! End-to-end scenarios over the public surface: seeded sessions, stance
//! declarations flowing into the next round's defense, rejected manual
//! rolls, and ordering properties of the reshuffle.

use fraymaster::combat::{
    AutonomousSource, Combatant, Encounter, InitiativeSource, ManualSource, Stance, TurnOrder,
};
use fraymaster::core::error::EngineError;
use proptest::prelude::*;

fn fixed(roll: i32) -> Box<dyn InitiativeSource> {
    Box::new(ManualSource::new(move |_: &str, _| roll))
}

/// Base initiatives 5, 6, 6 with rolls 1, 1, 2 produce initiatives 6, 7, 8
/// and the order [C3, C2, C1].
#[test]
fn test_scenario_three_combatants_sorted_by_roll() {
    let order = TurnOrder::new(vec![
        Combatant::new("C1", 2, 3, 8, 1, fixed(1)).unwrap(),
        Combatant::new("C2", 3, 3, 8, 1, fixed(1)).unwrap(),
        Combatant::new("C3", 3, 3, 8, 1, fixed(2)).unwrap(),
    ]);

    let view: Vec<(String, i32)> = order
        .iter()
        .map(|c| (c.name().to_owned(), c.current_initiative()))
        .collect();
    assert_eq!(
        view,
        [
            ("C3".to_owned(), 8),
            ("C2".to_owned(), 7),
            ("C1".to_owned(), 6)
        ]
    );
}

/// A source fixed at 4 with dexterity 3 and wits 3 always lands on 10.
#[test]
fn test_fixed_roll_reaches_known_initiative() {
    let mut combatant = Combatant::new("Veteran", 3, 3, 8, 1, fixed(4)).unwrap();
    for _ in 0..10 {
        assert_eq!(combatant.advance_round().unwrap(), 10);
    }
}

/// Same seeds reproduce the same session, round for round.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let build = || {
        Encounter::new(
            (0..4)
                .map(|i| {
                    Combatant::new(
                        format!("C{i}"),
                        2 + i,
                        3,
                        8,
                        1,
                        Box::new(AutonomousSource::seeded(100 + i as u64)),
                    )
                    .unwrap()
                })
                .collect(),
        )
    };

    let mut a = build();
    let mut b = build();
    for _ in 0..5 {
        a.advance_round().unwrap();
        b.advance_round().unwrap();
        assert_eq!(a.snapshots(), b.snapshots());
    }
}

/// Stance declared this round shows up in defense next round, and the
/// effective-defense identity holds at every observation point.
#[test]
fn test_stance_cycle_and_defense_identity() {
    let mut enc = Encounter::new(vec![
        Combatant::new("Duelist", 3, 3, 8, 2, fixed(4)).unwrap(),
        Combatant::new("Brute", 4, 2, 10, 1, fixed(3)).unwrap(),
    ]);

    enc.set_persistent_modifier("Duelist", -3).unwrap();

    let stances = [
        Stance::Aggressive,
        Stance::Defensive,
        Stance::FullDefense,
        Stance::Neutral,
    ];
    for stance in stances {
        enc.set_stance("Duelist", stance).unwrap();
        enc.advance_round().unwrap();

        let duelist = enc
            .snapshots()
            .into_iter()
            .find(|s| s.name == "Duelist")
            .unwrap();
        assert_eq!(
            duelist.effective_defense,
            2 - 3 + stance.pending_defense_modifier()
        );

        // The untouched combatant stays on its base the whole time
        let brute = enc
            .snapshots()
            .into_iter()
            .find(|s| s.name == "Brute")
            .unwrap();
        assert_eq!(brute.effective_defense, 1);
    }
}

/// An operator answering 7 rejects the advance; the session stays in the
/// previous round with the previous order.
#[test]
fn test_manual_roll_out_of_range_rejects_round() {
    let mut rolls = [2, 7].into_iter();
    let manual = ManualSource::new(move |_: &str, _| rolls.next().unwrap());
    let mut enc = Encounter::new(vec![
        Combatant::new("Player", 3, 3, 8, 1, Box::new(manual)).unwrap(),
        Combatant::new("Goon", 2, 2, 5, 0, fixed(3)).unwrap(),
    ]);

    let before = enc.snapshots();
    let err = enc.advance_round().unwrap_err();
    assert!(matches!(err, EngineError::RollOutOfRange { roll: 7, .. }));
    assert_eq!(enc.round(), 0);
    assert_eq!(enc.snapshots(), before);
}

/// Damage past zero is reported verbatim.
#[test]
fn test_hit_points_below_zero_reported_verbatim() {
    let mut enc = Encounter::new(vec![
        Combatant::new("Goon", 2, 2, 8, 0, fixed(3)).unwrap()
    ]);
    enc.adjust_hit_points("Goon", -10).unwrap();

    let snap = enc.snapshots().pop().unwrap();
    assert_eq!(snap.hit_points, -2);
    assert!(snap.hit_point_fraction() < 0.0);
    assert_eq!(snap.health_track(), "________");
}

fn arb_roster() -> impl Strategy<Value = Vec<(i32, i32, u64)>> {
    prop::collection::vec((1..20i32, 1..20i32, any::<u64>()), 1..12)
}

proptest! {
    /// Reshuffle is a bijection and always yields a descending order.
    #[test]
    fn prop_reshuffle_bijection_and_descending(roster in arb_roster(), rounds in 1..5u32) {
        let combatants = roster
            .iter()
            .enumerate()
            .map(|(i, (dexterity, wits, seed))| {
                Combatant::new(
                    format!("C{i}"),
                    *dexterity,
                    *wits,
                    8,
                    1,
                    Box::new(AutonomousSource::seeded(*seed)),
                )
                .unwrap()
            })
            .collect();
        let mut order = TurnOrder::new(combatants);

        for _ in 0..rounds {
            let mut before: Vec<String> =
                order.iter().map(|c| c.name().to_owned()).collect();
            order.reshuffle().unwrap();
            let mut after: Vec<String> =
                order.iter().map(|c| c.name().to_owned()).collect();

            prop_assert_eq!(before.len(), after.len());
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            let initiatives: Vec<i32> =
                order.iter().map(|c| c.current_initiative()).collect();
            prop_assert!(initiatives.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    /// Every initiative stays within the band the traits allow.
    #[test]
    fn prop_initiative_stays_on_trait_band(dexterity in 1..30i32, wits in 1..30i32, seed in any::<u64>()) {
        let mut combatant = Combatant::new(
            "C",
            dexterity,
            wits,
            8,
            1,
            Box::new(AutonomousSource::seeded(seed)),
        )
        .unwrap();

        let base = dexterity + wits;
        for _ in 0..20 {
            let initiative = combatant.advance_round().unwrap();
            prop_assert!((base + 1..=base + 6).contains(&initiative));
        }
    }
}
