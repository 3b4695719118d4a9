//! Integration test: Start a fight -> Step it in chunks -> Replay the log
//!
//! Drives the arena end to end through its public API and checks the
//! invariants that must hold for every valid fight.

use arena_core::prelude::*;
use arena_core::{JsonStore, StepOutcome};
use proptest::prelude::*;

fn hero(attrs: Attributes, level: u32, build: Build) -> CombatantSpec {
    CombatantSpec::new("Hero", level, build, attrs)
}

fn foe(attrs: Attributes, level: u32, build: Build) -> CombatantSpec {
    CombatantSpec::new("Foe", level, build, attrs)
}

/// Run a fight to the end in steps of `chunk` rounds, collecting every outcome
fn run_in_chunks(request: StartRequest, seed: u64, chunk: u32) -> (Snapshot, Vec<StepOutcome>) {
    let mut arena = Arena::new(InMemoryStore::new());
    let mut dice = RandomDice::seeded(seed);
    let (id, initial) = arena.start(request).unwrap();

    let mut outcomes = Vec::new();
    loop {
        let outcome = arena.step(id, chunk, &mut dice).unwrap();
        let done = outcome.is_finished();
        outcomes.push(outcome);
        if done {
            break;
        }
    }
    (initial, outcomes)
}

fn all_events(outcomes: &[StepOutcome]) -> Vec<Event> {
    outcomes.iter().flat_map(|o| o.new_events.iter().copied()).collect()
}

#[test]
fn test_full_fight_flow() {
    let request = StartRequest::new(
        hero(
            Attributes {
                strength: 18,
                dexterity: 12,
                intelligence: 4,
                wisdom: 6,
                charisma: 8,
                constitution: 14,
                luck: 5,
            },
            4,
            Build::Warrior,
        ),
        foe(Attributes::uniform(7), 3, Build::Mage),
    );

    let (initial, outcomes) = run_in_chunks(request, 99, 3);
    assert_eq!(initial.player.hp, initial.player.hp_max);
    assert_eq!(initial.cursor, 0);

    let events = all_events(&outcomes);
    let last = outcomes.last().unwrap();

    // Exactly one end marker, and it is the final event
    assert_eq!(events.iter().filter(|e| e.is_end()).count(), 1);
    assert!(events.last().unwrap().is_end());
    assert_eq!(last.snapshot.cursor, events.len());
    assert!(last.winner.is_some());

    // Only the final outcome reports a winner
    for outcome in &outcomes[..outcomes.len() - 1] {
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.status, CombatStatus::Active);
    }

    // Damage in the log accounts for every HP lost
    let dealt_to_enemy: i64 = events
        .iter()
        .filter(|e| e.source() == Some(Side::Player))
        .map(Event::damage)
        .sum();
    let enemy = &last.snapshot.enemy;
    assert_eq!(enemy.hp, (enemy.hp_max - dealt_to_enemy).max(0));
}

#[test]
fn test_chunk_size_does_not_change_the_fight() {
    let request = || {
        StartRequest::new(
            hero(Attributes::uniform(12), 5, Build::Ranger),
            foe(Attributes::uniform(11), 5, Build::Warrior),
        )
    };

    let (_, one_by_one) = run_in_chunks(request(), 7, 1);
    let (_, all_at_once) = run_in_chunks(request(), 7, 1_000);

    assert_eq!(all_events(&one_by_one), all_events(&all_at_once));
    assert_eq!(
        one_by_one.last().unwrap().winner,
        all_at_once.last().unwrap().winner
    );
}

#[test]
fn test_json_store_rehydrates_between_steps() {
    let mut arena = Arena::new(JsonStore::new());
    let mut dice = RandomDice::seeded(5);
    let (id, _) = arena
        .start(StartRequest::new(
            hero(Attributes::uniform(9), 2, Build::Mage),
            foe(Attributes::uniform(9), 2, Build::Mage),
        ))
        .unwrap();

    let first = arena.step(id, 1, &mut dice).unwrap();
    assert!(arena.store().document(id).is_some());
    assert_eq!(arena.snapshot(id).unwrap(), first.snapshot);

    let mut in_process = CombatState::new(
        hero(Attributes::uniform(9), 2, Build::Mage),
        foe(Attributes::uniform(9), 2, Build::Mage),
    )
    .unwrap();
    let mut same_dice = RandomDice::seeded(5);
    in_process.advance(1, &mut same_dice);
    assert_eq!(in_process.take_new_events(), first.new_events);
}

#[test]
fn test_text_log_derived_from_events() {
    let mut state = CombatState::new(
        hero(Attributes::uniform(10), 1, Build::Warrior),
        foe(Attributes::uniform(10), 1, Build::Warrior),
    )
    .unwrap();
    state.run_to_completion(&mut RandomDice::seeded(3));

    let lines = state.text_log();
    assert_eq!(lines.len(), state.log().len());
    for (line, event) in lines.iter().zip(state.log()) {
        assert_eq!(line, &event.describe("Hero", "Foe"));
    }
}

fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    (
        0i64..60,
        0i64..60,
        0i64..60,
        0i64..60,
        0i64..60,
        0i64..60,
        0i64..60,
    )
        .prop_map(|(s, d, i, w, ch, co, l)| Attributes {
            strength: s,
            dexterity: d,
            intelligence: i,
            wisdom: w,
            charisma: ch,
            constitution: co,
            luck: l,
        })
}

fn build_strategy() -> impl Strategy<Value = Build> {
    prop_oneof![Just(Build::Warrior), Just(Build::Ranger), Just(Build::Mage)]
}

fn spec_strategy(name: &'static str) -> impl Strategy<Value = CombatantSpec> {
    (attributes_strategy(), 1u32..30, build_strategy())
        .prop_map(move |(attrs, level, build)| CombatantSpec::new(name, level, build, attrs))
}

proptest! {
    #[test]
    fn prop_fights_terminate_within_cap_with_hp_in_bounds(
        player in spec_strategy("Hero"),
        enemy in spec_strategy("Foe"),
        seed in any::<u64>(),
    ) {
        let mut state = CombatState::new(player, enemy).unwrap();
        let mut dice = RandomDice::seeded(seed);

        while !state.is_finished() {
            state.advance_round(&mut dice);
            for side in Side::all() {
                let c = state.combatant(*side);
                prop_assert!(c.current_hp >= 0);
                prop_assert!(c.current_hp <= c.max_hp());
            }
            prop_assert!(state.round <= 20);
        }

        prop_assert_eq!(state.log().iter().filter(|e| e.is_end()).count(), 1);
        if state.player.is_alive() && state.enemy.is_alive() {
            prop_assert_eq!(state.winner, Winner::Draw);
            prop_assert_eq!(state.round, 20);
        }
    }

    #[test]
    fn prop_seeded_fights_are_deterministic(
        player in spec_strategy("Hero"),
        enemy in spec_strategy("Foe"),
        seed in any::<u64>(),
        chunk in 1u32..5,
    ) {
        let request = StartRequest::new(player, enemy);
        let (_, a) = run_in_chunks(request.clone(), seed, chunk);
        let (_, b) = run_in_chunks(request, seed, chunk);

        prop_assert_eq!(all_events(&a), all_events(&b));
        prop_assert_eq!(a.last().unwrap().winner, b.last().unwrap().winner);
    }

    #[test]
    fn prop_zero_round_step_changes_nothing(
        player in spec_strategy("Hero"),
        enemy in spec_strategy("Foe"),
        seed in any::<u64>(),
        warmup in 0u32..3,
    ) {
        let mut arena = Arena::new(InMemoryStore::new());
        let mut dice = RandomDice::seeded(seed);
        let (id, _) = arena.start(StartRequest::new(player, enemy)).unwrap();

        let before = arena.step(id, warmup, &mut dice);
        // The warmup may already have finished the fight
        if let Ok(before) = before {
            if !before.is_finished() {
                let idle = arena.step(id, 0, &mut dice).unwrap();
                prop_assert!(idle.new_events.is_empty());
                prop_assert_eq!(idle.snapshot, before.snapshot);
            }
        }
    }
}
