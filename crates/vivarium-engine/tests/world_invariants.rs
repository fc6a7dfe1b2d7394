//! Property tests: invariants that hold for every map, seed, and turn
//! count.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use vivarium_agent::Legend;
use vivarium_agents::{random_direction, Bouncer, WallFollower, BOUNCER, WALL, WALL_FOLLOWER};
use vivarium_core::{Coord, OccupantId};
use vivarium_engine::{Outcome, World, WorldConfig};
use vivarium_test_utils::{CallCounter, FixedHeading, HEADING};

const SYMBOLS: [char; 8] = [' ', ' ', ' ', ' ', WALL, BOUNCER, WALL_FOLLOWER, HEADING];

fn arb_plan() -> impl Strategy<Value = Vec<String>> {
    (1usize..9, 1usize..9).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), w * h).prop_map(
            move |cells| {
                cells
                    .chunks(w)
                    .map(|row| row.iter().collect::<String>())
                    .collect()
            },
        )
    })
}

fn legend(calls: &CallCounter) -> Legend {
    let counter = calls.clone();
    Legend::new()
        .obstacle(WALL)
        .unwrap()
        .agent(BOUNCER, Bouncer::new)
        .unwrap()
        .agent(WALL_FOLLOWER, WallFollower::new)
        .unwrap()
        .agent(HEADING, move |chooser| {
            FixedHeading::counted(random_direction(chooser), counter.clone())
        })
        .unwrap()
}

fn build(plan: &[String], seed: u64, calls: &CallCounter) -> World {
    let config = WorldConfig::new(plan.iter().cloned(), legend(calls)).with_seed(seed);
    World::new(config).unwrap()
}

fn census(world: &World) -> BTreeMap<OccupantId, (char, Coord)> {
    world
        .grid()
        .iter_occupied()
        .map(|(at, o)| (o.id(), (o.symbol(), at)))
        .collect()
}

proptest! {
    #[test]
    fn construction_renders_plan(plan in arb_plan(), seed in any::<u64>()) {
        let world = build(&plan, seed, &CallCounter::new());
        let expected: String = plan.iter().map(|r| format!("{r}\n")).collect();
        prop_assert_eq!(world.render(), expected);
    }

    #[test]
    fn occupants_are_conserved(plan in arb_plan(), seed in any::<u64>(), turns in 1usize..12) {
        let mut world = build(&plan, seed, &CallCounter::new());
        let before = census(&world);
        world.run(turns);
        let after = census(&world);

        prop_assert_eq!(world.occupant_count(), before.len());
        prop_assert_eq!(
            before.iter().map(|(id, (s, _))| (*id, *s)).collect::<Vec<_>>(),
            after.iter().map(|(id, (s, _))| (*id, *s)).collect::<Vec<_>>()
        );
        // Obstacles stay put.
        for (id, (symbol, at)) in &before {
            if *symbol == WALL {
                prop_assert_eq!(after[id].1, *at);
            }
        }
    }

    #[test]
    fn every_agent_acts_exactly_once(plan in arb_plan(), seed in any::<u64>(), turns in 1usize..8) {
        let calls = CallCounter::new();
        let mut world = build(&plan, seed, &calls);
        let agents = world.agent_count();
        let headings = plan.iter().flat_map(|r| r.chars()).filter(|&c| c == HEADING).count();

        for n in 1..=turns {
            let report = world.turn();
            prop_assert_eq!(report.acted(), agents);
            let ids: BTreeSet<OccupantId> = report.outcomes.iter().map(|(id, _)| *id).collect();
            prop_assert_eq!(ids.len(), agents);
            prop_assert_eq!(calls.get(), headings * n);
        }
    }

    #[test]
    fn moves_are_single_legal_steps(plan in arb_plan(), seed in any::<u64>(), turns in 1usize..8) {
        let mut world = build(&plan, seed, &CallCounter::new());
        for _ in 0..turns {
            let before = census(&world);
            let report = world.turn();
            // Replay the turn in acting order: each destination must be free
            // at the moment its mover steps in.
            let mut live: BTreeMap<Coord, OccupantId> =
                before.iter().map(|(id, (_, at))| (*at, *id)).collect();
            for (id, outcome) in &report.outcomes {
                if let Outcome::Moved { from, to } = outcome {
                    prop_assert!(!live.contains_key(to), "{} stepped onto occupied {}", id, to);
                    prop_assert_eq!(live.remove(from), Some(*id));
                    live.insert(*to, *id);
                }
            }
            for (id, outcome) in &report.outcomes {
                prop_assert_eq!(Some(before[id].1), Some(match outcome {
                    Outcome::Moved { from, .. } => *from,
                    Outcome::Waited { at } | Outcome::Blocked { at, .. } => *at,
                }));
                if let Outcome::Moved { from, to } = outcome {
                    prop_assert_eq!(from.chebyshev(*to), 1);
                    prop_assert!(world.grid().is_inside(*to));
                }
                prop_assert_eq!(world.position_of(*id), Some(outcome.position()));
            }
        }
    }

    #[test]
    fn seed_fixes_history(plan in arb_plan(), seed in any::<u64>(), turns in 1usize..8) {
        let mut a = build(&plan, seed, &CallCounter::new());
        let mut b = build(&plan, seed, &CallCounter::new());
        prop_assert_eq!(a.run(turns), b.run(turns));
        prop_assert_eq!(a.render(), b.render());
    }
}
