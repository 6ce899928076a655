//! Tests for agents, the roster, and the factory.

#[cfg(test)]
mod factory_tests {
    use fate_core::{AgentId, AgentKind, FateError, GridBounds, GridPos, SimRng};

    use crate::{create_agent, create_agent_named, create_random_agent};

    #[test]
    fn creates_agent_at_position() {
        let a = create_agent(AgentKind::Bandit, "Robin", 3, 4).unwrap();
        assert_eq!(a.kind(), AgentKind::Bandit);
        assert_eq!(a.name(), "Robin");
        assert_eq!(a.position(), GridPos::new(3, 4));
        assert!(a.is_alive());
        assert_eq!(a.id(), AgentId::INVALID);
    }

    #[test]
    fn negative_coordinates_rejected() {
        let err = create_agent(AgentKind::Bear, "x", -1, 0).unwrap_err();
        assert!(matches!(err, FateError::InvalidCoordinates { x: -1, y: 0 }));
        assert!(create_agent(AgentKind::Bear, "x", 0, -5).is_err());
    }

    #[test]
    fn unknown_type_rejected() {
        let err = create_agent_named("Dragon", "Smaug", 1, 1).unwrap_err();
        assert!(matches!(err, FateError::UnknownKind(_)));
    }

    #[test]
    fn coordinates_checked_before_type() {
        let err = create_agent_named("Dragon", "Smaug", -1, 1).unwrap_err();
        assert!(matches!(err, FateError::InvalidCoordinates { .. }));
    }

    #[test]
    fn named_constructor_parses_kind() {
        let a = create_agent_named("Werewolf", "Lupin", 0, 0).unwrap();
        assert_eq!(a.kind(), AgentKind::Werewolf);
    }

    #[test]
    fn random_agents_are_in_bounds_and_prefixed() {
        let bounds = GridBounds::new(20, 10);
        let mut rng = SimRng::new(3);
        for i in 0..200 {
            let a = create_random_agent(&format!("NPC_{i}"), bounds, &mut rng).unwrap();
            assert!(bounds.contains(a.position()));
            assert_eq!(a.name(), format!("{}_NPC_{i}", a.kind()));
        }
    }

    #[test]
    fn random_placement_is_seed_deterministic() {
        let bounds = GridBounds::new(100, 100);
        let mut r1 = SimRng::new(11);
        let mut r2 = SimRng::new(11);
        for _ in 0..20 {
            let a = create_random_agent("p", bounds, &mut r1).unwrap();
            let b = create_random_agent("p", bounds, &mut r2).unwrap();
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.position(), b.position());
        }
    }

    #[test]
    fn random_agent_on_empty_map_errors() {
        let mut rng = SimRng::new(0);
        assert!(create_random_agent("p", GridBounds::new(0, 10), &mut rng).is_err());
    }
}

#[cfg(test)]
mod agent_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use fate_core::{AgentKind, GridBounds, GridPos, SimRng};

    use crate::{KillEvent, create_agent};

    fn event(killer: &crate::Agent, victim: &crate::Agent) -> KillEvent {
        KillEvent {
            killer:       killer.snapshot(),
            victim:       victim.snapshot(),
            attack_roll:  6,
            defense_roll: 1,
        }
    }

    #[test]
    fn kill_transitions_exactly_once() {
        let a = create_agent(AgentKind::Bear, "a", 0, 0).unwrap();
        assert!(a.kill());
        assert!(!a.is_alive());
        assert!(!a.kill(), "second kill must be a no-op");
        assert!(!a.is_alive());
    }

    #[test]
    fn movement_respects_bounds_and_reach() {
        let bounds = GridBounds::new(30, 30);
        let mut rng = SimRng::new(5);
        for kind in AgentKind::ALL {
            let a = create_agent(kind, "m", 15, 15).unwrap();
            for _ in 0..500 {
                let before = a.position();
                assert!(a.move_randomly(&mut rng, bounds));
                let after = a.position();
                assert!(bounds.contains(after), "{kind} left the map: {after}");
                assert!((after.x - before.x).abs() <= kind.move_distance());
                assert!((after.y - before.y).abs() <= kind.move_distance());
            }
        }
    }

    #[test]
    fn dead_agents_do_not_move() {
        let a = create_agent(AgentKind::Werewolf, "w", 50, 50).unwrap();
        a.kill();
        let mut rng = SimRng::new(1);
        assert!(!a.move_randomly(&mut rng, GridBounds::new(100, 100)));
        assert_eq!(a.position(), GridPos::new(50, 50));
    }

    #[test]
    fn kill_range_uses_either_distance() {
        // Werewolf reach is 5, Bear reach is 10: a 7-cell gap is in range.
        let bear = create_agent(AgentKind::Bear, "b", 0, 0).unwrap();
        let wolf = create_agent(AgentKind::Werewolf, "w", 7, 0).unwrap();
        assert!(bear.in_kill_range(&wolf));
        assert!(wolf.in_kill_range(&bear));

        // Two werewolves 7 apart are out of range of each other.
        let w2 = create_agent(AgentKind::Werewolf, "w2", 7, 0).unwrap();
        let w1 = create_agent(AgentKind::Werewolf, "w1", 0, 0).unwrap();
        assert!(!w1.in_kill_range(&w2));
    }

    #[test]
    fn kill_range_boundary_is_inclusive() {
        let a = create_agent(AgentKind::Bandit, "a", 0, 0).unwrap();
        let b = create_agent(AgentKind::Bear, "b", 6, 8).unwrap(); // distance 10
        assert!(a.in_kill_range(&b));
    }

    #[test]
    fn notify_reaches_every_subscriber() {
        let bear = create_agent(AgentKind::Bear, "b", 0, 0).unwrap();
        let wolf = create_agent(AgentKind::Werewolf, "w", 0, 0).unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let hits = Arc::clone(&hits);
            bear.add_observer(Arc::new(move |_: &KillEvent| {
                hits.fetch_add(1, Ordering::Relaxed);
            }));
        }
        {
            let seen = Arc::clone(&seen);
            bear.add_observer(Arc::new(move |e: &KillEvent| {
                seen.lock().unwrap().push(e.log_line());
            }));
        }

        assert_eq!(bear.record_kill(), 1);
        let notified = bear.notify_kill(&event(&bear, &wolf));
        assert_eq!(notified, 2);
        assert_eq!(hits.load(Ordering::Relaxed), 1);
        assert_eq!(bear.kills(), 1);
        assert_eq!(seen.lock().unwrap().as_slice(), ["[KILL] Bear b killed Werewolf w"]);
    }

    #[test]
    fn snapshot_display() {
        let a = create_agent(AgentKind::Bear, "Bruno", 4, 2).unwrap();
        assert_eq!(a.snapshot().to_string(), "Bear Bruno at (4, 2) [ALIVE]");
        a.kill();
        assert_eq!(a.snapshot().to_string(), "Bear Bruno at (4, 2) [DEAD]");
    }
}

#[cfg(test)]
mod roster_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fate_core::{AgentId, AgentKind, FateError, GridBounds, SimRng};

    use crate::{Census, KillEvent, RosterBuilder, create_agent};

    #[test]
    fn ids_follow_insertion_order() {
        let roster = RosterBuilder::new()
            .agent(create_agent(AgentKind::Bear, "a", 0, 0).unwrap())
            .agent(create_agent(AgentKind::Bandit, "b", 0, 0).unwrap())
            .build()
            .unwrap();
        let agents = roster.read().unwrap();
        assert_eq!(agents[0].id(), AgentId(0));
        assert_eq!(agents[1].id(), AgentId(1));
        assert_eq!(agents[1].name(), "b");
    }

    #[test]
    fn slot_ids_stop_short_of_the_sentinel() {
        use crate::roster::slot_id;

        assert_eq!(slot_id(3).unwrap(), AgentId(3));
        assert_eq!(slot_id(u32::MAX as usize - 1).unwrap(), AgentId(u32::MAX - 1));
        assert!(matches!(slot_id(u32::MAX as usize), Err(FateError::RosterFull(_))));
    }

    #[test]
    fn get_by_id() {
        let roster = RosterBuilder::new()
            .agent(create_agent(AgentKind::Bear, "a", 0, 0).unwrap())
            .build()
            .unwrap();
        assert_eq!(roster.get(AgentId(0)).unwrap().name(), "a");
        assert!(matches!(roster.get(AgentId(9)), Err(FateError::AgentNotFound(AgentId(9)))));
    }

    #[test]
    fn random_agents_numbered_from_one() {
        let mut rng = SimRng::new(1);
        let roster = RosterBuilder::new()
            .random_agents(3, GridBounds::new(10, 10), &mut rng)
            .unwrap()
            .build()
            .unwrap();
        let names: Vec<String> = roster.snapshot().unwrap().into_iter().map(|s| s.name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.ends_with(&format!("_NPC_{}", i + 1)), "{name}");
        }
    }

    #[test]
    fn observers_wired_onto_every_agent() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let mut rng = SimRng::new(2);
        let roster = RosterBuilder::new()
            .random_agents(5, GridBounds::new(10, 10), &mut rng)
            .unwrap()
            .observer(Arc::new(move |_: &KillEvent| {
                c.fetch_add(1, Ordering::Relaxed);
            }))
            .build()
            .unwrap();
        for agent in roster.read().unwrap().iter() {
            assert_eq!(agent.observer_count(), 1);
        }
    }

    #[test]
    fn census_counts_alive_and_dead_by_kind() {
        let roster = RosterBuilder::new()
            .agent(create_agent(AgentKind::Bear, "b1", 0, 0).unwrap())
            .agent(create_agent(AgentKind::Bear, "b2", 0, 0).unwrap())
            .agent(create_agent(AgentKind::Werewolf, "w", 0, 0).unwrap())
            .agent(create_agent(AgentKind::Bandit, "r", 0, 0).unwrap())
            .build()
            .unwrap();
        roster.get(AgentId(1)).unwrap().kill();
        roster.get(AgentId(2)).unwrap().kill();

        let census = roster.census().unwrap();
        assert_eq!(census.alive_of(AgentKind::Bear), 1);
        assert_eq!(census.dead_of(AgentKind::Bear), 1);
        assert_eq!(census.dead_of(AgentKind::Werewolf), 1);
        assert_eq!(census.alive_of(AgentKind::Bandit), 1);
        assert_eq!(census.alive(), 2);
        assert_eq!(census.dead(), 2);
        assert_eq!(census.total(), roster.len());

        assert_eq!(Census::from_snapshots(&roster.snapshot().unwrap()), census);
    }
}
