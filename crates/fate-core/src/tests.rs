//! Unit tests for fate-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert!(!AgentId::INVALID.is_valid());
        assert!(AgentId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{GridBounds, GridPos};

    #[test]
    fn zero_distance() {
        let p = GridPos::new(3, 4);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        assert_eq!(GridPos::new(0, 0).distance(GridPos::new(3, 4)), 5.0);
        assert_eq!(GridPos::new(3, 4).distance(GridPos::new(0, 0)), 5.0);
    }

    #[test]
    fn clamp_to_bounds() {
        let b = GridBounds::new(100, 50);
        assert_eq!(b.clamp(GridPos::new(-7, 60)), GridPos::new(0, 49));
        assert_eq!(b.clamp(GridPos::new(150, -1)), GridPos::new(99, 0));
        assert_eq!(b.clamp(GridPos::new(10, 10)), GridPos::new(10, 10));
    }

    #[test]
    fn offset_clamped_stays_inside() {
        let b = GridBounds::new(10, 10);
        let p = GridPos::new(9, 0).offset_clamped(40, -40, b);
        assert_eq!(p, GridPos::new(9, 0));
        assert!(b.contains(p));
    }

    #[test]
    fn contains_is_half_open() {
        let b = GridBounds::new(10, 10);
        assert!(b.contains(GridPos::new(0, 0)));
        assert!(b.contains(GridPos::new(9, 9)));
        assert!(!b.contains(GridPos::new(10, 9)));
        assert!(!b.contains(GridPos::new(-1, 0)));
    }
}

#[cfg(test)]
mod kind {
    use crate::{AgentKind, FateError};

    #[test]
    fn dominance_has_exactly_three_pairs() {
        let pairs: Vec<_> = AgentKind::ALL
            .iter()
            .flat_map(|&a| AgentKind::ALL.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a.can_kill(b))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (AgentKind::Bear, AgentKind::Werewolf),
                (AgentKind::Werewolf, AgentKind::Bandit),
                (AgentKind::Bandit, AgentKind::Bear),
            ]
        );
    }

    #[test]
    fn dominance_is_irreflexive() {
        for k in AgentKind::ALL {
            assert!(!k.can_kill(k), "{k} must not kill its own kind");
        }
    }

    #[test]
    fn each_kind_killed_by_exactly_one() {
        for victim in AgentKind::ALL {
            let killers = AgentKind::ALL.iter().filter(|k| k.can_kill(victim)).count();
            assert_eq!(killers, 1, "{victim}");
        }
    }

    #[test]
    fn dominance_is_antisymmetric() {
        for a in AgentKind::ALL {
            for b in AgentKind::ALL {
                assert!(!(a.can_kill(b) && b.can_kill(a)));
            }
        }
    }

    #[test]
    fn constants() {
        assert_eq!(AgentKind::Bear.move_distance(), 5);
        assert_eq!(AgentKind::Werewolf.move_distance(), 40);
        assert_eq!(AgentKind::Bandit.move_distance(), 10);
        assert_eq!(AgentKind::Bear.kill_distance(), 10);
        assert_eq!(AgentKind::Werewolf.kill_distance(), 5);
        assert_eq!(AgentKind::Bandit.kill_distance(), 10);
    }

    #[test]
    fn parse_and_display() {
        for k in AgentKind::ALL {
            assert_eq!(k.to_string().parse::<AgentKind>().unwrap(), k);
        }
        assert!(matches!("Dragon".parse::<AgentKind>(), Err(FateError::UnknownKind(s)) if s == "Dragon"));
    }

    #[test]
    fn initial_is_first_letter_of_name() {
        for k in AgentKind::ALL {
            assert_eq!(Some(k.initial()), k.as_str().chars().next());
        }
        assert_eq!(AgentKind::Bandit.symbol(), 'R');
    }
}

#[cfg(test)]
mod rng {
    use crate::{Dice, ScriptedDice, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..32).map(|_| a.roll_d6()).collect();
        let ys: Vec<u32> = (0..32).map(|_| b.roll_d6()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn d6_in_range() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let r = rng.roll_d6();
            assert!((1..=6).contains(&r));
        }
    }

    #[test]
    fn zero_sided_die_rolls_zero() {
        assert_eq!(SimRng::new(1).roll(0), 0);
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(99);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let xs: Vec<u64> = (0..8).map(|_| c1.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| c2.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn scripted_dice_cycles() {
        let mut d = ScriptedDice::new([6u32, 1]);
        assert_eq!(d.roll_d6(), 6);
        assert_eq!(d.roll_d6(), 1);
        assert_eq!(d.roll_d6(), 6);
        assert_eq!(d.history().collect::<Vec<_>>(), vec![6, 1, 6]);
    }

    #[test]
    fn empty_script_rolls_one() {
        let mut d = ScriptedDice::default();
        assert_eq!(d.roll_d6(), 1);
    }
}

#[cfg(test)]
mod time {
    use std::time::{Duration, Instant};

    use crate::{Tick, TickPacer};

    #[test]
    fn overrun_skips_sleep() {
        let mut pacer = TickPacer::new(Duration::from_millis(1));
        let started = Instant::now() - Duration::from_millis(50);
        assert!(pacer.remaining(started).is_none());
        pacer.finish_tick(started);
        assert_eq!(pacer.overruns(), 1);
        assert_eq!(pacer.tick(), Tick(1));
    }

    #[test]
    fn fast_tick_sleeps_remaining_budget() {
        let mut pacer = TickPacer::new(Duration::from_millis(20));
        let started = Instant::now();
        pacer.finish_tick(started);
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(pacer.overruns(), 0);
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::SimConfig;

    #[test]
    fn defaults_match_standard_run() {
        let c = SimConfig::default();
        assert_eq!((c.map_width, c.map_height), (100, 100));
        assert_eq!(c.agent_count, 50);
        assert_eq!(c.duration_secs, 30);
        assert_eq!(c.movement_interval, Duration::from_millis(100));
        assert!(!c.dedup_each_tick);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_map_rejected() {
        let c = SimConfig { map_width: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let c = SimConfig { movement_interval: Duration::ZERO, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }
}
