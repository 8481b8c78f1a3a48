//! PetPal Headless Simulation Harness
//!
//! Validates the reference tables and drives the engine through simulated
//! days with a manual clock and a fixed seed. Runs entirely in-process: no
//! device storage, no rendering.
//!
//! Usage:
//!   cargo run -p petpal-simtest
//!   cargo run -p petpal-simtest -- --verbose
//!   cargo run -p petpal-simtest -- --json

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use petpal_core::prelude::*;
use petpal_core::systems::apply_elapsed_decay;
use petpal_logic::achievements::{AchievementId, ACHIEVEMENTS};
use petpal_logic::actions::ActionKind;
use petpal_logic::breeds::BREEDS;
use petpal_logic::events::{EventTrigger, RANDOM_EVENTS};
use petpal_logic::gifts::DAILY_GIFTS;
use petpal_logic::items::{item_by_id, ITEMS};
use petpal_logic::minigames::MiniGameKind;
use petpal_logic::progression::{apply_xp, BondTier};
use petpal_logic::stats::{Stat, StatVector};
use petpal_logic::tasks::{DAILY_TEMPLATES, WEEKLY_TEMPLATES};
use petpal_logic::tricks::{TrickId, TRICKS};
use serde::Serialize;

const SEED: u64 = 20240311;
const SIM_DAYS: i64 = 45;

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

#[derive(Serialize)]
struct Summary<'a> {
    passed: usize,
    failed: usize,
    total: usize,
    results: &'a [TestResult],
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    if !json {
        println!("=== PetPal Simulation Harness ===\n");
    }

    let mut results = Vec::new();

    // 1. Reference tables
    results.extend(validate_tables(json));

    // 2. Decay resolver edge cases
    results.extend(validate_decay(json));

    // 3. Progression ledger curves
    results.extend(validate_progression(json));

    // 4. Multi-day play through the engine
    results.extend(simulate_play(verbose && !json, json));

    // 5. Streak gap and persistence
    results.extend(validate_gap_and_reload(json));

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    if json {
        let summary = Summary {
            passed,
            failed,
            total,
            results: &results,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("failed to encode summary: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        println!();
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed, total, failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn section(title: &str, quiet: bool) {
    if !quiet {
        println!("--- {} ---", title);
    }
}

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 11)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

// ── 1. Reference tables ─────────────────────────────────────────────────

fn validate_tables(quiet: bool) -> Vec<TestResult> {
    section("Reference Tables", quiet);
    let mut results = Vec::new();

    let breed_ids: HashSet<_> = BREEDS.iter().map(|b| b.id).collect();
    let sane_multipliers = BREEDS.iter().all(|b| {
        [b.energy_decay, b.happiness_decay, b.hunger_decay, b.play_bonus]
            .iter()
            .all(|m| *m > 0.0 && *m < 3.0)
    });
    results.push(TestResult {
        name: "breeds_unique_and_sane".into(),
        passed: breed_ids.len() == BREEDS.len() && sane_multipliers,
        detail: format!("{} breeds, multipliers in (0, 3)", BREEDS.len()),
    });

    let item_ids: HashSet<_> = ITEMS.iter().map(|i| i.id).collect();
    results.push(TestResult {
        name: "items_unique".into(),
        passed: item_ids.len() == ITEMS.len(),
        detail: format!("{} catalog items", ITEMS.len()),
    });

    let mut missing = Vec::new();
    let reward_items = ACHIEVEMENTS
        .iter()
        .filter_map(|a| a.reward.item)
        .chain(DAILY_GIFTS.iter().filter_map(|g| g.item))
        .chain(WEEKLY_TEMPLATES.iter().filter_map(|t| t.item))
        .chain(RANDOM_EVENTS.iter().filter_map(|e| e.reward.item));
    for id in reward_items {
        if item_by_id(id).is_none() {
            missing.push(id);
        }
    }
    results.push(TestResult {
        name: "reward_items_in_catalog".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            "every reward item exists".into()
        } else {
            format!("missing: {}", missing.join(", "))
        },
    });

    let bad_ranges = DAILY_TEMPLATES
        .iter()
        .chain(WEEKLY_TEMPLATES.iter())
        .filter(|t| {
            t.target_range.0 == 0
                || t.target_range.0 > t.target_range.1
                || t.coin_range.0 > t.coin_range.1
        })
        .count();
    results.push(TestResult {
        name: "task_template_ranges".into(),
        passed: bad_ranges == 0 && DAILY_TEMPLATES.len() >= 3,
        detail: format!(
            "{} daily, {} weekly templates, {} bad ranges",
            DAILY_TEMPLATES.len(),
            WEEKLY_TEMPLATES.len(),
            bad_ranges
        ),
    });

    let bad_chances = RANDOM_EVENTS
        .iter()
        .filter(|e| !(0.0..=1.0).contains(&e.chance))
        .count();
    results.push(TestResult {
        name: "event_chances_are_probabilities".into(),
        passed: bad_chances == 0,
        detail: format!("{} events, {} out of [0, 1]", RANDOM_EVENTS.len(), bad_chances),
    });

    let ascending = TRICKS
        .windows(2)
        .all(|w| w[0].required_bond < w[1].required_bond);
    results.push(TestResult {
        name: "tricks_bond_ascending".into(),
        passed: ascending && TRICKS[0].required_bond == 0,
        detail: "sit is free, later tricks need more bond".into(),
    });

    let days: Vec<u32> = DAILY_GIFTS.iter().map(|g| g.day).collect();
    results.push(TestResult {
        name: "gift_calendar_seven_days".into(),
        passed: days == (1..=7).collect::<Vec<_>>(),
        detail: format!("days {:?}", days),
    });

    results
}

// ── 2. Decay ────────────────────────────────────────────────────────────

fn decay_fixture() -> GameState {
    let mut engine = PetEngine::new(EngineConfig::seeded(SEED), ManualClock::new(start_time()));
    engine.onboard("dog_02", "Probe");
    let mut state = engine.state().clone();
    state.stats = StatVector::splat(100);
    // Keep login events out of the stat comparisons.
    state.last_random_event = Some(i64::MAX / 2);
    state
}

fn validate_decay(quiet: bool) -> Vec<TestResult> {
    section("Decay Resolver", quiet);
    let mut results = Vec::new();
    let mut rng = rand_free_rng();

    let base = decay_fixture();
    let t0 = base.last_update;
    let day_ms = 24 * 3_600_000;

    let mut one_day = base.clone();
    apply_elapsed_decay(&mut one_day, t0 + day_ms, &mut rng);
    let mut ten_days = base.clone();
    apply_elapsed_decay(&mut ten_days, t0 + 10 * day_ms, &mut rng);
    results.push(TestResult {
        name: "decay_capped_at_one_day".into(),
        passed: one_day.stats == ten_days.stats,
        detail: format!("1d={:?} 10d={:?}", one_day.stats, ten_days.stats),
    });

    let mut anomaly = base.clone();
    let out = apply_elapsed_decay(&mut anomaly, t0 - 120_000, &mut rng);
    results.push(TestResult {
        name: "decay_clock_anomaly".into(),
        passed: out.clock_anomaly && anomaly.stats == base.stats && anomaly.last_update == t0 - 120_000,
        detail: "backwards clock stamps last_update only".into(),
    });

    let mut twice = base.clone();
    apply_elapsed_decay(&mut twice, t0 + 3 * 3_600_000, &mut rng);
    let after_first = twice.stats;
    apply_elapsed_decay(&mut twice, t0 + 3 * 3_600_000, &mut rng);
    results.push(TestResult {
        name: "decay_idempotent".into(),
        passed: twice.stats == after_first,
        detail: "second call at the same instant decays nothing".into(),
    });

    let floor = Stat::ALL.iter().all(|s| ten_days.stats.get(*s) <= 100);
    results.push(TestResult {
        name: "decay_stays_in_range".into(),
        passed: floor,
        detail: format!("thirst after a day = {}", ten_days.stats.thirst),
    });

    results
}

/// Decay only rolls the RNG for login events, which the fixture suppresses.
fn rand_free_rng() -> impl rand::Rng {
    rand::rngs::mock::StepRng::new(u64::MAX, 0)
}

// ── 3. Progression ──────────────────────────────────────────────────────

fn validate_progression(quiet: bool) -> Vec<TestResult> {
    section("Progression Ledger", quiet);
    let mut results = Vec::new();

    let gain = apply_xp(1, 0, 210);
    results.push(TestResult {
        name: "xp_210_from_level_1".into(),
        passed: (gain.level, gain.xp) == (2, 110),
        detail: format!("level {} xp {}", gain.level, gain.xp),
    });

    let gain = apply_xp(1, 0, 460);
    results.push(TestResult {
        name: "xp_multi_level_rollover".into(),
        passed: (gain.level, gain.xp, gain.levels_gained) == (4, 10, 3),
        detail: format!("level {} xp {}", gain.level, gain.xp),
    });

    let gain = apply_xp(1, 0, u64::from(u32::MAX));
    results.push(TestResult {
        name: "xp_level_cap".into(),
        passed: gain.level == 20,
        detail: format!("huge grant stops at level {}", gain.level),
    });

    let tiers = [
        (20, BondTier::Stranger),
        (21, BondTier::Acquaintance),
        (60, BondTier::Friend),
        (61, BondTier::BestFriend),
        (100, BondTier::Soulmate),
    ];
    let bad: Vec<_> = tiers
        .iter()
        .filter(|(bond, tier)| BondTier::from_bond(*bond) != *tier)
        .collect();
    results.push(TestResult {
        name: "bond_tier_boundaries".into(),
        passed: bad.is_empty(),
        detail: format!("{} boundary mismatches", bad.len()),
    });

    results
}

// ── 4. Simulated play ───────────────────────────────────────────────────

fn invariant_violations(state: &GameState) -> Vec<String> {
    let mut problems = Vec::new();
    if !state.progression.is_consistent() {
        problems.push("bond tier out of sync".to_string());
    }
    if state.progression.bond > 100 {
        problems.push(format!("bond {}", state.progression.bond));
    }
    if state.streak.longest < state.streak.current {
        problems.push("longest streak below current".to_string());
    }
    if !state.inventory.is_consistent() {
        problems.push("equipped item not owned".to_string());
    }
    for task in state.tasks() {
        if task.current > task.target {
            problems.push(format!("task {} over target", task.id));
        }
    }
    for stat in Stat::ALL {
        if state.stats.get(stat) > 100 {
            problems.push(format!("{:?} out of range", stat));
        }
    }
    problems
}

fn simulate_play(verbose: bool, quiet: bool) -> Vec<TestResult> {
    section(&format!("Simulated Play ({} days)", SIM_DAYS), quiet);
    let mut results = Vec::new();

    let mut engine = PetEngine::new(EngineConfig::seeded(SEED), ManualClock::new(start_time()));
    results.push(TestResult {
        name: "sim_onboard".into(),
        passed: engine.onboard("dog_01", "Boncuk"),
        detail: "dog_01 adopted".into(),
    });
    results.push(TestResult {
        name: "sim_reject_second_onboard".into(),
        passed: !engine.onboard("dog_03", "Again"),
        detail: "second adoption refused".into(),
    });

    let mut violations = Vec::new();
    let mut unlocked_seen: HashSet<AchievementId> = HashSet::new();
    let mut relocked = 0;
    let mut events = 0;
    let mut claims = 0;
    let mut purchases = 0;
    let mut last_coins_earned = 0;

    for day in 0..SIM_DAYS {
        // Morning: resume, collect rewards, care for the pet.
        engine.tick();
        engine.collect_streak_reward();
        engine.claim_daily_gift();

        for (hour_offset, routine) in [
            (0, &[ActionKind::Feed, ActionKind::Water][..]),
            (3, &[ActionKind::Play, ActionKind::Walk][..]),
            (6, &[ActionKind::Bath, ActionKind::Feed, ActionKind::Water][..]),
            (9, &[ActionKind::Play, ActionKind::Sleep][..]),
        ] {
            if hour_offset > 0 {
                engine.clock_mut().advance_hours(3);
                engine.tick();
            }
            for action in routine {
                engine.perform_action(*action);
                engine.clock_mut().advance(Duration::seconds(2));
            }
            if engine.trigger_event(EventTrigger::Action).is_some() {
                events += 1;
            }
        }

        let game = MiniGameKind::ALL[(day as usize) % MiniGameKind::ALL.len()];
        engine.play_mini_game(game, 4, 5);

        let tricks: Vec<TrickId> = engine.state().unlocked_tricks.iter().copied().collect();
        for trick in tricks {
            engine.perform_trick(trick);
            engine.clock_mut().advance(Duration::seconds(31));
        }

        let witnessed: Vec<String> = engine.state().seen_events.clone();
        if let Some(event) = RANDOM_EVENTS.get(day as usize % RANDOM_EVENTS.len()) {
            if !witnessed.iter().any(|id| id == event.id) {
                engine.witness_event(event.id);
            }
        }

        let claimable: Vec<String> = engine
            .state()
            .tasks()
            .filter(|t| t.is_claimable())
            .map(|t| t.id.clone())
            .collect();
        for id in claimable {
            if engine.claim_task(&id).is_some() {
                claims += 1;
            }
        }

        let affordable = ITEMS
            .iter()
            .filter(|i| !i.reward_only && !engine.state().inventory.owns(i.id))
            .filter(|i| i.price <= engine.state().progression.coins)
            .min_by_key(|i| i.price)
            .map(|i| i.id);
        if let Some(id) = affordable {
            if engine.purchase_item(id) {
                purchases += 1;
                engine.equip_item(id);
            }
        }

        engine.tick();
        for problem in invariant_violations(engine.state()) {
            violations.push(format!("day {}: {}", day, problem));
        }
        for entry in &engine.state().achievements {
            if entry.unlocked {
                unlocked_seen.insert(entry.id);
            } else if unlocked_seen.contains(&entry.id) {
                relocked += 1;
            }
        }
        let earned = engine.state().statistics.total_coins_earned;
        if earned < last_coins_earned {
            violations.push(format!("day {}: coins earned decreased", day));
        }
        last_coins_earned = earned;

        if verbose {
            let s = engine.state();
            println!(
                "  day {:2}: lvl {:2} xp {:4} (+{:3}) coins {:5} bond {:3} streak {:2} mood {:?}",
                day + 1,
                s.progression.level,
                s.progression.xp,
                s.progression.xp_to_next_level(),
                s.progression.coins,
                s.progression.bond,
                s.streak.current,
                engine.mood()
            );
        }

        // Sleep through to the next morning.
        engine.clock_mut().set(start_time() + Duration::days(day + 1));
    }

    let s = engine.state();
    results.push(TestResult {
        name: "sim_invariants_hold".into(),
        passed: violations.is_empty(),
        detail: if violations.is_empty() {
            format!("{} days without violations", SIM_DAYS)
        } else {
            violations.join("; ")
        },
    });
    results.push(TestResult {
        name: "sim_achievements_monotonic".into(),
        passed: relocked == 0,
        detail: format!("{} unlocked, {} re-locked", unlocked_seen.len(), relocked),
    });
    results.push(TestResult {
        name: "sim_streak_daily".into(),
        passed: s.streak.current as i64 == SIM_DAYS && s.streak.longest as i64 == SIM_DAYS,
        detail: format!("current {} longest {}", s.streak.current, s.streak.longest),
    });
    results.push(TestResult {
        name: "sim_progressed".into(),
        passed: s.progression.level > 1 && s.progression.bond > 0,
        detail: format!(
            "level {} bond {} ({:?})",
            s.progression.level, s.progression.bond, s.progression.bond_tier
        ),
    });
    results.push(TestResult {
        name: "sim_tasks_claimed".into(),
        passed: claims > 0 && s.statistics.total_tasks_completed == claims,
        detail: format!("{} task claims", claims),
    });
    results.push(TestResult {
        name: "sim_shop_used".into(),
        passed: purchases > 0 && s.statistics.total_coins_spent > 0,
        detail: format!("{} purchases, {} coins spent", purchases, s.statistics.total_coins_spent),
    });
    results.push(TestResult {
        name: "sim_tricks_unlocked".into(),
        passed: s.unlocked_tricks.len() > 1,
        detail: format!("{} tricks known", s.unlocked_tricks.len()),
    });
    results.push(TestResult {
        name: "sim_counters".into(),
        passed: s.statistics.days_played as i64 == SIM_DAYS
            && s.statistics.total_mini_games as i64 == SIM_DAYS,
        detail: format!(
            "{} days played, {} mini-games, {} action events",
            s.statistics.days_played, s.statistics.total_mini_games, events
        ),
    });

    results
}

// ── 5. Gap & reload ─────────────────────────────────────────────────────

fn validate_gap_and_reload(quiet: bool) -> Vec<TestResult> {
    section("Streak Gap & Persistence", quiet);
    let mut results = Vec::new();

    let mut engine = PetEngine::new(EngineConfig::seeded(SEED), ManualClock::new(start_time()));
    engine.onboard("dog_04", "Zeytin");
    for _ in 0..3 {
        engine.clock_mut().advance_days(1);
        engine.tick();
    }
    let before_gap = engine.state().streak.clone();
    engine.clock_mut().advance_days(3);
    engine.tick();
    let after_gap = engine.state().streak.clone();
    results.push(TestResult {
        name: "streak_gap_resets".into(),
        passed: before_gap.current == 4 && after_gap.current == 1 && after_gap.longest == 4,
        detail: format!(
            "before {} / after {} / longest {}",
            before_gap.current, after_gap.current, after_gap.longest
        ),
    });

    let mut buffer = Vec::new();
    let saved = engine.save(&mut buffer).is_ok();
    let snapshot = engine.state().clone();
    let mut restored = PetEngine::new(EngineConfig::seeded(SEED), ManualClock::new(start_time()));
    let loaded = restored.load(&buffer[..]).is_ok();
    results.push(TestResult {
        name: "save_load_roundtrip".into(),
        passed: saved && loaded && restored.state() == &snapshot,
        detail: format!("{} bytes", buffer.len()),
    });

    let json_ok = match engine.export_json() {
        Ok(text) => {
            let mut from_json =
                PetEngine::new(EngineConfig::seeded(SEED), ManualClock::new(start_time()));
            from_json.import_json(&text).is_ok() && from_json.state() == &snapshot
        }
        Err(_) => false,
    };
    results.push(TestResult {
        name: "json_export_roundtrip".into(),
        passed: json_ok,
        detail: "export then import reproduces the state".into(),
    });

    results
}
