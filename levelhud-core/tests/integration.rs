//! Integration Tests — decoration behaviour end to end.
//!
//! Each test drives a `NameDecorator` through its public API with
//! controllable lookups, covering caching, banding, star scaling,
//! template substitution and failure isolation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use levelhud_core::config::LevelBandingConfig;
use levelhud_core::error::{HudError, Result};
use levelhud_core::lookup::{FixedObserverLevel, MonsterLookup, MonsterTable, ObserverLevelSource};
use levelhud_core::{Band, Level, NameDecorator};

/// Markup that makes the band visible in assertions.
fn bracket(band: Band, fragment: &str) -> String {
    format!("<{band}>{fragment}</{band}>")
}

fn table(entries: &[(&str, Level)]) -> Arc<MonsterTable> {
    let table = Arc::new(MonsterTable::new());
    for (name, level) in entries {
        table.insert(*name, *level);
    }
    table
}

fn decorator(monsters: Arc<MonsterTable>, banding: LevelBandingConfig) -> NameDecorator {
    NameDecorator::new(monsters, FixedObserverLevel::default(), bracket).with_banding(banding)
}

/// Registry whose reads can be switched to fail and are counted.
#[derive(Default)]
struct FlakyRegistry {
    down: AtomicBool,
    reads: AtomicUsize,
}

impl MonsterLookup for FlakyRegistry {
    fn exists(&self, _entity_id: &str) -> Result<bool> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if self.down.load(Ordering::Relaxed) {
            Err(HudError::lookup("monsters", "registry not loaded"))
        } else {
            Ok(true)
        }
    }

    fn level_of(&self, _entity_id: &str) -> Result<Level> {
        Ok(12)
    }
}

struct BrokenObserver;

impl ObserverLevelSource for BrokenObserver {
    fn current_level(&self) -> Result<Level> {
        Err(HudError::lookup("observer", "no local player"))
    }
}

// ---------------------------------------------------------------------------
// Caching
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_return_identical_string() {
    let d = decorator(table(&[("Greydwarf", 3)]), LevelBandingConfig::default());
    let first = d.decorate("Greydwarf", "Greydwarf", 4);
    for _ in 0..10 {
        assert_eq!(d.decorate("Greydwarf", "Greydwarf", 4), first);
    }
}

#[test]
fn cached_value_survives_registry_change() {
    let monsters = table(&[("Troll", 18)]);
    let d = decorator(Arc::clone(&monsters), LevelBandingConfig::default());

    let first = d.decorate("Troll", "Troll", 10);
    monsters.insert("Troll", 1);
    assert_eq!(d.decorate("Troll", "Troll", 10), first);

    // A different observer level is a different key and sees the new data.
    assert_eq!(d.decorate("Troll", "Troll", 11), "Troll <Trivial>[1]</Trivial>");
}

#[test]
fn cache_hit_performs_no_lookups() {
    let registry = Arc::new(FlakyRegistry::default());
    let d = NameDecorator::new(Arc::clone(&registry), FixedObserverLevel::default(), bracket);

    let _ = d.decorate("Draugr", "Draugr", 12);
    let reads = registry.reads.load(Ordering::Relaxed);
    let _ = d.decorate("Draugr", "Draugr", 12);
    assert_eq!(registry.reads.load(Ordering::Relaxed), reads);
}

#[test]
fn raw_name_is_part_of_the_key() {
    let d = decorator(table(&[("Boar", 1)]), LevelBandingConfig::default());
    assert_eq!(d.decorate("Boar", "Boar", 1), "Boar <Neutral>[1]</Neutral>");
    assert_eq!(d.decorate("Boar", "Villsvin", 1), "Villsvin <Neutral>[1]</Neutral>");
    assert_eq!(d.cache_len(), 2);
}

// ---------------------------------------------------------------------------
// Pass-through
// ---------------------------------------------------------------------------

#[test]
fn non_monster_passes_through() {
    let d = decorator(table(&[]), LevelBandingConfig::default());
    assert_eq!(d.decorate("Wolf", "Wolf", 3), "Wolf");
}

#[test]
fn late_registration_is_picked_up() {
    let monsters = table(&[]);
    let d = decorator(Arc::clone(&monsters), LevelBandingConfig::default());

    assert_eq!(d.decorate("Wolf", "Wolf", 3), "Wolf");
    monsters.insert("Wolf", 8);
    assert_eq!(d.decorate("Wolf", "Wolf", 3), "Wolf <Neutral>[8]</Neutral>");
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn unknown_level_renders_question_marks() {
    let d = decorator(table(&[("Serpent", 0)]), LevelBandingConfig::default());
    let out = d.decorate("Serpent", "Serpent", 1);
    assert!(out.contains("???"), "{out}");
    assert_eq!(out, "Serpent <Neutral>[???]</Neutral>");
}

#[test]
fn banding_boundaries() {
    let d = decorator(
        table(&[("L16", 16), ("L15", 15), ("L5", 5), ("L4", 4)]),
        LevelBandingConfig::default(),
    );
    assert_eq!(d.decorate("L16", "x", 10), "x <Danger>[16]</Danger>");
    assert_eq!(d.decorate("L15", "x", 10), "x <Neutral>[15]</Neutral>");
    assert_eq!(d.decorate("L5", "x", 10), "x <Neutral>[5]</Neutral>");
    assert_eq!(d.decorate("L4", "x", 10), "x <Trivial>[4]</Trivial>");
}

#[test]
fn star_scaling_adds_observer_levels() {
    let banding = LevelBandingConfig {
        per_star_increment: true,
        ..LevelBandingConfig::default()
    };
    let d = decorator(table(&[("Skeleton", 2)]), banding);
    assert_eq!(d.decorate("Skeleton", "Skeleton", 4), "Skeleton <Neutral>[5]</Neutral>");
}

#[test]
fn star_scaling_applies_before_unknown_check() {
    let banding = LevelBandingConfig {
        per_star_increment: true,
        ..LevelBandingConfig::default()
    };
    let d = decorator(table(&[("Hidden", 0)]), banding);
    assert_eq!(d.decorate("Hidden", "Hidden", 1), "Hidden <Neutral>[???]</Neutral>");
    assert_eq!(d.decorate("Hidden", "Hidden", 3), "Hidden <Neutral>[2]</Neutral>");
}

#[test]
fn template_substitution() {
    let banding = LevelBandingConfig {
        label_template: "<<@>>".into(),
        ..LevelBandingConfig::default()
    };
    let d = decorator(table(&[("Leech", 7)]), banding);
    assert_eq!(d.decorate("Leech", "Leech", 7), "Leech <Neutral><<7>></Neutral>");
}

#[test]
fn markup_is_supplied_by_caller() {
    let d = NameDecorator::new(
        table(&[("Fenring", 30)]),
        FixedObserverLevel::default(),
        |band: Band, fragment: &str| format!("<color={}>{fragment}</color>", band.default_color()),
    );
    assert_eq!(d.decorate("Fenring", "Fenring", 10), "Fenring <color=red>[30]</color>");
    assert_eq!(d.decorate("Fenring", "Fenring", 40), "Fenring <color=#2FFFDC>[30]</color>");
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[test]
fn broken_observer_defaults_to_level_one() {
    let d = NameDecorator::new(table(&[("Deer", 1)]), BrokenObserver, bracket);
    assert_eq!(d.observer_level(), 1);
    assert_eq!(d.decorate_for_observer("Deer", "Deer"), "Deer <Neutral>[1]</Neutral>");
    assert!(d.counters().observer_fallbacks >= 1);
}

#[test]
fn registry_failure_returns_raw_name_and_is_not_cached() {
    let registry = Arc::new(FlakyRegistry::default());
    registry.down.store(true, Ordering::Relaxed);
    let d = NameDecorator::new(Arc::clone(&registry), FixedObserverLevel::new(12), bracket);

    assert_eq!(d.decorate("Draugr", "Draugr", 12), "Draugr");
    assert_eq!(d.counters().lookup_failures, 1);
    assert_eq!(d.cache_len(), 0);

    registry.down.store(false, Ordering::Relaxed);
    assert_eq!(d.decorate("Draugr", "Draugr", 12), "Draugr <Neutral>[12]</Neutral>");
}

#[test]
fn malformed_banding_recovers_defaults() {
    let banding = LevelBandingConfig {
        upper_offset: -3,
        lower_offset: -3,
        per_star_increment: false,
        label_template: String::new(),
    };
    let d = decorator(table(&[("Troll", 16)]), banding);
    assert_eq!(d.banding(), &LevelBandingConfig::default());
    assert_eq!(d.decorate("Troll", "Troll", 10), "Troll <Danger>[16]</Danger>");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_callers_compute_once() {
    let registry = Arc::new(FlakyRegistry::default());
    let d = Arc::new(NameDecorator::new(
        Arc::clone(&registry),
        FixedObserverLevel::default(),
        bracket,
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let d = Arc::clone(&d);
            std::thread::spawn(move || d.decorate("Troll", "Troll", 12))
        })
        .collect();
    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    assert!(results.iter().all(|r| r == &results[0]));
    assert_eq!(d.counters().decorations_computed, 1);
    assert_eq!(registry.reads.load(Ordering::Relaxed), 1);
}
