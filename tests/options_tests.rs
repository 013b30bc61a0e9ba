// Host-side tests for mount options and service URLs.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod options {
    include!("../src/options.rs");
}
mod endpoint {
    include!("../src/endpoint.rs");
}

use folio_core::{ConfigError, Preset};
use options::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn scene_attribute_selects_the_preset() {
    let opts = MountOptions::from_attrs(attrs(&[("data-scene", "asteroids")])).unwrap();
    assert_eq!(opts, MountOptions::new(Preset::Asteroids));
}

#[test]
fn missing_or_unknown_scene_is_an_error() {
    assert!(MountOptions::from_attrs(attrs(&[])).is_err());
    assert_eq!(
        MountOptions::from_attrs(attrs(&[("data-scene", "nebula")])),
        Err(ConfigError::UnknownPreset("nebula".into()))
    );
}

#[test]
fn numeric_overrides_are_applied() {
    let opts = MountOptions::from_attrs(attrs(&[
        ("data-scene", "hero"),
        ("data-seed", " 42 "),
        ("data-count", "250"),
    ]))
    .unwrap();
    let cfg = opts.config(7).unwrap();
    assert_eq!(cfg.seed, 42);
    assert_eq!(cfg.object_count, 250);
}

#[test]
fn bad_numbers_are_ignored() {
    let opts = MountOptions::from_attrs(attrs(&[
        ("data-scene", "hero"),
        ("data-seed", "abc"),
        ("data-count", "-3"),
    ]))
    .unwrap();
    assert_eq!(opts.seed, None);
    assert_eq!(opts.count, None);
    let cfg = opts.config(7).unwrap();
    assert_eq!(cfg.seed, 7, "fallback seed used");
    assert_eq!(cfg.object_count, Preset::Hero.config().object_count);
}

#[test]
fn oversized_count_fails_validation() {
    let opts = MountOptions::with_overrides(Preset::Orb, attrs(&[("data-count", "99999999")]));
    assert!(matches!(
        opts.config(1),
        Err(ConfigError::TooManyObjects(_))
    ));
}

#[test]
fn endpoint_join_uses_one_slash() {
    assert_eq!(endpoint::join("/api", "summary"), "/api/summary");
    assert_eq!(endpoint::join("/api/", "/summary"), "/api/summary");
    assert_eq!(
        endpoint::join("https://example.test/v1", "rank-titles"),
        "https://example.test/v1/rank-titles"
    );
    assert_eq!(endpoint::join("", "summary"), "/summary");
}

#[test]
fn error_preview_truncates_long_bodies() {
    assert_eq!(endpoint::preview("short", 10), "short");
    assert_eq!(endpoint::preview("abcdef", 3), "abc…");
    assert_eq!(endpoint::preview("ééééé", 5), "ééééé");
}
