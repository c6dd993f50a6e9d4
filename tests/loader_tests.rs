// Host-side tests for model candidate loading.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod skyline {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod loader {
        include!("../src/core/loader.rs");
    }
}

use glam::Vec3;
use skyline::constants::MODEL_CANDIDATES;
use skyline::loader::*;
use std::cell::RefCell;

/// Loader double: sources listed in `broken` fail, everything else loads.
fn fake_load<'a>(
    broken: &'a [&'a str],
    attempts: &'a RefCell<Vec<String>>,
) -> impl FnMut(&str) -> std::future::Ready<anyhow::Result<String>> + 'a {
    move |source: &str| {
        attempts.borrow_mut().push(source.to_string());
        let result = if broken.iter().any(|b| *b == source) {
            Err(anyhow::anyhow!("404 {}", source))
        } else {
            Ok(format!("scene:{}", source))
        };
        std::future::ready(result)
    }
}

#[test]
fn first_working_candidate_wins() {
    let attempts = RefCell::new(Vec::new());
    let loaded = pollster::block_on(load_first(&["a.glb", "b.glb"], fake_load(&[], &attempts)))
        .expect("first candidate loads");
    assert_eq!(loaded.index, 0);
    assert_eq!(loaded.source, "a.glb");
    assert_eq!(loaded.value, "scene:a.glb");
    assert_eq!(*attempts.borrow(), vec!["a.glb"]);
}

#[test]
fn failing_candidates_are_skipped_in_order() {
    let attempts = RefCell::new(Vec::new());
    let broken = ["a.glb", "b.glb"];
    let loaded = pollster::block_on(load_first(
        &["a.glb", "b.glb", "c.glb", "d.glb"],
        fake_load(&broken, &attempts),
    ))
    .expect("third candidate loads");
    assert_eq!(loaded.index, 2);
    assert_eq!(loaded.source, "c.glb");
    assert_eq!(*attempts.borrow(), vec!["a.glb", "b.glb", "c.glb"]);
}

#[test]
fn exhausted_candidates_yield_none() {
    let attempts = RefCell::new(Vec::new());
    let loaded = pollster::block_on(load_first(
        &MODEL_CANDIDATES,
        fake_load(&MODEL_CANDIDATES, &attempts),
    ));
    assert!(loaded.is_none());
    assert_eq!(*attempts.borrow(), MODEL_CANDIDATES.to_vec());
}

#[test]
fn no_candidates_yield_none() {
    let attempts = RefCell::new(Vec::new());
    let loaded = pollster::block_on(load_first(&[], fake_load(&[], &attempts)));
    assert!(loaded.is_none());
    assert!(attempts.borrow().is_empty());
}

#[test]
fn scale_fits_largest_dimension_to_two_units() {
    assert!((normalized_scale(Vec3::new(4.0, 1.0, 2.0)) - 0.5).abs() < 1e-6);
    assert!((normalized_scale(Vec3::new(0.5, 0.25, 0.1)) - 4.0).abs() < 1e-6);
}

#[test]
fn degenerate_bounds_fall_back_to_unit_size() {
    assert_eq!(normalized_scale(Vec3::ZERO), 2.0);
    assert_eq!(normalized_scale(Vec3::splat(f32::INFINITY)), 2.0);
}
