// Host-side tests for front-end constants and label helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn orientation_label_follows_flag() {
    assert_eq!(orientation_label(false), "Horizontal");
    assert_eq!(orientation_label(true), "Vertical");
}

#[test]
fn focal_label_drops_trailing_zero() {
    assert_eq!(focal_label(50.0), "50mm");
    assert_eq!(focal_label(23.5), "23.5mm");
    assert_eq!(focal_label(400.0), "400mm");
}

#[test]
fn fov_label_shows_degrees() {
    assert_eq!(fov_label(40), "40\u{b0} FOV");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn checker_tile_splits_evenly() {
    assert!(CHECKER_TILE_PX > 0);
    assert_eq!(CHECKER_TILE_PX % 2, 0);
    assert_ne!(CHECKER_DARK, CHECKER_LIGHT);
}

#[test]
fn container_ids_are_distinct() {
    let ids = [APP_CONTAINER_ID, SIMULATION_ID, GALLERY_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn gallery_classes_are_distinct() {
    let classes = [
        GALLERY_IMAGE_CLASS,
        GALLERY_CAPTION_CONTAINER_CLASS,
        GALLERY_CAPTION_TEXT_CLASS,
        GALLERY_DELETE_CLASS,
        GALLERY_CLEAR_CLASS,
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn gallery_selectors_target_tiles_and_delete_buttons() {
    assert_eq!(capture_tile_selector(), "[data-capture]");
    assert_eq!(gallery_delete_selector(), ".gallery-delete-btn");
}
