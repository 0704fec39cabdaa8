// Host-side tests for catalog validation, simulation state and the gallery.

use focalsim_core::*;

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

#[test]
fn builtin_catalog_matches_stock_data() {
    let c = catalog();
    assert_eq!(c.sensors().len(), 6);
    assert_eq!(c.aspects().len(), 6);
    assert_eq!(c.baseline().name, "Full Frame (35mm)");
    assert_eq!(c.baseline().width_mm, 36.0);
    assert_eq!(c.default_aspect(), Ratio::new(3, 2));
    let rungs: Vec<f64> = c.ladder().rungs().iter().map(|r| r.baseline_focal_mm).collect();
    assert_eq!(rungs, vec![14.0, 28.0, 56.0, 112.0]);
    assert_eq!(c.ladder().rungs()[2].src, "photos/56mm.jpg");
}

#[test]
fn catalog_rejects_missing_pieces() {
    let refs = vec![ReferenceImage::new(14.0, "a")];
    let ff = SensorFormat::new("FF", 36.0, 24.0, &[]);
    assert_eq!(
        Catalog::new(vec![], vec![], 0, Ratio::new(3, 2), refs.clone()).unwrap_err(),
        CatalogError::NoSensors
    );
    assert_eq!(
        Catalog::new(vec![ff.clone()], vec![], 3, Ratio::new(3, 2), refs.clone()).unwrap_err(),
        CatalogError::BaselineOutOfRange { index: 3, len: 1 }
    );
    let zero = SensorFormat::new("Zero", 0.0, 24.0, &[]);
    assert_eq!(
        Catalog::new(vec![zero], vec![], 0, Ratio::new(3, 2), refs).unwrap_err(),
        CatalogError::BaselineWidth("Zero".to_string())
    );
    assert_eq!(
        Catalog::new(vec![ff], vec![], 0, Ratio::new(3, 2), vec![]).unwrap_err(),
        CatalogError::EmptyLadder
    );
}

#[test]
fn ratio_parses_and_prints() {
    let r: Ratio = "65/24".parse().expect("ratio");
    assert_eq!(r, Ratio::new(65, 24));
    assert_eq!(r.to_string(), "65/24");
    assert_eq!(r.css(), "65 / 24");
    assert_eq!(r.flipped(), Ratio::new(24, 65));
    assert!((Ratio::new(3, 2).value() - 1.5).abs() < 1e-12);
    assert_eq!(" 4 / 3 ".parse::<Ratio>(), Ok(Ratio::new(4, 3)));
}

#[test]
fn ratio_rejects_malformed_input() {
    assert!(matches!("3:2".parse::<Ratio>(), Err(RatioParseError::Format(_))));
    assert!(matches!("a/2".parse::<Ratio>(), Err(RatioParseError::Format(_))));
    assert!(matches!("0/2".parse::<Ratio>(), Err(RatioParseError::Zero(_))));
}

#[test]
fn aspect_entry_lookup() {
    let c = catalog();
    assert_eq!(
        c.aspect_entry(Ratio::new(16, 9)).map(|a| a.label.as_str()),
        Some("16:9 (Widescreen)")
    );
    assert!(c.aspect_entry(Ratio::new(2, 3)).is_none());
}

#[test]
fn state_starts_on_first_sensor_and_default_aspect() {
    let c = catalog();
    let s = SimulationState::new(&c, 24.0);
    assert_eq!(s.sensor, 0);
    assert_eq!(s.aspect, Ratio::new(3, 2));
    assert_eq!(s.focal_mm, 24.0);
    assert!(!s.orientation_flipped);
}

#[test]
fn focal_is_clamped_to_slider_range() {
    let c = catalog();
    let mut s = SimulationState::new(&c, 24.0);
    assert!(s.set_focal(8.0));
    assert_eq!(s.focal_mm, FOCAL_MIN_MM);
    assert!(s.set_focal(500.0));
    assert_eq!(s.focal_mm, FOCAL_MAX_MM);
    assert!(!s.set_focal(0.0));
    assert!(!s.set_focal(f64::NAN));
    assert_eq!(s.focal_mm, FOCAL_MAX_MM);
}

#[test]
fn unknown_sensor_index_is_ignored() {
    let c = catalog();
    let mut s = SimulationState::new(&c, 24.0);
    assert!(s.select_sensor(&c, 4));
    assert!(!s.select_sensor(&c, 99));
    assert_eq!(s.sensor, 4);
}

#[test]
fn orientation_toggle_swaps_aspect() {
    let c = catalog();
    let mut s = SimulationState::new(&c, 24.0);
    s.toggle_orientation();
    assert!(s.orientation_flipped);
    assert_eq!(s.aspect, Ratio::new(2, 3));
    s.toggle_orientation();
    assert!(!s.orientation_flipped);
    assert_eq!(s.aspect, Ratio::new(3, 2));
}

#[test]
fn quick_focals_follow_selected_sensor() {
    let c = catalog();
    let mut s = SimulationState::new(&c, 50.0);
    let quick = s.quick_focals(&c);
    assert_eq!(quick.len(), 8);
    let active: Vec<f64> = quick.iter().filter(|q| q.active).map(|q| q.focal_mm).collect();
    assert_eq!(active, vec![50.0]);

    s.select_sensor(&c, 4);
    let quick = s.quick_focals(&c);
    assert_eq!(quick.first().map(|q| q.focal_mm), Some(8.0));
    assert!(quick.iter().all(|q| !q.active));
}

#[test]
fn gallery_assigns_increasing_ids_and_removes() {
    let c = catalog();
    let s = SimulationState::new(&c, 35.0);
    let mut g = Gallery::new();
    let a = g.add(s.view());
    let b = g.add(s.view());
    assert!(b > a);
    assert_eq!(g.len(), 2);
    assert!(g.remove(a));
    assert!(!g.remove(a));
    assert_eq!(g.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b]);
    let c2 = g.add(s.view());
    assert!(c2 > b);
    g.clear();
    assert!(g.is_empty());
}

#[test]
fn capture_caption_names_focal_and_sensor() {
    let c = catalog();
    let mut s = SimulationState::new(&c, 50.0);
    let mut g = Gallery::new();
    let id = g.add(s.view());
    assert_eq!(g.get(id).map(|cap| cap.caption(&c)).as_deref(), Some("50mm, Full Frame (35mm)"));

    s.select_sensor(&c, 2);
    s.set_focal(23.5);
    let id = g.add(s.view());
    assert_eq!(g.get(id).map(|cap| cap.caption(&c)).as_deref(), Some("23.5mm, Fuji X (APS-C)"));
}

#[test]
fn capture_id_parses_its_display_form() {
    let id = CaptureId(7);
    assert_eq!(id.to_string(), "capture-7");
    assert_eq!("capture-7".parse::<CaptureId>(), Ok(id));
    assert_eq!(" capture-0 ".parse::<CaptureId>(), Ok(CaptureId(0)));
    for bad in ["", "7", "capture-", "capture--1", "capture-x", "tile-3"] {
        assert_eq!(
            bad.parse::<CaptureId>(),
            Err(CaptureIdParseError(bad.to_string())),
            "{bad:?}"
        );
    }
}
