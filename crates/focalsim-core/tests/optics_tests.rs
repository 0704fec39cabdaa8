// Host-side tests for crop-factor math and reference selection.

use focalsim_core::*;

fn make_ladder() -> ReferenceLadder {
    ReferenceLadder::new(
        36.0,
        vec![
            ReferenceImage::new(14.0, "14.jpg"),
            ReferenceImage::new(28.0, "28.jpg"),
            ReferenceImage::new(56.0, "56.jpg"),
            ReferenceImage::new(112.0, "112.jpg"),
        ],
    )
    .expect("valid ladder")
}

fn sensor(width_mm: f64) -> SensorFormat {
    SensorFormat::new("test", width_mm, width_mm / 1.5, &[])
}

#[test]
fn effective_focal_matches_crop_factor_formula() {
    let ladder = make_ladder();
    for &w in &[17.3, 22.2, 23.6, 36.0, 43.8, 53.7] {
        for &f in &[12.0, 24.0, 50.0, 135.0, 400.0] {
            let got = ladder.effective_focal(f, &sensor(w));
            let want = f * 36.0 / w;
            assert!((got - want).abs() < 1e-9, "w={w} f={f}: {got} vs {want}");
        }
    }
}

#[test]
fn effective_focal_is_identity_on_baseline() {
    let ladder = make_ladder();
    let base = sensor(36.0);
    for f in [12.0, 24.0, 35.0, 85.0, 400.0] {
        assert_eq!(ladder.effective_focal(f, &base), f);
    }
}

#[test]
fn unusable_sensor_width_falls_back_to_factor_one() {
    assert_eq!(crop_factor(36.0, 0.0), 1.0);
    assert_eq!(crop_factor(36.0, -4.0), 1.0);
    assert_eq!(crop_factor(36.0, f64::NAN), 1.0);
    assert_eq!(crop_factor(36.0, f64::INFINITY), 1.0);

    let ladder = make_ladder();
    assert_eq!(ladder.effective_focal(50.0, &sensor(0.0)), 50.0);
}

#[test]
fn crop_factor_for_half_width_sensor_is_two() {
    assert!((crop_factor(36.0, 18.0) - 2.0).abs() < 1e-12);
}

#[test]
fn select_uses_floor_policy() {
    let ladder = make_ladder();
    assert_eq!(ladder.select(14.0).baseline_focal_mm, 14.0);
    assert_eq!(ladder.select(27.9).baseline_focal_mm, 14.0);
    assert_eq!(ladder.select(28.0).baseline_focal_mm, 28.0);
    assert_eq!(ladder.select(100.0).baseline_focal_mm, 56.0);
    assert_eq!(ladder.select(111.99).baseline_focal_mm, 56.0);
    assert_eq!(ladder.select(800.0).baseline_focal_mm, 112.0);
}

#[test]
fn select_below_first_rung_returns_first() {
    let ladder = make_ladder();
    assert_eq!(ladder.select_index(1.0), 0);
    assert_eq!(ladder.select_index(13.99), 0);
    assert_eq!(ladder.select(5.0).src, "14.jpg");
}

#[test]
fn select_is_monotonic() {
    let ladder = make_ladder();
    let mut prev = ladder.select_index(0.5);
    let mut f = 0.5;
    while f < 600.0 {
        let idx = ladder.select_index(f);
        assert!(idx >= prev, "index went backwards at {f}: {idx} < {prev}");
        prev = idx;
        f += 0.25;
    }
}

#[test]
fn zoom_is_at_least_one_above_first_rung() {
    let ladder = make_ladder();
    let mut f = 14.0;
    while f < 600.0 {
        let zoom = f / ladder.select(f).baseline_focal_mm;
        assert!(zoom >= 1.0, "zoom {zoom} < 1 at {f}");
        f += 0.5;
    }
}

#[test]
fn half_frame_28mm_lands_exactly_on_56_rung() {
    let ladder = make_ladder();
    let effective = ladder.effective_focal(28.0, &sensor(18.0));
    assert!((effective - 56.0).abs() < 1e-9);
    let rung = ladder.select(effective);
    assert_eq!(rung.baseline_focal_mm, 56.0);
    assert!((effective / rung.baseline_focal_mm - 1.0).abs() < 1e-9);
}

#[test]
fn half_frame_50mm_zooms_into_56_rung() {
    let ladder = make_ladder();
    let effective = ladder.effective_focal(50.0, &sensor(18.0));
    assert!((effective - 100.0).abs() < 1e-9);
    let rung = ladder.select(effective);
    assert_eq!(rung.baseline_focal_mm, 56.0);
    let zoom = effective / rung.baseline_focal_mm;
    assert!((zoom - 1.786).abs() < 1e-3, "zoom was {zoom}");
}

#[test]
fn field_of_view_of_normal_lens() {
    assert_eq!(field_of_view_deg(50.0, 36.0), 40);
}

#[test]
fn field_of_view_narrows_with_focal() {
    let wide = field_of_view_deg(14.0, 36.0);
    let tele = field_of_view_deg(200.0, 36.0);
    assert!(wide > tele);
    assert_eq!(field_of_view_deg(200.0, 36.0), 10);
}

#[test]
fn ladder_rejects_bad_rungs() {
    assert_eq!(
        ReferenceLadder::new(36.0, vec![]).unwrap_err(),
        CatalogError::EmptyLadder
    );
    let unsorted = vec![
        ReferenceImage::new(28.0, "a"),
        ReferenceImage::new(14.0, "b"),
    ];
    assert!(matches!(
        ReferenceLadder::new(36.0, unsorted),
        Err(CatalogError::UnsortedLadder { index: 1, .. })
    ));
    let zero = vec![ReferenceImage::new(0.0, "a")];
    assert!(matches!(
        ReferenceLadder::new(36.0, zero),
        Err(CatalogError::InvalidRung { index: 0, .. })
    ));
}

#[test]
fn ladder_keeps_baseline_width() {
    let ladder = make_ladder();
    assert_eq!(ladder.baseline_width_mm(), 36.0);
    assert_eq!(ladder.rungs().len(), 4);
}
