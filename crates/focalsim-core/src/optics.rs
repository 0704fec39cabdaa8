//! Crop-factor math and reference-photo selection.
//!
//! All focal lengths handed to the ladder are first rescaled onto the baseline
//! sensor ("effective" focal length), since that is the sensor the reference
//! photos were shot on.

use crate::catalog::SensorFormat;
use crate::error::CatalogError;

/// A pre-shot photo tagged with the baseline-sensor focal length it was taken at.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceImage {
    pub baseline_focal_mm: f64,
    pub src: String,
}

impl ReferenceImage {
    pub fn new(baseline_focal_mm: f64, src: &str) -> Self {
        Self {
            baseline_focal_mm,
            src: src.to_string(),
        }
    }
}

/// Ascending reference photos calibrated against one baseline sensor width.
#[derive(Clone, Debug)]
pub struct ReferenceLadder {
    baseline_width_mm: f64,
    rungs: Vec<ReferenceImage>,
}

impl ReferenceLadder {
    pub fn new(baseline_width_mm: f64, rungs: Vec<ReferenceImage>) -> Result<Self, CatalogError> {
        if rungs.is_empty() {
            return Err(CatalogError::EmptyLadder);
        }
        let mut prev = 0.0_f64;
        for (index, rung) in rungs.iter().enumerate() {
            let focal_mm = rung.baseline_focal_mm;
            if !(focal_mm.is_finite() && focal_mm > 0.0) {
                return Err(CatalogError::InvalidRung { index, focal_mm });
            }
            if index > 0 && focal_mm <= prev {
                return Err(CatalogError::UnsortedLadder { index, focal_mm });
            }
            prev = focal_mm;
        }
        Ok(Self {
            baseline_width_mm,
            rungs,
        })
    }

    pub fn baseline_width_mm(&self) -> f64 {
        self.baseline_width_mm
    }

    pub fn rungs(&self) -> &[ReferenceImage] {
        &self.rungs
    }

    /// Focal length on `sensor` rescaled to the baseline sensor's field of view.
    pub fn effective_focal(&self, focal_mm: f64, sensor: &SensorFormat) -> f64 {
        let effective = focal_mm * crop_factor(self.baseline_width_mm, sensor.width_mm);
        log::debug!(
            "[focal] effective={:.2} for focal={:.2} on '{}' (width {:.2})",
            effective,
            focal_mm,
            sensor.name,
            sensor.width_mm
        );
        effective
    }

    /// Index of the last rung not longer than `effective_focal`; the first rung
    /// when the request is wider than the whole ladder.
    pub fn select_index(&self, effective_focal: f64) -> usize {
        let mut selected = 0usize;
        for (i, rung) in self.rungs.iter().enumerate() {
            if rung.baseline_focal_mm <= effective_focal {
                selected = i;
            } else {
                break;
            }
        }
        selected
    }

    pub fn select(&self, effective_focal: f64) -> &ReferenceImage {
        &self.rungs[self.select_index(effective_focal)]
    }
}

/// Baseline width over sensor width. Unusable sensor widths (zero, negative,
/// NaN) fall back to the baseline so the factor is 1.
#[inline]
pub fn crop_factor(baseline_width_mm: f64, sensor_width_mm: f64) -> f64 {
    let sensor_width_mm = if sensor_width_mm.is_finite() && sensor_width_mm > 0.0 {
        sensor_width_mm
    } else {
        baseline_width_mm
    };
    if !(baseline_width_mm.is_finite() && baseline_width_mm > 0.0) {
        return 1.0;
    }
    baseline_width_mm / sensor_width_mm
}

/// Horizontal field of view in whole degrees (thin-lens approximation).
pub fn field_of_view_deg(focal_mm: f64, sensor_width_mm: f64) -> i32 {
    (2.0 * (sensor_width_mm / (2.0 * focal_mm)).atan())
        .to_degrees()
        .round() as i32
}
