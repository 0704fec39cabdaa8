//! User-driven simulation state.
//!
//! Only the dispatcher mutates this; the view layer reads snapshots through
//! [`SimulationState::view`].

use crate::catalog::{Catalog, Ratio};
use crate::constants::{clamp_focal, DEFAULT_FOCAL_MM, FOCAL_EPSILON_MM};

/// Snapshot of what a preview shows: sensor, frame proportions, focal length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParams {
    pub sensor: usize,
    pub aspect: Ratio,
    pub focal_mm: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub sensor: usize,
    pub aspect: Ratio,
    pub focal_mm: f64,
    pub orientation_flipped: bool,
}

/// A quick-select button: focal length and whether it matches the current focal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickFocal {
    pub focal_mm: f64,
    pub active: bool,
}

impl SimulationState {
    pub fn new(catalog: &Catalog, focal_mm: f64) -> Self {
        let mut state = Self {
            sensor: 0,
            aspect: catalog.default_aspect(),
            focal_mm: DEFAULT_FOCAL_MM,
            orientation_flipped: false,
        };
        state.set_focal(focal_mm);
        state
    }

    /// Returns false (and changes nothing) for an index outside the catalog.
    pub fn select_sensor(&mut self, catalog: &Catalog, index: usize) -> bool {
        if catalog.sensor(index).is_none() {
            return false;
        }
        self.sensor = index;
        true
    }

    pub fn select_aspect(&mut self, aspect: Ratio) {
        self.aspect = aspect;
    }

    /// Clamps into the slider range; non-finite or non-positive input is ignored.
    pub fn set_focal(&mut self, focal_mm: f64) -> bool {
        if !(focal_mm.is_finite() && focal_mm > 0.0) {
            return false;
        }
        self.focal_mm = clamp_focal(focal_mm);
        true
    }

    pub fn toggle_orientation(&mut self) {
        self.orientation_flipped = !self.orientation_flipped;
        self.aspect = self.aspect.flipped();
    }

    pub fn view(&self) -> ViewParams {
        ViewParams {
            sensor: self.sensor,
            aspect: self.aspect,
            focal_mm: self.focal_mm,
        }
    }

    /// Restore the sensor, aspect and focal of a captured view. Orientation
    /// flag is left alone.
    pub fn restore(&mut self, catalog: &Catalog, view: &ViewParams) {
        self.select_sensor(catalog, view.sensor);
        self.aspect = view.aspect;
        self.set_focal(view.focal_mm);
    }

    pub fn quick_focals(&self, catalog: &Catalog) -> Vec<QuickFocal> {
        catalog
            .sensor(self.sensor)
            .map(|s| {
                s.common_focals
                    .iter()
                    .map(|&focal_mm| QuickFocal {
                        focal_mm,
                        active: (focal_mm - self.focal_mm).abs() < FOCAL_EPSILON_MM,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
