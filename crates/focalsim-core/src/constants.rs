// Shared simulator tuning constants used by the core and the web frontend.

// Focal slider bounds (mm)
pub const FOCAL_MIN_MM: f64 = 12.0;
pub const FOCAL_MAX_MM: f64 = 400.0;

// Initial focal length when the page loads
pub const DEFAULT_FOCAL_MM: f64 = 24.0;

// Aspect ratio selected before the user picks one
pub const DEFAULT_ASPECT: &str = "3/2";

// Index of the sensor the reference photos were shot on
pub const BASELINE_SENSOR_INDEX: usize = 0;

// Focal lengths that differ by less than this are treated as equal (quick-select highlight)
pub const FOCAL_EPSILON_MM: f64 = 1e-6;

#[inline]
pub fn clamp_focal(focal_mm: f64) -> f64 {
    focal_mm.clamp(FOCAL_MIN_MM, FOCAL_MAX_MM)
}
