/// DOM wiring and canvas styling constants for the web frontend.
///
/// Element ids and class names match the stylesheet shipped with the page.
// Mount point and top-level containers
pub const APP_CONTAINER_ID: &str = "app";
pub const SIMULATION_ID: &str = "simulation";
pub const GALLERY_ID: &str = "gallery";

// Controls
pub const CONTROLS_CLASS: &str = "simulation-controls";
pub const CONTROL_ROW_CLASS: &str = "control-row";
pub const LEFT_CONTROLS_CLASS: &str = "left-controls";
pub const RIGHT_CONTROLS_CLASS: &str = "right-controls";
pub const SENSOR_SELECT_CLASS: &str = "sensor-select";
pub const ASPECT_SELECT_CLASS: &str = "aspect-select";
pub const TOGGLE_ORIENTATION_CLASS: &str = "toggle-orientation-btn";
pub const FOCAL_SLIDER_CLASS: &str = "focal-slider";
pub const FOCAL_VALUE_CLASS: &str = "focal-value";
pub const FOV_VALUE_CLASS: &str = "fov-value";
pub const QUICK_SELECT_CLASS: &str = "quick-select";
pub const QUICK_SELECT_BTN_CLASS: &str = "quick-select-btn";
pub const SHUTTER_CLASS: &str = "shutter-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const FOCAL_DATA_ATTR: &str = "data-focal";

// Gallery
pub const GALLERY_CLASS: &str = "gallery";
pub const GALLERY_IMAGE_CLASS: &str = "gallery-image";
pub const GALLERY_CAPTION_CONTAINER_CLASS: &str = "gallery-caption-container";
pub const GALLERY_CAPTION_TEXT_CLASS: &str = "gallery-caption-text";
pub const GALLERY_DELETE_CLASS: &str = "gallery-delete-btn";
pub const GALLERY_CLEAR_CLASS: &str = "gallery-clear-btn";
pub const CAPTURE_DATA_ATTR: &str = "data-capture";

// Image view
pub const CANVAS_WRAPPER_CLASS: &str = "canvas-wrapper";

// Checkerboard shown behind (and before) the photo
pub const CHECKER_TILE_PX: u32 = 20;
pub const CHECKER_DARK: &str = "#ccc";
pub const CHECKER_LIGHT: &str = "#fff";

// Labels
pub const ORIENTATION_HORIZONTAL: &str = "Horizontal";
pub const ORIENTATION_VERTICAL: &str = "Vertical";
pub const SHUTTER_LABEL: &str = "Shutter";
pub const DELETE_LABEL: &str = "X";
pub const CLEAR_LABEL: &str = "Clear gallery";

#[inline]
pub fn orientation_label(flipped: bool) -> &'static str {
    if flipped {
        ORIENTATION_VERTICAL
    } else {
        ORIENTATION_HORIZONTAL
    }
}

#[inline]
pub fn focal_label(focal_mm: f64) -> String {
    format!("{}mm", focal_mm)
}

#[inline]
pub fn fov_label(fov_deg: i32) -> String {
    format!("{}\u{b0} FOV", fov_deg)
}

/// Selector for the tile enclosing a clicked gallery element.
#[inline]
pub fn capture_tile_selector() -> String {
    format!("[{}]", CAPTURE_DATA_ATTR)
}

#[inline]
pub fn gallery_delete_selector() -> String {
    format!(".{}", GALLERY_DELETE_CLASS)
}
