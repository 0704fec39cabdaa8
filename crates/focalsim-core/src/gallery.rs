use crate::catalog::Catalog;
use crate::error::CaptureIdParseError;
use crate::state::ViewParams;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptureId(pub u32);

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capture-{}", self.0)
    }
}

/// Parses the `capture-N` form written by `Display`.
impl FromStr for CaptureId {
    type Err = CaptureIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix("capture-")
            .and_then(|n| n.parse::<u32>().ok())
            .map(CaptureId)
            .ok_or_else(|| CaptureIdParseError(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Capture {
    pub id: CaptureId,
    pub view: ViewParams,
}

impl Capture {
    /// Tile caption, e.g. `50mm, Full Frame (35mm)`.
    pub fn caption(&self, catalog: &Catalog) -> String {
        let name = catalog
            .sensor(self.view.sensor)
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown sensor");
        format!("{}mm, {}", self.view.focal_mm, name)
    }
}

/// Shutter captures in the order they were taken.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    captures: Vec<Capture>,
    next_id: u32,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, view: ViewParams) -> CaptureId {
        let id = CaptureId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.captures.push(Capture { id, view });
        id
    }

    pub fn remove(&mut self, id: CaptureId) -> bool {
        let before = self.captures.len();
        self.captures.retain(|c| c.id != id);
        self.captures.len() != before
    }

    pub fn clear(&mut self) {
        self.captures.clear();
    }

    pub fn get(&self, id: CaptureId) -> Option<&Capture> {
        self.captures.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.captures.iter()
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}
