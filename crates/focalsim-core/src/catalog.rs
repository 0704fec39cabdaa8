//! Static configuration: sensor formats, aspect ratios and the reference ladder.
//!
//! A [`Catalog`] is built once at startup and handed to the simulator by value.
//! Nothing in here is mutated afterwards.

use crate::constants::{BASELINE_SENSOR_INDEX, DEFAULT_ASPECT};
use crate::error::{CatalogError, RatioParseError};
use crate::optics::{ReferenceImage, ReferenceLadder};
use std::fmt;
use std::str::FromStr;

/// Physical sensor dimensions plus the focal lengths offered as quick picks.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorFormat {
    pub name: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub common_focals: Vec<f64>,
}

impl SensorFormat {
    pub fn new(name: &str, width_mm: f64, height_mm: f64, common_focals: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            width_mm,
            height_mm,
            common_focals: common_focals.to_vec(),
        }
    }
}

/// Frame proportions as `num/den` (width over height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub num: u32,
    pub den: u32,
}

impl Ratio {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.num as f64 / self.den.max(1) as f64
    }

    /// Portrait/landscape swap.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }

    /// Value for the CSS `aspect-ratio` property.
    pub fn css(self) -> String {
        format!("{} / {}", self.num, self.den)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for Ratio {
    type Err = RatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s
            .split_once('/')
            .ok_or_else(|| RatioParseError::Format(s.to_string()))?;
        let num: u32 = num
            .trim()
            .parse()
            .map_err(|_| RatioParseError::Format(s.to_string()))?;
        let den: u32 = den
            .trim()
            .parse()
            .map_err(|_| RatioParseError::Format(s.to_string()))?;
        if num == 0 || den == 0 {
            return Err(RatioParseError::Zero(s.to_string()));
        }
        Ok(Self { num, den })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AspectRatio {
    pub label: String,
    pub ratio: Ratio,
}

impl AspectRatio {
    pub fn new(label: &str, ratio: Ratio) -> Self {
        Self {
            label: label.to_string(),
            ratio,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    sensors: Vec<SensorFormat>,
    aspects: Vec<AspectRatio>,
    baseline: usize,
    default_aspect: Ratio,
    ladder: ReferenceLadder,
}

impl Catalog {
    /// Validate and assemble a catalog. The ladder is calibrated against
    /// `sensors[baseline]`.
    pub fn new(
        sensors: Vec<SensorFormat>,
        aspects: Vec<AspectRatio>,
        baseline: usize,
        default_aspect: Ratio,
        references: Vec<ReferenceImage>,
    ) -> Result<Self, CatalogError> {
        if sensors.is_empty() {
            return Err(CatalogError::NoSensors);
        }
        let base = sensors
            .get(baseline)
            .ok_or(CatalogError::BaselineOutOfRange {
                index: baseline,
                len: sensors.len(),
            })?;
        if !(base.width_mm.is_finite() && base.width_mm > 0.0) {
            return Err(CatalogError::BaselineWidth(base.name.clone()));
        }
        let ladder = ReferenceLadder::new(base.width_mm, references)?;
        Ok(Self {
            sensors,
            aspects,
            baseline,
            default_aspect,
            ladder,
        })
    }

    /// Stock sensors, aspect ratios and the four-photo ladder shot on full frame.
    pub fn builtin() -> Result<Self, CatalogError> {
        let sensors = vec![
            SensorFormat::new(
                "Full Frame (35mm)",
                36.0,
                24.0,
                &[16.0, 24.0, 28.0, 35.0, 50.0, 85.0, 135.0, 200.0],
            ),
            SensorFormat::new("Canon APS-C", 22.2, 14.8, &[16.0, 24.0, 35.0, 50.0, 85.0]),
            SensorFormat::new(
                "Fuji X (APS-C)",
                23.6,
                15.6,
                &[14.0, 16.0, 18.0, 23.0, 27.0, 33.0, 50.0, 56.0, 80.0, 90.0, 200.0],
            ),
            SensorFormat::new(
                "Fuji GFX (Medium Format)",
                43.8,
                32.9,
                &[23.0, 35.0, 45.0, 55.0, 63.0, 80.0, 110.0, 250.0, 500.0],
            ),
            SensorFormat::new(
                "Micro Four Thirds",
                17.3,
                13.0,
                &[8.0, 12.0, 17.0, 25.0, 40.0, 75.0],
            ),
            SensorFormat::new(
                "Phase One",
                53.7,
                40.4,
                &[40.0, 60.0, 90.0, 120.0, 180.0, 250.0],
            ),
        ];
        let aspects = vec![
            AspectRatio::new("3:2 (Standard)", Ratio::new(3, 2)),
            AspectRatio::new("1:1 (Square)", Ratio::new(1, 1)),
            AspectRatio::new("16:9 (Widescreen)", Ratio::new(16, 9)),
            AspectRatio::new("XPan", Ratio::new(65, 24)),
            AspectRatio::new("5:4", Ratio::new(5, 4)),
            AspectRatio::new("4:3", Ratio::new(4, 3)),
        ];
        let references = vec![
            ReferenceImage::new(14.0, "photos/14mm.jpg"),
            ReferenceImage::new(28.0, "photos/28mm.jpg"),
            ReferenceImage::new(56.0, "photos/56mm.jpg"),
            ReferenceImage::new(112.0, "photos/112mm.jpg"),
        ];
        let default_aspect = DEFAULT_ASPECT.parse().unwrap_or(Ratio::new(3, 2));
        Self::new(
            sensors,
            aspects,
            BASELINE_SENSOR_INDEX,
            default_aspect,
            references,
        )
    }

    pub fn sensors(&self) -> &[SensorFormat] {
        &self.sensors
    }

    pub fn sensor(&self, index: usize) -> Option<&SensorFormat> {
        self.sensors.get(index)
    }

    pub fn aspects(&self) -> &[AspectRatio] {
        &self.aspects
    }

    /// Catalog entry whose ratio matches exactly (flipped ratios usually have none).
    pub fn aspect_entry(&self, ratio: Ratio) -> Option<&AspectRatio> {
        self.aspects.iter().find(|a| a.ratio == ratio)
    }

    pub fn baseline(&self) -> &SensorFormat {
        &self.sensors[self.baseline]
    }

    pub fn default_aspect(&self) -> Ratio {
        self.default_aspect
    }

    pub fn ladder(&self) -> &ReferenceLadder {
        &self.ladder
    }
}
