// config.rs - Overlay Profile
//
// A profile is the full description of what the overlay shows: the outer
// capture bounds, the mirrored region table, the indicator table, and the
// tick cadence. The built-in profile carries the hand-authored game
// geometry; a JSON file with the same shape can replace it.
//
// Every rect and target pixel is validated against the outer bounds
// before any capture or window work happens, so a bad table is a startup
// error instead of a silent out-of-range crop at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{indicator, timing};
use crate::geometry::{CaptureRect, Point, Rgb};

/// Profile errors, all fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("region '{name}' is empty: {rect}")]
    EmptyRegion { name: String, rect: CaptureRect },

    #[error("region '{name}' ({rect}) extends outside the capture bounds ({bounds})")]
    RegionOutOfBounds {
        name: String,
        rect: CaptureRect,
        bounds: CaptureRect,
    },

    #[error("region '{name}' has non-positive scale {scale}")]
    InvalidScale { name: String, scale: f32 },

    #[error("indicator '{name}' target pixel {target} lies outside the capture bounds ({bounds})")]
    TargetOutOfBounds {
        name: String,
        target: Point,
        bounds: CaptureRect,
    },

    #[error("indicator '{name}' border area is empty: {area}")]
    EmptyIndicatorArea { name: String, area: CaptureRect },

    #[error("indicator '{name}' has zero stroke thickness")]
    ZeroStroke { name: String },

    #[error("capture bounds are empty: {bounds}")]
    EmptyBounds { bounds: CaptureRect },

    #[error("tick interval must be non-zero")]
    ZeroTick,

    #[error("profile defines no regions and no indicators")]
    NothingToShow,

    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One mirrored screen region: where it is captured from, where its copy
/// is displayed, and how much it is enlarged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSpec {
    pub name: String,
    /// Source rectangle in absolute screen coordinates.
    pub capture: CaptureRect,
    /// Top-left corner of the displayed copy.
    pub display: Point,
    /// Enlargement factor for the displayed copy.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl RegionSpec {
    /// Size of the displayed copy: `round(dim * scale)` per axis.
    pub fn scaled_size(&self) -> (u32, u32) {
        (
            (self.capture.width as f32 * self.scale).round() as u32,
            (self.capture.height as f32 * self.scale).round() as u32,
        )
    }
}

/// Border stroke for an indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgb,
    pub thickness: u32,
}

/// One pixel-triggered state indicator: which pixel to sample, what color
/// means "on", and where the border is drawn while on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub name: String,
    /// Sampled pixel in absolute screen coordinates.
    pub target: Point,
    /// Reference color the sampled pixel is compared against.
    pub reference: Rgb,
    /// Flip the comparison: border shows while the pixel does NOT match.
    #[serde(default)]
    pub invert: bool,
    /// Screen area the border is drawn around.
    pub area: CaptureRect,
    pub stroke: Stroke,
}

/// The complete overlay description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Outer rectangle captured once per tick; every region and target
    /// pixel must lie inside it.
    pub bounds: CaptureRect,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub regions: Vec<RegionSpec>,
    #[serde(default)]
    pub indicators: Vec<IndicatorSpec>,
    /// Show the cursor position readout window (debug aid).
    #[serde(default)]
    pub show_mouse_position: bool,
}

fn default_tick_ms() -> u64 {
    timing::DEFAULT_TICK_MS
}

impl OverlayConfig {
    /// The hand-authored profile for the game this tool was written for:
    /// six HUD regions mirrored to the middle of the screen, the weapon
    /// swap cue, and the elite ability cue.
    pub fn builtin() -> Self {
        let stroke_px = indicator::DEFAULT_STROKE_PX;
        Self {
            bounds: CaptureRect::from_corners(1200, 1200, 2100, 1500),
            tick_ms: timing::DEFAULT_TICK_MS,
            regions: vec![
                RegionSpec {
                    name: "hotbar".into(),
                    capture: CaptureRect::from_corners(1356, 1369, 1668, 1420),
                    display: Point::new(1542, 969),
                    scale: 1.0,
                },
                RegionSpec {
                    name: "utility".into(),
                    capture: CaptureRect::from_corners(1772, 1369, 1880, 1420),
                    display: Point::new(1772, 869),
                    scale: 1.0,
                },
                RegionSpec {
                    name: "elite".into(),
                    capture: CaptureRect::from_corners(1994, 1369, 2042, 1420),
                    display: Point::new(1880, 869),
                    scale: 1.0,
                },
                RegionSpec {
                    name: "special1".into(),
                    capture: CaptureRect::from_corners(1424, 1306, 1512, 1344),
                    display: Point::new(1548, 876),
                    scale: 1.0,
                },
                RegionSpec {
                    name: "special2".into(),
                    capture: CaptureRect::from_corners(1614, 1306, 1654, 1344),
                    display: Point::new(1638, 876),
                    scale: 1.0,
                },
                RegionSpec {
                    name: "swords".into(),
                    capture: CaptureRect::from_corners(1494, 1287, 1586, 1298),
                    display: Point::new(1636, 927),
                    scale: 2.0,
                },
            ],
            indicators: vec![
                IndicatorSpec {
                    name: "swap".into(),
                    target: Point::new(1582, 1297),
                    reference: Rgb(150, 124, 216),
                    invert: false,
                    area: CaptureRect::new(1630, 921, 196, 34),
                    stroke: Stroke {
                        color: Rgb(255, 210, 80),
                        thickness: stroke_px,
                    },
                },
                IndicatorSpec {
                    name: "elite-ready".into(),
                    target: Point::new(2010, 1390),
                    reference: Rgb(20, 20, 20),
                    invert: true,
                    area: CaptureRect::new(1874, 863, 60, 63),
                    stroke: Stroke {
                        color: Rgb(80, 220, 120),
                        thickness: 3,
                    },
                },
            ],
            show_mouse_position: false,
        }
    }

    /// Load a profile from a JSON file. The loaded profile is not yet
    /// validated; callers run `validate` before using it.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check the whole profile against the outer bounds. Called once at
    /// startup; the rest of the pipeline may assume validated geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bounds.is_empty() {
            return Err(ConfigError::EmptyBounds { bounds: self.bounds });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.regions.is_empty() && self.indicators.is_empty() {
            return Err(ConfigError::NothingToShow);
        }

        for region in &self.regions {
            if region.capture.is_empty() {
                return Err(ConfigError::EmptyRegion {
                    name: region.name.clone(),
                    rect: region.capture,
                });
            }
            if !self.bounds.contains_rect(&region.capture) {
                return Err(ConfigError::RegionOutOfBounds {
                    name: region.name.clone(),
                    rect: region.capture,
                    bounds: self.bounds,
                });
            }
            if !(region.scale > 0.0) {
                return Err(ConfigError::InvalidScale {
                    name: region.name.clone(),
                    scale: region.scale,
                });
            }
        }

        for ind in &self.indicators {
            if !self.bounds.contains_point(ind.target) {
                return Err(ConfigError::TargetOutOfBounds {
                    name: ind.name.clone(),
                    target: ind.target,
                    bounds: self.bounds,
                });
            }
            if ind.area.is_empty() {
                return Err(ConfigError::EmptyIndicatorArea {
                    name: ind.name.clone(),
                    area: ind.area,
                });
            }
            if ind.stroke.thickness == 0 {
                return Err(ConfigError::ZeroStroke {
                    name: ind.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_is_valid() {
        OverlayConfig::builtin().validate().unwrap();
    }

    #[test]
    fn region_outside_bounds_is_rejected() {
        let mut config = OverlayConfig::builtin();
        config.regions[0].capture = CaptureRect::from_corners(1100, 1369, 1668, 1420);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::RegionOutOfBounds { .. }));
    }

    #[test]
    fn target_outside_bounds_is_rejected() {
        let mut config = OverlayConfig::builtin();
        config.indicators[0].target = Point::new(2100, 1297);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::TargetOutOfBounds { .. }));
    }

    #[test]
    fn region_on_the_boundary_is_accepted() {
        let mut config = OverlayConfig::builtin();
        config.regions[0].capture = CaptureRect::from_corners(1200, 1200, 2100, 1500);
        config.validate().unwrap();
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut config = OverlayConfig::builtin();
        config.regions[2].scale = 0.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScale { .. }));
    }

    #[test]
    fn zero_tick_is_rejected() {
        let mut config = OverlayConfig::builtin();
        config.tick_ms = 0;

        assert!(matches!(config.validate(), Err(ConfigError::ZeroTick)));
    }

    #[test]
    fn empty_profile_is_rejected() {
        let config = OverlayConfig {
            bounds: CaptureRect::new(0, 0, 100, 100),
            tick_ms: 17,
            regions: vec![],
            indicators: vec![],
            show_mouse_position: false,
        };

        assert!(matches!(config.validate(), Err(ConfigError::NothingToShow)));
    }

    #[test]
    fn zero_stroke_is_rejected() {
        let mut config = OverlayConfig::builtin();
        config.indicators[1].stroke.thickness = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroStroke { .. }));
    }

    #[test]
    fn profile_round_trips_through_json() {
        let config = OverlayConfig::builtin();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: OverlayConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.bounds, config.bounds);
        assert_eq!(back.regions.len(), config.regions.len());
        assert_eq!(back.indicators.len(), config.indicators.len());
        assert_eq!(back.indicators[0].reference, Rgb(150, 124, 216));
        back.validate().unwrap();
    }

    #[test]
    fn profile_defaults_fill_in() {
        let json = r#"{
            "bounds": { "x": 0, "y": 0, "width": 800, "height": 600 },
            "regions": [{
                "name": "minimap",
                "capture": { "x": 10, "y": 10, "width": 100, "height": 100 },
                "display": { "x": 500, "y": 20 }
            }]
        }"#;
        let config: OverlayConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.tick_ms, timing::DEFAULT_TICK_MS);
        assert_eq!(config.regions[0].scale, 1.0);
        assert!(!config.show_mouse_position);
        config.validate().unwrap();
    }

    #[test]
    fn scaled_size_rounds() {
        let spec = RegionSpec {
            name: "swords".into(),
            capture: CaptureRect::from_corners(1494, 1287, 1586, 1298),
            display: Point::new(1636, 927),
            scale: 2.0,
        };
        assert_eq!(spec.scaled_size(), (184, 22));

        let spec = RegionSpec {
            scale: 1.5,
            ..spec
        };
        // 92 * 1.5 = 138, 11 * 1.5 = 16.5 -> 17
        assert_eq!(spec.scaled_size(), (138, 17));
    }
}
