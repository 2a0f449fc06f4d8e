//! Slider configuration.
//!
//! Everything here arrives already resolved: colors and sizes are concrete
//! values, not theme lookups. Configs can be written and loaded as JSON.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;

/// Log level setting for the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show gesture start/end
    Debug,
    /// Show every drag update
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Geometry and appearance of one slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower bound of the value range
    #[serde(default)]
    pub min: f32,

    /// Upper bound of the value range
    #[serde(default = "default_max")]
    pub max: f32,

    /// Number of discrete steps, continuous when absent
    #[serde(default)]
    pub divisions: Option<u32>,

    /// Horizontal inset of the track from each widget edge
    #[serde(default = "default_horizontal_padding")]
    pub horizontal_padding: f32,

    /// Preferred widget height
    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default)]
    pub style: SliderStyle,

    #[serde(default)]
    pub indicator: IndicatorConfig,
}

fn default_max() -> f32 {
    1.0
}

fn default_horizontal_padding() -> f32 {
    26.0
}

fn default_height() -> f32 {
    45.0
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: default_max(),
            divisions: None,
            horizontal_padding: default_horizontal_padding(),
            height: default_height(),
            style: SliderStyle::default(),
            indicator: IndicatorConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `max - min`; zero disables the slider.
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Reject invalid bounds, divisions and sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(ConfigError::non_finite(field));
            }
        }
        if self.max < self.min {
            return Err(ConfigError::MaxBelowMin {
                min: self.min,
                max: self.max,
            });
        }
        if self.divisions == Some(0) {
            return Err(ConfigError::ZeroDivisions);
        }

        let sizes = [
            ("horizontal_padding", self.horizontal_padding),
            ("height", self.height),
            ("style.thumb_radius", self.style.thumb_radius),
            ("style.active_track_size", self.style.active_track_size),
            ("style.inactive_track_size", self.style.inactive_track_size),
            ("style.thumb_elevation", self.style.thumb_elevation),
            ("indicator.font_size", self.indicator.font_size),
        ];
        for (field, value) in sizes {
            if !value.is_finite() {
                return Err(ConfigError::non_finite(field));
            }
            if value < 0.0 {
                return Err(ConfigError::negative_size(field, value));
            }
        }
        Ok(())
    }

    /// Reject a value list that is empty, unordered, or out of bounds.
    pub fn validate_values(&self, values: &[f32]) -> Result<(), ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptyValues);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::non_finite(format!("values[{}]", index)));
            }
            if value < self.min || value > self.max {
                return Err(ConfigError::OutOfRange {
                    index,
                    value,
                    min: self.min,
                    max: self.max,
                });
            }
            if index > 0 && value < values[index - 1] {
                return Err(ConfigError::NotAscending {
                    index,
                    previous: values[index - 1],
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Colors and sizes of the track and thumbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Track color for active ranges
    pub active_color: Color,
    /// Track color for inactive ranges
    pub inactive_color: Color,
    /// Per-range track colors, indexed by range index; missing entries fall
    /// back to the active/inactive color
    pub range_colors: Option<Vec<Color>>,
    pub thumb_color: Color,
    pub thumb_radius: f32,
    pub active_track_size: f32,
    pub inactive_track_size: f32,
    /// Draw an enlarged translucent disc behind the grabbed thumb
    pub selected_halo: bool,
    /// Thumb shadow elevation, no shadow when zero
    pub thumb_elevation: f32,
    pub shadow_color: Color,
    pub disabled_active_color: Color,
    pub disabled_inactive_color: Color,
    pub disabled_thumb_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            active_color: Color::rgb(0.3, 0.6, 0.9),
            inactive_color: Color::rgb(0.3, 0.3, 0.3),
            range_colors: None,
            thumb_color: Color::WHITE,
            thumb_radius: 10.0,
            active_track_size: 6.0,
            inactive_track_size: 4.0,
            selected_halo: true,
            thumb_elevation: 2.0,
            shadow_color: Color::BLACK.with_alpha(0.4),
            disabled_active_color: Color::rgb(0.45, 0.45, 0.45),
            disabled_inactive_color: Color::rgb(0.25, 0.25, 0.25),
            disabled_thumb_color: Color::rgb(0.6, 0.6, 0.6),
        }
    }
}

/// The three colors a paint pass needs after enabled/disabled resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackColors {
    pub active: Color,
    pub inactive: Color,
    pub thumb: Color,
}

impl SliderStyle {
    pub fn colors(&self, enabled: bool) -> TrackColors {
        if enabled {
            TrackColors {
                active: self.active_color,
                inactive: self.inactive_color,
                thumb: self.thumb_color,
            }
        } else {
            TrackColors {
                active: self.disabled_active_color,
                inactive: self.disabled_inactive_color,
                thumb: self.disabled_thumb_color,
            }
        }
    }

    /// Override color for a range, if one was configured.
    pub fn range_color(&self, index: usize) -> Option<Color> {
        self.range_colors.as_ref()?.get(index).copied()
    }

    pub fn track_size(&self, active: bool) -> f32 {
        if active {
            self.active_track_size
        } else {
            self.inactive_track_size
        }
    }
}

/// Numeric value labels drawn above the thumbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub show: bool,
    /// Fractional digits of the default label
    pub decimals: usize,
    pub font_size: f32,
    /// Distance between the top of the thumb and the label baseline
    pub gap: f32,
    pub color: Color,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            show: false,
            decimals: 1,
            font_size: 12.0,
            gap: 4.0,
            color: Color::rgb(0.9, 0.9, 0.9),
        }
    }
}

impl IndicatorConfig {
    /// Default label text for a value.
    pub fn format(&self, value: f32) -> String {
        format!("{:.*}", self.decimals, value)
    }
}
