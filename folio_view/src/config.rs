// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use folio_data::{AuthorGrouping, CategoryField};
use folio_scale::MAX_TICKS;
use kurbo::Rect;
use serde::Deserialize;

/// Error returned when a [`PlotConfig`] cannot be loaded or is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for a [`PlotConfig`].
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is out of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Space reserved around the data region, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    /// Left margin, holding the y axis.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin, holding the title.
    pub top: f64,
    /// Bottom margin, holding the x axis.
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 80.0,
            right: 100.0,
            top: 70.0,
            bottom: 50.0,
        }
    }
}

/// Fixed layout and behaviour settings of a scatter view.
///
/// Every field has a default, so a JSON config only needs the values it
/// overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Canvas width in pixels, margins included.
    pub width: f64,
    /// Canvas height in pixels, margins included.
    pub height: f64,
    /// Margins around the data region.
    pub margin: Margins,
    /// PC1 values mapped to the left and right edges of the data region.
    pub x_domain: [f64; 2],
    /// PC2 values mapped to the bottom and top edges of the data region.
    pub y_domain: [f64; 2],
    /// Approximate tick count on the x axis.
    pub x_ticks: usize,
    /// Approximate tick count on the y axis.
    pub y_ticks: usize,
    /// Marker area of a point, in square pixels.
    pub point_area: f64,
    /// Marker area of a legend swatch, in square pixels.
    pub legend_symbol_area: f64,
    /// Opacity of points hidden by the filter.
    pub hidden_opacity: f64,
    /// Chart title.
    pub title: String,
    /// x axis label.
    pub x_label: String,
    /// y axis label.
    pub y_label: String,
    /// Works an author needs to exceed to get their own colour.
    pub author_threshold: usize,
    /// Field used for shapes when the view is created.
    pub category_field: CategoryField,
    /// Distance a legend press may drift and still count as a click.
    pub click_tolerance: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 980.0,
            height: 600.0,
            margin: Margins::default(),
            x_domain: [-0.04, 0.06],
            y_domain: [-0.03, 0.05],
            x_ticks: 10,
            y_ticks: 10,
            point_area: 40.0,
            legend_symbol_area: 64.0,
            hidden_opacity: 0.1,
            title: "Principal Component Analysis Scatterplot".to_owned(),
            x_label: "PC1".to_owned(),
            y_label: "PC2".to_owned(),
            author_threshold: folio_data::DEFAULT_THRESHOLD,
            category_field: CategoryField::Genre,
            click_tolerance: 4.0,
        }
    }
}

impl PlotConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that the layout leaves room for data and that values are sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.margin;
        if [m.left, m.right, m.top, m.bottom].iter().any(|v| *v < 0.0) {
            return Err(ConfigError::Invalid("margins must be non-negative"));
        }
        if self.width <= m.left + m.right || self.height <= m.top + m.bottom {
            return Err(ConfigError::Invalid("margins leave no room for the data region"));
        }
        let [x0, x1] = self.x_domain;
        let [y0, y1] = self.y_domain;
        if [x0, x1, y0, y1].iter().any(|v| !v.is_finite()) || x0 == x1 || y0 == y1 {
            return Err(ConfigError::Invalid("axis domains must be finite and non-empty"));
        }
        if ![self.x_ticks, self.y_ticks]
            .iter()
            .all(|n| (1..=MAX_TICKS).contains(n))
        {
            return Err(ConfigError::Invalid("tick counts must be within 1..=100"));
        }
        if !(0.0..=1.0).contains(&self.hidden_opacity) {
            return Err(ConfigError::Invalid("hidden_opacity must be within 0..=1"));
        }
        if self.point_area <= 0.0 || self.legend_symbol_area <= 0.0 {
            return Err(ConfigError::Invalid("marker areas must be positive"));
        }
        Ok(())
    }

    /// The data region in canvas coordinates.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            self.margin.left,
            self.margin.top,
            self.width - self.margin.right,
            self.height - self.margin.bottom,
        )
    }

    /// The author grouping rule implied by `author_threshold`.
    #[must_use]
    pub fn grouping(&self) -> AuthorGrouping {
        AuthorGrouping::new(self.author_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PlotConfig::default();
        config.validate().unwrap();
        let area = config.plot_area();
        assert_eq!(area.width(), 800.0);
        assert_eq!(area.height(), 480.0);
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let config =
            PlotConfig::from_json(r#"{ "author_threshold": 3, "category_field": "century", "margin": { "left": 60 } }"#)
                .unwrap();
        assert_eq!(config.author_threshold, 3);
        assert_eq!(config.category_field, CategoryField::Century);
        assert_eq!(config.margin.left, 60.0);
        assert_eq!(config.margin.right, 100.0);
        assert_eq!(config.width, 980.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = PlotConfig::from_json(r#"{ "colour": "red" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn crowded_margins_are_rejected() {
        let err = PlotConfig::from_json(r#"{ "width": 150 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn tick_counts_are_bounded() {
        let err = PlotConfig::from_json(r#"{ "x_ticks": 1000000000000 }"#).unwrap_err();
        assert!(err.to_string().contains("tick counts"));
        let err = PlotConfig::from_json(r#"{ "y_ticks": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let config = PlotConfig::from_json(r#"{ "x_ticks": 100, "y_ticks": 1 }"#).unwrap();
        assert_eq!(config.x_ticks, 100);
    }

    #[test]
    fn opacity_out_of_range_is_rejected() {
        let err = PlotConfig::from_json(r#"{ "hidden_opacity": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("hidden_opacity"));
    }
}
