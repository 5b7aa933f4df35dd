//! Stroke styles and layer toggles for rendered boards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::common::xml_escape;

/// Named dash patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashPreset {
    Solid,
    Dashed,
    Dotted,
    DashedLong,
    DashedDotted,
}

impl DashPreset {
    pub fn pattern(self) -> &'static str {
        match self {
            DashPreset::Solid => "",
            DashPreset::Dashed => "5,5",
            DashPreset::Dotted => "2,2",
            DashPreset::DashedLong => "10,5",
            DashPreset::DashedDotted => "10,5,2,5",
        }
    }
}

/// A dash preset name or a raw `stroke-dasharray` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dash {
    Preset(DashPreset),
    Custom(String),
}

impl Dash {
    pub fn pattern(&self) -> &str {
        match self {
            Dash::Preset(preset) => preset.pattern(),
            Dash::Custom(raw) => raw,
        }
    }
}

/// Stroke used for one ray in the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub stroke: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_dash")]
    pub dash: Dash,
}

fn default_width() -> f64 {
    0.5
}

fn default_dash() -> Dash {
    Dash::Preset(DashPreset::Solid)
}

impl LineSet {
    /// SVG presentation attributes for this stroke. Values come from board
    /// files, so they are escaped.
    pub fn attributes(&self) -> String {
        let mut attrs = format!(r#"stroke="{}" stroke-width="{}""#, xml_escape(&self.stroke), self.width);
        let dash = self.dash.pattern();
        if !dash.is_empty() {
            attrs.push_str(&format!(r#" stroke-dasharray="{}""#, xml_escape(dash)));
        }
        attrs
    }
}

/// Toggleable drawing layers. Toggles only affect drawing; every layer is
/// always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Layer {
    Polygon,
    Rays,
    Directions,
    Inner,
    OuterInner,
    Midpoints,
    Spokes,
    MarmaLines,
    MarmaPoints,
    Zones,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layers {
    pub polygon: bool,
    pub rays: bool,
    pub directions: bool,
    pub inner: bool,
    pub outer_inner: bool,
    pub midpoints: bool,
    pub spokes: bool,
    pub marma_lines: bool,
    pub marma_points: bool,
    pub zones: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            polygon: true,
            rays: true,
            directions: true,
            inner: true,
            outer_inner: true,
            midpoints: true,
            spokes: true,
            marma_lines: true,
            marma_points: true,
            zones: true,
        }
    }
}

impl Layers {
    fn slot(&mut self, layer: Layer) -> &mut bool {
        match layer {
            Layer::Polygon => &mut self.polygon,
            Layer::Rays => &mut self.rays,
            Layer::Directions => &mut self.directions,
            Layer::Inner => &mut self.inner,
            Layer::OuterInner => &mut self.outer_inner,
            Layer::Midpoints => &mut self.midpoints,
            Layer::Spokes => &mut self.spokes,
            Layer::MarmaLines => &mut self.marma_lines,
            Layer::MarmaPoints => &mut self.marma_points,
            Layer::Zones => &mut self.zones,
        }
    }

    pub fn hide(&mut self, layers: &[Layer]) {
        for &layer in layers {
            *self.slot(layer) = false;
        }
    }
}

/// Board styling section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Ray `i` uses `line_sets[i % len]`.
    pub line_sets: Vec<LineSet>,
    pub layers: Layers,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_sets: vec![
                LineSet {
                    stroke: "#000".to_string(),
                    width: 0.5,
                    dash: Dash::Custom("5,5".to_string()),
                },
                LineSet {
                    stroke: "#0066cc".to_string(),
                    width: 0.5,
                    dash: Dash::Preset(DashPreset::Solid),
                },
            ],
            layers: Layers::default(),
        }
    }
}

impl Style {
    /// Stroke for ray `index`; falls back to the defaults if none are set.
    pub fn line_set(&self, index: usize) -> LineSet {
        if self.line_sets.is_empty() {
            let defaults = Style::default().line_sets;
            return defaults[index % defaults.len()].clone();
        }
        self.line_sets[index % self.line_sets.len()].clone()
    }
}
