//! Growth-series chart layout
//!
//! Pure geometry: the engine produces [`GrowthPoint`]s, this module turns
//! them into viewport coordinates and SVG path strings, and the rendering
//! surface just draws them. No UI framework dependency.

use serde::{Deserialize, Serialize};

use crate::projection::GrowthPoint;

/// Chart viewport in abstract units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 200.0,
            padding_x: 20.0,
            padding_y: 20.0,
        }
    }
}

impl ChartGeometry {
    fn inner_width(&self) -> f64 {
        (self.width - self.padding_x * 2.0).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - self.padding_y * 2.0).max(0.0)
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding_y
    }
}

/// A positioned chart point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Lay a growth series out across the viewport.
///
/// X spreads points evenly; Y normalizes values against the series range,
/// inverted for screen coordinates. A flat series (range 0, e.g. zero APY)
/// sits on the baseline rather than dividing by zero.
pub fn layout_points(series: &[GrowthPoint], geometry: &ChartGeometry) -> Vec<ChartPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let min_value = series.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max_value = series
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = (max_value - min_value).max(1.0);
    let last = (series.len() - 1).max(1) as f64;

    series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let ratio = if series.len() > 1 {
                index as f64 / last
            } else {
                0.0
            };
            let normalized = (point.value - min_value) / range;
            ChartPoint {
                x: geometry.padding_x + ratio * geometry.inner_width(),
                y: geometry.baseline() - normalized * geometry.inner_height(),
            }
        })
        .collect()
}

/// SVG path for the growth line: `"M{x},{y} L{x},{y} ..."`
pub fn line_path(points: &[ChartPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let command = if index == 0 { "M" } else { "L" };
            format!("{command}{},{}", point.x, point.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG path for the filled area under the line, closed down to the baseline
pub fn area_path(points: &[ChartPoint], geometry: &ChartGeometry) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let last = points.last().unwrap_or(first);
    let baseline = geometry.baseline();

    format!(
        "{} L{},{baseline} L{},{baseline} Z",
        line_path(points),
        last.x,
        first.x
    )
}
