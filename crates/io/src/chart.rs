//! SVG bar charts.
//!
//! Charts are rendered as standalone SVG strings with a `viewBox`, so they
//! scale in any viewer. The y axis and frame are omitted; bar heights are
//! relative to the tallest bar.

use std::fmt::Write as _;

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// One bar of a [`BarChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    label: String,
    count: usize,
    color: String,
    tick: Option<String>,
}

impl Bar {
    /// Creates a bar. `label` is shown as a hover title.
    ///
    /// Defaults: color `steelblue`, no tick label.
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
            color: "steelblue".to_string(),
            tick: None,
        }
    }

    /// Sets the fill color (any SVG color).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the text drawn below the bar on the x axis.
    pub fn with_tick(mut self, tick: impl Into<String>) -> Self {
        self.tick = Some(tick.into());
        self
    }

    /// Returns the hover label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the bar's count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the fill color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the x-axis tick text, if any.
    pub fn tick(&self) -> Option<&str> {
        self.tick.as_deref()
    }
}

/// Layout parameters for a [`BarChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    width: f64,
    height: f64,
    margin: f64,
    font_size: f64,
    bar_fill: f64,
    tick_rotation: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 900.0,
            margin: 40.0,
            font_size: 36.0,
            bar_fill: 0.8,
            tick_rotation: -45.0,
        }
    }
}

impl ChartConfig {
    /// Sets the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the blank border around the plot area.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the tick label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fraction of each slot covered by its bar (0, 1].
    pub fn with_bar_fill(mut self, bar_fill: f64) -> Self {
        self.bar_fill = bar_fill;
        self
    }

    /// Sets the tick label rotation in degrees.
    pub fn with_tick_rotation(mut self, degrees: f64) -> Self {
        self.tick_rotation = degrees;
        self
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn bottom_pad(&self) -> f64 {
        self.margin + 2.5 * self.font_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem found.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        c.require_positive("width", self.width);
        c.require_positive("height", self.height);
        c.require_positive("font_size", self.font_size);
        c.require_non_negative("margin", self.margin);
        c.require_fraction("bar_fill", self.bar_fill);
        if !self.tick_rotation.is_finite() {
            c.push("tick_rotation must be finite");
        }
        if self.width <= 2.0 * self.margin {
            c.push(format!(
                "width {} leaves no room inside margin {}",
                self.width, self.margin
            ));
        }
        if self.height <= self.margin + self.bottom_pad() {
            c.push(format!(
                "height {} leaves no room for bars and tick labels",
                self.height
            ));
        }
        c.finish()
    }
}

/// A vertical bar chart.
///
/// # Example
///
/// ```
/// use kislev_io::{Bar, BarChart};
///
/// let chart = BarChart::new(vec![
///     Bar::new("Sunday", 3).with_tick("Sunday"),
///     Bar::new("Monday", 5).with_color("red"),
/// ]);
/// let svg = chart.to_svg().unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<rect class=\"bar\"").count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
    config: ChartConfig,
}

impl BarChart {
    /// Creates a chart with the default layout.
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            config: ChartConfig::default(),
        }
    }

    /// Replaces the layout.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the bars in drawing order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Renders the chart as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the layout is invalid.
    pub fn to_svg(&self) -> Result<String, IoError> {
        self.config.validate()?;
        let cfg = &self.config;
        let (width, height) = (cfg.width, cfg.height);
        let left = cfg.margin;
        let top = cfg.margin;
        let plot_w = width - 2.0 * cfg.margin;
        let plot_h = height - top - cfg.bottom_pad();
        let baseline = top + plot_h;
        let max = self.bars.iter().map(Bar::count).max().unwrap_or(0).max(1) as f64;
        let slot = plot_w / self.bars.len().max(1) as f64;
        let bar_w = slot * cfg.bar_fill;
        let anchor = if cfg.tick_rotation < 0.0 { "end" } else { "middle" };

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
        );
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
        );
        for (i, bar) in self.bars.iter().enumerate() {
            let x = left + i as f64 * slot + (slot - bar_w) / 2.0;
            let h = bar.count as f64 / max * plot_h;
            let y = baseline - h;
            let _ = write!(
                svg,
                r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{}"><title>{}: {}</title></rect>"#,
                escape(&bar.color),
                escape(&bar.label),
                bar.count
            );
            if let Some(tick) = &bar.tick {
                let tx = x + bar_w / 2.0;
                let ty = baseline + cfg.font_size * 1.2;
                let _ = write!(
                    svg,
                    r#"<text x="{tx:.1}" y="{ty:.1}" text-anchor="{anchor}" font-size="{}" font-family="sans-serif" transform="rotate({} {tx:.1} {ty:.1})">{}</text>"#,
                    cfg.font_size,
                    cfg.tick_rotation,
                    escape(tick)
                );
            }
        }
        svg.push_str("</svg>");
        Ok(svg)
    }
}

/// Escapes text for use inside SVG content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
