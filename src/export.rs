//! Hand-off to the rendering collaborator.
//!
//! Two outputs:
//! - `<name>.layers.json`, the classified layers plus panel metadata
//! - `<name>.svg`, a preview with the panel's Y axis flipped to SVG's

use anyhow::Context;
use frontpanel_core::{Point, Rect};
use frontpanel_features::{
    copper_pour, Alignment, Classification, Feature, HorizontalAlign, Line, Text, VerticalAlign,
};
use frontpanel_formats::{FormatKind, PanelFormat};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Points to millimetres
const PT_TO_MM: f64 = 25.4 / 72.0;

/// Thinnest stroke drawn in the preview; zero-width fill lines would vanish
const PREVIEW_MIN_STROKE: f64 = 0.05;

const OUTLINE_COLOUR: &str = "#000000";
const DECORATION_COLOUR: &str = "#808080";
const COPPER_COLOUR: &str = "#e8c39e";

/// Panel metadata for the renderer
#[derive(Debug, Clone, Serialize)]
pub struct PanelMetadata {
    pub format: FormatKind,
    pub units: u32,
    pub width: f64,
    pub height: f64,
    pub horizontal_fit: f64,
    pub corner_radius: f64,
    pub outline: Rect,
    pub copper_pour: Rect,
    /// Copper pour as a closed polygon, top-left first
    pub copper_pour_ring: [Point; 5],
}

impl PanelMetadata {
    pub fn new(format: &PanelFormat) -> Self {
        let pour = copper_pour(format);
        Self {
            format: format.kind(),
            units: format.units(),
            width: format.width(),
            height: format.height(),
            horizontal_fit: format.horizontal_fit(),
            corner_radius: format.corner_radius(),
            outline: format.outline_rect(),
            copper_pour: pour,
            copper_pour_ring: pour.closed_ring(),
        }
    }
}

/// Contents of `<name>.layers.json`
#[derive(Debug, Clone, Serialize)]
pub struct LayersDocument<'a> {
    pub generator: String,
    pub name: &'a str,
    pub panel: PanelMetadata,
    pub layers: &'a Classification,
}

impl<'a> LayersDocument<'a> {
    pub fn new(name: &'a str, format: &PanelFormat, layers: &'a Classification) -> Self {
        Self {
            generator: format!("frontpanel {}", crate::VERSION),
            name,
            panel: PanelMetadata::new(format),
            layers,
        }
    }
}

pub fn layers_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.layers.json", name))
}

pub fn svg_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.svg", name))
}

/// Write `<name>.layers.json` into `dir`, returning its path.
pub fn write_layers_json(
    dir: &Path,
    name: &str,
    format: &PanelFormat,
    layers: &Classification,
) -> anyhow::Result<PathBuf> {
    let path = layers_path(dir, name);
    let doc = LayersDocument::new(name, format, layers);
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize layers")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote layers to {}", path.display());
    Ok(path)
}

/// Write `<name>.svg` into `dir`, returning its path.
pub fn write_svg(
    dir: &Path,
    name: &str,
    format: &PanelFormat,
    layers: &Classification,
) -> anyhow::Result<PathBuf> {
    let path = svg_path(dir, name);
    std::fs::write(&path, render_svg(format, layers))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote preview to {}", path.display());
    Ok(path)
}

fn text_anchor(alignment: Alignment) -> &'static str {
    match alignment.horizontal() {
        HorizontalAlign::Left => "start",
        HorizontalAlign::Centre => "middle",
        HorizontalAlign::Right => "end",
    }
}

fn dominant_baseline(alignment: Alignment) -> &'static str {
    match alignment.vertical() {
        VerticalAlign::Top => "text-before-edge",
        VerticalAlign::Centre => "central",
        VerticalAlign::Bottom => "text-after-edge",
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

struct SvgWriter {
    out: String,
    height: f64,
}

impl SvgWriter {
    fn flip(&self, p: Point) -> Point {
        Point::new(p.x, self.height - p.y)
    }

    fn line(&mut self, line: &Line, colour: &str) {
        let a = self.flip(line.start());
        let b = self.flip(line.end());
        let _ = writeln!(
            self.out,
            r#"    <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-width="{:.3}" stroke-linecap="round"/>"#,
            a.x,
            a.y,
            b.x,
            b.y,
            colour,
            line.thickness().max(PREVIEW_MIN_STROKE)
        );
    }

    fn circle(&mut self, origin: Point, radius: f64, colour: &str) {
        let c = self.flip(origin);
        let _ = writeln!(
            self.out,
            r#"    <circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="none" stroke="{}" stroke-width="{:.3}"/>"#,
            c.x, c.y, radius, colour, PREVIEW_MIN_STROKE
        );
    }

    fn text(&mut self, text: &Text, colour: &str) {
        let o = self.flip(text.origin());
        // Counter-clockwise in panel space is clockwise once Y is flipped
        let transform = if text.rotation() != 0.0 {
            format!(
                r#" transform="rotate({:.3} {:.3} {:.3})""#,
                -text.rotation().to_degrees(),
                o.x,
                o.y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            self.out,
            r#"    <text x="{:.3}" y="{:.3}" font-family="monospace" font-weight="bold" font-size="{:.3}" text-anchor="{}" dominant-baseline="{}" fill="{}"{}>{}</text>"#,
            o.x,
            o.y,
            text.size() * PT_TO_MM,
            text_anchor(text.alignment()),
            dominant_baseline(text.alignment()),
            colour,
            transform,
            escape_xml(text.text())
        );
    }

    fn feature(&mut self, feature: &Feature, colour: &str) {
        match feature {
            Feature::Line(l) => self.line(l, colour),
            Feature::Circle(c) => self.circle(c.origin(), c.radius(), colour),
            Feature::Text(t) => self.text(t, colour),
        }
    }

    fn group(&mut self, id: &str, features: &[Feature], colour: &str) {
        let _ = writeln!(self.out, r#"  <g id="{}">"#, id);
        for feature in features {
            self.feature(feature, colour);
        }
        let _ = writeln!(self.out, "  </g>");
    }
}

/// Preview of the classified layers. Drawn bottom up: copper, decoration,
/// drills, outline.
pub fn render_svg(format: &PanelFormat, layers: &Classification) -> String {
    let width = format.width();
    let height = format.height();
    let mut svg = SvgWriter {
        out: String::new(),
        height,
    };

    let _ = writeln!(
        svg.out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.3}mm" height="{h:.3}mm" viewBox="0 0 {w:.3} {h:.3}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(svg.out, "  <title>{}</title>", escape_xml(&format.to_string()));

    let pour = copper_pour(format);
    let top_left = svg.flip(Point::new(pour.min.x, pour.max.y));
    let _ = writeln!(
        svg.out,
        r#"  <rect id="copper" x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="{}" fill-opacity="0.4"/>"#,
        top_left.x,
        top_left.y,
        pour.width(),
        pour.height(),
        COPPER_COLOUR
    );

    svg.group("decoration", &layers.decoration, DECORATION_COLOUR);
    svg.group("drill", &layers.drill, OUTLINE_COLOUR);
    svg.group("outline", &layers.outline, OUTLINE_COLOUR);

    svg.out.push_str("</svg>\n");
    svg.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontpanel_features::{classify, outline, TextOptions};

    fn eurorack(units: i64) -> PanelFormat {
        PanelFormat::new(FormatKind::Eurorack, units).unwrap()
    }

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(text_anchor(Alignment::TopLeft), "start");
        assert_eq!(text_anchor(Alignment::Centre), "middle");
        assert_eq!(text_anchor(Alignment::BottomRight), "end");
        assert_eq!(dominant_baseline(Alignment::TopCentre), "text-before-edge");
        assert_eq!(dominant_baseline(Alignment::CentreRight), "central");
        assert_eq!(dominant_baseline(Alignment::BottomLeft), "text-after-edge");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A<B & \"C\""), "A&lt;B &amp; &quot;C&quot;");
    }

    #[test]
    fn test_svg_flips_y() {
        let p = eurorack(8);
        let layers = classify(outline(&p));
        let svg = render_svg(&p, &layers);
        // Bottom-left mounting hole at panel y=3.0 sits 3mm above the SVG bottom
        assert!(svg.contains(r#"<circle cx="7.500" cy="125.500" r="1.600""#));
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_text() {
        let p = eurorack(8);
        let text = Text::new(
            Point::new(20.32, 125.5),
            "A&B",
            TextOptions {
                alignment: Alignment::Centre,
                size: 16.0,
                ..TextOptions::default()
            },
        )
        .unwrap();
        let layers = classify(vec![Feature::from(text)]);
        let svg = render_svg(&p, &layers);
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(">A&amp;B</text>"));
    }

    #[test]
    fn test_metadata() {
        let meta = PanelMetadata::new(&eurorack(8));
        assert_eq!(meta.units, 8);
        assert_eq!(meta.horizontal_fit, 0.25);
        assert_eq!(meta.copper_pour.min.y, 8.0);
        assert_eq!(meta.outline.min.x, 0.125);
        assert_eq!(meta.copper_pour_ring[0], Point::new(0.125, 120.5));
        assert_eq!(meta.copper_pour_ring[0], meta.copper_pour_ring[4]);
    }
}
