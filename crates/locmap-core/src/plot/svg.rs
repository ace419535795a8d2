use super::{Bounds, MarkerKind, PlotStyle, ScatterPlot};
use crate::models::Point;

/// Maps data coordinates onto the canvas (y grows upwards in data space)
struct Viewport {
    bounds: Bounds,
    left: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    fn new(bounds: Bounds, style: &PlotStyle) -> Self {
        Self {
            bounds,
            left: style.margin,
            bottom: f64::from(style.height) - style.margin,
            width: f64::from(style.width) - 2.0 * style.margin,
            height: f64::from(style.height) - 2.0 * style.margin,
        }
    }

    fn project(&self, p: Point) -> (f64, f64) {
        let x = self.left + (p.x - self.bounds.min.x) / self.bounds.width() * self.width;
        let y = self.bottom - (p.y - self.bounds.min.y) / self.bounds.height() * self.height;
        (x, y)
    }
}

/// Renders a standalone SVG document
pub fn render(plot: &ScatterPlot, style: &PlotStyle) -> String {
    let bounds = plot
        .bounds()
        .unwrap_or(Bounds {
            min: Point::new(0.0, 0.0),
            max: Point::new(1.0, 1.0),
        })
        .padded(style.padding);
    let view = Viewport::new(bounds, style);

    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = style.width,
        h = style.height
    ));
    svg.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        escape_xml(&style.background)
    ));
    svg.push_str(&format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
        view.left, style.margin, view.width, view.height
    ));
    write_axis_ticks(&mut svg, &view, style);

    svg.push_str("  <g class=\"markers\">\n");
    for marker in &plot.markers {
        let (cx, cy) = view.project(marker.point);
        let color = match marker.kind {
            MarkerKind::Token => &style.token_color,
            MarkerKind::Power => &style.power_color,
        };
        svg.push_str(&format!(
            "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
            cx,
            cy,
            style.marker_radius,
            escape_xml(color)
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str(&format!("  <g class=\"labels\" font-size=\"{}\">\n", style.font_size));
    for label in &plot.labels {
        let (x, y) = view.project(label.point);
        svg.push_str(&format!(
            "    <text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
            x,
            y,
            escape_xml(&label.text)
        ));
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Min/max value labels on both axes
fn write_axis_ticks(svg: &mut String, view: &Viewport, style: &PlotStyle) {
    let b = view.bounds;
    let tick = style.font_size;
    let below = view.bottom + tick + 4.0;
    let right = view.left + view.width;
    let top = style.margin;

    svg.push_str(&format!("  <g class=\"axes\" font-size=\"{}\" fill=\"dimgray\">\n", tick));
    for (x, y, anchor, value) in [
        (view.left, below, "start", b.min.x),
        (right, below, "end", b.max.x),
        (view.left - 4.0, view.bottom, "end", b.min.y),
        (view.left - 4.0, top + tick, "end", b.max.y),
    ] {
        svg.push_str(&format!(
            "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\">{:.2}</text>\n",
            x, y, anchor, value
        ));
    }
    svg.push_str("  </g>\n");
}

/// Escapes special characters for XML text and attributes
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
