//! Circular progress gauge for the LTV/CAC ratio.
//!
//! The filled arc covers `fraction * circumference` of a circle, starting at
//! twelve o'clock and sweeping clockwise. The neutral track is drawn first so
//! the arc sits on top of it.

use std::f64::consts::PI;

use crate::config::GaugeConfig;
use crate::core::RatioReport;

/// Geometry of a gauge rendered into a `size x size` box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub size: f64,
    pub stroke: f64,
    pub radius: f64,
    pub center: f64,
    pub circumference: f64,
    /// Fill fraction after clamping to `[0, 1]`
    pub fraction: f64,
}

impl GaugeGeometry {
    pub fn new(size: u32, stroke: u32, fraction: f64) -> Self {
        let size = f64::from(size);
        let stroke = f64::from(stroke);
        let radius = (size - stroke) / 2.0;
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            size,
            stroke,
            radius,
            center: size / 2.0,
            circumference: 2.0 * PI * radius,
            fraction,
        }
    }

    /// Length of the visible arc.
    pub fn filled_length(&self) -> f64 {
        self.fraction * self.circumference
    }

    /// `stroke-dashoffset` hiding the unfilled part of the dash.
    pub fn dash_offset(&self) -> f64 {
        self.circumference * (1.0 - self.fraction)
    }
}

/// Render a gauge as a standalone SVG document.
pub fn render_svg(fraction: f64, healthy: bool, config: &GaugeConfig) -> String {
    let geometry = GaugeGeometry::new(config.size, config.stroke, fraction);
    let color = config.arc_color(healthy);
    let c = fmt_num(geometry.center);
    let r = fmt_num(geometry.radius);
    let stroke = fmt_num(geometry.stroke);
    let size = fmt_num(geometry.size);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
    ));
    svg.push_str(&format!("  <g transform=\"rotate(-90 {c} {c})\">\n"));
    svg.push_str(&format!(
        "    <circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" stroke=\"{}\" stroke-width=\"{stroke}\" fill=\"none\"/>\n",
        config.track_color
    ));
    svg.push_str(&format!(
        "    <circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" stroke=\"{color}\" stroke-width=\"{stroke}\" fill=\"none\" stroke-linecap=\"round\" stroke-dasharray=\"{}\" stroke-dashoffset=\"{}\"/>\n",
        fmt_num(geometry.circumference),
        fmt_num(geometry.dash_offset())
    ));
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Render the gauge for a calculator report.
pub fn render_report(report: &RatioReport, config: &GaugeConfig) -> String {
    render_svg(report.gauge_fraction, report.is_healthy, config)
}

/// Up to three decimals, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = GaugeGeometry::new(180, 12, 0.2);
        assert_eq!(g.radius, 84.0);
        assert_eq!(g.center, 90.0);
        assert!((g.circumference - 2.0 * PI * 84.0).abs() < 1e-9);
        assert!((g.filled_length() - 0.2 * g.circumference).abs() < 1e-9);
        assert!((g.dash_offset() - 0.8 * g.circumference).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(GaugeGeometry::new(180, 12, 3.0).fraction, 1.0);
        assert_eq!(GaugeGeometry::new(180, 12, -1.0).fraction, 0.0);
        assert_eq!(GaugeGeometry::new(180, 12, f64::NAN).fraction, 0.0);
        assert_eq!(GaugeGeometry::new(180, 12, 1.0).dash_offset(), 0.0);
    }

    #[test]
    fn test_svg_uses_status_color_and_rotation() {
        let config = GaugeConfig::default();
        let healthy = render_svg(1.0, true, &config);
        assert!(healthy.contains(r#"rotate(-90 90 90)"#));
        assert!(healthy.contains(r##"stroke="#16a34a""##));
        assert!(healthy.contains(r##"stroke="#e2e8f0""##));
        assert!(healthy.contains(r#"stroke-dashoffset="0""#));

        let warning = render_svg(0.2, false, &config);
        assert!(warning.contains(r##"stroke="#e11d48""##));
        assert!(warning.contains(r#"stroke-dasharray="527.788""#));
        assert!(warning.contains(r#"stroke-dashoffset="422.23""#));
    }

    #[test]
    fn test_track_is_drawn_before_arc() {
        let svg = render_svg(0.5, true, &GaugeConfig::default());
        let track = svg.find("#e2e8f0").unwrap();
        let arc = svg.find("#16a34a").unwrap();
        assert!(track < arc);
    }

    #[test]
    fn test_svg_document_layout() {
        let svg = render_svg(0.5, true, &GaugeConfig::default());
        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="180""#));
        assert_eq!(lines[4], "  </g>");
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(90.0), "90");
        assert_eq!(fmt_num(84.5), "84.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }
}
