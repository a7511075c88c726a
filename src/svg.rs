//! SVG visualization of ranked layouts.
//!
//! Generates a vertical sequence of annotated panels, one per candidate in
//! ranking order, showing every cell and the content fitted inside it.
//!
//! # Example
//!
//! ```
//! use zengrid::{rank_layouts, svg::render_ranking_svg};
//!
//! let ranked = rank_layouts(1920.0, 1080.0, 5, 16.0 / 9.0).unwrap();
//! let svg = render_ranking_svg(&ranked, 3);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::fit::Rect;
use crate::grid::GridLayout;
use crate::rank::RankedCandidate;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One candidate's panel.
struct Panel<'a> {
    label: String,
    annotation: String,
    layout: &'a GridLayout,
}

/// Render the first `limit` candidates of a ranking as an SVG document.
///
/// Returns a complete SVG document as a string.
pub fn render_ranking_svg(ranked: &[RankedCandidate], limit: usize) -> String {
    let panels: Vec<Panel<'_>> = ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(place, r)| Panel {
            label: format!("#{}  {}  score {:.2}", place + 1, r.layout.id, r.combined_deviation),
            annotation: format!(
                "total {:.0}, min {:.0}, max {:.0}",
                r.layout.content_area.total, r.layout.content_area.min, r.layout.content_area.max
            ),
            layout: &r.layout,
        })
        .collect();
    render_panels(&panels)
}

/// Render a single layout as an SVG document.
pub fn render_layout_svg(layout: &GridLayout) -> String {
    let panel = Panel {
        label: format!(
            "{}  {}×{}",
            layout.id, layout.container.width, layout.container.height
        ),
        annotation: format!("tracks {}", layout.template.columns_css()),
        layout,
    };
    render_panels(&[panel])
}

/// Scale the container to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Rect) -> (f64, f64, f64) {
    let w = size.width;
    let h = size.height;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel<'_>]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .cell { fill: #1a1a1a; stroke: #999; stroke-width: 0.5; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .cell { fill: #000; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (sw, sh, scale) = scale_to_fit(panel.layout.container);
        let panel_x = center_x - sw / 2.0;
        let panel_y = y;

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
            panel_x, panel_y, sw, sh
        ));
        svg.push('\n');

        for p in panel.layout.placements() {
            for (region, class) in [(p.cell, "cell"), (p.content, "inner")] {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
                    panel_x + region.x * scale,
                    panel_y + region.y * scale,
                    region.width * scale,
                    region.height * scale,
                    class
                ));
                svg.push('\n');
            }
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + sh + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
