// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for Folio scatter views.
//!
//! [`render_svg`] writes a standalone SVG document for the current state of a
//! [`ScatterView`]: title, both axes, one marker per record and the author and
//! category legends to the right of the plot.
//!
//! The output is a snapshot. Hidden points are kept in the document at reduced
//! opacity with pointer events disabled, so a browser shows the same picture
//! the interactive chart would. Each point carries its tooltip as a `<title>`.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_data::Dataset;
//! use folio_view::{PlotConfig, ScatterView};
//!
//! let csv = "\
//! PC1,PC2,Author,Full Author,Simple Genre,Century,WWO Title
//! 0.01,0.02,behn,Aphra Behn,Drama,17th,The Rover
//! ";
//! let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
//! let view = ScatterView::new(dataset, PlotConfig::default());
//!
//! let svg = folio_svg::render_svg(&view);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("class=\"data-point\""));
//! ```

mod format;

use core::fmt::Write as _;

use folio_filter::Facet;
use folio_scale::{LinearScale, Symbol};
use folio_view::{LegendEntry, PlotConfig, ScatterView};
use html_escape::{encode_double_quoted_attribute, encode_text};
use kurbo::Rect;

use crate::format::{bez_path_to_svg_d, color_to_svg, fmt_f64};

/// Width added to the right of the plot for the legends.
pub const LEGEND_WIDTH: f64 = 220.0;

/// Vertical distance between legend rows.
pub const LEGEND_ROW_HEIGHT: f64 = 25.0;

const TICK_SIZE: f64 = 6.0;
const LEGEND_GAP: f64 = 30.0;
const FONT: &str = "sans-serif";

/// Renders `view` as a standalone SVG document.
#[must_use]
pub fn render_svg(view: &ScatterView) -> String {
    let config = view.config();
    let area = config.plot_area();

    let mut body = String::new();
    write_title(&mut body, config, area);
    write_x_axis(&mut body, config, view.x_scale(), area);
    write_y_axis(&mut body, config, view.y_scale(), area);
    write_points(&mut body, view);
    let legend_bottom = write_legends(&mut body, view, config.width + 20.0, area.y0);

    let width = config.width + LEGEND_WIDTH;
    let height = config.height.max(legend_bottom + LEGEND_ROW_HEIGHT);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT}\">",
        w = fmt_f64(width),
        h = fmt_f64(height),
    );
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}

fn write_title(out: &mut String, config: &PlotConfig, area: Rect) {
    let _ = writeln!(
        out,
        "<text class=\"title\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-weight=\"bold\">{}</text>",
        fmt_f64(area.center().x),
        fmt_f64(config.margin.top / 2.0),
        encode_text(&config.title),
    );
}

fn write_x_axis(out: &mut String, config: &PlotConfig, scale: &LinearScale, area: Rect) {
    out.push_str("<g class=\"axis x-axis\">\n");
    let _ = writeln!(
        out,
        "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"#000000\"/>",
        fmt_f64(area.x0),
        fmt_f64(area.x1),
        y = fmt_f64(area.y1),
    );
    for tick in scale.ticks(config.x_ticks) {
        let x = fmt_f64(scale.map(tick));
        let _ = writeln!(
            out,
            "<line x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\" stroke=\"#000000\"/><text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-size=\"10\">{}</text>",
            fmt_f64(area.y1),
            fmt_f64(area.y1 + TICK_SIZE),
            fmt_f64(area.y1 + TICK_SIZE + 12.0),
            fmt_f64(tick),
        );
    }
    out.push_str("</g>\n");
    let _ = writeln!(
        out,
        "<text class=\"axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
        fmt_f64(area.center().x),
        fmt_f64(area.y1 + 40.0),
        encode_text(&config.x_label),
    );
}

fn write_y_axis(out: &mut String, config: &PlotConfig, scale: &LinearScale, area: Rect) {
    out.push_str("<g class=\"axis y-axis\">\n");
    let _ = writeln!(
        out,
        "<line x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\" stroke=\"#000000\"/>",
        fmt_f64(area.y0),
        fmt_f64(area.y1),
        x = fmt_f64(area.x0),
    );
    for tick in scale.ticks(config.y_ticks) {
        let y = fmt_f64(scale.map(tick));
        let _ = writeln!(
            out,
            "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"#000000\"/><text x=\"{}\" y=\"{y}\" dy=\"0.32em\" text-anchor=\"end\" font-size=\"10\">{}</text>",
            fmt_f64(area.x0 - TICK_SIZE),
            fmt_f64(area.x0),
            fmt_f64(area.x0 - TICK_SIZE - 3.0),
            fmt_f64(tick),
        );
    }
    out.push_str("</g>\n");
    let _ = writeln!(
        out,
        "<text class=\"axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"end\">{}</text>",
        fmt_f64(area.x0 - 40.0),
        fmt_f64(area.center().y),
        encode_text(&config.y_label),
    );
}

/// Outline of every symbol at `area`, in [`Symbol::ALL`] order.
fn symbol_paths(area: f64) -> [String; 7] {
    Symbol::ALL.map(|symbol| bez_path_to_svg_d(&symbol.path(area)))
}

fn symbol_d(paths: &[String; 7], symbol: Symbol) -> &str {
    let idx = Symbol::ALL
        .iter()
        .position(|&s| s == symbol)
        .unwrap_or_default();
    &paths[idx]
}

fn write_points(out: &mut String, view: &ScatterView) {
    let paths = symbol_paths(view.config().point_area);
    out.push_str("<g class=\"points\">\n");
    for point in view.points() {
        let (fill, alpha) = color_to_svg(point.color);
        let _ = write!(
            out,
            "<path class=\"data-point\" d=\"{}\" fill=\"{fill}\"",
            symbol_d(&paths, point.symbol),
        );
        if alpha < 1.0 {
            let _ = write!(out, " fill-opacity=\"{}\"", fmt_f64(f64::from(alpha)));
        }
        if !point.visible {
            let _ = write!(
                out,
                " opacity=\"{}\" pointer-events=\"none\"",
                fmt_f64(point.opacity)
            );
        }
        let _ = write!(
            out,
            " transform=\"translate({} {})\">",
            fmt_f64(point.position.x),
            fmt_f64(point.position.y),
        );
        if let Some(tooltip) = view.tooltip(point.id) {
            let _ = write!(out, "<title>{}</title>", encode_text(&tooltip.to_string()));
        }
        out.push_str("</path>\n");
    }
    out.push_str("</g>\n");
}

/// Writes both legends stacked at `(x, y)`; returns the bottom edge.
fn write_legends(out: &mut String, view: &ScatterView, x: f64, mut y: f64) -> f64 {
    let paths = symbol_paths(view.config().legend_symbol_area);
    for facet in Facet::ALL {
        let entries = view.legend(facet);
        let class = match facet {
            Facet::Author => "author-legend",
            Facet::Category => "category-legend",
        };
        let _ = writeln!(
            out,
            "<g class=\"legend {class}\" transform=\"translate({} {})\">",
            fmt_f64(x),
            fmt_f64(y),
        );
        let _ = writeln!(
            out,
            "<text class=\"legend-title\" x=\"0\" y=\"0\" font-weight=\"bold\">{}</text>",
            encode_text(view.legend_title(facet)),
        );
        for (row, entry) in entries.iter().enumerate() {
            let row_y = (row + 1) as f64 * LEGEND_ROW_HEIGHT;
            write_legend_entry(out, &paths, entry, row_y);
        }
        out.push_str("</g>\n");
        let rows = entries.len() as f64;
        y += (rows + 1.0) * LEGEND_ROW_HEIGHT + LEGEND_GAP;
    }
    y
}

fn write_legend_entry(out: &mut String, paths: &[String; 7], entry: &LegendEntry, y: f64) {
    let (fill, _) = color_to_svg(entry.color);
    let _ = write!(
        out,
        "<g class=\"legend-item\" data-label=\"{}\" data-active=\"{}\" transform=\"translate(0 {})\">",
        encode_double_quoted_attribute(&entry.label),
        entry.active,
        fmt_f64(y),
    );
    out.push_str(
        "<rect class=\"checkbox\" x=\"0\" y=\"-5\" width=\"10\" height=\"10\" fill=\"none\" stroke=\"#000000\"/>",
    );
    if entry.active {
        out.push_str(
            "<path class=\"check\" d=\"M2 0L4 3L8 -3\" fill=\"none\" stroke=\"#000000\"/>",
        );
    }
    let _ = write!(
        out,
        "<path d=\"{}\" fill=\"{fill}\" transform=\"translate(24 0)\"/>",
        symbol_d(paths, entry.symbol),
    );
    let _ = writeln!(
        out,
        "<text x=\"38\" y=\"4\" font-size=\"12\">{}</text></g>",
        encode_text(&entry.label),
    );
}
