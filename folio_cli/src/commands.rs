// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use folio_data::Dataset;
use folio_filter::Facet;
use folio_view::{PlotConfig, ScatterView};
use peniko::Color;
use tracing::{info, warn};

use crate::cli::{Command, FilterArgs, LoadArgs};

pub(crate) fn run(command: Command) -> Result<()> {
    match command {
        Command::Render {
            load,
            filters,
            output,
        } => {
            let mut view = build_view(&load)?;
            apply_filters(&mut view, &filters);
            let svg = folio_svg::render_svg(&view);
            match output {
                Some(path) => {
                    fs::write(&path, svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "wrote svg");
                }
                None => write_stdout(&svg)?,
            }
        }
        Command::Legend { load } => {
            let view = build_view(&load)?;
            write_stdout(&format_legends(&view))?;
        }
        Command::Points {
            load,
            filters,
            visible_only,
        } => {
            let mut view = build_view(&load)?;
            apply_filters(&mut view, &filters);
            write_stdout(&format_points(&view, visible_only))?;
        }
    }
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}

/// Loads the config and dataset named by `load` and builds the view.
///
/// Nothing is built when either fails to load.
pub(crate) fn build_view(load: &LoadArgs) -> Result<ScatterView> {
    let mut config = match &load.config {
        Some(path) => PlotConfig::from_json_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlotConfig::default(),
    };
    if let Some(field) = load.field {
        config.category_field = field;
    }
    if let Some(threshold) = load.threshold {
        config.author_threshold = threshold;
    }

    let dataset = Dataset::from_csv_path(&load.csv)
        .with_context(|| format!("failed to load dataset {}", load.csv.display()))?;
    Ok(ScatterView::new(dataset, config))
}

/// Switches off every legend entry named in `filters`.
///
/// Names outside the legend are logged and skipped.
pub(crate) fn apply_filters(view: &mut ScatterView, filters: &FilterArgs) {
    let requests = filters
        .hide_authors
        .iter()
        .map(|value| (Facet::Author, value))
        .chain(
            filters
                .hide_categories
                .iter()
                .map(|value| (Facet::Category, value)),
        );
    for (facet, value) in requests {
        if view.filter().facet(facet).position_of(value).is_none() {
            warn!(?facet, %value, "no such legend entry; ignoring");
            continue;
        }
        view.set_active(facet, value, false);
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// One block per legend: heading, then `[x] label  symbol colour` rows.
pub(crate) fn format_legends(view: &ScatterView) -> String {
    let mut out = String::new();
    for (n, facet) in Facet::ALL.into_iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", view.legend_title(facet));
        for entry in view.legend(facet) {
            let mark = if entry.active { 'x' } else { ' ' };
            let _ = writeln!(
                out,
                "  [{mark}] {}\t{}\t{}",
                entry.label,
                entry.symbol.name(),
                hex(entry.color),
            );
        }
    }
    out
}

/// Tab-separated point listing in record order.
pub(crate) fn format_points(view: &ScatterView, visible_only: bool) -> String {
    let mut out = String::new();
    for point in view.points() {
        if visible_only && !point.visible {
            continue;
        }
        let title = view
            .dataset()
            .get(point.id)
            .map_or("", |record| record.title.as_str());
        let _ = writeln!(
            out,
            "{}\t{:.2}\t{:.2}\t{}\t{}\t{}\t{}",
            point.id.index(),
            point.position.x,
            point.position.y,
            point.symbol.name(),
            hex(point.color),
            if point.visible { "visible" } else { "hidden" },
            title,
        );
    }
    out
}
