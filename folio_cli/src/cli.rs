// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use folio_data::CategoryField;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "PCA scatter plots of literary corpora, by author and genre or century")]
#[command(version)]
pub(crate) struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Render the scatter plot as an SVG document
    Render {
        #[command(flatten)]
        load: LoadArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the author and category legends
    Legend {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// Print one line per point: id, position, symbol, colour, visibility, title
    Points {
        #[command(flatten)]
        load: LoadArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Only list points the filters leave visible
        #[arg(long)]
        visible_only: bool,
    },
}

/// Where the data comes from and how it is grouped.
#[derive(Debug, Args)]
pub(crate) struct LoadArgs {
    /// CSV file with PC1, PC2, Author, Full Author, Simple Genre, Century and WWO Title columns
    pub(crate) csv: PathBuf,

    /// Field that drives point shapes: genre or century
    #[arg(long)]
    pub(crate) field: Option<CategoryField>,

    /// Authors with more works than this keep their own colour
    #[arg(long)]
    pub(crate) threshold: Option<usize>,

    /// JSON plot configuration; flags override its values
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

/// Legend entries to switch off before output.
#[derive(Debug, Default, Args)]
pub(crate) struct FilterArgs {
    /// Hide an author group (repeatable)
    #[arg(long = "hide-author", value_name = "AUTHOR")]
    pub(crate) hide_authors: Vec<String>,

    /// Hide a category value of the active field (repeatable)
    #[arg(long = "hide-category", value_name = "CATEGORY")]
    pub(crate) hide_categories: Vec<String>,
}
