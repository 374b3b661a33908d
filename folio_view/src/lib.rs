// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio View: a headless, interactive scatter plot of literary works.
//!
//! [`ScatterView`] ties together a [`Dataset`](folio_data::Dataset), its
//! author groups, the colour and shape scales, and a
//! [`FilterState`](folio_filter::FilterState). It answers the questions a
//! renderer asks:
//!
//! - where each point sits, which symbol and colour it uses, and whether it is
//!   visible ([`ScatterView::points`]);
//! - what the author and category legends contain ([`ScatterView::legend`]);
//! - what the tooltip of a point says ([`ScatterView::tooltip`]).
//!
//! Interaction is fed in as [`ViewEvent`]s. Every transition recomputes
//! visibility for the whole dataset, so after any event a point is visible
//! exactly when both its author group and its category are active.
//!
//! Layout and behaviour knobs live in [`PlotConfig`], which can be loaded from
//! JSON.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_data::{CategoryField, Dataset, RecordId};
//! use folio_filter::Facet;
//! use folio_view::{PlotConfig, ScatterView, ViewEvent};
//!
//! let csv = "\
//! PC1,PC2,Author,Full Author,Simple Genre,Century,WWO Title
//! 0.01,0.02,behn,Aphra Behn,Drama,17th,The Rover
//! -0.02,0.01,finch,Anne Finch,Poetry,18th,Miscellany Poems
//! ";
//! let dataset = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
//! let config = PlotConfig { author_threshold: 0, ..PlotConfig::default() };
//! let mut view = ScatterView::new(dataset, config);
//! assert_eq!(view.visible_count(), 2);
//!
//! view.toggle(Facet::Category, "Drama");
//! assert!(!view.is_visible(RecordId(0)));
//! assert!(view.is_visible(RecordId(1)));
//!
//! let response = view.handle(ViewEvent::SelectField(CategoryField::Century));
//! assert!(response.legends_rebuilt);
//! assert_eq!(view.visible_count(), 2);
//! assert_eq!(view.legend_title(Facet::Category), "Century");
//! ```

mod config;
mod event;
mod legend;
mod point;
mod view;

pub use config::{ConfigError, Margins, PlotConfig};
pub use event::{ViewEvent, ViewResponse};
pub use legend::{LegendEntry, LegendKey};
pub use point::{PointView, Tooltip, TooltipLine};
pub use view::ScatterView;
