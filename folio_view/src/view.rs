// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_data::{AuthorGroups, CategoryField, Dataset, RecordId};
use folio_event_state::activation::ActivationState;
use folio_event_state::focus::RovingFocus;
use folio_event_state::hover::{HoverEvent, HoverState};
use folio_filter::{Facet, FilterState};
use folio_scale::{
    CATEGORY_FILL, Domain, LinearScale, OrdinalScale, Symbol, color_scale, shape_scale,
};
use kurbo::Point;
use peniko::Color;
use tracing::{debug, info};

use crate::{
    LegendEntry, LegendKey, PlotConfig, PointView, Tooltip, TooltipLine, ViewEvent, ViewResponse,
};

/// The interactive state of one scatter plot.
///
/// A `ScatterView` owns the dataset, the derived author groups and scales,
/// the [`FilterState`] and the per-record visibility. All mutation goes
/// through its transition methods (or [`ScatterView::handle`]), each of which
/// recomputes visibility for every record before returning.
#[derive(Debug)]
pub struct ScatterView {
    config: PlotConfig,
    dataset: Dataset,
    groups: AuthorGroups,
    field: CategoryField,
    colors: OrdinalScale<String, Color>,
    shapes: OrdinalScale<String, Symbol>,
    x: LinearScale,
    y: LinearScale,
    filter: FilterState<String>,
    author_of: Vec<usize>,
    category_of: Vec<usize>,
    visible: Vec<bool>,
    activation: ActivationState<LegendKey>,
    hover: HoverState<RecordId>,
    author_focus: RovingFocus,
    category_focus: RovingFocus,
}

impl ScatterView {
    /// Builds the view: groups authors, derives both domains and scales, and
    /// starts with every point visible.
    #[must_use]
    pub fn new(dataset: Dataset, config: PlotConfig) -> Self {
        let groups = AuthorGroups::derive(&dataset, config.grouping());
        let author_domain: Domain<String> = groups.iter().map(str::to_owned).collect();
        let author_of = index_records(&author_domain, groups.iter());

        let field = config.category_field;
        let (category_domain, category_of) = derive_categories(&dataset, field);

        let area = config.plot_area();
        let x = LinearScale::new(
            (config.x_domain[0], config.x_domain[1]),
            (area.x0, area.x1),
        );
        let y = LinearScale::new(
            (config.y_domain[0], config.y_domain[1]),
            (area.y1, area.y0),
        );

        let filter = FilterState::new(
            author_domain.values().iter().cloned(),
            category_domain.values().iter().cloned(),
        );
        let author_focus = RovingFocus::new(author_domain.len());
        let category_focus = RovingFocus::new(category_domain.len());

        let mut view = Self {
            activation: ActivationState::new(config.click_tolerance),
            config,
            groups,
            field,
            colors: color_scale(author_domain),
            shapes: shape_scale(category_domain),
            x,
            y,
            filter,
            author_of,
            category_of,
            visible: vec![true; dataset.len()],
            dataset,
            hover: HoverState::new(),
            author_focus,
            category_focus,
        };
        view.recompute_visibility();

        info!(
            records = view.dataset.len(),
            author_groups = view.colors.domain().len(),
            categories = view.shapes.domain().len(),
            field = %view.field,
            "scatter view ready"
        );
        if view.colors.wraps() {
            debug!("more author groups than colours; colours repeat");
        }
        if view.shapes.wraps() {
            debug!("more categories than symbols; symbols repeat");
        }
        view
    }

    /// Returns the layout configuration.
    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Returns the underlying dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the author group of every record.
    #[must_use]
    pub fn groups(&self) -> &AuthorGroups {
        &self.groups
    }

    /// Returns the field currently driving shapes.
    #[must_use]
    pub fn category_field(&self) -> CategoryField {
        self.field
    }

    /// Returns the filter state.
    #[must_use]
    pub fn filter(&self) -> &FilterState<String> {
        &self.filter
    }

    /// Returns the author-group colour scale.
    #[must_use]
    pub fn color_scale(&self) -> &OrdinalScale<String, Color> {
        &self.colors
    }

    /// Returns the category shape scale.
    #[must_use]
    pub fn shape_scale(&self) -> &OrdinalScale<String, Symbol> {
        &self.shapes
    }

    /// Returns the x (PC1) scale, in canvas coordinates.
    #[must_use]
    pub fn x_scale(&self) -> &LinearScale {
        &self.x
    }

    /// Returns the y (PC2) scale, in canvas coordinates.
    #[must_use]
    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    /// Flips `value` in the legend for `facet`.
    ///
    /// Values outside the legend's domain are ignored. Returns `true` if the
    /// filter changed.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let idx = match facet {
            Facet::Author => self.colors.domain().index_of(value),
            Facet::Category => self.shapes.domain().index_of(value),
        };
        let Some(idx) = idx else {
            debug!(?facet, value, "ignoring toggle of unknown legend value");
            return false;
        };
        self.toggle_at(facet, idx)
    }

    /// Flips the legend entry at `idx`. Returns `true` if the filter changed.
    pub fn toggle_at(&mut self, facet: Facet, idx: usize) -> bool {
        if !self.filter.toggle_at(facet, idx) {
            return false;
        }
        self.recompute_visibility();
        debug!(
            ?facet,
            idx,
            visible = self.visible_count(),
            "legend entry toggled"
        );
        true
    }

    /// Switches the legend entry for `value` on or off.
    ///
    /// Unlike [`ScatterView::toggle`], repeating the call is harmless. Unknown
    /// values are ignored. Returns `true` if the filter changed.
    pub fn set_active(&mut self, facet: Facet, value: &str, active: bool) -> bool {
        let known = match facet {
            Facet::Author => self.colors.domain().contains(value),
            Facet::Category => self.shapes.domain().contains(value),
        };
        if !known {
            debug!(?facet, value, "ignoring unknown legend value");
            return false;
        }
        if !self.filter.set_active(facet, &value.to_owned(), active) {
            return false;
        }
        self.recompute_visibility();
        debug!(
            ?facet,
            value,
            active,
            visible = self.visible_count(),
            "legend entry set"
        );
        true
    }

    /// Turns every legend entry back on.
    ///
    /// Returns `true` if anything was filtered before.
    pub fn reset(&mut self) -> bool {
        let before = self.filter.revision();
        self.filter.reset();
        let changed = self.filter.revision() != before;
        self.recompute_visibility();
        debug!(changed, "filters reset");
        changed
    }

    /// Re-derives categories from `field`, rebuilds the shape legend and
    /// resets both filters.
    ///
    /// The reset happens even when `field` is already active, and partial
    /// author filters are discarded too.
    pub fn switch_category_field(&mut self, field: CategoryField) {
        let (domain, category_of) = derive_categories(&self.dataset, field);
        self.filter
            .switch_categories(domain.values().iter().cloned());
        self.category_focus.blur();
        self.category_focus.set_len(domain.len());
        self.shapes = shape_scale(domain);
        self.category_of = category_of;
        self.field = field;
        self.recompute_visibility();
        debug!(
            %field,
            categories = self.shapes.domain().len(),
            "category field switched"
        );
    }

    /// Returns whether record `id` is currently visible.
    ///
    /// Unknown ids are reported hidden.
    #[must_use]
    pub fn is_visible(&self, id: RecordId) -> bool {
        self.visible.get(id.index()).copied().unwrap_or(false)
    }

    /// Returns the number of visible records.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// Returns the render state of record `id`.
    #[must_use]
    pub fn point(&self, id: RecordId) -> Option<PointView> {
        let record = self.dataset.get(id)?;
        let visible = self.is_visible(id);
        let symbol = self
            .shapes
            .get_index(self.category_of[id.index()])
            .copied()
            .unwrap_or(Symbol::Circle);
        let color = self
            .colors
            .get_index(self.author_of[id.index()])
            .copied()
            .unwrap_or(CATEGORY_FILL);
        Some(PointView {
            id,
            position: Point::new(self.x.map(record.pc1), self.y.map(record.pc2)),
            symbol,
            color,
            visible,
            opacity: if visible {
                1.0
            } else {
                self.config.hidden_opacity
            },
        })
    }

    /// Returns the render state of every record, in record order.
    pub fn points(&self) -> impl Iterator<Item = PointView> + '_ {
        self.dataset.ids().filter_map(|id| self.point(id))
    }

    /// Returns the heading shown above a legend.
    #[must_use]
    pub fn legend_title(&self, facet: Facet) -> &'static str {
        match facet {
            Facet::Author => "Author",
            Facet::Category => self.field.label(),
        }
    }

    /// Returns the entries of one legend, in domain order.
    ///
    /// Author entries show a circle in the author colour; category entries
    /// show the category symbol in a neutral fill.
    #[must_use]
    pub fn legend(&self, facet: Facet) -> Vec<LegendEntry> {
        self.filter
            .facet(facet)
            .entries()
            .enumerate()
            .map(|(index, (label, active))| {
                let (symbol, color) = match facet {
                    Facet::Author => (
                        Symbol::Circle,
                        self.colors
                            .get_index(index)
                            .copied()
                            .unwrap_or(CATEGORY_FILL),
                    ),
                    Facet::Category => (
                        self.shapes
                            .get_index(index)
                            .copied()
                            .unwrap_or(Symbol::Circle),
                        CATEGORY_FILL,
                    ),
                };
                LegendEntry {
                    key: LegendKey::new(facet, index),
                    label: label.clone(),
                    symbol,
                    color,
                    active,
                }
            })
            .collect()
    }

    /// Returns the tooltip for record `id`.
    #[must_use]
    pub fn tooltip(&self, id: RecordId) -> Option<Tooltip> {
        let record = self.dataset.get(id)?;
        let lines = vec![
            TooltipLine {
                label: "Author",
                value: record.full_author.clone(),
            },
            TooltipLine {
                label: "PC1",
                value: record.pc1.to_string(),
            },
            TooltipLine {
                label: "PC2",
                value: record.pc2.to_string(),
            },
            TooltipLine {
                label: self.field.column(),
                value: self.field.value_of(record).to_owned(),
            },
            TooltipLine {
                label: "WWO Title",
                value: record.title.clone(),
            },
        ];
        Some(Tooltip { id, lines })
    }

    /// Returns the hovered record, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<RecordId> {
        self.hover.current().copied()
    }

    /// Returns the tooltip of the hovered record, if any.
    #[must_use]
    pub fn current_tooltip(&self) -> Option<Tooltip> {
        self.hovered().and_then(|id| self.tooltip(id))
    }

    /// Returns the legend entry holding keyboard focus in `facet`.
    #[must_use]
    pub fn focused(&self, facet: Facet) -> Option<LegendKey> {
        self.focus(facet)
            .focused()
            .map(|index| LegendKey::new(facet, index))
    }

    /// Applies one input event.
    ///
    /// Pointer and keyboard activation of a legend entry have the same
    /// effect: the entry is toggled and visibility recomputed.
    pub fn handle(&mut self, event: ViewEvent) -> ViewResponse {
        let mut response = ViewResponse::default();
        match event {
            ViewEvent::LegendPointerDown { key, pos } => {
                if let Some(index) = self.focus_mut(key.facet).focus(key.index) {
                    response.focus = Some(LegendKey::new(key.facet, index));
                }
                self.activation.on_pointer_down(key, pos);
            }
            ViewEvent::LegendPointerUp { key, pos } => {
                if let Some(target) = self.activation.on_pointer_up(key.as_ref(), pos) {
                    response.filter_changed = self.toggle_at(target.facet, target.index);
                }
            }
            ViewEvent::LegendKeyPress { facet, key } => {
                let focused = self.focused(facet);
                if let Some(target) = self.activation.on_key(key, focused) {
                    response.filter_changed = self.toggle_at(target.facet, target.index);
                }
            }
            ViewEvent::FocusNext(facet) => {
                response.focus = self
                    .focus_mut(facet)
                    .next()
                    .map(|index| LegendKey::new(facet, index));
            }
            ViewEvent::FocusPrev(facet) => {
                response.focus = self
                    .focus_mut(facet)
                    .prev()
                    .map(|index| LegendKey::new(facet, index));
            }
            ViewEvent::PointHover(target) => {
                // Hidden points do not take pointer input.
                let target = target.filter(|&id| self.is_visible(id));
                response.hover = self.hover.update(target);
            }
            ViewEvent::Reset => {
                response.filter_changed = self.reset();
            }
            ViewEvent::SelectField(field) => {
                self.activation.cancel();
                self.switch_category_field(field);
                response.filter_changed = true;
                response.legends_rebuilt = true;
            }
        }
        if response.filter_changed {
            response.hover = response.hover.or_else(|| self.drop_hidden_hover());
        }
        response
    }

    fn focus(&self, facet: Facet) -> &RovingFocus {
        match facet {
            Facet::Author => &self.author_focus,
            Facet::Category => &self.category_focus,
        }
    }

    fn focus_mut(&mut self, facet: Facet) -> &mut RovingFocus {
        match facet {
            Facet::Author => &mut self.author_focus,
            Facet::Category => &mut self.category_focus,
        }
    }

    fn recompute_visibility(&mut self) {
        for (slot, (&author, &category)) in self
            .visible
            .iter_mut()
            .zip(self.author_of.iter().zip(&self.category_of))
        {
            *slot = self.filter.is_visible_at(author, category);
        }
    }

    /// Ends the hover if the hovered point was just hidden.
    fn drop_hidden_hover(&mut self) -> Option<HoverEvent<RecordId>> {
        let hovered = self.hovered()?;
        if self.is_visible(hovered) {
            return None;
        }
        self.hover.update(None)
    }
}

fn derive_categories(dataset: &Dataset, field: CategoryField) -> (Domain<String>, Vec<usize>) {
    let values = dataset.records().iter().map(|r| field.value_of(r));
    let domain: Domain<String> = values.clone().map(str::to_owned).collect();
    let indices = index_records(&domain, values);
    (domain, indices)
}

fn index_records<'a>(domain: &Domain<String>, values: impl Iterator<Item = &'a str>) -> Vec<usize> {
    // Every value was inserted into the domain beforehand.
    values
        .map(|value| domain.index_of(value).unwrap_or(usize::MAX))
        .collect()
}
