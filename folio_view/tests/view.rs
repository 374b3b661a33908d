// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `ScatterView`: visibility, legends, tooltips and the
//! event surface.

use folio_data::{CategoryField, Dataset, OTHER_GROUP, RecordId, WorkRecord};
use folio_event_state::activation::Key;
use folio_event_state::hover::HoverEvent;
use folio_filter::Facet;
use folio_scale::{AUTHOR_PALETTE, CATEGORY_FILL, Symbol};
use folio_view::{LegendKey, PlotConfig, ScatterView, ViewEvent};
use kurbo::Point;

fn work(author: &str, genre: &str, century: &str, pc1: f64, pc2: f64) -> WorkRecord {
    WorkRecord {
        pc1,
        pc2,
        author: author.into(),
        full_author: format!("{author} (full)"),
        genre: genre.into(),
        century: century.into(),
        title: format!("{genre} by {author}"),
    }
}

/// Ten works: `behn` is frequent, `finch` and `haywood` are rare.
fn corpus() -> Dataset {
    let genres = [
        "Poetry", "Drama", "Poetry", "Fiction", "Drama", "Poetry", "Fiction", "Poetry", "Drama",
        "Poetry",
    ];
    let authors = [
        "behn", "behn", "finch", "behn", "behn", "haywood", "behn", "behn", "finch", "behn",
    ];
    let records = genres
        .iter()
        .zip(authors)
        .enumerate()
        .map(|(i, (&genre, author))| {
            let century = if i % 3 == 0 { "18th" } else { "17th" };
            let offset = i as f64 * 0.001;
            work(author, genre, century, offset, -offset)
        })
        .collect();
    Dataset::from_records(records)
}

fn view() -> ScatterView {
    ScatterView::new(corpus(), PlotConfig::default())
}

fn assert_predicate_holds(view: &ScatterView) {
    let filter = view.filter();
    for (id, record) in view.dataset().iter() {
        let group = view.groups().get(id).unwrap().to_owned();
        let category = view.category_field().value_of(record).to_owned();
        let expected = filter.authors().contains(&group) && filter.categories().contains(&category);
        assert_eq!(view.is_visible(id), expected, "record {id:?}");
        let point = view.point(id).unwrap();
        assert_eq!(point.visible, expected);
    }
}

fn active_sets(view: &ScatterView) -> (Vec<String>, Vec<String>) {
    (
        view.filter().authors().iter_active().cloned().collect(),
        view.filter().categories().iter_active().cloned().collect(),
    )
}

#[test]
fn domains_follow_first_occurrence() {
    let view = view();
    assert_eq!(
        view.shape_scale().domain().values(),
        &["Poetry", "Drama", "Fiction"]
    );
    assert_eq!(view.color_scale().domain().values(), &["behn", OTHER_GROUP]);
}

#[test]
fn predicate_holds_after_every_transition() {
    let mut view = view();
    assert_predicate_holds(&view);
    assert_eq!(view.visible_count(), 10);

    assert!(view.toggle(Facet::Category, "Drama"));
    assert_predicate_holds(&view);
    assert!(view.toggle(Facet::Author, OTHER_GROUP));
    assert_predicate_holds(&view);
    assert!(!view.toggle(Facet::Author, "nobody"));
    assert_predicate_holds(&view);
    view.switch_category_field(CategoryField::Century);
    assert_predicate_holds(&view);
    assert!(view.toggle(Facet::Category, "18th"));
    assert_predicate_holds(&view);
    view.reset();
    assert_predicate_holds(&view);
}

#[test]
fn double_toggle_is_identity() {
    let mut view = view();
    view.toggle(Facet::Author, OTHER_GROUP);
    let before = active_sets(&view);
    let visible_before = view.visible_count();

    view.toggle(Facet::Category, "Fiction");
    view.toggle(Facet::Category, "Fiction");
    assert_eq!(active_sets(&view), before);
    assert_eq!(view.visible_count(), visible_before);
}

#[test]
fn reset_is_idempotent_and_restores_everything() {
    let mut view = view();
    view.toggle(Facet::Author, "behn");
    view.toggle(Facet::Category, "Poetry");
    assert!(view.reset());
    let once = active_sets(&view);
    assert!(!view.reset());
    assert_eq!(active_sets(&view), once);
    assert_eq!(once.0, ["behn", OTHER_GROUP]);
    assert_eq!(once.1, ["Poetry", "Drama", "Fiction"]);
    assert_eq!(view.visible_count(), 10);
    assert!(view.legend(Facet::Author).iter().all(|e| e.active));
    assert!(view.legend(Facet::Category).iter().all(|e| e.active));
}

#[test]
fn field_switch_resets_both_filters() {
    let mut switched = view();
    switched.toggle(Facet::Author, "behn");
    switched.toggle(Facet::Category, "Drama");
    switched.switch_category_field(CategoryField::Century);
    let after_switch = active_sets(&switched);
    switched.reset();
    assert_eq!(active_sets(&switched), after_switch);
    assert_eq!(after_switch.1, ["18th", "17th"]);
    assert_eq!(switched.visible_count(), 10);

    // Selecting the active field again still clears filters.
    switched.toggle(Facet::Category, "17th");
    switched.switch_category_field(CategoryField::Century);
    assert_eq!(switched.visible_count(), 10);
}

#[test]
fn hiding_the_only_author_hides_everything() {
    let records = (0..4)
        .map(|i| {
            let genre = if i % 2 == 0 { "Poetry" } else { "Drama" };
            work("behn", genre, "17th", 0.0, 0.0)
        })
        .collect();
    let config = PlotConfig {
        author_threshold: 3,
        ..PlotConfig::default()
    };
    let mut view = ScatterView::new(Dataset::from_records(records), config);
    assert_eq!(view.color_scale().domain().values(), &["behn"]);

    view.toggle(Facet::Category, "Drama");
    view.toggle(Facet::Author, "behn");
    assert_eq!(view.visible_count(), 0);

    view.toggle(Facet::Author, "behn");
    assert_eq!(view.visible_count(), 2);
    for (id, record) in view.dataset().iter() {
        assert_eq!(view.is_visible(id), record.genre == "Poetry");
    }
}

#[test]
fn points_carry_scale_outputs() {
    let mut view = view();
    let config = view.config().clone();
    let area = config.plot_area();

    let first = view.point(RecordId(0)).unwrap();
    assert_eq!(first.symbol, Symbol::Circle);
    assert_eq!(first.color, AUTHOR_PALETTE[0]);
    assert_eq!(first.opacity, 1.0);
    // PC1 = 0 sits 40% across the x domain; PC2 = 0 sits 37.5% up the y domain.
    let expected_x = area.x0 + 0.4 * area.width();
    let expected_y = area.y1 - 0.375 * area.height();
    assert!((first.position.x - expected_x).abs() < 1e-9);
    assert!((first.position.y - expected_y).abs() < 1e-9);

    let rare = view.point(RecordId(2)).unwrap();
    assert_eq!(rare.color, AUTHOR_PALETTE[1]);

    view.toggle(Facet::Category, "Poetry");
    let hidden = view.point(RecordId(0)).unwrap();
    assert!(!hidden.visible);
    assert_eq!(hidden.opacity, config.hidden_opacity);
    assert_eq!(view.points().count(), 10);
}

#[test]
fn legends_reflect_membership() {
    let mut view = view();
    view.toggle(Facet::Category, "Drama");

    let authors = view.legend(Facet::Author);
    assert_eq!(authors.len(), 2);
    assert!(authors.iter().all(|e| e.symbol == Symbol::Circle));
    assert_eq!(authors[1].color, AUTHOR_PALETTE[1]);

    let categories = view.legend(Facet::Category);
    let labels: Vec<_> = categories.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Poetry", "Drama", "Fiction"]);
    assert_eq!(
        categories.iter().map(|e| e.active).collect::<Vec<_>>(),
        [true, false, true]
    );
    assert_eq!(categories[2].symbol, Symbol::Diamond);
    assert!(categories.iter().all(|e| e.color == CATEGORY_FILL));
    assert_eq!(view.legend_title(Facet::Author), "Author");
    assert_eq!(view.legend_title(Facet::Category), "Genre");
}

#[test]
fn tooltip_reads_current_field() {
    let mut view = view();
    let tooltip = view.tooltip(RecordId(1)).unwrap();
    assert_eq!(
        tooltip.to_string(),
        "Author: behn (full)\nPC1: 0.001\nPC2: -0.001\nSimple Genre: Drama\nWWO Title: Drama by behn"
    );

    view.switch_category_field(CategoryField::Century);
    let tooltip = view.tooltip(RecordId(1)).unwrap();
    assert_eq!(tooltip.lines[3].label, "Century");
    assert_eq!(tooltip.lines[3].value, "17th");
    assert!(view.tooltip(RecordId(99)).is_none());
}

#[test]
fn pointer_and_keyboard_activation_are_equivalent() {
    let key = LegendKey::new(Facet::Category, 1);

    let mut pointer = view();
    pointer.handle(ViewEvent::LegendPointerDown {
        key,
        pos: Point::new(10.0, 10.0),
    });
    let response = pointer.handle(ViewEvent::LegendPointerUp {
        key: Some(key),
        pos: Point::new(11.0, 10.0),
    });
    assert!(response.filter_changed);

    let mut keyboard = view();
    keyboard.handle(ViewEvent::FocusNext(Facet::Category));
    let response = keyboard.handle(ViewEvent::FocusNext(Facet::Category));
    assert_eq!(response.focus, Some(key));
    let response = keyboard.handle(ViewEvent::LegendKeyPress {
        facet: Facet::Category,
        key: Key::Space,
    });
    assert!(response.filter_changed);

    assert_eq!(active_sets(&pointer), active_sets(&keyboard));
    assert!(!pointer.filter().categories().contains(&"Drama".to_owned()));

    let ignored = keyboard.handle(ViewEvent::LegendKeyPress {
        facet: Facet::Category,
        key: Key::Other,
    });
    assert!(!ignored.filter_changed);
}

#[test]
fn release_elsewhere_does_not_toggle() {
    let mut view = view();
    let key = LegendKey::new(Facet::Author, 0);
    view.handle(ViewEvent::LegendPointerDown {
        key,
        pos: Point::new(0.0, 0.0),
    });
    let response = view.handle(ViewEvent::LegendPointerUp {
        key: None,
        pos: Point::new(50.0, 0.0),
    });
    assert!(!response.filter_changed);
    assert_eq!(view.visible_count(), 10);
}

#[test]
fn hover_tracks_visible_points_only() {
    let mut view = view();
    let response = view.handle(ViewEvent::PointHover(Some(RecordId(1))));
    assert_eq!(response.hover, Some(HoverEvent::Enter(RecordId(1))));
    assert_eq!(view.current_tooltip().unwrap().id, RecordId(1));

    // Hiding the hovered point ends the hover.
    let response = view.handle(ViewEvent::LegendKeyPress {
        facet: Facet::Category,
        key: Key::Enter,
    });
    assert!(!response.filter_changed);
    let drama = LegendKey::new(Facet::Category, 1);
    view.handle(ViewEvent::LegendPointerDown {
        key: drama,
        pos: Point::ZERO,
    });
    let response = view.handle(ViewEvent::LegendPointerUp {
        key: Some(drama),
        pos: Point::ZERO,
    });
    assert!(response.filter_changed);
    assert_eq!(response.hover, Some(HoverEvent::Leave(RecordId(1))));
    assert_eq!(view.hovered(), None);

    // Hidden points cannot be hovered.
    let response = view.handle(ViewEvent::PointHover(Some(RecordId(1))));
    assert_eq!(response.hover, None);
    assert!(view.current_tooltip().is_none());
}

#[test]
fn select_field_event_rebuilds_legends() {
    let mut view = view();
    view.toggle(Facet::Author, "behn");
    let response = view.handle(ViewEvent::SelectField(CategoryField::Century));
    assert!(response.legends_rebuilt);
    assert!(response.filter_changed);
    assert_eq!(view.category_field(), CategoryField::Century);
    assert_eq!(view.legend(Facet::Category).len(), 2);
    assert_eq!(view.focused(Facet::Category), None);
    assert_eq!(view.visible_count(), 10);

    let response = view.handle(ViewEvent::Reset);
    assert!(!response.filter_changed);
}

#[test]
fn set_active_is_idempotent() {
    let mut view = view();
    assert!(view.set_active(Facet::Category, "Drama", false));
    assert!(!view.set_active(Facet::Category, "Drama", false));
    assert_predicate_holds(&view);
    assert_eq!(view.visible_count(), 7);
    assert!(!view.set_active(Facet::Author, "nobody", false));
    assert!(view.set_active(Facet::Category, "Drama", true));
    assert_eq!(view.visible_count(), 10);
}

#[test]
fn field_switch_drops_category_focus() {
    let mut view = view();
    view.handle(ViewEvent::FocusPrev(Facet::Category));
    assert_eq!(
        view.focused(Facet::Category),
        Some(LegendKey::new(Facet::Category, 2))
    );
    view.handle(ViewEvent::FocusNext(Facet::Author));

    view.switch_category_field(CategoryField::Century);
    assert_eq!(view.focused(Facet::Category), None);
    assert_eq!(
        view.focused(Facet::Author),
        Some(LegendKey::new(Facet::Author, 0))
    );
    // Focus now cycles over the two centuries.
    view.handle(ViewEvent::FocusPrev(Facet::Category));
    assert_eq!(
        view.focused(Facet::Category),
        Some(LegendKey::new(Facet::Category, 1))
    );
}
