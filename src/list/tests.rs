//! End-to-end tests for the collection view model: every derived view and
//! the invariants between them, exercised through the public surface only.

use super::Model;
use crate::filter::{Filter, FilterOp};
use crate::item::{FieldValue, Item};
use crate::sort::Order;

#[derive(Clone)]
struct Row {
    id: String,
    name: String,
    group: i64,
    disabled: bool,
}

impl Item for Row {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "group" => Some(self.group.into()),
            _ => None,
        }
    }
}

fn row(id: &str, name: &str) -> Row {
    Row {
        id: id.to_string(),
        name: name.to_string(),
        group: 0,
        disabled: false,
    }
}

fn disabled_row(id: &str, name: &str) -> Row {
    Row {
        disabled: true,
        ..row(id, name)
    }
}

fn grouped_row(id: &str, name: &str, group: i64) -> Row {
    Row {
        group,
        ..row(id, name)
    }
}

/// Alice, Bob, Carol: the three-row collection most tests start from.
fn abc() -> Vec<Row> {
    vec![row("1", "Alice"), row("2", "Bob"), row("3", "Carol")]
}

fn assert_counts_consistent(model: &Model<Row>) {
    assert!(model.num_visible_items() <= model.num_filtered_items());
    assert!(model.num_filtered_items() <= model.num_items());
    assert!(model.num_enabled_filtered_items() <= model.num_filtered_items());
    assert!(model.num_selected_items() <= model.num_items());
}

#[test]
fn like_filter_is_case_insensitive_substring() {
    // "a" matches Alice and Carol but not Bob.
    let mut model = Model::new().with_items(abc());
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    assert_eq!(model.filtered_item_ids(), ["1", "3"]);
    assert_eq!(model.num_filtered_items(), 2);
    assert_counts_consistent(&model);
}

#[test]
fn pagination_windows_the_filtered_view() {
    let mut model = Model::new().with_items(abc()).with_items_per_page(2);
    assert_eq!(model.num_pages(), 2);
    assert_eq!(model.visible_item_ids(), ["1", "2"]);

    model.set_page(2);
    assert_eq!(model.visible_item_ids(), ["3"]);
    assert_eq!(model.num_visible_items(), 1);
    assert_counts_consistent(&model);
}

#[test]
fn pivot_range_selects_the_inclusive_run() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_item_by_id("1");
    assert_eq!(model.pivot_item_id(), Some("1"));

    model.select_all_items_from_pivot_to_item_by_id("3");
    assert_eq!(model.selected_item_ids(), ["1", "2", "3"]);
    assert_eq!(model.pivot_item_id(), Some("1"));
    assert_counts_consistent(&model);
}

#[test]
fn descending_order_reverses_the_alphabet() {
    let mut model = Model::new().with_items(abc());
    model.order_by(vec![Order::desc("name")]);
    assert_eq!(model.ordered_item_ids(), ["2", "3", "1"]);
}

#[test]
fn unknown_ids_are_absorbed() {
    let mut model = Model::new().with_items(abc());
    model.select_item_by_id("1");

    model.select_item_by_id("99");
    model.toggle_selection_by_id("99");
    model.add_selection_by_id("99");
    model.select_all_items_from_pivot_to_item_by_id("99");
    assert_eq!(model.selected_item_ids(), ["1"]);
    assert_eq!(model.num_selected_items(), 1);

    model.remove_selection_by_id("99");
    assert_eq!(model.num_selected_items(), 1);
}

#[test]
fn filter_application_is_idempotent() {
    let mut model = Model::new().with_items(abc());
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    let once = model.filtered_item_ids().to_vec();
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    assert_eq!(model.filtered_item_ids(), once);
}

#[test]
fn tied_sort_keys_never_reshuffle() {
    let items = vec![
        grouped_row("1", "Alice", 2),
        grouped_row("2", "Bob", 1),
        grouped_row("3", "Carol", 2),
        grouped_row("4", "Dave", 1),
    ];
    let mut model = Model::new().with_items(items);
    model.order_by(vec![Order::asc("group")]);
    let first = model.ordered_item_ids().to_vec();
    assert_eq!(first, ["2", "4", "1", "3"]);

    for _ in 0..3 {
        model.order_by(vec![Order::asc("group")]);
        assert_eq!(model.ordered_item_ids(), first);
    }
}

#[test]
fn load_round_trips_and_collapses_duplicates() {
    let mut model = Model::new().with_items(abc());
    assert_eq!(model.num_items(), 3);

    model.load(vec![row("1", "first"), row("2", "other"), row("1", "second")]);
    assert_eq!(model.num_items(), 2);
    assert_eq!(model.item_ids(), ["1", "2"]);
    assert_eq!(model.get("1").unwrap().name, "second");
}

#[test]
fn page_always_clamps_into_range() {
    let mut model = Model::new().with_items(abc()).with_items_per_page(2);
    for requested in [0, 1, 2, 3, 100, usize::MAX] {
        model.set_page(requested);
        assert!((1..=model.num_pages()).contains(&model.page()));
    }
}

#[test]
fn single_mode_never_holds_more_than_one() {
    let mut model = Model::new().with_items(abc());
    assert!(!model.allow_multiple());
    model.add_selection_by_id("1");
    model.add_selection_by_id("2");
    model.add_selection_by_id("3");
    assert_eq!(model.num_selected_items(), 1);
    assert_eq!(model.selected_item_ids(), ["3"]);
    assert_eq!(model.active_item_id(), Some("3"));
}

#[test]
fn reload_resets_selection_and_page_but_keeps_filters_and_orders() {
    let mut model = Model::new()
        .with_items(abc())
        .with_items_per_page(2)
        .with_multiple_selection(true);
    model.set_filter("name", "".into(), FilterOp::Like, false);
    model.order_by(vec![Order::asc("name")]);
    model.select_item_by_id("2");
    model.set_page(2);

    model.load(vec![row("7", "Zoe"), row("8", "Yann"), row("9", "Xena")]);

    assert!(model.selected_item_ids().is_empty());
    assert_eq!(model.active_item_id(), None);
    assert_eq!(model.pivot_item_id(), None);
    assert_eq!(model.page(), 1);
    // Filters and orders survive and already apply to the new items.
    assert_eq!(model.filters().len(), 1);
    assert_eq!(model.orders(), [Order::asc("name")]);
    assert_eq!(model.ordered_item_ids(), ["9", "8", "7"]);
}

#[test]
fn select_all_skips_disabled_and_filtered_out() {
    let items = vec![
        row("1", "Alice"),
        disabled_row("2", "Ally"),
        row("3", "Bob"),
        row("4", "Aaron"),
    ];
    let mut model = Model::new().with_items(items).with_multiple_selection(true);
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    assert_eq!(model.num_filtered_items(), 3); // Alice, Ally, Aaron
    assert_eq!(model.num_enabled_filtered_items(), 2);

    model.select_all_items();
    assert_eq!(model.selected_item_ids(), ["1", "4"]);
    assert_counts_consistent(&model);
}

#[test]
fn select_all_in_single_mode_picks_first_enabled() {
    let items = vec![disabled_row("1", "Alice"), row("2", "Bob")];
    let mut model = Model::new().with_items(items);
    model.select_all_items();
    assert_eq!(model.selected_item_ids(), ["2"]);
}

#[test]
fn pivot_range_includes_disabled_members() {
    // The literal index range is selected; skipping disabled items is the
    // caller's traversal concern, not the range contract.
    let items = vec![row("1", "a"), disabled_row("2", "b"), row("3", "c")];
    let mut model = Model::new().with_items(items).with_multiple_selection(true);
    model.select_item_by_id("1");
    model.select_all_items_from_pivot_to_item_by_id("3");
    assert_eq!(model.selected_item_ids(), ["1", "2", "3"]);
}

#[test]
fn pivot_range_is_additive_and_direction_agnostic() {
    let mut model = Model::new()
        .with_items(vec![
            row("1", "a"),
            row("2", "b"),
            row("3", "c"),
            row("4", "d"),
            row("5", "e"),
        ])
        .with_multiple_selection(true);
    model.select_item_by_id("5");
    model.toggle_selection_by_id("1"); // extra selection outside the range
    model.select_item_by_id("3");

    // Pivot is "3"; select upward to "2".
    model.select_all_items_from_pivot_to_item_by_id("2");
    assert_eq!(model.selected_item_ids(), ["3", "2"]);

    model.add_selection_by_id("5");
    model.select_all_items_from_pivot_to_item_by_id("4");
    // "5" stays selected: the range only adds.
    let mut ids = model.selected_item_ids().to_vec();
    ids.sort();
    assert_eq!(ids, ["2", "3", "4", "5"]);
    assert_eq!(model.pivot_item_id(), Some("3"));
}

#[test]
fn pivot_range_follows_the_current_sort_order() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.order_by(vec![Order::desc("name")]);
    // View order is Carol, Bob, Alice.
    model.select_item_by_id("3");
    model.select_all_items_from_pivot_to_item_by_id("2");
    let mut ids = model.selected_item_ids().to_vec();
    ids.sort();
    assert_eq!(ids, ["2", "3"]);
}

#[test]
fn range_without_pivot_degrades_to_plain_select() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_all_items_from_pivot_to_item_by_id("2");
    assert_eq!(model.selected_item_ids(), ["2"]);
    assert_eq!(model.pivot_item_id(), Some("2"));
}

#[test]
fn range_with_pivot_filtered_out_degrades_to_plain_select() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_item_by_id("2"); // pivot = Bob
    model.set_filter("name", "a".into(), FilterOp::Like, false); // Bob filtered out
    model.select_all_items_from_pivot_to_item_by_id("3");
    assert_eq!(model.selected_item_ids(), ["3"]);
}

#[test]
fn indexes_resolve_against_the_ordered_view() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.order_by(vec![Order::desc("name")]);
    // Ordered view: Carol ("3"), Bob ("2"), Alice ("1").
    model.select_item_by_index(0);
    assert_eq!(model.selected_item_ids(), ["3"]);

    model.select_items_by_indexes(&[0, 2, 17]);
    assert_eq!(model.selected_item_ids(), ["3", "1"]);
    assert_eq!(model.active_item_id(), Some("1"));

    // Nothing resolvable: selection is untouched.
    model.select_items_by_indexes(&[42]);
    assert_eq!(model.selected_item_ids(), ["3", "1"]);
}

#[test]
fn indexes_ignore_filters() {
    let mut model = Model::new().with_items(abc());
    model.set_filter("name", "bob".into(), FilterOp::Like, false);
    assert_eq!(model.filtered_item_ids(), ["2"]);
    // Index 0 of the ordered (unfiltered) view is still Alice.
    model.select_item_by_index(0);
    assert_eq!(model.selected_item_ids(), ["1"]);
}

#[test]
fn toggle_couples_and_decouples_active() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.toggle_selection_by_id("1");
    assert_eq!(model.active_item_id(), Some("1"));
    model.toggle_selection_by_id("2");
    assert_eq!(model.active_item_id(), Some("2"));

    model.toggle_selection_by_id("2");
    assert_eq!(model.selected_item_ids(), ["1"]);
    assert_eq!(model.active_item_id(), None);
}

#[test]
fn active_is_always_a_member_of_the_selection() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_item_by_id("1");
    model.toggle_selection_by_id("2");
    model.remove_selection_by_id("2");
    match model.active_item_id() {
        Some(active) => assert!(model.is_selected(active)),
        None => {}
    }
    model.unselect_all_items();
    assert_eq!(model.active_item_id(), None);
}

#[test]
fn filtered_out_items_stay_selected() {
    // Selection validity is store membership, not filter membership.
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_item_by_id("2");
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    assert!(model.is_selected("2"));
    assert_eq!(model.num_selected_items(), 1);
}

#[test]
fn narrowing_the_filter_pulls_the_page_back() {
    let items = (1..=9)
        .map(|n| row(&n.to_string(), &format!("item {}", n)))
        .collect();
    let mut model = Model::new().with_items(items).with_items_per_page(2);
    model.set_page(5);
    assert_eq!(model.page(), 5);

    model.set_filter("name", "item 1".into(), FilterOp::Like, false);
    assert_eq!(model.num_filtered_items(), 1);
    assert_eq!(model.page(), 1);
    assert_eq!(model.visible_item_ids(), ["1"]);
}

#[test]
fn empty_filtered_view_is_an_empty_first_page() {
    let mut model = Model::new().with_items(abc()).with_items_per_page(2);
    model.set_filter("name", "zzz".into(), FilterOp::Like, false);
    assert_eq!(model.num_filtered_items(), 0);
    assert_eq!(model.num_pages(), 1);
    model.set_page(3);
    assert_eq!(model.page(), 1);
    assert!(model.visible_item_ids().is_empty());
    assert_counts_consistent(&model);
}

#[test]
fn ordered_view_ignores_filters_visible_view_applies_both() {
    let items = vec![
        row("1", "Alice"),
        row("2", "Bob"),
        row("3", "Carol"),
        row("4", "Aaron"),
    ];
    let mut model = Model::new().with_items(items).with_items_per_page(2);
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    model.order_by(vec![Order::asc("name")]);

    // Bob is filtered out of the visible view but still ordered.
    assert_eq!(model.ordered_item_ids(), ["4", "1", "2", "3"]);
    assert_eq!(model.visible_item_ids(), ["4", "1"]);
    model.set_page(2);
    assert_eq!(model.visible_item_ids(), ["3"]);
}

#[test]
fn clearing_orders_restores_insertion_order() {
    let mut model = Model::new().with_items(abc());
    model.order_by(vec![Order::desc("name")]);
    assert_eq!(model.ordered_item_ids(), ["2", "3", "1"]);
    model.order_by(vec![]);
    assert_eq!(model.ordered_item_ids(), ["1", "2", "3"]);
    assert_eq!(model.visible_item_ids(), ["1", "2", "3"]);
}

#[test]
fn traversal_skips_disabled_items() {
    let items = vec![
        row("1", "a"),
        disabled_row("2", "b"),
        disabled_row("3", "c"),
        row("4", "d"),
    ];
    let model = Model::new().with_items(items);
    assert_eq!(model.first_enabled_item_id(), Some("1"));
    assert_eq!(model.last_enabled_item_id(), Some("4"));
    assert_eq!(model.next_enabled_item_id("1"), Some("4"));
    assert_eq!(model.prev_enabled_item_id("4"), Some("1"));
    assert_eq!(model.next_enabled_item_id("4"), None);
    assert_eq!(model.prev_enabled_item_id("1"), None);
    assert_eq!(model.next_enabled_item_id("99"), None);
}

#[test]
fn fuzzy_filter_and_diacritic_folding_reach_the_views() {
    let items = vec![row("1", "Chloé Dubois"), row("2", "Bob Martin")];
    let mut model = Model::new().with_items(items);

    model.set_filter("name", "chloe".into(), FilterOp::Like, true);
    assert_eq!(model.filtered_item_ids(), ["1"]);

    model.filter_by(vec![Filter::new("name", "bmrt".into(), FilterOp::Fuzzy)]);
    assert_eq!(model.filtered_item_ids(), ["2"]);

    // Empty fuzzy value degenerates to "no constraint".
    model.filter_by(vec![Filter::new("name", "".into(), FilterOp::Fuzzy)]);
    assert_eq!(model.num_filtered_items(), 2);
}

#[test]
fn multiple_filters_combine_with_and() {
    let items = vec![
        grouped_row("1", "Alice", 1),
        grouped_row("2", "Aaron", 2),
        grouped_row("3", "Bob", 1),
    ];
    let mut model = Model::new().with_items(items);
    model.set_filter("name", "a".into(), FilterOp::Like, false);
    model.set_filter("group", 1.into(), FilterOp::Equal, false);
    assert_eq!(model.filtered_item_ids(), ["1"]);

    model.remove_filter("group");
    assert_eq!(model.filtered_item_ids(), ["1", "2"]);
    model.clear_filters();
    assert_eq!(model.num_filtered_items(), 3);
}

#[test]
fn counts_stay_consistent_across_a_mutation_storm() {
    let items: Vec<Row> = (0..25)
        .map(|n| {
            if n % 5 == 0 {
                disabled_row(&n.to_string(), &format!("row {}", n))
            } else {
                grouped_row(&n.to_string(), &format!("row {}", n), n % 3)
            }
        })
        .collect();
    let mut model = Model::new()
        .with_items(items)
        .with_items_per_page(4)
        .with_multiple_selection(true);

    model.set_filter("name", "1".into(), FilterOp::Like, false);
    assert_counts_consistent(&model);
    model.order_by(vec![Order::desc("group"), Order::asc("name")]);
    assert_counts_consistent(&model);
    model.select_all_items();
    assert_counts_consistent(&model);
    model.set_page(99);
    assert_counts_consistent(&model);
    model.load(vec![row("1", "only")]);
    assert_counts_consistent(&model);
    assert!(model.selected_item_ids().is_empty());
}

#[test]
fn clear_empties_every_view() {
    let mut model = Model::new().with_items(abc()).with_multiple_selection(true);
    model.select_all_items();
    model.clear();
    assert_eq!(model.num_items(), 0);
    assert_eq!(model.num_filtered_items(), 0);
    assert_eq!(model.num_selected_items(), 0);
    assert_eq!(model.num_pages(), 1);
    assert!(model.visible_item_ids().is_empty());
}
