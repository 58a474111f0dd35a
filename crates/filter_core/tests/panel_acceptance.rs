use filter_core::{apply_edit, PanelVisibility, SelectionEdit, SelectionSink, VisibilityController};
use shared::domain::{Filter, SelectedFilters};

#[derive(Default)]
struct RecordingSink {
    published: Vec<Vec<Filter>>,
}

impl SelectionSink for RecordingSink {
    fn update_selected_filters(&mut self, selected: &SelectedFilters) {
        self.published.push(selected.iter().cloned().collect());
    }
}

#[test]
fn selection_removal_then_reset_republishes_full_sets_acceptance() {
    let filter_a = Filter::new("color", "Red");
    let filter_b = Filter::new("size", "M");

    let mut selected = SelectedFilters::new();
    let mut sink = RecordingSink::default();

    apply_edit(&mut selected, SelectionEdit::Add(filter_a.clone()), &mut sink);
    apply_edit(&mut selected, SelectionEdit::Add(filter_b.clone()), &mut sink);
    assert_eq!(selected.len(), 2);

    // Removing A publishes exactly {B}, then reset publishes the empty set.
    apply_edit(&mut selected, SelectionEdit::Remove(filter_a), &mut sink);
    assert_eq!(sink.published.last().expect("publish"), &vec![filter_b]);

    apply_edit(&mut selected, SelectionEdit::Clear, &mut sink);
    assert!(sink.published.last().expect("publish").is_empty());

    // One publish per mutation, never a delta.
    assert_eq!(sink.published.len(), 4);
}

#[test]
fn redundant_edits_still_publish_but_never_change_state_acceptance() {
    let filter = Filter::new("color", "Blue");

    let mut selected = SelectedFilters::new();
    let mut sink = RecordingSink::default();

    apply_edit(&mut selected, SelectionEdit::Add(filter.clone()), &mut sink);
    apply_edit(&mut selected, SelectionEdit::Add(filter.clone()), &mut sink);
    apply_edit(&mut selected, SelectionEdit::Remove(Filter::new("color", "Green")), &mut sink);
    apply_edit(&mut selected, SelectionEdit::Clear, &mut sink);
    apply_edit(&mut selected, SelectionEdit::Clear, &mut sink);

    assert_eq!(sink.published.len(), 5);
    assert_eq!(sink.published[0], vec![filter.clone()]);
    assert_eq!(sink.published[1], vec![filter.clone()]);
    assert_eq!(sink.published[2], vec![filter]);
    assert!(sink.published[3].is_empty());
    assert!(sink.published[4].is_empty());
}

#[test]
fn collapse_capability_lifecycle_acceptance() {
    // Capability enabled: expanded -> collapsed -> expanded on user toggles.
    let mut visibility = VisibilityController::new(true);
    assert!(visibility.is_expanded());
    visibility.toggle();
    assert_eq!(visibility.state(), PanelVisibility::Collapsed);
    visibility.toggle();
    assert_eq!(visibility.state(), PanelVisibility::Expanded);

    // Collapsed content becomes visible again when the capability is revoked,
    // and stays toggle-proof until it is granted again.
    visibility.toggle();
    visibility.set_allow_collapse(false);
    assert_eq!(visibility.state(), PanelVisibility::Expanded);
    visibility.toggle();
    assert_eq!(visibility.state(), PanelVisibility::Expanded);

    // Granting the capability re-seeds to expanded as well.
    visibility.set_allow_collapse(true);
    assert_eq!(visibility.state(), PanelVisibility::Expanded);
}
