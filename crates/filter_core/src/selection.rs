//! Selection state transitions and outward republication.

use shared::domain::{Filter, SelectedFilters};

/// One user-initiated change to the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEdit {
    Add(Filter),
    Remove(Filter),
    Clear,
}

/// Outward notification boundary. Receives the complete post-mutation set
/// after every edit, so consumers replace their copy instead of patching it.
pub trait SelectionSink {
    fn update_selected_filters(&mut self, selected: &SelectedFilters);
}

/// Applies `edit` to the exclusively borrowed selection, then republishes the
/// full resulting set through `sink` exactly once, synchronously.
///
/// Every edit is total: adding a present filter, removing an absent one, and
/// clearing an empty set leave the set unchanged but still republish.
pub fn apply_edit(
    selected: &mut SelectedFilters,
    edit: SelectionEdit,
    sink: &mut dyn SelectionSink,
) {
    let op = match &edit {
        SelectionEdit::Add(_) => "add",
        SelectionEdit::Remove(_) => "remove",
        SelectionEdit::Clear => "clear",
    };

    match edit {
        SelectionEdit::Add(filter) => {
            selected.insert(filter);
        }
        SelectionEdit::Remove(filter) => {
            selected.remove(&filter);
        }
        SelectionEdit::Clear => selected.clear(),
    }

    tracing::debug!(op, selected = selected.len(), "applied selection edit");
    sink.update_selected_filters(selected);
}
