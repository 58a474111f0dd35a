//! External state container: owns the catalog, labels, and mutable selection.

use crossbeam_channel::{Sender, TrySendError};
use filter_core::{apply_edit, SelectionEdit, SelectionSink};
use shared::domain::{FilterCatalog, LabelMap, SelectedFilters};

/// Forwards each full post-mutation selection toward the results worker.
///
/// Channel pressure degrades to a status message rather than a panic; the
/// in-memory selection stays authoritative either way.
pub struct SelectionPublisher {
    selection_tx: Sender<SelectedFilters>,
    last_error: Option<String>,
}

impl SelectionPublisher {
    pub fn new(selection_tx: Sender<SelectedFilters>) -> Self {
        Self {
            selection_tx,
            last_error: None,
        }
    }

    pub fn take_last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

impl SelectionSink for SelectionPublisher {
    fn update_selected_filters(&mut self, selected: &SelectedFilters) {
        match self.selection_tx.try_send(selected.clone()) {
            Ok(()) => {
                tracing::debug!(selected = selected.len(), "published selected filters");
                self.last_error = None;
            }
            Err(TrySendError::Full(_)) => {
                self.last_error =
                    Some("Results pipeline is busy; selection kept locally".to_string());
            }
            Err(TrySendError::Disconnected(_)) => {
                self.last_error =
                    Some("Results pipeline disconnected; selection kept locally".to_string());
            }
        }
    }
}

pub struct AppStore {
    catalog: FilterCatalog,
    labels: LabelMap,
    selected: SelectedFilters,
    publisher: SelectionPublisher,
}

impl AppStore {
    pub fn new(
        catalog: FilterCatalog,
        labels: LabelMap,
        selection_tx: Sender<SelectedFilters>,
    ) -> Self {
        Self {
            catalog,
            labels,
            selected: SelectedFilters::new(),
            publisher: SelectionPublisher::new(selection_tx),
        }
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn selected(&self) -> &SelectedFilters {
        &self.selected
    }

    /// Applies one selection edit and republishes the full updated set.
    pub fn apply(&mut self, edit: SelectionEdit) {
        apply_edit(&mut self.selected, edit, &mut self.publisher);
    }

    pub fn take_publish_error(&mut self) -> Option<String> {
        self.publisher.take_last_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::Filter;

    fn empty_store(capacity: usize) -> (AppStore, crossbeam_channel::Receiver<SelectedFilters>) {
        let (tx, rx) = bounded(capacity);
        let store = AppStore::new(FilterCatalog::default(), LabelMap::default(), tx);
        (store, rx)
    }

    #[test]
    fn each_edit_publishes_the_complete_set() {
        let (mut store, rx) = empty_store(8);

        store.apply(SelectionEdit::Add(Filter::new("color", "Red")));
        store.apply(SelectionEdit::Add(Filter::new("size", "M")));
        store.apply(SelectionEdit::Clear);

        let published: Vec<SelectedFilters> = rx.try_iter().collect();
        assert_eq!(published.len(), 3);
        assert_eq!(published[0].len(), 1);
        assert_eq!(published[1].len(), 2);
        assert!(published[2].is_empty());
        assert!(store.take_publish_error().is_none());
    }

    #[test]
    fn full_channel_keeps_selection_and_reports_status() {
        let (mut store, _rx) = empty_store(1);

        store.apply(SelectionEdit::Add(Filter::new("color", "Red")));
        store.apply(SelectionEdit::Add(Filter::new("color", "Blue")));

        assert_eq!(store.selected().len(), 2);
        let status = store.take_publish_error().expect("status");
        assert!(status.contains("busy"));
        assert!(store.take_publish_error().is_none());
    }

    #[test]
    fn disconnected_channel_keeps_selection_and_reports_status() {
        let (mut store, rx) = empty_store(1);
        drop(rx);

        store.apply(SelectionEdit::Add(Filter::new("color", "Red")));

        assert_eq!(store.selected().len(), 1);
        let status = store.take_publish_error().expect("status");
        assert!(status.contains("disconnected"));
    }
}
