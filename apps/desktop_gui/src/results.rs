//! Results worker: the stand-in consumer for the results-filtering pipeline.
//!
//! Receives each republished selection on its own thread, recomputes the
//! matching demo rows, and reports a snapshot back to the UI event channel.

use std::collections::BTreeMap;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use shared::domain::{Filter, PropertyKey, SelectedFilters};

/// One row of the demo result set, tagged with the filter values it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub name: String,
    pub tags: Vec<Filter>,
}

/// Recomputed view of the result set after one selection update.
#[derive(Debug, Clone)]
pub struct ResultsSnapshot {
    pub matching: Vec<ResultItem>,
    pub total: usize,
}

/// Disjunctive within a property, conjunctive across properties: for every
/// property with at least one selected filter, the row must carry one of the
/// selected values. An empty selection matches everything.
pub fn matches_selection(item: &ResultItem, selected: &SelectedFilters) -> bool {
    let mut by_property: BTreeMap<&PropertyKey, Vec<&Filter>> = BTreeMap::new();
    for filter in selected {
        by_property.entry(&filter.property).or_default().push(filter);
    }

    by_property
        .values()
        .all(|wanted| wanted.iter().any(|filter| item.tags.contains(filter)))
}

pub fn filter_items(items: &[ResultItem], selected: &SelectedFilters) -> Vec<ResultItem> {
    items
        .iter()
        .filter(|item| matches_selection(item, selected))
        .cloned()
        .collect()
}

pub fn spawn_results_worker(
    items: Vec<ResultItem>,
    selection_rx: Receiver<SelectedFilters>,
    snapshot_tx: Sender<ResultsSnapshot>,
) {
    thread::spawn(move || {
        let total = items.len();
        while let Ok(selected) = selection_rx.recv() {
            let matching = filter_items(&items, &selected);
            tracing::debug!(
                selected = selected.len(),
                matching = matching.len(),
                total,
                "recomputed result set"
            );
            if snapshot_tx
                .try_send(ResultsSnapshot { matching, total })
                .is_err()
            {
                tracing::warn!("ui snapshot channel unavailable; dropping results update");
            }
        }
        tracing::debug!("selection channel closed; results worker exiting");
    });
}
