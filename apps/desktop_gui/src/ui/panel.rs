//! Filter panel composition: header toggle, selected chips, option groups.

use egui::RichText;
use filter_core::{SelectionEdit, VisibilityController};
use shared::domain::{FilterCatalog, FilterGroup, LabelMap, PropertyKey, SelectedFilters};

/// Clicks collected during one frame, applied after the panel closure returns
/// so nothing mutates state while the catalog is borrowed for rendering.
#[derive(Debug, Default)]
pub struct PanelResponse {
    pub edits: Vec<SelectionEdit>,
    pub toggle_requested: bool,
}

pub fn group_title(labels: &LabelMap, key: &PropertyKey) -> String {
    format!("Filter by {}", labels.label_for(key))
}

pub fn show_filter_panel(
    ui: &mut egui::Ui,
    catalog: &FilterCatalog,
    labels: &LabelMap,
    selected: &SelectedFilters,
    visibility: &VisibilityController,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            response.toggle_requested = show_header(ui, visibility);

            if visibility.is_expanded() {
                show_selected_pane(ui, selected, &mut response);
            }

            for group in catalog.groups() {
                show_options_group(ui, group, labels, selected, &mut response);
            }
        });

    response
}

fn show_header(ui: &mut egui::Ui, visibility: &VisibilityController) -> bool {
    let mut title = String::from("Filter Results");
    if visibility.allow_collapse() {
        title.push(' ');
        title.push(if visibility.is_expanded() { '▲' } else { '▼' });
    }

    let mut label = egui::Label::new(RichText::new(title).heading());
    if visibility.allow_collapse() {
        label = label.sense(egui::Sense::click());
    }

    let heading = ui.add(label);
    if !visibility.allow_collapse() {
        return false;
    }
    heading
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

fn show_selected_pane(ui: &mut egui::Ui, selected: &SelectedFilters, response: &mut PanelResponse) {
    ui.add_space(4.0);

    if selected.is_empty() {
        ui.weak("No filters selected.");
    } else {
        ui.horizontal_wrapped(|ui| {
            for filter in selected {
                let chip = ui
                    .small_button(format!("{} ✕", filter.value))
                    .on_hover_text(format!("Remove the '{}' filter", filter.value));
                if chip.clicked() {
                    response.edits.push(SelectionEdit::Remove(filter.clone()));
                }
            }
        });
    }

    let reset = ui.add_enabled(!selected.is_empty(), egui::Button::new("Reset"));
    if reset.clicked() {
        response.edits.push(SelectionEdit::Clear);
    }

    ui.separator();
}

fn show_options_group(
    ui: &mut egui::Ui,
    group: &FilterGroup,
    labels: &LabelMap,
    selected: &SelectedFilters,
    response: &mut PanelResponse,
) {
    ui.add_space(6.0);
    ui.label(RichText::new(group_title(labels, &group.key)).strong());
    ui.horizontal_wrapped(|ui| {
        for filter in &group.filters {
            // Re-adding is a set no-op, so an already-selected value renders
            // disabled instead of offering a dead click.
            let already_selected = selected.contains(filter);
            let option = ui.add_enabled(!already_selected, egui::Button::new(&filter.value));
            if option.clicked() {
                response.edits.push(SelectionEdit::Add(filter.clone()));
            }
        }
    });
}
