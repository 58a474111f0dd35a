//! App shell: drains worker snapshots, applies panel responses, paints results.

use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui;
use egui::RichText;
use filter_core::VisibilityController;

use crate::results::ResultsSnapshot;
use crate::store::AppStore;
use crate::ui::panel::{self, PanelResponse};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub allow_collapse: bool,
    pub window_title: String,
}

pub struct FilterPanelApp {
    store: AppStore,
    visibility: VisibilityController,
    snapshot_rx: Receiver<ResultsSnapshot>,
    results: Option<ResultsSnapshot>,
    status: String,
}

impl FilterPanelApp {
    pub fn bootstrap(
        store: AppStore,
        snapshot_rx: Receiver<ResultsSnapshot>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            store,
            visibility: VisibilityController::new(startup.allow_collapse),
            snapshot_rx,
            results: None,
            status: "Ready".to_string(),
        }
    }

    fn process_worker_events(&mut self) {
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            self.results = Some(snapshot);
        }
    }

    fn apply_panel_response(&mut self, response: PanelResponse) {
        if response.toggle_requested {
            self.visibility.toggle();
        }
        for edit in response.edits {
            self.store.apply(edit);
            match self.store.take_publish_error() {
                Some(problem) => self.status = problem,
                None => self.status = "Ready".to_string(),
            }
        }
    }

    fn show_capability_toggle(&mut self, ui: &mut egui::Ui) {
        let mut allow_collapse = self.visibility.allow_collapse();
        if ui
            .checkbox(&mut allow_collapse, "Allow collapsing the panel")
            .changed()
        {
            self.visibility.set_allow_collapse(allow_collapse);
        }
    }

    fn show_results(&self, ui: &mut egui::Ui) {
        ui.separator();
        match &self.results {
            None => {
                ui.weak("Waiting for results…");
            }
            Some(snapshot) => {
                ui.label(
                    RichText::new(format!(
                        "Results ({} of {})",
                        snapshot.matching.len(),
                        snapshot.total
                    ))
                    .strong(),
                );
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if snapshot.matching.is_empty() {
                        ui.weak("No results match the current filters.");
                        return;
                    }
                    for item in &snapshot.matching {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(&item.name);
                            for tag in &item.tags {
                                ui.weak(format!("{}:{}", tag.property, tag.value));
                            }
                        });
                    }
                });
            }
        }
    }
}

impl eframe::App for FilterPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_worker_events();

        egui::TopBottomPanel::bottom("status_strip").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{} selected", self.store.selected().len()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = panel::show_filter_panel(
                ui,
                self.store.catalog(),
                self.store.labels(),
                self.store.selected(),
                &self.visibility,
            );
            self.apply_panel_response(response);

            ui.add_space(8.0);
            self.show_capability_toggle(ui);
            ui.add_space(4.0);
            self.show_results(ui);
        });

        // Worker snapshots arrive between frames; poll for them soon.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
