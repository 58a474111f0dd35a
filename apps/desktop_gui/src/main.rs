use std::path::PathBuf;

mod config;
mod results;
mod store;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use shared::domain::SelectedFilters;

use crate::config::{load_catalog, load_settings};
use crate::results::ResultsSnapshot;
use crate::store::AppStore;
use crate::ui::{FilterPanelApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "Faceted filter panel over a demo result set")]
struct Args {
    /// Path to the panel settings file.
    #[arg(long, default_value = "panel.toml")]
    config: PathBuf,

    /// Catalog document (JSON) overriding the configured one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Whether the panel may be collapsed.
    #[arg(long)]
    allow_collapse: Option<bool>,

    /// Window title override.
    #[arg(long)]
    window_title: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(allow_collapse) = args.allow_collapse {
        settings.allow_collapse = allow_collapse;
    }
    if let Some(window_title) = args.window_title {
        settings.window_title = window_title;
    }

    let parts = load_catalog(&settings)?;
    tracing::info!(
        groups = parts.catalog.groups().len(),
        items = parts.items.len(),
        "catalog loaded"
    );

    let (selection_tx, selection_rx) = bounded::<SelectedFilters>(256);
    let (snapshot_tx, snapshot_rx) = bounded::<ResultsSnapshot>(256);
    results::spawn_results_worker(parts.items, selection_rx, snapshot_tx);

    // Prime the pipeline so the full result list is visible before any edit.
    let _ = selection_tx.send(SelectedFilters::new());

    let store = AppStore::new(parts.catalog, parts.labels, selection_tx);
    let startup = StartupConfig {
        allow_collapse: settings.allow_collapse,
        window_title: settings.window_title.clone(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        settings.window_title.as_str(),
        options,
        Box::new(move |_cc| Ok(Box::new(FilterPanelApp::bootstrap(store, snapshot_rx, &startup)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop shell: {err}"))
}
