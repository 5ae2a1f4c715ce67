#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use simco_broker::ui::ui_text::UI_TEXT;
use simco_broker::{ApiConfig, Cli, FetchWorker, SimcoClient, logger_builder, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    logger_builder(std::env::var("RUST_LOG").ok().as_deref()).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the HTTP reads. Must outlive the window.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let _guard = rt.enter();

    let client = SimcoClient::new(&ApiConfig::from_cli(&args))?;
    let worker = FetchWorker::new(Arc::new(client), rt.handle().clone());
    let profile = args.profile_or_default();

    // D. Run Native App (no persisted state)
    let options = NativeOptions::default();

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, worker, profile))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {}", e))
}
