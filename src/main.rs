mod app;
mod config;
mod convert;
mod utils;

use anyhow::Context;
use app::ConverterApp;
use config::Config;
use convert::{ConversionService, HttpConverter};
use eframe::egui;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_word_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();
    info!(endpoint = %config.endpoint, "Starting PDF to Word converter");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("conversion")
        .build()
        .context("failed to start the async runtime")?;
    let service: Arc<dyn ConversionService> =
        Arc::new(HttpConverter::new(&config).context("failed to build the HTTP client")?);
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 420.0])
            .with_min_inner_size([400.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PDF to Word Converter",
        options,
        Box::new(move |cc: &eframe::CreationContext<'_>| {
            Box::new(ConverterApp::new(cc, config, service, handle))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the converter window: {e}"))?;

    Ok(())
}
