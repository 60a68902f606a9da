mod state;
mod theme;
mod ui;

use crate::config::Config;
use crate::convert::{run_conversion, ConversionService, SelectedFile, SelectionError};
use crate::utils::mime::mime_from_name;
use eframe::{egui, App};
pub use state::{ConverterState, Phase};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use theme::Palette;
use tokio::runtime::Handle;
use tracing::{info, warn};

pub struct ConverterApp {
    state: ConverterState,
    config: Config,
    download_dir: PathBuf,
    service: Arc<dyn ConversionService>,
    runtime: Handle,
    palette: Palette,
    zone_hovered: bool,
}

impl ConverterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        service: Arc<dyn ConversionService>,
        runtime: Handle,
    ) -> Self {
        let app = Self::with_service(config, service, runtime);
        app.palette.apply(&cc.egui_ctx);
        app
    }

    pub fn with_service(config: Config, service: Arc<dyn ConversionService>, runtime: Handle) -> Self {
        let download_dir = config.download_dir();
        info!(
            endpoint = service.endpoint(),
            download_dir = %download_dir.display(),
            "Initializing PDF to Word converter"
        );

        Self {
            state: ConverterState::default(),
            config,
            download_dir,
            service,
            runtime,
            palette: Palette::default(),
            zone_hovered: false,
        }
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    /// Entry point for both the file picker and drops. Only the first file
    /// counts; a valid PDF starts converting straight away.
    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        if self.state.is_converting {
            warn!(count = files.len(), "Ignoring selection while a conversion is running");
            return;
        }

        let Some(file) = files.into_iter().next() else {
            return;
        };

        info!(file = %file.name, mime = %file.mime, "File selected");
        match self.state.accept(file) {
            Ok(file) => self.start_conversion(file),
            Err(SelectionError::NotPdf { name, mime }) => {
                warn!(file = %name, mime = %mime, "Rejected selection: not a PDF")
            }
        }
    }

    fn start_conversion(&mut self, file: SelectedFile) {
        let (sender, receiver) = std_mpsc::channel();
        self.state.begin(receiver);

        let service = Arc::clone(&self.service);
        let download_dir = self.download_dir.clone();

        self.runtime.spawn(async move {
            let outcome = run_conversion(service.as_ref(), &file, &download_dir).await;
            // The UI may already be gone on shutdown.
            let _ = sender.send(outcome);
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.poll() {
            if let Some(path) = &self.state.last_download {
                if self.config.open_after_download {
                    if let Err(e) = open::that(path) {
                        warn!(error = %e, path = %path.display(), "Failed to open converted document");
                    }
                }
            }
            ctx.request_repaint();
        }

        if self.state.is_converting {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

/// Turns an OS drop into a selection. Drops carry either a path or, where
/// there is no filesystem, the bytes themselves.
pub fn selected_from_dropped(file: &egui::DroppedFile) -> Option<SelectedFile> {
    if let Some(path) = &file.path {
        let mut selected = SelectedFile::from_path(path.clone());
        if !file.mime.is_empty() {
            selected.mime = file.mime.clone();
        }
        return Some(selected);
    }

    let bytes = file.bytes.clone()?;
    let mime = if file.mime.is_empty() {
        mime_from_name(&file.name)
    } else {
        file.mime.clone()
    };
    Some(SelectedFile::from_bytes(file.name.clone(), mime, bytes))
}

impl App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
