use super::theme::{ICON_SIZE, ZONE_BORDER_WIDTH, ZONE_PADDING, ZONE_ROUNDING};
use super::{selected_from_dropped, ConverterApp, Phase};
use crate::convert::SelectedFile;
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, CursorIcon, RichText, Sense, Stroke};
use rfd::FileDialog;
use tracing::warn;

impl ConverterApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.select_files(dropped.iter().filter_map(selected_from_dropped).collect());
        }
        let files_hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("PDF to Word Converter").size(28.0));
            });
            ui.add_space(16.0);

            if self.render_drop_zone(ui, files_hovering) {
                if let Some(path) = FileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .set_title("Select a PDF")
                    .pick_file()
                {
                    self.select_files(vec![SelectedFile::from_path(path)]);
                }
            }

            ui.add_space(16.0);
            self.render_status(ui);
        });
    }

    /// Returns `true` when the zone was clicked while idle.
    fn render_drop_zone(&mut self, ui: &mut egui::Ui, files_hovering: bool) -> bool {
        let enabled = self.state.phase() == Phase::Idle;
        let highlighted = enabled && (files_hovering || self.zone_hovered);
        let palette = self.palette;

        let frame = egui::Frame::none()
            .fill(if highlighted {
                palette.zone_fill_hover
            } else {
                palette.zone_fill
            })
            .stroke(Stroke::new(
                ZONE_BORDER_WIDTH,
                if highlighted {
                    palette.primary
                } else {
                    palette.zone_border
                },
            ))
            .rounding(ZONE_ROUNDING)
            .inner_margin(ZONE_PADDING);

        let inner = frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if self.state.is_converting {
                    ui.add(egui::Spinner::new().size(ICON_SIZE).color(palette.primary));
                    ui.add_space(16.0);
                    ui.label("Converting your file...");
                    if let Some(file) = &self.state.selected_file {
                        let detail = match file.size {
                            Some(size) => format!("{} ({})", file.name, FileSizeUtils::format_size(size)),
                            None => file.name.clone(),
                        };
                        ui.label(RichText::new(detail).color(palette.muted));
                    }
                } else {
                    ui.label(RichText::new("📤").size(ICON_SIZE).color(palette.primary));
                    ui.add_space(16.0);
                    ui.label(RichText::new("Drag and drop your PDF here").heading());
                    ui.label(RichText::new("or click to select a file").color(palette.muted));
                }
            });
        });

        let sense = if enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let response = ui.interact(inner.response.rect, ui.id().with("drop_zone"), sense);
        self.zone_hovered = response.hovered();

        enabled && response.on_hover_cursor(CursorIcon::PointingHand).clicked()
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            if let Some(error) = &self.state.error_message {
                ui.colored_label(palette.error, error);
            }

            if let (Some(name), Some(path)) = (self.state.saved_file_name(), &self.state.last_download) {
                ui.horizontal(|ui| {
                    ui.label(format!("Saved {}", name));
                    if ui.link("Open folder").clicked() {
                        let folder = path.parent().unwrap_or(path.as_path());
                        if let Err(e) = open::that(folder) {
                            warn!(error = %e, folder = %folder.display(), "Failed to open download folder");
                        }
                    }
                });
            }
        });
    }
}
