use crate::utils::color::ColorExt;
use egui::{Color32, Context, Visuals};

pub const PRIMARY_HEX: &str = "#1976d2";
pub const BACKGROUND_HEX: &str = "#f5f5f5";

pub const ZONE_ROUNDING: f32 = 16.0;
pub const ZONE_PADDING: f32 = 32.0;
pub const ZONE_BORDER_WIDTH: f32 = 2.0;
pub const ICON_SIZE: f32 = 48.0;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color32,
    pub background: Color32,
    pub zone_fill: Color32,
    pub zone_fill_hover: Color32,
    pub zone_border: Color32,
    pub error: Color32,
    pub muted: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color32::parse_hex(PRIMARY_HEX).unwrap_or(Color32::LIGHT_BLUE),
            background: Color32::parse_hex(BACKGROUND_HEX).unwrap_or(Color32::WHITE),
            zone_fill: Color32::from_rgb(250, 250, 250),
            zone_fill_hover: Color32::from_rgb(238, 238, 238),
            zone_border: Color32::from_rgb(204, 204, 204),
            error: Color32::from_rgb(211, 47, 47),
            muted: Color32::from_rgb(117, 117, 117),
        }
    }
}

impl Palette {
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::light();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.hyperlink_color = self.primary;
        visuals.selection.bg_fill = self.primary;
        ctx.set_visuals(visuals);
    }
}
