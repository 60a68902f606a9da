use eframe::egui::Color32;

pub trait ColorExt {
    fn parse_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    /// Accepts `#rrggbb` and the short `#rgb` form, with or without `#`.
    fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color32::from_rgb(r, g, b))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                    let value = digit.to_digit(16)? as u8;
                    *channel = value * 17;
                }
                Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }
}
