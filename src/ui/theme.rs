use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::config::PaletteName;

/// Colours of one palette, from page background to accent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color32,
    pub surface: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub soft: Color32,
    pub dark: bool,
}

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

impl Palette {
    pub fn of(name: PaletteName) -> Self {
        match name {
            PaletteName::Lavender => Self {
                bg: hex(0xb8bfe8),
                surface: hex(0xc8ceee),
                card: hex(0xd4d9f4),
                border: hex(0x8a93c8),
                text: hex(0x1e2140),
                muted: hex(0x5a6090),
                accent: hex(0x3a4080),
                soft: hex(0xf0f2ff),
                dark: false,
            },
            PaletteName::Sage => Self {
                bg: hex(0xb0c8bc),
                surface: hex(0xbdd4c8),
                card: hex(0xccddd4),
                border: hex(0x5a8870),
                text: hex(0x162418),
                muted: hex(0x3a6050),
                accent: hex(0x1e5035),
                soft: hex(0xeaf5ef),
                dark: false,
            },
            PaletteName::Blush => Self {
                bg: hex(0xdfc4bc),
                surface: hex(0xeacec6),
                card: hex(0xf2d8d0),
                border: hex(0xa86858),
                text: hex(0x2e1410),
                muted: hex(0x805040),
                accent: hex(0x6e2c1c),
                soft: hex(0xfff0ec),
                dark: false,
            },
            PaletteName::Charcoal => Self {
                bg: hex(0x1e2023),
                surface: hex(0x26292d),
                card: hex(0x2d3135),
                border: hex(0x3c4148),
                text: hex(0xc4cad2),
                muted: hex(0x666d77),
                accent: hex(0x7b9fbe),
                soft: hex(0xdce6f0),
                dark: true,
            },
        }
    }

    /// Swatch shown in the palette picker
    pub fn swatch(name: PaletteName) -> Color32 {
        Self::of(name).accent
    }

    /// Returns (fill, stripe, text) for event blocks
    pub fn event_colors(&self) -> (Color32, Color32, Color32) {
        if self.dark {
            (self.surface, self.accent, self.text)
        } else {
            (self.soft, self.accent, self.text)
        }
    }

    /// Returns (fill, border) for a highlighted drop target
    pub fn drop_colors(&self) -> (Color32, Color32) {
        (self.accent.gamma_multiply(0.18), self.accent)
    }
}

/// Font family for filled Phosphor icons
pub fn phosphor_fill_family() -> FontFamily {
    FontFamily::Name("phosphor-fill".into())
}

pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    // Phosphor Regular icons as fallback in Proportional family
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    // Filled icons get their own family; the default UI font follows as text fallback
    fonts.font_data.insert(
        "phosphor-fill".into(),
        egui_phosphor::Variant::Fill.font_data(),
    );
    let mut fill_family = vec!["phosphor-fill".to_owned()];
    if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
        fill_family.extend(proportional.iter().cloned());
    }
    fonts
        .families
        .insert(FontFamily::Name("phosphor-fill".into()), fill_family);

    ctx.set_fonts(fonts);
}

pub fn setup_theme(ctx: &egui::Context, palette: &Palette) {
    let mut style = Style::default();

    let mut visuals = if palette.dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = palette.bg;
    visuals.window_fill = palette.card;
    visuals.faint_bg_color = palette.surface;
    visuals.extreme_bg_color = palette.soft;
    visuals.override_text_color = Some(palette.text);

    visuals.widgets.noninteractive.bg_fill = palette.surface;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);

    visuals.widgets.inactive.bg_fill = palette.surface;
    visuals.widgets.inactive.weak_bg_fill = palette.surface;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text);

    visuals.widgets.hovered.bg_fill = palette.card;
    visuals.widgets.hovered.weak_bg_fill = palette.card;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.accent);

    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.active.weak_bg_fill = palette.accent;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.soft);

    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = Stroke::new(1.0, palette.soft);
    visuals.hyperlink_color = palette.accent;

    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);
    visuals.window_rounding = Rounding::same(10.0);
    visuals.window_stroke = Stroke::new(1.0, palette.border);

    style.visuals = visuals;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(18.0);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_charcoal_is_dark() {
        let dark: Vec<_> = PaletteName::ALL
            .into_iter()
            .filter(|name| Palette::of(*name).dark)
            .collect();
        assert_eq!(dark, vec![PaletteName::Charcoal]);
    }

    #[test]
    fn hex_splits_channels() {
        assert_eq!(hex(0x3a4080), Color32::from_rgb(0x3a, 0x40, 0x80));
    }
}
