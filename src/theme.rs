use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Vector};
use serde::Deserialize;

/// How the palette is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop color scheme once at startup.
    Auto,
}

/// Colors and type sizes used throughout the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub is_dark: bool,
    // Text
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub on_accent: Color,
    // Surfaces
    pub background: Color,
    pub card: Color,
    pub nav: Color,
    pub nav_active: Color,
    pub overlay: Color,
    pub sketch: Color,
    pub pen: Color,
    pub pen_outline: Color,
    // Font sizes (logical pixels)
    pub display_text: f32,
    pub heading_text: f32,
    pub body_text: f32,
    pub label_text: f32,
}

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

impl Palette {
    /// Light theme, the portfolio's native look.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: rgba(0.07, 0.07, 0.09, 1.0),
            muted: rgba(0.42, 0.44, 0.48, 1.0),
            accent: rgba(0.23, 0.51, 0.96, 1.0),
            error: rgba(0.86, 0.15, 0.15, 1.0),
            on_accent: rgba(1.0, 1.0, 1.0, 1.0),
            background: rgba(0.97, 0.97, 0.99, 1.0),
            card: rgba(1.0, 1.0, 1.0, 0.85),
            nav: rgba(1.0, 1.0, 1.0, 0.7),
            nav_active: rgba(0.07, 0.07, 0.09, 1.0),
            overlay: rgba(0.05, 0.05, 0.08, 0.45),
            sketch: rgba(0.545, 0.361, 0.965, 0.7),
            pen: rgba(0.988, 0.867, 0.0, 1.0),
            pen_outline: rgba(0.137, 0.122, 0.125, 1.0),
            display_text: 52.0,
            heading_text: 30.0,
            body_text: 16.0,
            label_text: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: rgba(0.95, 0.95, 0.97, 1.0),
            muted: rgba(0.62, 0.64, 0.70, 1.0),
            accent: rgba(0.38, 0.62, 1.0, 1.0),
            error: rgba(0.95, 0.35, 0.35, 1.0),
            on_accent: rgba(0.05, 0.05, 0.08, 1.0),
            background: rgba(0.05, 0.05, 0.08, 1.0),
            card: rgba(0.10, 0.10, 0.14, 0.9),
            nav: rgba(0.10, 0.10, 0.14, 0.8),
            nav_active: rgba(0.95, 0.95, 0.97, 1.0),
            overlay: rgba(0.0, 0.0, 0.0, 0.6),
            sketch: rgba(0.655, 0.545, 0.98, 0.7),
            ..Self::light()
        }
    }

    pub fn card_style(&self, alpha: f32) -> impl Fn(&iced::Theme) -> container::Style {
        let (bg, text) = (fade(self.card, alpha), fade(self.text, alpha));
        move |_theme: &iced::Theme| container::Style {
            text_color: Some(text),
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: fade(Color::BLACK, 0.08 * alpha),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        }
    }

    pub fn nav_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let bg = self.nav;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn overlay_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let bg = self.overlay;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(bg)),
            ..Default::default()
        }
    }

    pub fn chip_style(&self, tint: Color) -> impl Fn(&iced::Theme) -> container::Style {
        let bg = fade(tint, 0.15);
        move |_theme: &iced::Theme| container::Style {
            text_color: Some(tint),
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Pill button: filled when `active`, text-only otherwise.
    pub fn pill_style(&self, active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let (fill, fg, idle) = (self.nav_active, self.background, self.text);
        let hover = fade(self.nav_active, 0.08);
        move |_theme: &iced::Theme, status: button::Status| {
            let background = if active {
                Some(Background::Color(fill))
            } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
                Some(Background::Color(hover))
            } else {
                None
            };
            button::Style {
                background,
                text_color: if active { fg } else { idle },
                border: Border {
                    radius: 20.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }

    pub fn accent_button_style(&self, alpha: f32) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let (fill, fg) = (fade(self.accent, alpha), fade(self.on_accent, alpha));
        move |_theme: &iced::Theme, status: button::Status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => fade(fill, 0.85),
                _ => fill,
            })),
            text_color: fg,
            border: Border {
                radius: 22.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Scale a color's alpha by `alpha` (0.0 transparent, 1.0 unchanged).
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Parse `#RRGGBB` (leading `#` optional). Content accents use this.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Detect a dark desktop color scheme. Spawns CLI tools synchronously;
/// called once at startup.
pub fn detect_system_dark() -> bool {
    // 1. gsettings color-scheme (GNOME 42+)
    if let Ok(output) = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
    {
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("prefer-dark") {
            return true;
        }
        if stdout.contains("prefer-light") || stdout.contains("default") {
            return false;
        }
    }

    // 2. GTK_THEME env var (e.g. "Adwaita:dark")
    if let Ok(val) = std::env::var("GTK_THEME") {
        return val.to_lowercase().contains("dark");
    }

    // 3. Detection failed, the portfolio is light by default
    false
}

pub fn resolve(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
        ThemeMode::Auto => {
            if detect_system_dark() {
                Palette::dark()
            } else {
                Palette::light()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex("#FF0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(parse_hex("00ff00"), Some(Color::from_rgb8(0, 255, 0)));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("#FFF"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let c = fade(rgba(0.2, 0.4, 0.6, 0.8), 0.5);
        assert_eq!((c.r, c.g, c.b), (0.2, 0.4, 0.6));
        assert!((c.a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn fade_clamps() {
        assert_eq!(fade(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(fade(Color::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn explicit_modes_skip_detection() {
        assert!(!resolve(ThemeMode::Light).is_dark);
        assert!(resolve(ThemeMode::Dark).is_dark);
    }
}
