use navtabs_core::config::ThemeColorOverrides;
use navtabs_core::style::StyleSpec;
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// Colours for the chrome around the strip
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xe1, 0xe1, 0xe1),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            muted: Color::Rgb(0x92, 0x83, 0x74),
        }
    }
}

impl Theme {
    /// Default theme with user overrides applied
    pub fn from_overrides(overrides: &ThemeColorOverrides) -> Self {
        let mut theme = Self::default();
        apply_override(&mut theme.bg, overrides.bg.as_deref(), "bg");
        apply_override(&mut theme.fg, overrides.fg.as_deref(), "fg");
        apply_override(&mut theme.accent, overrides.accent.as_deref(), "accent");
        apply_override(&mut theme.muted, overrides.muted.as_deref(), "muted");
        theme
    }

    /// Convert a resolved slot style into a ratatui style on this theme
    pub fn style_for(&self, spec: &StyleSpec) -> Style {
        let mut style = Style::default().bg(self.bg).fg(self.fg);
        if let Some(fg) = spec.fg.as_deref().and_then(parse_hex_color) {
            style = style.fg(fg);
        }
        if let Some(bg) = spec.bg.as_deref().and_then(parse_hex_color) {
            style = style.bg(bg);
        }
        if spec.bold == Some(true) {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Colour used to draw the underline bar
    pub fn underline_color(&self, spec: &StyleSpec) -> Color {
        spec.bg
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(self.fg)
    }
}

fn apply_override(slot: &mut Color, value: Option<&str>, name: &str) {
    if let Some(hex) = value {
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Invalid color '{}' for theme.{}, keeping default", hex, name),
        }
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#e1e1e1"), Some(Color::Rgb(0xe1, 0xe1, 0xe1)));
        assert_eq!(parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_overrides() {
        let theme = Theme::from_overrides(&ThemeColorOverrides {
            accent: Some("#ff0000".into()),
            muted: Some("not a colour".into()),
            ..Default::default()
        });
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.muted, Theme::default().muted);
    }

    #[test]
    fn test_style_for_spec() {
        let theme = Theme::default();
        let spec = StyleSpec {
            fg: Some("#000000".into()),
            bold: Some(true),
            ..Default::default()
        };
        let style = theme.style_for(&spec);
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(style.bg, Some(theme.bg));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
