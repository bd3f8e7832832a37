use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw palette for the portfolio's dark glow look, kept as hex strings
/// so a palette can later be read from user configuration verbatim.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) border: String,
    pub(crate) foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) muted: String,
    pub(crate) cyan: String,
    pub(crate) purple: String,
    pub(crate) indigo: String,
    pub(crate) green: String,
    pub(crate) red: String,
    pub(crate) yellow: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#09090B"),
            surface: String::from("#18181B"),
            overlay: String::from("#1F1F23"),
            border: String::from("#27272A"),
            foreground: String::from("#FAFAFA"),
            dim_foreground: String::from("#A1A1AA"),
            muted: String::from("#71717A"),
            cyan: String::from("#22D3EE"),
            purple: String::from("#A855F7"),
            indigo: String::from("#6366F1"),
            green: String::from("#22C55E"),
            red: String::from("#EF4444"),
            yellow: String::from("#EAB308"),
        }
    }
}

/// The same palette resolved to renderer colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) border: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) muted: Color,
    pub(crate) cyan: Color,
    pub(crate) purple: Color,
    pub(crate) indigo: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(raw: &ColorPalette) -> Self {
        Self {
            background: parse_hex_color(&raw.background),
            surface: parse_hex_color(&raw.surface),
            overlay: parse_hex_color(&raw.overlay),
            border: parse_hex_color(&raw.border),
            foreground: parse_hex_color(&raw.foreground),
            dim_foreground: parse_hex_color(&raw.dim_foreground),
            muted: parse_hex_color(&raw.muted),
            cyan: parse_hex_color(&raw.cyan),
            purple: parse_hex_color(&raw.purple),
            indigo: parse_hex_color(&raw.indigo),
            green: parse_hex_color(&raw.green),
            red: parse_hex_color(&raw.red),
            yellow: parse_hex_color(&raw.yellow),
        }
    }
}

/// A named application theme with both raw and resolved palettes.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    raw_palette: ColorPalette,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn new(id: impl Into<String>, raw_palette: ColorPalette) -> Self {
        let iced_palette = IcedColorPalette::from(&raw_palette);
        Self {
            id: id.into(),
            raw_palette,
            iced_palette,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn raw_palette(&self) -> &ColorPalette {
        &self.raw_palette
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new("lumen-dark", ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(theme: &AppTheme) -> Self {
        let palette = theme.iced_palette();
        Theme::custom(
            theme.id().to_owned(),
            Palette {
                background: palette.background,
                text: palette.foreground,
                primary: palette.cyan,
                success: palette.green,
                danger: palette.red,
                warning: palette.yellow,
            },
        )
    }
}

/// Per-widget style overrides layered on top of the theme palette.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
    pub(crate) border_radius: Option<f32>,
}

/// Theme handle passed down to widgets, with optional overrides.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

/// Owner of the active theme.
#[derive(Debug, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` hex string, falling back to white
/// for malformed input so a broken palette entry never aborts startup.
pub(crate) fn parse_hex_color(hex: &str) -> Color {
    parse_hex_color_checked(hex).unwrap_or(Color::WHITE)
}

fn parse_hex_color_checked(hex: &str) -> Option<Color> {
    let value = hex.strip_prefix('#')?;
    if value.len() != 6 && value.len() != 8 {
        return None;
    }

    let channel = |slice: &str| u8::from_str_radix(slice, 16).ok();
    let r = channel(value.get(0..2)?)?;
    let g = channel(value.get(2..4)?)?;
    let b = channel(value.get(4..6)?)?;
    let a = match value.get(6..8) {
        Some(slice) => channel(slice)? as f32 / 255.0,
        None => 1.0,
    };

    Some(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_six_digit_hex_when_parsed_then_channels_match() {
        let color = parse_hex_color("#22D3EE");

        assert!((color.r - 0x22 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 0xD3 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0xEE as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_eight_digit_hex_when_parsed_then_alpha_is_scaled() {
        let color = parse_hex_color("#FFFFFF80");

        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_white_is_returned() {
        assert_eq!(parse_hex_color("not-a-color"), Color::WHITE);
        assert_eq!(parse_hex_color("#FFF"), Color::WHITE);
        assert_eq!(parse_hex_color("22D3EE"), Color::WHITE);
    }

    #[test]
    fn given_default_theme_when_converted_then_iced_palette_uses_accents() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        assert_eq!(theme.id(), "lumen-dark");
        assert_eq!(parse_hex_color(&theme.raw_palette().cyan), palette.cyan);
    }
}
