// Display mode, the derived palette, and nav link styling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Startup rule: dark only when the host says it prefers dark.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// Value written to the body `data-mode` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

/// Colors the whole page derives from the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub header_background: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    background: "#ffffff",
    text: "rgba(0, 0, 0, 0.87)",
    text_secondary: "rgba(0, 0, 0, 0.6)",
    header_background: "#1976d2",
};

const DARK_PALETTE: Palette = Palette {
    background: "#121212",
    text: "#ffffff",
    text_secondary: "rgba(255, 255, 255, 0.7)",
    header_background: "#90caf9",
};

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => LIGHT_PALETTE,
            DisplayMode::Dark => DARK_PALETTE,
        }
    }

    /// Inline style for the page root.
    pub fn page_css(&self) -> String {
        format!(
            "background: {}; color: {}; --text-secondary: {};",
            self.background, self.text, self.text_secondary
        )
    }
}

/// Holds the session's display mode. The only transition is `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    mode: DisplayMode,
}

impl ThemeController {
    pub fn new(initial: DisplayMode) -> Self {
        Self { mode: initial }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }
}

/// Derived styling for one nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAttributes {
    pub color: &'static str,
    pub font_weight: u16,
    pub hover_background: &'static str,
}

impl StyleAttributes {
    /// Hover is done in styles.css through the `--hover-bg` custom property.
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; font-weight: {}; --hover-bg: {};",
            self.color, self.font_weight, self.hover_background
        )
    }
}

const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

/// Active color is the inverse of inactive color within a mode.
pub fn compute_style(mode: DisplayMode, active: bool) -> StyleAttributes {
    let (active_color, inactive_color, hover_background) = match mode {
        DisplayMode::Light => (BLACK, WHITE, "rgba(255, 255, 255, 0.2)"),
        DisplayMode::Dark => (WHITE, BLACK, "rgba(0, 0, 0, 0.15)"),
    };

    StyleAttributes {
        color: if active { active_color } else { inactive_color },
        font_weight: if active { 700 } else { 400 },
        hover_background,
    }
}
