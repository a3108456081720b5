//! Per-theme colours for each region of the landing page.
//!
//! Both palettes are `const` tables; resolving a theme is a lookup, never a
//! computation.

use serde::Serialize;

use super::Theme;

const ACCENT: &str = "#f57c00";
const ACCENT_HOVER: &str = "#ee8d00";
const ACCENT_HOVER_DEEP: &str = "#e68900";

/// Colours of a call-to-action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionStyle {
    pub background: &'static str,
    pub hover_background: &'static str,
    pub text: &'static str,
}

impl ActionStyle {
    /// Inline style; hover colour is exposed as `--action-hover` for the stylesheet
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {}; --action-hover: {};",
            self.background, self.text, self.hover_background
        )
    }
}

/// Colours of one visual region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionStyle {
    pub background: &'static str,
    /// Body text colour
    pub text: &'static str,
    pub heading: &'static str,
    pub action: ActionStyle,
}

impl RegionStyle {
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {}; --heading-color: {};",
            self.background, self.text, self.heading
        )
    }
}

/// Resolved colours for every region of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub page: RegionStyle,
    pub hero: RegionStyle,
    pub card: RegionStyle,
    /// "Why choose" closing panel
    pub panel: RegionStyle,
    /// "Learn more" closing panel
    pub info_panel: RegionStyle,
}

const PRIMARY_ACTION: ActionStyle = ActionStyle {
    background: ACCENT,
    hover_background: ACCENT_HOVER,
    text: "white",
};

const SECONDARY_ACTION: ActionStyle = ActionStyle {
    background: ACCENT,
    hover_background: ACCENT_HOVER_DEEP,
    text: "white",
};

const ACCENT_PANEL: RegionStyle = RegionStyle {
    background: ACCENT,
    text: "white",
    heading: "white",
    action: PRIMARY_ACTION,
};

const LIGHT: Palette = Palette {
    page: RegionStyle {
        background: "#f5f5f5",
        text: "black",
        heading: ACCENT,
        action: PRIMARY_ACTION,
    },
    hero: ACCENT_PANEL,
    card: RegionStyle {
        background: "#fff",
        text: "black",
        heading: ACCENT,
        action: SECONDARY_ACTION,
    },
    panel: ACCENT_PANEL,
    info_panel: RegionStyle {
        background: "#fff",
        text: "black",
        heading: ACCENT,
        action: SECONDARY_ACTION,
    },
};

const DARK: Palette = Palette {
    page: RegionStyle {
        background: "#1e1e1e",
        text: "white",
        heading: ACCENT,
        action: PRIMARY_ACTION,
    },
    hero: RegionStyle {
        background: "#333",
        text: "white",
        heading: "white",
        action: PRIMARY_ACTION,
    },
    card: RegionStyle {
        background: "#333",
        text: "white",
        heading: ACCENT,
        action: SECONDARY_ACTION,
    },
    panel: ACCENT_PANEL,
    info_panel: RegionStyle {
        background: "#333",
        text: "white",
        heading: ACCENT,
        action: SECONDARY_ACTION,
    },
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

pub fn resolve_palette(theme: Theme) -> Palette {
    *Palette::for_theme(theme)
}
