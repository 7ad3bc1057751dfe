/// Color scheme preference, persisted in localStorage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub const THEME_STORAGE_KEY: &str = "nanoviz-theme";

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Tolerant parse: anything unrecognized (including a missing or
    /// corrupted stored value) falls back to dark.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Theme corresponding to an applied `light` root class.
    pub fn from_applied(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
