//! Theme names and the toggle control's presentation.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named visual variant applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the root attribute and the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon and text shown on the toggle control while this theme is active.
    ///
    /// The control advertises the switch it performs: a moon while light,
    /// a sun while dark.
    pub fn toggle_label(self) -> ToggleLabel {
        match self {
            Self::Light => ToggleLabel { icon: "fas fa-moon", text: "Dark Mode" },
            Self::Dark => ToggleLabel { icon: "fas fa-sun", text: "Light Mode" },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of the theme toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabel {
    /// Icon class list, e.g. `"fas fa-sun"`.
    pub icon: &'static str,
    pub text: &'static str,
}
