use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub background: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub error_bg: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    /// Rose Pine Dawn.
    ///
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(144, 122, 169), // Iris
            accent: rgb(215, 130, 126),  // Rose
            text: rgb(87, 82, 121),
            text_muted: rgb(152, 147, 165),
            background: rgb(250, 244, 237),
            success: rgb(40, 105, 131), // Pine
            warning: rgb(234, 157, 52), // Gold
            error: rgb(180, 99, 122),   // Love
            info: rgb(86, 148, 159),    // Foam
            border_active: rgb(144, 122, 169),
            border_normal: rgb(223, 218, 217),
            error_bg: rgb(255, 186, 186),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: rgb(196, 167, 231),
            accent: rgb(235, 188, 186),
            text: rgb(224, 222, 244),
            text_muted: rgb(110, 106, 134),
            background: rgb(25, 23, 36),
            success: rgb(49, 116, 143),
            warning: rgb(246, 193, 119),
            error: rgb(235, 111, 146),
            info: rgb(156, 207, 216),
            border_active: rgb(196, 167, 231),
            border_normal: rgb(64, 61, 82),
            error_bg: rgb(82, 38, 52),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(122, 162, 247),
            accent: rgb(187, 154, 247),
            text: rgb(192, 202, 245),
            text_muted: rgb(86, 95, 137),
            background: rgb(26, 27, 38),
            success: rgb(158, 206, 106),
            warning: rgb(224, 175, 104),
            error: rgb(247, 118, 142),
            info: rgb(125, 207, 255),
            border_active: rgb(122, 162, 247),
            border_normal: rgb(65, 72, 104),
            error_bg: rgb(77, 36, 48),
        }
    }

    /// Look up a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "rose-pine" => Some(Self::rose_pine()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Names accepted by `from_name`.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "rose-pine".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
