//! City Theme
//!
//! Every city has a palette and a set of Tailwind class tokens. Components
//! read the tokens from the theme provided at the root instead of matching
//! on the city themselves.

use serde::Serialize;

use crate::city::City;

/// Main, light and dark colors of a city
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

/// Tailwind classes derived from the palette
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClassTokens {
    /// Solid background
    pub bg: &'static str,
    /// Background on hover, paired with `bg`
    pub bg_hover: &'static str,
    /// Accent text
    pub text: &'static str,
    /// Accent text on hover
    pub text_hover: &'static str,
    pub border: &'static str,
    /// Tinted background for tags and icon wells
    pub light_bg: &'static str,
    /// Gradient start
    pub gradient_from: &'static str,
    pub ring: &'static str,
}

/// Palette plus class tokens for one city (or none)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Theme {
    pub city: Option<City>,
    pub palette: Palette,
    pub tokens: ClassTokens,
}

impl Theme {
    /// `bg` and `bg_hover` joined, the usual button treatment
    pub fn button_classes(&self) -> String {
        format!("{} {} text-white", self.tokens.bg, self.tokens.bg_hover)
    }

    /// `text` and `border` joined, used for selected chips and tabs
    pub fn accent_classes(&self) -> String {
        format!("{} {}", self.tokens.text, self.tokens.border)
    }
}

const AMSTERDAM_PALETTE: Palette = Palette {
    primary: "#1E88E5",
    light: "#E4F0F6",
    dark: "#1565C0",
};

static AMSTERDAM: Theme = Theme {
    city: Some(City::Amsterdam),
    palette: AMSTERDAM_PALETTE,
    tokens: ClassTokens {
        bg: "bg-amsterdam",
        bg_hover: "hover:bg-amsterdam-dark",
        text: "text-amsterdam",
        text_hover: "hover:text-amsterdam-dark",
        border: "border-amsterdam",
        light_bg: "bg-amsterdam/10",
        gradient_from: "from-amsterdam",
        ring: "ring-amsterdam",
    },
};

static DUBLIN: Theme = Theme {
    city: Some(City::Dublin),
    palette: Palette {
        primary: "#26A69A",
        light: "#E0F2E9",
        dark: "#00796B",
    },
    tokens: ClassTokens {
        bg: "bg-dublin",
        bg_hover: "hover:bg-dublin-dark",
        text: "text-dublin",
        text_hover: "hover:text-dublin-dark",
        border: "border-dublin",
        light_bg: "bg-dublin/10",
        gradient_from: "from-dublin",
        ring: "ring-dublin",
    },
};

static CALGARY: Theme = Theme {
    city: Some(City::Calgary),
    palette: Palette {
        primary: "#F57C00",
        light: "#F9EBE0",
        dark: "#E65100",
    },
    tokens: ClassTokens {
        bg: "bg-calgary",
        bg_hover: "hover:bg-calgary-dark",
        text: "text-calgary",
        text_hover: "hover:text-calgary-dark",
        border: "border-calgary",
        light_bg: "bg-calgary/10",
        gradient_from: "from-calgary",
        ring: "ring-calgary",
    },
};

// No city yet: Amsterdam colors with the generic `primary` classes.
static UNSELECTED: Theme = Theme {
    city: None,
    palette: AMSTERDAM_PALETTE,
    tokens: ClassTokens {
        bg: "bg-primary",
        bg_hover: "hover:bg-primary/90",
        text: "text-primary",
        text_hover: "hover:text-primary/80",
        border: "border-primary",
        light_bg: "bg-primary/10",
        gradient_from: "from-primary",
        ring: "ring-primary",
    },
};

/// Look up the theme for a city selection
pub fn theme_for(city: Option<City>) -> &'static Theme {
    match city {
        Some(City::Amsterdam) => &AMSTERDAM,
        Some(City::Dublin) => &DUBLIN,
        Some(City::Calgary) => &CALGARY,
        None => &UNSELECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        assert_eq!(theme_for(Some(City::Amsterdam)).palette.primary, "#1E88E5");
        assert_eq!(theme_for(Some(City::Dublin)).palette.dark, "#00796B");
        assert_eq!(theme_for(Some(City::Calgary)).palette.light, "#F9EBE0");
    }

    #[test]
    fn test_unselected_uses_default_palette() {
        let theme = theme_for(None);
        assert_eq!(theme.palette, AMSTERDAM_PALETTE);
        assert_eq!(theme.tokens.bg, "bg-primary");
        assert_eq!(theme.city, None);
    }

    #[test]
    fn test_every_city_has_its_own_tokens() {
        for city in City::ALL {
            let theme = theme_for(Some(city));
            assert_eq!(theme.city, Some(city));
            assert!(theme.tokens.bg.contains(city.as_str()));
            assert!(theme.tokens.text.contains(city.as_str()));
        }
    }

    #[test]
    fn test_button_classes() {
        let classes = theme_for(Some(City::Dublin)).button_classes();
        assert_eq!(classes, "bg-dublin hover:bg-dublin-dark text-white");
    }
}
