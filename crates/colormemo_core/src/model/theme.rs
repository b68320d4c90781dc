//! Theme catalog and navigation chrome colors.
//!
//! # Responsibility
//! - Define the closed set of selectable theme colors.
//! - Derive chrome styling (tint, background, title color) from a theme.
//!
//! # Invariants
//! - Exactly one theme is the default.
//! - Tint is a pure function of `theme == Default`: black for the default
//!   theme, white for every other theme. It is never configured per theme.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Plain RGB color value, toolkit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Closed catalog of selectable theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    /// Neutral system chrome; the only theme with a black tint.
    Default,
    Orange,
    Red,
    Blue,
    Pink,
    Green,
    Purple,
}

/// Every selectable theme, in picker presentation order.
pub const ALL_THEMES: [ThemeColor; 7] = [
    ThemeColor::Default,
    ThemeColor::Orange,
    ThemeColor::Red,
    ThemeColor::Blue,
    ThemeColor::Pink,
    ThemeColor::Green,
    ThemeColor::Purple,
];

impl ThemeColor {
    /// Display label shown in the picker and accepted by `from_name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Orange => "Orange",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Pink => "Pink",
            Self::Green => "Green",
            Self::Purple => "Purple",
        }
    }

    /// Chrome background color for this theme.
    pub fn background(self) -> Rgb {
        match self {
            Self::Default => Rgb {
                r: 247,
                g: 247,
                b: 247,
            },
            Self::Orange => Rgb {
                r: 255,
                g: 149,
                b: 0,
            },
            Self::Red => Rgb {
                r: 255,
                g: 59,
                b: 48,
            },
            Self::Blue => Rgb {
                r: 0,
                g: 122,
                b: 255,
            },
            Self::Pink => Rgb {
                r: 255,
                g: 45,
                b: 85,
            },
            Self::Green => Rgb {
                r: 52,
                g: 199,
                b: 89,
            },
            Self::Purple => Rgb {
                r: 175,
                g: 82,
                b: 222,
            },
        }
    }

    /// Contrast tint derived by the binary rule: black only for the default
    /// theme, white for all others.
    pub fn tint(self) -> Rgb {
        if self == Self::Default {
            BLACK
        } else {
            WHITE
        }
    }

    /// Case-insensitive catalog lookup, used for settings round-trips.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_THEMES
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl Display for ThemeColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved chrome styling for the navigation bar.
///
/// `title_color` always matches `tint`; it is carried separately because the
/// consuming toolkit sets them through different attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeStyle {
    pub tint: Rgb,
    pub background: Rgb,
    pub title_color: Rgb,
}

impl ChromeStyle {
    /// Derives the full chrome style for one theme.
    pub fn for_theme(theme: ThemeColor) -> Self {
        let tint = theme.tint();
        Self {
            tint,
            background: theme.background(),
            title_color: tint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChromeStyle, ThemeColor, ALL_THEMES, BLACK, WHITE};

    #[test]
    fn catalog_has_exactly_one_default() {
        let defaults = ALL_THEMES
            .into_iter()
            .filter(|theme| *theme == ThemeColor::Default)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn tint_is_black_only_for_default() {
        for theme in ALL_THEMES {
            let expected = if theme == ThemeColor::Default {
                BLACK
            } else {
                WHITE
            };
            assert_eq!(theme.tint(), expected, "theme {theme}");
        }
    }

    #[test]
    fn title_color_matches_tint() {
        for theme in ALL_THEMES {
            let style = ChromeStyle::for_theme(theme);
            assert_eq!(style.title_color, style.tint);
            assert_eq!(style.background, theme.background());
        }
    }

    #[test]
    fn from_name_roundtrips_every_catalog_entry() {
        for theme in ALL_THEMES {
            assert_eq!(ThemeColor::from_name(theme.name()), Some(theme));
            assert_eq!(
                ThemeColor::from_name(&theme.name().to_uppercase()),
                Some(theme)
            );
        }
        assert_eq!(ThemeColor::from_name("mauve"), None);
    }
}
