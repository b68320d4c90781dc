//! Theme picker flow and navigation chrome state.
//!
//! # Responsibility
//! - Model the modal theme action list: open, choose, cancel.
//! - Own the process-wide navigation chrome colors.
//!
//! # Invariants
//! - An open picker offers exactly eight choices: the seven catalog themes
//!   plus cancel.
//! - Every choice closes the picker; only non-cancel choices touch the
//!   chrome.
//! - Cancel leaves the current chrome colors bit-for-bit unchanged.

use crate::model::theme::{ChromeStyle, ThemeColor, ALL_THEMES};
use log::info;

/// One entry in the open picker's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerChoice {
    Theme(ThemeColor),
    Cancel,
}

/// Modal state of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    Open,
}

/// Process-wide navigation chrome colors.
///
/// Explicit state with a defined lifecycle: derived from the persisted theme
/// at startup, mutated only by the picker flow, read by every screen that
/// renders chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationChrome {
    theme: ThemeColor,
    style: ChromeStyle,
}

impl NavigationChrome {
    /// Chrome for a given theme; `saved` comes from settings storage at
    /// startup, `None` falls back to the default theme.
    pub fn startup(saved: Option<ThemeColor>) -> Self {
        Self::with_theme(saved.unwrap_or(ThemeColor::Default))
    }

    fn with_theme(theme: ThemeColor) -> Self {
        Self {
            theme,
            style: ChromeStyle::for_theme(theme),
        }
    }

    pub fn theme(&self) -> ThemeColor {
        self.theme
    }

    pub fn style(&self) -> ChromeStyle {
        self.style
    }

    fn apply(&mut self, theme: ThemeColor) {
        *self = Self::with_theme(theme);
    }
}

impl Default for NavigationChrome {
    fn default() -> Self {
        Self::startup(None)
    }
}

/// Modal theme picker over the navigation chrome.
pub struct ThemePickerFlow {
    state: PickerState,
    chrome: NavigationChrome,
}

impl ThemePickerFlow {
    pub fn new(chrome: NavigationChrome) -> Self {
        Self {
            state: PickerState::Closed,
            chrome,
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn chrome(&self) -> &NavigationChrome {
        &self.chrome
    }

    /// Trigger-tapped handler: opens the modal and returns its action list.
    pub fn open(&mut self) -> Vec<PickerChoice> {
        self.state = PickerState::Open;
        let mut choices: Vec<PickerChoice> =
            ALL_THEMES.into_iter().map(PickerChoice::Theme).collect();
        choices.push(PickerChoice::Cancel);
        choices
    }

    /// Choice-tapped handler.
    ///
    /// Closes the picker for every choice. A theme choice recolors the
    /// chrome and is returned so the caller can persist it; cancel returns
    /// `None` and changes nothing. Choosing while closed is rejected.
    pub fn choose(&mut self, choice: PickerChoice) -> Option<ThemeColor> {
        if self.state != PickerState::Open {
            return None;
        }

        self.state = PickerState::Closed;
        match choice {
            PickerChoice::Theme(theme) => {
                self.chrome.apply(theme);
                info!("event=theme_apply module=screen status=ok theme={theme}");
                Some(theme)
            }
            PickerChoice::Cancel => None,
        }
    }
}
