//! Color themes.
//!
//! Light and dark palettes for view rendering, mapped onto ANSI RGB styles.

use clap::ValueEnum;
use nu_ansi_term::{Color, Style};

/// Theme selection, exposed as a command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

/// Styles for the view roles used by the renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub secondary_text: Style,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(52, 152, 219).bold(),
            success: Color::Rgb(39, 174, 96).normal(),
            warning: Color::Rgb(243, 156, 18).normal(),
            error: Color::Rgb(231, 76, 60).bold(),
            secondary_text: Color::Rgb(102, 102, 102).normal(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(93, 173, 226).bold(),
            success: Color::Rgb(39, 174, 96).normal(),
            warning: Color::Rgb(243, 156, 18).normal(),
            error: Color::Rgb(231, 76, 60).bold(),
            secondary_text: Color::Rgb(170, 170, 170).normal(),
        }
    }

    /// A style-free theme so scripted hosts see plain text.
    pub fn plain() -> Self {
        Self {
            primary: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            secondary_text: Style::new(),
        }
    }
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }
}
