//! Abstract Factory.
//!
//! A [`ThemeFactory`] creates a matching family of widgets. Client code such
//! as [`render_theme`] only sees the abstract products, so a dark button is
//! never paired with a light background.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::creational::abstract_factory::{Theme, render_theme};
//! use patternbook::harness::Transcript;
//!
//! let out = Transcript::capture(|out| render_theme(Theme::Dark.factory().as_ref(), out));
//! assert_eq!(out.lines(), ["A dark button.", "A dark background."]);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::harness::Transcript;

/// Abstract product: something clickable.
pub trait Button {
    /// Describes the click.
    fn click(&self) -> String;
}

/// Abstract product: something drawn behind the widgets.
pub trait Background {
    /// Describes the background.
    fn show(&self) -> String;
}

/// Creates one consistent family of products.
pub trait ThemeFactory {
    /// Creates the family's button.
    fn create_button(&self) -> Box<dyn Button>;

    /// Creates the family's background.
    fn create_background(&self) -> Box<dyn Background>;
}

/// Dark family button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DarkButton;

impl Button for DarkButton {
    fn click(&self) -> String {
        "A dark button.".to_string()
    }
}

/// Light family button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightButton;

impl Button for LightButton {
    fn click(&self) -> String {
        "A light button.".to_string()
    }
}

/// Dark family background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DarkBackground;

impl Background for DarkBackground {
    fn show(&self) -> String {
        "A dark background.".to_string()
    }
}

/// Light family background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightBackground;

impl Background for LightBackground {
    fn show(&self) -> String {
        "A light background.".to_string()
    }
}

/// Produces dark widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DarkTheme;

impl ThemeFactory for DarkTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_background(&self) -> Box<dyn Background> {
        Box::new(DarkBackground)
    }
}

/// Produces light widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightTheme;

impl ThemeFactory for LightTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_background(&self) -> Box<dyn Background> {
        Box::new(LightBackground)
    }
}

/// The closed set of available themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    /// [`DarkTheme`]
    Dark,
    /// [`LightTheme`]
    Light,
}

impl Theme {
    /// Returns the factory for this theme.
    #[must_use]
    pub fn factory(self) -> Box<dyn ThemeFactory> {
        match self {
            Self::Dark => Box::new(DarkTheme),
            Self::Light => Box::new(LightTheme),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Returned when parsing a [`Theme`] from an unknown name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown theme `{name}`")]
pub struct UnknownTheme {
    /// The rejected input
    pub name: String,
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownTheme {
                name: input.to_string(),
            }),
        }
    }
}

/// Client code: builds and describes one widget family.
pub fn render_theme(factory: &dyn ThemeFactory, out: &mut Transcript) {
    let button = factory.create_button();
    let background = factory.create_background();
    out.line(button.click());
    out.line(background.show());
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "A dark button.",
    "A dark background.",
    "A light button.",
    "A light background.",
];

/// Renders the dark theme, then the light theme.
pub fn demo(out: &mut Transcript) {
    render_theme(&DarkTheme, out);
    render_theme(&LightTheme, out);
}
