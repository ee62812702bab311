//! Builder.
//!
//! A [`PageBuilder`] knows how to perform three construction steps. A
//! [`Director`] is a named, fixed sequence of those steps and can drive any
//! builder. Builders accumulate into their own product type until they are
//! reset, so the products do not have to share an interface.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::creational::builder::{Director, LandingPageBuilder};
//!
//! let mut builder = LandingPageBuilder::new();
//! Director::STYLES_ONLY.construct(&mut builder);
//!
//! assert_eq!(
//!     builder.render(),
//!     "<html>\n<style>a { color: #838383; }</style>\n</html>"
//! );
//! ```

use std::fmt;

use crate::harness::Transcript;

/// The construction steps every builder provides.
pub trait PageBuilder {
    /// Opens the document frame, or closes it if content already exists.
    fn build_html(&mut self);

    /// Adds styling.
    fn build_css(&mut self);

    /// Adds the body content.
    fn build_body(&mut self);
}

/// One construction step, as issued by a [`Director`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// [`PageBuilder::build_html`]
    Html,
    /// [`PageBuilder::build_css`]
    Css,
    /// [`PageBuilder::build_body`]
    Body,
}

impl Step {
    /// Issues this step against `builder`.
    pub fn apply(self, builder: &mut dyn PageBuilder) {
        match self {
            Self::Html => builder.build_html(),
            Self::Css => builder.build_css(),
            Self::Body => builder.build_body(),
        }
    }
}

/// A named, fixed sequence of construction steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Director {
    name: &'static str,
    steps: &'static [Step],
}

impl Director {
    /// Frame, styles, body, closing frame.
    pub const FULL_PAGE: Self = Self::new(
        "full-page",
        &[Step::Html, Step::Css, Step::Body, Step::Html],
    );

    /// Frame, styles, closing frame.
    pub const STYLES_ONLY: Self = Self::new("styles-only", &[Step::Html, Step::Css, Step::Html]);

    /// Creates a director issuing `steps` in order.
    #[must_use]
    pub const fn new(name: &'static str, steps: &'static [Step]) -> Self {
        Self { name, steps }
    }

    /// The director's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The steps issued by [`construct`](Self::construct).
    #[must_use]
    pub const fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Drives `builder` through every step.
    pub fn construct(&self, builder: &mut dyn PageBuilder) {
        tracing::debug!(director = self.name, steps = self.steps.len(), "constructing");
        for step in self.steps {
            tracing::trace!(director = self.name, ?step, "build step");
            step.apply(builder);
        }
    }
}

/// The landing page product: rendered HTML lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingPage {
    /// Lines in insertion order
    pub html: Vec<String>,
}

impl LandingPage {
    fn push(&mut self, html: &str) {
        self.html.push(html.to_string());
    }
}

impl fmt::Display for LandingPage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.html.join("\n"))
    }
}

/// Builds a [`LandingPage`].
#[derive(Clone, Debug, Default)]
pub struct LandingPageBuilder {
    product: LandingPage,
}

impl LandingPageBuilder {
    /// Creates a builder working on an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page built so far.
    #[must_use]
    pub const fn product(&self) -> &LandingPage {
        &self.product
    }

    /// The page built so far, one line per element.
    #[must_use]
    pub fn render(&self) -> String {
        self.product.to_string()
    }

    /// Discards the page built so far.
    pub fn reset(&mut self) {
        self.product = LandingPage::default();
    }

    /// Hands the page over and starts a new one.
    pub fn finish(&mut self) -> LandingPage {
        std::mem::take(&mut self.product)
    }
}

impl PageBuilder for LandingPageBuilder {
    fn build_html(&mut self) {
        let tag = if self.product.html.is_empty() {
            "<html>"
        } else {
            "</html>"
        };
        self.product.push(tag);
    }

    fn build_css(&mut self) {
        self.product.push("<style>a { color: #838383; }</style>");
    }

    fn build_body(&mut self) {
        self.product.push("<p>Hello World!</p>");
    }
}

/// The profile page product: structured fields instead of markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePage {
    /// How many times the frame step ran
    pub frames: usize,
    /// Color scheme, set by the styling step
    pub theme: Option<String>,
    /// About text, set by the body step
    pub about: Option<String>,
}

/// Builds a [`ProfilePage`].
#[derive(Clone, Debug, Default)]
pub struct ProfilePageBuilder {
    product: ProfilePage,
}

impl ProfilePageBuilder {
    /// Creates a builder working on an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The profile built so far.
    #[must_use]
    pub const fn product(&self) -> &ProfilePage {
        &self.product
    }

    /// Hands the profile over and starts a new one.
    pub fn finish(&mut self) -> ProfilePage {
        std::mem::take(&mut self.product)
    }
}

impl PageBuilder for ProfilePageBuilder {
    fn build_html(&mut self) {
        self.product.frames += 1;
    }

    fn build_css(&mut self) {
        self.product.theme = Some("dark".to_string());
    }

    fn build_body(&mut self) {
        self.product.about = Some("About me".to_string());
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "<html>",
    "<style>a { color: #838383; }</style>",
    "<p>Hello World!</p>",
    "</html>",
    "<html>",
    "<style>a { color: #838383; }</style>",
    "</html>",
];

/// Builds a full landing page, resets, then builds a styles-only page.
pub fn demo(out: &mut Transcript) {
    let mut page = LandingPageBuilder::new();

    Director::FULL_PAGE.construct(&mut page);
    out.extend(page.product().html.iter().cloned());
    page.reset();

    Director::STYLES_ONLY.construct(&mut page);
    out.extend(page.product().html.iter().cloned());
    page.reset();
}
