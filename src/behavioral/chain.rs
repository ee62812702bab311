//! Chain of Responsibility.
//!
//! A request travels along an ordered list of handlers until one of them
//! accepts it. Each handler only knows its own predicate; the [`Chain`] owns the
//! links and decides where the request goes next. When no link accepts the
//! request the chain answers with the [`NO_SUPPORT`] sentinel instead of
//! failing.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::behavioral::chain::{Chain, HelpDesk, TechnicalSupport, NO_SUPPORT};
//!
//! let chain = Chain::new().append(HelpDesk).append(TechnicalSupport);
//!
//! assert_eq!(chain.handle("technical_support"), "Technical support.");
//! assert_eq!(chain.handle("advanced_support"), NO_SUPPORT);
//! ```

use std::fmt;

use crate::harness::Transcript;

/// Answer given when no handler in the chain accepts a request.
pub const NO_SUPPORT: &str = "No support available.";

/// One link of a chain.
///
/// A handler either answers a request or declines it with `None`; it never
/// forwards the request itself.
pub trait Handler {
    /// A short name used when reporting the route a request took.
    fn name(&self) -> &str;

    /// Answers `request`, or returns `None` to let the next link try.
    fn try_handle(&self, request: &str) -> Option<String>;
}

fn answer(request: &str, level: &str, response: &str) -> Option<String> {
    (request == level).then(|| response.to_string())
}

/// First-level support, accepts `"help_desk"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HelpDesk;

impl Handler for HelpDesk {
    fn name(&self) -> &str {
        "help_desk"
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        answer(request, "help_desk", "General support.")
    }
}

/// Second-level support, accepts `"technical_support"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TechnicalSupport;

impl Handler for TechnicalSupport {
    fn name(&self) -> &str {
        "technical_support"
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        answer(request, "technical_support", "Technical support.")
    }
}

/// Third-level support, accepts `"advanced_support"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvancedSupport;

impl Handler for AdvancedSupport {
    fn name(&self) -> &str {
        "advanced_support"
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        answer(request, "advanced_support", "Advanced support.")
    }
}

/// A handler built from a closure.
///
/// # Examples
///
/// ```rust
/// use patternbook::behavioral::chain::{Chain, FnHandler};
///
/// let billing = FnHandler::new("billing", |request: &str| {
///     request.starts_with("invoice").then(|| "Billing support.".to_string())
/// });
/// let chain = Chain::new().append(billing);
///
/// assert_eq!(chain.handle("invoice_42"), "Billing support.");
/// ```
pub struct FnHandler<F> {
    name: String,
    function: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Wraps `function` under `name`.
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        (self.function)(request)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The path a request took through a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Names of the handlers consulted, in order
    pub visited: Vec<String>,
    /// Name of the handler that answered, `None` if the sentinel was returned
    pub handled_by: Option<String>,
    /// The answer, or [`NO_SUPPORT`]
    pub response: String,
}

/// An ordered sequence of handlers.
#[derive(Default)]
pub struct Chain {
    links: Vec<Box<dyn Handler>>,
}

impl Chain {
    /// Creates a chain with no links; it answers everything with [`NO_SUPPORT`].
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Appends `handler` after the current last link.
    #[must_use]
    pub fn append<H>(mut self, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.push(Box::new(handler));
        self
    }

    /// Appends an already boxed handler.
    pub fn push(&mut self, handler: Box<dyn Handler>) {
        self.links.push(handler);
    }

    /// Passes `request` down the chain and returns the first answer.
    #[must_use]
    pub fn handle(&self, request: &str) -> String {
        self.route(request).response
    }

    /// Like [`handle`](Self::handle), also reporting which links were visited.
    #[must_use]
    pub fn route(&self, request: &str) -> Route {
        self.route_from(0, request)
    }

    /// Sends `request` to the link at `start`, skipping the ones before it.
    ///
    /// A start past the end visits nothing and yields the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patternbook::behavioral::chain::{Chain, HelpDesk, TechnicalSupport, NO_SUPPORT};
    ///
    /// let chain = Chain::new().append(HelpDesk).append(TechnicalSupport);
    ///
    /// assert_eq!(chain.route_from(1, "help_desk").response, NO_SUPPORT);
    /// ```
    #[must_use]
    pub fn route_from(&self, start: usize, request: &str) -> Route {
        let mut visited = Vec::new();

        for link in self.links.iter().skip(start) {
            visited.push(link.name().to_string());
            if let Some(response) = link.try_handle(request) {
                tracing::debug!(request, handler = link.name(), "request handled");
                return Route {
                    visited,
                    handled_by: Some(link.name().to_string()),
                    response,
                };
            }
            tracing::trace!(request, handler = link.name(), "request passed on");
        }

        tracing::debug!(request, visited = visited.len(), "no handler accepted request");
        Route {
            visited,
            handled_by: None,
            response: NO_SUPPORT.to_string(),
        }
    }

    /// Returns the number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the chain has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// A chain is itself a handler, so chains nest.
impl Handler for Chain {
    fn name(&self) -> &str {
        "chain"
    }

    fn try_handle(&self, request: &str) -> Option<String> {
        let route = self.route(request);
        route.handled_by.map(|_| route.response)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.links.iter().map(|link| link.name()))
            .finish()
    }
}

/// Builds the help desk, technical and advanced support chain.
#[must_use]
pub fn support_chain() -> Chain {
    Chain::new()
        .append(HelpDesk)
        .append(TechnicalSupport)
        .append(AdvancedSupport)
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "General support.",
    "Technical support.",
    "Advanced support.",
    "No support available.",
];

/// Sends every support level, then an unknown one, through the support chain.
pub fn demo(out: &mut Transcript) {
    let chain = support_chain();
    for request in ["help_desk", "technical_support", "advanced_support", "xyz"] {
        out.line(chain.handle(request));
    }
}
