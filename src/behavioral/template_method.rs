//! Template Method.
//!
//! The skeleton of document processing is fixed in
//! [`DocumentTemplate::process`]: open, write, name, compress, validate,
//! close. The variable steps are closures stored in the template. `write` and
//! `validate` have to be supplied; `set_name` and `compress` are hooks with a
//! default.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::behavioral::template_method::{DocumentTemplate, say};
//! use patternbook::harness::Transcript;
//!
//! let markdown = DocumentTemplate::new(say("MD created"), say("MD validated"))
//!     .with_name(say("notes.md"));
//!
//! let out = Transcript::capture(|out| markdown.process(out));
//! assert_eq!(
//!     out.lines(),
//!     ["open", "MD created", "notes.md", "No compression applied", "MD validated", "close"]
//! );
//! ```

use crate::harness::Transcript;

type Step = Box<dyn Fn(&mut Transcript)>;

/// Returns a step that writes `line`.
pub fn say(line: &'static str) -> impl Fn(&mut Transcript) {
    move |out: &mut Transcript| out.line(line)
}

/// A document type: the fixed processing skeleton plus its custom steps.
pub struct DocumentTemplate {
    write: Step,
    validate: Step,
    set_name: Step,
    compress: Step,
}

impl DocumentTemplate {
    /// Creates a template from its two required steps.
    ///
    /// The naming hook defaults to `"new document"` and the compression hook
    /// to `"No compression applied"`.
    pub fn new<W, V>(write: W, validate: V) -> Self
    where
        W: Fn(&mut Transcript) + 'static,
        V: Fn(&mut Transcript) + 'static,
    {
        Self {
            write: Box::new(write),
            validate: Box::new(validate),
            set_name: Box::new(say("new document")),
            compress: Box::new(say("No compression applied")),
        }
    }

    /// Overrides the naming hook.
    #[must_use]
    pub fn with_name<N>(mut self, set_name: N) -> Self
    where
        N: Fn(&mut Transcript) + 'static,
    {
        self.set_name = Box::new(set_name);
        self
    }

    /// Overrides the compression hook.
    #[must_use]
    pub fn with_compression<C>(mut self, compress: C) -> Self
    where
        C: Fn(&mut Transcript) + 'static,
    {
        self.compress = Box::new(compress);
        self
    }

    /// PDF documents: compressed, default name.
    #[must_use]
    pub fn pdf() -> Self {
        Self::new(say("PDF created"), say("PDF validated"))
            .with_compression(say("Compression applied"))
    }

    /// Plain text documents: named `document.txt`, uncompressed.
    #[must_use]
    pub fn txt() -> Self {
        Self::new(say("TXT created"), say("TXT validated")).with_name(say("document.txt"))
    }

    /// Runs the fixed skeleton.
    pub fn process(&self, out: &mut Transcript) {
        out.line("open");
        (self.write)(out);
        (self.set_name)(out);
        (self.compress)(out);
        (self.validate)(out);
        out.line("close");
    }
}

impl std::fmt::Debug for DocumentTemplate {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("DocumentTemplate").finish_non_exhaustive()
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "open",
    "PDF created",
    "new document",
    "Compression applied",
    "PDF validated",
    "close",
    "open",
    "TXT created",
    "document.txt",
    "No compression applied",
    "TXT validated",
    "close",
];

/// Processes a PDF, then a TXT document.
pub fn demo(out: &mut Transcript) {
    DocumentTemplate::pdf().process(out);
    DocumentTemplate::txt().process(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hooks_default_when_not_overridden() {
        let template = DocumentTemplate::new(say("w"), say("v"));
        let out = Transcript::capture(|out| template.process(out));
        assert_eq!(
            out.lines(),
            ["open", "w", "new document", "No compression applied", "v", "close"]
        );
    }

    #[rstest]
    fn skeleton_order_is_fixed_regardless_of_override_order() {
        let template = DocumentTemplate::new(say("w"), say("v"))
            .with_compression(say("c"))
            .with_name(say("n"));
        let out = Transcript::capture(|out| template.process(out));
        assert_eq!(out.lines(), ["open", "w", "n", "c", "v", "close"]);
    }

    #[rstest]
    fn steps_may_capture_state() {
        let pages = 3;
        let template = DocumentTemplate::new(
            move |out: &mut Transcript| out.line(format!("{pages} pages written")),
            say("ok"),
        );
        let out = Transcript::capture(|out| template.process(out));
        assert_eq!(out.lines()[1], "3 pages written");
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
