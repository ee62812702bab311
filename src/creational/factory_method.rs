//! Factory Method.
//!
//! A [`DocumentCreator`] declares `create_document` and builds shared behavior
//! ([`read_document`](DocumentCreator::read_document)) on top of it. Each
//! concrete creator decides which [`DocumentFile`] gets instantiated.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::creational::factory_method::{DocumentCreator, PdfCreator};
//!
//! assert_eq!(PdfCreator.read_document(), "My PDF content");
//! assert_eq!(PdfCreator.create_document().create(), "myPDF.pdf");
//! ```

use crate::harness::Transcript;

/// The product created by a factory method.
pub trait DocumentFile {
    /// Creates the file and returns its name.
    fn create(&self) -> String;

    /// Returns the file's content.
    fn read(&self) -> String;
}

/// A PDF file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PdfFile;

impl DocumentFile for PdfFile {
    fn create(&self) -> String {
        "myPDF.pdf".to_string()
    }

    fn read(&self) -> String {
        "My PDF content".to_string()
    }
}

/// A plain text file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxtFile;

impl DocumentFile for TxtFile {
    fn create(&self) -> String {
        "myTXT.txt".to_string()
    }

    fn read(&self) -> String {
        "My TXT content".to_string()
    }
}

/// The creator: declares the factory method and uses it.
pub trait DocumentCreator {
    /// The factory method.
    fn create_document(&self) -> Box<dyn DocumentFile>;

    /// Creates a document and reads it back.
    fn read_document(&self) -> String {
        self.create_document().read()
    }
}

/// Creates [`PdfFile`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PdfCreator;

impl DocumentCreator for PdfCreator {
    fn create_document(&self) -> Box<dyn DocumentFile> {
        Box::new(PdfFile)
    }
}

/// Creates [`TxtFile`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxtCreator;

impl DocumentCreator for TxtCreator {
    fn create_document(&self) -> Box<dyn DocumentFile> {
        Box::new(TxtFile)
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "My PDF content",
    "My TXT content",
    "myPDF.pdf",
    "My PDF content",
    "myTXT.txt",
    "My TXT content",
];

/// Reads through the creators' shared method, then uses the products directly.
pub fn demo(out: &mut Transcript) {
    let creators: [&dyn DocumentCreator; 2] = [&PdfCreator, &TxtCreator];

    for creator in creators {
        out.line(creator.read_document());
    }

    for creator in creators {
        let document = creator.create_document();
        out.line(document.create());
        out.line(document.read());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct MarkdownCreator;

    impl DocumentCreator for MarkdownCreator {
        fn create_document(&self) -> Box<dyn DocumentFile> {
            struct MarkdownFile;

            impl DocumentFile for MarkdownFile {
                fn create(&self) -> String {
                    "notes.md".to_string()
                }

                fn read(&self) -> String {
                    "# Notes".to_string()
                }
            }

            Box::new(MarkdownFile)
        }
    }

    #[rstest]
    fn provided_method_uses_overridden_factory() {
        assert_eq!(MarkdownCreator.read_document(), "# Notes");
    }

    #[rstest]
    #[case(&PdfCreator, "myPDF.pdf")]
    #[case(&TxtCreator, "myTXT.txt")]
    fn each_creator_picks_its_product(#[case] creator: &dyn DocumentCreator, #[case] name: &str) {
        assert_eq!(creator.create_document().create(), name);
    }

    #[rstest]
    fn demo_matches_expected() {
        assert!(Transcript::capture(demo).matches(EXPECTED));
    }
}
