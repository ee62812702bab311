//! Proxy.
//!
//! [`LazyVideo`] stands in for a [`VideoFile`]. Opening a file is expensive,
//! so the proxy defers it until the first [`play`](Media::play) and reuses
//! the opened file afterwards.
//!
//! # Examples
//!
//! ```rust
//! use patternbook::harness::Transcript;
//! use patternbook::structural::proxy::{LazyVideo, Media};
//!
//! let mut video = LazyVideo::new("clip.webm");
//! assert!(!video.is_loaded());
//!
//! let out = Transcript::capture(|out| {
//!     video.play(out);
//!     video.play(out);
//! });
//!
//! assert_eq!(
//!     out.lines(),
//!     ["Loading file: clip.webm", "Now playing: clip.webm", "Now playing: clip.webm"]
//! );
//! ```

use crate::harness::Transcript;

/// Something that can be played.
pub trait Media {
    /// Plays the media.
    fn play(&mut self, out: &mut Transcript);
}

/// The real subject: opens its file as soon as it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFile {
    file: String,
}

impl VideoFile {
    /// Opens `file`.
    pub fn open(file: impl Into<String>, out: &mut Transcript) -> Self {
        let file = file.into();
        out.line(format!("Loading file: {file}"));
        Self { file }
    }
}

impl Media for VideoFile {
    fn play(&mut self, out: &mut Transcript) {
        out.line(format!("Now playing: {}", self.file));
    }
}

/// The proxy: remembers the file name and opens it on first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyVideo {
    file: String,
    subject: Option<VideoFile>,
}

impl LazyVideo {
    /// Creates a proxy for `file` without opening it.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            subject: None,
        }
    }

    /// Whether the real file has been opened yet.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.subject.is_some()
    }
}

impl Media for LazyVideo {
    fn play(&mut self, out: &mut Transcript) {
        let subject = self.subject.get_or_insert_with(|| {
            tracing::debug!(file = %self.file, "proxy opening real subject");
            VideoFile::open(self.file.as_str(), out)
        });
        subject.play(out);
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &[
    "Loading file: video.mp4",
    "Now playing: video.mp4",
    "Loading file: video.avi",
    "Now playing: video.avi",
];

/// Plays a real video directly, then one through the proxy.
pub fn demo(out: &mut Transcript) {
    let mut video = VideoFile::open("video.mp4", out);
    video.play(out);

    let mut proxy = LazyVideo::new("video.avi");
    proxy.play(out);
}
