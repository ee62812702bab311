//! Facade.
//!
//! [`MediaPlayer`] offers one call, [`play_media`](MediaPlayer::play_media),
//! in front of the [`Audio`] and [`Video`] subsystems. Either subsystem may be
//! absent; the facade plays whatever it was given.

use crate::harness::Transcript;

/// Audio subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Audio {
    file: String,
}

impl Audio {
    /// Loads `file`.
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Plays the loaded file.
    pub fn play_audio(&self, out: &mut Transcript) {
        out.line(self.file.as_str());
    }
}

/// Video subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    file: String,
}

impl Video {
    /// Loads `file`.
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Plays the loaded file.
    pub fn play_video(&self, out: &mut Transcript) {
        out.line(self.file.as_str());
    }
}

/// The simplified front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaPlayer {
    audio: Option<Audio>,
    video: Option<Video>,
}

impl MediaPlayer {
    /// Creates a player over the given subsystems.
    #[must_use]
    pub const fn new(audio: Option<Audio>, video: Option<Video>) -> Self {
        Self { audio, video }
    }

    /// Plays audio first, then video, skipping whichever is missing.
    pub fn play_media(&self, out: &mut Transcript) {
        if let Some(audio) = &self.audio {
            audio.play_audio(out);
        }
        if let Some(video) = &self.video {
            video.play_video(out);
        }
    }
}

/// Lines written by [`demo`].
pub const EXPECTED: &[&str] = &["file.audio", "file.video"];

/// Plays an audio and a video file through the facade.
pub fn demo(out: &mut Transcript) {
    let player = MediaPlayer::new(
        Some(Audio::new("file.audio")),
        Some(Video::new("file.video")),
    );
    player.play_media(out);
}
