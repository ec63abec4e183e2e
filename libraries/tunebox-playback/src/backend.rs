//! Platform-agnostic audio backend trait
//!
//! Abstracts the native media element that performs decoding and output.
//! The controller never touches audio samples; it only issues commands and
//! reacts to the element's `ended`/`timeupdate` callbacks.

use crate::error::Result;

/// Native audio-playback primitive
///
/// Commands are fire-and-forget: only `play` reports failure, because a
/// source can be rejected at that point (unsupported media, network).
pub trait AudioBackend {
    /// Point the element at a new source
    fn load(&mut self, source_url: &str);

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(_)` - Source rejected or could not be decoded
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Reset position to the start of the source
    fn seek_to_start(&mut self);

    /// Apply volume level (0.0-1.0)
    fn set_volume(&mut self, level: f32);

    /// Apply mute flag
    fn set_muted(&mut self, muted: bool);

    /// Release the native resource
    ///
    /// Called once when the controller is dropped.
    fn release(&mut self) {}
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn load(&mut self, source_url: &str) {
        (**self).load(source_url);
    }

    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek_to_start(&mut self) {
        (**self).seek_to_start();
    }

    fn set_volume(&mut self, level: f32) {
        (**self).set_volume(level);
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// Backend that discards every command
///
/// Useful for headless hosts and for driving the controller without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn load(&mut self, _source_url: &str) {}

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek_to_start(&mut self) {}

    fn set_volume(&mut self, _level: f32) {}

    fn set_muted(&mut self, _muted: bool) {}
}
