//! Volume control with persisted level
//!
//! Volume range is 0.0-1.0 (the native element's linear scale). Mute is
//! tracked separately so unmuting restores the previous level exactly.

/// Level used when nothing usable is stored
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume, clamped to 0.0-1.0
    pub fn new(level: f32) -> Self {
        Self {
            level: clamp_level(level),
            muted: false,
        }
    }

    /// Restore a level from its stored text form
    ///
    /// Values are clamped into range first. Missing, unparsable, non-finite
    /// and values that clamp to zero all fall back to [`DEFAULT_VOLUME`], so
    /// a restored level is never silent while unmuted.
    pub fn from_stored(stored: Option<&str>) -> Self {
        let level = stored
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .filter(|level| level.is_finite())
            .map(clamp_level)
            .filter(|level| *level != 0.0)
            .unwrap_or(DEFAULT_VOLUME);

        Self::new(level)
    }

    /// Set volume level
    ///
    /// A level of zero mutes; any other level unmutes.
    pub fn set_level(&mut self, level: f32) {
        self.level = clamp_level(level);
        self.muted = self.level == 0.0;
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state, leaving the level untouched
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Text form written to the settings store
    pub fn to_stored(&self) -> String {
        self.level.to_string()
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_volume_level_clamps() {
        let mut vol = Volume::new(0.5);

        vol.set_level(0.75);
        assert_eq!(vol.level(), 0.75);

        vol.set_level(1.5);
        assert_eq!(vol.level(), 1.0);

        vol.set_level(-0.2);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn zero_level_mutes_and_nonzero_unmutes() {
        let mut vol = Volume::new(0.8);

        vol.set_level(0.0);
        assert!(vol.is_muted());

        vol.set_level(0.01);
        assert!(!vol.is_muted());
    }

    #[test]
    fn toggle_mute_preserves_level() {
        let mut vol = Volume::new(0.8);

        vol.toggle_mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.8);

        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.8);
    }

    #[test]
    fn from_stored_parses_valid_levels() {
        assert_eq!(Volume::from_stored(Some("0.3")).level(), 0.3);
        assert_eq!(Volume::from_stored(Some(" 1 ")).level(), 1.0);
        assert_eq!(Volume::from_stored(Some("4")).level(), 1.0);
    }

    #[test]
    fn from_stored_falls_back_to_default() {
        assert_eq!(Volume::from_stored(None).level(), DEFAULT_VOLUME);
        assert_eq!(Volume::from_stored(Some("loud")).level(), DEFAULT_VOLUME);
        assert_eq!(Volume::from_stored(Some("NaN")).level(), DEFAULT_VOLUME);
        assert_eq!(Volume::from_stored(Some("0")).level(), DEFAULT_VOLUME);
        assert_eq!(Volume::from_stored(Some("-0.5")).level(), DEFAULT_VOLUME);
        assert_eq!(Volume::from_stored(Some("-1")).level(), DEFAULT_VOLUME);
    }

    #[test]
    fn restored_volume_is_never_silent_and_unmuted() {
        for raw in ["-0.5", "-1", "-inf", "0", "0.0", "-0"] {
            let vol = Volume::from_stored(Some(raw));
            assert!(
                vol.level() > 0.0 || vol.is_muted(),
                "{raw} restored to level {} unmuted",
                vol.level()
            );
        }
    }

    #[test]
    fn stored_form_round_trips() {
        let vol = Volume::new(0.42);
        assert_eq!(Volume::from_stored(Some(&vol.to_stored())).level(), 0.42);
    }
}
