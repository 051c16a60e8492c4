// Register and voice-count configuration for the voicing engine.
//
// `VoicingConfig` is a small data-driven config in the same shape as the
// project's other JSON configs: serde struct in, validated struct out. Any
// field missing from the JSON takes its default, so `{}` is the reference
// configuration (C3..C6, five voices).
//
// The engine functions take `&VoicingConfig` explicitly rather than reading
// globals, so a host can run differently configured performers side by side.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest playable pitch in the reference configuration (C3).
pub const DEFAULT_MIN_NOTE: u8 = 48;
/// Highest playable pitch in the reference configuration (C6).
pub const DEFAULT_MAX_NOTE: u8 = 84;
/// Voices per chord in the reference configuration: bass plus four upper.
pub const DEFAULT_VOICE_COUNT: usize = 5;

/// Upper bound on `voice_count`. The candidate search in `candidates.rs`
/// grows combinatorially with the number of voices.
pub const MAX_VOICE_COUNT: usize = 8;

/// Widest register the candidate search accepts, in semitones. Together with
/// `MAX_VOICE_COUNT` this caps the search at C(16, 7) chains: no quality has
/// more than four pitch classes, so at most 16 chord tones sit above the bass.
pub const MAX_REGISTER_SPAN: u8 = 48;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("min_note {min_note} is above max_note {max_note}")]
    InvertedRegister { min_note: u8, max_note: u8 },

    #[error("max_note {0} is outside the MIDI range")]
    PitchOutOfRange(u8),

    #[error("register {min_note}..={max_note} is narrower than an octave")]
    RegisterTooNarrow { min_note: u8, max_note: u8 },

    #[error("register {min_note}..={max_note} is wider than four octaves")]
    RegisterTooWide { min_note: u8, max_note: u8 },

    #[error("voice_count {0} must be between 2 and 8")]
    VoiceCount(usize),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicingConfig {
    /// Lowest pitch any voice may sound.
    pub min_note: u8,
    /// Highest pitch any voice may sound.
    pub max_note: u8,
    /// Voices per chord, bass included.
    pub voice_count: usize,
}

impl Default for VoicingConfig {
    fn default() -> Self {
        VoicingConfig {
            min_note: DEFAULT_MIN_NOTE,
            max_note: DEFAULT_MAX_NOTE,
            voice_count: DEFAULT_VOICE_COUNT,
        }
    }
}

impl VoicingConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: VoicingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the invariants the engine relies on. The register must span at
    /// least an octave so that every pitch class has an in-register pitch,
    /// and at most `MAX_REGISTER_SPAN` to keep the search tractable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_note > 127 {
            return Err(ConfigError::PitchOutOfRange(self.max_note));
        }
        if self.min_note > self.max_note {
            return Err(ConfigError::InvertedRegister {
                min_note: self.min_note,
                max_note: self.max_note,
            });
        }
        if self.max_note - self.min_note < 11 {
            return Err(ConfigError::RegisterTooNarrow {
                min_note: self.min_note,
                max_note: self.max_note,
            });
        }
        if self.max_note - self.min_note > MAX_REGISTER_SPAN {
            return Err(ConfigError::RegisterTooWide {
                min_note: self.min_note,
                max_note: self.max_note,
            });
        }
        if !(2..=MAX_VOICE_COUNT).contains(&self.voice_count) {
            return Err(ConfigError::VoiceCount(self.voice_count));
        }
        Ok(())
    }

    pub fn in_register(&self, pitch: u8) -> bool {
        (self.min_note..=self.max_note).contains(&pitch)
    }

    /// Lowest in-register pitch of the given pitch class, if any.
    pub fn lowest_in_register(&self, pc: u8) -> Option<u8> {
        (self.min_note..=self.max_note).find(|&p| p % 12 == pc % 12)
    }

    /// Move a pitch by whole octaves until it lies in the register, keeping
    /// its pitch class. Pitches that cannot be placed stay as close as the
    /// MIDI range allows.
    pub fn fold_into_register(&self, mut pitch: u8) -> u8 {
        while pitch > self.max_note && pitch >= 12 {
            pitch -= 12;
        }
        while pitch < self.min_note && pitch <= 127 - 12 {
            pitch += 12;
        }
        pitch
    }
}
