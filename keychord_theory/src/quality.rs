// Chord qualities and their interval sets.
//
// A quality is the harmonic "shape" of a chord independent of its root: a
// major triad, a dominant seventh, a half-diminished seventh, and so on. Each
// quality maps to an ordered list of semitone offsets from the root, always
// starting with 0 so the root itself is the first chord member.
//
// Qualities are serialized as their chord-symbol suffix ("m7", "maj7", ...).
// Parsing a suffix is total: anything unrecognized falls back to a major
// triad rather than failing, so a typo in a host's chord chart still plays
// something sensible.
//
// Used by chord.rs for pitch-class projection and symbol parsing, and by the
// voicing crate to tag output voicings.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Harmonic quality of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Quality {
    /// Major triad: 1 3 5.
    Major,
    /// Minor triad: 1 b3 5.
    Minor,
    /// Dominant seventh: 1 3 5 b7.
    DominantSeventh,
    /// Diminished triad: 1 b3 b5.
    Diminished,
    /// Augmented triad: 1 3 #5.
    Augmented,
    /// Minor seventh: 1 b3 5 b7.
    MinorSeventh,
    /// Major seventh: 1 3 5 7.
    MajorSeventh,
    /// Suspended second: 1 2 5.
    Suspended2,
    /// Suspended fourth: 1 4 5.
    Suspended4,
    /// Half-diminished seventh (m7b5): 1 b3 b5 b7.
    HalfDiminished,
    /// Fully diminished seventh: 1 b3 b5 bb7.
    DiminishedSeventh,
    /// Minor-major seventh: 1 b3 5 7.
    MinorMajorSeventh,
    /// Major sixth: 1 3 5 6.
    Sixth,
    /// Minor sixth: 1 b3 5 6.
    MinorSixth,
    /// Power chord: 1 5.
    Power,
}

impl Quality {
    pub const ALL: [Quality; 15] = [
        Quality::Major,
        Quality::Minor,
        Quality::DominantSeventh,
        Quality::Diminished,
        Quality::Augmented,
        Quality::MinorSeventh,
        Quality::MajorSeventh,
        Quality::Suspended2,
        Quality::Suspended4,
        Quality::HalfDiminished,
        Quality::DiminishedSeventh,
        Quality::MinorMajorSeventh,
        Quality::Sixth,
        Quality::MinorSixth,
        Quality::Power,
    ];

    /// Semitone offsets from the root, root first, each in 0-11.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::DominantSeventh => &[0, 4, 7, 10],
            Quality::Diminished => &[0, 3, 6],
            Quality::Augmented => &[0, 4, 8],
            Quality::MinorSeventh => &[0, 3, 7, 10],
            Quality::MajorSeventh => &[0, 4, 7, 11],
            Quality::Suspended2 => &[0, 2, 7],
            Quality::Suspended4 => &[0, 5, 7],
            Quality::HalfDiminished => &[0, 3, 6, 10],
            Quality::DiminishedSeventh => &[0, 3, 6, 9],
            Quality::MinorMajorSeventh => &[0, 3, 7, 11],
            Quality::Sixth => &[0, 4, 7, 9],
            Quality::MinorSixth => &[0, 3, 7, 9],
            Quality::Power => &[0, 7],
        }
    }

    /// Canonical chord-symbol suffix ("" for major).
    pub fn symbol(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::DominantSeventh => "7",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::MinorSeventh => "m7",
            Quality::MajorSeventh => "maj7",
            Quality::Suspended2 => "sus2",
            Quality::Suspended4 => "sus4",
            Quality::HalfDiminished => "m7b5",
            Quality::DiminishedSeventh => "dim7",
            Quality::MinorMajorSeventh => "mMaj7",
            Quality::Sixth => "6",
            Quality::MinorSixth => "m6",
            Quality::Power => "5",
        }
    }

    /// Recognize a chord-symbol suffix, if it names a known quality.
    pub fn try_from_symbol(suffix: &str) -> Option<Quality> {
        let quality = match suffix {
            "" | "maj" | "M" | "major" => Quality::Major,
            "m" | "min" | "-" | "minor" => Quality::Minor,
            "7" | "dom7" => Quality::DominantSeventh,
            "dim" | "°" | "o" => Quality::Diminished,
            "aug" | "+" => Quality::Augmented,
            "m7" | "min7" | "-7" => Quality::MinorSeventh,
            "maj7" | "M7" | "Δ" | "Δ7" => Quality::MajorSeventh,
            "sus2" => Quality::Suspended2,
            "sus4" | "sus" => Quality::Suspended4,
            "m7b5" | "ø" | "ø7" | "-7b5" => Quality::HalfDiminished,
            "dim7" | "°7" | "o7" => Quality::DiminishedSeventh,
            "mMaj7" | "mM7" | "m(maj7)" | "-Δ7" => Quality::MinorMajorSeventh,
            "6" | "maj6" => Quality::Sixth,
            "m6" | "min6" | "-6" => Quality::MinorSixth,
            "5" => Quality::Power,
            _ => return None,
        };
        Some(quality)
    }

    /// Recognize a chord-symbol suffix, defaulting to a major triad when the
    /// suffix is unknown.
    pub fn from_symbol(suffix: &str) -> Quality {
        Self::try_from_symbol(suffix).unwrap_or_else(|| {
            debug!(suffix, "unrecognized chord quality, using major");
            Quality::Major
        })
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<String> for Quality {
    fn from(suffix: String) -> Self {
        Quality::from_symbol(&suffix)
    }
}

impl From<Quality> for String {
    fn from(quality: Quality) -> Self {
        quality.symbol().to_string()
    }
}
