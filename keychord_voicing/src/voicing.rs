// The engine's output: concrete pitches for each voice of a chord.
//
// Voice 0 is always the bass. Upper voices keep their index from call to
// call so a host can route each one to its own synth voice, but they are not
// required to stay in pitch order.

use keychord_theory::pitch::{pitch_class, pitch_name};
use keychord_theory::{ChordIntent, Quality};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voicing {
    /// One pitch per voice; `notes[0]` is the bass.
    pub notes: Vec<u8>,
    /// The bass pitch as placed in register. Always equal to `notes[0]`.
    pub bass: u8,
    /// Root pitch class of the chord this voicing realizes.
    pub root: u8,
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Voicing {
    /// Wrap a pitch sequence with the target chord's metadata. The bass is
    /// taken from the sequence itself.
    pub(crate) fn from_notes(notes: Vec<u8>, target: &ChordIntent) -> Self {
        Voicing {
            bass: notes.first().copied().unwrap_or(target.bass),
            notes,
            root: target.root,
            quality: target.quality,
            extension: target.extension.clone(),
        }
    }

    /// Number of voices.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Sorted, deduplicated pitch classes sounding in this voicing.
    pub fn pitch_classes(&self) -> Vec<u8> {
        let mut pcs: Vec<u8> = self.notes.iter().map(|&n| pitch_class(n)).collect();
        pcs.sort_unstable();
        pcs.dedup();
        pcs
    }

    /// True if every given pitch class sounds in at least one voice.
    pub fn covers(&self, pcs: &[u8]) -> bool {
        pcs.iter()
            .all(|&pc| self.notes.iter().any(|&n| pitch_class(n) == pc % 12))
    }

    /// Note names per voice, bass first ("C3 E4 G4 ...").
    pub fn names(&self) -> Vec<String> {
        self.notes.iter().map(|&n| pitch_name(n)).collect()
    }
}
