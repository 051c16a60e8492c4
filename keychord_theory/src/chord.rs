// Chord intents: what the player asked for, before it is voiced.
//
// A `ChordIntent` names a root pitch class, a bass pitch, a quality, and an
// optional extension label. The bass may be any chord member or even a
// non-chord tone (slash chords such as C/Bb); the voicing engine places it in
// register and builds the upper voices from the chord's pitch classes.
//
// Symbol grammar accepted by `ChordIntent::parse`:
//
//   <root>[<quality suffix>][(<extension>)][/<bass>]
//
// e.g. "C", "Am/E", "F#m7b5", "G7(b9)", "Cmaj7/B". The extension is a label
// carried through to the voicing for display and does not change pitch
// content.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TheoryError;
use crate::pitch::{MAX_PITCH, parse_note_name, pitch_class, pitch_class_name};
use crate::quality::Quality;

/// Pitch classes of a chord: `(root + interval) mod 12` for each interval of
/// the quality, root first, without duplicates.
pub fn pitch_classes(root: u8, quality: Quality) -> Vec<u8> {
    let mut pcs: Vec<u8> = Vec::with_capacity(quality.intervals().len());
    for &interval in quality.intervals() {
        let pc = (root % 12 + interval) % 12;
        if !pcs.contains(&pc) {
            pcs.push(pc);
        }
    }
    pcs
}

/// The chord a caller wants voiced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordIntent {
    /// Root pitch class (0 = C). Reduced mod 12 on construction and on
    /// deserialization.
    #[serde(deserialize_with = "root_pitch_class")]
    pub root: u8,
    /// Bass pitch (MIDI). Only its pitch class matters to the engine, which
    /// relocates it into the playable register.
    pub bass: u8,
    pub quality: Quality,
    /// Display label such as "add9" or "b9".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl ChordIntent {
    pub fn new(root: u8, bass: u8, quality: Quality) -> Self {
        ChordIntent {
            root: root % 12,
            bass,
            quality,
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Pitch classes of this chord (see [`pitch_classes`]).
    pub fn pitch_classes(&self) -> Vec<u8> {
        pitch_classes(self.root, self.quality)
    }

    /// True if the bass is not the root (an inversion or slash chord).
    pub fn is_inverted(&self) -> bool {
        pitch_class(self.bass) != self.root
    }

    /// Parse a chord symbol. The bass pitch is the lowest pitch of the bass
    /// pitch class at or above `bass_base` (typically the bottom of the
    /// playable register). When that lands above 127 it drops by octaves.
    pub fn parse(symbol: &str, bass_base: u8) -> Result<Self, TheoryError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(TheoryError::EmptySymbol);
        }

        let (head, bass_name) = match symbol.rsplit_once('/') {
            Some((_, bass)) if bass.trim().is_empty() => {
                return Err(TheoryError::MissingBass(symbol.to_string()));
            }
            Some((head, bass)) => (head, Some(bass.trim())),
            None => (symbol, None),
        };

        // Root letter plus any accidentals.
        let root_len = head
            .char_indices()
            .skip(1)
            .find(|&(_, c)| !matches!(c, '#' | 'b' | '♯' | '♭'))
            .map(|(i, _)| i)
            .unwrap_or(head.len());
        let root = parse_note_name(&head[..root_len])?;
        let (quality, extension) = split_suffix(&head[root_len..], symbol)?;

        let bass_pc = match bass_name {
            Some(name) => parse_note_name(name)?,
            None => root,
        };
        let bass = spell_bass(bass_base, bass_pc);

        Ok(ChordIntent {
            root,
            bass,
            quality,
            extension,
        })
    }

    /// Chord symbol for display, e.g. "Am/E" or "G7(b9)".
    pub fn symbol(&self) -> String {
        let mut out = format!("{}{}", pitch_class_name(self.root), self.quality.symbol());
        if let Some(ext) = &self.extension {
            out.push('(');
            out.push_str(ext);
            out.push(')');
        }
        if self.is_inverted() {
            out.push('/');
            out.push_str(pitch_class_name(self.bass));
        }
        out
    }
}

/// Lowest pitch of class `pc` at or above `base`, octave-dropped into 0..=127.
fn spell_bass(base: u8, pc: u8) -> u8 {
    let base = u16::from(base);
    let up = (u16::from(pc % 12) + 12 - base % 12) % 12;
    let mut pitch = base + up;
    while pitch > u16::from(MAX_PITCH) {
        pitch -= 12;
    }
    pitch as u8
}

/// Deserialize a root as a pitch class, reducing any octave.
fn root_pitch_class<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u8::deserialize(deserializer)? % 12)
}

/// Split the text after the root into a quality and an optional extension.
fn split_suffix(suffix: &str, symbol: &str) -> Result<(Quality, Option<String>), TheoryError> {
    // Some quality spellings contain parentheses themselves ("m(maj7)").
    if let Some(quality) = Quality::try_from_symbol(suffix) {
        return Ok((quality, None));
    }
    match suffix.find('(') {
        Some(open) => {
            let inner = suffix[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| TheoryError::UnterminatedExtension(symbol.to_string()))?;
            let extension = (!inner.is_empty()).then(|| inner.to_string());
            Ok((Quality::from_symbol(&suffix[..open]), extension))
        }
        None => Ok((Quality::from_symbol(suffix), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_classes_c_major() {
        assert_eq!(pitch_classes(0, Quality::Major), vec![0, 4, 7]);
    }

    #[test]
    fn test_pitch_classes_wrap() {
        // A minor: A C E
        assert_eq!(pitch_classes(9, Quality::Minor), vec![9, 0, 4]);
        // B dominant seventh: B D# F# A
        assert_eq!(pitch_classes(11, Quality::DominantSeventh), vec![11, 3, 6, 9]);
    }

    #[test]
    fn test_pitch_classes_always_valid() {
        for root in 0..12 {
            for quality in Quality::ALL {
                let pcs = pitch_classes(root, quality);
                assert!(!pcs.is_empty());
                assert!(pcs.iter().all(|&pc| pc < 12));
                assert_eq!(pcs[0], root);
                let mut sorted = pcs.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), pcs.len());
            }
        }
    }

    #[test]
    fn test_parse_plain_and_minor() {
        let c = ChordIntent::parse("C", 48).unwrap();
        assert_eq!(c, ChordIntent::new(0, 48, Quality::Major));

        let am = ChordIntent::parse("Am", 48).unwrap();
        assert_eq!(am.root, 9);
        assert_eq!(am.bass, 57);
        assert_eq!(am.quality, Quality::Minor);
        assert!(!am.is_inverted());
    }

    #[test]
    fn test_parse_slash_chord() {
        let chord = ChordIntent::parse("Am/E", 48).unwrap();
        assert_eq!(chord.root, 9);
        assert_eq!(chord.bass, 52);
        assert!(chord.is_inverted());
        assert_eq!(chord.symbol(), "Am/E");
    }

    #[test]
    fn test_parse_accidentals_and_extension() {
        let chord = ChordIntent::parse("F#m7b5", 48).unwrap();
        assert_eq!(chord.root, 6);
        assert_eq!(chord.quality, Quality::HalfDiminished);

        let chord = ChordIntent::parse("Bbmaj7(add13)/D", 48).unwrap();
        assert_eq!(chord.root, 10);
        assert_eq!(chord.quality, Quality::MajorSeventh);
        assert_eq!(chord.extension.as_deref(), Some("add13"));
        assert_eq!(chord.bass, 50);

        let chord = ChordIntent::parse("Cm(maj7)", 48).unwrap();
        assert_eq!(chord.quality, Quality::MinorMajorSeventh);
        assert_eq!(chord.extension, None);
    }

    #[test]
    fn test_parse_unknown_quality_is_major() {
        let chord = ChordIntent::parse("Dwhatever", 48).unwrap();
        assert_eq!(chord.root, 2);
        assert_eq!(chord.quality, Quality::Major);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ChordIntent::parse("  ", 48), Err(TheoryError::EmptySymbol));
        assert!(matches!(
            ChordIntent::parse("Xm", 48),
            Err(TheoryError::UnknownNote(_))
        ));
        assert!(matches!(
            ChordIntent::parse("C/", 48),
            Err(TheoryError::MissingBass(_))
        ));
        assert!(matches!(
            ChordIntent::parse("C7(b9", 48),
            Err(TheoryError::UnterminatedExtension(_))
        ));
    }

    #[test]
    fn test_intent_serde() {
        let chord = ChordIntent::new(7, 55, Quality::DominantSeventh).with_extension("b9");
        let json = serde_json::to_string(&chord).unwrap();
        assert_eq!(json, r#"{"root":7,"bass":55,"quality":"7","extension":"b9"}"#);
        let back: ChordIntent = serde_json::from_str(r#"{"root":7,"bass":55,"quality":"7"}"#)
            .unwrap();
        assert_eq!(back, ChordIntent::new(7, 55, Quality::DominantSeventh));
    }

    #[test]
    fn test_intent_root_reduced_on_deserialize() {
        let chord: ChordIntent =
            serde_json::from_str(r#"{"root":14,"bass":50,"quality":"m"}"#).unwrap();
        assert_eq!(chord.root, 2);
        assert!(!chord.is_inverted());
        assert_eq!(chord, ChordIntent::new(14, 50, Quality::Minor));
        assert_eq!(chord.symbol(), "Dm");
    }

    #[test]
    fn test_parse_bass_from_off_c_base() {
        // E2 as the base: C is the next C up, not E + 0.
        let c = ChordIntent::parse("C", 40).unwrap();
        assert_eq!(c.bass, 48);
        assert!(!c.is_inverted());

        let d = ChordIntent::parse("D/F#", 40).unwrap();
        assert_eq!(d.bass, 42);
        assert_eq!(d.bass % 12, 6);

        let e = ChordIntent::parse("Em", 40).unwrap();
        assert_eq!(e.bass, 40);

        for symbol in ["C", "C/E", "G", "Am/E", "Bb", "F#m"] {
            let chord = ChordIntent::parse(symbol, 41).unwrap();
            assert!(chord.bass >= 41 && chord.bass < 41 + 12, "{symbol}");
        }
    }

    #[test]
    fn test_parse_bass_near_top_drops_an_octave() {
        let c = ChordIntent::parse("C", 125).unwrap();
        assert_eq!(c.bass, 120);
        assert_eq!(c.bass % 12, 0);

        let g = ChordIntent::parse("G", 125).unwrap();
        assert_eq!(g.bass, 127);

        let f = ChordIntent::parse("F", 125).unwrap();
        assert_eq!(f.bass, 125);

        for root in 0..12u8 {
            let symbol = pitch_class_name(root);
            let chord = ChordIntent::parse(symbol, 255).unwrap();
            assert!(chord.bass <= MAX_PITCH);
            assert_eq!(chord.bass % 12, root);
        }
    }
}
