// Pitches, pitch classes, and note names.
//
// A pitch is a MIDI note number (60 = middle C = C4). A pitch class is a
// pitch mod 12 (0 = C, 1 = C#, ..., 11 = B). Names use sharps for black keys
// except Eb, Ab and Bb, which read more naturally in chord charts.

use crate::error::TheoryError;

/// Highest valid MIDI pitch.
pub const MAX_PITCH: u8 = 127;

const PC_NAMES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Pitch class (0-11) of a MIDI pitch.
pub fn pitch_class(pitch: u8) -> u8 {
    pitch % 12
}

/// Name of a pitch class without octave ("C", "F#", "Bb").
pub fn pitch_class_name(pc: u8) -> &'static str {
    PC_NAMES[(pc % 12) as usize]
}

/// Name of a MIDI pitch with scientific octave number ("C4" for 60).
pub fn pitch_name(pitch: u8) -> String {
    let octave = pitch as i16 / 12 - 1;
    format!("{}{}", pitch_class_name(pitch), octave)
}

/// Parse a note name ("C", "F#", "Bb", "Ebb") into a pitch class.
///
/// Accepts any number of `#`/`♯` and `b`/`♭` accidentals after the letter.
pub fn parse_note_name(name: &str) -> Result<u8, TheoryError> {
    let mut chars = name.chars();
    let letter = chars.next().ok_or(TheoryError::EmptyNote)?;
    let natural: i16 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(TheoryError::UnknownNote(name.to_string())),
    };
    let mut offset: i16 = 0;
    for c in chars {
        match c {
            '#' | '♯' => offset += 1,
            'b' | '♭' => offset -= 1,
            _ => return Err(TheoryError::UnknownNote(name.to_string())),
        }
    }
    Ok((natural + offset).rem_euclid(12) as u8)
}

/// Absolute distance in semitones between two pitches.
pub fn distance(a: u8, b: u8) -> u32 {
    (a as i32 - b as i32).unsigned_abs()
}
