// keychord_theory: the chord model shared by the voicing engine and hosts.
//
// Maps chord qualities to interval sets and projects them onto a root to get
// the chord's pitch classes. Also parses chord symbols ("Am/E", "G7") into
// `ChordIntent` values for hosts that take text input. Pure data, no I/O.
//
// Module overview:
// - `quality.rs`: `Quality` enum, interval tables, symbol suffixes.
// - `chord.rs`:   `ChordIntent`, `pitch_classes()`, chord-symbol parsing.
// - `pitch.rs`:   Pitch-class arithmetic and note names.
// - `error.rs`:   `TheoryError` for parse failures.

pub mod chord;
pub mod error;
pub mod pitch;
pub mod quality;

pub use chord::{ChordIntent, pitch_classes};
pub use error::TheoryError;
pub use quality::Quality;
