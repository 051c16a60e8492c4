// keychord_voicing: the voice-leading engine.
//
// Turns a `ChordIntent` (root, bass, quality) plus the previously sounding
// voicing into a new set of concrete pitches, one per voice, that realizes
// the chord inside the playable register while moving the voices as little
// as possible. The engine is stateless: every call is a pure function of its
// arguments, so it is safe to call from any thread.
//
// Architecture:
// - config.rs:     `VoicingConfig` (register bounds, voice count), JSON loading
// - voicing.rs:    `Voicing` output type
// - spread.rs:     `first_voicing()`, the default spread used with no history
// - candidates.rs: `candidate_voicings()` / `for_each_candidate()`, depth-first
//                  enumeration
// - cost.rs:       `movement_cost()` with bass pinned and upper voices matched
//                  by a minimum-cost assignment
// - select.rs:     `select_voicing()` entry point and `voice_progression()`
// - main.rs:       `voice` CLI, voices chord symbols from the command line
//
// The chord model (qualities, pitch classes, symbol parsing) lives in
// `keychord_theory` and is re-exported here for convenience.

pub mod candidates;
pub mod config;
pub mod cost;
pub mod select;
pub mod spread;
pub mod voicing;

pub use candidates::{candidate_voicings, for_each_candidate};
pub use config::{ConfigError, VoicingConfig};
pub use cost::{Assignment, movement_cost, upper_assignment};
pub use keychord_theory::{ChordIntent, Quality, TheoryError, pitch_classes};
pub use select::{select_voicing, voice_progression};
pub use spread::first_voicing;
pub use voicing::Voicing;
