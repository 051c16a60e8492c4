// Voicing selection: the engine's entry point.
//
// `select_voicing` is a pure function of (target, previous, config). With no
// previous voicing it returns the spread voicing from `spread.rs`. Otherwise
// it walks the candidates (`candidates.rs`), scoring each as it is found
// (`cost.rs`) and keeping the one with the least movement, the earliest
// candidate winning ties. The walk stops once a candidate's upper voices
// don't move at all, since nothing can beat it. An empty candidate set falls
// back to the spread voicing, so selection never fails.
//
// Nothing is remembered between calls. Hosts that voice a stream of chords
// thread the previous result back in themselves, or use `voice_progression`.

use std::ops::ControlFlow;

use keychord_theory::ChordIntent;
use keychord_theory::pitch::distance;
use tracing::{debug, trace};

use crate::candidates::for_each_candidate;
use crate::config::VoicingConfig;
use crate::cost::movement_cost;
use crate::spread::first_voicing;
use crate::voicing::Voicing;

/// Voice `target`, moving as little as possible from `previous`.
pub fn select_voicing(
    target: &ChordIntent,
    previous: Option<&Voicing>,
    config: &VoicingConfig,
) -> Voicing {
    let pcs = target.pitch_classes();

    let previous = match previous {
        Some(previous) if !previous.is_empty() => previous,
        _ => return Voicing::from_notes(first_voicing(target.bass, &pcs, config), target),
    };

    let mut best: Option<(u32, Vec<u8>)> = None;
    for_each_candidate(target.bass, &pcs, config, |candidate| {
        let cost = movement_cost(&previous.notes, candidate);
        if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            best = Some((cost, candidate.to_vec()));
        }
        // Every candidate shares the bass, so its distance is the floor.
        if cost == distance(previous.notes[0], candidate[0]) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    match best {
        Some((cost, notes)) => {
            trace!(chord = %target.symbol(), cost, "selected voicing");
            Voicing::from_notes(notes, target)
        }
        None => {
            debug!(
                chord = %target.symbol(),
                bass = target.bass,
                "no candidate voicings in register, using spread voicing"
            );
            Voicing::from_notes(first_voicing(target.bass, &pcs, config), target)
        }
    }
}

/// Voice a sequence of chords, each led from the one before. `start` is the
/// voicing sounding before the first chord, if any.
pub fn voice_progression(
    intents: &[ChordIntent],
    start: Option<&Voicing>,
    config: &VoicingConfig,
) -> Vec<Voicing> {
    let mut out: Vec<Voicing> = Vec::with_capacity(intents.len());
    for intent in intents {
        let voicing = select_voicing(intent, out.last().or(start), config);
        out.push(voicing);
    }
    out
}
