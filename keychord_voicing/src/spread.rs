// Default "spread" voicing, used when there is nothing to lead from.
//
// The bass goes at the lowest in-register pitch of its class. Each upper
// voice then aims roughly a major third above the voice below it and snaps
// to the nearest pitch of the chord tone it is responsible for. Chord tones
// are dealt out by voice index (voice i takes `pitch_classes[i % len]`), so
// with at least as many upper voices as chord tones every tone is present.
//
// Also the fallback when the candidate search in `candidates.rs` comes up
// empty, so it must always produce `voice_count` in-register pitches.

use crate::config::VoicingConfig;

/// Spacing each upper voice aims for above the voice below it.
const SPREAD_STEP: i16 = 4;

/// How far from the aimed-for pitch a voice may snap.
const SNAP_WINDOW: i16 = 6;

/// Build a deterministic, evenly spread voicing for a bass pitch and chord.
pub fn first_voicing(bass: u8, pitch_classes: &[u8], config: &VoicingConfig) -> Vec<u8> {
    let bass_pitch = config
        .lowest_in_register(bass % 12)
        .unwrap_or_else(|| config.fold_into_register(bass));

    let bass_only = [bass % 12];
    let pcs = if pitch_classes.is_empty() {
        &bass_only[..]
    } else {
        pitch_classes
    };

    let mut notes = Vec::with_capacity(config.voice_count);
    notes.push(bass_pitch);
    for voice in 1..config.voice_count {
        let below = notes[voice - 1] as i16;
        let pc = pcs[voice % pcs.len()] % 12;
        let snapped = nearest_of_class(below + SPREAD_STEP, pc);
        notes.push(fold_under_ceiling(snapped, config));
    }
    notes
}

/// The pitch of class `pc` closest to `target`, within the snap window. Ties
/// go to the lower pitch.
fn nearest_of_class(target: i16, pc: u8) -> i16 {
    (target - SNAP_WINDOW..=target + SNAP_WINDOW)
        .filter(|p| p.rem_euclid(12) == pc as i16)
        .min_by_key(|p| (p - target).abs())
        .unwrap_or(target)
}

fn fold_under_ceiling(mut pitch: i16, config: &VoicingConfig) -> u8 {
    while pitch > config.max_note as i16 {
        pitch -= 12;
    }
    while pitch < config.min_note as i16 {
        pitch += 12;
    }
    pitch.clamp(0, 127) as u8
}
