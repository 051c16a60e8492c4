// Candidate voicings for the voice-leading search.
//
// A candidate pins the bass to the lowest in-register pitch of its class and
// stacks the upper voices as a strictly rising chain of chord tones, each at
// most `max_note`. The search is a depth-first walk over octave-shifted chord
// tones, tried in ascending pitch order at every depth, so the output order
// is fixed for a given input and "first encountered" is a well-defined
// tie-break for the selector.
//
// Branches are pruned when the remaining voices can no longer fit under the
// ceiling or can no longer pick up the chord tones still missing. Completed
// chains that leave out a chord tone are discarded.
//
// `for_each_candidate` hands each completed chain to a visitor as soon as it
// is found, so the selector can score as it goes and stop early without
// holding the whole set. `candidate_voicings` collects the same sequence.

use std::ops::ControlFlow;

use tracing::trace;

use crate::config::VoicingConfig;

/// Every rising, in-register, chord-covering voicing over the given bass.
///
/// Empty when the register above the bass is too small for the chain, or
/// when there are more chord tones than upper voices to carry them.
pub fn candidate_voicings(bass: u8, pitch_classes: &[u8], config: &VoicingConfig) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    for_each_candidate(bass, pitch_classes, config, |chain| {
        out.push(chain.to_vec());
        ControlFlow::Continue(())
    });
    out
}

/// Visit the candidates of [`candidate_voicings`] in the same order without
/// collecting them. The walk stops as soon as `visit` breaks.
pub fn for_each_candidate<F>(bass: u8, pitch_classes: &[u8], config: &VoicingConfig, mut visit: F)
where
    F: FnMut(&[u8]) -> ControlFlow<()>,
{
    if pitch_classes.is_empty() || config.voice_count == 0 {
        return;
    }
    let Some(bass_pitch) = config.lowest_in_register(bass % 12) else {
        return;
    };

    let mut in_chord = [false; 12];
    for &pc in pitch_classes {
        in_chord[(pc % 12) as usize] = true;
    }

    let search = ChainSearch {
        in_chord,
        max_note: config.max_note,
        voice_count: config.voice_count,
    };
    let mut chain = Vec::with_capacity(config.voice_count);
    chain.push(bass_pitch);

    let mut visited = 0usize;
    let flow = search.extend(&mut chain, &mut |candidate: &[u8]| {
        visited += 1;
        visit(candidate)
    });

    trace!(
        bass = bass_pitch,
        visited,
        stopped_early = flow.is_break(),
        "walked candidate voicings"
    );
}

struct ChainSearch {
    in_chord: [bool; 12],
    max_note: u8,
    voice_count: usize,
}

impl ChainSearch {
    fn extend<F>(&self, chain: &mut Vec<u8>, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&[u8]) -> ControlFlow<()>,
    {
        let remaining = self.voice_count.saturating_sub(chain.len());
        let missing = self.missing_tones(chain);
        if missing > remaining {
            return ControlFlow::Continue(());
        }
        if remaining == 0 {
            return visit(chain);
        }

        let last = chain[chain.len() - 1] as usize;
        // Leave room for the voices after this one, each a semitone higher.
        let ceiling = (self.max_note as usize + 1).saturating_sub(remaining);
        for pitch in last + 1..=ceiling {
            if !self.in_chord[pitch % 12] {
                continue;
            }
            chain.push(pitch as u8);
            let flow = self.extend(chain, visit);
            chain.pop();
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }

    /// Chord tones not yet sounding anywhere in the chain.
    fn missing_tones(&self, chain: &[u8]) -> usize {
        let mut present = [false; 12];
        for &pitch in chain {
            present[(pitch % 12) as usize] = true;
        }
        (0..12)
            .filter(|&pc| self.in_chord[pc] && !present[pc])
            .count()
    }
}
