// End-to-end properties of the voice-leading engine over every chord the
// chord model knows, driven through the public API only.

use keychord_voicing::{
    ChordIntent, Quality, Voicing, VoicingConfig, candidate_voicings, first_voicing,
    movement_cost, pitch_classes, select_voicing, voice_progression,
};

/// Every (root, quality, bass pitch class) combination, bass spelled one
/// octave below the default register so the engine has to relocate it.
fn all_intents() -> Vec<ChordIntent> {
    let mut intents = Vec::new();
    for root in 0..12u8 {
        for quality in Quality::ALL {
            for bass_pc in 0..12u8 {
                intents.push(ChordIntent::new(root, 36 + bass_pc, quality));
            }
        }
    }
    intents
}

fn assert_well_formed(voicing: &Voicing, target: &ChordIntent, config: &VoicingConfig) {
    assert_eq!(voicing.notes.len(), config.voice_count);
    assert_eq!(voicing.notes[0], voicing.bass);
    assert_eq!(voicing.bass % 12, target.bass % 12);
    assert_eq!(voicing.root, target.root);
    assert_eq!(voicing.quality, target.quality);
    assert!(
        voicing.notes.iter().all(|&n| config.in_register(n)),
        "{} out of register: {:?}",
        target.symbol(),
        voicing.notes
    );
    assert!(
        voicing.covers(&target.pitch_classes()),
        "{} missing chord tones: {:?}",
        target.symbol(),
        voicing.notes
    );
}

#[test]
fn first_voicing_is_well_formed_for_every_chord() {
    let config = VoicingConfig::default();
    for target in all_intents() {
        let voicing = select_voicing(&target, None, &config);
        assert_well_formed(&voicing, &target, &config);
    }
}

#[test]
fn bass_in_register_is_kept_as_is() {
    let config = VoicingConfig::default();
    for root in 0..12u8 {
        let target = ChordIntent::new(root, 48 + root, Quality::Major);
        assert_eq!(select_voicing(&target, None, &config).notes[0], target.bass);
    }
}

#[test]
fn led_voicings_are_well_formed_and_optimal() {
    let config = VoicingConfig::default();
    let previous = select_voicing(&ChordIntent::new(0, 48, Quality::Major), None, &config);
    for target in all_intents() {
        let voicing = select_voicing(&target, Some(&previous), &config);
        assert_well_formed(&voicing, &target, &config);

        let chosen = movement_cost(&previous.notes, &voicing.notes);
        let candidates = candidate_voicings(target.bass, &target.pitch_classes(), &config);
        for candidate in &candidates {
            assert!(chosen <= movement_cost(&previous.notes, candidate));
        }
    }
}

#[test]
fn repeating_the_same_chord_costs_nothing() {
    let config = VoicingConfig::default();
    let start = select_voicing(&ChordIntent::new(0, 48, Quality::Major), None, &config);
    for target in all_intents() {
        let once = select_voicing(&target, Some(&start), &config);
        let twice = select_voicing(&target, Some(&once), &config);
        assert_eq!(movement_cost(&once.notes, &twice.notes), 0, "{}", target.symbol());
    }
}

#[test]
fn c_major_to_a_minor_beats_spread() {
    let config = VoicingConfig::default();
    let previous = Voicing {
        notes: vec![48, 64, 67, 72, 76],
        bass: 48,
        root: 0,
        quality: Quality::Major,
        extension: None,
    };
    let target = ChordIntent::new(9, 45, Quality::Minor);
    let voicing = select_voicing(&target, Some(&previous), &config);

    assert_eq!(voicing.notes[0], 57);
    let spread = first_voicing(target.bass, &pitch_classes(9, Quality::Minor), &config);
    assert!(
        movement_cost(&previous.notes, &voicing.notes) <= movement_cost(&previous.notes, &spread)
    );
}

#[test]
fn progression_from_symbols_never_loses_to_spread() {
    let config = VoicingConfig::default();
    let intents: Vec<ChordIntent> = ["C", "Am", "Dm7", "G7", "Cmaj7"]
        .iter()
        .map(|s| ChordIntent::parse(s, config.min_note).unwrap())
        .collect();
    let voicings = voice_progression(&intents, None, &config);
    assert_eq!(voicings.len(), intents.len());
    for (voicing, intent) in voicings.iter().zip(&intents) {
        assert_well_formed(voicing, intent, &config);
    }
    // Wherever the spread voicing is itself a candidate (a rising chain),
    // leading never does worse than jumping to it.
    for (pair, intent) in voicings.windows(2).zip(&intents[1..]) {
        let spread = first_voicing(intent.bass, &intent.pitch_classes(), &config);
        if spread.windows(2).all(|w| w[0] < w[1]) {
            assert!(
                movement_cost(&pair[0].notes, &pair[1].notes)
                    <= movement_cost(&pair[0].notes, &spread)
            );
        }
    }
}

#[test]
fn custom_register_and_voice_count() {
    let config = VoicingConfig::from_json(r#"{"min_note": 40, "max_note": 76, "voice_count": 4}"#)
        .unwrap();
    let intents: Vec<ChordIntent> = ["Em", "C/E", "D/F#", "G"]
        .iter()
        .map(|s| ChordIntent::parse(s, config.min_note).unwrap())
        .collect();
    let basses: Vec<u8> = intents.iter().map(|i| i.bass).collect();
    assert_eq!(basses, vec![40, 40, 42, 43]);

    let voicings = voice_progression(&intents, None, &config);
    for (voicing, intent) in voicings.iter().zip(&intents) {
        assert_well_formed(voicing, intent, &config);
    }
    assert_eq!(voicings[2].bass, 42);
    assert_eq!(voicings[3].bass % 12, 7);
}

#[test]
fn voicings_serialize_as_json() {
    let config = VoicingConfig::default();
    let target = ChordIntent::parse("G7(b9)/B", config.min_note).unwrap();
    let voicing = select_voicing(&target, None, &config);
    let json = serde_json::to_value(&voicing).unwrap();
    assert_eq!(json["quality"], "7");
    assert_eq!(json["extension"], "b9");
    assert_eq!(json["bass"], 59);
    let back: Voicing = serde_json::from_value(json).unwrap();
    assert_eq!(back, voicing);
}
