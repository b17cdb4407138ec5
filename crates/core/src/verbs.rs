use tracing::debug;

use crate::matcher::{DepPattern, TokenCheck};
use crate::models::{Pos, Sentence, Tag, VerbPhraseSpan};

// Evaluated in order; the first structural match supplies the span.
const VERB_PATTERNS: &[DepPattern] = &[
    // modal + bare infinitive hanging off the root: "I would like to stay"
    DepPattern {
        child_slots: &[&[TokenCheck::TagIs(Tag::Vb)], &[TokenCheck::TagIs(Tag::Md)]],
    },
    // auxiliary + root: "the sun is shining"
    DepPattern {
        child_slots: &[&[TokenCheck::PosIs(Pos::Aux)]],
    },
    // bare root
    DepPattern { child_slots: &[] },
];

pub fn extract_verb_phrase(sentence: &Sentence) -> VerbPhraseSpan {
    let matches: Vec<Vec<usize>> = VERB_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.find(sentence))
        .collect();

    if matches.len() > 1 {
        debug!(
            count = matches.len(),
            "verb phrase matcher found competing matches"
        );
    }

    match matches.into_iter().next() {
        Some(indices) => VerbPhraseSpan::new(indices),
        None => VerbPhraseSpan::empty(),
    }
}
