use tracing::debug;

use crate::matcher::{SequencePattern, TokenCheck};
use crate::models::{Pos, ReplyType, Sentence, Tag};

pub struct SentenceRule {
    pub reply: ReplyType,
    pub pattern: SequencePattern,
}

const WH_TAGS: &[Tag] = &[Tag::Wdt, Tag::Wp, Tag::WpPoss, Tag::Wrb];
const SUBJECT_CLASSES: &[Pos] = &[Pos::Pron, Pos::Propn, Pos::Det];
const WISH_VERBS: &[&str] = &["love", "like", "appreciate"];
const WANT_VERBS: &[&str] = &["want", "need", "require"];

// Rule groups keep their registration order; a sentence matching more than
// one group resolves to the earliest.
const SENTENCE_RULES: &[SentenceRule] = &[
    SentenceRule {
        reply: ReplyType::WhQuestion,
        pattern: SequencePattern {
            steps: &[&[TokenCheck::TagIn(WH_TAGS)]],
        },
    },
    SentenceRule {
        reply: ReplyType::YesNoQuestion,
        pattern: SequencePattern {
            steps: &[
                &[TokenCheck::TagIs(Tag::Md)],
                &[TokenCheck::PosIn(SUBJECT_CLASSES)],
            ],
        },
    },
    SentenceRule {
        reply: ReplyType::YesNoQuestion,
        pattern: SequencePattern {
            steps: &[
                &[TokenCheck::PosIs(Pos::Verb)],
                &[TokenCheck::PosIn(SUBJECT_CLASSES)],
                &[TokenCheck::PosIs(Pos::Verb)],
            ],
        },
    },
    SentenceRule {
        reply: ReplyType::Instruction,
        pattern: SequencePattern {
            steps: &[&[TokenCheck::TagIs(Tag::Vb)]],
        },
    },
    SentenceRule {
        reply: ReplyType::Instruction,
        pattern: SequencePattern {
            steps: &[
                &[TokenCheck::LowerIn(&["please", "kindly"])],
                &[TokenCheck::TagIs(Tag::Vb)],
            ],
        },
    },
    SentenceRule {
        reply: ReplyType::Wish,
        pattern: SequencePattern {
            steps: &[
                &[TokenCheck::TagIs(Tag::Prp)],
                &[TokenCheck::TagIs(Tag::Md)],
                &[TokenCheck::PosIs(Pos::Verb), TokenCheck::LemmaIn(WISH_VERBS)],
            ],
        },
    },
    SentenceRule {
        reply: ReplyType::Wish,
        pattern: SequencePattern {
            steps: &[
                &[TokenCheck::TagIs(Tag::Prp)],
                &[TokenCheck::PosIs(Pos::Verb), TokenCheck::LemmaIn(WANT_VERBS)],
            ],
        },
    },
];

pub fn classify(sentence: &Sentence) -> ReplyType {
    let matched: Vec<ReplyType> = SENTENCE_RULES
        .iter()
        .filter(|rule| rule.pattern.matches(sentence))
        .map(|rule| rule.reply)
        .collect();

    if matched.len() > 1 {
        debug!(
            count = matched.len(),
            winner = ?matched[0],
            "sentence matched several type rules"
        );
    }

    matched.first().copied().unwrap_or(ReplyType::Generic)
}
