use rand::seq::IndexedRandom;

use crate::models::{Dep, ReplyType, Sentence, VerbPhraseSpan};
use crate::pov::PovRewriter;

/// Supplies the prefix/suffix picks so tests can pin the phrasing down.
pub trait ChoiceSource: Send + Sync {
    fn choose(&self, options: &[&'static str]) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChoice;

impl ChoiceSource for RandomChoice {
    fn choose(&self, options: &[&'static str]) -> &'static str {
        options.choose(&mut rand::rng()).copied().unwrap_or("")
    }
}

/// Deterministic source: always the first option.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstChoice;

impl ChoiceSource for FirstChoice {
    fn choose(&self, options: &[&'static str]) -> &'static str {
        options.first().copied().unwrap_or("")
    }
}

pub const WH_OPENERS: &[&str] = &["I don't know ", "I can't say "];
pub const WH_CLOSERS: &[&str] = &[
    ", but I'll try to find out for you. Please check in with me again later.",
    ", but perhaps that's something I'd be able to find out for you. Remind me, if I forget.",
    ". I'll see if I can find out, though. Ask me again sometime.",
];
pub const YN_OPENERS: &[&str] = &["I don't know whether ", "I can't say if "];
pub const YN_CLOSERS: &[&str] = &[
    " at this very moment. Let me find out.",
    ". I may have to think about this some more.",
];
pub const ACK_OPENERS: &[&str] = &["Understood: ", "Got it: "];
pub const WISH_CLOSERS: &[&str] = &[" I'll see what I can do.", ""];
pub const INSTRUCTION_CLOSERS: &[&str] = &[
    " What do you think about that?",
    " Thanks for sharing.",
];

pub fn reply_for(
    kind: ReplyType,
    sentence: &Sentence,
    verbs: &VerbPhraseSpan,
    pov: &PovRewriter,
    choice: &dyn ChoiceSource,
) -> String {
    match kind {
        ReplyType::WhQuestion => wh_question_reply(sentence, verbs, pov, choice),
        ReplyType::YesNoQuestion => yes_no_question_reply(sentence, verbs, pov, choice),
        ReplyType::Wish => acknowledged_echo(sentence, pov, choice, WISH_CLOSERS),
        ReplyType::Instruction => acknowledged_echo(sentence, pov, choice, INSTRUCTION_CLOSERS),
        ReplyType::Generic => pov.rewrite(&sentence.text),
    }
}

fn wh_question_reply(
    sentence: &Sentence,
    verbs: &VerbPhraseSpan,
    pov: &PovRewriter,
    choice: &dyn ChoiceSource,
) -> String {
    let body = pov.rewrite(&subject_verb_object(sentence, verbs, true));
    format!(
        "{}{}{}",
        choice.choose(WH_OPENERS),
        body,
        choice.choose(WH_CLOSERS)
    )
}

fn yes_no_question_reply(
    sentence: &Sentence,
    verbs: &VerbPhraseSpan,
    pov: &PovRewriter,
    choice: &dyn ChoiceSource,
) -> String {
    let body = pov.rewrite(&subject_verb_object(sentence, verbs, false));
    format!(
        "{}{}{}",
        choice.choose(YN_OPENERS),
        body,
        choice.choose(YN_CLOSERS)
    )
}

fn acknowledged_echo(
    sentence: &Sentence,
    pov: &PovRewriter,
    choice: &dyn ChoiceSource,
    closers: &[&'static str],
) -> String {
    format!(
        "{}{}{}",
        choice.choose(ACK_OPENERS),
        pov.rewrite(&sentence.text),
        choice.choose(closers)
    )
}

// [wh word] [subject chunk] [verb phrase, lowercased] [object chunk], with
// absent pieces left out entirely.
fn subject_verb_object(sentence: &Sentence, verbs: &VerbPhraseSpan, with_wh: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    if with_wh {
        if let Some(first) = sentence.tokens.first() {
            parts.push(first.lower.clone());
        }
    }

    if let Some(subject) = sentence.chunk_with_role(Dep::Nsubj) {
        parts.push(subject.text.clone());
    }

    let phrase = verbs
        .indices()
        .iter()
        .filter_map(|&index| sentence.tokens.get(index))
        .map(|token| token.lower.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if !phrase.is_empty() {
        parts.push(phrase);
    }

    if let Some(object) = sentence.chunk_with_role(Dep::Dobj) {
        parts.push(object.text.clone());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{instruction, statement, wh_question, wish, yes_no_question};
    use crate::verbs::extract_verb_phrase;

    fn render(kind: ReplyType, sentence: &Sentence) -> String {
        let pov = PovRewriter::new();
        let verbs = extract_verb_phrase(sentence);
        reply_for(kind, sentence, &verbs, &pov, &FirstChoice)
    }

    #[test]
    fn wh_question_hedges_and_defers() {
        let reply = render(ReplyType::WhQuestion, &wh_question());
        assert_eq!(
            reply,
            "I don't know what my name is, but I'll try to find out for you. \
             Please check in with me again later."
        );
    }

    #[test]
    fn yes_no_question_flips_the_subject() {
        let reply = render(ReplyType::YesNoQuestion, &yes_no_question());
        assert_eq!(
            reply,
            "I don't know whether I can swim at this very moment. Let me find out."
        );
    }

    #[test]
    fn wish_echoes_the_whole_sentence() {
        let reply = render(ReplyType::Wish, &wish());
        assert_eq!(
            reply,
            "Understood: you would like a sea view room. I'll see what I can do."
        );
    }

    #[test]
    fn instruction_echo_keeps_its_own_closers() {
        let reply = render(ReplyType::Instruction, &instruction());
        assert_eq!(
            reply,
            "Understood: Please bring two towels. What do you think about that?"
        );
    }

    #[test]
    fn generic_is_the_rewritten_sentence_verbatim() {
        let reply = render(ReplyType::Generic, &statement());
        assert_eq!(reply, "The sun is shining.");
    }

    #[test]
    fn empty_verb_phrase_renders_nothing_for_the_verb_slot() {
        let sentence = wh_question();
        let pov = PovRewriter::new();
        let reply = reply_for(
            ReplyType::WhQuestion,
            &sentence,
            &VerbPhraseSpan::empty(),
            &pov,
            &FirstChoice,
        );
        assert_eq!(
            reply,
            "I don't know what my name, but I'll try to find out for you. \
             Please check in with me again later."
        );
    }

    #[test]
    fn zero_token_sentence_degrades_to_a_near_empty_fragment() {
        let reply = render(ReplyType::Generic, &Sentence::default());
        assert_eq!(reply, "");
    }
}
