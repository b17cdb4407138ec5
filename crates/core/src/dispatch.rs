use crate::classify::classify;
use crate::models::Sentence;
use crate::pov::PovRewriter;
use crate::reply::{reply_for, ChoiceSource};
use crate::verbs::extract_verb_phrase;

/// One reply fragment per sentence, concatenated with no separator.
/// No sentences means an empty reply, not an error.
pub fn compose_reply(
    sentences: &[Sentence],
    pov: &PovRewriter,
    choice: &dyn ChoiceSource,
) -> String {
    let mut reply = String::new();
    for sentence in sentences {
        let verbs = extract_verb_phrase(sentence);
        let kind = classify(sentence);
        reply.push_str(&reply_for(kind, sentence, &verbs, pov, choice));
    }
    reply
}
