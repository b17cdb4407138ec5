use lagoon_core::{Pos, Tag};

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];
const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];
const POSSESSIVES: &[&str] = &["my", "your", "his", "its", "our", "their"];
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
];
const COPULAS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];
const AUXILIARIES: &[&str] = &["do", "does", "did", "have", "has", "had"];
const ADVERBS: &[&str] = &[
    "please", "kindly", "not", "very", "really", "here", "there", "now", "soon", "today",
    "tomorrow", "again",
];
const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];
const PARTICLES: &[&str] = &["to", "of", "in", "on", "at", "for", "with", "from", "about", "and", "or", "but"];

const BASE_VERBS: &[&str] = &[
    "appreciate", "arrive", "ask", "book", "bring", "buy", "call", "cancel", "change", "check",
    "clean", "close", "come", "confirm", "cost", "drink", "eat", "enjoy", "fall", "feel", "find",
    "get", "give", "go", "help", "hope", "know", "leave", "like", "look", "love", "make", "meet",
    "need", "open", "order", "pay", "plan", "play", "prefer", "rain", "read", "relax", "require",
    "ride", "run", "say", "see", "seem", "send", "shine", "show", "sleep", "stay", "stop", "swim",
    "take", "tell", "think", "try", "use", "visit", "wait", "walk", "want", "wish", "work",
    "write",
];

/// Tags one surface word: coarse class, fine tag, lemma. Sentence-initial
/// capitalization is ignored for lexicon lookup; unknown capitalized words
/// elsewhere read as proper nouns.
pub fn tag_word(word: &str, is_first: bool) -> (Pos, Tag, String) {
    let lower = word.to_lowercase();

    if word.chars().all(|ch| !ch.is_alphanumeric()) {
        return (Pos::Other, Tag::Other, lower);
    }
    if word.chars().all(|ch| ch.is_ascii_digit()) {
        return (Pos::Num, Tag::Other, lower);
    }

    match lower.as_str() {
        "what" | "who" | "whom" => return (Pos::Pron, Tag::Wp, lower),
        "which" => return (Pos::Det, Tag::Wdt, lower),
        "whose" => return (Pos::Pron, Tag::WpPoss, lower),
        "where" | "when" | "why" | "how" => return (Pos::Adv, Tag::Wrb, lower),
        "'m" | "'re" => return (Pos::Aux, Tag::Other, "be".to_string()),
        "'ve" => return (Pos::Aux, Tag::Other, "have".to_string()),
        "'ll" => return (Pos::Aux, Tag::Md, "will".to_string()),
        "'d" => return (Pos::Aux, Tag::Md, "would".to_string()),
        "n't" => return (Pos::Adv, Tag::Other, "not".to_string()),
        "'s" => return (Pos::Other, Tag::Other, lower),
        _ => {}
    }

    if MODALS.contains(&lower.as_str()) {
        return (Pos::Aux, Tag::Md, lower);
    }
    if COPULAS.contains(&lower.as_str()) {
        return (Pos::Aux, Tag::Other, "be".to_string());
    }
    if AUXILIARIES.contains(&lower.as_str()) {
        return (Pos::Aux, Tag::Other, lower);
    }
    if PERSONAL_PRONOUNS.contains(&lower.as_str()) {
        return (Pos::Pron, Tag::Prp, lower);
    }
    if POSSESSIVES.contains(&lower.as_str()) {
        return (Pos::Det, Tag::PrpPoss, lower);
    }
    if DETERMINERS.contains(&lower.as_str()) {
        return (Pos::Det, Tag::Other, lower);
    }
    if ADVERBS.contains(&lower.as_str()) {
        return (Pos::Adv, Tag::Other, lower);
    }
    if NUMBER_WORDS.contains(&lower.as_str()) {
        return (Pos::Num, Tag::Other, lower);
    }
    if PARTICLES.contains(&lower.as_str()) {
        return (Pos::Other, Tag::Other, lower);
    }
    if BASE_VERBS.contains(&lower.as_str()) {
        return (Pos::Verb, Tag::Vb, lower);
    }
    if let Some(base) = inflected_base(&lower) {
        return (Pos::Verb, Tag::Other, base);
    }

    if !is_first && word.chars().next().is_some_and(char::is_uppercase) {
        return (Pos::Propn, Tag::Other, lower);
    }

    (Pos::Noun, Tag::Other, lower)
}

// Strips -s/-es/-ed/-ing and resolves against the base-verb list, restoring
// a dropped final "e" where needed ("shining" -> "shine").
fn inflected_base(lower: &str) -> Option<String> {
    let candidates = [
        lower.strip_suffix("ies").map(|stem| format!("{stem}y")),
        lower.strip_suffix("es").map(str::to_string),
        lower.strip_suffix('s').map(str::to_string),
        lower.strip_suffix("ed").map(str::to_string),
        lower.strip_suffix("ed").map(|stem| format!("{stem}e")),
        lower.strip_suffix("ing").map(str::to_string),
        lower.strip_suffix("ing").map(|stem| format!("{stem}e")),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|base| BASE_VERBS.contains(&base.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wh_words_get_wh_tags() {
        assert_eq!(tag_word("What", true).1, Tag::Wp);
        assert_eq!(tag_word("whose", true).1, Tag::WpPoss);
        assert_eq!(tag_word("How", true).1, Tag::Wrb);
        assert_eq!(tag_word("which", true).1, Tag::Wdt);
    }

    #[test]
    fn modals_and_clitics_read_as_modal_auxiliaries() {
        assert_eq!(tag_word("Could", true), (Pos::Aux, Tag::Md, "could".to_string()));
        assert_eq!(tag_word("'d", false), (Pos::Aux, Tag::Md, "would".to_string()));
    }

    #[test]
    fn base_verbs_keep_the_bare_infinitive_tag() {
        assert_eq!(tag_word("bring", true), (Pos::Verb, Tag::Vb, "bring".to_string()));
        assert_eq!(tag_word("swim", false).1, Tag::Vb);
    }

    #[test]
    fn inflections_resolve_to_the_base_lemma() {
        assert_eq!(tag_word("wants", false), (Pos::Verb, Tag::Other, "want".to_string()));
        assert_eq!(tag_word("shining", false).2, "shine");
        assert_eq!(tag_word("booked", false).2, "book");
    }

    #[test]
    fn unknown_capitalized_words_read_as_proper_nouns() {
        assert_eq!(tag_word("Knysna", false).0, Pos::Propn);
        assert_eq!(tag_word("Towel", true).0, Pos::Noun);
    }
}
