pub mod classify;
pub mod dispatch;
pub mod matcher;
pub mod models;
pub mod pov;
pub mod reply;
pub mod verbs;

pub use classify::classify;
pub use dispatch::compose_reply;
pub use models::*;
pub use pov::PovRewriter;
pub use reply::{reply_for, ChoiceSource, FirstChoice, RandomChoice};
pub use verbs::extract_verb_phrase;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Dep, NounChunk, Pos, Sentence, Tag, Token};

    pub fn tok(
        i: usize,
        text: &str,
        pos: Pos,
        tag: Tag,
        dep: Dep,
        head: usize,
    ) -> Token {
        Token {
            text: text.to_string(),
            lower: text.to_lowercase(),
            lemma: text.to_lowercase(),
            pos,
            tag,
            dep,
            head,
            is_sent_start: i == 0,
            i,
        }
    }

    pub fn chunk(start: usize, end: usize, root_dep: Dep, text: &str) -> NounChunk {
        NounChunk {
            start,
            end,
            root_dep,
            text: text.to_string(),
        }
    }

    /// "What is your name?" with the structure the annotation pipeline
    /// produces: copular root, possessive subject chunk.
    pub fn wh_question() -> Sentence {
        Sentence {
            tokens: vec![
                tok(0, "What", Pos::Pron, Tag::Wp, Dep::Other, 1),
                tok(1, "is", Pos::Aux, Tag::Other, Dep::Root, 1),
                tok(2, "your", Pos::Det, Tag::PrpPoss, Dep::Other, 3),
                tok(3, "name", Pos::Noun, Tag::Other, Dep::Nsubj, 1),
                tok(4, "?", Pos::Other, Tag::Other, Dep::Other, 1),
            ],
            chunks: vec![chunk(2, 4, Dep::Nsubj, "your name")],
            text: "What is your name?".to_string(),
        }
    }

    /// "Can you swim?"
    pub fn yes_no_question() -> Sentence {
        Sentence {
            tokens: vec![
                tok(0, "Can", Pos::Aux, Tag::Md, Dep::Aux, 2),
                tok(1, "you", Pos::Pron, Tag::Prp, Dep::Nsubj, 2),
                tok(2, "swim", Pos::Verb, Tag::Vb, Dep::Root, 2),
                tok(3, "?", Pos::Other, Tag::Other, Dep::Other, 2),
            ],
            chunks: vec![chunk(1, 2, Dep::Nsubj, "you")],
            text: "Can you swim?".to_string(),
        }
    }

    /// "Please bring two towels."
    pub fn instruction() -> Sentence {
        Sentence {
            tokens: vec![
                tok(0, "Please", Pos::Adv, Tag::Other, Dep::Other, 1),
                tok(1, "bring", Pos::Verb, Tag::Vb, Dep::Root, 1),
                tok(2, "two", Pos::Num, Tag::Other, Dep::Other, 3),
                tok(3, "towels", Pos::Noun, Tag::Other, Dep::Dobj, 1),
                tok(4, ".", Pos::Other, Tag::Other, Dep::Other, 1),
            ],
            chunks: vec![chunk(2, 4, Dep::Dobj, "two towels")],
            text: "Please bring two towels.".to_string(),
        }
    }

    /// "I would like a sea view room."
    pub fn wish() -> Sentence {
        Sentence {
            tokens: vec![
                tok(0, "I", Pos::Pron, Tag::Prp, Dep::Nsubj, 2),
                tok(1, "would", Pos::Aux, Tag::Md, Dep::Aux, 2),
                tok(2, "like", Pos::Verb, Tag::Vb, Dep::Root, 2),
                tok(3, "a", Pos::Det, Tag::Other, Dep::Other, 6),
                tok(4, "sea", Pos::Noun, Tag::Other, Dep::Other, 6),
                tok(5, "view", Pos::Noun, Tag::Other, Dep::Other, 6),
                tok(6, "room", Pos::Noun, Tag::Other, Dep::Dobj, 2),
                tok(7, ".", Pos::Other, Tag::Other, Dep::Other, 2),
            ],
            chunks: vec![
                chunk(0, 1, Dep::Nsubj, "I"),
                chunk(3, 7, Dep::Dobj, "a sea view room"),
            ],
            text: "I would like a sea view room.".to_string(),
        }
    }

    /// "The sun is shining." matches no sentence-type rule.
    pub fn statement() -> Sentence {
        Sentence {
            tokens: vec![
                tok(0, "The", Pos::Det, Tag::Other, Dep::Other, 1),
                tok(1, "sun", Pos::Noun, Tag::Other, Dep::Nsubj, 3),
                tok(2, "is", Pos::Aux, Tag::Other, Dep::Aux, 3),
                tok(3, "shining", Pos::Verb, Tag::Other, Dep::Root, 3),
                tok(4, ".", Pos::Other, Tag::Other, Dep::Other, 3),
            ],
            chunks: vec![chunk(0, 2, Dep::Nsubj, "The sun")],
            text: "The sun is shining.".to_string(),
        }
    }
}
