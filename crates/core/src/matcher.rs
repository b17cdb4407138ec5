use crate::models::{Pos, Sentence, Tag, Token};

#[derive(Debug, Clone, Copy)]
pub enum TokenCheck {
    TagIs(Tag),
    TagIn(&'static [Tag]),
    PosIs(Pos),
    PosIn(&'static [Pos]),
    LowerIn(&'static [&'static str]),
    LemmaIn(&'static [&'static str]),
}

pub fn token_matches(token: &Token, checks: &[TokenCheck]) -> bool {
    checks.iter().all(|check| match check {
        TokenCheck::TagIs(tag) => token.tag == *tag,
        TokenCheck::TagIn(tags) => tags.contains(&token.tag),
        TokenCheck::PosIs(pos) => token.pos == *pos,
        TokenCheck::PosIn(classes) => classes.contains(&token.pos),
        TokenCheck::LowerIn(words) => words.contains(&token.lower.as_str()),
        TokenCheck::LemmaIn(lemmas) => lemmas.contains(&token.lemma.as_str()),
    })
}

/// Consecutive token predicates anchored at the first token of the sentence.
#[derive(Debug, Clone, Copy)]
pub struct SequencePattern {
    pub steps: &'static [&'static [TokenCheck]],
}

impl SequencePattern {
    pub fn matches(&self, sentence: &Sentence) -> bool {
        if sentence.tokens.len() < self.steps.len() {
            return false;
        }
        self.steps
            .iter()
            .zip(&sentence.tokens)
            .all(|(checks, token)| token_matches(token, checks))
    }
}

/// The root token plus one distinct direct dependent per child slot.
#[derive(Debug, Clone, Copy)]
pub struct DepPattern {
    pub child_slots: &'static [&'static [TokenCheck]],
}

impl DepPattern {
    pub fn find(&self, sentence: &Sentence) -> Option<Vec<usize>> {
        let root = sentence.root_index()?;
        let mut bound = vec![root];
        for checks in self.child_slots {
            let child = sentence
                .children_of(root)
                .find(|token| !bound.contains(&token.i) && token_matches(token, checks))?;
            bound.push(child.i);
        }
        Some(bound)
    }
}
