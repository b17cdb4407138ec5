mod lexicon;

use anyhow::Result;
use lagoon_core::{Dep, NounChunk, Pos, Sentence, Tag, Token};
use unicode_segmentation::UnicodeSegmentation;

use lexicon::tag_word;

/// Boundary to the annotation pipeline. Failing to annotate at all is a
/// fatal collaborator failure and propagates to the caller.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>>;
}

/// Deterministic lexicon-driven stand-in for a full tagging/parsing
/// pipeline. It covers the word classes the responder rules look at and
/// hangs every token off a single root, which is all the downstream
/// matchers consume.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconAnnotator;

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>> {
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(annotate_sentence)
            .collect())
    }
}

fn annotate_sentence(text: &str) -> Sentence {
    let words = split_tokens(text);

    let mut tokens: Vec<Token> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let (pos, tag, lemma) = tag_word(word, i == 0);
            Token {
                text: word.clone(),
                lower: word.to_lowercase(),
                lemma,
                pos,
                tag,
                dep: Dep::Other,
                head: 0,
                is_sent_start: i == 0,
                i,
            }
        })
        .collect();

    if tokens.is_empty() {
        return Sentence {
            tokens,
            chunks: Vec::new(),
            text: text.to_string(),
        };
    }

    let root = tokens
        .iter()
        .position(|token| token.pos == Pos::Verb)
        .or_else(|| tokens.iter().position(|token| token.pos == Pos::Aux))
        .unwrap_or(0);

    for token in &mut tokens {
        token.head = root;
        if token.i != root && token.pos == Pos::Aux {
            token.dep = Dep::Aux;
        }
    }
    tokens[root].dep = Dep::Root;

    let chunks = detect_chunks(&tokens, root);
    for chunk in &chunks {
        tokens[chunk.end - 1].dep = chunk.root_dep;
    }

    Sentence {
        tokens,
        chunks,
        text: text.to_string(),
    }
}

fn split_tokens(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for piece in text.split_word_bounds() {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        words.extend(split_contraction(piece));
    }
    words
}

const CLITICS: &[&str] = &["n't", "'m", "'re", "'ve", "'ll", "'d", "'s"];

fn split_contraction(word: &str) -> Vec<String> {
    for clitic in CLITICS {
        if word.len() > clitic.len() && word.is_char_boundary(word.len() - clitic.len()) {
            let (stem, tail) = word.split_at(word.len() - clitic.len());
            if tail.eq_ignore_ascii_case(clitic) && !stem.contains('\'') {
                return vec![stem.to_string(), tail.to_string()];
            }
        }
    }
    vec![word.to_string()]
}

fn chunkable(token: &Token) -> bool {
    matches!(
        token.pos,
        Pos::Det | Pos::Adj | Pos::Noun | Pos::Num | Pos::Propn | Pos::Pron
    ) && !token.tag.is_wh()
}

const OBJECT_PRONOUNS: &[&str] = &["me", "him", "her", "us", "them"];

fn detect_chunks(tokens: &[Token], root: usize) -> Vec<NounChunk> {
    let mut chunks = Vec::new();
    let mut have_object = false;
    let mut idx = 0;

    while idx < tokens.len() {
        if idx == root || !chunkable(&tokens[idx]) {
            idx += 1;
            continue;
        }

        let start = idx;
        while idx < tokens.len() && idx != root && chunkable(&tokens[idx]) {
            idx += 1;
        }
        let end = idx;
        let head = end - 1;

        let role = if head < root {
            Dep::Nsubj
        } else if !have_object && !OBJECT_PRONOUNS.contains(&tokens[head].lower.as_str()) {
            have_object = true;
            Dep::Dobj
        } else {
            Dep::Other
        };

        let text = tokens[start..end]
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        chunks.push(NounChunk {
            start,
            end,
            root_dep: role,
            text,
        });
    }

    chunks
}
