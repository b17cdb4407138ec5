use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pos {
    Adj,
    Adv,
    Aux,
    Det,
    Noun,
    Num,
    Pron,
    Propn,
    Verb,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Bare-infinitive verb.
    Vb,
    /// Modal verb.
    Md,
    Wdt,
    Wp,
    WpPoss,
    Wrb,
    /// Personal pronoun.
    Prp,
    PrpPoss,
    Other,
}

impl Tag {
    pub fn is_wh(self) -> bool {
        matches!(self, Self::Wdt | Self::Wp | Self::WpPoss | Self::Wrb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dep {
    Root,
    Aux,
    Nsubj,
    Dobj,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lower: String,
    pub lemma: String,
    pub pos: Pos,
    pub tag: Tag,
    pub dep: Dep,
    pub head: usize,
    pub is_sent_start: bool,
    pub i: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounChunk {
    pub start: usize,
    pub end: usize,
    pub root_dep: Dep,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub chunks: Vec<NounChunk>,
    pub text: String,
}

impl Sentence {
    pub fn chunk_with_role(&self, role: Dep) -> Option<&NounChunk> {
        self.chunks.iter().find(|chunk| chunk.root_dep == role)
    }

    pub fn root_index(&self) -> Option<usize> {
        self.tokens.iter().position(|token| token.dep == Dep::Root)
    }

    pub fn children_of(&self, head: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(move |token| token.head == head && token.i != head)
    }
}

/// Strictly increasing token indices forming the main verb phrase.
/// Empty when the sentence has no root; consumers render nothing for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbPhraseSpan {
    indices: Vec<usize>,
}

impl VerbPhraseSpan {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyType {
    WhQuestion,
    YesNoQuestion,
    Instruction,
    Wish,
    Generic,
}
