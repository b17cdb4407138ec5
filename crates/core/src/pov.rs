use std::collections::HashMap;

use regex::{Captures, Regex};

// Ordered so multi-word forms come before the bare pronouns that prefix
// them; the compiled alternation prefers earlier branches at the same
// position, so "I am" never gets consumed as "I" + " am".
const POV_PAIRS: &[(&str, &str)] = &[
    ("I am", "you are"),
    ("I was", "you were"),
    ("I'm", "you're"),
    ("I'd", "you'd"),
    ("I've", "you've"),
    ("I'll", "you'll"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you're", "I'm"),
    ("you'd", "I'd"),
    ("you've", "I've"),
    ("you'll", "I'll"),
    ("I", "you"),
    ("my", "your"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "I"), // as subject, else "me"
    ("me", "you"),
];

/// Swaps first- and second-person phrasing so an echoed sentence reads from
/// the bot's point of view. Whole-word, case-sensitive, single left-to-right
/// pass over non-overlapping occurrences.
#[derive(Debug, Clone)]
pub struct PovRewriter {
    replacements: HashMap<&'static str, &'static str>,
    pattern: Regex,
}

impl PovRewriter {
    pub fn new() -> Self {
        let alternation = POV_PAIRS
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        let pattern =
            Regex::new(&format!(r"\b({})\b", alternation)).expect("valid pov pattern");

        Self {
            replacements: POV_PAIRS.iter().copied().collect(),
            pattern,
        }
    }

    pub fn rewrite(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let found = &caps[0];
                self.replacements
                    .get(found)
                    .copied()
                    .unwrap_or(found)
                    .to_string()
            })
            .into_owned()
    }
}

impl Default for PovRewriter {
    fn default() -> Self {
        Self::new()
    }
}
