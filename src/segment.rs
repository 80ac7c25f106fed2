use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Splits raw text into an ordered sequence of word tokens.
///
/// Implementations must be deterministic: the same text always yields the same
/// tokens. Whitespace-only tokens are never returned.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Dictionary + HMM segmentation via jieba, with its embedded default dictionary.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Treats the input as already segmented: tokens are separated by whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

#[derive(
    Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Jieba,
    Whitespace,
}

impl SegmenterKind {
    pub fn build(&self) -> Box<dyn Segmenter> {
        match self {
            Self::Jieba => Box::new(JiebaSegmenter::new()),
            Self::Whitespace => Box::new(WhitespaceSegmenter),
        }
    }
}

/// Post-segmentation filtering applied before any statistics are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFilter {
    pub skip_punctuation: bool,
}

impl TokenFilter {
    pub fn keeps(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }
        !(self.skip_punctuation && is_punctuation(token))
    }

    pub fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| self.keeps(t)).collect()
    }
}

fn is_punctuation(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_punctuation() || is_cjk_punctuation(c))
}

fn is_cjk_punctuation(c: char) -> bool {
    matches!(c,
        '\u{2010}'..='\u{2027}'   // dashes, quotes, ellipsis
        | '\u{2030}'..='\u{205E}'
        // CJK symbols and punctuation, minus 々 〆 〇, the numerals and kana marks
        | '\u{3000}'..='\u{3004}'
        | '\u{3008}'..='\u{3011}'
        | '\u{3014}'..='\u{301F}'
        | '\u{3030}'
        | '\u{303D}'
        | '\u{FE30}'..='\u{FE4F}' // CJK compatibility forms
        | '\u{FE50}'..='\u{FE6B}'
        | '\u{FF01}'..='\u{FF0F}' // fullwidth ASCII punctuation
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}'
    )
}
