//! Japanese/English detection for paragraph `lang` attributes

use crate::notion::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ja,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }
}

/// CJK punctuation, hiragana, katakana or CJK unified ideographs
fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{4E00}'..='\u{9FAF}')
}

/// Classify text as Japanese if it contains any Japanese code point
pub fn detect_text(text: &str) -> Language {
    if text.chars().any(is_japanese) {
        Language::Ja
    } else {
        Language::En
    }
}

/// Classify the concatenated plain text of `spans`
pub fn detect_language(spans: &[RichText]) -> Language {
    if spans.iter().any(|s| s.plain_text.chars().any(is_japanese)) {
        Language::Ja
    } else {
        Language::En
    }
}
