//! Reduce a model's free-text reply to a single-word answer.

use super::providers::FALLBACK_ANSWER;

/// Capitalized function words that are never the answer to a place question.
const STOP_WORDS: [&str; 18] = [
    "The", "A", "An", "Is", "Of", "In", "And", "It", "This", "That", "On", "At", "By", "For",
    "With", "As", "To", "From",
];

/// Turn `raw` into one word.
///
/// Punctuation is stripped and the first token kept. For questions about a
/// capital or city, the first capitalized word that is neither a stop word
/// nor already part of the question wins instead, so "The capital of France
/// is Paris" yields "Paris". When every such word appears in the question
/// (the question lists the options), the first capitalized non-stop word is
/// used.
pub fn extract_answer(question: &str, raw: &str) -> String {
    let cleaned = strip_punctuation(raw.trim());

    if asks_for_place(question) {
        if let Some(name) = proper_noun_candidate(question, &cleaned) {
            return name.to_string();
        }
    }

    cleaned
        .split_whitespace()
        .next()
        .unwrap_or(FALLBACK_ANSWER)
        .to_string()
}

/// Keep word characters (letters, digits, `_`) and whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

pub fn asks_for_place(question: &str) -> bool {
    let question = question.to_lowercase();
    ["capital", "city", "cities"]
        .iter()
        .any(|needle| question.contains(needle))
}

fn proper_noun_candidate<'a>(question: &str, answer: &'a str) -> Option<&'a str> {
    let question_words: Vec<String> = strip_punctuation(question)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let mut names = answer.split_whitespace().filter(|word| {
        word.chars().next().is_some_and(char::is_uppercase) && !STOP_WORDS.contains(word)
    });
    let first = names.next()?;

    std::iter::once(first)
        .chain(names)
        .find(|word| !question_words.contains(&word.to_lowercase()))
        .or(Some(first))
}
