//! Sentence segmentation.
//!
//! Splits text into sentences on terminal punctuation (`.`, `!`, `?`),
//! optionally followed by closing quotes or brackets, followed by
//! whitespace or end of text. The whitespace requirement means decimals
//! ("3.14") and dotted identifiers never split. A period ending a known
//! abbreviation ("Inc.", "Dr.", "e.g.") or a single initial ("J.") is
//! not treated as a boundary.
//!
//! This is a heuristic, not a parser: abbreviations outside the list
//! below will over-split ("The meeting is at Acme Corp. HQ" splits after
//! "Corp." only because "corp" is listed; an unlisted abbreviation in
//! the same position would split). The rules are deterministic and the
//! known limits stop here rather than pulling in a language model.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Abbreviations whose trailing period does not end a sentence.
    ///
    /// Compared lowercase, with internal periods stripped ("e.g." -> "eg").
    /// Deliberately short: every entry here is a word that cannot plausibly
    /// end a sentence on its own.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "inc", "ltd", "co",
        "corp", "vs", "etc", "al", "approx", "dept", "eg", "ie",
    ]
    .into_iter()
    .collect();
}

/// Characters that may trail terminal punctuation without breaking the
/// boundary (closing quotes and brackets).
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']' | '}' | '\u{00BB}')
}

/// Split text into an ordered sequence of trimmed sentences.
///
/// Sentences are borrowed slices of the input; together with the
/// whitespace between them they cover the entire text, so no content is
/// dropped. A final fragment with no terminal punctuation is returned as
/// a sentence of its own. Empty or all-whitespace input yields an empty
/// vector.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '.' && c != '!' && c != '?' {
            continue;
        }

        // Pull closing quotes/brackets into the sentence.
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_closer(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };

        if !at_boundary {
            continue;
        }
        if c == '.' && ends_with_abbreviation(&text[start..i]) {
            continue;
        }

        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Whether the text ends in a token whose trailing period should not
/// split: a known abbreviation or a single initial ("J.").
fn ends_with_abbreviation(before_period: &str) -> bool {
    let token = before_period
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if token.is_empty() {
        return false;
    }

    // Single initial, as in "J. P. Morgan".
    let mut token_chars = token.chars();
    if let (Some(first), None) = (token_chars.next(), token_chars.next()) {
        if first.is_alphabetic() && first.is_uppercase() {
            return true;
        }
    }

    let normalized: String = token
        .chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_lowercase)
        .collect();
    ABBREVIATIONS.contains(normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("First sentence. Second one! Third?");
        assert_eq!(sentences, vec!["First sentence.", "Second one!", "Third?"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = split_sentences("a fragment with no period");
        assert_eq!(sentences, vec!["a fragment with no period"]);
    }

    #[test]
    fn test_trailing_fragment_kept() {
        let sentences = split_sentences("Done here. and then some");
        assert_eq!(sentences, vec!["Done here.", "and then some"]);
    }

    #[test]
    fn test_decimal_not_split() {
        let sentences = split_sentences("The rate rose 3.14 percent. Markets reacted.");
        assert_eq!(
            sentences,
            vec!["The rate rose 3.14 percent.", "Markets reacted."]
        );
    }

    #[test]
    fn test_abbreviation_not_split() {
        let sentences = split_sentences("Acme Inc. reported earnings. Shares fell.");
        assert_eq!(
            sentences,
            vec!["Acme Inc. reported earnings.", "Shares fell."]
        );
    }

    #[test]
    fn test_honorific_not_split() {
        let sentences = split_sentences("Dr. Smith arrived. The meeting began.");
        assert_eq!(sentences, vec!["Dr. Smith arrived.", "The meeting began."]);
    }

    #[test]
    fn test_dotted_abbreviation_not_split() {
        let sentences = split_sentences("Use variants, e.g. possessives. Then retry.");
        assert_eq!(
            sentences,
            vec!["Use variants, e.g. possessives.", "Then retry."]
        );
    }

    #[test]
    fn test_single_initial_not_split() {
        let sentences = split_sentences("J. P. Morgan was a banker. He retired.");
        assert_eq!(
            sentences,
            vec!["J. P. Morgan was a banker.", "He retired."]
        );
    }

    #[test]
    fn test_closing_quote_absorbed() {
        let sentences = split_sentences("He said \"Stop.\" Then he left.");
        assert_eq!(sentences, vec!["He said \"Stop.\"", "Then he left."]);
    }

    #[test]
    fn test_closing_bracket_absorbed() {
        let sentences = split_sentences("It failed (badly.) We moved on.");
        assert_eq!(sentences, vec!["It failed (badly.)", "We moved on."]);
    }

    #[test]
    fn test_exclamation_and_question_marks() {
        let sentences = split_sentences("Really? Yes! Fine.");
        assert_eq!(sentences, vec!["Really?", "Yes!", "Fine."]);
    }

    #[test]
    fn test_multiline_whitespace_between_sentences() {
        let sentences = split_sentences("One.\n\nTwo.\tThree.");
        assert_eq!(sentences, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_deterministic() {
        let text = "Same input. Same output! Every time?";
        assert_eq!(split_sentences(text), split_sentences(text));
    }

    #[test]
    fn test_no_content_lost() {
        let text = "Alpha one. Beta two! Gamma three";
        let sentences = split_sentences(text);
        // Every non-whitespace character of the input survives segmentation.
        let rejoined: String = sentences.concat();
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rejoined_stripped: String =
            rejoined.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rejoined_stripped, stripped);
    }
}
