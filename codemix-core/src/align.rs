//! Gold-to-prediction alignment
//!
//! A single left-to-right greedy pass matches the tagger's mention
//! sub-tokens against gold tokens by mutual substring containment, no
//! backtracking. The heuristic can misalign on repeated or overlapping
//! token text; that behavior is kept as-is for parity with the published
//! analyses.

use crate::classify::Dominant;
use crate::corpus::{LangTag, Token};

/// Binary entity label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    /// Token is (part of) an entity
    Yes,
    /// Token is outside any entity
    O,
}

impl EntityLabel {
    /// Binarizes a gold entity annotation: anything but `"O"` is an entity.
    pub fn from_gold(entity_type: &str) -> Self {
        if entity_type == "O" {
            EntityLabel::O
        } else {
            EntityLabel::Yes
        }
    }

    /// Label spelling used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Yes => "Yes",
            EntityLabel::O => "O",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aligned labels for one code-mixed sentence.
///
/// Invariant: `lang`, `true_ne` and `predicted` are indexed identically
/// to the content token sequence and always have equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggingResult {
    /// Dominant language the sentence was routed under
    pub mlang: Dominant,
    /// Per-token language tags
    pub lang: Vec<LangTag>,
    /// Binarized gold labels
    pub true_ne: Vec<EntityLabel>,
    /// Aligned predicted labels
    pub predicted: Vec<EntityLabel>,
}

impl TaggingResult {
    /// Aligns `mentions` against the gold `tokens`.
    ///
    /// `tokens` must already exclude the separator artifact, i.e. come
    /// from [`crate::corpus::Sentence::content`].
    pub fn align(mlang: Dominant, tokens: &[Token], mentions: &[String]) -> Self {
        let lang = tokens.iter().map(|t| t.lang).collect();
        let true_ne = tokens
            .iter()
            .map(|t| EntityLabel::from_gold(&t.entity_type))
            .collect();
        let predicted = align_labels(tokens, mentions);
        Self {
            mlang,
            lang,
            true_ne,
            predicted,
        }
    }

    /// Number of aligned positions
    pub fn len(&self) -> usize {
        self.lang.len()
    }

    /// Whether the sentence had no content tokens
    pub fn is_empty(&self) -> bool {
        self.lang.is_empty()
    }
}

/// One predicted label per gold token.
///
/// Mentions are whitespace-flattened into a queue of sub-tokens consumed
/// front-first: a gold token matching the queue front (either string
/// containing the other) is labeled `Yes` and pops the front; any other
/// gold token is labeled `O` with the queue untouched.
fn align_labels(tokens: &[Token], mentions: &[String]) -> Vec<EntityLabel> {
    let queue: Vec<&str> = mentions
        .iter()
        .flat_map(|m| m.split_whitespace())
        .collect();

    if queue.is_empty() {
        return vec![EntityLabel::O; tokens.len()];
    }

    let mut labels = Vec::with_capacity(tokens.len());
    let mut front = 0;
    for token in tokens {
        if front < queue.len() {
            let candidate = queue[front];
            if token.word.contains(candidate) || candidate.contains(&token.word) {
                labels.push(EntityLabel::Yes);
                front += 1;
            } else {
                labels.push(EntityLabel::O);
            }
        } else {
            labels.push(EntityLabel::O);
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(word: &str, lang: LangTag, entity: &str) -> Token {
        Token::new(word, lang, entity)
    }

    fn words(labels: &[EntityLabel]) -> Vec<&'static str> {
        labels.iter().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_two_token_mention_matches_in_order() {
        let tokens = vec![
            token("el", LangTag::Lang2, "O"),
            token("gato", LangTag::Lang2, "O"),
            token("runs", LangTag::Lang1, "O"),
        ];
        let result = TaggingResult::align(
            Dominant::Lang1,
            &tokens,
            &["el gato".to_string()],
        );
        assert_eq!(words(&result.predicted), ["Yes", "Yes", "O"]);
        assert_eq!(words(&result.true_ne), ["O", "O", "O"]);
    }

    #[test]
    fn test_zero_mentions_label_everything_o() {
        let tokens = vec![
            token("no", LangTag::Lang2, "O"),
            token("se", LangTag::Lang2, "O"),
            token("vale", LangTag::Lang2, "O"),
            token("nothing", LangTag::Lang1, "O"),
        ];
        let result = TaggingResult::align(Dominant::Lang2, &tokens, &[]);
        assert_eq!(words(&result.predicted), ["O", "O", "O", "O"]);
    }

    #[test]
    fn test_substring_matches_both_directions() {
        // gold token with trailing punctuation contains the mention token,
        // and a mention token can contain the gold token
        let tokens = vec![
            token("Obama,", LangTag::Lang1, "B-PER"),
            token("York", LangTag::Lang1, "B-LOC"),
        ];
        let result = TaggingResult::align(
            Dominant::Lang1,
            &tokens,
            &["Obama".to_string(), "NewYork".to_string()],
        );
        assert_eq!(words(&result.predicted), ["Yes", "Yes"]);
    }

    #[test]
    fn test_mismatch_leaves_queue_untouched() {
        let tokens = vec![
            token("viendo", LangTag::Lang2, "O"),
            token("Madrid", LangTag::Lang2, "B-LOC"),
        ];
        let result = TaggingResult::align(
            Dominant::Lang2,
            &tokens,
            &["Madrid".to_string()],
        );
        assert_eq!(words(&result.predicted), ["O", "Yes"]);
    }

    #[test]
    fn test_consumed_queue_labels_rest_o() {
        let tokens = vec![
            token("York", LangTag::Lang1, "B-LOC"),
            token("York", LangTag::Lang1, "B-LOC"),
        ];
        let result = TaggingResult::align(Dominant::Lang1, &tokens, &["York".to_string()]);
        assert_eq!(words(&result.predicted), ["Yes", "O"]);
    }

    #[test]
    fn test_short_gold_token_consumes_greedily() {
        // "a" is a substring of "Maria", so the greedy pass burns the
        // queued mention on the article and misses the real name
        let tokens = vec![
            token("a", LangTag::Lang2, "O"),
            token("Maria", LangTag::Lang2, "B-PER"),
        ];
        let result = TaggingResult::align(Dominant::Lang1, &tokens, &["Maria".to_string()]);
        assert_eq!(words(&result.predicted), ["Yes", "O"]);
    }

    #[test]
    fn test_gold_binarization() {
        assert_eq!(EntityLabel::from_gold("O"), EntityLabel::O);
        assert_eq!(EntityLabel::from_gold("B-PER"), EntityLabel::Yes);
        assert_eq!(EntityLabel::from_gold("I-LOC"), EntityLabel::Yes);
    }

    #[test]
    fn test_parallel_sequences_have_equal_length() {
        let tokens = vec![
            token("uno", LangTag::Lang2, "O"),
            token("two", LangTag::Lang1, "O"),
            token("tres", LangTag::Lang2, "B-ORG"),
        ];
        let result = TaggingResult::align(
            Dominant::Lang2,
            &tokens,
            &["tres".to_string()],
        );
        assert_eq!(result.len(), 3);
        assert_eq!(result.lang.len(), result.true_ne.len());
        assert_eq!(result.true_ne.len(), result.predicted.len());
    }

    #[test]
    fn test_empty_token_slice() {
        let result = TaggingResult::align(Dominant::Lang1, &[], &["ghost".to_string()]);
        assert!(result.is_empty());
        assert!(result.predicted.is_empty());
    }
}
