//! Dominant-language selection
//!
//! An explicit frequency count over the closed tag set. No collection
//! ordering is relied on: ties break by the declaration order of
//! [`LangTag::ALL`], first maximum wins.

use crate::corpus::LangTag;

/// Dominant language of a code-mixed sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dominant {
    /// `lang1` holds the majority
    Lang1,
    /// `lang2` holds the majority
    Lang2,
}

impl Dominant {
    /// Maps the winning tag to the recorded label. Anything but `lang1`
    /// records as [`Dominant::Lang2`], matching the tagger routing rule.
    pub fn from_tag(tag: LangTag) -> Self {
        if tag == LangTag::Lang1 {
            Dominant::Lang1
        } else {
            Dominant::Lang2
        }
    }

    /// The inserted (minority) language under this dominant language
    pub fn inserted(&self) -> LangTag {
        match self {
            Dominant::Lang1 => LangTag::Lang2,
            Dominant::Lang2 => LangTag::Lang1,
        }
    }

    /// Canonical tag spelling of the dominant language
    pub fn as_str(&self) -> &'static str {
        match self {
            Dominant::Lang1 => "lang1",
            Dominant::Lang2 => "lang2",
        }
    }
}

impl std::fmt::Display for Dominant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the most frequent tag in `tags`, or `None` for an empty slice.
pub fn dominant_tag(tags: &[LangTag]) -> Option<LangTag> {
    if tags.is_empty() {
        return None;
    }
    let mut best = LangTag::ALL[0];
    let mut best_count = 0;
    for candidate in LangTag::ALL {
        let count = tags.iter().filter(|t| **t == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        let tags = [LangTag::Lang2, LangTag::Lang2, LangTag::Lang1];
        assert_eq!(dominant_tag(&tags), Some(LangTag::Lang2));
    }

    #[test]
    fn test_tie_breaks_by_declaration_order() {
        let tags = [LangTag::Lang2, LangTag::Lang1];
        assert_eq!(dominant_tag(&tags), Some(LangTag::Lang1));
    }

    #[test]
    fn test_empty_slice_has_no_dominant() {
        assert_eq!(dominant_tag(&[]), None);
    }

    #[test]
    fn test_other_can_dominate() {
        let tags = [
            LangTag::Other,
            LangTag::Other,
            LangTag::Other,
            LangTag::Lang1,
            LangTag::Lang2,
        ];
        assert_eq!(dominant_tag(&tags), Some(LangTag::Other));
        // a non-lang1 winner routes to the second-language tagger
        assert_eq!(Dominant::from_tag(LangTag::Other), Dominant::Lang2);
    }

    #[test]
    fn test_inserted_language_is_the_minority() {
        assert_eq!(Dominant::Lang1.inserted(), LangTag::Lang2);
        assert_eq!(Dominant::Lang2.inserted(), LangTag::Lang1);
    }
}
