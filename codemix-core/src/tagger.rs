//! Entity tagging seam and the built-in lexicon tagger
//!
//! The pipeline consumes mention text only, so the tagging contract is a
//! single method returning mention strings in order of appearance. The
//! built-in implementation combines a case-insensitive gazetteer with a
//! capitalized-run heuristic, both driven by a TOML lexicon.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Produces entity mention strings for a sentence.
///
/// Mentions come back in order of appearance. Offsets are not part of the
/// contract; downstream alignment consumes text only.
pub trait EntityTagger {
    /// Extracts mention texts from `sentence`.
    fn mentions(&self, sentence: &str) -> Vec<String>;
}

/// Schema of a lexicon TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Identification block
    pub metadata: LexiconMetadata,
    /// Known entity phrases
    #[serde(default)]
    pub gazetteer: GazetteerSection,
    /// Structural heuristics
    #[serde(default)]
    pub heuristics: HeuristicsSection,
}

/// Lexicon identification
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconMetadata {
    /// Language code, e.g. `en`
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// Known entity phrases, matched case-insensitively over whitespace tokens
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GazetteerSection {
    /// Entity phrases; multi-word entries match longest-first
    #[serde(default)]
    pub entries: Vec<String>,
}

/// Structural heuristics applied after the gazetteer pass
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeuristicsSection {
    /// Treat capitalized tokens past the sentence start as mention members
    #[serde(default = "default_capitalized_runs")]
    pub capitalized_runs: bool,
    /// Words the capitalization heuristic ignores even when capitalized
    #[serde(default)]
    pub stopwords: Vec<String>,
}

fn default_capitalized_runs() -> bool {
    true
}

impl Default for HeuristicsSection {
    fn default() -> Self {
        Self {
            capitalized_runs: default_capitalized_runs(),
            stopwords: Vec::new(),
        }
    }
}

impl LexiconConfig {
    /// Loads and validates a lexicon from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: LexiconConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic checks beyond the TOML schema.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.metadata.code.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "lexicon metadata.code is empty".to_string(),
            });
        }
        if self.gazetteer.entries.is_empty() && !self.heuristics.capitalized_runs {
            return Err(ConfigError::Invalid {
                reason: "lexicon has no gazetteer entries and no heuristics enabled".to_string(),
            });
        }
        Ok(())
    }
}

macro_rules! embed_lexicon {
    ($name:expr, $path:expr) => {
        ($name, include_str!($path))
    };
}

static LEXICONS: OnceLock<HashMap<String, LexiconConfig>> = OnceLock::new();

fn load_embedded_lexicons() -> ConfigResult<HashMap<String, LexiconConfig>> {
    let mut configs = HashMap::new();

    let embedded = [
        embed_lexicon!("english", "../configs/lexicons/english.toml"),
        embed_lexicon!("spanish", "../configs/lexicons/spanish.toml"),
    ];

    for (name, toml_content) in embedded {
        let config: LexiconConfig = toml::from_str(toml_content)
            .map_err(|e| ConfigError::Syntax(format!("embedded lexicon {name}: {e}")))?;
        config.validate()?;
        configs.insert(name.to_string(), config);
    }

    Ok(configs)
}

fn lexicon_registry() -> &'static HashMap<String, LexiconConfig> {
    LEXICONS.get_or_init(|| load_embedded_lexicons().expect("failed to load embedded lexicons"))
}

/// Returns the embedded lexicon registered under `name`.
pub fn embedded_lexicon(name: &str) -> ConfigResult<&'static LexiconConfig> {
    lexicon_registry()
        .get(name)
        .ok_or_else(|| ConfigError::UnknownLexicon {
            name: name.to_string(),
        })
}

/// Names of all embedded lexicons, sorted.
pub fn list_embedded_lexicons() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = lexicon_registry().keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

/// Gazetteer-plus-capitalization tagger built from a [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    /// Gazetteer phrases, lowercased and tokenized, longest first
    phrases: Vec<Vec<String>>,
    stopwords: HashSet<String>,
    capitalized_runs: bool,
    code: String,
}

impl LexiconTagger {
    /// Builds a tagger from an already-validated config.
    pub fn new(config: &LexiconConfig) -> Self {
        let mut phrases: Vec<Vec<String>> = config
            .gazetteer
            .entries
            .iter()
            .map(|entry| {
                entry
                    .split_whitespace()
                    .map(|w| w.to_lowercase())
                    .collect::<Vec<_>>()
            })
            .filter(|phrase| !phrase.is_empty())
            .collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            phrases,
            stopwords: config
                .heuristics
                .stopwords
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            capitalized_runs: config.heuristics.capitalized_runs,
            code: config.metadata.code.clone(),
        }
    }

    /// Builds a tagger from an embedded lexicon name.
    pub fn builtin(name: &str) -> ConfigResult<Self> {
        embedded_lexicon(name).map(Self::new)
    }

    /// Builds a tagger from a lexicon TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        LexiconConfig::from_file(path).map(|config| Self::new(&config))
    }

    /// Language code of the backing lexicon
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Marks gazetteer hits; greedy longest match at each position.
    fn mark_gazetteer(&self, words: &[CleanWord<'_>], marked: &mut [bool]) {
        let mut i = 0;
        while i < words.len() {
            let mut matched = 0;
            for phrase in &self.phrases {
                if phrase.len() <= words.len() - i
                    && phrase.iter().zip(&words[i..]).all(|(p, w)| *p == w.lower)
                {
                    matched = phrase.len();
                    break;
                }
            }
            if matched > 0 {
                for flag in marked[i..i + matched].iter_mut() {
                    *flag = true;
                }
                i += matched;
            } else {
                i += 1;
            }
        }
    }
}

impl EntityTagger for LexiconTagger {
    fn mentions(&self, sentence: &str) -> Vec<String> {
        let words = clean_words(sentence);
        if words.is_empty() {
            return Vec::new();
        }

        let mut marked = vec![false; words.len()];
        self.mark_gazetteer(&words, &mut marked);

        if self.capitalized_runs {
            for (idx, word) in words.iter().enumerate() {
                if marked[idx] || idx == 0 {
                    // sentence-initial capitalization needs a gazetteer hit
                    continue;
                }
                let capitalized = word
                    .clean
                    .chars()
                    .next()
                    .map(|c| c.is_uppercase())
                    .unwrap_or(false);
                if capitalized && !self.stopwords.contains(&word.lower) {
                    marked[idx] = true;
                }
            }
        }

        // maximal marked runs become mentions
        let mut mentions = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        for (idx, word) in words.iter().enumerate() {
            if marked[idx] && !word.clean.is_empty() {
                run.push(word.clean);
            } else if !run.is_empty() {
                mentions.push(run.join(" "));
                run.clear();
            }
        }
        if !run.is_empty() {
            mentions.push(run.join(" "));
        }
        mentions
    }
}

/// A whitespace token with punctuation-trimmed views
struct CleanWord<'a> {
    clean: &'a str,
    lower: String,
}

fn clean_words(sentence: &str) -> Vec<CleanWord<'_>> {
    sentence
        .split_whitespace()
        .map(|raw| {
            let clean = raw.trim_matches(|c: char| !c.is_alphanumeric());
            CleanWord {
                clean,
                lower: clean.to_lowercase(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger_from(toml_text: &str) -> LexiconTagger {
        let config: LexiconConfig = toml::from_str(toml_text).unwrap();
        config.validate().unwrap();
        LexiconTagger::new(&config)
    }

    const TEST_LEXICON: &str = r#"
[metadata]
code = "en"
name = "English"

[gazetteer]
entries = ["New York", "Maria", "Obama"]

[heuristics]
capitalized_runs = true
stopwords = ["the", "a", "i"]
"#;

    #[test]
    fn test_embedded_lexicons_load() {
        let names = list_embedded_lexicons();
        assert_eq!(names, vec!["english", "spanish"]);
        assert_eq!(embedded_lexicon("english").unwrap().metadata.code, "en");
        assert_eq!(embedded_lexicon("spanish").unwrap().metadata.code, "es");
    }

    #[test]
    fn test_unknown_lexicon_name() {
        let err = embedded_lexicon("klingon").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLexicon { .. }));
    }

    #[test]
    fn test_gazetteer_matches_case_insensitively() {
        let tagger = tagger_from(TEST_LEXICON);
        assert_eq!(
            tagger.mentions("we visited new york yesterday"),
            vec!["new york"]
        );
    }

    #[test]
    fn test_sentence_initial_needs_gazetteer_hit() {
        let tagger = tagger_from(TEST_LEXICON);
        // "Tomorrow" is capitalized only because it opens the sentence
        assert!(tagger.mentions("Tomorrow we rest").is_empty());
        // "Maria" opens the sentence but is a known entity
        assert_eq!(tagger.mentions("Maria lives here"), vec!["Maria"]);
    }

    #[test]
    fn test_capitalized_run_mid_sentence() {
        let tagger = tagger_from(TEST_LEXICON);
        assert_eq!(
            tagger.mentions("she met Barack Obama today"),
            vec!["Barack Obama"]
        );
    }

    #[test]
    fn test_stopwords_are_not_mentions() {
        let tagger = tagger_from(TEST_LEXICON);
        assert_eq!(tagger.mentions("we saw The Hague"), vec!["Hague"]);
    }

    #[test]
    fn test_punctuation_is_trimmed() {
        let tagger = tagger_from(TEST_LEXICON);
        assert_eq!(tagger.mentions("they called Obama."), vec!["Obama"]);
    }

    #[test]
    fn test_mentions_preserve_order() {
        let tagger = tagger_from(TEST_LEXICON);
        assert_eq!(
            tagger.mentions("Flying from new york with Maria tonight"),
            vec!["new york", "Maria"]
        );
    }

    #[test]
    fn test_empty_sentence() {
        let tagger = tagger_from(TEST_LEXICON);
        assert!(tagger.mentions("").is_empty());
        assert!(tagger.mentions("   ").is_empty());
    }

    #[test]
    fn test_validation_rejects_empty_lexicon() {
        let config: LexiconConfig = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"

[heuristics]
capitalized_runs = false
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<LexiconConfig, _> = toml::from_str(
            r#"
[metadata]
code = "en"
name = "English"
flavor = "vanilla"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, TEST_LEXICON).unwrap();
        let tagger = LexiconTagger::from_file(&path).unwrap();
        assert_eq!(tagger.code(), "en");
    }

    #[test]
    fn test_from_file_missing() {
        let err = LexiconConfig::from_file("/nonexistent/lexicon.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
