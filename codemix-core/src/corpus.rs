//! Annotated corpus parsing
//!
//! Reads token-per-line files where a comment line starting with
//! `# sent_enum` delimits sentence blocks and a blank line closes each
//! block. Every data row carries three tab-separated fields:
//! word, language tag, gold entity type.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

/// Sentinel prefix marking a sentence boundary line
pub const SENTENCE_DELIMITER: &str = "# sent_enum";

/// Language tag attached to every corpus token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangTag {
    /// First code-switched language (`lang1`)
    Lang1,
    /// Second code-switched language (`lang2`)
    Lang2,
    /// Any tag outside the two tracked languages
    Other,
}

impl LangTag {
    /// All tags in counting order
    pub const ALL: [LangTag; 3] = [LangTag::Lang1, LangTag::Lang2, LangTag::Other];

    /// Parses a corpus tag string. Tags outside the two tracked languages
    /// (`other`, `ne`, `ambiguous`, ...) collapse to [`LangTag::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "lang1" => LangTag::Lang1,
            "lang2" => LangTag::Lang2,
            _ => LangTag::Other,
        }
    }

    /// Canonical corpus spelling of this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            LangTag::Lang1 => "lang1",
            LangTag::Lang2 => "lang2",
            LangTag::Other => "other",
        }
    }
}

impl std::fmt::Display for LangTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One annotated corpus token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form
    pub word: String,
    /// Language tag
    pub lang: LangTag,
    /// Gold entity annotation, `"O"` or a named-entity type
    pub entity_type: String,
}

impl Token {
    /// Creates a token from its three row fields.
    pub fn new(word: impl Into<String>, lang: LangTag, entity_type: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lang,
            entity_type: entity_type.into(),
        }
    }

    /// The separator artifact produced by a blank corpus line.
    fn separator_artifact() -> Self {
        Self::new("", LangTag::Other, "O")
    }
}

/// An ordered token sequence, immutable once parsed.
///
/// The final token of every parsed block is the blank-line separator
/// artifact of the corpus format; [`Sentence::content`] excludes it,
/// while code-mix checks and language counting use the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Builds a sentence from an already-assembled token list.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Full token list, separator artifact included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens with the trailing separator artifact excluded
    pub fn content(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Language tags of the full token list
    pub fn lang_tags(&self) -> Vec<LangTag> {
        self.tokens.iter().map(|t| t.lang).collect()
    }

    /// Whether both tracked languages appear in the full token list
    pub fn is_code_mixed(&self) -> bool {
        let mut lang1 = false;
        let mut lang2 = false;
        for token in &self.tokens {
            match token.lang {
                LangTag::Lang1 => lang1 = true,
                LangTag::Lang2 => lang2 = true,
                LangTag::Other => {}
            }
        }
        lang1 && lang2
    }

    /// Content words joined with single spaces, the text handed to taggers
    pub fn text(&self) -> String {
        self.content()
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A parsed corpus: sentences in file order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Parses a corpus from any buffered reader.
    ///
    /// Fails fast on the first malformed row; no partial-sentence recovery.
    pub fn from_reader<R: BufRead>(reader: R) -> ParseResult<Self> {
        let mut parser = Parser::default();
        for (idx, line) in reader.lines().enumerate() {
            parser.push_line(idx + 1, &line?)?;
        }
        Ok(parser.finish())
    }

    /// Parsed sentences in file order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the corpus holds no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Appends all sentences of `other`, preserving order.
    pub fn extend(&mut self, other: Corpus) {
        self.sentences.extend(other.sentences);
    }
}

impl FromStr for Corpus {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Line-by-line accumulator for sentence blocks
#[derive(Default)]
struct Parser {
    sentences: Vec<Sentence>,
    buffer: Vec<Token>,
}

impl Parser {
    fn push_line(&mut self, line_no: usize, line: &str) -> ParseResult<()> {
        if line.starts_with(SENTENCE_DELIMITER) {
            self.flush();
            return Ok(());
        }
        self.buffer.push(parse_row(line_no, line)?);
        Ok(())
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.sentences
                .push(Sentence::from_tokens(std::mem::take(&mut self.buffer)));
        }
    }

    fn finish(mut self) -> Corpus {
        self.flush();
        Corpus {
            sentences: self.sentences,
        }
    }
}

fn parse_row(line_no: usize, line: &str) -> ParseResult<Token> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Token::separator_artifact());
    }
    let fields: Vec<&str> = trimmed.split('\t').collect();
    if fields.len() != 3 {
        return Err(ParseError::MalformedRow {
            line: line_no,
            found: fields.len(),
        });
    }
    Ok(Token::new(
        fields[0],
        LangTag::from_tag(fields[1]),
        fields[2],
    ))
}
