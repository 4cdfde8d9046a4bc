//! Pipeline orchestration for the error analysis
//!
//! Filters a corpus down to its code-mixed sentences, routes each one to
//! the tagger of its dominant language, and aligns the tagger output into
//! one [`TaggingResult`] per sentence.

use crate::align::TaggingResult;
use crate::classify::{dominant_tag, Dominant};
use crate::corpus::{Corpus, Sentence};
use crate::error::ConfigResult;
use crate::tagger::{EntityTagger, LexiconTagger};

/// Routes code-mixed sentences to language taggers and aligns the output.
///
/// Both taggers are explicit dependencies of the processor; nothing is
/// loaded through global state.
pub struct CorpusProcessor {
    l1_tagger: Box<dyn EntityTagger>,
    l2_tagger: Box<dyn EntityTagger>,
}

impl CorpusProcessor {
    /// Starts building a processor with custom taggers.
    pub fn builder() -> CorpusProcessorBuilder {
        CorpusProcessorBuilder::default()
    }

    /// Processor over the embedded English and Spanish lexicons.
    pub fn with_defaults() -> ConfigResult<Self> {
        Self::builder().build()
    }

    /// Tags and aligns every code-mixed sentence of `corpus`, in order.
    pub fn process(&self, corpus: &Corpus) -> Vec<TaggingResult> {
        corpus
            .sentences()
            .iter()
            .filter_map(|sentence| self.process_sentence(sentence))
            .collect()
    }

    /// Tags and aligns one sentence; `None` when it is not code-mixed.
    pub fn process_sentence(&self, sentence: &Sentence) -> Option<TaggingResult> {
        if !sentence.is_code_mixed() {
            return None;
        }
        let tags = sentence.lang_tags();
        let winner = dominant_tag(&tags)?;
        let mlang = Dominant::from_tag(winner);

        let text = sentence.text();
        let mentions = match mlang {
            Dominant::Lang1 => self.l1_tagger.mentions(&text),
            Dominant::Lang2 => self.l2_tagger.mentions(&text),
        };

        Some(TaggingResult::align(mlang, sentence.content(), &mentions))
    }
}

/// Builder selecting the tagger for each routing slot.
///
/// Slots left empty fall back to the embedded lexicons: `english` for the
/// dominant-`lang1` route, `spanish` for everything else.
#[derive(Default)]
pub struct CorpusProcessorBuilder {
    l1_tagger: Option<Box<dyn EntityTagger>>,
    l2_tagger: Option<Box<dyn EntityTagger>>,
}

impl CorpusProcessorBuilder {
    /// Tagger for sentences whose dominant language is `lang1`
    pub fn l1_tagger(mut self, tagger: Box<dyn EntityTagger>) -> Self {
        self.l1_tagger = Some(tagger);
        self
    }

    /// Tagger for sentences whose dominant language is `lang2`
    pub fn l2_tagger(mut self, tagger: Box<dyn EntityTagger>) -> Self {
        self.l2_tagger = Some(tagger);
        self
    }

    /// Finishes the processor, loading embedded lexicons for empty slots.
    pub fn build(self) -> ConfigResult<CorpusProcessor> {
        let l1_tagger = match self.l1_tagger {
            Some(tagger) => tagger,
            None => Box::new(LexiconTagger::builtin("english")?),
        };
        let l2_tagger = match self.l2_tagger {
            Some(tagger) => tagger,
            None => Box::new(LexiconTagger::builtin("spanish")?),
        };
        Ok(CorpusProcessor {
            l1_tagger,
            l2_tagger,
        })
    }
}
