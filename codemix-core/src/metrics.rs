//! Ratio-based error metrics over aligned tagging results
//!
//! Each metric collects per-sentence (denominator, numerator) count pairs,
//! skipping sentences whose denominator component is zero, then aggregates
//! and divides once. An empty grand-total denominator is an error, never a
//! silent zero or NaN.

use crate::align::{EntityLabel, TaggingResult};
use crate::error::MetricError;

/// The three error analyses, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Inserted-language non-entity tokens falsely flagged as entities
    InsertionFalsePositiveRate,
    /// Share of prediction/gold mismatches landing on inserted-language tokens
    MismatchInsertionShare,
    /// Recall of true entities among inserted-language tokens
    InsertionEntityRecall,
}

impl MetricKind {
    /// All metrics in prompt order
    pub const ALL: [MetricKind; 3] = [
        MetricKind::InsertionFalsePositiveRate,
        MetricKind::MismatchInsertionShare,
        MetricKind::InsertionEntityRecall,
    ];

    /// 1-based selector used in the prompt
    pub fn number(&self) -> u8 {
        match self {
            MetricKind::InsertionFalsePositiveRate => 1,
            MetricKind::MismatchInsertionShare => 2,
            MetricKind::InsertionEntityRecall => 3,
        }
    }

    /// Maps a prompt selector back to its metric.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(MetricKind::InsertionFalsePositiveRate),
            2 => Some(MetricKind::MismatchInsertionShare),
            3 => Some(MetricKind::InsertionEntityRecall),
            _ => None,
        }
    }

    /// Short machine-readable name
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::InsertionFalsePositiveRate => "insertion-false-positive-rate",
            MetricKind::MismatchInsertionShare => "mismatch-insertion-share",
            MetricKind::InsertionEntityRecall => "insertion-entity-recall",
        }
    }

    /// The question the metric answers, as shown in the prompt
    pub fn description(&self) -> &'static str {
        match self {
            MetricKind::InsertionFalsePositiveRate => {
                "How many inserted normal non-NE L2 words are falsely tagged as named entities?"
            }
            MetricKind::MismatchInsertionShare => {
                "How many falsely tagged tokens are actually normal inserted non-NE L2 words?"
            }
            MetricKind::InsertionEntityRecall => {
                "How many inserted L2 tokens that are actually NEs are successfully extracted by L1 model?"
            }
        }
    }

    /// Computes this metric over `results`.
    pub fn compute(&self, results: &[TaggingResult]) -> Result<MetricReport, MetricError> {
        match self {
            MetricKind::InsertionFalsePositiveRate => insertion_false_positive_rate(results),
            MetricKind::MismatchInsertionShare => mismatch_insertion_share(results),
            MetricKind::InsertionEntityRecall => insertion_entity_recall(results),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Aggregated counts of one metric run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricReport {
    /// Which metric produced the counts
    pub kind: MetricKind,
    /// Sum of per-sentence numerator counts
    pub numerator: usize,
    /// Sum of per-sentence denominator counts, always nonzero
    pub denominator: usize,
}

impl MetricReport {
    /// The reported ratio, in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Metric 1: of inserted-language tokens that are not entities, the share
/// predicted as entities anyway.
pub fn insertion_false_positive_rate(
    results: &[TaggingResult],
) -> Result<MetricReport, MetricError> {
    let mut pairs = Vec::new();
    for result in results {
        let inserted = result.mlang.inserted();
        let targets: Vec<usize> = (0..result.len())
            .filter(|&i| result.lang[i] == inserted && result.true_ne[i] == EntityLabel::O)
            .collect();
        if targets.is_empty() {
            continue;
        }
        let flagged = targets
            .iter()
            .filter(|&&i| result.predicted[i] != EntityLabel::O)
            .count();
        pairs.push((targets.len(), flagged));
    }
    aggregate(pairs, MetricKind::InsertionFalsePositiveRate)
}

/// Metric 2: of all prediction/gold mismatches, the share landing on
/// inserted-language tokens.
pub fn mismatch_insertion_share(results: &[TaggingResult]) -> Result<MetricReport, MetricError> {
    let mut pairs = Vec::new();
    for result in results {
        let inserted = result.mlang.inserted();
        let mismatches: Vec<usize> = (0..result.len())
            .filter(|&i| result.predicted[i] != result.true_ne[i])
            .collect();
        if mismatches.is_empty() {
            continue;
        }
        let on_inserted = mismatches
            .iter()
            .filter(|&&i| result.lang[i] == inserted)
            .count();
        pairs.push((mismatches.len(), on_inserted));
    }
    aggregate(pairs, MetricKind::MismatchInsertionShare)
}

/// Metric 3: of inserted-language tokens that are entities, the share the
/// tagger recovered.
pub fn insertion_entity_recall(results: &[TaggingResult]) -> Result<MetricReport, MetricError> {
    let mut pairs = Vec::new();
    for result in results {
        let inserted = result.mlang.inserted();
        let targets: Vec<usize> = (0..result.len())
            .filter(|&i| result.lang[i] == inserted && result.true_ne[i] != EntityLabel::O)
            .collect();
        if targets.is_empty() {
            continue;
        }
        let recalled = targets
            .iter()
            .filter(|&&i| result.predicted[i] == EntityLabel::Yes)
            .count();
        pairs.push((targets.len(), recalled));
    }
    aggregate(pairs, MetricKind::InsertionEntityRecall)
}

fn aggregate(
    pairs: Vec<(usize, usize)>,
    kind: MetricKind,
) -> Result<MetricReport, MetricError> {
    let denominator: usize = pairs.iter().map(|p| p.0).sum();
    let numerator: usize = pairs.iter().map(|p| p.1).sum();
    if denominator == 0 {
        return Err(MetricError::EmptyDenominator {
            metric: kind.name().to_string(),
        });
    }
    Ok(MetricReport {
        kind,
        numerator,
        denominator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Dominant;
    use crate::corpus::LangTag;

    fn result(
        mlang: Dominant,
        lang: &[LangTag],
        true_ne: &[EntityLabel],
        predicted: &[EntityLabel],
    ) -> TaggingResult {
        TaggingResult {
            mlang,
            lang: lang.to_vec(),
            true_ne: true_ne.to_vec(),
            predicted: predicted.to_vec(),
        }
    }

    use EntityLabel::{Yes, O};
    use LangTag::{Lang1, Lang2};

    #[test]
    fn test_false_positive_rate_full_hit() {
        // both inserted non-entity tokens predicted as entities
        let r = result(
            Dominant::Lang1,
            &[Lang2, Lang2, Lang1],
            &[O, O, O],
            &[Yes, Yes, O],
        );
        let report = insertion_false_positive_rate(&[r]).unwrap();
        assert_eq!(report.numerator, 2);
        assert_eq!(report.denominator, 2);
        assert_eq!(report.ratio(), 1.0);
    }

    #[test]
    fn test_mismatch_share_counts_inserted_positions() {
        let r = result(
            Dominant::Lang1,
            &[Lang2, Lang2, Lang1],
            &[O, O, O],
            &[Yes, Yes, O],
        );
        let report = mismatch_insertion_share(&[r]).unwrap();
        // both mismatches sit on inserted-language tokens
        assert_eq!(report.numerator, 2);
        assert_eq!(report.denominator, 2);
    }

    #[test]
    fn test_recall_with_no_inserted_entities_is_undefined() {
        let r = result(
            Dominant::Lang1,
            &[Lang2, Lang2, Lang1],
            &[O, O, O],
            &[Yes, Yes, O],
        );
        let err = insertion_entity_recall(&[r]).unwrap_err();
        assert!(matches!(err, MetricError::EmptyDenominator { .. }));
    }

    #[test]
    fn test_empty_results_are_undefined_for_all_metrics() {
        for kind in MetricKind::ALL {
            let err = kind.compute(&[]).unwrap_err();
            assert!(matches!(err, MetricError::EmptyDenominator { .. }));
        }
    }

    #[test]
    fn test_pairs_accumulate_across_sentences() {
        // sentence one: 2 inserted non-entity tokens, 1 flagged
        let a = result(
            Dominant::Lang1,
            &[Lang2, Lang2],
            &[O, O],
            &[Yes, O],
        );
        // sentence two: 3 inserted non-entity tokens, 0 flagged
        let b = result(
            Dominant::Lang2,
            &[Lang1, Lang1, Lang1, Lang2],
            &[O, O, O, O],
            &[O, O, O, O],
        );
        let report = insertion_false_positive_rate(&[a, b]).unwrap();
        assert_eq!(report.numerator, 1);
        assert_eq!(report.denominator, 5);
        assert!((report.ratio() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_denominator_sentences_are_skipped() {
        // no inserted-language tokens at all: contributes nothing
        let silent = result(Dominant::Lang1, &[Lang1, Lang1], &[O, O], &[Yes, O]);
        // one inserted non-entity token, not flagged
        let speaks = result(Dominant::Lang1, &[Lang2], &[O], &[O]);
        let report = insertion_false_positive_rate(&[silent, speaks]).unwrap();
        assert_eq!(report.numerator, 0);
        assert_eq!(report.denominator, 1);
        assert_eq!(report.ratio(), 0.0);
    }

    #[test]
    fn test_inserted_language_follows_dominant() {
        // dominant lang2 means lang1 tokens are the inserted ones
        let r = result(
            Dominant::Lang2,
            &[Lang1, Lang2, Lang2],
            &[Yes, O, O],
            &[Yes, O, O],
        );
        let report = insertion_entity_recall(&[r]).unwrap();
        assert_eq!(report.numerator, 1);
        assert_eq!(report.denominator, 1);
    }

    #[test]
    fn test_metric_numbers_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_number(kind.number()), Some(kind));
        }
        assert_eq!(MetricKind::from_number(0), None);
        assert_eq!(MetricKind::from_number(4), None);
    }

    #[test]
    fn test_ratios_stay_in_bounds() {
        let r = result(
            Dominant::Lang1,
            &[Lang2, Lang2, Lang2, Lang1],
            &[O, Yes, O, O],
            &[Yes, O, O, Yes],
        );
        for kind in MetricKind::ALL {
            if let Ok(report) = kind.compute(std::slice::from_ref(&r)) {
                let ratio = report.ratio();
                assert!((0.0..=1.0).contains(&ratio), "{kind}: {ratio}");
            }
        }
    }
}
