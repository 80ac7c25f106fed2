use crate::reference::types::{Lesson, Level};
use crate::reference::ReferenceSet;
use crate::segment::{Segmenter, TokenFilter};
use crate::stats::{
    compute_distribution, compute_summary, DistributionRow, LevelDistribution, SummaryStats,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Everything the presentation layer needs for one text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub tokens: Vec<String>,
    pub summary: SummaryStats,
    pub hsk: LevelDistribution<Level>,
    pub tocfl: LevelDistribution<Level>,
    pub ic: LevelDistribution<Lesson>,
    /// IC rows with a non-zero count, for the lesson chart.
    pub ic_chart: Vec<DistributionRow<Lesson>>,
}

/// Segments text and measures it against a shared, read-only reference set.
pub struct Analyzer {
    references: Arc<ReferenceSet>,
    segmenter: Box<dyn Segmenter>,
    filter: TokenFilter,
}

impl Analyzer {
    pub fn new(references: Arc<ReferenceSet>, segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            references,
            segmenter,
            filter: TokenFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.filter.apply(self.segmenter.segment(text))
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let tokens = self.tokenize(text);
        debug!(
            "Segmented {} chars into {} tokens",
            text.chars().count(),
            tokens.len()
        );
        analyze_tokens(text, tokens, &self.references)
    }
}

/// Pure aggregation over an existing token sequence.
pub fn analyze_tokens(text: &str, tokens: Vec<String>, refs: &ReferenceSet) -> AnalysisReport {
    let summary = compute_summary(text, &tokens);
    let hsk = compute_distribution(&tokens, &refs.hsk, &refs.hsk.domain());
    let tocfl = compute_distribution(&tokens, &refs.tocfl, &refs.tocfl.domain());
    let ic = compute_distribution(&tokens, &refs.ic, &refs.ic.domain());
    let ic_chart = ic.charted().into_iter().cloned().collect();

    AnalysisReport {
        tokens,
        summary,
        hsk,
        tocfl,
        ic,
        ic_chart,
    }
}
