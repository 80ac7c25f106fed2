use super::percent;
use crate::reference::types::{Category, ReferenceKind};
use crate::reference::ReferenceTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow<K> {
    pub category: Category<K>,
    pub count: usize,
    pub percentage: f64,
}

/// Token counts per category of one reference.
///
/// Rows follow the category domain order and always include zero-count
/// categories, so `rows` is stable across texts for the same reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDistribution<K> {
    pub kind: ReferenceKind,
    pub token_count: usize,
    pub rows: Vec<DistributionRow<K>>,
}

impl<K: PartialEq> LevelDistribution<K> {
    pub fn row(&self, category: &Category<K>) -> Option<&DistributionRow<K>> {
        self.rows.iter().find(|r| &r.category == category)
    }

    pub fn count_of(&self, category: &Category<K>) -> usize {
        self.row(category).map_or(0, |r| r.count)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Rows with at least one token. Tables keep every row; charts only draw these.
    pub fn charted(&self) -> Vec<&DistributionRow<K>> {
        self.rows.iter().filter(|r| r.count > 0).collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.count_of(&Category::Unknown)
    }
}

/// Classifies every token against `table` and tallies the result over `domain`.
///
/// Tokens missing from the table count as `Unknown`. A category produced by the
/// table but absent from `domain` is appended after the domain rows, so the
/// counts always sum to `tokens.len()`.
pub fn compute_distribution<K, S>(
    tokens: &[S],
    table: &ReferenceTable<K>,
    domain: &[Category<K>],
) -> LevelDistribution<K>
where
    K: Clone + Eq + Hash,
    S: AsRef<str>,
{
    let token_count = tokens.len();
    let mut tally: HashMap<Category<K>, usize> = HashMap::new();
    let mut extra: Vec<Category<K>> = Vec::new();

    for token in tokens {
        let category = table.lookup(token.as_ref());
        if !domain.contains(&category) && !extra.contains(&category) {
            extra.push(category.clone());
        }
        *tally.entry(category).or_default() += 1;
    }

    let rows = domain
        .iter()
        .chain(extra.iter())
        .map(|category| {
            let count = tally.get(category).copied().unwrap_or(0);
            DistributionRow {
                category: category.clone(),
                count,
                percentage: percent(count, token_count),
            }
        })
        .collect();

    LevelDistribution {
        kind: table.kind(),
        token_count,
        rows,
    }
}
