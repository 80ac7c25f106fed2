pub mod loader;
pub mod types;

use self::types::{Category, Lesson, Level, ReferenceKind};
use crate::config::ReferencePaths;
use crate::error::LxResult;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::info;

/// Immutable word -> level (or lesson) mapping for one reference.
#[derive(Debug, Clone)]
pub struct ReferenceTable<K> {
    kind: ReferenceKind,
    entries: HashMap<String, K>,
    // Distinct values in order of first appearance in the source file.
    values: Vec<K>,
    duplicates: usize,
}

impl<K: Clone + Eq + Hash> ReferenceTable<K> {
    pub fn new(kind: ReferenceKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
            values: Vec::new(),
            duplicates: 0,
        }
    }

    pub fn from_entries<I, S>(kind: ReferenceKind, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, K)>,
        S: Into<String>,
    {
        let mut table = Self::new(kind);
        for (word, value) in entries {
            table.insert(word, value);
        }
        table
    }

    /// Adds an entry. The first occurrence of a word wins; returns false for a duplicate.
    pub fn insert(&mut self, word: impl Into<String>, value: K) -> bool {
        let word = word.into();
        if self.entries.contains_key(&word) {
            self.duplicates += 1;
            return false;
        }
        if !self.values.contains(&value) {
            self.values.push(value.clone());
        }
        self.entries.insert(word, value);
        true
    }

    /// Exact string match, no normalisation.
    pub fn get(&self, token: &str) -> Option<&K> {
        self.entries.get(token)
    }

    pub fn lookup(&self, token: &str) -> Category<K> {
        match self.entries.get(token) {
            Some(value) => Category::Known(value.clone()),
            None => Category::Unknown,
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn distinct_values(&self) -> &[K] {
        &self.values
    }

    /// Number of words per value, in first-appearance order.
    pub fn value_counts(&self) -> Vec<(K, usize)> {
        let mut counts: HashMap<&K, usize> = HashMap::with_capacity(self.values.len());
        for value in self.entries.values() {
            *counts.entry(value).or_default() += 1;
        }
        self.values
            .iter()
            .map(|v| (v.clone(), counts.get(v).copied().unwrap_or(0)))
            .collect()
    }
}

impl ReferenceTable<Level> {
    pub fn domain(&self) -> Vec<Category<Level>> {
        Level::domain()
    }
}

impl ReferenceTable<Lesson> {
    /// Every lesson present in the table, then Unknown for out-of-table words.
    pub fn domain(&self) -> Vec<Category<Lesson>> {
        self.values
            .iter()
            .cloned()
            .map(Category::Known)
            .chain(std::iter::once(Category::Unknown))
            .collect()
    }
}

/// The three references, loaded once and shared read-only by every analysis.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    pub hsk: ReferenceTable<Level>,
    pub tocfl: ReferenceTable<Level>,
    pub ic: ReferenceTable<Lesson>,
}

impl ReferenceSet {
    pub fn new(
        hsk: ReferenceTable<Level>,
        tocfl: ReferenceTable<Level>,
        ic: ReferenceTable<Lesson>,
    ) -> Self {
        Self { hsk, tocfl, ic }
    }

    pub fn load(paths: &ReferencePaths) -> LxResult<Self> {
        info!("📚 Loading vocabulary references...");
        let hsk = loader::load_level_table(&paths.hsk, ReferenceKind::Hsk)?;
        let tocfl = loader::load_level_table(&paths.tocfl, ReferenceKind::Tocfl)?;
        let ic = loader::load_lesson_table(&paths.ic, ReferenceKind::Ic)?;
        Ok(Self::new(hsk, tocfl, ic))
    }
}
