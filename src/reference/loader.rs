use super::types::{Lesson, Level, ReferenceKind, UNKNOWN_LABEL};
use super::ReferenceTable;
use crate::error::{LexiError, LxResult};
use csv::StringRecord;
use std::fs::File;
use std::hash::Hash;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub fn load_level_table<P: AsRef<Path>>(
    path: P,
    kind: ReferenceKind,
) -> LxResult<ReferenceTable<Level>> {
    let path = path.as_ref();
    let table = read_level_table(open_reference(path, kind)?, kind)?;
    log_loaded(&table, path);
    Ok(table)
}

pub fn load_lesson_table<P: AsRef<Path>>(
    path: P,
    kind: ReferenceKind,
) -> LxResult<ReferenceTable<Lesson>> {
    let path = path.as_ref();
    let table = read_lesson_table(open_reference(path, kind)?, kind)?;
    log_loaded(&table, path);
    Ok(table)
}

/// Reads a `word,level` table. Levels must be integers in 1..=7.
pub fn read_level_table<R: Read>(reader: R, kind: ReferenceKind) -> LxResult<ReferenceTable<Level>> {
    read_table(reader, kind, parse_level)
}

/// Reads a `word,lesson` table. Lesson ids are kept as written.
pub fn read_lesson_table<R: Read>(
    reader: R,
    kind: ReferenceKind,
) -> LxResult<ReferenceTable<Lesson>> {
    read_table(reader, kind, parse_lesson)
}

fn open_reference(path: &Path, kind: ReferenceKind) -> LxResult<File> {
    if !path.exists() {
        return Err(LexiError::MissingReference {
            kind,
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}

fn read_table<R, K, F>(reader: R, kind: ReferenceKind, parse: F) -> LxResult<ReferenceTable<K>>
where
    R: Read,
    K: Clone + Eq + Hash,
    F: Fn(&str) -> Result<K, String>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let word_idx = column_index(&headers, "word")
        .ok_or_else(|| malformed(kind, 0, "missing 'word' column"))?;
    let value_col = kind.value_column();
    let value_idx = column_index(&headers, value_col)
        .ok_or_else(|| malformed(kind, 0, format!("missing '{}' column", value_col)))?;

    let mut table = ReferenceTable::new(kind);

    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| malformed(kind, row, e.to_string()))?;

        let word = record.get(word_idx).unwrap_or_default();
        if word.is_empty() {
            return Err(malformed(kind, row, "empty word"));
        }

        let raw = record.get(value_idx).unwrap_or_default();
        let value = parse(raw).map_err(|reason| malformed(kind, row, reason))?;

        if !table.insert(word, value) {
            debug!("   [{}] Row {}: duplicate word '{}' ignored", kind, row, word);
        }
    }

    Ok(table)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
}

fn parse_level(raw: &str) -> Result<Level, String> {
    // Spreadsheet exports sometimes write integer levels as "3.0".
    let value = raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    });

    match value {
        Some(v) => u8::try_from(v)
            .ok()
            .and_then(Level::new)
            .ok_or_else(|| format!("level {} outside {}..={}", v, Level::MIN, Level::MAX)),
        None => Err(format!("invalid level '{}'", raw)),
    }
}

fn parse_lesson(raw: &str) -> Result<Lesson, String> {
    if raw.is_empty() {
        return Err("empty lesson".to_string());
    }
    if raw.eq_ignore_ascii_case(UNKNOWN_LABEL) {
        return Err(format!(
            "lesson id '{}' is reserved for words outside the table",
            raw
        ));
    }
    Ok(Lesson::new(raw))
}

fn malformed(kind: ReferenceKind, row: usize, reason: impl Into<String>) -> LexiError {
    LexiError::Malformed {
        kind,
        row,
        reason: reason.into(),
    }
}

fn log_loaded<K: Clone + Eq + Hash>(table: &ReferenceTable<K>, path: &Path) {
    info!(
        "   -> {} from '{}': {} words, {} categories",
        table.kind(),
        path.display(),
        table.len(),
        table.distinct_values().len()
    );
    if table.duplicates() > 0 {
        debug!(
            "   ⚠️  {} duplicate words skipped in {}",
            table.duplicates(),
            table.kind()
        );
    }
}
