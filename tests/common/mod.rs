#![allow(dead_code)]

use lexilevel::reference::types::{Lesson, Level, ReferenceKind};
use lexilevel::reference::{ReferenceSet, ReferenceTable};
use lexilevel::segment::Segmenter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn lv(v: u8) -> Level {
    Level::new(v).expect("level in range")
}

/// Returns the same tokens for any input text.
pub struct FixedSegmenter(pub Vec<String>);

impl FixedSegmenter {
    pub fn new(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl Segmenter for FixedSegmenter {
    fn segment(&self, _text: &str) -> Vec<String> {
        self.0.clone()
    }
}

/// HSK {你好: 1}, TOCFL {}, IC {你好: lesson 2}.
pub fn scenario_references() -> ReferenceSet {
    ReferenceSet::new(
        ReferenceTable::from_entries(ReferenceKind::Hsk, [("你好", lv(1))]),
        ReferenceTable::new(ReferenceKind::Tocfl),
        ReferenceTable::from_entries(ReferenceKind::Ic, [("你好", Lesson::new("2"))]),
    )
}

/// A slightly larger set used by property and CLI tests.
pub fn sample_references() -> ReferenceSet {
    ReferenceSet::new(
        ReferenceTable::from_entries(
            ReferenceKind::Hsk,
            [
                ("我", lv(1)),
                ("你", lv(1)),
                ("学习", lv(1)),
                ("中文", lv(2)),
                ("经济", lv(4)),
                ("叛徒", lv(7)),
            ],
        ),
        ReferenceTable::from_entries(
            ReferenceKind::Tocfl,
            [("我", lv(1)), ("學習", lv(2)), ("经济", lv(3))],
        ),
        ReferenceTable::from_entries(
            ReferenceKind::Ic,
            [
                ("你", Lesson::new("1")),
                ("我", Lesson::new("1")),
                ("学习", Lesson::new("7")),
                ("中文", Lesson::new("6")),
            ],
        ),
    )
}

pub fn write_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).expect("create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("write temp file");
    }
    path
}

/// Three well-formed reference CSVs in a temp dir.
pub struct ReferenceFiles {
    pub dir: TempDir,
    pub hsk: PathBuf,
    pub tocfl: PathBuf,
    pub ic: PathBuf,
}

impl ReferenceFiles {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let hsk = write_file(
            dir.path(),
            "hsk.csv",
            &["word,level", "你好,1", "学习,1", "中文,2", "经济,4"],
        );
        let tocfl = write_file(dir.path(), "tocfl.csv", &["word,level", "你好,1", "经济,3"]);
        let ic = write_file(
            dir.path(),
            "ic.csv",
            &["word,lesson", "你好,1", "中文,6", "学习,7", "再见,1"],
        );
        Self { dir, hsk, tocfl, ic }
    }
}
