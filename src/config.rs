use crate::error::{LexiError, LxResult};
use crate::segment::{SegmenterKind, TokenFilter};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_HSK_PATH: &str = "data/HSK_UTF8.csv";
pub const DEFAULT_TOCFL_PATH: &str = "data/TOCFL_UTF8.csv";
pub const DEFAULT_IC_PATH: &str = "data/IC_UTF8.csv";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub references: ReferencePaths,
    #[command(flatten)]
    pub analysis: AnalysisParams,
}

/// Locations of the three reference CSV files.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferencePaths {
    /// HSK table with `word,level` columns
    #[arg(long, default_value = DEFAULT_HSK_PATH)]
    pub hsk: PathBuf,
    /// TOCFL table with `word,level` columns
    #[arg(long, default_value = DEFAULT_TOCFL_PATH)]
    pub tocfl: PathBuf,
    /// Integrated Chinese table with `word,lesson` columns
    #[arg(long, default_value = DEFAULT_IC_PATH)]
    pub ic: PathBuf,
}

impl Default for ReferencePaths {
    fn default() -> Self {
        Self {
            hsk: PathBuf::from(DEFAULT_HSK_PATH),
            tocfl: PathBuf::from(DEFAULT_TOCFL_PATH),
            ic: PathBuf::from(DEFAULT_IC_PATH),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisParams {
    /// Word segmentation engine
    #[arg(long, default_value_t = SegmenterKind::Jieba)]
    pub segmenter: SegmenterKind,
    /// Drop punctuation-only tokens before counting
    #[arg(long, default_value_t = false)]
    pub skip_punctuation: bool,
}

impl AnalysisParams {
    pub fn token_filter(&self) -> TokenFilter {
        TokenFilter {
            skip_punctuation: self.skip_punctuation,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LxResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexiError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites file-provided values with flags the user typed explicitly.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(references.hsk, "hsk");
        update_if_present!(references.tocfl, "tocfl");
        update_if_present!(references.ic, "ic");

        update_if_present!(analysis.segmenter, "segmenter");
        update_if_present!(analysis.skip_punctuation, "skip_punctuation");
    }
}
