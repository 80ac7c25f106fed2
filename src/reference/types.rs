use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// The three vocabulary references a text is measured against.
#[derive(
    Debug, Clone, Copy, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    #[strum(serialize = "HSK")]
    Hsk,
    #[strum(serialize = "TOCFL")]
    Tocfl,
    #[strum(serialize = "IC")]
    Ic,
}

impl ReferenceKind {
    /// Name of the CSV column holding the level (or lesson) for this reference.
    pub fn value_column(&self) -> &'static str {
        match self {
            Self::Hsk | Self::Tocfl => "level",
            Self::Ic => "lesson",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Self::Hsk => "HSK Levels",
            Self::Tocfl => "TOCFL Levels",
            Self::Ic => "IC Lessons",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hsk => "HSK Level Analysis",
            Self::Tocfl => "TOCFL Level Analysis",
            Self::Ic => "Integrated Chinese Lesson Analysis",
        }
    }
}

/// Proficiency level shared by HSK and TOCFL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fixed category domain for level references: 1..=7, then Unknown.
    pub fn domain() -> Vec<Category<Level>> {
        (Self::MIN..=Self::MAX)
            .map(|v| Category::Known(Self(v)))
            .chain(std::iter::once(Category::Unknown))
            .collect()
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("level {} outside {}..={}", value, Self::MIN, Self::MAX))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integrated Chinese lesson identifier, kept verbatim from the reference file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lesson(String);

impl Lesson {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Label of the out-of-table category. Reserved: never a valid lesson id.
pub const UNKNOWN_LABEL: &str = "N/A";

/// Where a token falls in one reference: a known level/lesson or outside the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category<K> {
    Known(K),
    Unknown,
}

impl<K> Category<K> {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl<K: fmt::Display> fmt::Display for Category<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(k) => k.fmt(f),
            Self::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}
