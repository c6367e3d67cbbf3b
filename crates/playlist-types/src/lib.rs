use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SongId = u32;

/// Fixed set of catalog categories. The wire form is the upper-case
/// name; parsing accepts any casing but nothing outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SongCategory {
  #[serde(rename = "JAZZ")]
  Jazz,
  #[serde(rename = "POP")]
  Pop,
  #[serde(rename = "CLASSICAL")]
  Classical,
}

/// Returned when a category string matches no [`SongCategory`] member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not found Category with value = {0}")]
pub struct UnknownCategory(pub String);

impl SongCategory {
  pub fn name(&self) -> &'static str {
    match self {
      SongCategory::Jazz => "JAZZ",
      SongCategory::Pop => "POP",
      SongCategory::Classical => "CLASSICAL",
    }
  }
}

impl fmt::Display for SongCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for SongCategory {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_uppercase().as_str() {
      "JAZZ" => Ok(SongCategory::Jazz),
      "POP" => Ok(SongCategory::Pop),
      "CLASSICAL" => Ok(SongCategory::Classical),
      _ => Err(UnknownCategory(s.to_string())),
    }
  }
}

// {
//   "id": 4,
//   "title": "For The Lover That I Lost",
//   "description": "Live At Abbey Road Studios",
//   "category": "POP",
//   "duration": "3:01",
//   "artistName": "Sam Smith"
// }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  pub title: String,
  pub description: String,
  pub category: SongCategory,
  pub duration: String,
  #[serde(rename = "artistName")]
  pub artist_name: String,
}
