//! Fixed segment mappings loaded from YAML.
//!
//! ```yaml
//! segments:
//!   1: p1
//!   "2": p2
//! ```
//!
//! User ids may be written as plain or quoted integers. Blank segment codes
//! are skipped, leaving the user unsegmented.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use cartoffer::prelude::{Segment, StaticSegmentResolver, UserId};

use crate::domain::segments::SegmentFileError;

#[derive(Debug, Deserialize)]
struct SegmentsDocument {
    #[serde(default)]
    segments: FxHashMap<FileUserId, Segment>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(i64),
    Text(String),
}

#[derive(Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawUserId")]
struct FileUserId(UserId);

impl TryFrom<RawUserId> for FileUserId {
    type Error = String;

    fn try_from(raw: RawUserId) -> Result<Self, Self::Error> {
        match raw {
            RawUserId::Number(id) => Ok(Self(UserId(id))),
            RawUserId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(|id| Self(UserId(id)))
                .map_err(|source| format!("user id {text:?} is not an integer: {source}")),
        }
    }
}

/// Parse a YAML segment mapping.
///
/// # Errors
///
/// Returns an error if `yaml` is not a valid segment mapping.
pub fn parse_segments(yaml: &str) -> Result<StaticSegmentResolver, serde_norway::Error> {
    let document: SegmentsDocument = serde_norway::from_str(yaml)?;

    Ok(document
        .segments
        .into_iter()
        .filter(|(_, segment)| !segment.as_str().trim().is_empty())
        .map(|(FileUserId(user), segment)| (user, segment))
        .collect())
}

/// Load a YAML segment mapping from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_segments_file(path: &Path) -> Result<StaticSegmentResolver, SegmentFileError> {
    let yaml = fs::read_to_string(path).map_err(|source| SegmentFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_segments(&yaml).map_err(|source| SegmentFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
