// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Node.js release index retrieval
//!
//! This module knows where the release index lives, how a single entry of it
//! looks, and how to download and decode the whole list. The index is fetched
//! fresh on every invocation; nothing is cached.

use attohttpc::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// URL of the public Node.js release index
pub const NODE_INDEX_JSON_URL: &str = "https://nodejs.org/dist/index.json";

/// One release entry of the index
///
/// Only the two fields needed for codename lookup are decoded. `lts` is kept
/// as a raw JSON value because the index uses `false` for non-LTS releases and
/// a codename string otherwise.
///
/// Any JSON value decodes. An entry that is not an object, or whose `version`
/// is not a string, keeps its slot in the list as an inert record: no version,
/// no codename.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct VersionRecord {
    /// Version string (e.g. "v20.11.1")
    pub version: String,
    /// Codename string or a falsy sentinel
    pub lts: Value,
}

impl From<Value> for VersionRecord {
    fn from(entry: Value) -> Self {
        let Value::Object(mut fields) = entry else {
            return Self::new("", Value::Null);
        };
        match fields.remove("version") {
            Some(Value::String(version)) => Self {
                version,
                lts: fields.remove("lts").unwrap_or(Value::Null),
            },
            _ => Self::new("", Value::Null),
        }
    }
}

impl VersionRecord {
    /// Build a record from a version and an `lts` value
    pub fn new(version: impl Into<String>, lts: impl Into<Value>) -> Self {
        Self {
            version: version.into(),
            lts: lts.into(),
        }
    }

    /// The `lts` field if it is a string, empty or not
    #[must_use]
    pub fn codename(&self) -> Option<&str> {
        self.lts.as_str()
    }

    /// Whether the `lts` field is a non-empty codename
    #[must_use]
    pub fn has_codename(&self) -> bool {
        self.codename().is_some_and(|name| !name.is_empty())
    }

    /// Whether the `lts` field is truthy
    ///
    /// `null`, `false`, zero and the empty string are falsy. Arrays, objects
    /// and every other value are truthy.
    #[must_use]
    pub fn is_lts_truthy(&self) -> bool {
        match &self.lts {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Decode the body of an index response
///
/// # Errors
/// Returns `FetchError::Parse` if the body is not a JSON array of objects
pub fn parse_index(url: &str, body: &str) -> Result<Vec<VersionRecord>, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Download and decode the release index at `url`
///
/// The list is returned in the order the server sent it, which for the
/// official index is newest first.
///
/// # Errors
/// Returns `FetchError::Transport` on connection or read failure,
/// `FetchError::Status` for any status other than 200, and
/// `FetchError::Parse` if the body cannot be decoded
pub fn fetch_index(url: &str) -> Result<Vec<VersionRecord>, FetchError> {
    tracing::debug!(%url, "fetching release index");

    // Redirects are reported like any other non-200 status
    let resp = attohttpc::get(url).follow_redirects(false).send()?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text()?;
    let versions = parse_index(url, &body)?;
    tracing::debug!(count = versions.len(), "decoded release index");
    Ok(versions)
}
