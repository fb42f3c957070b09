// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version selector parsing and single-result lookup
//!
//! The positional argument of the CLI picks one release out of the index.
//! This module turns that argument into a [`Selector`] and scans the index
//! for the first matching record.

use crate::index::VersionRecord;

/// Interpretation of the positional version argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `lts`, an empty argument or no argument: the newest LTS release
    Lts,
    /// `latest`: the first entry of the index, only if it is LTS
    Latest,
    /// A bare major version such as `20`
    Major(String),
    /// A full version normalized to carry a leading `v` (e.g. `v20.11.1`)
    Exact(String),
    /// Anything else; never matches
    Unrecognized(String),
}

impl Selector {
    /// Parse a selector from the optional positional argument
    ///
    /// # Examples
    /// ```
    /// use node_codename::selector::Selector;
    ///
    /// assert_eq!(Selector::parse(None), Selector::Lts);
    /// assert_eq!(Selector::parse(Some("20")), Selector::Major("20".to_string()));
    /// assert_eq!(
    ///     Selector::parse(Some("20.11.1")),
    ///     Selector::Exact("v20.11.1".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some("" | "lts") => Self::Lts,
            Some("latest") => Self::Latest,
            Some(s) if is_digits(s) => Self::Major(s.to_string()),
            Some(s) if is_full_version(s) => Self::Exact(normalize_version(s)),
            Some(s) => Self::Unrecognized(s.to_string()),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check for `MAJOR.MINOR.PATCH` with an optional leading `v`
///
/// # Examples
/// ```
/// use node_codename::selector::is_full_version;
/// assert!(is_full_version("20.11.1"));
/// assert!(is_full_version("v20.11.1"));
/// assert!(!is_full_version("20.11"));
/// assert!(!is_full_version("20.11.1-rc.1"));
/// ```
#[must_use]
pub fn is_full_version(s: &str) -> bool {
    let bare = s.strip_prefix('v').unwrap_or(s);
    let parts: Vec<&str> = bare.split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| is_digits(part))
}

/// Ensure a version string carries a leading `v`
///
/// # Examples
/// ```
/// use node_codename::selector::normalize_version;
/// assert_eq!(normalize_version("20.11.1"), "v20.11.1");
/// assert_eq!(normalize_version("v20.11.1"), "v20.11.1");
/// ```
#[must_use]
pub fn normalize_version(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    }
}

/// Find the record selected by `selector`
///
/// The index is assumed to be ordered newest first, and every branch returns
/// the first hit in list order.
///
/// # Arguments
/// * `selector` - Parsed positional argument
/// * `versions` - Release index as fetched
///
/// # Returns
/// `Some(record)` for a match, `None` otherwise. A match does not guarantee
/// the record has a codename: exact versions match regardless of `lts`.
#[must_use]
pub fn find_matching_version<'a>(
    selector: &Selector,
    versions: &'a [VersionRecord],
) -> Option<&'a VersionRecord> {
    match selector {
        Selector::Lts => versions.iter().find(|v| v.has_codename()),
        Selector::Latest => versions.first().filter(|v| v.has_codename()),
        Selector::Major(major) => {
            let prefix = format!("v{major}.");
            versions
                .iter()
                .find(|v| v.version.starts_with(&prefix) && v.is_lts_truthy())
        }
        Selector::Exact(version) => versions.iter().find(|v| &v.version == version),
        Selector::Unrecognized(_) => None,
    }
}
