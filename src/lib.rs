// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Node.js LTS Codename Library
//!
//! This library fetches the Node.js release index and resolves LTS codenames
//! from it: the codename of a given version, of the newest LTS release, or of
//! every LTS release known to the index.

pub mod codename;
pub mod error;
pub mod index;
pub mod selector;

use std::io::Write;

pub use codename::{NO_LTS_CODENAME, format_codename, write_all, write_single};
pub use error::{Error, FetchError};
pub use index::{NODE_INDEX_JSON_URL, VersionRecord, fetch_index, parse_index};
pub use selector::{Selector, find_matching_version};

/// What to look up and how to print it
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Positional version argument, `None` meaning `lts`
    pub selector: Option<String>,
    /// List every LTS release instead of resolving one
    pub all: bool,
    /// With `all`, print only distinct codenames
    pub names_only: bool,
    /// Print codenames as `lts/<name>`
    pub rc_format: bool,
}

/// Resolve `query` against an already fetched index and write the result
///
/// # Errors
/// Returns any error from the underlying writer
pub fn resolve<W: Write>(
    out: &mut W,
    query: &Query,
    versions: &[VersionRecord],
) -> std::io::Result<()> {
    if query.all {
        return write_all(out, versions, query.names_only, query.rc_format);
    }

    let selector = Selector::parse(query.selector.as_deref());
    tracing::debug!(?selector, "resolving single version");
    let found = find_matching_version(&selector, versions);
    if let Some(record) = found {
        tracing::debug!(version = %record.version, lts = %record.lts, "matched record");
    }
    write_single(out, found, query.rc_format)
}

/// Fetch the index at `url` and resolve `query` against it
///
/// Nothing is written to `out` unless the index was fetched and decoded.
///
/// # Errors
/// Returns `Error::Fetch` if the index cannot be obtained and
/// `Error::Output` if writing fails
pub fn run<W: Write>(out: &mut W, query: &Query, url: &str) -> Result<(), Error> {
    let versions = fetch_index(url)?;
    resolve(out, query, &versions)?;
    Ok(())
}

/// Print a failed run to `err` and map the outcome to an exit status
///
/// Returns 0 on success. On failure the message goes to `err` and 1 is
/// returned; stdout is left untouched.
#[must_use]
pub fn report<E: Write>(result: Result<(), Error>, err: &mut E) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nothing more can be reported if stderr itself is gone
            let _ = writeln!(err, "{e}");
            1
        }
    }
}
