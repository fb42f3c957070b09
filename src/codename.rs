// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Codename formatting and listing
//!
//! Everything that turns selected records into output lines lives here. The
//! writers take any `io::Write` so the binary passes stdout and tests pass a
//! byte buffer.

use std::io::{self, Write};

use indexmap::{IndexMap, IndexSet};

use crate::index::VersionRecord;

/// Line printed when a lookup yields no codename
pub const NO_LTS_CODENAME: &str = "No LTS codename found";

/// Format a codename for display
///
/// With `rc_format` the name is lowercased, each run of whitespace becomes a
/// single underscore, and the result is prefixed with `lts/` (the form used
/// in `.nvmrc` files).
///
/// # Examples
/// ```
/// use node_codename::codename::format_codename;
/// assert_eq!(format_codename("Hydrogen", false), "Hydrogen");
/// assert_eq!(format_codename("Active LTS", true), "lts/active_lts");
/// ```
#[must_use]
pub fn format_codename(name: &str, rc_format: bool) -> String {
    if !rc_format {
        return name.to_string();
    }

    let mut formatted = String::with_capacity(name.len() + 4);
    formatted.push_str("lts/");
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                formatted.push('_');
            }
            in_whitespace = true;
        } else {
            formatted.push(c);
            in_whitespace = false;
        }
    }
    formatted
}

/// Map every version carrying a string codename to that codename
///
/// Insertion order follows the index. A repeated version keeps its first
/// position and takes the later codename.
#[must_use]
pub fn codename_map(versions: &[VersionRecord]) -> IndexMap<&str, &str> {
    versions
        .iter()
        .filter_map(|v| v.codename().map(|name| (v.version.as_str(), name)))
        .collect()
}

/// Distinct codenames of a mapping, in order of first appearance
#[must_use]
pub fn distinct_codenames<'a>(map: &IndexMap<&'a str, &'a str>) -> IndexSet<&'a str> {
    map.values().copied().collect()
}

/// Write the result of a single-record lookup
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_single<W: Write>(
    out: &mut W,
    found: Option<&VersionRecord>,
    rc_format: bool,
) -> io::Result<()> {
    match found.and_then(VersionRecord::codename) {
        Some(name) => writeln!(out, "{}", format_codename(name, rc_format)),
        None => writeln!(out, "{NO_LTS_CODENAME}"),
    }
}

/// Write every LTS codename of the index
///
/// Prints `<version>: <codename>` lines, or only the distinct codenames when
/// `names_only` is set.
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_all<W: Write>(
    out: &mut W,
    versions: &[VersionRecord],
    names_only: bool,
    rc_format: bool,
) -> io::Result<()> {
    let map = codename_map(versions);

    if names_only {
        for name in distinct_codenames(&map) {
            writeln!(out, "{}", format_codename(name, rc_format))?;
        }
    } else {
        for (version, name) in &map {
            writeln!(out, "{version}: {}", format_codename(name, rc_format))?;
        }
    }
    Ok(())
}
