// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Errors raised while fetching the release index

use thiserror::Error;

/// Failure to obtain a usable release index
///
/// None of these are retried; the binary prints the message and exits with 1.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connection could not be established or the body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] attohttpc::Error),

    /// The server answered with anything other than 200 OK
    #[error("Failed to fetch {url}: {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of release entries
    #[error("Failed to parse JSON from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure of a full lookup run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
