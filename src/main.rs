// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// Allow multiple crate versions for Windows-only dependencies (we only target Linux)
#![allow(clippy::multiple_crate_versions)]
//! get-node-codename - Main Application
//!
//! Entry point for the get-node-codename CLI tool, which looks up Node.js
//! LTS codenames in the public release index.
//!
//! The application supports:
//! - Resolving the codename of the newest LTS release, the latest release,
//!   a major version or an exact version
//! - Listing every LTS version with its codename, or only distinct codenames
//! - Printing codenames in the `lts/<name>` form used by `.nvmrc` files

mod cli;

use std::io::{self, Write};
use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use node_codename::{NODE_INDEX_JSON_URL, Query, report, run};

/// Main application entry point
///
/// Parses command line arguments, fetches the index and prints the result.
/// Any fetch or parse failure is reported on stderr with exit status 1.
fn main() {
    let cli = Cli::parse();

    // Handle completion generation first (exits immediately)
    if cli.completion.is_some() {
        print_bash_completion();
        return;
    }

    init_logging(cli.verbose);

    let query = Query {
        selector: Some(cli.target_version),
        all: cli.all,
        names_only: cli.names_only,
        rc_format: cli.rc_format,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result =
        run(&mut out, &query, NODE_INDEX_JSON_URL).and_then(|()| out.flush().map_err(Into::into));

    // Handle errors by printing to stderr and exiting with non-zero status
    let code = report(result, &mut io::stderr());
    if code != 0 {
        exit(code);
    }
}

/// Install the stderr log subscriber
///
/// `--verbose` enables debug output for this crate; `RUST_LOG` overrides
/// the default filter entirely.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "node_codename=debug,get_node_codename=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Print bash completion script
fn print_bash_completion() {
    print!(
        r#"# bash completion for get-node-codename

_get_node_codename_completions() {{
    local cur
    COMPREPLY=()
    cur="${{COMP_WORDS[COMP_CWORD]}}"

    if [[ "${{cur}}" == -* ]]; then
        local options=(
            "--all           (List codenames for every LTS release)"
            "--completion    (Generate shell completion script)"
            "-h              (Print help)"
            "--help          (Print help)"
            "--names-only    (With --all, print only distinct codenames)"
            "--rc-format     (Format codenames as lts/<name>)"
            "-v              (Make the operation more talkative)"
            "--verbose       (Make the operation more talkative)"
            "--version       (Print version)"
        )

        local IFS=$'\n'
        local opt name padded
        local width=$((COLUMNS - 1))
        for opt in "${{options[@]}}"; do
            name="${{opt%%  *}}"
            if [[ "$name" == "${{cur}}"* ]]; then
                printf -v padded "%-${{width}}s" "$opt"
                COMPREPLY+=("$padded")
            fi
        done

        if ((${{#COMPREPLY[@]}} == 1)); then
            COMPREPLY[0]="${{COMPREPLY[0]%%  *}}"
        fi
    else
        COMPREPLY=($(compgen -W "lts latest" -- "${{cur}}"))
    fi
}}

complete -o nosort -F _get_node_codename_completions get-node-codename
"#
    );
}
