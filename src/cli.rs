// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for get-node-codename
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::Parser;

/// CLI argument parser - bools required for clap flag parsing
#[derive(Parser)]
#[command(
    name = "get-node-codename",
    version,
    about = "Print the Node.js LTS codename for a version",
    after_help = "Exit status:\n  0  success, including when no LTS codename is found\n  1  the release index could not be fetched or parsed\n  2  invalid command-line usage",
    disable_version_flag = true
)]
#[command(arg(clap::Arg::new("version").long("version").action(clap::ArgAction::Version).help("Print version")))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Version to resolve: lts, latest, a major version (20) or a full version (20.11.1, v20.11.1)
    #[arg(value_name = "VERSION", default_value = "lts")]
    pub target_version: String,

    /// List codenames for every LTS release
    #[arg(long = "all")]
    pub all: bool,

    /// With --all, print only the distinct codenames
    #[arg(long = "names-only")]
    pub names_only: bool,

    /// Format codenames as lts/<name> (as used in .nvmrc)
    #[arg(long = "rc-format")]
    pub rc_format: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion script (only bash is supported currently)
    #[arg(long = "completion", value_name = "SHELL", value_parser = parse_completion_shell)]
    pub completion: Option<String>,
}

fn parse_completion_shell(s: &str) -> Result<String, String> {
    match s.to_lowercase().as_str() {
        "bash" => Ok(s.to_lowercase()),
        _ => Err(format!("unsupported shell: {s} (only 'bash' is supported)")),
    }
}
