//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

/// claw: submit use cases to clawusecase.com
#[derive(Parser)]
#[command(name = "claw")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a use case
    ///
    /// Field flags are scanned permissively rather than declared here:
    /// `--title`, `--hook`, `--problem`, `--solution`, `--category`,
    /// `--skills` (comma-joined), `--requirements`, `--author-username`,
    /// `--author-handle`, `--author-platform`, `--author-link`, and
    /// `--anonymous`. Missing or malformed values are reported by
    /// validation, not by argument parsing.
    #[command(after_help = "\
Example:
  claw submit \\
    --title \"Email notifications for Pro subscriptions\" \\
    --hook \"Sends welcome emails automatically on upgrade\" \\
    --problem \"Users weren't getting confirmation emails...\" \\
    --solution \"Built a Resend integration that...\" \\
    --category \"Business/SaaS\" \\
    --skills \"GitHub,Stripe,Resend\" \\
    --author-username josephliow")]
    Submit {
        /// Submission field flags (see long help)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "FLAGS")]
        args: Vec<String>,
    },

    /// Retrieve an OAuth credential issued after browser sign-in
    Credential {
        /// Token printed by the sign-in flow
        #[arg(long)]
        token: String,
    },
}
