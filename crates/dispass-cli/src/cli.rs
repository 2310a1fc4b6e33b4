use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use dispass_core::VERSION;

/// DisPass - Generate passphrases from a master password and a label
#[derive(Parser)]
#[command(name = "dispass")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "DISPASS_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parameter overrides shared by commands that resolve label specs
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Passphrase length for labels that do not specify one
    #[arg(short, long, value_name = "LENGTH")]
    pub length: Option<usize>,

    /// Algorithm for labels that do not specify one
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algo: Option<String>,

    /// Sequence number for labels that do not specify one
    #[arg(short, long, value_name = "SEQNO")]
    pub seqno: Option<u32>,

    /// Charset to fold dispass3 output onto (light, full)
    #[arg(long, value_name = "CHARSET")]
    pub charset: Option<String>,

    /// Reject malformed label specs instead of falling back to defaults
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Label specs: label[:length[:algorithm[:seqno]]]
    #[arg(value_name = "LABELSPEC", required = true)]
    pub labels: Vec<String>,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Ask for the password twice (use when creating a new passphrase)
    #[arg(short, long)]
    pub create: bool,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub password_stdin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Label specs: label[:length[:algorithm[:seqno]]]
    #[arg(value_name = "LABELSPEC", required = true)]
    pub labels: Vec<String>,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `algorithms` command
#[derive(Args)]
pub struct AlgorithmsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a config file with the built-in defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate passphrases for one or more labels
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show the parameters a label spec resolves to, without a password
    Inspect(InspectArgs),

    /// List registered algorithms and charsets
    Algorithms(AlgorithmsArgs),

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigSubcommand,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),
}
