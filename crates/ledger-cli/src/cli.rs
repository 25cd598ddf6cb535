use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ledger_state::VERSION;

/// Ledger - personal-finance ledger client
#[derive(Parser)]
#[command(name = "ledger")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Session identifier (scopes the selected ledger, like a browser tab)
    #[arg(short, long, global = true, env = "LEDGER_SESSION")]
    pub session: Option<String>,

    /// Backend API base URL (overrides config)
    #[arg(long, global = true, env = "LEDGER_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level unless LEDGER_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the selected ledger
    Context {
        #[command(subcommand)]
        command: ContextCommand,
    },

    /// Manage the API bearer token
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Tag suggestions and interactive tag input
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ContextCommand {
    /// Show the selected ledger
    Show(OutputArgs),

    /// Select a ledger
    Set(SetContextArgs),

    /// Forget the selected ledger
    Clear,
}

/// Arguments for `context set`
#[derive(Args)]
pub struct SetContextArgs {
    /// Ledger identifier
    #[arg(value_name = "ID")]
    pub id: String,

    /// Ledger display name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Currency symbol (e.g., "$")
    #[arg(value_name = "CURRENCY")]
    pub currency_symbol: String,

    /// Ledger description
    #[arg(long)]
    pub description: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store a bearer token
    Login {
        /// Bearer token issued by the backend
        #[arg(long, env = "LEDGER_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Show whether a token is stored
    Status(OutputArgs),

    /// Forget the token and the selected ledger
    Logout,
}

#[derive(Subcommand)]
pub enum TagsCommand {
    /// Fetch suggestions for a partial tag name
    Suggest(SuggestArgs),

    /// Edit a tag list interactively over stdin
    Input(InputArgs),
}

/// Arguments for `tags suggest`
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial tag name
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `tags input`
#[derive(Args)]
pub struct InputArgs {
    /// Existing tags on the transaction
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Existing tags as a JSON array of names or {name, tag_id} objects
    #[arg(long, value_name = "JSON", conflicts_with = "tag")]
    pub tags_json: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show(OutputArgs),

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Shared output flags
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (pretty, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}
