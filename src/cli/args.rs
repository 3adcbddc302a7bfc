use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stl")]
#[command(about = "Translate between Indian languages with the Sarvam AI API")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code, or 'auto' (e.g., en-IN, auto)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., hi-IN, ta-IN)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode for translation
    Chat {
        /// Source language code, or 'auto'
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code
        #[arg(short = 't', long = "to")]
        to: Option<String>,
    },
    /// List supported language codes
    Languages,
    /// Save the API key for this login session
    Key {
        /// API subscription key (prompted for if omitted)
        key: Option<String>,

        /// Show the stored key in masked form instead of saving
        #[arg(long, conflicts_with = "key")]
        show: bool,
    },
    /// Configure default languages
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
