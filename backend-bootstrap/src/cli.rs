use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boxoffice-copier")]
#[command(about = "Copies event series between box office accounts", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP front-end (default)
    Serve,
    /// Copy one event series and print the result
    Copy {
        #[arg(long)]
        series_id: String,
        #[arg(long)]
        source_api_key: Option<String>,
        #[arg(long)]
        target_api_key: Option<String>,
    },
    /// List the source account's event series
    ListSeries {
        #[arg(long)]
        source_api_key: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
