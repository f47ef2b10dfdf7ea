use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "TaskBoard - a to-do board over a REST task API", long_about = None)]
struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the task list
    List,
    /// Add a new task
    Add {
        /// Task title; prompted for when omitted
        #[arg(long)]
        title: Option<String>,
        /// Task description; prompted for when omitted
        #[arg(long)]
        task: Option<String>,
    },
    /// Edit an existing task
    Edit { id: String },
    /// Toggle a task's completion flag
    Toggle { id: String },
    /// Remove a task after confirmation
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Store the API token
    Login {
        /// Token value; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// Clear the stored API token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    commands::utils::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::run(cli.base_url).await,
        Commands::Add { title, task } => commands::add::run(cli.base_url, title, task).await,
        Commands::Edit { id } => commands::edit::run(cli.base_url, &id).await,
        Commands::Toggle { id } => commands::toggle::run(cli.base_url, &id).await,
        Commands::Remove { id, yes } => commands::remove::run(cli.base_url, &id, yes).await,
        Commands::Login { token } => commands::auth::login(token),
        Commands::Logout => commands::auth::logout(),
    }
}
