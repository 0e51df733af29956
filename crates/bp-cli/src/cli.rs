use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blueprints",
    about = "Blueprints — author-owned point drawings",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML service configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Use the remote API instead of the in-memory mock
    #[arg(long, global = true)]
    pub remote: bool,

    /// Base URL of the remote API
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all known authors
    Authors,
    /// List an author's blueprints
    List(ListArgs),
    /// Render a blueprint in the terminal
    Show(ShowArgs),
    /// Show the top blueprints by point count
    Top,
    /// Create a new blueprint
    Create(CreateArgs),
    /// Update an existing blueprint
    Update(UpdateArgs),
    /// Delete a blueprint
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ListArgs {
    pub author: String,
}

#[derive(Args)]
pub struct ShowArgs {
    pub author: String,
    pub name: String,
}

#[derive(Args)]
pub struct CreateArgs {
    pub author: String,
    pub name: String,
    /// Points as JSON, e.g. '[{"x":10,"y":10},{"x":40,"y":60}]'
    #[arg(long)]
    pub points: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub author: String,
    pub name: String,
    /// New name for the blueprint
    #[arg(long)]
    pub rename: Option<String>,
    /// Replacement points as JSON
    #[arg(long)]
    pub points: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub author: String,
    pub name: String,
}
