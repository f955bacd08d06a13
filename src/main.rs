use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sprofcli::{cli, config, error, types::CallbackParams, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize through the companion auth backend
    Auth,

    /// Show the current user's profile
    Profile,

    /// Handle playlists
    Playlists(PlaylistsOptions),

    /// Listening statistics
    Top(TopOptions),

    /// Clear the stored session
    Logout,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle playlists")]
pub struct PlaylistsOptions {
    /// Show a single playlist by id instead of listing all of them
    #[clap(long)]
    pub id: Option<String>,

    /// Include audio features for the playlist tracks
    #[clap(long, requires = "id")]
    pub features: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Listening statistics")]
pub struct TopOptions {
    /// Subcommands under `top` (e.g., `artists`)
    #[command(subcommand)]
    pub command: TopSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TopSubcommand {
    /// Most listened-to artists
    Artists(TopQueryOpts),

    /// Most listened-to tracks
    Tracks(TopQueryOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct TopQueryOpts {
    /// Time range to aggregate over; short, medium or long
    #[clap(
        long,
        default_value = "long",
        value_parser = utils::parse_time_range,
    )]
    pub range: utils::TimeRange,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<CallbackParams>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Profile => cli::profile().await,

        Command::Playlists(opt) => cli::playlists(opt.id, opt.features).await,

        Command::Top(opt) => match opt.command {
            TopSubcommand::Artists(o) => cli::top_artists(o.range).await,
            TopSubcommand::Tracks(o) => cli::top_tracks(o.range).await,
        },

        Command::Logout => cli::logout().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
