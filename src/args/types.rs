use clap::Parser;

use crate::model::TournamentSnapshot;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tournament snapshot json (holes, entrants, scores, format). The leaderboard is printed to stdout.
    #[arg(
        short = 's',
        long,
        value_name = "SNAPSHOT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub snapshot: Option<TournamentSnapshot>,
    /// Start the http server instead of exiting after printing.
    #[arg(long)]
    pub serve: bool,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Pretty-print the leaderboard json.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub snapshot: Option<TournamentSnapshot>,
    pub serve: bool,
    pub bind_addr: String,
    pub pretty: bool,
}
