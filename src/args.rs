pub mod types;
pub mod validation;

use clap::Parser;

pub use types::{Args, CleanArgs};

/// Parse the command line and check the combination of options makes sense.
///
/// # Errors
///
/// Will return `Err` if neither a snapshot nor server mode was requested
pub fn args_checks() -> Result<CleanArgs, String> {
    CleanArgs::try_from(Args::parse())
}

impl TryFrom<Args> for CleanArgs {
    type Error = String;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.snapshot.is_none() && !args.serve {
            return Err(
                "Nothing to do: pass --snapshot <FILE> to print a leaderboard or --serve to start the server."
                    .to_string(),
            );
        }

        Ok(CleanArgs {
            snapshot: args.snapshot,
            serve: args.serve,
            bind_addr: format!("{}:{}", args.host, args.port),
            pretty: args.pretty,
        })
    }
}
