use actix_web::{App, HttpServer};
use golf_scoring::args;
use golf_scoring::compute_leaderboard;
use golf_scoring::controller::leaderboard;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("golf_scoring=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Some(snapshot) = &args.snapshot {
        let board = compute_leaderboard(snapshot)?;
        let out = if args.pretty {
            serde_json::to_string_pretty(&board)?
        } else {
            serde_json::to_string(&board)?
        };
        println!("{out}");
    }

    if args.serve {
        info!("listening on {}", args.bind_addr);
        HttpServer::new(|| App::new().configure(leaderboard::configure))
            .bind(&args.bind_addr)?
            .run()
            .await?;
    }

    Ok(())
}
