pub mod http_handlers;

use actix_web::web;

pub use http_handlers::*;

/// Routes served by the scoring engine.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaderboard", web::post().to(leaderboard))
        .route("/health", web::get().to(health));
}
