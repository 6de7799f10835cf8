//! HTTP server mode

use std::path::Path;

use anyhow::anyhow;
use colored::Colorize;
use tiny_http::Server;

use crate::config::Config;
use crate::core::ports::LegalityEngine as _;
use crate::engine;
use crate::server::tiny_http::handle_api_request;

/// Run the HTTP server with the given config file.
pub fn serve(config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;

    engine::shared().init();

    let server = Server::http(config.addr())
        .map_err(|err| anyhow!("failed to bind {}: {err}", config.addr()))?;

    println!(
        "{}",
        format!("Listening on http://{}", config.addr()).green()
    );
    log::info!("serving legality API on {}", config.addr());

    for mut request in server.incoming_requests() {
        log::debug!("{} {}", request.method(), request.url());
        let response = handle_api_request(&mut request);
        if let Err(err) = request.respond(response) {
            log::warn!("failed to write response: {err}");
        }
    }

    Ok(())
}
