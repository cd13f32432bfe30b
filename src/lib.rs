pub mod agent;
pub mod alerts;
pub mod chat;
pub mod cli;
pub mod config;
pub mod delivery;
pub mod forms;
pub mod history;
pub mod models;
pub mod search;
pub mod server;
pub mod ui;

use agent::ConciergeAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("HTTP API Port: {}", args.http_port);
    info!("Responses Path: {}", args.responses_path);
    info!("Search Index Path: {}", args.search_index_path);
    info!("Transcript Store Type: {}", args.transcript_type);
    info!("Mail API Base URL: {}", args.mail_base_url);
    info!("Spreadsheet Mirror: {}", args.sheet_webhook_url.is_some());
    info!("Preferences Path: {}", args.prefs_path);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let agent_args = args.clone();
    let agent = Arc::new(Mutex::new(ConciergeAgent::new(agent_args)?));
    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, agent, args.clone());
    server.run().await?;

    Ok(())
}
