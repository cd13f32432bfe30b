mod agent;
mod alerts;
mod chat;
mod cli;
mod config;
mod delivery;
mod forms;
mod history;
mod models;
mod search;
mod server;
mod ui;

use agent::ConciergeAgent;
use clap::Parser;
use cli::Args;
use dotenv::dotenv;
use server::Server;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = Args::parse();
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

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
