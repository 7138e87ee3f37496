//! Game Server Binary
//!
//! Runs the HTTP server for the rock-paper-scissors API
//! and serves the embedded browser UI.

use ropasci::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    api::Server::run().await.unwrap();
}
