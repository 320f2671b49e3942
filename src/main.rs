#[tokio::main]
async fn main() {
    if let Err(e) = league_analytics::start_server().await {
        tracing::error!("Server stopped: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
