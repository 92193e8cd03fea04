use lazy_dijkstra::web::server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port from the first argument or LAZY_DIJKSTRA_PORT
    let config = ServerConfig::from_env()?;

    println!("Starting shortest path server...");
    println!("  Port: {}", config.port);
    println!("  CORS enabled: {}", config.enable_cors);
    println!("  Max sessions: {}", config.max_sessions);
    println!();

    start_server(config).await?;

    Ok(())
}
