#[tokio::main]
async fn main() {
    if let Err(e) = wpp_analytics_cli::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
