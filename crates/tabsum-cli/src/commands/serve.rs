//! Serve command - run the upload analysis server.

use colored::Colorize;

use crate::server::{app, state::AppState, ServerConfig};

pub fn run(
    port: u16,
    max_upload_mb: usize,
    allow_origin: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabsum=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig {
        port,
        max_upload_bytes: max_upload_mb * 1024 * 1024,
        allowed_origins: allow_origin,
    };

    let state = AppState::new(&config);

    println!(
        "{} {}",
        "Starting analysis server at".cyan().bold(),
        format!("http://localhost:{}", port).white().bold()
    );
    println!();
    println!("  Upload limit: {} MB", max_upload_mb);
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        if let Err(e) = app::run_server(state, config).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
