//! Application state for the web server.

use std::sync::Arc;

use tabsum::{Analyzer, AnalyzerConfig};

use super::ServerConfig;

/// Shared application state.
///
/// The analyzer holds only immutable configuration; every request runs its
/// own pipeline pass, so nothing mutable is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// The analysis pipeline.
    pub analyzer: Arc<Analyzer>,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create application state from the server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        let analyzer = Analyzer::with_config(AnalyzerConfig {
            max_bytes: Some(config.max_upload_bytes),
            ..AnalyzerConfig::default()
        });

        Self {
            analyzer: Arc::new(analyzer),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
