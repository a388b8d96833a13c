//! Server configuration
//!
//! Every flag can also be set through the environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the translation server
#[derive(Parser, Debug, Clone)]
#[command(name = "drow-translatascan-web", about = "HTTP server for Common ↔ Drow translation")]
pub struct ServerConfig {
    /// Path to the JSON lexicon
    #[arg(long, env = "DROW_DICTIONARY_PATH", default_value = "data/drow_dictionary.json")]
    pub dictionary: PathBuf,

    /// Listen address
    #[arg(long, env = "DROW_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// Validate the configuration at startup. A missing lexicon is fatal.
    pub fn validate(&self) -> Result<(), String> {
        if !self.dictionary.exists() {
            return Err(format!(
                "Dictionary file can't be found at {}",
                self.dictionary.display()
            ));
        }
        if !self.dictionary.is_file() {
            return Err(format!(
                "Dictionary path is not a file: {}",
                self.dictionary.display()
            ));
        }
        Ok(())
    }
}
