//! Serve command implementation
//!
//! @module cli/serve

use clap::Args;

use crate::core::config::Config;
use crate::core::error::Result;

/// Arguments for the serve command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    funcslice serve                           Listen on 127.0.0.1:8080
    funcslice serve --host 0.0.0.0 --port 9000
    funcslice serve --token s3cret            Require 'Authorization: Bearer s3cret'")]
pub struct ServeArgs {
    /// Bind address (default from config: 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to serve on (default from config: 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bearer token required on /function/* routes
    #[arg(long)]
    pub token: Option<String>,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(token) = &self.token {
            config.server.api_token = Some(token.clone());
        }
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config);
    crate::server::run(config).await
}
