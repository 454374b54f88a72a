//! Site configuration.

use std::net::SocketAddr;

use clap::Parser;

/// Demo site for the Uber API client.
#[derive(Debug, Parser)]
#[command(name = "uber-website")]
#[command(author, version, about, long_about = None)]
pub struct SiteConfig {
    /// OAuth application client id.
    #[arg(long, env = "UBER_CLIENT_ID")]
    pub client_id: String,

    /// OAuth application client secret.
    #[arg(long, env = "UBER_CLIENT_SECRET")]
    pub client_secret: String,

    /// Server token for public resource calls.
    #[arg(long, env = "UBER_SERVER_TOKEN")]
    pub server_token: String,

    /// Redirect URL registered for the OAuth callback.
    #[arg(
        long,
        env = "UBER_REDIRECT_URL",
        default_value = "http://localhost:7090/auth/callback"
    )]
    pub redirect_url: String,

    /// API host the resource clients talk to.
    #[arg(long, env = "UBER_API_URL", default_value = uber_client::SANDBOX_BASE_URL)]
    pub api_url: String,

    /// Address to bind the site to.
    #[arg(long, env = "UBER_BIND_ADDRESS", default_value = "127.0.0.1:7090")]
    pub bind_address: SocketAddr,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_values_from_args() {
        let config = SiteConfig::parse_from([
            "uber-website",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "--server-token",
            "token",
        ]);

        assert_eq!(config.client_id, "id");
        assert_eq!(config.api_url, uber_client::SANDBOX_BASE_URL);
        assert_eq!(config.bind_address.port(), 7090);
        assert!(config.redirect_url.ends_with("/auth/callback"));
    }
}
