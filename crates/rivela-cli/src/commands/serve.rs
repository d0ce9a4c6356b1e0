//! Server command implementation

use anyhow::Result;

use rivela_core::FinancialEngine;

pub async fn cmd_serve(
    engine: FinancialEngine,
    host: &str,
    port: u16,
    no_auth: bool,
) -> Result<()> {
    println!("🚀 Starting Rivela web server...");
    println!("   Listening: http://{}:{}", host, port);

    // API keys from environment (comma-separated)
    let api_keys = rivela_server::parse_api_keys(&std::env::var("RIVELA_API_KEYS").unwrap_or_default());

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔒 Authentication required, but RIVELA_API_KEYS is empty");
        println!("      Every /api request except /api/health will be rejected");
    } else {
        println!(
            "   🔑 API keys: {} configured (RIVELA_API_KEYS)",
            api_keys.len()
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = rivela_server::ServerConfig {
        require_auth: !no_auth,
        allowed_origins: vec![],
        api_keys,
    };

    rivela_server::serve_with_config(engine, host, port, config).await?;

    Ok(())
}
