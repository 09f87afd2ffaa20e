use defillama_http::{ClientOptions, DefiLlamaClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("defillama_http=debug")),
        )
        .init();

    let client = DefiLlamaClient::with_options(ClientOptions::default().with_retries(3))?;
    let mut protocols = client.fetch_protocols().await?;
    println!("{} protocols listed", protocols.len());

    protocols.sort_by(|a, b| {
        let a = a.tvl().unwrap_or_default();
        let b = b.tvl().unwrap_or_default();
        b.total_cmp(&a)
    });

    for protocol in protocols.iter().take(10) {
        println!(
            "{:<32} {:<16} {:>20.0}",
            protocol.name().unwrap_or("?"),
            protocol.category().unwrap_or("-"),
            protocol.tvl().unwrap_or_default()
        );
    }

    Ok(())
}
