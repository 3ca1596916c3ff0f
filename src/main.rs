use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    prodmuse::logger::init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    prodmuse::cli::main().await
}
