#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lingolens_backend::run().await
}
