#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salesbot::run().await
}
