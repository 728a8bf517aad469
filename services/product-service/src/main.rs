#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svckit::bootstrap::run(product_service::SERVICE, product_service::build_app).await
}
