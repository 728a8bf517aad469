#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svckit::bootstrap::run(order_service::SERVICE, order_service::build_app).await
}
