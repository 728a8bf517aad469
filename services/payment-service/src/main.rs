#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svckit::bootstrap::run(payment_service::SERVICE, payment_service::build_app).await
}
