#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svckit::bootstrap::run(user_service::SERVICE, user_service::build_app).await
}
