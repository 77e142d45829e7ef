use archivist_api::config::ApiVariant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    archivist_api::server::run(ApiVariant::Lore).await
}
