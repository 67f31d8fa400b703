#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    haneen_cv_server::run().await
}
