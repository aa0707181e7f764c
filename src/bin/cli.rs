use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    postgen::cli::run().await
}
