use clap::Parser;
use spiderdeck_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let output = spiderdeck_lib::run(Cli::parse()).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
