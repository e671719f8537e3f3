use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = crawlctl::cli::Cli::parse();

    if let Err(err) = crawlctl::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
