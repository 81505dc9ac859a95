use cloudman::cli;
use cloudman::error::Result;
use cloudman::runner::SystemRunner;

#[tokio::main]
async fn main() {
    let result = tokio::select! {
        result = run() => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted.");
            std::process::exit(130); // Standard exit code for SIGINT
        }
    };

    if let Err(e) = result {
        cli::show_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let runner = SystemRunner::new();
    cli::main_menu(&runner).await
}
