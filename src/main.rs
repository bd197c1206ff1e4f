// src/main.rs

use vula_bridge::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(true) => {}
        // The action ran but failed; the reason has already been printed.
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("vula-bridge error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<bool> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args).await?)
}
