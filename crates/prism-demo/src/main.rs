#![forbid(unsafe_code)]

//! Prism demo binary entry point.

use prism_demo::{cli, report};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let opts = cli::Opts::parse();
    tracing::debug!(?opts, "parsed options");

    if opts.list_spaces {
        print!("{}", report::spaces_listing(prism::list_color_spaces()));
        return;
    }

    match report::render(&opts) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
