use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = spacerm::cli::parse();
    app::run(args)
}
