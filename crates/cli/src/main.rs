fn main() -> anyhow::Result<()> {
    contrast_observability::init();

    tracing::debug!("running value-vs-identity demonstration");

    let stdout = std::io::stdout();
    contrast_cli::demo::run(&mut stdout.lock())?;

    Ok(())
}
