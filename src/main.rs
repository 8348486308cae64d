use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // FOLIO_LOG follows the usual filter syntax, e.g. "folio=debug"
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "folio {} ({})",
        env!("FOLIO_VERSION"),
        env!("FOLIO_COMMIT")
    );
    folio::app::run()
}
