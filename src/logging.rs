use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set. A subscriber installed earlier stays in place.
pub fn init_logger(debug: bool) {
    let default_directive = if debug { "hello_api=debug,info" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(debug)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("keeping existing subscriber: {}", e);
    }
}
