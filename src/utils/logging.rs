use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::unhandled_error;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn init_tracing() {
    // `RUST_LOG=rsweb_pager=debug` shows every navigation step
    unhandled_error!(
        tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        "init tracing error"
    );
}
