use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive(
                "alloy_transport=warn"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
            .add_directive(
                "alloy_rpc_client=warn"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
            .add_directive(
                "hyper=warn"
                    .parse()
                    .expect("assert: can parse env filter directive"),
            )
    });

    let format = fmt::format()
        .with_timer(fmt::time::time())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::Layer::default()
                .with_writer(std::io::stdout)
                .event_format(format),
        )
        .init();
}
