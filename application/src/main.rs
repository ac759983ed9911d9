use std::{
    io::{self, Write as _},
    process::ExitCode,
    sync::OnceLock,
};

use adilev::{AsError, Args, Config, Error, Form, Report};
use service::{query::EstimateRent, Query as _, Service};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL
                            .get()
                            .copied()
                            .unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code)
        }
    }
}

fn start() -> Result<(), Error> {
    let Args {
        config,
        property,
        overrides,
        details,
    } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config { report, log } =
        Config::new(config).map_err(AsError::into_error)?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let attrs = Form {
        path: property,
        overrides,
    }
    .submit()
    .map_err(AsError::into_error)?;

    let service = Service::new();
    let output = service
        .execute(EstimateRent(attrs))
        .unwrap_or_else(|e| match e {});

    let report = Report::new(output, details || report.details);
    writeln!(io::stdout().lock(), "{report}").map_err(AsError::into_error)?;

    Ok(())
}
