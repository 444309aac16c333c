// SPDX-License-Identifier: MPL-2.0
use curtain_picker::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: curtain_picker [--lang <id>] [--config-dir <dir>] [--diagnostics] [DIRECTORY]";

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_os_str("--config-dir", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let diagnostics = args.contains("--diagnostics");
    let directory = args.opt_free_from_os_str(|s| Ok::<_, std::convert::Infallible>(PathBuf::from(s)))?;

    let remaining = args.finish();
    if let Some(extra) = remaining.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", extra.to_string_lossy()),
        });
    }

    Ok(Flags {
        lang,
        directory,
        config_dir,
        diagnostics,
    })
}

/// Logs to stderr, filtered by `RUST_LOG` (default `curtain_picker=info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("curtain_picker=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
