use crate::{CliError, Result as CliResult};

use tu_config::LoggingConfig;

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};

/// Initialize the fern logger from the logging section of the config.
///
/// Output goes to `file` when set (never colored), otherwise to stderr.
pub fn initialize(config: &LoggingConfig) -> CliResult<()> {
    let dispatch = Dispatch::new().level(config.level.0);

    let dispatch = match config.file.as_deref() {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {path}: {e}"),
            })?;
            dispatch
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.target(),
                    ))
                })
                .chain(file)
        }
        None => {
            let colors = config.colored.then(|| {
                ColoredLevelConfig::new()
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red)
            });
            dispatch
                .format(move |out, message, record| {
                    let date = humantime::format_rfc3339(SystemTime::now());
                    match colors {
                        Some(colors) => out.finish(format_args!(
                            "[{date} - {}] {message}",
                            colors.color(record.level())
                        )),
                        None => {
                            out.finish(format_args!("[{date} - {}] {message}", record.level()))
                        }
                    }
                })
                .chain(std::io::stderr())
        }
    };

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })
}
