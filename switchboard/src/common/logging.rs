/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::common::config::TracingConfig;
use crate::common::LoggingError;

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG`, when set to a valid directive, takes precedence over `config.level`. With a
/// `log_directory`, output goes to a non-blocking file writer and the returned
/// guard must be held until shutdown so buffered lines are flushed; otherwise
/// output goes to stderr and `None` is returned.
///
/// # Errors
///
/// * [`LoggingError::Filter`] if `config.level` is not a valid directive.
/// * [`LoggingError::Directory`] if the log directory cannot be created.
/// * [`LoggingError::Subscriber`] if a global subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = env_filter(&config.level, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;

    let builder = FmtSubscriber::builder()
        .with_span_events(FmtSpan::NONE)
        .compact()
        .with_line_number(true)
        .with_target(true)
        .with_env_filter(filter);

    match &config.log_directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).map_err(|source| LoggingError::Directory {
                path: directory.into(),
                source,
            })?;
            let file_appender = RollingFileAppender::new(Rotation::NEVER, directory, &config.log_file);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let subscriber = builder.with_ansi(false).with_writer(non_blocking).finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LoggingError::Subscriber(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = builder
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| LoggingError::Subscriber(e.to_string()))?;
            Ok(None)
        }
    }
}

/// Uses `from_env` when it parses, otherwise the configured `level`.
fn env_filter(level: &str, from_env: Option<String>) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = from_env.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::Filter {
        directive: level.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_a_filter_error() {
        let err = env_filter("not[a=filter", None).unwrap_err();
        assert!(matches!(err, LoggingError::Filter { ref directive, .. } if directive == "not[a=filter"));
    }

    #[test]
    fn valid_env_directive_wins_over_level() {
        assert!(env_filter("not[a=filter", Some("switchboard=debug".to_string())).is_ok());
        assert!(env_filter("info", Some("not[a=filter".to_string())).is_ok());
    }

    #[test]
    fn log_directory_under_a_file_is_a_directory_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = TracingConfig {
            level: "info".to_string(),
            log_directory: Some(file.path().join("logs").display().to_string()),
            ..TracingConfig::default()
        };

        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Directory { .. }));
    }
}
