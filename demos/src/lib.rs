// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Sprig demos.

use log::{LevelFilter, Log, Metadata, Record};

/// A `log` backend that prints every enabled record to stdout.
#[derive(Debug)]
pub struct StdoutLogger {
    level: LevelFilter,
}

static LOGGER: StdoutLogger = StdoutLogger {
    level: LevelFilter::Debug,
};

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install [`StdoutLogger`] at debug level.
///
/// Returns an error if another logger was installed first.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LOGGER.level);
    Ok(())
}
