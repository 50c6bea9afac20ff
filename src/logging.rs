// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logger setup for test harnesses.

use flexi_logger::{DeferredNow, FlexiLoggerError, LogSpecBuilder, Logger};
use log::{LevelFilter, Record};

pub fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {} [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args(),
    )
}

/// Starts a stdout logger at the given level, with HTTP library noise limited to warnings.
///
/// Test harnesses call this once per test; a logger that is already running is left in place.
pub fn init_logger(level: LevelFilter) -> Result<(), FlexiLoggerError> {
    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(level);
    log_spec_builder.module("reqwest", LevelFilter::Warn);
    log_spec_builder.module("hyper", LevelFilter::Warn);
    log_spec_builder.module("mio", LevelFilter::Warn);
    log_spec_builder.module("want", LevelFilter::Warn);
    log_spec_builder.module("tiny_http", LevelFilter::Warn);

    match Logger::with(log_spec_builder.build())
        .format(log_format)
        .log_to_stdout()
        .start()
    {
        Ok(_) => Ok(()),
        // `FlexiLoggerError::Log` means the logger has already been initialized
        Err(FlexiLoggerError::Log(_)) => Ok(()),
        Err(err) => Err(err),
    }
}
