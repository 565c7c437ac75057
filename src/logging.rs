use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use log::{self, LevelFilter, Metadata, Record};
use parking_lot::Mutex;

enum Sink {
    Stderr,
    File(Mutex<File>),
}

struct SimpleLogger {
    sink: Sink,
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match &self.sink {
            Sink::Stderr => {
                let _ = writeln!(io::stderr(), "{} - {}", record.level(), record.args());
            }
            Sink::File(file) => {
                let _ = writeln!(file.lock(), "{} - {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {
        if let Sink::File(file) = &self.sink {
            let _ = file.lock().flush();
        }
    }
}

/// Initialize logging with a level taken from the `REVERSI_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
///
/// Records go to the file named by `REVERSI_LOG_FILE` when set, stderr otherwise.
/// The terminal client should be given a file, stderr would draw over the board.
pub fn init_logging() {
    let level = env::var("REVERSI_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let sink = env::var("REVERSI_LOG_FILE")
        .ok()
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok())
        .map(|file| Sink::File(Mutex::new(file)))
        .unwrap_or(Sink::Stderr);
    let logger = Box::new(SimpleLogger { sink });
    let _ = log::set_boxed_logger(logger).map(|()| log::set_max_level(level));
}

/// Like [`init_logging`], but silent unless `REVERSI_LOG` or `REVERSI_LOG_FILE` is set.
/// Used by front ends that own the terminal.
pub fn init_quiet_logging() {
    if env::var_os("REVERSI_LOG").is_none() && env::var_os("REVERSI_LOG_FILE").is_none() {
        let logger = Box::new(SimpleLogger { sink: Sink::Stderr });
        let _ = log::set_boxed_logger(logger).map(|()| log::set_max_level(LevelFilter::Off));
        return;
    }
    init_logging();
}
