use colored::Colorize;
use log::{Level, LevelFilter};
use std::cell::Cell;
use std::sync::OnceLock;

thread_local! {
  static THREAD_LEVEL: Cell<Option<Level>> = const { Cell::new(None) };
}

#[derive(Clone)]
pub struct Logger {
  level: Level,
}

impl Logger {
  pub fn new(level: Level) -> Self {
    Logger { level }
  }

  fn format(&self, record: &log::Record) -> String {
    let time = chrono::Local::now()
      .format("%Y-%m-%d %H:%M:%S")
      .to_string()
      .magenta();

    let level = match record.level() {
      Level::Error => "ERROR".red(),
      Level::Warn => "WARN".yellow(),
      Level::Info => "INFO".green(),
      Level::Debug => "DEBUG".blue(),
      Level::Trace => "TRACE".dimmed(),
    };

    let prefix = match (record.file(), record.line()) {
      (Some(file), Some(line)) => format!("{}:{} ", file, line).cyan(),
      _ => format!("{} ", record.target()).cyan(),
    };

    format!("{}{} {} {}", prefix, time, level, record.args())
  }
}

impl Default for Logger {
  fn default() -> Self {
    Logger::new(Level::Debug)
  }
}

impl log::Log for Logger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    let level = THREAD_LEVEL.with(Cell::get).unwrap_or(self.level);
    metadata.level() <= level
  }

  fn log(&self, record: &log::Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let line = self.format(record);
    // Warnings and errors go to stderr
    if record.level() <= Level::Warn {
      eprintln!("{}", line);
    } else {
      println!("{}", line);
    }
  }

  fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger() {
  init_logger_with_level(Level::Debug);
}

/// Installs the logger once per process; later calls are ignored, whatever
/// their level. Filtering happens in [`Logger`], so thread overrides can
/// raise the level past the installed one.
pub fn init_logger_with_level(level: Level) {
  if LOGGER.get().is_some() {
    return;
  }

  let logger = LOGGER.get_or_init(|| Logger::new(level));
  if log::set_logger(logger).is_ok() {
    log::set_max_level(LevelFilter::Trace);
  }
}

/// Overrides the installed level for records logged from the current thread.
/// Other threads keep the level the logger was installed with.
pub fn set_thread_level(level: Level) {
  THREAD_LEVEL.with(|cell| cell.set(Some(level)));
}
