use std::io::Write;

pub static BSP_LOGGER : SwallowLogger = SwallowLogger;


///
/// Install the logger, later calls are ignored
///
pub fn initialize_logger(level : log::LevelFilter){
    if log::set_logger(&BSP_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `-v` count to level, warnings are always shown
pub fn level_for_verbosity(verbosity : u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}


pub fn render(record: &log::Record) -> String {
    format!("{} ({}) :: {}", record.level(), record.target(), record.args())
}


pub struct SwallowLogger;


impl log::Log for SwallowLogger{
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // stdout carries the resolved config, keep it clean
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", render(record));
    }

   fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
