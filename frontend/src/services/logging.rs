use log::Level;

/// Route the `log` facade to the browser console.
pub fn init(level: Level) {
    if console_log::init_with_level(level).is_err() {
        // Already initialised; keep the existing logger.
        log::debug!("console logger was already set up");
    }
}

/// Component-tagged logging, so console output can be filtered per widget.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(target: component, level, "[{}] {}", component, message);
    }
}
