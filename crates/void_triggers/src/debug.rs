//! Debug message sinks

/// Receives the debug messages areas emit on enter/exit
pub trait DebugSink {
    /// Emit one message
    fn message(&mut self, message: &str);
}

/// Writes debug messages through the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn message(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Collects messages, handy for tests and in-game consoles
impl DebugSink for Vec<String> {
    fn message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<T: DebugSink + ?Sized> DebugSink for &mut T {
    fn message(&mut self, message: &str) {
        (**self).message(message)
    }
}
