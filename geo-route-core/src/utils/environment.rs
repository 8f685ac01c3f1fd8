use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the optimizer.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which writes log messages to stderr.
    pub fn new_with_stderr_logger() -> Self {
        Self::new(Arc::new(|msg: &str| eprintln!("{msg}")))
    }
}

impl Default for Environment {
    /// Creates a silent environment: library calls do not print anything by default.
    fn default() -> Self {
        Self::new(Arc::new(|_: &str| {}))
    }
}
