use thiserror::Error;

use crate::utils::logger::{report, Logger};

pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Raised while building a node whose fields break its shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Variable declaration has {names} name(s) but {initializers} initializer slot(s).")]
    InitializerCountMismatch {
        line: Option<usize>,
        names: usize,
        initializers: usize,
    },
}

impl SyntaxError {
    pub fn line(&self) -> Option<usize> {
        match self {
            SyntaxError::InitializerCountMismatch { line, .. } => *line,
        }
    }

    pub fn report(&self, logger: &mut dyn Logger) {
        report(logger, self.line(), "", &self.to_string());
    }
}
