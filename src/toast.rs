//! Transient notifications raised by the screens and printed by the CLI.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: ToastLevel::Error, message: message.into() }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            ToastLevel::Success => "✔",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✖",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Print and clear queued toasts. Warnings and errors go to stderr.
pub fn flush(toasts: &mut Vec<Toast>) {
    for t in toasts.drain(..) {
        match t.level {
            ToastLevel::Success => println!("{}", t),
            ToastLevel::Warning | ToastLevel::Error => eprintln!("{}", t),
        }
    }
}
