use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error
}

/// A non-fatal message for the user. Raising one never clears displayed data.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

impl Display for Notice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error"
        };

        write!(formatter, "[{level}] {}", self.message)
    }
}
