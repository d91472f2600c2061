// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use thiserror::Error;

/// Why a wake lock couldn't be acquired.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AcquireError {
    /// The host doesn't expose the Screen Wake Lock API.
    #[error("Screen Wake Lock API not supported in this browser")]
    Unsupported,
    /// The host refused or failed the request, e.g. because of a permission policy.
    #[error("{name}, {message}")]
    Rejected { name: String, message: String },
}

impl AcquireError {
    pub fn rejected(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// An error building or inserting the advisory notice.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NoticeError {
    #[error("document has no body to attach the notice to")]
    NoBody,
    #[error("DOM error: {0}")]
    Dom(String),
}
