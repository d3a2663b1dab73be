// Copyright 2025 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Error type for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Nothing is recovered locally; every error aborts the current
/// `generate` call and surfaces to the caller. Messages name the
/// offending entity, and field where one applies.
#[derive(Debug, Error)]
pub enum GenError {
    /// Invalid generator configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The schema references something that does not exist.
    #[error("schema violation: {message}")]
    Schema {
        /// Error message.
        message: String,
    },

    /// A construct the generator does not support.
    #[error("unsupported construct: {message}")]
    Unsupported {
        /// Error message.
        message: String,
    },

    /// An internal invariant did not hold.
    #[error("internal invariant violated: {message}")]
    Invariant {
        /// Error message.
        message: String,
    },

    /// IO error surfaced by the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Prefixes the message with the entity being generated.
    pub fn context(self, what: impl std::fmt::Display) -> Self {
        match self {
            Self::Config { message } => Self::Config { message: format!("{what}: {message}") },
            Self::Schema { message } => Self::Schema { message: format!("{what}: {message}") },
            Self::Unsupported { message } => {
                Self::Unsupported { message: format!("{what}: {message}") }
            }
            Self::Invariant { message } => {
                Self::Invariant { message: format!("{what}: {message}") }
            }
            Self::Io(e) => Self::Io(e),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema { message: message.into() }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported { message: message.into() }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant { message: message.into() }
    }
}
