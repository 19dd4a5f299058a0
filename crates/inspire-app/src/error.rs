// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

pub const NO_CATEGORY_MESSAGE: &str = "no category chosen";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Generation(String),
}

impl SessionError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn generation(error: &anyhow::Error) -> Self {
        Self::Generation(format!("{error:#}"))
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Generation(message) => message,
        }
    }
}
