/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type MNResult<T> = std::result::Result<T, MNError>;

#[derive(Debug, Error)]
pub enum MNError {
    #[error("{0}")]
    Generic(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Duplicate element: {0}")]
    DuplicateElement(String),

    #[error("Search budget exhausted after {0} steps")]
    BudgetExhausted(usize),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseBool(#[from] std::str::ParseBoolError),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl MNError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
    pub fn not_found<T: Into<String>>(what: T) -> Self {
        Self::NotFound(what.into())
    }
    pub fn invalid_parameter<T: Into<String>>(what: T) -> Self {
        Self::InvalidParameter(what.into())
    }
    pub fn duplicate<T: Into<String>>(what: T) -> Self {
        Self::DuplicateElement(what.into())
    }
    pub fn err_none() -> Self {
        Self::Generic("Unexpectedly empty Option encountered.".to_owned())
    }
}

impl From<String> for MNError {
    fn from(str: String) -> Self {
        MNError::Generic(str)
    }
}

impl From<&str> for MNError {
    fn from(str: &str) -> Self {
        MNError::Generic(str.to_owned())
    }
}
