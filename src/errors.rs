//! Unified application error type.
//! All modules (config, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: '{0}' (expected HHMM, 0000-2359)")]
    InvalidTimeFormat(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Derivation errors
    // ---------------------------
    #[error("No schedule pattern titled '{0}' in the configuration")]
    MissingPattern(String),

    #[error("Unknown schedule pattern: {0}")]
    UnknownPattern(String),

    #[error("No color declared for activity '{0}'")]
    MissingColor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration to {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
