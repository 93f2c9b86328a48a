//! Error types for kernel loading, ephemeris queries and configuration

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ephemeris::Body;

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("kernel file not found: {}", .0.display())]
    KernelNotFound(PathBuf),

    #[error("failed to load kernel {}: {message}", .path.display())]
    KernelLoad { path: PathBuf, message: String },

    #[error("no binary ephemeris kernels were loaded")]
    NoKernels,

    #[error("state query for {target} from {observer} at {at} failed: {message}")]
    Query {
        observer: Body,
        target: Body,
        at: DateTime<Utc>,
        message: String,
    },

    #[error("no ephemeris coverage for {body}: {message}")]
    Coverage { body: Body, message: String },

    #[error("{at} is outside ephemeris coverage ({start} to {end})")]
    OutOfCoverage {
        at: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("time conversion failed: {0}")]
    TimeConversion(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("no kernels configured")]
    NoKernels,
}
