//! mb_io — the engine's only fallible surface.
//!
//! - Request loading: JSON with free-text numeric fields (see `request`)
//! - Artifact writing: rendered results into an output directory (`writer`)
//!
//! Numeric coercion itself never fails (that policy lives in
//! `mb_core::coerce`); errors here are filesystem, JSON shape, or date
//! problems only.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod request;
pub mod writer;

pub use request::{load_request, RawRequest};
pub use writer::write_artifact;

/// Unified error for mb_io (request loading and artifact writing).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem read failures.
    #[error("read error: {0}")]
    Read(String),

    /// JSON shape or date-field failures in the request document.
    #[error("request error: {0}")]
    Request(String),

    /// Filesystem write failures.
    #[error("write error: {0}")]
    Write(String),
}

pub type IoResult<T> = Result<T, IoError>;
