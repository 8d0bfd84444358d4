//! Error taxonomy.
//!
//! [`InitError`] is fatal: an application that fails bring-up never enters the
//! main loop. [`LoadError`] is recoverable and handed back to the layer that
//! asked for the resource.

use std::error::Error as StdError;
use std::fmt::Write as _;

use thiserror::Error;

/// Window, context or platform acquisition failure.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid window parameters: {0}")]
    InvalidConfig(String),

    #[error("failed to initialize the platform event loop")]
    Platform(#[source] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[source] winit::error::OsError),

    #[error("failed to create graphics context")]
    Context(#[source] Box<dyn StdError + Send + Sync>),
}

/// Image resource could not be produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("surface path is empty")]
    EmptyPath,

    #[error("failed to decode surface `{path}`")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Formats an error followed by its chain of sources, `outer: inner: root`.
pub fn report(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}
