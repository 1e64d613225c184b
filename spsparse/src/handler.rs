//! Exception type and the process-wide error handler
//!
//! Every usage error detected by SpSparse is routed through a single
//! handler before it reaches the caller. The default handler logs the
//! error and turns it into an [`Exception`]. A host application may
//! install its own handler once, at startup, to forward errors into a
//! larger error-reporting system.
//!
//! ```
//! use spsparse::{set_error_handler, Exception};
//!
//! set_error_handler(|retcode: i32, message: &str| {
//!     eprintln!("host saw spsparse error {retcode}: {message}");
//!     Exception::new(retcode, message)
//! })
//! .expect("installed once at startup");
//! ```

use std::sync::OnceLock;

use spsparse_core::SpsparseError;
use thiserror::Error;
use tracing::error;

/// Error raised by the default SpSparse error handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("spsparse::Exception({retcode}): {message}")]
pub struct Exception {
    retcode: i32,
    message: String,
}

impl Exception {
    /// Create an exception from a return code and message
    pub fn new(retcode: i32, message: impl Into<String>) -> Self {
        Self {
            retcode,
            message: message.into(),
        }
    }

    /// Return code reported by the failing check
    pub fn retcode(&self) -> i32 {
        self.retcode
    }

    /// Message reported by the failing check
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Human-readable description naming the library of origin
    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// Receives every fatal condition detected by SpSparse
///
/// The returned exception is what the failing operation hands back to
/// its caller. A handler may instead panic or abort; SpSparse makes no
/// attempt to continue after a usage error.
pub trait ErrorHandler: Send + Sync + 'static {
    fn handle(&self, retcode: i32, message: &str) -> Exception;
}

impl<F> ErrorHandler for F
where
    F: Fn(i32, &str) -> Exception + Send + Sync + 'static,
{
    fn handle(&self, retcode: i32, message: &str) -> Exception {
        self(retcode, message)
    }
}

/// Handler used when the host installs none
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandler;

impl ErrorHandler for DefaultHandler {
    fn handle(&self, retcode: i32, message: &str) -> Exception {
        error!(retcode, detail = message, "spsparse usage error");
        Exception::new(retcode, message)
    }
}

/// Returned when a handler has already been installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("spsparse error handler is already installed")]
pub struct HandlerAlreadySet;

static HANDLER: OnceLock<Box<dyn ErrorHandler>> = OnceLock::new();

/// Install the process-wide error handler
///
/// Succeeds only once, and only before the first error has been raised.
/// Call it from a single initialization point before any concurrent use
/// of the library.
pub fn set_error_handler(handler: impl ErrorHandler) -> Result<(), HandlerAlreadySet> {
    HANDLER
        .set(Box::new(handler))
        .map_err(|_| HandlerAlreadySet)
}

/// The active error handler
///
/// Falls back to [`DefaultHandler`] and locks it in if nothing was
/// installed before the first use.
pub fn error_handler() -> &'static dyn ErrorHandler {
    HANDLER.get_or_init(|| Box::new(DefaultHandler)).as_ref()
}

/// Route a usage error through the active handler
pub fn raise(err: SpsparseError) -> Exception {
    let message = err.to_string();
    error_handler().handle(err.code(), &message)
}
