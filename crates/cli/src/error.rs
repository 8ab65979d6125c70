//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants and usage errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use compose_client::ClientError;
use thiserror::Error;

/// Structured exit codes for cocli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - missing or rejected token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - recipe, deployment, or an empty account list.
    NotFound = 4,

    /// Validation error - bad flags, rejected request, or undecodable response.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the token lacks access to the resource.
    PermissionDenied = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            return ExitCode::AuthenticationFailed;
        }

        match err.status() {
            Some(403) => return ExitCode::PermissionDenied,
            Some(404) => return ExitCode::NotFound,
            Some(400 | 422) => return ExitCode::ValidationError,
            _ => {}
        }

        match err {
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::InvalidResponse(_) | ClientError::DeploymentRejected(_) => {
                ExitCode::ValidationError
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            _ if err.is_local() => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Command-line misuse detected before any request is sent.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Raw mode not supported for {0}")]
    RawModeUnsupported(&'static str),
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<UsageError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}
