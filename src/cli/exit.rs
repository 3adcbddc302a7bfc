//! Process exit codes for failed commands.

use crate::credential::CredentialError;
use crate::translation::{ErrorKind, TranslateError, ValidationError};

/// Picks the exit code for an error returned by a command.
///
/// Typed errors are found anywhere in the context chain.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(e) = err.downcast_ref::<TranslateError>() {
        return match e {
            TranslateError::Validation(ValidationError::MissingCredential) => exitcode::NOPERM,
            TranslateError::Validation(_) => exitcode::USAGE,
            TranslateError::Service(s) => match s.kind {
                ErrorKind::InvalidCredential => exitcode::NOPERM,
                ErrorKind::NetworkUnavailable => exitcode::UNAVAILABLE,
                ErrorKind::RateLimited | ErrorKind::BadRequest | ErrorKind::ServiceUnavailable => {
                    exitcode::TEMPFAIL
                }
            },
        };
    }

    match err.downcast_ref::<CredentialError>() {
        Some(CredentialError::EmptyCredential | CredentialError::TooShort { .. }) => {
            exitcode::NOPERM
        }
        Some(CredentialError::Persist(_)) | None => exitcode::SOFTWARE,
    }
}
