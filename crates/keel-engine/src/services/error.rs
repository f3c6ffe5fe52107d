use thiserror::Error;

use super::ServiceKind;

/// Registry failures. All of them are local and recoverable; the caller
/// decides whether to abort.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ServiceError {
    #[error("service registry is locked")]
    RegistryLocked,

    #[error("{0} is already registered")]
    DuplicateRegistration(ServiceKind),

    #[error("{0} is not registered")]
    ServiceNotFound(ServiceKind),

    #[error("{0} is already borrowed")]
    ServiceBusy(ServiceKind),

    #[error("{kind} does not hold a `{expected}`")]
    TypeMismatch {
        kind: ServiceKind,
        expected: &'static str,
    },
}
