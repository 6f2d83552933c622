use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    NotFound,
    ReferenceNotFound,
    InvalidArgument,
    InvalidState,
    Conflict,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::ReferenceNotFound => write!(f, "Referenced entity not found"),
            KernelError::InvalidArgument => write!(f, "Invalid argument"),
            KernelError::InvalidState => write!(f, "Invalid state transition"),
            KernelError::Conflict => write!(f, "Entity already exists"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Failures of the rental lifecycle.
///
/// Raised as the root context of a report and changed into the [`KernelError`]
/// returned by [`RentalError::kind`], so the precise cause stays reachable through
/// `Report::downcast_ref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalError {
    GameNotFound,
    CustomerNotFound,
    InvalidDuration,
    GameUnavailable,
    RentalNotFound,
    AlreadyReturned,
}

impl RentalError {
    pub fn kind(&self) -> KernelError {
        match self {
            RentalError::GameNotFound | RentalError::CustomerNotFound => {
                KernelError::ReferenceNotFound
            }
            RentalError::InvalidDuration | RentalError::GameUnavailable => {
                KernelError::InvalidArgument
            }
            RentalError::RentalNotFound => KernelError::NotFound,
            RentalError::AlreadyReturned => KernelError::InvalidState,
        }
    }

    pub fn into_report(self) -> error_stack::Report<KernelError> {
        let kind = self.kind();
        error_stack::Report::new(self).change_context(kind)
    }
}

impl Display for RentalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalError::GameNotFound => write!(f, "Game not found"),
            RentalError::CustomerNotFound => write!(f, "Customer not found"),
            RentalError::InvalidDuration => write!(f, "A rental lasts at least 2 days"),
            RentalError::GameUnavailable => write!(f, "No copy of the game is available"),
            RentalError::RentalNotFound => write!(f, "Rental not found"),
            RentalError::AlreadyReturned => write!(f, "Rental was already returned"),
        }
    }
}

impl Context for RentalError {}
