use thiserror::Error;

/// Rejection of a quote submission at the validation boundary.
///
/// Surfaced to the visitor as a localized redirect message; never treated as
/// a system fault.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, email, service or message was empty after trimming.
    #[error("required fields missing")]
    MissingFields,

    /// The email field does not look like an address.
    #[error("invalid email address")]
    InvalidEmail,
}

/// Failure to hand a composed message to the mail relay.
///
/// All variants collapse to the same generic retry message for the visitor;
/// the underlying cause is only logged.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("smtp transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("message assembly error: {0}")]
    Assembly(#[from] lettre::error::Error),
}
