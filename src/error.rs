use crate::claim_type::ClaimType;

/// Error type for `tzp-claims`.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A field the claim type relies on is absent from the credential.
    #[error("Missing credential field `{0}`")]
    MissingField(&'static str),
    /// A field is present in the credential but does not have the expected
    /// JSON type.
    #[error("Invalid credential field `{0}`")]
    InvalidField(&'static str),
    #[error("Unknown claim type: {0}")]
    UnknownClaimType(String),
    #[error("Draft for {found} claim used on {expected} claim")]
    DraftTypeMismatch {
        expected: ClaimType,
        found: ClaimType,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
