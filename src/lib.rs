//! Claim data model for Tezos Profiles.
//!
//! A profile is a set of [`Claim`]s, one per [`ClaimType`]. Each claim keeps
//! the verifiable credential it was saved as, the draft the user is editing,
//! and the static assets used to render it. The [`sign`] module turns a
//! message into the Micheline payload a Tezos wallet signs.
//!
//! ```
//! use tzp_claims::{add_defaults, claim_from_triple, ClaimMap, ClaimType};
//!
//! let content = r#"{"credentialSubject":{"alias":"a","description":"d","logo":"l","website":"w"}}"#;
//! let saved = claim_from_triple(ClaimType::Basic, ("ipfs://x", content, "VerifiableCredential"))?;
//!
//! let mut claims = ClaimMap::new();
//! claims.insert(ClaimType::Basic.to_string(), saved);
//! let claims = add_defaults(claims);
//!
//! assert!(!claims["basic"].is_unsaved_draft()?);
//! assert!(claims["twitter"].is_unsaved_draft()?);
//! # Ok::<(), tzp_claims::Error>(())
//! ```
pub mod claim;
pub mod claim_type;
pub mod deep_equal;
pub mod display;
pub mod draft;
pub mod error;
pub mod sign;
pub mod vc;

pub use claim::{
    add_defaults, claim_from_triple, is_unsaved_draft, new_claim, Claim, ClaimMap, ClaimStatus,
    ContractType, ValidContent, DEFAULT_CONTRACT_TYPE,
};
pub use claim_type::ClaimType;
pub use display::{new_display, ClaimUIAssets};
pub use draft::{
    content_to_draft, new_draft, BasicDraft, ClaimDraft, TwitterDraft, TWITTER_URL_PREFIX,
};
pub use error::Error;
pub use sign::{sign_claim, SignClaimError, UserData, WalletClient};
pub use tzp_micheline::get_micheline_string_bytes;
pub use vc::claim_type_from_vc;
