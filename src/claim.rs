use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::claim_type::ClaimType;
use crate::deep_equal::deep_equal;
use crate::display::{new_display, ClaimUIAssets};
use crate::draft::{content_to_draft, new_draft, ClaimDraft};
use crate::Error;

/// Credential type given to claims created locally.
pub const DEFAULT_CONTRACT_TYPE: &str = "VerifiableCredential";

/// Credential type tag recorded by the profile contract for a claim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ContractType(pub String);

impl Default for ContractType {
    fn default() -> Self {
        Self(DEFAULT_CONTRACT_TYPE.to_string())
    }
}

impl From<String> for ContractType {
    fn from(contract_type: String) -> Self {
        Self(contract_type)
    }
}

impl From<&str> for ContractType {
    fn from(contract_type: &str) -> Self {
        Self(contract_type.to_string())
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A claim as read back from the profile contract and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContent {
    /// Storage reference of the credential.
    pub irl: String,
    /// The credential, as JSON text.
    pub content: String,
    pub contract_type: ContractType,
}

impl<I, C, T> From<(I, C, T)> for ValidContent
where
    I: Into<String>,
    C: Into<String>,
    T: Into<ContractType>,
{
    fn from((irl, content, contract_type): (I, C, T)) -> Self {
        Self {
            irl: irl.into(),
            content: content.into(),
            contract_type: contract_type.into(),
        }
    }
}

/// Persistence state of a claim, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Nothing has been saved yet.
    DraftOnly,
    /// A credential has been prepared and awaits confirmation.
    Preparing,
    /// Saved, and the draft matches the saved credential.
    SavedClean,
    /// Saved, but the draft has been edited since.
    SavedDirty,
    /// Saved, confirmed on chain, and the draft matches.
    OnChain,
}

/// A profile claim.
///
/// The claim type is fixed when the claim is built and the display assets
/// and draft always match it. The remaining fields are set by whoever saves
/// the claim; `on_chain` must only be set together with `content` and `irl`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// The saved credential the claim represents.
    pub content: Option<Value>,
    pub contract_type: ContractType,
    display: &'static ClaimUIAssets,
    draft: ClaimDraft,
    /// Storage reference of the saved credential.
    pub irl: Option<String>,
    /// Signed credential ready to be submitted.
    pub prepared_content: Option<Value>,
    /// Whether the claim is recorded on chain.
    pub on_chain: bool,
    #[serde(rename = "type")]
    claim_type: ClaimType,
}

impl Claim {
    pub fn claim_type(&self) -> ClaimType {
        self.claim_type
    }

    pub fn display(&self) -> &'static ClaimUIAssets {
        self.display
    }

    pub fn draft(&self) -> &ClaimDraft {
        &self.draft
    }

    /// Replace the draft. The draft must be for this claim's type.
    pub fn set_draft(&mut self, draft: ClaimDraft) -> Result<(), Error> {
        if draft.claim_type() != self.claim_type {
            return Err(Error::DraftTypeMismatch {
                expected: self.claim_type,
                found: draft.claim_type(),
            });
        }
        self.draft = draft;
        Ok(())
    }

    /// Whether the user has changes that are not persisted.
    pub fn is_unsaved_draft(&self) -> Result<bool, Error> {
        is_unsaved_draft(self)
    }

    /// Persistence state of the claim.
    ///
    /// A claim marked `on_chain` without saved content has nothing to
    /// compare its draft against and reports [`ClaimStatus::DraftOnly`].
    pub fn status(&self) -> Result<ClaimStatus, Error> {
        let content = match (&self.content, &self.prepared_content) {
            (_, Some(_)) => return Ok(ClaimStatus::Preparing),
            (None, None) => {
                if self.on_chain {
                    log::debug!("{} claim is on chain but has no content", self.claim_type);
                }
                return Ok(ClaimStatus::DraftOnly);
            }
            (Some(content), None) => content,
        };
        if draft_differs(self.claim_type, &self.draft, content)? {
            Ok(ClaimStatus::SavedDirty)
        } else if self.on_chain {
            Ok(ClaimStatus::OnChain)
        } else {
            Ok(ClaimStatus::SavedClean)
        }
    }
}

/// Claims keyed by the string form of their claim type.
pub type ClaimMap = HashMap<String, Claim>;

/// A claim that has never been saved.
pub fn new_claim(claim_type: ClaimType) -> Claim {
    Claim {
        content: None,
        contract_type: ContractType::default(),
        display: new_display(claim_type),
        draft: new_draft(claim_type),
        irl: None,
        prepared_content: None,
        on_chain: false,
        claim_type,
    }
}

/// Insert a new claim for every claim type missing from `claims`.
pub fn add_defaults(mut claims: ClaimMap) -> ClaimMap {
    for claim_type in ClaimType::ALL {
        claims
            .entry(claim_type.to_string())
            .or_insert_with(|| new_claim(claim_type));
    }
    claims
}

/// Build a claim from content read back from the profile contract.
pub fn claim_from_triple(
    claim_type: ClaimType,
    triple: impl Into<ValidContent>,
) -> Result<Claim, Error> {
    let ValidContent {
        irl,
        content,
        contract_type,
    } = triple.into();
    let content: Value = serde_json::from_str(&content)?;
    let draft = content_to_draft(claim_type, &content)?;
    Ok(Claim {
        content: Some(content),
        contract_type,
        display: new_display(claim_type),
        draft,
        irl: Some(irl),
        prepared_content: None,
        on_chain: true,
        claim_type,
    })
}

/// Whether `claim` has changes that are not persisted.
///
/// True when nothing is saved, when a prepared credential is awaiting
/// submission, or when the draft differs from the one the saved credential
/// was made from.
pub fn is_unsaved_draft(claim: &Claim) -> Result<bool, Error> {
    match (&claim.content, &claim.prepared_content) {
        (Some(content), None) => draft_differs(claim.claim_type, &claim.draft, content),
        _ => Ok(true),
    }
}

fn draft_differs(claim_type: ClaimType, draft: &ClaimDraft, content: &Value) -> Result<bool, Error> {
    let saved = content_to_draft(claim_type, content)?;
    Ok(!deep_equal(&draft.to_record(), &saved.to_record()))
}
