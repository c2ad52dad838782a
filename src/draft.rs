use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::claim_type::ClaimType;
use crate::vc;
use crate::Error;

/// Prefix of the profile URL stored in a Twitter credential's `sameAs`.
pub const TWITTER_URL_PREFIX: &str = "https://twitter.com/";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BasicDraft {
    pub alias: String,
    pub description: String,
    pub logo: String,
    pub website: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TwitterDraft {
    pub handle: String,
    /// Derived from the handle and the verification tweet id.
    pub tweet_url: String,
}

impl TwitterDraft {
    pub fn new(handle: &str, tweet_id: &str) -> Self {
        Self {
            handle: handle.to_string(),
            tweet_url: format!("{}{}/status/{}", TWITTER_URL_PREFIX, handle, tweet_id),
        }
    }
}

/// User supplied values for a claim, shaped by its claim type.
///
/// Serializes as the bare draft record, without a tag.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClaimDraft {
    Basic(BasicDraft),
    Twitter(TwitterDraft),
}

impl ClaimDraft {
    pub fn claim_type(&self) -> ClaimType {
        match self {
            Self::Basic(_) => ClaimType::Basic,
            Self::Twitter(_) => ClaimType::Twitter,
        }
    }

    /// The draft as a JSON record, for structural comparison.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        match self {
            Self::Basic(draft) => {
                record.insert("alias".into(), draft.alias.clone().into());
                record.insert("description".into(), draft.description.clone().into());
                record.insert("logo".into(), draft.logo.clone().into());
                record.insert("website".into(), draft.website.clone().into());
            }
            Self::Twitter(draft) => {
                record.insert("handle".into(), draft.handle.clone().into());
                record.insert("tweetUrl".into(), draft.tweet_url.clone().into());
            }
        }
        record
    }
}

impl From<BasicDraft> for ClaimDraft {
    fn from(draft: BasicDraft) -> Self {
        Self::Basic(draft)
    }
}

impl From<TwitterDraft> for ClaimDraft {
    fn from(draft: TwitterDraft) -> Self {
        Self::Twitter(draft)
    }
}

/// Empty draft for first time claim creation.
pub fn new_draft(claim_type: ClaimType) -> ClaimDraft {
    match claim_type {
        ClaimType::Basic => BasicDraft::default().into(),
        ClaimType::Twitter => TwitterDraft::default().into(),
    }
}

/// Rebuild the draft a stored credential was made from.
///
/// The credential is expected to be valid already; a missing or mistyped
/// field is an error rather than an empty value.
pub fn content_to_draft(claim_type: ClaimType, content: &Value) -> Result<ClaimDraft, Error> {
    match claim_type {
        ClaimType::Basic => Ok(BasicDraft {
            alias: vc::get_str(content, "credentialSubject.alias")?.to_string(),
            description: vc::get_str(content, "credentialSubject.description")?.to_string(),
            logo: vc::get_str(content, "credentialSubject.logo")?.to_string(),
            website: vc::get_str(content, "credentialSubject.website")?.to_string(),
        }
        .into()),
        ClaimType::Twitter => {
            let same_as = vc::get_str(content, "credentialSubject.sameAs")?;
            let tweet_id = vc::get_string_or_number(content, "evidence.tweetId")?;
            let handle = same_as.replacen(TWITTER_URL_PREFIX, "", 1);
            Ok(TwitterDraft::new(&handle, &tweet_id).into())
        }
    }
}
