//! Requesting a wallet signature over a claim message.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tzp_micheline::{get_micheline_string_bytes, EncodeError};

/// How the wallet must interpret the payload it signs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SigningType {
    Raw,
    Operation,
    Micheline,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestSignPayloadInput {
    pub signing_type: SigningType,
    /// Hex encoded payload.
    pub payload: String,
    /// Address of the account expected to sign.
    pub source_address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignPayloadResponse {
    /// Base58 encoded signature, e.g. `edsig...`.
    pub signature: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: String,
}

/// The connected wallet user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserData {
    pub account: Account,
}

/// A connected Tezos wallet able to sign payloads.
#[async_trait]
pub trait WalletClient {
    type Error;
    async fn request_sign_payload(
        &self,
        request: RequestSignPayloadInput,
    ) -> Result<SignPayloadResponse, Self::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum SignClaimError<E> {
    #[error("Unable to encode signing payload: {0}")]
    Encode(#[from] EncodeError),
    /// The wallet's own error, returned as is.
    #[error("Wallet signing request failed: {0}")]
    Wallet(#[source] E),
}

/// Have `wallet` sign `formatted_input` as a Micheline string, on behalf of
/// the account of `user`.
pub async fn sign_claim<W>(
    user: &UserData,
    formatted_input: &str,
    wallet: &W,
) -> Result<String, SignClaimError<W::Error>>
where
    W: WalletClient + Sync + ?Sized,
{
    let request = RequestSignPayloadInput {
        signing_type: SigningType::Micheline,
        payload: get_micheline_string_bytes(formatted_input)?,
        source_address: user.account.address.clone(),
    };
    log::debug!("Requesting signature from {}", request.source_address);
    let SignPayloadResponse { signature } = wallet
        .request_sign_payload(request)
        .await
        .map_err(SignClaimError::Wallet)?;
    Ok(signature)
}
