//! Boundary with loosely typed verifiable credential documents.
//!
//! Credentials come from storage and wallets as arbitrary JSON. Everything in
//! this module narrows a [`Value`] to the pieces the claim model reads, and
//! nothing past it sees the untyped document.
use serde_json::Value;

use crate::claim_type::ClaimType;
use crate::Error;

/// Find the claim type of a credential from its `type` array.
///
/// Entries are scanned in order and the first recognized one wins. Returns
/// `None` when `type` is missing, is not an array, or names no known claim.
pub fn claim_type_from_vc(vc: &Value) -> Option<ClaimType> {
    let types = match vc.get("type") {
        Some(Value::Array(types)) => types,
        _ => return None,
    };
    let claim_type = types
        .iter()
        .filter_map(Value::as_str)
        .find_map(ClaimType::from_credential_type);
    if claim_type.is_none() {
        log::debug!("No claim type in credential types {:?}", types);
    }
    claim_type
}

/// Look up a dotted `path` such as `credentialSubject.sameAs`.
pub(crate) fn get<'a>(document: &'a Value, path: &'static str) -> Result<&'a Value, Error> {
    let mut value = document;
    let mut end = 0;
    for segment in path.split('.') {
        let object = value
            .as_object()
            .ok_or(Error::InvalidField(&path[..end.max(1) - 1]))?;
        end += segment.len() + 1;
        value = object
            .get(segment)
            .ok_or(Error::MissingField(&path[..end - 1]))?;
    }
    Ok(value)
}

pub(crate) fn get_str<'a>(document: &'a Value, path: &'static str) -> Result<&'a str, Error> {
    get(document, path)?
        .as_str()
        .ok_or(Error::InvalidField(path))
}

/// Like [`get_str`], but also accepts a number and renders it in decimal.
pub(crate) fn get_string_or_number(document: &Value, path: &'static str) -> Result<String, Error> {
    match get(document, path)? {
        Value::String(string) => Ok(string.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(Error::InvalidField(path)),
    }
}
