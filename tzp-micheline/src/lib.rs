//! Packing of plain strings into the Micheline binary form expected by Tezos
//! wallets when asked to sign a `MICHELINE` payload.
//!
//! A packed string is the `0x05` pack prefix, the `0x01` string tag, the
//! length of the UTF-8 body as a big-endian `u32`, then the body itself.

/// Pack prefix followed by the Micheline string tag.
pub const MICHELINE_STRING_TAG: [u8; 2] = [0x05, 0x01];

const HEADER_LEN: usize = MICHELINE_STRING_TAG.len() + 4;

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("Message length conversion error: {0}")]
    Length(#[from] core::num::TryFromIntError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    #[error("Expected at least 6 bytes but found {0}")]
    Truncated(usize),
    #[error("Unknown Micheline prefix: {0:02x}{1:02x}")]
    Tag(u8, u8),
    #[error("Expected string length {0} but found {1}")]
    Length(usize, usize),
    #[error("String is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Pack `msg` as a Micheline string.
pub fn encode_micheline_string(msg: &str) -> Result<Vec<u8>, EncodeError> {
    let msg_bytes = msg.as_bytes();
    let len_u32 = u32::try_from(msg_bytes.len())?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + msg_bytes.len());
    bytes.extend_from_slice(&MICHELINE_STRING_TAG);
    bytes.extend_from_slice(&len_u32.to_be_bytes());
    bytes.extend_from_slice(msg_bytes);
    Ok(bytes)
}

/// Pack `msg` as a Micheline string and hex encode it, the form taken by the
/// `payload` field of a wallet sign request.
pub fn get_micheline_string_bytes(msg: &str) -> Result<String, EncodeError> {
    Ok(hex::encode(encode_micheline_string(msg)?))
}

/// Recover the string from a hex encoded packed Micheline string.
pub fn decode_micheline_string_bytes(payload: &str) -> Result<String, DecodeError> {
    let bytes = hex::decode(payload)?;
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::Truncated(bytes.len()));
    }
    if bytes[..2] != MICHELINE_STRING_TAG {
        return Err(DecodeError::Tag(bytes[0], bytes[1]));
    }
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&bytes[2..HEADER_LEN]);
    let expected = u32::from_be_bytes(len_bytes) as usize;
    let body = &bytes[HEADER_LEN..];
    if body.len() != expected {
        return Err(DecodeError::Length(expected, body.len()));
    }
    Ok(String::from_utf8(body.to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string() {
        assert_eq!(get_micheline_string_bytes("hi").unwrap(), "0501000000026869");
    }

    #[test]
    fn empty_string() {
        assert_eq!(get_micheline_string_bytes("").unwrap(), "050100000000");
        assert_eq!(decode_micheline_string_bytes("050100000000").unwrap(), "");
    }

    #[test]
    fn length_counts_utf8_bytes() {
        // "é" is one char but two bytes.
        let encoded = get_micheline_string_bytes("é").unwrap();
        assert_eq!(encoded, "050100000002c3a9");
    }

    #[test]
    fn tezos_signed_message() {
        let msg = "Tezos Signed Message: example.org 2021-05-25T18:54:42Z Signed with Temple tz1";
        let expected = "05010000004d54657a6f73205369676e6564204d6573736167653a206578616d706c652e6f726720323032312d30352d32355431383a35343a34325a205369676e656420776974682054656d706c6520747a31";
        assert_eq!(get_micheline_string_bytes(msg).unwrap(), expected);
        assert_eq!(decode_micheline_string_bytes(expected).unwrap(), msg);
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            decode_micheline_string_bytes("zz"),
            Err(DecodeError::Hex(_))
        ));
        assert_eq!(
            decode_micheline_string_bytes("0501"),
            Err(DecodeError::Truncated(2))
        );
        assert_eq!(
            decode_micheline_string_bytes("0500000000026869"),
            Err(DecodeError::Tag(0x05, 0x00))
        );
        assert_eq!(
            decode_micheline_string_bytes("0501000000036869"),
            Err(DecodeError::Length(3, 2))
        );
        assert!(matches!(
            decode_micheline_string_bytes("050100000001ff"),
            Err(DecodeError::Utf8(_))
        ));
    }
}
