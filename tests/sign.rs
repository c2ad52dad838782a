use std::sync::Mutex;

use async_trait::async_trait;
use tzp_claims::sign::{
    Account, RequestSignPayloadInput, SignPayloadResponse, SigningType,
};
use tzp_claims::{sign_claim, SignClaimError, UserData, WalletClient};

#[derive(Debug, PartialEq)]
enum WalletError {
    Rejected,
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rejected => f.write_str("user rejected the request"),
        }
    }
}

#[derive(Default)]
struct MockWallet {
    reject: bool,
    requests: Mutex<Vec<RequestSignPayloadInput>>,
}

#[async_trait]
impl WalletClient for MockWallet {
    type Error = WalletError;
    async fn request_sign_payload(
        &self,
        request: RequestSignPayloadInput,
    ) -> Result<SignPayloadResponse, Self::Error> {
        self.requests.lock().unwrap().push(request);
        if self.reject {
            return Err(WalletError::Rejected);
        }
        Ok(SignPayloadResponse {
            signature: "edsigtest".to_string(),
        })
    }
}

fn user() -> UserData {
    UserData {
        account: Account {
            address: "tz1TwZZZSShtM73oEr74aDtDcns3UmFqaca6".to_string(),
        },
    }
}

#[async_std::test]
async fn signs_micheline_payload() {
    let wallet = MockWallet::default();
    let signature = sign_claim(&user(), "hi", &wallet).await.unwrap();
    assert_eq!(signature, "edsigtest");

    let requests = wallet.requests.lock().unwrap();
    assert_eq!(
        *requests,
        vec![RequestSignPayloadInput {
            signing_type: SigningType::Micheline,
            payload: "0501000000026869".to_string(),
            source_address: "tz1TwZZZSShtM73oEr74aDtDcns3UmFqaca6".to_string(),
        }]
    );
    assert_eq!(
        serde_json::to_value(&requests[0]).unwrap(),
        serde_json::json!({
            "signingType": "micheline",
            "payload": "0501000000026869",
            "sourceAddress": "tz1TwZZZSShtM73oEr74aDtDcns3UmFqaca6"
        })
    );
}

#[async_std::test]
async fn wallet_error_is_returned_as_is() {
    let wallet = MockWallet {
        reject: true,
        ..Default::default()
    };
    let err = sign_claim(&user(), "hi", &wallet).await.unwrap_err();
    assert!(matches!(err, SignClaimError::Wallet(WalletError::Rejected)));
    assert_eq!(
        err.to_string(),
        "Wallet signing request failed: user rejected the request"
    );
    assert_eq!(wallet.requests.lock().unwrap().len(), 1);
}
