use landchain_common::abi::{AbiReturn, Method};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub id: String,
    pub owner: String,
    pub area: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertifyRequest {
    pub certificate_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub new_owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloRequest {
    pub name: String,
}

/// Result of a parcel operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub success: bool,
    pub message: String,
    /// Numeric rule code when the operation was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u64>,
}

impl OperationResponse {
    pub fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
            code: None,
        }
    }

    pub fn rejected(message: String, code: u64) -> Self {
        Self {
            success: false,
            message,
            code: Some(code),
        }
    }
}

/// Application arguments, each hex encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiCallRequest {
    pub args: Vec<String>,
}

impl AbiCallRequest {
    pub fn decode_args(&self) -> Result<Vec<Vec<u8>>, hex::FromHexError> {
        self.args.iter().map(hex::decode).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiGroupRequest {
    pub calls: Vec<AbiCallRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiCallResponse {
    pub method: Method,
    pub value: String,
    /// Return log, hex encoded
    pub log: String,
}

impl From<AbiReturn> for AbiCallResponse {
    fn from(result: AbiReturn) -> Self {
        Self {
            method: result.method,
            log: hex::encode(&result.log),
            value: result.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbiGroupResponse {
    pub results: Vec<AbiCallResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}
