// Host Global State
// The deployed contract keeps the parcel as six global state entries.
// This module converts a Parcel to and from that key/value layout.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::*, parcel::Parcel};

/// A single global state value, either a byte string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateValue {
    Bytes(String),
    Uint(u64),
}

impl StateValue {
    fn kind(&self) -> &'static str {
        match self {
            StateValue::Bytes(_) => "bytes",
            StateValue::Uint(_) => "uint",
        }
    }
}

/// Ordered global state, keyed like the deployed contract
pub type GlobalState = IndexMap<String, StateValue>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Global state key '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

const TEXT_KEYS: [&str; 5] = [
    KEY_PARCEL_ID,
    KEY_OWNER,
    KEY_AREA,
    KEY_LOCATION,
    KEY_CERTIFICATE_NUMBER,
];

impl Parcel {
    /// Global state entries in the contract's field order
    pub fn to_global_state(&self) -> GlobalState {
        let mut state = GlobalState::new();
        let texts = [
            &self.id,
            &self.owner,
            &self.area,
            &self.location,
            &self.certificate_number,
        ];
        for (key, value) in TEXT_KEYS.iter().zip(texts) {
            state.insert((*key).to_owned(), StateValue::Bytes(value.clone()));
        }

        let status = if self.is_verified() {
            STATUS_VERIFIED
        } else {
            STATUS_UNVERIFIED
        };
        state.insert(
            KEY_VERIFICATION_STATUS.to_owned(),
            StateValue::Uint(status),
        );
        state
    }

    /// Rebuild a parcel from global state
    ///
    /// Missing keys read as empty, unknown keys are ignored and only a status of 1 counts as verified.
    pub fn from_global_state(state: &GlobalState) -> Result<Self, StateError> {
        let text = |key: &str| -> Result<String, StateError> {
            match state.get(key) {
                None => Ok(String::new()),
                Some(StateValue::Bytes(value)) => Ok(value.clone()),
                Some(other) => Err(StateError::TypeMismatch {
                    key: key.to_owned(),
                    expected: "bytes",
                    found: other.kind(),
                }),
            }
        };

        let verified = match state.get(KEY_VERIFICATION_STATUS) {
            None => false,
            Some(StateValue::Uint(status)) => *status == STATUS_VERIFIED,
            Some(other) => {
                return Err(StateError::TypeMismatch {
                    key: KEY_VERIFICATION_STATUS.to_owned(),
                    expected: "uint",
                    found: other.kind(),
                })
            }
        };

        if log::log_enabled!(log::Level::Debug) {
            for key in state.keys() {
                if key != KEY_VERIFICATION_STATUS && !TEXT_KEYS.contains(&key.as_str()) {
                    debug!("Ignoring unknown global state key: {key}");
                }
            }
        }

        Ok(Self {
            id: text(KEY_PARCEL_ID)?,
            owner: text(KEY_OWNER)?,
            area: text(KEY_AREA)?,
            location: text(KEY_LOCATION)?,
            certificate_number: text(KEY_CERTIFICATE_NUMBER)?,
            verified,
        })
    }
}
