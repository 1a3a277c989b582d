use log::debug;
use serde::{Deserialize, Serialize};

use crate::{config::MAX_GROUP_SIZE, registry::ParcelRegistry};

use super::{encode_return, AbiCall, AbiError, Method};

/// Result of an application call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiReturn {
    pub method: Method,
    /// String result, the localized error text for a rejected transfer
    pub value: String,
    /// ARC4 return log: prefix followed by the encoded value
    #[serde(with = "hex")]
    pub log: Vec<u8>,
}

/// Decode and execute a single application call
pub fn dispatch<A: AsRef<[u8]>>(
    registry: &ParcelRegistry,
    args: &[A],
) -> Result<AbiReturn, AbiError> {
    let call = AbiCall::decode(args)?;
    let mut results = execute_calls(registry, vec![call])?;
    results.pop().ok_or(AbiError::EmptyCall)
}

/// Decode and execute a group of calls atomically
///
/// Every call is decoded before any runs. The group executes under a single
/// lock acquisition and either applies completely or leaves the parcel unchanged.
pub fn dispatch_group<A: AsRef<[u8]>>(
    registry: &ParcelRegistry,
    group: &[Vec<A>],
) -> Result<Vec<AbiReturn>, AbiError> {
    if group.is_empty() {
        return Err(AbiError::EmptyGroup);
    }
    if group.len() > MAX_GROUP_SIZE {
        return Err(AbiError::GroupTooLarge(group.len()));
    }

    let calls = group
        .iter()
        .enumerate()
        .map(|(index, args)| {
            AbiCall::decode(args).map_err(|e| AbiError::InGroup {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    execute_calls(registry, calls)
}

/// Execute decoded calls against a draft of the record, committing only if all succeed
pub fn execute_calls(
    registry: &ParcelRegistry,
    calls: Vec<AbiCall>,
) -> Result<Vec<AbiReturn>, AbiError> {
    let locale = registry.locale();
    registry.atomically(|parcel| {
        let mut draft = parcel.clone();
        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let method = call.method();
            let value = call.execute(&mut draft, locale);
            let log = encode_return(&value)?;

            if log::log_enabled!(log::Level::Debug) {
                debug!("ABI call {} returned: {}", method, value);
            }
            results.push(AbiReturn { method, value, log });
        }

        *parcel = draft;
        Ok(results)
    })
}
