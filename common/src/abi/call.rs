use serde::{Deserialize, Serialize};

use crate::parcel::{Locale, Parcel};

use super::{decode_string, encode_string, AbiError, Method, Selector};

/// A decoded application call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum AbiCall {
    Register {
        id: String,
        owner: String,
        area: String,
        location: String,
    },
    Certify {
        certificate_number: String,
    },
    Verify,
    Transfer {
        new_owner: String,
    },
    Report,
    Hello {
        name: String,
    },
}

impl AbiCall {
    pub fn method(&self) -> Method {
        match self {
            AbiCall::Register { .. } => Method::Register,
            AbiCall::Certify { .. } => Method::Certify,
            AbiCall::Verify => Method::Verify,
            AbiCall::Transfer { .. } => Method::Transfer,
            AbiCall::Report => Method::Report,
            AbiCall::Hello { .. } => Method::Hello,
        }
    }

    /// Decode application arguments: selector first, then one ARC4 string per parameter
    pub fn decode<A: AsRef<[u8]>>(args: &[A]) -> Result<Self, AbiError> {
        let (selector, params) = args.split_first().ok_or(AbiError::EmptyCall)?;
        let selector: Selector = selector
            .as_ref()
            .try_into()
            .map_err(|_| AbiError::InvalidSelectorSize(selector.as_ref().len()))?;
        let method = Method::from_selector(&selector).ok_or(AbiError::UnknownSelector(selector))?;

        if params.len() != method.arity() {
            return Err(AbiError::InvalidArgumentCount {
                method: method.name(),
                expected: method.arity(),
                got: params.len(),
            });
        }

        let mut values = params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                decode_string(param.as_ref()).map_err(|e| match e {
                    AbiError::Reader(source) => AbiError::InvalidArgument {
                        index: index + 1,
                        source,
                    },
                    AbiError::TrailingBytes(_) => AbiError::TrailingBytes(index + 1),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        // Arity was checked above, so every parameter is present
        let mut next = || values.next().unwrap_or_default();
        let call = match method {
            Method::Register => AbiCall::Register {
                id: next(),
                owner: next(),
                area: next(),
                location: next(),
            },
            Method::Certify => AbiCall::Certify {
                certificate_number: next(),
            },
            Method::Verify => AbiCall::Verify,
            Method::Transfer => AbiCall::Transfer { new_owner: next() },
            Method::Report => AbiCall::Report,
            Method::Hello => AbiCall::Hello { name: next() },
        };
        Ok(call)
    }

    /// Encode as application arguments, the inverse of `decode`
    pub fn encode(&self) -> Result<Vec<Vec<u8>>, AbiError> {
        let params: Vec<&str> = match self {
            AbiCall::Register {
                id,
                owner,
                area,
                location,
            } => vec![id.as_str(), owner.as_str(), area.as_str(), location.as_str()],
            AbiCall::Certify { certificate_number } => vec![certificate_number.as_str()],
            AbiCall::Verify | AbiCall::Report => Vec::new(),
            AbiCall::Transfer { new_owner } => vec![new_owner.as_str()],
            AbiCall::Hello { name } => vec![name.as_str()],
        };

        let mut args = Vec::with_capacity(1 + params.len());
        args.push(self.method().selector().to_vec());
        for param in params {
            args.push(encode_string(param)?);
        }
        Ok(args)
    }

    /// Apply the call to the record and return the string result
    ///
    /// A rejected transfer yields the localized error text, like the deployed contract.
    pub fn execute(self, parcel: &mut Parcel, locale: Locale) -> String {
        match self {
            AbiCall::Register {
                id,
                owner,
                area,
                location,
            } => locale.render(&parcel.register(id, owner, area, location)),
            AbiCall::Certify { certificate_number } => {
                locale.render(&parcel.certify(certificate_number))
            }
            AbiCall::Verify => locale.render(&parcel.verify()),
            AbiCall::Transfer { new_owner } => locale.render_result(&parcel.transfer(new_owner)),
            AbiCall::Report => locale.report(parcel),
            AbiCall::Hello { name } => locale.greeting(&name),
        }
    }
}
