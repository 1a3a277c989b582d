use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512_256};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::config::ABI_SELECTOR_SIZE;

pub type Selector = [u8; ABI_SELECTOR_SIZE];

/// Methods exposed by the deployed contract, named as on chain
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Method {
    #[strum(serialize = "register_tanah")]
    #[serde(rename = "register_tanah")]
    Register,
    #[strum(serialize = "buat_sertifikat")]
    #[serde(rename = "buat_sertifikat")]
    Certify,
    #[strum(serialize = "verifikasi_tanah")]
    #[serde(rename = "verifikasi_tanah")]
    Verify,
    #[strum(serialize = "pindah_kepemilikan")]
    #[serde(rename = "pindah_kepemilikan")]
    Transfer,
    #[strum(serialize = "get_info_tanah")]
    #[serde(rename = "get_info_tanah")]
    Report,
    #[strum(serialize = "hello")]
    #[serde(rename = "hello")]
    Hello,
}

lazy_static! {
    static ref SELECTORS: HashMap<Selector, Method> =
        Method::iter().map(|method| (method.selector(), method)).collect();
}

impl Method {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Number of string parameters
    pub fn arity(&self) -> usize {
        match self {
            Method::Register => 4,
            Method::Certify | Method::Transfer | Method::Hello => 1,
            Method::Verify | Method::Report => 0,
        }
    }

    /// ARC4 signature, every parameter and the return value are strings
    pub fn signature(&self) -> String {
        let params = vec!["string"; self.arity()].join(",");
        format!("{}({})string", self.name(), params)
    }

    pub fn selector(&self) -> Selector {
        let digest = Sha512_256::digest(self.signature().as_bytes());
        let mut selector = [0u8; ABI_SELECTOR_SIZE];
        selector.copy_from_slice(&digest[..ABI_SELECTOR_SIZE]);
        selector
    }

    pub fn from_selector(selector: &Selector) -> Option<Method> {
        SELECTORS.get(selector).copied()
    }

}
