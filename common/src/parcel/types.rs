use serde::{Deserialize, Serialize};

use crate::serializer::*;

/// The land record held by a registry
///
/// Every field starts empty and the parcel starts unverified.
/// `area` is kept as opaque text and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Parcel identifier, set at registration
    #[serde(default)]
    pub id: String,
    /// Current legal owner
    #[serde(default)]
    pub owner: String,
    /// Area descriptor (e.g. "100sqm")
    #[serde(default)]
    pub area: String,
    /// Free-text location
    #[serde(default)]
    pub location: String,
    /// Certificate number, empty until certified
    #[serde(default)]
    pub certificate_number: String,
    /// Whether an ownership transfer is currently permitted
    #[serde(default)]
    pub verified: bool,
}

impl Parcel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> VerificationStatus {
        VerificationStatus::from(self.verified)
    }

    /// Whether a transfer is currently permitted
    pub fn is_verified(&self) -> bool {
        self.status().is_verified()
    }
}

// Fields are encoded in declaration order
impl Serializer for Parcel {
    fn write(&self, writer: &mut Writer) {
        self.id.write(writer);
        self.owner.write(writer);
        self.area.write(writer);
        self.location.write(writer);
        self.certificate_number.write(writer);
        self.verified.write(writer);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        Ok(Self {
            id: String::read(reader)?,
            owner: String::read(reader)?,
            area: String::read(reader)?,
            location: String::read(reader)?,
            certificate_number: String::read(reader)?,
            verified: bool::read(reader)?,
        })
    }

    fn size(&self) -> usize {
        self.id.size()
            + self.owner.size()
            + self.area.size()
            + self.location.size()
            + self.certificate_number.size()
            + self.verified.size()
    }
}

/// Two-state view of the verification flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Initial state, and the state after every registration or transfer
    #[default]
    Unverified,
    /// Ownership may be transferred once
    Verified,
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }
}

impl From<bool> for VerificationStatus {
    fn from(verified: bool) -> Self {
        if verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Unverified
        }
    }
}

/// Outcome of a successful state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum ParcelEvent {
    Registered { id: String },
    Certified { certificate_number: String },
    Verified,
    Transferred { from: String, to: String },
}
