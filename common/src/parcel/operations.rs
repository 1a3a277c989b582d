// Parcel State Transitions
// Each transition mutates the record in place and reports what happened.
// A rejected transition leaves every field untouched.

use log::{debug, warn};

use super::{Parcel, ParcelError, ParcelEvent, ParcelResult};

impl Parcel {
    /// Register (or re-register) the parcel
    ///
    /// Overwrites id, owner, area and location and clears the verification.
    /// The certificate number survives re-registration.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        owner: impl Into<String>,
        area: impl Into<String>,
        location: impl Into<String>,
    ) -> ParcelEvent {
        self.id = id.into();
        self.owner = owner.into();
        self.area = area.into();
        self.location = location.into();
        self.verified = false;

        if log::log_enabled!(log::Level::Debug) {
            debug!("Parcel {} registered to {}", self.id, self.owner);
        }

        ParcelEvent::Registered {
            id: self.id.clone(),
        }
    }

    /// Attach a certificate number, independent of verification
    pub fn certify(&mut self, certificate_number: impl Into<String>) -> ParcelEvent {
        self.certificate_number = certificate_number.into();

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Parcel {} certified as {}",
                self.id, self.certificate_number
            );
        }

        ParcelEvent::Certified {
            certificate_number: self.certificate_number.clone(),
        }
    }

    /// Mark the parcel as verified, allowing one transfer
    pub fn verify(&mut self) -> ParcelEvent {
        self.verified = true;

        if log::log_enabled!(log::Level::Debug) {
            debug!("Parcel {} verified", self.id);
        }

        ParcelEvent::Verified
    }

    /// Transfer ownership
    ///
    /// # Returns
    /// - `Ok(ParcelEvent::Transferred)`: owner replaced, verification consumed
    /// - `Err(ParcelError::NotVerified)`: parcel unchanged
    pub fn transfer(&mut self, new_owner: impl Into<String>) -> ParcelResult<ParcelEvent> {
        if !self.is_verified() {
            if log::log_enabled!(log::Level::Warn) {
                warn!(
                    "Parcel {}: transfer rejected, parcel is not verified",
                    self.id
                );
            }
            return Err(ParcelError::NotVerified);
        }

        let new_owner = new_owner.into();
        let previous_owner = std::mem::replace(&mut self.owner, new_owner);
        self.verified = false;

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "Parcel {} transferred from {} to {}",
                self.id, previous_owner, self.owner
            );
        }

        Ok(ParcelEvent::Transferred {
            from: previous_owner,
            to: self.owner.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::VerificationStatus;

    fn registered() -> Parcel {
        let mut parcel = Parcel::new();
        parcel.register("T1", "Alice", "100sqm", "CityA");
        parcel
    }

    #[test]
    fn test_register_sets_fields() {
        let mut parcel = Parcel::new();
        let event = parcel.register("T1", "Alice", "100sqm", "CityA");
        assert_eq!(
            event,
            ParcelEvent::Registered {
                id: "T1".to_string()
            }
        );
        assert_eq!(parcel.id, "T1");
        assert_eq!(parcel.owner, "Alice");
        assert_eq!(parcel.area, "100sqm");
        assert_eq!(parcel.location, "CityA");
        assert!(!parcel.verified);
    }

    #[test]
    fn test_register_clears_verification() {
        let mut parcel = registered();
        parcel.verify();
        parcel.register("T2", "Dewi", "250m2", "Bandung");
        assert_eq!(parcel.status(), VerificationStatus::Unverified);
    }

    #[test]
    fn test_register_keeps_certificate() {
        let mut parcel = registered();
        parcel.certify("CERT-001");
        parcel.register("T2", "Dewi", "250m2", "Bandung");
        assert_eq!(parcel.certificate_number, "CERT-001");
    }

    #[test]
    fn test_register_accepts_empty_text() {
        let mut parcel = registered();
        parcel.register("", "", "", "");
        assert_eq!(parcel, Parcel::new());
    }

    #[test]
    fn test_certify_does_not_verify() {
        let mut parcel = registered();
        let event = parcel.certify("CERT-001");
        assert_eq!(
            event,
            ParcelEvent::Certified {
                certificate_number: "CERT-001".to_string()
            }
        );
        assert!(!parcel.verified);
        assert_eq!(parcel.owner, "Alice");
    }

    #[test]
    fn test_certify_before_register() {
        let mut parcel = Parcel::new();
        parcel.certify("CERT-001");
        assert_eq!(parcel.certificate_number, "CERT-001");
        assert!(parcel.id.is_empty());
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut parcel = registered();
        assert_eq!(parcel.verify(), ParcelEvent::Verified);
        let after_first = parcel.clone();
        assert_eq!(parcel.verify(), ParcelEvent::Verified);
        assert_eq!(parcel, after_first);
        assert!(parcel.verified);
    }

    #[test]
    fn test_transfer_requires_verification() {
        let mut parcel = registered();
        let before = parcel.clone();
        assert_eq!(parcel.transfer("Bob"), Err(ParcelError::NotVerified));
        assert_eq!(parcel, before);
    }

    #[test]
    fn test_transfer_consumes_verification() {
        let mut parcel = registered();
        parcel.verify();
        assert_eq!(
            parcel.transfer("Bob"),
            Ok(ParcelEvent::Transferred {
                from: "Alice".to_string(),
                to: "Bob".to_string(),
            })
        );
        assert_eq!(parcel.owner, "Bob");
        assert!(!parcel.verified);

        assert_eq!(parcel.transfer("Carol"), Err(ParcelError::NotVerified));
        assert_eq!(parcel.owner, "Bob");
    }

    #[test]
    fn test_transfer_to_same_owner_still_consumes() {
        let mut parcel = registered();
        parcel.verify();
        assert!(parcel.transfer("Alice").is_ok());
        assert_eq!(parcel.owner, "Alice");
        assert!(!parcel.verified);
    }

    #[test]
    fn test_verify_before_register_allows_transfer() {
        let mut parcel = Parcel::new();
        parcel.verify();
        assert_eq!(
            parcel.transfer("Bob"),
            Ok(ParcelEvent::Transferred {
                from: String::new(),
                to: "Bob".to_string(),
            })
        );
    }
}
