//! Property-based tests for the parcel state machine
//!
//! Random operation sequences are applied to a registry and compared against
//! the transition rules after every step.
//!
//! Properties tested:
//! - Registration always lands in Unverified
//! - Verification is idempotent and touches nothing else
//! - Transfer is gated by verification and consumes it
//! - The report mirrors every field of the live record
//! - Persisted forms keep all six fields

#![allow(clippy::disallowed_methods)]

use landchain_common::{
    abi::{decode_return, dispatch, AbiCall},
    parcel::{Locale, Parcel, ParcelError},
    registry::ParcelRegistry,
    serializer::Serializer,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Register(String, String, String, String),
    Certify(String),
    Verify,
    Transfer(String),
    Report,
}

fn text() -> impl Strategy<Value = String> {
    // Includes empty and non-ASCII values
    "[a-zA-Z0-9 ]{0,12}|[αβγ ]{0,4}"
}

fn arb_parcel() -> impl Strategy<Value = Parcel> {
    (text(), text(), text(), text(), text(), any::<bool>()).prop_map(
        |(id, owner, area, location, certificate_number, verified)| Parcel {
            id,
            owner,
            area,
            location,
            certificate_number,
            verified,
        },
    )
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (text(), text(), text(), text()).prop_map(|(a, b, c, d)| Op::Register(a, b, c, d)),
        text().prop_map(Op::Certify),
        Just(Op::Verify),
        text().prop_map(Op::Transfer),
        Just(Op::Report),
    ]
}

// Property 1: register always resets verification
proptest! {
    #[test]
    fn test_register_lands_unverified(
        start in arb_parcel(),
        id in text(),
        owner in text(),
        area in text(),
        location in text(),
    ) {
        let registry = ParcelRegistry::from_parcel(start.clone(), Locale::Indonesian);
        registry.register(id.clone(), owner.clone(), area.clone(), location.clone());

        let parcel = registry.snapshot();
        prop_assert!(!parcel.verified);
        prop_assert_eq!(parcel.id, id);
        prop_assert_eq!(parcel.owner, owner);
        prop_assert_eq!(parcel.area, area);
        prop_assert_eq!(parcel.location, location);
        // Certificate survives re-registration
        prop_assert_eq!(parcel.certificate_number, start.certificate_number);
    }
}

// Property 2: verify is idempotent
proptest! {
    #[test]
    fn test_verify_is_idempotent(start in arb_parcel()) {
        let registry = ParcelRegistry::from_parcel(start.clone(), Locale::Indonesian);
        let expected = Parcel { verified: true, ..start };

        registry.verify();
        prop_assert_eq!(registry.snapshot(), expected.clone());
        registry.verify();
        prop_assert_eq!(registry.snapshot(), expected);
    }
}

// Property 3: transfer is gated by verification and consumes it
proptest! {
    #[test]
    fn test_transfer_gate(start in arb_parcel(), new_owner in text()) {
        let registry = ParcelRegistry::from_parcel(start.clone(), Locale::English);
        let result = registry.transfer(new_owner.clone());
        let parcel = registry.snapshot();

        if start.verified {
            prop_assert!(result.is_ok());
            prop_assert_eq!(parcel, Parcel { owner: new_owner, verified: false, ..start });
        } else {
            let rejected = result.unwrap_err();
            prop_assert_eq!(rejected.error, ParcelError::NotVerified);
            prop_assert_eq!(parcel, start);
        }
    }
}

// Property 4: a second transfer needs a fresh verification
proptest! {
    #[test]
    fn test_transfer_consumes_verification(
        start in arb_parcel(),
        first in text(),
        second in text(),
    ) {
        let registry = ParcelRegistry::from_parcel(start, Locale::Indonesian);
        registry.verify();
        prop_assert!(registry.transfer(first.clone()).is_ok());
        prop_assert!(registry.transfer(second.clone()).is_err());
        prop_assert_eq!(registry.snapshot().owner, first);

        registry.verify();
        prop_assert!(registry.transfer(second.clone()).is_ok());
        prop_assert_eq!(registry.snapshot().owner, second);
    }
}

// Property 5: the report mirrors the record
proptest! {
    #[test]
    fn test_report_mirrors_record(parcel in arb_parcel()) {
        let report = Locale::English.report(&parcel);
        let lines: Vec<&str> = report.split('\n').collect();

        prop_assert_eq!(lines.len(), 7);
        prop_assert_eq!(lines[0], "Parcel Information:");
        prop_assert_eq!(lines[1], format!("ID: {}", parcel.id));
        prop_assert_eq!(lines[2], format!("Owner: {}", parcel.owner));
        prop_assert_eq!(lines[3], format!("Area: {}", parcel.area));
        prop_assert_eq!(lines[4], format!("Location: {}", parcel.location));
        prop_assert_eq!(lines[5], format!("Certificate: {}", parcel.certificate_number));
        let expected_status = if parcel.verified { "Status: Verified" } else { "Status: Not Verified" };
        prop_assert_eq!(lines[6], expected_status);
    }
}

// Random operation sequences keep every rule at every step
proptest! {
    #[test]
    fn test_operation_sequences(ops in prop::collection::vec(arb_op(), 0..40)) {
        let registry = ParcelRegistry::new();
        let mut model = Parcel::new();

        for op in ops {
            match op {
                Op::Register(id, owner, area, location) => {
                    registry.register(id.clone(), owner.clone(), area.clone(), location.clone());
                    model = Parcel { id, owner, area, location, verified: false, ..model };
                }
                Op::Certify(number) => {
                    registry.certify(number.clone());
                    model.certificate_number = number;
                }
                Op::Verify => {
                    registry.verify();
                    model.verified = true;
                }
                Op::Transfer(owner) => {
                    let accepted = registry.transfer(owner.clone()).is_ok();
                    prop_assert_eq!(accepted, model.verified);
                    if accepted {
                        model.owner = owner;
                        model.verified = false;
                    }
                }
                Op::Report => {
                    prop_assert_eq!(registry.report(), Locale::Indonesian.report(&model));
                }
            }
            prop_assert_eq!(registry.snapshot(), model.clone());
        }
    }
}

// Persisted forms keep all six fields
proptest! {
    #[test]
    fn test_persisted_forms(parcel in arb_parcel()) {
        prop_assert_eq!(Parcel::from_bytes(&parcel.to_bytes()).unwrap(), parcel.clone());
        prop_assert_eq!(Parcel::from_global_state(&parcel.to_global_state()).unwrap(), parcel.clone());

        let json = serde_json::to_string(&parcel).unwrap();
        prop_assert_eq!(serde_json::from_str::<Parcel>(&json).unwrap(), parcel);
    }
}

// ABI execution matches direct registry calls
proptest! {
    #[test]
    fn test_abi_matches_registry(start in arb_parcel(), new_owner in text()) {
        let direct = ParcelRegistry::from_parcel(start.clone(), Locale::Indonesian);
        let via_abi = ParcelRegistry::from_parcel(start, Locale::Indonesian);

        let expected = match direct.transfer(new_owner.clone()) {
            Ok(message) => message,
            Err(rejected) => rejected.message,
        };
        let call = AbiCall::Transfer { new_owner }.encode().unwrap();
        let result = dispatch(&via_abi, &call).unwrap();

        prop_assert_eq!(&result.value, &expected);
        prop_assert_eq!(decode_return(&result.log).unwrap(), expected);
        prop_assert_eq!(direct.snapshot(), via_abi.snapshot());
    }
}
