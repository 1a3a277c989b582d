use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use super::{Parcel, ParcelError, ParcelEvent, ParcelResult, VerificationStatus};
use crate::config::CONTRACT_NAME;

/// Language used to render confirmations, errors and reports
///
/// Indonesian reproduces the texts returned by the deployed contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, EnumIter,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    Indonesian,
    English,
}

impl Locale {
    /// Confirmation text for a successful transition
    pub fn render(&self, event: &ParcelEvent) -> String {
        match (self, event) {
            (Locale::Indonesian, ParcelEvent::Registered { id }) => {
                format!("Tanah berhasil didaftarkan: {id}")
            }
            (Locale::English, ParcelEvent::Registered { id }) => {
                format!("Parcel registered: {id}")
            }
            (Locale::Indonesian, ParcelEvent::Certified { certificate_number }) => {
                format!("Sertifikat berhasil dibuat: {certificate_number}")
            }
            (Locale::English, ParcelEvent::Certified { certificate_number }) => {
                format!("Certificate created: {certificate_number}")
            }
            (Locale::Indonesian, ParcelEvent::Verified) => "Tanah berhasil diverifikasi".to_owned(),
            (Locale::English, ParcelEvent::Verified) => "Parcel verified".to_owned(),
            (Locale::Indonesian, ParcelEvent::Transferred { from, to }) => {
                format!("Kepemilikan dipindahkan dari {from} ke {to}")
            }
            (Locale::English, ParcelEvent::Transferred { from, to }) => {
                format!("Ownership transferred from {from} to {to}")
            }
        }
    }

    /// Text returned in place of a confirmation when a rule rejects the call
    pub fn render_error(&self, error: &ParcelError) -> String {
        match (self, error) {
            (Locale::Indonesian, ParcelError::NotVerified) => {
                "Error: Tanah harus terverifikasi sebelum pindah kepemilikan".to_owned()
            }
            (Locale::English, ParcelError::NotVerified) => {
                "Error: parcel must be verified before ownership transfer".to_owned()
            }
        }
    }

    pub fn render_result(&self, result: &ParcelResult<ParcelEvent>) -> String {
        match result {
            Ok(event) => self.render(event),
            Err(error) => self.render_error(error),
        }
    }

    pub fn greeting(&self, name: &str) -> String {
        match self {
            Locale::Indonesian => format!("Hello, {name}! Selamat datang di {CONTRACT_NAME}."),
            Locale::English => format!("Hello, {name}! Welcome to {CONTRACT_NAME}."),
        }
    }

    pub fn status_label(&self, status: VerificationStatus) -> &'static str {
        match (self, status) {
            (Locale::Indonesian, VerificationStatus::Verified) => "Terverifikasi",
            (Locale::Indonesian, VerificationStatus::Unverified) => "Belum Terverifikasi",
            (Locale::English, VerificationStatus::Verified) => "Verified",
            (Locale::English, VerificationStatus::Unverified) => "Not Verified",
        }
    }

    pub fn report(&self, parcel: &Parcel) -> String {
        ParcelReport::new(parcel, *self).to_string()
    }

    fn report_labels(&self) -> ReportLabels {
        match self {
            Locale::Indonesian => ReportLabels {
                header: "Informasi Tanah:",
                id: "ID: ",
                owner: "Pemilik: ",
                area: "Luas: ",
                location: "Lokasi: ",
                certificate: "Sertifikat: ",
                status: "Status: ",
            },
            Locale::English => ReportLabels {
                header: "Parcel Information:",
                id: "ID: ",
                owner: "Owner: ",
                area: "Area: ",
                location: "Location: ",
                certificate: "Certificate: ",
                status: "Status: ",
            },
        }
    }
}

struct ReportLabels {
    header: &'static str,
    id: &'static str,
    owner: &'static str,
    area: &'static str,
    location: &'static str,
    certificate: &'static str,
    status: &'static str,
}

/// Multi-line rendering of every parcel field, read from the live record
pub struct ParcelReport<'a> {
    parcel: &'a Parcel,
    locale: Locale,
}

impl<'a> ParcelReport<'a> {
    pub fn new(parcel: &'a Parcel, locale: Locale) -> Self {
        Self { parcel, locale }
    }
}

impl Display for ParcelReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = self.locale.report_labels();
        let parcel = self.parcel;
        write!(f, "{}", labels.header)?;
        write!(f, "\n{}{}", labels.id, parcel.id)?;
        write!(f, "\n{}{}", labels.owner, parcel.owner)?;
        write!(f, "\n{}{}", labels.area, parcel.area)?;
        write!(f, "\n{}{}", labels.location, parcel.location)?;
        write!(f, "\n{}{}", labels.certificate, parcel.certificate_number)?;
        write!(
            f,
            "\n{}{}",
            labels.status,
            self.locale.status_label(parcel.status())
        )
    }
}
