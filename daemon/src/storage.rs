use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use anyhow::Context;
use landchain_common::{parcel::Parcel, registry::ParcelStore};
use log::{debug, info};

/// Parcel record kept as a JSON file
///
/// Writes go to a sibling temporary file which is synced to disk and then
/// renamed over the target, so readers only ever see a complete record.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored record, `None` if the file does not exist yet
    pub fn load(&self) -> anyhow::Result<Option<Parcel>> {
        if !self.path.exists() {
            if log::log_enabled!(log::Level::Info) {
                info!("No state file at {}, starting empty", self.path.display());
            }
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state file {}", self.path.display()))?;
        let parcel: Parcel = serde_json::from_str(&content)
            .with_context(|| format!("Invalid state file {}", self.path.display()))?;

        if log::log_enabled!(log::Level::Info) {
            info!("Loaded parcel '{}' from {}", parcel.id, self.path.display());
        }
        Ok(Some(parcel))
    }

    pub fn save(&self, parcel: &Parcel) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(parcel)?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)
                .with_context(|| format!("Failed to create {}", tmp.display()))?;
            file.write_all(content.as_bytes())
                .with_context(|| format!("Failed to write {}", tmp.display()))?;
            file.sync_all()
                .with_context(|| format!("Failed to sync {}", tmp.display()))?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace state file {}", self.path.display()))?;

        if log::log_enabled!(log::Level::Debug) {
            debug!("Saved parcel '{}' to {}", parcel.id, self.path.display());
        }
        Ok(())
    }
}

impl ParcelStore for StateFile {
    fn persist(&self, parcel: &Parcel) -> anyhow::Result<()> {
        self.save(parcel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_missing_file_loads_none() -> anyhow::Result<()> {
        let dir = TempDir::new("landchain")?;
        let file = StateFile::new(dir.path().join("parcel.json"));
        assert!(file.load()?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> anyhow::Result<()> {
        let dir = TempDir::new("landchain")?;
        let file = StateFile::new(dir.path().join("parcel.json"));

        let mut parcel = Parcel::new();
        parcel.register("T1", "Alice", "100sqm", "CityA");
        parcel.certify("CERT-001");
        parcel.verify();
        file.save(&parcel)?;

        assert_eq!(file.load()?, Some(parcel));
        assert!(!dir.path().join("parcel.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_save_replaces_previous_record() -> anyhow::Result<()> {
        let dir = TempDir::new("landchain")?;
        let file = StateFile::new(dir.path().join("parcel.json"));

        let mut parcel = Parcel::new();
        parcel.register("T1", "Alice", "100sqm", "CityA");
        file.save(&parcel)?;
        parcel.verify();
        parcel.transfer("Bob")?;
        file.save(&parcel)?;

        let stored = file.load()?.unwrap_or_default();
        assert_eq!(stored.owner, "Bob");
        assert!(!stored.verified);
        assert!(!dir.path().join("parcel.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new("landchain")?;
        let path = dir.path().join("parcel.json");
        fs::write(&path, "not json")?;
        assert!(StateFile::new(path).load().is_err());
        Ok(())
    }
}
