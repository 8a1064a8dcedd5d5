//! Device name lookup through the rfkill class directory.

use std::path::PathBuf;

use crate::error::{Result, RfkillError};

/// Default root of the per-device rfkill class entries.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/rfkill";

/// Looks up display names for rfkill device ids.
pub(crate) trait NameResolver {
    fn name_of(&self, id: u32) -> Result<String>;
}

/// Resolves names from `<root>/rfkill<id>/name`. A missing or unreadable
/// entry is fatal to the caller; no best-effort name is substituted.
pub(crate) struct SysfsNames {
    root: PathBuf,
}

impl SysfsNames {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl NameResolver for SysfsNames {
    fn name_of(&self, id: u32) -> Result<String> {
        let path = self.root.join(format!("rfkill{id}")).join("name");
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| RfkillError::DeviceName { id, source })?;
        // The kernel appends a single newline; strip exactly one.
        Ok(raw.strip_suffix('\n').unwrap_or(&raw).to_string())
    }
}
