//! Dialog collaborator contract.
//!
//! Presentation is external. The session only needs the decision values,
//! awaited at the two suspension points of the protocol (the discard guard
//! and the save-destination prompt). Cancelling either leaves all session
//! state exactly as it was.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait DialogHost: Send + Sync {
    /// Data-loss confirmation. `true` means discard unsaved changes and
    /// proceed.
    async fn confirm_discard(&self) -> bool;

    /// Save-destination prompt, opened at `default_dir`. `None` means the
    /// user cancelled.
    async fn pick_save_path(&self, default_dir: &Path) -> Option<PathBuf>;
}
