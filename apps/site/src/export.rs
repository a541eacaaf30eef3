use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Profile;
use crate::view::SitePage;

/// Writes the light-mode page to `<dir>/index.html`, creating `dir` if needed.
/// Returns the path written.
pub fn export_page(profile: Arc<Profile>, dir: &Path, year: i32) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let html = SitePage::new(profile).render(year);
    let target = dir.join("index.html");
    std::fs::write(&target, &html)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!("Exported {} bytes to {}", html.len(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_profile;

    #[test]
    fn test_export_writes_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let written = export_page(Arc::new(sample_profile()), &out, 2026).unwrap();
        assert_eq!(written, out.join("index.html"));

        let html = std::fs::read_to_string(written).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2026 Nurul Aina Hamid"));
    }

    #[test]
    fn test_export_matches_served_render() {
        let dir = tempfile::tempdir().unwrap();
        let profile = Arc::new(sample_profile());

        let written = export_page(profile.clone(), dir.path(), 2026).unwrap();
        let html = std::fs::read_to_string(written).unwrap();
        assert_eq!(html, SitePage::new(profile).render(2026));
    }
}
