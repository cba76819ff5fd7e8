use crate::errors::SiteError;
use crate::models::SiteInfo;
use std::fs;
use std::path::Path;

const SITE_NAME_PREFIX: &str = "@sites/";

/// Inspects the sites directory and derives the site name from the first
/// entry's `package.json`.
///
/// Entries are sorted by name before picking the first one.
pub fn inspect_sites_dir(sites_dir: &Path) -> Result<SiteInfo, SiteError> {
    let entries = fs::read_dir(sites_dir).map_err(|e| SiteError::ReadDir {
        path: sites_dir.display().to_string(),
        source: e,
    })?;

    let mut names = entries
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SiteError::ReadDir {
            path: sites_dir.display().to_string(),
            source: e,
        })?;
    names.sort();

    let dir_name = names.into_iter().next().ok_or_else(|| SiteError::EmptyDir {
        path: sites_dir.display().to_string(),
    })?;
    tracing::debug!("Using site directory {}", dir_name);

    let manifest_path = sites_dir.join(&dir_name).join("package.json");
    let site_name = read_site_name(&manifest_path)?;
    tracing::info!("Detected site {} in {}", site_name, dir_name);

    Ok(SiteInfo {
        dir_name,
        site_name,
    })
}

fn read_site_name(manifest_path: &Path) -> Result<String, SiteError> {
    let path = manifest_path.display().to_string();
    let contents = fs::read_to_string(manifest_path).map_err(|e| SiteError::ReadManifest {
        path: path.clone(),
        source: e,
    })?;
    let manifest: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| SiteError::ParseManifest {
            path: path.clone(),
            source: e,
        })?;

    let name = manifest
        .get("name")
        .and_then(|n| n.as_str())
        .ok_or(SiteError::MissingName { path })?;

    Ok(strip_site_prefix(name))
}

/// Removes the first `@sites/` occurrence; names without it pass through
pub fn strip_site_prefix(name: &str) -> String {
    name.replacen(SITE_NAME_PREFIX, "", 1)
}
