//! Directory enumeration for listing pages.

use std::path::Path;

use anyhow::{Context, Result};

use crate::http::template::ListingEntry;

/// Reads the entries of `dir`, directories first, each group sorted by name.
///
/// `.` and `..` never appear. Symlinks are listed as files.
pub async fn read_entries(dir: &Path) -> Result<Vec<ListingEntry>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name == "." || name == ".." {
            continue;
        }

        entries.push(ListingEntry { name, is_dir });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            entry("b.txt", false),
            entry("zeta", true),
            entry("a.txt", false),
            entry("alpha", true),
        ];
        sort_entries(&mut entries);

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta", "a.txt", "b.txt"]);
    }
}
