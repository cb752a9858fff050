// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::errors::TagError;
use super::exif;
use super::service::TagIndexService;
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub indexed: usize,
    pub decode_failures: usize,
}

impl TagIndexService {
    /// Walk `root` and load the tags of every image file into the index.
    ///
    /// Files whose metadata cannot be decoded are indexed with no tags.
    pub fn scan_and_load(&self, root: &Path) -> Result<ScanReport, TagError> {
        if !root.is_dir() {
            return Err(TagError::io(format!(
                "Image directory is not readable: {}",
                root.display()
            )));
        }

        let mut report = ScanReport::default();
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(id) = self.identifier_for(path) else {
                warn!("Skipping non UTF-8 path {}", path.display());
                continue;
            };
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !has_image_extension(name, &self.extensions) {
                continue;
            }

            let tags = match exif::read_tags(path) {
                Ok(tags) => tags,
                Err(err) => {
                    warn!("Indexing {} without tags: {}", id, err);
                    report.decode_failures += 1;
                    Vec::new()
                }
            };
            debug!("Indexed {} with tags {:?}", id, tags);
            self.write_store()?.set(id, tags);
            report.indexed += 1;
        }

        Ok(report)
    }
}

fn has_image_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|extension| {
        name.strip_suffix(extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}
