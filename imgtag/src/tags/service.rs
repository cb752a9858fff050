// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::errors::{IMAGE_NOT_FOUND, TagError};
use super::exif;
use super::locks::IdentifierLocks;
use super::store::TagStore;
use crate::config::ImagesConfig;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub path: String,
    pub tags: Vec<String>,
}

/// Tag index over a directory of images.
///
/// The image identifier is the file path relative to the base directory
/// (absolute when the image lies outside it); every mutation rewrites the
/// tag list into that same file. Mutations on one identifier are serialized
/// through [`IdentifierLocks`]. The in-memory change is applied before the
/// file write and is kept if the write fails.
pub struct TagIndexService {
    pub(super) store: RwLock<TagStore>,
    locks: IdentifierLocks,
    pub(super) extensions: Vec<String>,
    pub(super) base_dir: PathBuf,
}

impl TagIndexService {
    pub fn new(extensions: Vec<String>) -> Self {
        Self::with_store(TagStore::new(), extensions)
    }

    pub fn with_store(store: TagStore, extensions: Vec<String>) -> Self {
        Self {
            store: RwLock::new(store),
            locks: IdentifierLocks::new(),
            extensions,
            base_dir: PathBuf::new(),
        }
    }

    /// Identifiers of images under `base_dir` are keyed relative to it.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn from_config(images: &ImagesConfig) -> Self {
        Self::new(images.extensions.clone())
    }

    pub(super) fn read_store(&self) -> Result<RwLockReadGuard<'_, TagStore>, TagError> {
        self.store
            .read()
            .map_err(|_| TagError::internal("Tag store lock poisoned"))
    }

    pub(super) fn write_store(&self) -> Result<RwLockWriteGuard<'_, TagStore>, TagError> {
        self.store.write().map_err(|_| {
            error!("🚨 CRITICAL: Tag store write lock poisoned");
            TagError::internal("Tag store lock poisoned")
        })
    }

    pub fn image_count(&self) -> Result<usize, TagError> {
        Ok(self.read_store()?.len())
    }

    /// Every image whose tags contain `query` as an exact element.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>, TagError> {
        let store = self.read_store()?;
        let hits = store
            .all()
            .filter(|(_, tags)| tags.iter().any(|tag| tag == query))
            .map(|(id, tags)| SearchHit {
                path: id.to_string(),
                tags: tags.to_vec(),
            })
            .collect();
        Ok(hits)
    }

    pub fn get_tags(&self, id: &str) -> Result<Vec<String>, TagError> {
        self.read_store()?
            .get(id)
            .map(<[String]>::to_vec)
            .ok_or_else(|| TagError::not_found(IMAGE_NOT_FOUND))
    }

    pub fn add_tag(&self, id: &str, tag: &str) -> Result<(), TagError> {
        exif::check_tag(tag)?;
        let _scope = self.locks.acquire(id)?;
        let tags = {
            let mut store = self.write_store()?;
            store.append(id, tag)?;
            store.get(id).map(<[String]>::to_vec).unwrap_or_default()
        };
        self.persist(id, &tags)?;
        info!("Added tag '{}' to {}", tag, id);
        Ok(())
    }

    pub fn remove_tag(&self, id: &str, tag: &str) -> Result<(), TagError> {
        let _scope = self.locks.acquire(id)?;
        let tags = {
            let mut store = self.write_store()?;
            store.remove_tag(id, tag)?;
            store.get(id).map(<[String]>::to_vec).unwrap_or_default()
        };
        self.persist(id, &tags)?;
        info!("Removed tag '{}' from {}", tag, id);
        Ok(())
    }

    pub fn update_tags(&self, id: &str, new_tags: Vec<String>) -> Result<(), TagError> {
        new_tags.iter().try_for_each(|tag| exif::check_tag(tag))?;
        let _scope = self.locks.acquire(id)?;
        {
            let mut store = self.write_store()?;
            if !store.contains(id) {
                return Err(TagError::not_found(IMAGE_NOT_FOUND));
            }
            store.set(id, new_tags.clone());
        }
        self.persist(id, &new_tags)?;
        info!("Replaced tags of {} ({} tags)", id, new_tags.len());
        Ok(())
    }

    /// Drops the index entry and clears the description field. The file stays.
    pub fn delete_image(&self, id: &str) -> Result<(), TagError> {
        let _scope = self.locks.acquire(id)?;
        self.write_store()?
            .erase(id)
            .ok_or_else(|| TagError::not_found(IMAGE_NOT_FOUND))?;
        exif::write_description(&self.file_path(id), "")?;
        info!("Removed {} from the index", id);
        Ok(())
    }

    /// Maps an identifier back to its file; absolute identifiers are used as is.
    pub(super) fn file_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(id)
    }

    pub(super) fn identifier_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_dir).unwrap_or(path);
        relative.to_str().map(str::to_string)
    }

    fn persist(&self, id: &str, tags: &[String]) -> Result<(), TagError> {
        exif::write_tags(&self.file_path(id), tags).inspect_err(|err| {
            error!(
                "Index and file diverged for {}: metadata write failed: {}",
                id, err
            );
        })
    }
}
