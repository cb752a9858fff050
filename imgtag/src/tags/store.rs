// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::errors::{IMAGE_NOT_FOUND, IMAGE_OR_TAG_NOT_FOUND, TagError};
use std::collections::BTreeMap;

/// In-memory mapping from image identifier to its ordered tags.
///
/// The store performs no I/O. Callers persist after each mutation.
#[derive(Debug, Default, Clone)]
pub struct TagStore {
    entries: BTreeMap<String, Vec<String>>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, tags: Vec<String>) {
        self.entries.insert(id.into(), tags);
    }

    pub fn append(&mut self, id: &str, tag: impl Into<String>) -> Result<(), TagError> {
        let tags = self
            .entries
            .get_mut(id)
            .ok_or_else(|| TagError::not_found(IMAGE_NOT_FOUND))?;
        tags.push(tag.into());
        Ok(())
    }

    /// Removes the first occurrence of `tag`; later duplicates stay.
    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Result<(), TagError> {
        let tags = self
            .entries
            .get_mut(id)
            .ok_or_else(|| TagError::not_found(IMAGE_OR_TAG_NOT_FOUND))?;
        let position = tags
            .iter()
            .position(|existing| existing == tag)
            .ok_or_else(|| TagError::not_found(IMAGE_OR_TAG_NOT_FOUND))?;
        tags.remove(position);
        Ok(())
    }

    pub fn erase(&mut self, id: &str) -> Option<Vec<String>> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn all(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(id, tags)| (id.as_str(), tags.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::errors::TagErrorKind;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn set_replaces_existing_sequence() {
        let mut store = TagStore::new();
        store.set("img1.jpg", tags(&["cat", "dog"]));
        store.set("img1.jpg", tags(&["bird"]));
        assert_eq!(store.get("img1.jpg"), Some(tags(&["bird"]).as_slice()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn append_keeps_order_and_duplicates() {
        let mut store = TagStore::new();
        store.set("img1.jpg", tags(&["cat"]));
        store.append("img1.jpg", "dog").unwrap();
        store.append("img1.jpg", "cat").unwrap();
        assert_eq!(
            store.get("img1.jpg"),
            Some(tags(&["cat", "dog", "cat"]).as_slice())
        );
    }

    #[test]
    fn append_on_unknown_id_is_not_found_and_creates_nothing() {
        let mut store = TagStore::new();
        let err = store.append("missing.jpg", "cat").unwrap_err();
        assert_eq!(err.kind(), TagErrorKind::NotFound);
        assert!(!store.contains("missing.jpg"));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_tag_removes_only_first_occurrence() {
        let mut store = TagStore::new();
        store.set("img1.jpg", tags(&["cat", "dog", "cat"]));
        store.remove_tag("img1.jpg", "cat").unwrap();
        assert_eq!(store.get("img1.jpg"), Some(tags(&["dog", "cat"]).as_slice()));
    }

    #[test]
    fn remove_tag_reports_missing_tag() {
        let mut store = TagStore::new();
        store.set("img1.jpg", tags(&["cat"]));
        let err = store.remove_tag("img1.jpg", "dog").unwrap_err();
        assert_eq!(err.message(), IMAGE_OR_TAG_NOT_FOUND);
        assert_eq!(store.get("img1.jpg"), Some(tags(&["cat"]).as_slice()));
    }

    #[test]
    fn remove_tag_reports_missing_image() {
        let mut store = TagStore::new();
        let err = store.remove_tag("img1.jpg", "cat").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn erase_returns_removed_tags() {
        let mut store = TagStore::new();
        store.set("img1.jpg", tags(&["cat"]));
        assert_eq!(store.erase("img1.jpg"), Some(tags(&["cat"])));
        assert_eq!(store.erase("img1.jpg"), None);
        assert!(store.get("img1.jpg").is_none());
    }

    #[test]
    fn all_iterates_in_identifier_order() {
        let mut store = TagStore::new();
        store.set("b.jpg", tags(&["x"]));
        store.set("a.jpg", Vec::new());
        let ids: Vec<&str> = store.all().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a.jpg", "b.jpg"]);
    }
}
