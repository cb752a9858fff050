// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Tag list storage inside the EXIF `ImageDescription` field.

use super::errors::TagError;
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use log::debug;
use std::path::Path;

pub const TAG_SEPARATOR: &str = ",";

const EMPTY_TAG: &str = "Tag cannot be empty";

const MISSING_EXIF_MESSAGES: &[&str] = &["no exif", "no metadata", "not found"];

/// Splits a description value into tags. An empty value has no tags.
pub fn parse_tags(value: &str) -> Vec<String> {
    // ASCII fields may carry their NUL terminator through the codec.
    let value = value.trim_end_matches('\0');
    if value.is_empty() {
        return Vec::new();
    }
    value.split(TAG_SEPARATOR).map(str::to_string).collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// Reads the description field. `Ok(None)` when the file carries no EXIF
/// block or the block has no such field.
pub fn read_description(path: &Path) -> Result<Option<String>, TagError> {
    let Some(metadata) = load_metadata(path)? else {
        return Ok(None);
    };

    let description = metadata
        .get_tag(&ExifTag::ImageDescription(String::new()))
        .next()
        .and_then(|tag| match tag {
            ExifTag::ImageDescription(value) => Some(value.clone()),
            _ => None,
        });
    Ok(description)
}

pub fn read_tags(path: &Path) -> Result<Vec<String>, TagError> {
    Ok(read_description(path)?
        .map(|value| parse_tags(&value))
        .unwrap_or_default())
}

/// Replaces the description field, rewriting the whole metadata container.
pub fn write_description(path: &Path, value: &str) -> Result<(), TagError> {
    if !path.is_file() {
        return Err(TagError::io(format!(
            "Image file is missing: {}",
            path.display()
        )));
    }

    // An unreadable container is left as is; only a missing one starts empty.
    let mut metadata = match load_metadata(path)? {
        Some(metadata) => metadata,
        None => {
            debug!(
                "No EXIF block in '{}', starting from an empty container",
                path.display()
            );
            Metadata::new()
        }
    };

    metadata.set_tag(ExifTag::ImageDescription(value.to_string()));
    metadata.write_to_file(path).map_err(|err| {
        TagError::io(format!(
            "Failed to write metadata to '{}': {}",
            path.display(),
            err
        ))
    })
}

pub fn write_tags(path: &Path, tags: &[String]) -> Result<(), TagError> {
    write_description(path, &join_tags(tags))
}

/// A tag must survive the comma-joined field unchanged.
pub fn check_tag(tag: &str) -> Result<(), TagError> {
    if tag.is_empty() {
        return Err(TagError::invalid_tag(EMPTY_TAG));
    }
    if tag.contains(TAG_SEPARATOR) {
        return Err(TagError::invalid_tag(format!(
            "Tag cannot contain '{}': {}",
            TAG_SEPARATOR, tag
        )));
    }
    Ok(())
}

/// `Ok(None)` when the file has no EXIF block at all.
fn load_metadata(path: &Path) -> Result<Option<Metadata>, TagError> {
    match Metadata::new_from_path(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(err) if is_missing_exif(&err) => Ok(None),
        Err(err) => Err(TagError::metadata(format!(
            "Failed to read metadata from '{}': {}",
            path.display(),
            err
        ))),
    }
}

// little_exif reports an absent block as a plain io::Error, told apart only by its message.
fn is_missing_exif(err: &std::io::Error) -> bool {
    let message = err.to_string().to_lowercase();
    MISSING_EXIF_MESSAGES
        .iter()
        .any(|marker| message.contains(marker))
}
