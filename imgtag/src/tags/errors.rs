// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::error::Error;
use std::fmt;

pub const IMAGE_NOT_FOUND: &str = "Image not found";
pub const IMAGE_OR_TAG_NOT_FOUND: &str = "Image or tag not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorKind {
    NotFound,
    /// The tag cannot be stored in the description field.
    InvalidTag,
    Io,
    Metadata,
    Internal,
}

#[derive(Debug, Clone)]
pub struct TagError {
    kind: TagErrorKind,
    message: String,
}

impl TagError {
    pub fn new(kind: TagErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(TagErrorKind::NotFound, message)
    }

    pub fn invalid_tag(message: impl Into<String>) -> Self {
        Self::new(TagErrorKind::InvalidTag, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(TagErrorKind::Io, message)
    }

    pub fn metadata(message: impl Into<String>) -> Self {
        Self::new(TagErrorKind::Metadata, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(TagErrorKind::Internal, message)
    }

    pub fn kind(&self) -> TagErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == TagErrorKind::NotFound
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} error: {}", self.kind, self.message)
    }
}

impl Error for TagError {}
