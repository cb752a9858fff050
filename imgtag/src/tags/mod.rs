// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod errors;
pub mod exif;
mod locks;
mod scan;
mod service;
pub mod store;
#[cfg(test)]
pub(crate) mod test_support;

pub use errors::{IMAGE_NOT_FOUND, IMAGE_OR_TAG_NOT_FOUND, TagError, TagErrorKind};
pub use scan::ScanReport;
pub use service::{SearchHit, TagIndexService};
pub use store::TagStore;
