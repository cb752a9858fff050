// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::errors::TagError;
use std::collections::HashSet;
use std::sync::{Condvar, Mutex};

/// Hands out one exclusive scope per image identifier.
///
/// A scope is held across the in-memory mutation and the file write that
/// follows it, so two writers on the same image never interleave.
#[derive(Default)]
pub struct IdentifierLocks {
    held: Mutex<HashSet<String>>,
    released: Condvar,
}

pub struct IdentifierGuard<'a> {
    locks: &'a IdentifierLocks,
    id: String,
}

impl IdentifierLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, id: &str) -> Result<IdentifierGuard<'_>, TagError> {
        let mut held = self
            .held
            .lock()
            .map_err(|_| TagError::internal("Identifier lock registry poisoned"))?;
        while held.contains(id) {
            held = self
                .released
                .wait(held)
                .map_err(|_| TagError::internal("Identifier lock registry poisoned"))?;
        }
        held.insert(id.to_string());
        Ok(IdentifierGuard {
            locks: self,
            id: id.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn is_held(&self, id: &str) -> bool {
        match self.held.lock() {
            Ok(held) => held.contains(id),
            Err(poisoned) => poisoned.into_inner().contains(id),
        }
    }
}

impl Drop for IdentifierGuard<'_> {
    fn drop(&mut self) {
        let mut held = match self.locks.held.lock() {
            Ok(held) => held,
            Err(poisoned) => poisoned.into_inner(),
        };
        held.remove(&self.id);
        drop(held);
        self.locks.released.notify_all();
    }
}
