// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{CONFIG_FILE_NAME, ConfigError, ValidatedConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub images_dir: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path, config: &ValidatedConfig) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        let root_canonical = root_path.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize runtime root '{}': {}",
                root_path.display(),
                e
            ))
        })?;

        let config_file = root_canonical.join(CONFIG_FILE_NAME);

        let configured = Path::new(&config.images.root_dir);
        let images_dir = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root_canonical.join(configured)
        };
        ensure_dir_exists(&images_dir)?;

        let images_dir = images_dir.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize image directory '{}': {}",
                images_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            root: root_canonical,
            config_file,
            images_dir,
        })
    }
}

fn ensure_dir_exists(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "Path exists but is not a directory: {}",
                path.display()
            )));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        ConfigError::ValidationError(format!(
            "Failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ImagesConfig, LoggingConfig, ServerConfig};
    use crate::util::test_fixtures::TestFixtureRoot;

    fn config_with_root_dir(root_dir: &str) -> ValidatedConfig {
        ValidatedConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                workers: 1,
            },
            images: ImagesConfig {
                root_dir: root_dir.to_string(),
                ..ImagesConfig::default()
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            app: AppConfig {
                name: "ImgTag".to_string(),
                description: "test".to_string(),
            },
        }
    }

    #[test]
    fn relative_image_dir_resolves_under_root_and_is_created() {
        let fixture = TestFixtureRoot::new_unique("paths-relative").unwrap();
        let config = config_with_root_dir("static/images");
        let paths = RuntimePaths::from_root(fixture.path(), &config).expect("paths");

        assert!(paths.images_dir.is_dir());
        assert!(paths.images_dir.starts_with(&paths.root));
        assert!(paths.images_dir.ends_with("static/images"));
        assert!(paths.config_file.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn absolute_image_dir_is_used_as_is() {
        let fixture = TestFixtureRoot::new_unique("paths-absolute").unwrap();
        let elsewhere = fixture.path().join("elsewhere");
        fs::create_dir_all(&elsewhere).unwrap();
        let elsewhere = elsewhere.canonicalize().unwrap();
        let config = config_with_root_dir(&elsewhere.to_string_lossy());

        let paths = RuntimePaths::from_root(fixture.path(), &config).expect("paths");
        assert_eq!(paths.images_dir, elsewhere);
    }

    #[test]
    fn image_dir_that_is_a_file_is_rejected() {
        let fixture = TestFixtureRoot::new_unique("paths-file").unwrap();
        fs::write(fixture.path().join("images"), "not a dir").unwrap();
        let config = config_with_root_dir("images");
        assert!(RuntimePaths::from_root(fixture.path(), &config).is_err());
    }
}
