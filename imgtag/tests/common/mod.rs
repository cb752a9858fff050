// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use imgtag::api;
use imgtag::config::ImagesConfig;
use imgtag::tags::{TagIndexService, exif};
use imgtag::util::test_fixtures::TestFixtureRoot;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub images_dir: PathBuf,
    pub service: Arc<TagIndexService>,
}

impl TestHarness {
    /// Builds an image directory from `(relative path, tags)` pairs and
    /// indexes it the way the server does at startup.
    pub fn with_images(prefix: &str, images: &[(&str, &[&str])]) -> Self {
        let fixture = TestFixtureRoot::new_unique(prefix).expect("fixture root");
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");
        let images_dir = runtime_paths.images_dir.clone();

        for (relative, tags) in images {
            let path = images_dir.join(relative);
            write_image(&path);
            let tags: Vec<String> = tags.iter().map(|tag| tag.to_string()).collect();
            exif::write_tags(&path, &tags).expect("seed tags");
        }

        let service = Arc::new(
            TagIndexService::from_config(&ImagesConfig::default())
                .with_base_dir(runtime_paths.root),
        );
        service.scan_and_load(&images_dir).expect("initial scan");

        Self {
            fixture,
            images_dir,
            service,
        }
    }

    pub fn image_path(&self, relative: &str) -> PathBuf {
        self.images_dir.join(relative)
    }

    /// Identifiers are keyed relative to the runtime root.
    pub fn image_id(&self, relative: &str) -> String {
        format!("static/images/{}", relative)
    }

    /// Identifier with every reserved character escaped, slashes included.
    pub fn encoded_id(&self, relative: &str) -> String {
        urlencoding::encode(&self.image_id(relative)).into_owned()
    }

    pub fn tags_on_disk(&self, relative: &str) -> Vec<String> {
        exif::read_tags(&self.image_path(relative)).expect("read tags")
    }

    pub fn file_bytes(&self, relative: &str) -> Vec<u8> {
        fs::read(self.image_path(relative)).expect("read image")
    }
}

pub fn write_image(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("image dir");
    }
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => image::ImageFormat::Png,
        _ => image::ImageFormat::Jpeg,
    };
    image::RgbImage::from_pixel(8, 8, image::Rgb([90, 140, 200]))
        .save_with_format(path, format)
        .expect("write image");
}

pub fn build_test_app(
    service: Arc<TagIndexService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(service))
        .configure(api::configure)
}
