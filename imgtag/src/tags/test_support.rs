// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fs;
use std::path::Path;

fn sample_image() -> image::RgbImage {
    image::RgbImage::from_pixel(8, 8, image::Rgb([120, 80, 40]))
}

pub fn write_jpeg(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("image parent dir");
    }
    sample_image()
        .save_with_format(path, image::ImageFormat::Jpeg)
        .expect("write jpeg");
}

pub fn write_png(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("image parent dir");
    }
    sample_image()
        .save_with_format(path, image::ImageFormat::Png)
        .expect("write png");
}
