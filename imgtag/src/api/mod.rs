// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde_json::json;

mod images;

// `{image_path}` takes the rest of the path so identifiers may carry raw
// slashes; the final segment of the add/remove routes is the tag.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/search/{query}", web::get().to(images::search))
        .route(
            "/add_tag/{image_path:.+}/{tag}",
            web::post().to(images::add_tag),
        )
        .route(
            "/remove_tag/{image_path:.+}/{tag}",
            web::delete().to(images::remove_tag),
        )
        .route(
            "/delete_image/{image_path:.+}",
            web::delete().to(images::delete_image),
        )
        .route(
            "/update_tags/{image_path:.+}",
            web::put().to(images::update_tags),
        )
        .route("/tags/{image_path:.+}", web::get().to(images::get_tags));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        log::debug!("Rejected request body: {}", detail);
        let response = HttpResponse::BadRequest().json(json!({ "detail": detail }));
        InternalError::from_response(err, response).into()
    })
}
