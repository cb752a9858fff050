// This file is part of the product ImgTag.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::error::BlockingError;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::tags::{TagError, TagErrorKind, TagIndexService};

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ImageTagsResponse {
    path: String,
    tags: Vec<String>,
}

pub async fn search(
    service: web::Data<TagIndexService>,
    query: web::Path<String>,
) -> HttpResponse {
    match service.search(&query) {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(err) => error_response(&err),
    }
}

pub async fn get_tags(
    service: web::Data<TagIndexService>,
    image_path: web::Path<String>,
) -> HttpResponse {
    let image_path = image_path.into_inner();
    match service.get_tags(&image_path) {
        Ok(tags) => HttpResponse::Ok().json(ImageTagsResponse {
            path: image_path,
            tags,
        }),
        Err(err) => error_response(&err),
    }
}

pub async fn add_tag(
    service: web::Data<TagIndexService>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (image_path, tag) = path.into_inner();
    let service = service.into_inner();
    let result = web::block(move || service.add_tag(&image_path, &tag)).await;
    respond(result, "Tag added successfully")
}

pub async fn remove_tag(
    service: web::Data<TagIndexService>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (image_path, tag) = path.into_inner();
    let service = service.into_inner();
    let result = web::block(move || service.remove_tag(&image_path, &tag)).await;
    respond(result, "Tag removed successfully")
}

pub async fn delete_image(
    service: web::Data<TagIndexService>,
    image_path: web::Path<String>,
) -> HttpResponse {
    let image_path = image_path.into_inner();
    let service = service.into_inner();
    let result = web::block(move || service.delete_image(&image_path)).await;
    respond(result, "Image deleted successfully")
}

pub async fn update_tags(
    service: web::Data<TagIndexService>,
    image_path: web::Path<String>,
    tags: web::Json<Vec<String>>,
) -> HttpResponse {
    let image_path = image_path.into_inner();
    let tags = tags.into_inner();
    let service = service.into_inner();
    let result = web::block(move || service.update_tags(&image_path, tags)).await;
    respond(result, "Tags updated successfully")
}

fn respond(
    result: Result<Result<(), TagError>, BlockingError>,
    message: &'static str,
) -> HttpResponse {
    let outcome = result
        .map_err(|err| TagError::internal(format!("blocking task failed: {}", err)))
        .and_then(|inner| inner);
    match outcome {
        Ok(()) => HttpResponse::Ok().json(MessageResponse { message }),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &TagError) -> HttpResponse {
    let body = json!({ "detail": err.message() });
    match err.kind() {
        TagErrorKind::NotFound => {
            log::debug!("{}", err);
            HttpResponse::NotFound().json(body)
        }
        TagErrorKind::InvalidTag => {
            log::debug!("{}", err);
            HttpResponse::BadRequest().json(body)
        }
        TagErrorKind::Io | TagErrorKind::Metadata | TagErrorKind::Internal => {
            log::error!("{}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}
