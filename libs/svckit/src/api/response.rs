use axum::{
    Json,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};

pub type JsonBody<T> = Json<T>;

/// 201 Created + JSON, with `Location` pointing at the new resource.
pub fn created_json<T: serde::Serialize>(
    value: T,
    uri: &Uri,
    new_id: &str,
) -> impl IntoResponse + use<T> {
    let location = format!("{}/{new_id}", uri.path().trim_end_matches('/'));
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(value))
}

/// 204 No Content
#[must_use]
pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
