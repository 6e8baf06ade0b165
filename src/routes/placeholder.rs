//! Placeholder avatar images.

use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;
use maud::{html, Markup};

/// Serve a grey SVG of the requested size labelled `WxH`.
pub async fn placeholder_image(Path((width, height)): Path<(u32, u32)>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        placeholder_svg(width, height).into_string(),
    )
}

fn placeholder_svg(width: u32, height: u32) -> Markup {
    html! {
        svg width=(width) height=(height) xmlns="http://www.w3.org/2000/svg" {
            rect width="100%" height="100%" fill="#e5e7eb" {}
            text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="#9ca3af" {
                (width) "x" (height)
            }
        }
    }
}
