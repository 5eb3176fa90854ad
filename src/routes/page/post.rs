use crate::post::Slug;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(slug): Path<Slug>,
) -> Result<Html<String>, StatusCode> {
    let post = match crate::content::fetch_post(&state.http, &state.content, &slug).await {
        Ok(it) => it,
        Err(err) => {
            eprintln!("Error fetching post {slug}: {err}");
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    let Some(post) = post else {
        return Ok(Html(crate::render::not_found_page()));
    };

    let hero_url = post
        .image
        .as_ref()
        .and_then(|image| crate::image_url::hero_url(&state.content, image));

    Ok(Html(crate::render::post_page(&post, hero_url.as_deref())))
}
