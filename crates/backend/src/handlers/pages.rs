use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::routes::AppState;
use crate::shell::markup::Markup;
use crate::shell::Page;

const HOME: &str = r#"<section class="hero" style="background-image:url('/hero-background.jpg')">
<h1 class="hero__title font-display">Cinema, reimagined.</h1>
<p class="hero__lead">AI-powered recommendations, 3D posters and a watchlist that follows you everywhere.</p>
<a class="button button--primary" href="/discover">Start exploring</a>
</section>"#;

const NOT_FOUND: &str = r#"<section class="not-found">
<h1 class="font-display">Scene missing</h1>
<p>The page you were looking for is not part of this cut.</p>
<a class="button" href="/">Back to the lobby</a>
</section>"#;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(state.shell.render(&Page::new(Markup::trusted(HOME))))
}

/// Anything no route or static file answered.
pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    let page = Page::titled("Not Found", Markup::trusted(NOT_FOUND));
    (StatusCode::NOT_FOUND, Html(state.shell.render(&page)))
}
