use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::RecipeError;
use crate::handlers::RecipeFlow;
use crate::presenter;
use maud::{html, Markup, DOCTYPE};

#[derive(Debug, Deserialize, Serialize)]
pub struct FindRecipeRequest {
    pub dish_name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub dish: String,
}

/// Wraps rendered markup in the page shell used by the form fallback
fn page(dish: &str, content: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Recipe Finder" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                main {
                    form action="/recipe" method="get" {
                        label for="dish" { "What do you want to cook?" }
                        input id="dish" name="dish" type="text" value=(dish);
                        button type="submit" { "Find recipe" }
                    }
                    section #result { (content) }
                }
            }
        }
    }
    .into_string()
}

pub mod server {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::Html,
        routing::{get, post},
        Json, Router,
    };
    use tower_http::services::ServeDir;

    pub struct AppState {
        pub flow: Arc<RecipeFlow>,
    }

    pub fn create_router(flow: Arc<RecipeFlow>, static_dir: &str) -> Router {
        let state = Arc::new(AppState { flow });

        Router::new()
            .route("/", get(index_page))
            .route("/recipe", get(recipe_page))
            .route("/api/recipe", post(find_recipe))
            .route("/health", get(health_check))
            .nest_service("/static", ServeDir::new(static_dir))
            .with_state(state)
    }

    pub fn status_for(error: &RecipeError) -> StatusCode {
        match error {
            RecipeError::EmptyDishName => StatusCode::BAD_REQUEST,
            RecipeError::MalformedRecipeReply(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RecipeError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    async fn index_page() -> Html<&'static str> {
        Html(include_str!("../static/index.html"))
    }

    async fn find_recipe(
        State(state): State<Arc<AppState>>,
        Json(request): Json<FindRecipeRequest>,
    ) -> Result<Json<presenter::RecipeView>, (StatusCode, Json<ErrorBody>)> {
        match state.flow.find_recipe(&request.dish_name).await {
            Ok(view) => Ok(Json(view)),
            Err(e) => {
                log::error!("❌ Recipe request failed: {}", e);
                Err((status_for(&e), Json(ErrorBody { error: e.to_string() })))
            }
        }
    }

    async fn recipe_page(
        Query(query): Query<RecipeQuery>,
        State(state): State<Arc<AppState>>,
    ) -> (StatusCode, Html<String>) {
        match state.flow.find_recipe(&query.dish).await {
            Ok(view) => (StatusCode::OK, Html(page(&query.dish, presenter::render_html(&view)))),
            Err(e) => {
                log::error!("❌ Recipe request failed: {}", e);
                let content = html! { div.error { (e.to_string()) } };
                (status_for(&e), Html(page(&query.dish, content)))
            }
        }
    }

    async fn health_check() -> &'static str {
        "OK"
    }
}
