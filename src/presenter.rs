use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ImageResult, Recipe};

pub const FOOTER: &str = "Lass euch schmecken! 🌟";

/// What goes in the image slot under the title
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageBlock {
    Image { url: String, caption: String },
    Warning { message: String },
    Error { message: String },
}

/// Display-ready recipe, consumed by the page script and the HTML fallback
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub title: String,
    pub image: Option<ImageBlock>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub footer: String,
    pub generated_at: DateTime<Utc>,
}

/// `image` is `None` when image lookup is switched off.
pub fn present(recipe: &Recipe, image: Option<&ImageResult>) -> RecipeView {
    let image = image.map(|result| match result {
        ImageResult::Found { url } => ImageBlock::Image {
            url: url.clone(),
            caption: recipe.recipe_name.clone(),
        },
        ImageResult::NotFound => ImageBlock::Warning {
            message: format!("No image found for {}", recipe.recipe_name),
        },
        ImageResult::LookupFailed { reason } => ImageBlock::Error {
            message: reason.clone(),
        },
    });

    RecipeView {
        title: recipe.recipe_name.clone(),
        image,
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ingredient| format!("{}: {}", ingredient.name, ingredient.quantity))
            .collect(),
        steps: recipe
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, capitalize(step)))
            .collect(),
        footer: FOOTER.to_string(),
        generated_at: Utc::now(),
    }
}

/// First character upper case, the rest lower case.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recipe markup for the no-script fallback page.
#[cfg(feature = "web-ui")]
pub fn render_html(view: &RecipeView) -> maud::Markup {
    maud::html! {
        h1 { (view.title) }
        @match &view.image {
            Some(ImageBlock::Image { url, caption }) => figure {
                img src=(url) alt=(caption);
                figcaption { (caption) }
            },
            Some(ImageBlock::Warning { message }) => div.warning { (message) },
            Some(ImageBlock::Error { message }) => div.error { (message) },
            None => {}
        }
        h2 { "💫 Ingredients" }
        ul {
            @for line in &view.ingredients {
                li { (line) }
            }
        }
        // Step lines already carry their number.
        h2 { "📝 Steps" }
        ol.steps {
            @for line in &view.steps {
                li { (line) }
            }
        }
        hr;
        p.caption { (view.footer) }
    }
}

/// Plain text rendering for terminal mode.
#[cfg(any(test, not(feature = "web-ui")))]
pub fn render_text(view: &RecipeView) -> String {
    let mut lines = vec![view.title.clone(), String::new()];

    match &view.image {
        Some(ImageBlock::Image { url, .. }) => lines.push(format!("🖼️  {}", url)),
        Some(ImageBlock::Warning { message }) => lines.push(format!("⚠️  {}", message)),
        Some(ImageBlock::Error { message }) => lines.push(format!("❌ {}", message)),
        None => {}
    }

    lines.push(String::new());
    lines.push("💫 Ingredients".to_string());
    lines.extend(view.ingredients.iter().map(|line| format!("- {}", line)));
    lines.push(String::new());
    lines.push("📝 Steps".to_string());
    lines.extend(view.steps.iter().cloned());
    lines.push("---".to_string());
    lines.push(view.footer.clone());
    lines.join("\n")
}
