use std::sync::Arc;

use crate::error::RecipeError;
use crate::models::{PromptRequest, Recipe};
use crate::services::ChatService;

pub const SYSTEM_PROMPT: &str = "You are a recipe assistant. \
You are given the name of a dish and you have to return the recipe name, \
ingredients and steps in JSON format following this template: \
{\"recipe_name\": \"...\", \"ingredients\": [{\"name\": \"...\", \"quantity\": ...}], \"steps\": []}. \
Return only the JSON object, without any other text.";

/// Turns a dish name into a structured recipe via the chat model
pub struct RecipeGenerator {
    chat: Arc<dyn ChatService>,
}

impl RecipeGenerator {
    pub fn new(chat: Arc<dyn ChatService>) -> Self {
        Self { chat }
    }

    pub async fn generate(&self, dish_name: &str) -> Result<Recipe, RecipeError> {
        let dish_name = dish_name.trim();
        if dish_name.is_empty() {
            return Err(RecipeError::EmptyDishName);
        }

        let prompt = PromptRequest::new(SYSTEM_PROMPT, dish_name);
        log::info!("🍳 Generating recipe for '{}' with {}", dish_name, self.chat.model_name());

        let reply = self.chat.complete(prompt.to_messages()).await.map_err(|e| {
            log::error!("❌ Chat completion failed: {:#}", e);
            RecipeError::UpstreamUnavailable(format!("{:#}", e))
        })?;

        let recipe = parse_recipe(&reply)?;
        log::info!(
            "✅ Parsed recipe '{}' ({} ingredients, {} steps)",
            recipe.recipe_name,
            recipe.ingredients.len(),
            recipe.steps.len()
        );

        Ok(recipe)
    }
}

/// Schema gate for the model's reply.
pub fn parse_recipe(reply: &str) -> Result<Recipe, RecipeError> {
    let json = strip_code_fence(reply);

    let recipe: Recipe = serde_json::from_str(json).map_err(|e| {
        log::warn!("⚠️ Model reply is not a valid recipe: {}", e);
        log::debug!("📄 Rejected reply: {}", reply);
        RecipeError::MalformedRecipeReply(e.to_string())
    })?;

    if recipe.recipe_name.trim().is_empty() {
        return Err(RecipeError::MalformedRecipeReply(
            "recipe_name is empty".to_string(),
        ));
    }

    Ok(recipe)
}

/// Models often wrap JSON in a ```json fence even when told not to.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
            let rest = rest.trim_end();
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}
