use thiserror::Error;

/// Failures that abort a recipe request before anything is rendered.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Please enter the name of a dish")]
    EmptyDishName,

    #[error("Recipe service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("The model did not return a valid recipe: {0}")]
    MalformedRecipeReply(String),
}
