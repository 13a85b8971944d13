use crate::error::RecipeError;
use crate::handlers::{ImageResolver, RecipeGenerator};
use crate::presenter::{self, RecipeView};

/// One "Find recipe" cycle: generate, look up the image, present.
/// The two remote calls run one after the other.
pub struct RecipeFlow {
    generator: RecipeGenerator,
    images: Option<ImageResolver>,
}

impl RecipeFlow {
    /// Pass `None` for `images` to switch image lookup off.
    pub fn new(generator: RecipeGenerator, images: Option<ImageResolver>) -> Self {
        if images.is_none() {
            log::info!("ℹ️ Image lookup disabled");
        }
        Self { generator, images }
    }

    pub async fn find_recipe(&self, dish_name: &str) -> Result<RecipeView, RecipeError> {
        log::info!("📨 Recipe request: '{}'", dish_name);

        let recipe = self.generator.generate(dish_name).await?;

        let image = match &self.images {
            Some(resolver) => Some(resolver.resolve(&recipe.recipe_name).await),
            None => None,
        };

        Ok(presenter::present(&recipe, image.as_ref()))
    }
}
