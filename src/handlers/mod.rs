pub mod image_resolver;
pub mod recipe_flow;
pub mod recipe_generator;

pub use image_resolver::ImageResolver;
pub use recipe_flow::RecipeFlow;
pub use recipe_generator::RecipeGenerator;
