use serde::{Deserialize, Serialize};

/// Recipe returned by the chat model, after the schema gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Quantity,
}

/// The model is free to answer `"200g"` or `2`, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // `2.0` from the model reads as `2`
            Quantity::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => {
                    write!(f, "{}", v as i64)
                }
                _ => write!(f, "{}", n),
            },
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Outcome of one image lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageResult {
    Found { url: String },
    NotFound,
    LookupFailed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Two-message prompt sent to the chat model for one dish.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub system_instructions: String,
    pub dish_name: String,
}

impl PromptRequest {
    pub fn new(system_instructions: &str, dish_name: &str) -> Self {
        Self {
            system_instructions: system_instructions.to_string(),
            dish_name: dish_name.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        format!("Find the ingredients and steps for cooking {}", self.dish_name)
    }

    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: self.system_instructions.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: self.user_message(),
            },
        ]
    }
}
