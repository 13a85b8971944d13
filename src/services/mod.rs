pub mod ai_service;
pub mod groq; // Groq chat completions (OpenAI compatible)
pub mod pixabay; // Pixabay image search

pub use ai_service::ChatService;
pub use groq::GroqService;
pub use pixabay::PixabayClient;
