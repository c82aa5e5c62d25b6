pub mod chat;
pub mod client;
pub mod image;
pub mod types;

pub use chat::OpenAiChatClient;
pub use client::OpenAiHttpClient;
pub use image::OpenAiImageClient;
