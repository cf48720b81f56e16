//! Google Gemini `generateContent` client

pub mod client;
pub mod types;

pub use client::GeminiClient;
