//! Provider labels and the default model of each client

pub mod gemini {
    pub const PROVIDER: &str = "google";
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
}

pub mod openai {
    pub const PROVIDER: &str = "openai";
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
}
