/// Settings for the chat-completions gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Full URL of the OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    /// Bearer key; requests are refused locally when unset.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ai.gateway.lovable.dev/v1/chat/completions".to_string(),
            api_key: None,
            model: "google/gemini-2.5-flash".to_string(),
            temperature: 0.7,
            timeout_seconds: 60,
        }
    }
}
