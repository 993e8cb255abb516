//! Prompt construction for blog drafting.

use crate::domain::GenerationRequest;
use crate::ports::ChatPrompt;

const PERSONA: &str = "You are an expert technical blog writer for Bamboo Coders, \
a modern web development agency specializing in React and Next.js.";

/// Collapse all whitespace runs (including newlines) into single spaces.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the system and user messages for a validated request.
///
/// The topic only ever appears in the user message; the tone is embedded in the
/// system message on a single line.
pub fn build_prompt(request: &GenerationRequest) -> ChatPrompt {
    let system = format!(
        "{PERSONA} Write engaging, informative blog posts with a {tone} tone. \
         Include practical examples and insights.",
        tone = single_line(&request.tone),
    );

    let user = format!(
        "Write a comprehensive blog post about: {topic}\n\
         \n\
         The blog should include:\n\
         1. A catchy, SEO-friendly title (max 60 characters)\n\
         2. A brief excerpt (max 160 characters)\n\
         3. Full article content in Markdown format with proper headings, code examples if relevant, and practical insights\n\
         \n\
         Format your response as JSON:\n\
         {{\n  \"title\": \"...\",\n  \"excerpt\": \"...\",\n  \"content\": \"... markdown content ...\"\n}}",
        topic = single_line(&request.topic),
    );

    ChatPrompt { system, user }
}
