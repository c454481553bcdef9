#![allow(dead_code)]

// Cross-cutting prompt fragments. Module-specific prompts live in a
// prompts.rs next to the module that sends them.

/// System-prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
