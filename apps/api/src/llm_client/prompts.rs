// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs next to it; only cross-cutting pieces live here.

/// Appended to every user message that expects a JSON object back.
/// Models do not always comply, which is why responses go through the extractor.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON: a single object whose keys \
    are the framework field names and whose values are strings. \
    Do NOT include explanations, apologies, or any text outside the JSON object.";
