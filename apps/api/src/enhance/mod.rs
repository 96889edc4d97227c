//! AI enhancement: turn a rough draft into complete framework fields.
//!
//! All model traffic goes through the `TextGenerator` seam; this module only
//! composes requests, runs the extractor on the raw reply and merges the result.

pub mod extract;
pub mod handlers;
pub mod prompts;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::frameworks::{FieldValues, Framework};
use crate::i18n::Locale;
use crate::llm_client::{LlmError, ModelSettings, TextGenerator};

use extract::{extract_json_object, ExtractionFailure, JsonObject};

/// Result of one enhance or suggest round trip.
///
/// When extraction fails, `enhanced` is false, `fields` is the caller's input
/// unchanged and `failure` carries the diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhanceOutcome {
    pub enhanced: bool,
    pub fields: FieldValues,
    pub ignored_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ExtractionFailure>,
}

impl EnhanceOutcome {
    fn unchanged(fields: FieldValues, failure: ExtractionFailure) -> Self {
        Self {
            enhanced: false,
            fields,
            ignored_keys: Vec::new(),
            failure: Some(failure),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Model values replace whatever the user wrote.
    Overwrite,
    /// Model values only land in fields that are blank.
    FillBlanks,
}

/// What `merge_into` did with the keys of the extracted object, in key order.
#[derive(Debug, Default, PartialEq)]
pub struct MergeReport {
    /// Declared fields that received a value.
    pub written: Vec<String>,
    /// Keys the framework does not declare.
    pub ignored: Vec<String>,
}

/// Merges an extracted object into `base`. `null` values and, in `FillBlanks`
/// mode, already-filled fields are skipped without being reported.
pub fn merge_into(
    framework: Framework,
    base: &mut FieldValues,
    object: JsonObject,
    mode: MergeMode,
) -> MergeReport {
    let mut report = MergeReport::default();

    for (key, value) in object {
        if !framework.has_field(&key) {
            report.ignored.push(key);
            continue;
        }
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        if mode == MergeMode::FillBlanks
            && base.get(&key).is_some_and(|current| !current.trim().is_empty())
        {
            continue;
        }
        base.insert(key.clone(), text);
        report.written.push(key);
    }

    report
}

/// Sends the non-blank fields as a draft and merges the model's fields back,
/// overwriting. Callers must reject an empty draft before calling.
pub async fn enhance_fields(
    generator: &dyn TextGenerator,
    settings: &ModelSettings,
    framework: Framework,
    locale: Locale,
    fields: FieldValues,
) -> Result<EnhanceOutcome, LlmError> {
    let draft = prompts::draft_from_fields(framework, &fields);
    let message = prompts::enhance_message(framework, &draft);
    let raw = generator
        .generate(settings, prompts::system_prompt(locale), &message)
        .await?;

    Ok(merge_reply(framework, fields, &raw, MergeMode::Overwrite))
}

/// Asks the model for values for the blank fields only; user text is never replaced.
pub async fn suggest_missing(
    generator: &dyn TextGenerator,
    settings: &ModelSettings,
    framework: Framework,
    locale: Locale,
    fields: FieldValues,
) -> Result<EnhanceOutcome, LlmError> {
    let message = prompts::suggest_message(framework, &fields);
    let raw = generator
        .generate(settings, prompts::system_prompt(locale), &message)
        .await?;

    Ok(merge_reply(framework, fields, &raw, MergeMode::FillBlanks))
}

fn merge_reply(
    framework: Framework,
    fields: FieldValues,
    raw: &str,
    mode: MergeMode,
) -> EnhanceOutcome {
    let object = match extract_json_object(raw) {
        Ok(object) => object,
        Err(failure) => return EnhanceOutcome::unchanged(fields, failure),
    };

    let mut merged = fields;
    let MergeReport { written, ignored } = merge_into(framework, &mut merged, object, mode);
    if !ignored.is_empty() {
        debug!(ignored_keys = ?ignored, "dropped keys outside the framework");
    }
    info!(framework = framework.name(), ?mode, ?written, "merged model reply");

    EnhanceOutcome {
        enhanced: !written.is_empty(),
        fields: merged,
        ignored_keys: ignored,
        failure: None,
    }
}
