// Assembler: validates a Field Value Set against its framework and renders the
// labeled sections in the framework's declared order.

pub mod handlers;
pub mod sanitize;

use thiserror::Error;

use crate::frameworks::{FieldValues, Framework, UnknownFramework};
use crate::i18n::{self, Locale};

pub use sanitize::sanitize;

/// Separator between rendered sections: exactly one blank line.
const SECTION_SEPARATOR: &str = "\n\n";

/// Suffix that tells the RCR-EOC context apart from the generic "Context" field.
const WORK_ENVIRONMENT_SUFFIX: &str = " (Work Environment)";

#[derive(Debug, Error, PartialEq)]
pub enum AssembleError {
    #[error(transparent)]
    FrameworkNotFound(#[from] UnknownFramework),

    /// Carries the localized message shown to the user.
    #[error("{0}")]
    RequiredFieldsMissing(String),
}

/// Returns `true` when every required field holds non-whitespace text, or when
/// blanks are allowed. A missing key counts as an empty value.
pub fn validate(fields: &FieldValues, required: &[&str], allow_blanks: bool) -> bool {
    allow_blanks
        || required
            .iter()
            .all(|name| !field_value(fields, name).trim().is_empty())
}

/// Builds the final prompt text for `framework`.
///
/// Sections are rendered as `"<label>: <value>"` in declared field order and
/// joined by a blank line. Only trailing whitespace of the whole result is trimmed.
#[cfg_attr(not(test), allow(dead_code))]
pub fn assemble(
    framework: &str,
    locale: Locale,
    fields: &FieldValues,
    allow_blanks: bool,
) -> Result<String, AssembleError> {
    assemble_for(framework.parse::<Framework>()?, locale, fields, allow_blanks)
}

/// `assemble` for an already-resolved framework.
pub fn assemble_for(
    framework: Framework,
    locale: Locale,
    fields: &FieldValues,
    allow_blanks: bool,
) -> Result<String, AssembleError> {
    if !validate(fields, framework.required(), allow_blanks) {
        return Err(AssembleError::RequiredFieldsMissing(i18n::message(
            locale,
            "required_error",
        )));
    }

    let sections: Vec<String> = framework
        .fields()
        .iter()
        .map(|name| {
            let value = sanitize(field_value(fields, name).trim());
            format!("{}: {}", section_label(framework, locale, name), value)
        })
        .collect();

    Ok(sections.join(SECTION_SEPARATOR).trim_end().to_string())
}

/// Display label used in the assembled prompt for one field.
pub fn section_label(framework: Framework, locale: Locale, field: &str) -> String {
    let mut label = i18n::label(locale, field);
    if framework == Framework::RcrEoc && field == "Context" {
        label.push_str(WORK_ENVIRONMENT_SUFFIX);
    }
    label
}

/// File name for an exported prompt, e.g. `prompti_prompt_rcr-eoc_ar.txt`.
pub fn export_filename(framework: Framework, locale: Locale) -> String {
    format!(
        "prompti_prompt_{}_{}.txt",
        framework.name().to_lowercase(),
        locale.code().to_lowercase()
    )
}

fn field_value<'a>(fields: &'a FieldValues, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_allow_blanks_always_passes() {
        assert!(validate(&FieldValues::new(), &["Instruction", "Format"], true));
        assert!(validate(&values(&[("Instruction", "  ")]), &["Instruction"], true));
    }

    #[test]
    fn test_validate_whitespace_only_counts_as_empty() {
        let fields = values(&[("Instruction", "  "), ("Format", "x")]);
        assert!(!validate(&fields, &["Instruction", "Format"], false));
    }

    #[test]
    fn test_validate_missing_key_counts_as_empty() {
        let fields = values(&[("Format", "x")]);
        assert!(!validate(&fields, &["Instruction", "Format"], false));
    }

    #[test]
    fn test_validate_all_present() {
        let fields = values(&[("Instruction", "go"), ("Format", "x")]);
        assert!(validate(&fields, &["Instruction", "Format"], false));
    }

    #[test]
    fn test_assemble_icdf_en_exact_output() {
        let fields = values(&[
            ("Instruction", "Summarize"),
            ("Context", "c"),
            ("Data", "d"),
            ("Format", "f"),
        ]);
        let prompt = assemble("ICDF", Locale::En, &fields, false).unwrap();
        assert_eq!(
            prompt,
            "Instruction: Summarize\n\nContext: c\n\nData: d\n\nFormat: f"
        );
    }

    #[test]
    fn test_assemble_follows_declared_order_not_map_order() {
        let fields = values(&[
            ("Action", "a"),
            ("Context", "c"),
            ("Offer", "o"),
            ("Result", "r"),
            ("Style", "s"),
            ("Target", "t"),
        ]);
        let prompt = assemble("COSTAR", Locale::En, &fields, false).unwrap();
        assert_eq!(
            prompt,
            "Context: c\n\nOffer: o\n\nStyle: s\n\nTarget: t\n\nAction: a\n\nResult: r"
        );
    }

    #[test]
    fn test_assemble_rcr_eoc_context_label_in_every_locale() {
        let fields = values(&[("Role", "r"), ("Request", "q"), ("Context", "team")]);
        for locale in Locale::ALL {
            let prompt = assemble("RCR-EOC", locale, &fields, false).unwrap();
            let context_section = prompt.split("\n\n").nth(1).unwrap();
            let (label, value) = context_section.split_once(": ").unwrap();
            assert!(label.ends_with(" (Work Environment)"), "{locale}: {label}");
            assert_eq!(value, "team");
        }
    }

    #[test]
    fn test_context_label_untouched_outside_rcr_eoc() {
        assert_eq!(section_label(Framework::Micro, Locale::En, "Context"), "Context");
        assert_eq!(
            section_label(Framework::RcrEoc, Locale::En, "Context"),
            "Context (Work Environment)"
        );
        assert_eq!(
            section_label(Framework::RcrEoc, Locale::Ar, "Context"),
            "السياق (Work Environment)"
        );
    }

    #[test]
    fn test_assemble_missing_required_is_localized_error() {
        let fields = values(&[("Instruction", "  "), ("Format", "x")]);
        let err = assemble("ICDF", Locale::En, &fields, false).unwrap_err();
        assert_eq!(
            err,
            AssembleError::RequiredFieldsMissing(i18n::message(Locale::En, "required_error"))
        );

        let err = assemble("ICDF", Locale::Eg, &fields, false).unwrap_err();
        assert_eq!(err.to_string(), i18n::message(Locale::Eg, "required_error"));
    }

    #[test]
    fn test_assemble_unknown_framework() {
        let err = assemble("NOPE", Locale::En, &FieldValues::new(), true).unwrap_err();
        assert_eq!(
            err,
            AssembleError::FrameworkNotFound(UnknownFramework("NOPE".to_string()))
        );
        assert_eq!(err.to_string(), "Framework 'NOPE' not found.");
    }

    #[test]
    fn test_assemble_blank_fields_rendered_and_no_trailing_whitespace() {
        let prompt = assemble("ICDF", Locale::En, &FieldValues::new(), true).unwrap();
        assert_eq!(prompt, "Instruction: \n\nContext: \n\nData: \n\nFormat:");
        assert!(!prompt.ends_with(char::is_whitespace));
    }

    #[test]
    fn test_assemble_preserves_internal_newlines_and_trims_values() {
        let fields = values(&[
            ("Message", "  line one\nline two  \n"),
            ("Intention", "motivate"),
        ]);
        let prompt = assemble("MICRO", Locale::En, &fields, false).unwrap();
        assert!(prompt.starts_with("Message: line one\nline two\n\nIntention: motivate"));
    }

    #[test]
    fn test_assemble_sanitizes_values() {
        let fields = values(&[
            ("Instruction", "<script>alert(1)</script>hello & <b>bye</b>"),
            ("Format", "f"),
        ]);
        let prompt = assemble("ICDF", Locale::En, &fields, false).unwrap();
        assert!(prompt.starts_with("Instruction: hello &amp; &lt;b&gt;bye&lt;/b&gt;\n\n"));
    }

    #[test]
    fn test_assemble_ignores_undeclared_fields() {
        let fields = values(&[("Instruction", "i"), ("Format", "f"), ("Offer", "extra")]);
        let prompt = assemble("ICDF", Locale::En, &fields, false).unwrap();
        assert!(!prompt.contains("extra"));
    }

    #[test]
    fn test_assemble_each_section_appears_once() {
        let fields = crate::frameworks::examples::example_for(Framework::Costar, Locale::Ar);
        let prompt = assemble("COSTAR", Locale::Ar, &fields, false).unwrap();
        let sections: Vec<_> = prompt.split("\n\n").collect();
        assert_eq!(sections.len(), Framework::Costar.fields().len());
        for (section, field) in sections.iter().zip(Framework::Costar.fields()) {
            assert!(section.starts_with(&format!("{}: ", i18n::label(Locale::Ar, field))));
        }
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(Framework::RcrEoc, Locale::Ar),
            "prompti_prompt_rcr-eoc_ar.txt"
        );
        assert_eq!(
            export_filename(Framework::Icdf, Locale::En),
            "prompti_prompt_icdf_en.txt"
        );
    }
}
