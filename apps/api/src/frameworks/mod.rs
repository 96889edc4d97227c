// Template Registry: the four fixed prompt frameworks and their example presets.
// All data is static and read-only for the life of the process.

pub mod examples;
pub mod handlers;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Framework '{0}' not found.")]
pub struct UnknownFramework(pub String);

/// Field name → free-text value, as submitted by a form. Read-only to the assembler.
pub type FieldValues = BTreeMap<String, String>;

/// One of the fixed prompt frameworks. Names are matched exactly (`RCR-EOC` keeps its hyphen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "ICDF")]
    Icdf,
    #[serde(rename = "RCR-EOC")]
    RcrEoc,
    #[serde(rename = "MICRO")]
    Micro,
    #[serde(rename = "COSTAR")]
    Costar,
}

/// Ordered field list plus the required subset for one framework.
#[derive(Debug)]
pub struct FrameworkSpec {
    pub framework: Framework,
    /// Output order. Never re-sorted.
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
}

const REGISTRY: [FrameworkSpec; 4] = [
    FrameworkSpec {
        framework: Framework::Icdf,
        fields: &["Instruction", "Context", "Data", "Format"],
        required: &["Instruction", "Format"],
    },
    FrameworkSpec {
        framework: Framework::RcrEoc,
        fields: &["Role", "Context", "Request", "Examples", "Output", "Constraints"],
        required: &["Role", "Request"],
    },
    FrameworkSpec {
        framework: Framework::Micro,
        fields: &["Message", "Intention", "Context", "Rhythm", "Output"],
        required: &["Message", "Intention"],
    },
    FrameworkSpec {
        framework: Framework::Costar,
        fields: &["Context", "Offer", "Style", "Target", "Action", "Result"],
        required: &["Offer", "Action"],
    },
];

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Icdf,
        Framework::RcrEoc,
        Framework::Micro,
        Framework::Costar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Framework::Icdf => "ICDF",
            Framework::RcrEoc => "RCR-EOC",
            Framework::Micro => "MICRO",
            Framework::Costar => "COSTAR",
        }
    }

    pub fn spec(self) -> &'static FrameworkSpec {
        let index = match self {
            Framework::Icdf => 0,
            Framework::RcrEoc => 1,
            Framework::Micro => 2,
            Framework::Costar => 3,
        };
        &REGISTRY[index]
    }

    pub fn fields(self) -> &'static [&'static str] {
        self.spec().fields
    }

    pub fn required(self) -> &'static [&'static str] {
        self.spec().required
    }

    pub fn has_field(self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    pub fn is_required(self, field: &str) -> bool {
        self.required().contains(&field)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = UnknownFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .map(|spec| spec.framework)
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFramework(s.to_string()))
    }
}

/// Ordered field names for a framework given by name.
#[cfg_attr(not(test), allow(dead_code))]
pub fn fields_for(framework: &str) -> Result<&'static [&'static str], UnknownFramework> {
    Ok(framework.parse::<Framework>()?.fields())
}

/// Required field names for a framework given by name. Always a subset of `fields_for`.
#[cfg_attr(not(test), allow(dead_code))]
pub fn required_for(framework: &str) -> Result<&'static [&'static str], UnknownFramework> {
    Ok(framework.parse::<Framework>()?.required())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_every_registry_entry() {
        for spec in &REGISTRY {
            assert_eq!(spec.framework.name().parse::<Framework>(), Ok(spec.framework));
        }
        assert_eq!(
            "Costar".parse::<Framework>(),
            Err(UnknownFramework("Costar".to_string()))
        );
    }

    #[test]
    fn test_registry_is_indexed_by_framework() {
        for framework in Framework::ALL {
            assert_eq!(framework.spec().framework, framework);
        }
    }

    #[test]
    fn test_required_is_subset_of_fields() {
        for framework in Framework::ALL {
            for required in framework.required() {
                assert!(
                    framework.has_field(required),
                    "{framework}: required field {required} not declared"
                );
            }
        }
    }

    #[test]
    fn test_fields_for_is_deterministic() {
        for framework in Framework::ALL {
            let first = fields_for(framework.name()).unwrap();
            let second = fields_for(framework.name()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_field_order() {
        assert_eq!(
            fields_for("ICDF").unwrap(),
            &["Instruction", "Context", "Data", "Format"]
        );
        assert_eq!(
            fields_for("RCR-EOC").unwrap(),
            &["Role", "Context", "Request", "Examples", "Output", "Constraints"]
        );
        assert_eq!(
            fields_for("MICRO").unwrap(),
            &["Message", "Intention", "Context", "Rhythm", "Output"]
        );
        assert_eq!(
            fields_for("COSTAR").unwrap(),
            &["Context", "Offer", "Style", "Target", "Action", "Result"]
        );
    }

    #[test]
    fn test_required_for() {
        assert_eq!(required_for("ICDF").unwrap(), &["Instruction", "Format"]);
        assert_eq!(required_for("COSTAR").unwrap(), &["Offer", "Action"]);
    }

    #[test]
    fn test_unknown_framework_is_an_error() {
        assert_eq!(
            fields_for("SCAMPER"),
            Err(UnknownFramework("SCAMPER".to_string()))
        );
        assert!(required_for("icdf").is_err());
        assert!("RCR_EOC".parse::<Framework>().is_err());
    }

    #[test]
    fn test_unknown_framework_message() {
        let err = "FAKE".parse::<Framework>().unwrap_err();
        assert_eq!(err.to_string(), "Framework 'FAKE' not found.");
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&Framework::RcrEoc).unwrap(),
            r#""RCR-EOC""#
        );
        let f: Framework = serde_json::from_str(r#""COSTAR""#).unwrap();
        assert_eq!(f, Framework::Costar);
    }
}
