//! Domain value types shared between the Jenkins adapter and the CLI

use serde::{
    Deserialize,
    Serialize,
};

/// Classification of a Jenkins item: a container or a buildable leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Job,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Folder => write!(f, "folder"),
            ItemKind::Job => write!(f, "job"),
        }
    }
}

/// One node of the flattened job tree.
///
/// `full_name` is the slash-joined path from the root; `level` is the number
/// of ancestor folders, so root items sit at level 0 and a child's level is
/// always the segment count of its `full_name` minus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTreeItem {
    pub name: String,
    pub full_name: String,
    pub kind: ItemKind,
    pub url: String,
    pub level: usize,
    pub color: Option<String>,
}

impl JobTreeItem {
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    pub fn is_job(&self) -> bool {
        self.kind == ItemKind::Job
    }
}

/// Normalized parameter shape with per-variant default extraction.
///
/// Choices exist only on the `Choice` variant and the `Boolean` default is a
/// concrete bool, so the invariants of the schema hold by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterSchema {
    String {
        default: Option<String>,
    },
    Boolean {
        default: bool,
    },
    Choice {
        choices: Vec<String>,
        default: Option<String>,
    },
    Password {
        default: Option<String>,
    },
    Text {
        default: Option<String>,
    },
    File {
        default: Option<String>,
    },
    Unknown {
        kind: String,
        default: Option<String>,
    },
}

impl ParameterSchema {
    /// Short type label as shown to the user (`string`, `boolean`, ...).
    /// Unmatched classes surface the trailing segment of their class name.
    pub fn kind_name(&self) -> &str {
        match self {
            ParameterSchema::String { .. } => "string",
            ParameterSchema::Boolean { .. } => "boolean",
            ParameterSchema::Choice { .. } => "choice",
            ParameterSchema::Password { .. } => "password",
            ParameterSchema::Text { .. } => "text",
            ParameterSchema::File { .. } => "file",
            ParameterSchema::Unknown { kind, .. } => kind,
        }
    }

    /// Default value rendered as the string sent to the server, if any.
    pub fn default_as_string(&self) -> Option<String> {
        match self {
            ParameterSchema::Boolean { default } => Some(default.to_string()),
            ParameterSchema::String { default }
            | ParameterSchema::Choice { default, .. }
            | ParameterSchema::Password { default }
            | ParameterSchema::Text { default }
            | ParameterSchema::File { default }
            | ParameterSchema::Unknown { default, .. } => default.clone(),
        }
    }

    pub fn choices(&self) -> Option<&[String]> {
        match self {
            ParameterSchema::Choice { choices, .. } => Some(choices),
            _ => None,
        }
    }
}

/// A job's declared build parameter, in server-declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParameter {
    pub name: String,
    pub description: Option<String>,
    pub schema: ParameterSchema,
}

/// Outcome of a build submission.
///
/// `queue_url` is empty when the server omitted the Location header, which
/// Jenkins does not guarantee on all configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredBuild {
    pub queue_url: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_for_builtin_variants() {
        assert_eq!(ParameterSchema::String { default: None }.kind_name(), "string");
        assert_eq!(ParameterSchema::Boolean { default: false }.kind_name(), "boolean");
        assert_eq!(
            ParameterSchema::Choice {
                choices: vec![],
                default: None
            }
            .kind_name(),
            "choice"
        );
    }

    #[test]
    fn test_kind_name_for_unknown_carries_class_segment() {
        let schema = ParameterSchema::Unknown {
            kind: "RunParameterDefinition".to_string(),
            default: None,
        };
        assert_eq!(schema.kind_name(), "RunParameterDefinition");
    }

    #[test]
    fn test_boolean_default_renders_as_form_value() {
        assert_eq!(
            ParameterSchema::Boolean { default: true }.default_as_string(),
            Some("true".to_string())
        );
        assert_eq!(
            ParameterSchema::Boolean { default: false }.default_as_string(),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_choices_only_on_choice_variant() {
        let choice = ParameterSchema::Choice {
            choices: vec!["1.0.0".to_string(), "1.1.0".to_string()],
            default: None,
        };
        assert_eq!(choice.choices().unwrap().len(), 2);
        assert!(ParameterSchema::String { default: None }.choices().is_none());
    }
}
