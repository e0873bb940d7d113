//! Normalization of loosely-typed Jenkins payloads

use butler_core::types::{
    JobParameter,
    ParameterSchema,
};

use crate::types::{
    BuildCause,
    BuildDetail,
    JobDetail,
    ParameterDefinition,
};

/// Extracts a job's normalized parameter list from its detail payload.
///
/// Parameters live under the property whose class contains
/// `ParametersDefinitionProperty`; a job without that property (or with an
/// empty definition list) has no parameters. Output order mirrors the
/// server-declared order.
pub fn parameters_from_detail(detail: JobDetail) -> Vec<JobParameter> {
    detail
        .property
        .into_iter()
        .filter(|prop| {
            prop.class_name
                .as_deref()
                .is_some_and(|class| class.contains("ParametersDefinitionProperty"))
        })
        .flat_map(|prop| prop.parameter_definitions)
        .map(parameter_from_definition)
        .collect()
}

/// Normalizes one raw definition into the strict schema.
///
/// The type is derived by substring match of the class name against a fixed
/// table; unmatched classes fall back to the trailing segment of the class
/// name, an empty class name to `unknown`.
fn parameter_from_definition(def: ParameterDefinition) -> JobParameter {
    let class = def.class_name.as_deref().unwrap_or_default();
    let default_value = def.default_parameter_value.and_then(|dpv| dpv.value);

    let schema = if class.contains("BooleanParameterDefinition") {
        ParameterSchema::Boolean {
            default: default_value.and_then(|v| v.as_bool()).unwrap_or(false),
        }
    } else if class.contains("ChoiceParameterDefinition") {
        ParameterSchema::Choice {
            choices: def.choices,
            default: scalar_to_string(default_value),
        }
    } else if class.contains("StringParameterDefinition") {
        ParameterSchema::String {
            default: scalar_to_string(default_value),
        }
    } else if class.contains("PasswordParameterDefinition") {
        ParameterSchema::Password {
            default: scalar_to_string(default_value),
        }
    } else if class.contains("TextParameterDefinition") {
        ParameterSchema::Text {
            default: scalar_to_string(default_value),
        }
    } else if class.contains("FileParameterDefinition") {
        ParameterSchema::File {
            default: scalar_to_string(default_value),
        }
    } else {
        ParameterSchema::Unknown {
            kind: trailing_class_segment(class),
            default: scalar_to_string(default_value),
        }
    };

    JobParameter {
        name: def.name,
        description: def.description.filter(|d| !d.is_empty()),
        schema,
    }
}

fn trailing_class_segment(class: &str) -> String {
    let segment = class.rsplit('.').next().unwrap_or_default();
    if segment.is_empty() {
        "unknown".to_string()
    } else {
        segment.to_string()
    }
}

// Defaults arrive as arbitrary scalars; non-strings keep their JSON
// rendering.
fn scalar_to_string(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other @ (serde_json::Value::Bool(_) | serde_json::Value::Number(_)) => {
            Some(other.to_string())
        }
        _ => None,
    }
}

/// Causes attached to a build, pulled from its `CauseAction` entries.
pub fn build_causes(detail: &BuildDetail) -> Vec<&BuildCause> {
    detail
        .actions
        .iter()
        .filter(|action| {
            action
                .class_name
                .as_deref()
                .is_some_and(|class| class.contains("CauseAction"))
        })
        .flat_map(|action| action.causes.iter())
        .collect()
}

/// Human-readable trigger origin: user, timer, SCM, upstream build, or
/// branch event, falling back to the server's own description.
pub fn describe_cause(cause: &BuildCause) -> String {
    let class = cause.class_name.as_deref().unwrap_or_default();

    if class.contains("UserIdCause") {
        let user = cause
            .user_id
            .as_deref()
            .or(cause.user_name.as_deref())
            .unwrap_or("unknown");
        return format!("started by user {user}");
    }
    if class.contains("TimerTriggerCause") {
        return "started by timer".to_string();
    }
    if class.contains("SCMTriggerCause") {
        return "started by an SCM change".to_string();
    }
    if class.contains("UpstreamCause") {
        let project = cause.upstream_project.as_deref().unwrap_or("unknown");
        return match cause.upstream_build {
            Some(number) => format!("started by upstream build {project}#{number}"),
            None => format!("started by upstream project {project}"),
        };
    }
    if class.contains("BranchEventCause") {
        let origin = cause.origin.as_deref().unwrap_or("unknown");
        return format!("started by branch event from {origin}");
    }

    cause
        .short_description
        .clone()
        .unwrap_or_else(|| "unknown cause".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_from_json(json: serde_json::Value) -> JobDetail {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_empty_property_list_yields_no_parameters() {
        let detail = detail_from_json(serde_json::json!({
            "name": "test-job-1",
            "property": []
        }));
        assert!(parameters_from_detail(detail).is_empty());
    }

    #[test]
    fn test_unrelated_properties_are_skipped() {
        let detail = detail_from_json(serde_json::json!({
            "name": "test-job-1",
            "property": [
                { "_class": "jenkins.model.BuildDiscarderProperty" }
            ]
        }));
        assert!(parameters_from_detail(detail).is_empty());
    }

    #[test]
    fn test_string_parameter_with_default() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{
                    "_class": "hudson.model.StringParameterDefinition",
                    "name": "ENVIRONMENT",
                    "description": "Environment to deploy to",
                    "defaultParameterValue": { "value": "staging" }
                }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "ENVIRONMENT");
        assert_eq!(
            params[0].schema,
            ParameterSchema::String {
                default: Some("staging".to_string())
            }
        );
    }

    #[test]
    fn test_boolean_without_default_is_false() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{
                    "_class": "hudson.model.BooleanParameterDefinition",
                    "name": "RUN_TESTS"
                }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(params[0].schema, ParameterSchema::Boolean { default: false });
    }

    #[test]
    fn test_choice_copies_choices_verbatim() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{
                    "_class": "hudson.model.ChoiceParameterDefinition",
                    "name": "VERSION",
                    "choices": ["1.0.0", "1.1.0", "2.0.0"],
                    "defaultParameterValue": { "value": "1.1.0" }
                }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(params[0].schema.kind_name(), "choice");
        assert_eq!(
            params[0].schema,
            ParameterSchema::Choice {
                choices: vec![
                    "1.0.0".to_string(),
                    "1.1.0".to_string(),
                    "2.0.0".to_string()
                ],
                default: Some("1.1.0".to_string()),
            }
        );
    }

    #[test]
    fn test_unmatched_class_falls_back_to_trailing_segment() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{
                    "_class": "hudson.model.RunParameterDefinition",
                    "name": "UPSTREAM_RUN"
                }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(params[0].schema.kind_name(), "RunParameterDefinition");
    }

    #[test]
    fn test_missing_class_is_unknown() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{ "name": "MYSTERY" }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(params[0].schema.kind_name(), "unknown");
    }

    #[test]
    fn test_numeric_default_keeps_json_rendering() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [{
                    "_class": "hudson.model.StringParameterDefinition",
                    "name": "RETRIES",
                    "defaultParameterValue": { "value": 3 }
                }]
            }]
        }));

        let params = parameters_from_detail(detail);
        assert_eq!(
            params[0].schema,
            ParameterSchema::String {
                default: Some("3".to_string())
            }
        );
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let detail = detail_from_json(serde_json::json!({
            "property": [{
                "_class": "hudson.model.ParametersDefinitionProperty",
                "parameterDefinitions": [
                    { "_class": "hudson.model.StringParameterDefinition", "name": "ENVIRONMENT" },
                    { "_class": "hudson.model.BooleanParameterDefinition", "name": "RUN_TESTS" },
                    { "_class": "hudson.model.ChoiceParameterDefinition", "name": "VERSION" }
                ]
            }]
        }));

        let names: Vec<_> = parameters_from_detail(detail)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["ENVIRONMENT", "RUN_TESTS", "VERSION"]);
    }

    #[test]
    fn test_describe_cause_classifies_by_class_substring() {
        let cause: BuildCause = serde_json::from_value(serde_json::json!({
            "_class": "hudson.model.Cause$UserIdCause",
            "shortDescription": "Started by user admin",
            "userId": "admin"
        }))
        .unwrap();
        assert_eq!(describe_cause(&cause), "started by user admin");

        let cause: BuildCause = serde_json::from_value(serde_json::json!({
            "_class": "hudson.triggers.SCMTrigger$SCMTriggerCause",
            "shortDescription": "Started by an SCM change"
        }))
        .unwrap();
        assert_eq!(describe_cause(&cause), "started by an SCM change");

        let cause: BuildCause = serde_json::from_value(serde_json::json!({
            "_class": "hudson.model.Cause$UpstreamCause",
            "upstreamProject": "backend/api-service",
            "upstreamBuild": 17
        }))
        .unwrap();
        assert_eq!(
            describe_cause(&cause),
            "started by upstream build backend/api-service#17"
        );
    }

    #[test]
    fn test_describe_cause_falls_back_to_short_description() {
        let cause: BuildCause = serde_json::from_value(serde_json::json!({
            "_class": "org.example.ExoticCause",
            "shortDescription": "Started by replay"
        }))
        .unwrap();
        assert_eq!(describe_cause(&cause), "Started by replay");
    }

    #[test]
    fn test_build_causes_filters_cause_actions() {
        let detail: BuildDetail = serde_json::from_value(serde_json::json!({
            "number": 42,
            "actions": [
                {
                    "_class": "hudson.model.ParametersAction"
                },
                {
                    "_class": "hudson.model.CauseAction",
                    "causes": [{
                        "_class": "hudson.model.Cause$UserIdCause",
                        "userId": "admin"
                    }]
                }
            ]
        }))
        .unwrap();

        let causes = build_causes(&detail);
        assert_eq!(causes.len(), 1);
        assert_eq!(causes[0].user_id.as_deref(), Some("admin"));
    }
}
