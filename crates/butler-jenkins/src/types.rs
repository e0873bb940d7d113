//! API response types for the Jenkins REST API

use serde::Deserialize;

/// One entry of a folder (or root) listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "_class", default)]
    pub class_name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingResponse {
    #[serde(default)]
    pub jobs: Vec<ItemSummary>,
}

/// Full job detail as returned at `<path>/api/json`.
#[derive(Debug, Deserialize)]
pub struct JobDetail {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "_class", default)]
    pub class_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub buildable: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "lastBuild", default)]
    pub last_build: Option<BuildRef>,
    #[serde(rename = "lastSuccessfulBuild", default)]
    pub last_successful_build: Option<BuildRef>,
    #[serde(rename = "lastFailedBuild", default)]
    pub last_failed_build: Option<BuildRef>,
    #[serde(default)]
    pub property: Vec<JobProperty>,
    // Populated for folders and multibranch projects only.
    #[serde(default)]
    pub jobs: Vec<ItemSummary>,
}

/// Lightweight reference to a build (`lastBuild` and friends).
#[derive(Debug, Clone, Deserialize)]
pub struct BuildRef {
    pub number: i64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Build detail as returned at `<path>/lastBuild/api/json`.
#[derive(Debug, Deserialize)]
pub struct BuildDetail {
    pub number: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub building: bool,
    #[serde(default)]
    pub duration: i64,
    #[serde(rename = "estimatedDuration", default)]
    pub estimated_duration: i64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub actions: Vec<BuildAction>,
}

#[derive(Debug, Deserialize)]
pub struct BuildAction {
    #[serde(rename = "_class", default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub causes: Vec<BuildCause>,
}

/// Origin of a build, carried by `CauseAction` entries.
#[derive(Debug, Deserialize)]
pub struct BuildCause {
    #[serde(rename = "_class", default)]
    pub class_name: Option<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(rename = "upstreamProject", default)]
    pub upstream_project: Option<String>,
    #[serde(rename = "upstreamBuild", default)]
    pub upstream_build: Option<i64>,
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobProperty {
    #[serde(rename = "_class", default)]
    pub class_name: Option<String>,
    #[serde(rename = "parameterDefinitions", default)]
    pub parameter_definitions: Vec<ParameterDefinition>,
}

/// Raw, loosely-typed parameter definition as Jenkins declares it.
#[derive(Debug, Deserialize)]
pub struct ParameterDefinition {
    #[serde(rename = "_class", default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "defaultParameterValue", default)]
    pub default_parameter_value: Option<DefaultValue>,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DefaultValue {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}
