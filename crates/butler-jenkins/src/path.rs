//! Nested job-path rewriting
//!
//! Jenkins addresses an item at `a/b/c` as `/job/a/job/b/job/c`, so every
//! slash-separated segment of a full name becomes a `/job/<segment>` prefix.
//! Segments are percent-encoded since job names may carry spaces.

/// Rewrites a full name into the nested `/job/...` request prefix.
/// The empty path (the root) rewrites to an empty prefix.
pub fn api_path(full_name: &str) -> String {
    full_name
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("/job/{}", urlencoding::encode(segment)))
        .collect()
}

/// Request path of the item listing at `full_name` ("" lists the root).
pub fn listing_path(full_name: &str) -> String {
    format!("{}/api/json", api_path(full_name))
}

/// Request path of the item detail at `full_name`.
pub fn detail_path(full_name: &str) -> String {
    format!("{}/api/json", api_path(full_name))
}

/// Request path of a job's last-build detail.
pub fn last_build_path(full_name: &str) -> String {
    format!("{}/lastBuild/api/json", api_path(full_name))
}

/// Request path of a build's raw console output.
pub fn console_text_path(full_name: &str, build_number: i64) -> String {
    format!("{}/{build_number}/consoleText", api_path(full_name))
}

/// Request path of the trigger endpoint: `buildWithParameters` when the
/// submission carries parameters, plain `build` otherwise.
pub fn trigger_path(full_name: &str, with_parameters: bool) -> String {
    if with_parameters {
        format!("{}/buildWithParameters", api_path(full_name))
    } else {
        format!("{}/build", api_path(full_name))
    }
}

/// Flattens a full name into a filesystem-safe file-name fragment.
pub fn sanitize_job_name(full_name: &str) -> String {
    full_name.replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_rewrites_every_segment() {
        assert_eq!(api_path("a/b/c"), "/job/a/job/b/job/c");
        assert_eq!(api_path("simple"), "/job/simple");
        assert_eq!(api_path(""), "");
    }

    #[test]
    fn test_api_path_encodes_segments() {
        assert_eq!(api_path("my folder/my job"), "/job/my%20folder/job/my%20job");
    }

    #[test]
    fn test_listing_path_root_uses_bare_endpoint() {
        assert_eq!(listing_path(""), "/api/json");
        assert_eq!(listing_path("backend"), "/job/backend/api/json");
    }

    #[test]
    fn test_detail_path_nested() {
        assert_eq!(detail_path("a/b/c"), "/job/a/job/b/job/c/api/json");
    }

    #[test]
    fn test_last_build_path() {
        assert_eq!(
            last_build_path("backend/api-service"),
            "/job/backend/job/api-service/lastBuild/api/json"
        );
    }

    #[test]
    fn test_console_text_path() {
        assert_eq!(
            console_text_path("test-job-1", 42),
            "/job/test-job-1/42/consoleText"
        );
    }

    #[test]
    fn test_trigger_path_switches_on_parameters() {
        assert_eq!(trigger_path("test-job-1", true), "/job/test-job-1/buildWithParameters");
        assert_eq!(trigger_path("test-job-1", false), "/job/test-job-1/build");
    }

    #[test]
    fn test_sanitize_job_name() {
        assert_eq!(sanitize_job_name("backend/api-service"), "backend_api-service");
        assert_eq!(sanitize_job_name("simple"), "simple");
    }
}
