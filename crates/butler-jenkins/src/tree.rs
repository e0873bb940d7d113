//! Recursive folder-tree traversal
//!
//! Walks the Jenkins item graph depth-first in pre-order: a folder appears
//! before its children, a subtree's items before the next sibling. Awaits
//! are sequential so the emission order is deterministic and the server sees
//! one request at a time.

use butler_core::types::{
    ItemKind,
    JobTreeItem,
};
use futures::future::{
    BoxFuture,
    FutureExt,
};
use tracing::warn;

use crate::client::JenkinsClient;

/// Fully-qualified class-name markers of container item types. Matched by
/// substring containment: upstream class names vary by plugin version and
/// namespace. Anything not matching is a leaf job.
pub const FOLDER_CLASS_MARKERS: [&str; 4] = [
    "com.cloudbees.hudson.plugins.folder.Folder",
    "jenkins.branch.OrganizationFolder",
    "org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject",
    "hudson.model.Folder",
];

pub fn is_folder_class(class_name: &str) -> bool {
    FOLDER_CLASS_MARKERS
        .iter()
        .any(|marker| class_name.contains(marker))
}

/// Flattens the subtree rooted at `path` ("" for the whole server) into a
/// pre-order item list.
///
/// A failed listing anywhere is absorbed: the node logs a warning and
/// contributes an empty subtree, leaving siblings already materialized
/// untouched. Partial results are acceptable by design.
pub fn walk(client: &JenkinsClient, path: String) -> BoxFuture<'_, Vec<JobTreeItem>> {
    async move {
        let items = match client.list_items(&path).await {
            Ok(items) => items,
            Err(err) => {
                let at = if path.is_empty() { "<root>" } else { path.as_str() };
                warn!(path = %at, error = %err, "listing failed, skipping subtree");
                return Vec::new();
            }
        };

        let level = if path.is_empty() {
            0
        } else {
            path.split('/').count()
        };

        let mut tree = Vec::new();
        for item in items {
            let full_name = if path.is_empty() {
                item.name.clone()
            } else {
                format!("{path}/{}", item.name)
            };
            let kind = if is_folder_class(&item.class_name) {
                ItemKind::Folder
            } else {
                ItemKind::Job
            };

            tree.push(JobTreeItem {
                name: item.name,
                full_name: full_name.clone(),
                kind,
                url: item.url,
                level,
                color: item.color,
            });

            if kind == ItemKind::Folder {
                tree.extend(walk(client, full_name).await);
            }
        }

        tree
    }
    .boxed()
}

/// All buildable leaves of the whole tree.
pub async fn all_jobs(client: &JenkinsClient) -> Vec<JobTreeItem> {
    jobs_only(walk(client, String::new()).await)
}

/// Jobs whose short name or full name contains `term`, case-insensitively.
pub async fn search_jobs(client: &JenkinsClient, term: &str) -> Vec<JobTreeItem> {
    let needle = term.to_lowercase();
    all_jobs(client)
        .await
        .into_iter()
        .filter(|job| matches_search(job, &needle))
        .collect()
}

/// The tree bounded to `max_level` folders deep.
pub async fn folder_structure(client: &JenkinsClient, max_level: usize) -> Vec<JobTreeItem> {
    up_to_level(walk(client, String::new()).await, max_level)
}

pub fn jobs_only(items: Vec<JobTreeItem>) -> Vec<JobTreeItem> {
    items.into_iter().filter(JobTreeItem::is_job).collect()
}

pub fn up_to_level(items: Vec<JobTreeItem>, max_level: usize) -> Vec<JobTreeItem> {
    items
        .into_iter()
        .filter(|item| item.level <= max_level)
        .collect()
}

// `needle` must already be lowercased.
fn matches_search(item: &JobTreeItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle) || item.full_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, full_name: &str, kind: ItemKind, level: usize) -> JobTreeItem {
        JobTreeItem {
            name: name.to_string(),
            full_name: full_name.to_string(),
            kind,
            url: String::new(),
            level,
            color: None,
        }
    }

    #[test]
    fn test_folder_markers_match_known_container_classes() {
        assert!(is_folder_class("com.cloudbees.hudson.plugins.folder.Folder"));
        assert!(is_folder_class("jenkins.branch.OrganizationFolder"));
        assert!(is_folder_class(
            "org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject"
        ));
        assert!(is_folder_class("hudson.model.Folder"));
    }

    #[test]
    fn test_leaf_job_classes_are_not_folders() {
        assert!(!is_folder_class("hudson.model.FreeStyleProject"));
        assert!(!is_folder_class("org.jenkinsci.plugins.workflow.job.WorkflowJob"));
        assert!(!is_folder_class(""));
    }

    #[test]
    fn test_search_matches_full_name_not_just_short_name() {
        let job = item("api-service", "backend/api-service", ItemKind::Job, 1);
        assert!(matches_search(&job, "api"));
        assert!(matches_search(&job, "backend"));
        assert!(!matches_search(&job, "frontend"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let job = item("Deploy-Prod", "ops/Deploy-Prod", ItemKind::Job, 1);
        assert!(matches_search(&job, "deploy"));
    }

    #[test]
    fn test_jobs_only_drops_folders() {
        let items = vec![
            item("backend", "backend", ItemKind::Folder, 0),
            item("api-service", "backend/api-service", ItemKind::Job, 1),
        ];
        let jobs = jobs_only(items);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].full_name, "backend/api-service");
    }

    #[test]
    fn test_up_to_level_bounds_the_crawl() {
        let items = vec![
            item("a", "a", ItemKind::Folder, 0),
            item("b", "a/b", ItemKind::Folder, 1),
            item("c", "a/b/c", ItemKind::Job, 2),
        ];
        let bounded = up_to_level(items, 1);
        assert_eq!(bounded.len(), 2);
    }
}
