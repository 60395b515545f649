//! GraphQL DTOs
//!
//! Request and response envelopes for the GitHub GraphQL endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::repository::PinnedRepository;

/// Number of pinned items requested; GitHub caps profile pins at six, so
/// this always covers the whole set.
pub const PINNED_ITEMS_LIMIT: u32 = 10;

/// Query for a user's pinned repositories
pub const PINNED_REPOSITORIES_QUERY: &str = r#"query($login: String!, $first: Int!) {
  user(login: $login) {
    pinnedItems(first: $first) {
      nodes {
        __typename
        ... on Repository {
          name
          url
          description
          stargazers {
            totalCount
          }
          primaryLanguage {
            name
          }
        }
      }
    }
  }
}"#;

/// A GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

/// Variables for [`PINNED_REPOSITORIES_QUERY`]
#[derive(Debug, Clone, Serialize)]
pub struct PinnedVariables {
    pub login: String,
    pub first: u32,
}

impl GraphQlRequest<PinnedVariables> {
    /// Build the pinned repositories request for `login`
    pub fn pinned_repositories(login: impl Into<String>) -> Self {
        Self {
            query: PINNED_REPOSITORIES_QUERY,
            variables: PinnedVariables {
                login: login.into(),
                first: PINNED_ITEMS_LIMIT,
            },
        }
    }
}

/// A GraphQL response envelope
///
/// GitHub may return partial `data` alongside `errors`, so both are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of [`PINNED_REPOSITORIES_QUERY`]
#[derive(Debug, Clone, Deserialize)]
pub struct PinnedItemsData {
    /// `null` when the login does not exist
    pub user: Option<PinnedItemsUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedItemsUser {
    pub pinned_items: PinnedItemsConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinnedItemsConnection {
    pub nodes: Vec<PinnedItem>,
}

/// A pinned item node, discriminated by `__typename`
///
/// Gists can be pinned too and land in [`PinnedItem::Other`]. A
/// `Repository` node missing a field is a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum PinnedItem {
    Repository(PinnedRepository),
    #[serde(other)]
    Other,
}

impl PinnedItemsConnection {
    /// Consume the connection, keeping only repository nodes in order
    pub fn into_repositories(self) -> Vec<PinnedRepository> {
        self.nodes
            .into_iter()
            .filter_map(|node| match node {
                PinnedItem::Repository(repo) => Some(repo),
                PinnedItem::Other => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_variables() {
        let req = GraphQlRequest::pinned_repositories("corazza");
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["variables"]["login"], "corazza");
        assert_eq!(value["variables"]["first"], 10);
        assert!(value["query"].as_str().unwrap().contains("pinnedItems"));
    }

    #[test]
    fn test_gist_nodes_are_skipped() {
        let json = r#"{
            "data": {
                "user": {
                    "pinnedItems": {
                        "nodes": [
                            { "__typename": "Gist" },
                            {
                                "__typename": "Repository",
                                "name": "pose",
                                "url": "https://github.com/corazza/pose",
                                "description": null,
                                "stargazers": { "totalCount": 1 },
                                "primaryLanguage": { "name": "Python" }
                            }
                        ]
                    }
                }
            }
        }"#;

        let response: GraphQlResponse<PinnedItemsData> = serde_json::from_str(json).unwrap();
        assert!(response.errors.is_empty());

        let repos = response
            .data
            .unwrap()
            .user
            .unwrap()
            .pinned_items
            .into_repositories();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "pose");
    }

    #[test]
    fn test_malformed_repository_node_is_rejected() {
        let json = r#"{
            "data": {
                "user": {
                    "pinnedItems": {
                        "nodes": [
                            {
                                "__typename": "Repository",
                                "name": "pose",
                                "url": "https://github.com/corazza/pose",
                                "description": null,
                                "primaryLanguage": null
                            }
                        ]
                    }
                }
            }
        }"#;

        assert!(serde_json::from_str::<GraphQlResponse<PinnedItemsData>>(json).is_err());
    }

    #[test]
    fn test_query_requests_typename() {
        assert!(PINNED_REPOSITORIES_QUERY.contains("__typename"));
    }

    #[test]
    fn test_errors_with_null_user() {
        let json = r#"{
            "data": { "user": null },
            "errors": [{ "message": "Could not resolve to a User with the login of 'nobody'." }]
        }"#;

        let response: GraphQlResponse<PinnedItemsData> = serde_json::from_str(json).unwrap();
        assert_eq!(response.errors.len(), 1);
        assert!(response.data.unwrap().user.is_none());
    }
}
