// src/api/queries.rs
//! GraphQL documents and the connection paths their nodes live at.

/// Lists an organization's Projects (v2).
pub const PROJECTS_QUERY: &str = r#"
query($org: String!, $first: Int!, $after: String) {
  organization(login: $org) {
    projectsV2(first: $first, after: $after) {
      pageInfo { hasNextPage endCursor }
      nodes { number title updatedAt }
    }
  }
}"#;

pub const PROJECTS_PATH: &str = "organization.projectsV2";

/// Lists the items of one project with their issue content and number fields.
pub const PROJECT_ITEMS_QUERY: &str = r#"
query($org: String!, $projNum: Int!, $first: Int!, $after: String) {
  organization(login: $org) {
    projectV2(number: $projNum) {
      items(first: $first, after: $after) {
        pageInfo { hasNextPage endCursor }
        nodes {
          content {
            ... on Issue {
              number
              title
              repository { name }
              assignees(first: 10) { nodes { login } }
              url
              createdAt
            }
          }
          fieldValues(first: 20) {
            nodes {
              ... on ProjectV2ItemFieldNumberValue {
                field { ... on ProjectV2FieldCommon { name } }
                number
              }
            }
          }
        }
      }
    }
  }
}"#;

pub const PROJECT_ITEMS_PATH: &str = "organization.projectV2.items";
