// tests/common/mod.rs
//! Shared helpers: a scripted in-memory transport and GraphQL payload builders.

#![allow(dead_code)]

use gh_project_report::api::queries::PROJECTS_QUERY;
use gh_project_report::{AppError, ExtractionContext, GraphQlTransport, OrgLogin, ReportWindow};
use parking_lot::Mutex;
use serde_json::{json, Map, Value};

type Responder = Box<dyn Fn(&str, &Value) -> Result<Value, AppError> + Send + Sync>;

/// A transport that answers from a closure and records every request.
pub struct ScriptedTransport {
    responder: Responder,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value, AppError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Variables of every request, in call order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl GraphQlTransport for ScriptedTransport {
    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, AppError> {
        self.requests.lock().push(variables.clone());
        (self.responder)(query, variables)
    }
}

/// Whether a request is the project listing (as opposed to an items query).
pub fn is_projects_query(query: &str) -> bool {
    query == PROJECTS_QUERY
}

/// Wraps `nodes` in an envelope with the connection at `data.<path>`.
pub fn page_envelope(path: &str, nodes: Vec<Value>, end_cursor: Option<&str>) -> Value {
    let mut connection = json!({
        "nodes": nodes,
        "pageInfo": {
            "hasNextPage": end_cursor.is_some(),
            "endCursor": end_cursor,
        }
    });
    for segment in path.rsplit('.') {
        let mut wrapper = Map::new();
        wrapper.insert(segment.to_string(), connection);
        connection = Value::Object(wrapper);
    }
    json!({ "data": connection })
}

pub fn project_node(number: u64, title: &str, updated_at: &str) -> Value {
    json!({ "number": number, "title": title, "updatedAt": updated_at })
}

/// An item whose content is an issue, with number fields given as `(name, value)`.
pub fn issue_item(
    number: u64,
    created_at: &str,
    assignees: &[&str],
    fields: &[(&str, f64)],
) -> Value {
    let assignees: Vec<Value> = assignees.iter().map(|login| json!({ "login": login })).collect();
    let fields: Vec<Value> = fields
        .iter()
        .map(|(name, value)| json!({ "field": { "name": name }, "number": value }))
        .collect();
    json!({
        "content": {
            "number": number,
            "title": format!("Issue {}", number),
            "repository": { "name": "platform" },
            "assignees": { "nodes": assignees },
            "url": format!("https://github.com/acme/platform/issues/{}", number),
            "createdAt": created_at,
        },
        "fieldValues": { "nodes": fields }
    })
}

pub fn context(start: &str, end: &str) -> ExtractionContext {
    ExtractionContext::new(
        OrgLogin::new("acme").expect("valid login"),
        ReportWindow::parse(start, end).expect("valid window"),
    )
}
