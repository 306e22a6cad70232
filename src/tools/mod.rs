//! Tool handlers and registry assembly.
//!
//! Every tool takes loosely-typed wire arguments and returns formatted text;
//! lookup failures are part of that text, not transport errors. Handlers are
//! free functions over the store so they stay unit-testable without a
//! registry.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::args::ToolArgs;
use crate::mcp::registry::{
    number_property, object_schema, string_property, ToolDescriptor, ToolRegistry,
};
use crate::store::Store;

pub mod projects;
pub mod workers;

fn register(
    registry: &mut ToolRegistry,
    store: &Arc<Store>,
    name: &str,
    description: &str,
    input_schema: Value,
    handler: fn(&Store, &ToolArgs) -> Result<String, ToolError>,
) {
    let store = Arc::clone(store);
    registry.register(
        ToolDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        },
        Box::new(move |args| handler(&store, args)),
    );
}

/// Builds the full tool catalogue over a shared store.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn build_registry(store: &Arc<Store>) -> ToolRegistry {
    use serde_json::json;

    let mut registry = ToolRegistry::new();

    register(
        &mut registry,
        store,
        "get_worker_by_id",
        "Gets detailed information about a specific worker by their ID",
        object_schema(json!({"id": number_property("Unique worker ID")}), &["id"]),
        workers::get_worker_by_id,
    );
    register(
        &mut registry,
        store,
        "get_all_workers",
        "Gets the complete list of all workers registered in the system",
        object_schema(json!({}), &[]),
        workers::get_all_workers,
    );
    register(
        &mut registry,
        store,
        "search_workers_by_name",
        "Searches workers by name (partial match, case-insensitive)",
        object_schema(
            json!({"name": string_property("Name or part of the name to search for")}),
            &["name"],
        ),
        workers::search_workers_by_name,
    );
    register(
        &mut registry,
        store,
        "get_all_projects",
        "Gets the complete list of all projects with summary information",
        object_schema(json!({}), &[]),
        projects::get_all_projects,
    );
    register(
        &mut registry,
        store,
        "get_project_by_id",
        "Gets detailed information about a specific project by its ID",
        object_schema(json!({"id": number_property("Unique project ID")}), &["id"]),
        projects::get_project_by_id,
    );
    register(
        &mut registry,
        store,
        "get_projects_by_status",
        "Gets projects filtered by status: Planning, InProgress, OnHold, Completed, Cancelled",
        object_schema(
            json!({"status": string_property(
                "Project status: Planning, InProgress, OnHold, Completed, Cancelled"
            )}),
            &["status"],
        ),
        projects::get_projects_by_status,
    );
    register(
        &mut registry,
        store,
        "get_projects_by_manager",
        "Gets all projects managed by a specific project manager",
        object_schema(
            json!({"managerId": number_property("ID of the worker acting as project manager")}),
            &["managerId"],
        ),
        projects::get_projects_by_manager,
    );
    register(
        &mut registry,
        store,
        "search_projects",
        "Searches projects by name or description",
        object_schema(
            json!({"searchTerm": string_property(
                "Term to search for in project names and descriptions"
            )}),
            &["searchTerm"],
        ),
        projects::search_projects,
    );
    register(
        &mut registry,
        store,
        "get_tasks_by_project",
        "Gets all tasks for a specific project",
        object_schema(
            json!({"projectId": number_property("Project ID")}),
            &["projectId"],
        ),
        projects::get_tasks_by_project,
    );
    register(
        &mut registry,
        store,
        "get_tasks_by_worker",
        "Gets all tasks assigned to a specific worker",
        object_schema(
            json!({"workerId": number_property("Worker ID")}),
            &["workerId"],
        ),
        projects::get_tasks_by_worker,
    );
    register(
        &mut registry,
        store,
        "get_task_by_id",
        "Gets detailed information about a specific task by its ID",
        object_schema(json!({"taskId": number_property("Unique task ID")}), &["taskId"]),
        projects::get_task_by_id,
    );
    register(
        &mut registry,
        store,
        "get_tasks_by_status",
        "Gets tasks filtered by status: ToDo, InProgress, InReview, Blocked, Completed, Cancelled",
        object_schema(
            json!({"status": string_property(
                "Task status: ToDo, InProgress, InReview, Blocked, Completed, Cancelled"
            )}),
            &["status"],
        ),
        projects::get_tasks_by_status,
    );
    register(
        &mut registry,
        store,
        "get_project_statistics",
        "Gets overall project system statistics (totals, completed, in progress, and so on)",
        object_schema(json!({}), &[]),
        projects::get_project_statistics,
    );
    register(
        &mut registry,
        store,
        "get_team_workload",
        "Gets a summary of the whole team's workload",
        object_schema(json!({}), &[]),
        projects::get_team_workload,
    );
    register(
        &mut registry,
        store,
        "assign_worker_to_project",
        "Assigns a worker to a specific project using IDs",
        object_schema(
            json!({
                "projectId": number_property("Project ID"),
                "workerId": number_property("ID of the worker to assign"),
            }),
            &["projectId", "workerId"],
        ),
        projects::assign_worker_to_project,
    );
    register(
        &mut registry,
        store,
        "remove_worker_from_project",
        "Removes a worker from a specific project using IDs",
        object_schema(
            json!({
                "projectId": number_property("Project ID"),
                "workerId": number_property("ID of the worker to remove"),
            }),
            &["projectId", "workerId"],
        ),
        projects::remove_worker_from_project,
    );
    register(
        &mut registry,
        store,
        "assign_worker_by_name",
        "Assigns a worker to a project using names (the IDs are looked up automatically). \
         Useful for natural-language requests such as 'add David Silva to the web portal project'",
        object_schema(
            json!({
                "workerName": string_property("Full or partial worker name"),
                "projectName": string_property("Full or partial project name"),
            }),
            &["workerName", "projectName"],
        ),
        projects::assign_worker_by_name,
    );

    registry
}

// Shared text-formatting helpers.

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub(crate) fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "No date".to_string(), format_date)
}

/// Renders a whole-euro amount with thousands separators, e.g. `€250,000`.
pub(crate) fn format_euros(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("€{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_all_seventeen_tools() {
        let registry = build_registry(&Arc::new(Store::seeded()));
        assert_eq!(registry.len(), 17);
        assert_eq!(registry.names().first(), Some(&"get_worker_by_id"));
        assert_eq!(registry.names().last(), Some(&"assign_worker_by_name"));
    }

    #[test]
    fn euro_formatting_groups_thousands() {
        assert_eq!(format_euros(0), "€0");
        assert_eq!(format_euros(950), "€950");
        assert_eq!(format_euros(85_000), "€85,000");
        assert_eq!(format_euros(1_405_000), "€1,405,000");
    }

    #[test]
    fn handlers_are_wired_to_the_store() {
        let registry = build_registry(&Arc::new(Store::seeded()));
        let map = serde_json::json!({"id": 1});
        let map = map.as_object().unwrap().clone();
        let text = registry
            .call("get_worker_by_id", &ToolArgs::new(Some(&map)))
            .unwrap()
            .unwrap();
        assert!(text.contains("Carlos Martínez López"));
    }
}
