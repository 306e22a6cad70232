//! Project, task, reporting and assignment tools.

use std::fmt::Write as _;

use crate::error::ToolError;
use crate::mcp::args::ToolArgs;
use crate::store::{
    AssignOutcome, Project, ProjectStatus, ProjectTask, RemoveOutcome, Store, TaskStatus,
};

use super::{format_date, format_euros, format_opt_date, plural};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const TASK_STATUS_ORDER: [TaskStatus; 6] = [
    TaskStatus::ToDo,
    TaskStatus::InProgress,
    TaskStatus::InReview,
    TaskStatus::Blocked,
    TaskStatus::Completed,
    TaskStatus::Cancelled,
];

fn priority_emoji(priority: &str) -> &'static str {
    match priority.to_lowercase().as_str() {
        "high" => "🔴",
        "medium" => "🟡",
        "low" => "🟢",
        _ => "⚪",
    }
}

fn worker_name(store: &Store, id: i64) -> String {
    store
        .worker_by_id(id)
        .map_or_else(|| "Unassigned".to_string(), |w| w.name.clone())
}

fn assignee_name(store: &Store, assigned_to: Option<i64>) -> String {
    assigned_to.map_or_else(|| "Unassigned".to_string(), |id| worker_name(store, id))
}

fn format_project_summary(store: &Store, project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} **{}** (ID: {})",
        project.status.emoji(),
        project.name,
        project.id
    );
    let _ = writeln!(
        out,
        "   └─ Status: {} | Priority: {} {}",
        project.status.label(),
        priority_emoji(&project.priority),
        project.priority
    );
    let _ = writeln!(
        out,
        "   └─ PM: {} | Team: {} | Tasks: {}",
        worker_name(store, project.manager_id),
        project.team_member_ids.len(),
        project.tasks.len()
    );
    let _ = write!(
        out,
        "   └─ {} → {}",
        format_date(project.start_date),
        format_opt_date(project.end_date)
    );
    out
}

fn format_task_summary(store: &Store, task: &ProjectTask) -> String {
    format!(
        "   {} {} | Assigned to: {} | Due: {}",
        task.status.emoji(),
        task.title,
        assignee_name(store, task.assigned_to),
        format_opt_date(task.due_date)
    )
}

pub fn get_all_projects(store: &Store, _args: &ToolArgs) -> Result<String, ToolError> {
    let projects = store.projects();
    if projects.is_empty() {
        return Ok("There are no projects registered in the system.".to_string());
    }

    let mut out = String::new();
    let _ = writeln!(out, "📊 **PROJECT SUMMARY** ({} total)", projects.len());
    for project in &projects {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} **{}** (ID: {})",
            project.status.emoji(),
            project.name,
            project.id
        );
        let _ = writeln!(
            out,
            "   └─ Status: {} | Priority: {} {}",
            project.status.label(),
            priority_emoji(&project.priority),
            project.priority
        );
        let _ = writeln!(
            out,
            "   └─ Project Manager: {}",
            worker_name(store, project.manager_id)
        );
        let _ = writeln!(
            out,
            "   └─ Dates: {} - {}",
            format_date(project.start_date),
            format_opt_date(project.end_date)
        );
        let team: Vec<String> = project.team_member_ids.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "   └─ Team: [{}] | Tasks: {}",
            team.join(","),
            project.tasks.len()
        );
        let _ = writeln!(out, "   └─ Budget: {}", format_euros(project.budget));
    }
    Ok(out.trim_end().to_string())
}

pub fn get_project_by_id(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let id = args.require_i64("id")?;
    let Some(project) = store.project_by_id(id) else {
        return Ok(format!("❌ No project found with ID {id}."));
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} **{}** (ID: {})",
        project.status.emoji(),
        project.name,
        project.id
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "📝 **Description:**");
    let _ = writeln!(out, "   {}", project.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 **General Information:**");
    let _ = writeln!(out, "   • Status: {}", project.status.label());
    let _ = writeln!(
        out,
        "   • Priority: {} {}",
        priority_emoji(&project.priority),
        project.priority
    );
    let _ = writeln!(out, "   • Budget: {}", format_euros(project.budget));
    let _ = writeln!(out);
    let _ = writeln!(out, "📅 **Dates:**");
    let _ = writeln!(out, "   • Start: {}", format_date(project.start_date));
    let _ = writeln!(
        out,
        "   • Estimated end: {}",
        format_opt_date(project.end_date)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "👥 **Team:**");
    let _ = writeln!(
        out,
        "   • Project Manager: {}",
        worker_name(store, project.manager_id)
    );
    let _ = writeln!(
        out,
        "   • Team members ({}):",
        project.team_member_ids.len()
    );
    for member_id in &project.team_member_ids {
        if let Some(member) = store.worker_by_id(*member_id) {
            let _ = writeln!(out, "     - {} ({})", member.name, member.role);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "✅ **Tasks:** ({} total)", project.tasks.len());
    for status in TASK_STATUS_ORDER {
        let count = project.tasks.iter().filter(|t| t.status == status).count();
        if count > 0 {
            let _ = writeln!(out, "   • {}: {count}", status.label());
        }
    }
    Ok(out.trim_end().to_string())
}

pub fn get_projects_by_status(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let status_name = args.require_string("status")?;
    let Some(status) = ProjectStatus::from_name(&status_name) else {
        return Ok(format!(
            "❌ Invalid status. Available statuses: {}",
            ProjectStatus::VALID_NAMES
        ));
    };

    let projects = store.projects_by_status(status);
    if projects.is_empty() {
        return Ok(format!(
            "No projects found with status '{}'.",
            status.label()
        ));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "📋 **PROJECTS WITH STATUS: {}** ({} found)",
        status.label().to_uppercase(),
        projects.len()
    );
    for project in &projects {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format_project_summary(store, project));
    }
    Ok(out.trim_end().to_string())
}

pub fn get_projects_by_manager(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let manager_id = args.require_i64("managerId")?;
    let Some(manager) = store.worker_by_id(manager_id) else {
        return Ok(format!("❌ No worker found with ID {manager_id}."));
    };

    let projects = store.projects_by_manager(manager_id);
    if projects.is_empty() {
        return Ok(format!(
            "{} is not managing any projects at the moment.",
            manager.name
        ));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "👤 **PROJECTS OF {}** ({} project{})",
        manager.name.to_uppercase(),
        projects.len(),
        plural(projects.len())
    );
    for project in &projects {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format_project_summary(store, project));
    }
    Ok(out.trim_end().to_string())
}

pub fn search_projects(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let term = args.require_string("searchTerm")?;
    if term.trim().is_empty() {
        return Ok("❌ Please provide a search term.".to_string());
    }

    let projects = store.search_projects(&term);
    if projects.is_empty() {
        return Ok(format!("No projects found matching '{term}'."));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "🔍 **SEARCH RESULTS: '{term}'** ({} found)",
        projects.len()
    );
    for project in &projects {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format_project_summary(store, project));
    }
    Ok(out.trim_end().to_string())
}

pub fn get_tasks_by_project(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let project_id = args.require_i64("projectId")?;
    let Some(project) = store.project_by_id(project_id) else {
        return Ok(format!("❌ No project found with ID {project_id}."));
    };

    if project.tasks.is_empty() {
        return Ok(format!("Project '{}' has no tasks recorded.", project.name));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "📋 **TASKS FOR PROJECT: {}** ({} task{})",
        project.name.to_uppercase(),
        project.tasks.len(),
        plural(project.tasks.len())
    );
    for status in TASK_STATUS_ORDER {
        let group: Vec<&ProjectTask> =
            project.tasks.iter().filter(|t| t.status == status).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "**{}** ({}):", status.label(), group.len());
        for task in group {
            let _ = writeln!(out, "{}", format_task_summary(store, task));
        }
    }
    Ok(out.trim_end().to_string())
}

pub fn get_tasks_by_worker(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let worker_id = args.require_i64("workerId")?;
    let Some(worker) = store.worker_by_id(worker_id) else {
        return Ok(format!("❌ No worker found with ID {worker_id}."));
    };

    let tasks = store.tasks_by_worker(worker_id);
    if tasks.is_empty() {
        return Ok(format!(
            "{} has no tasks assigned at the moment.",
            worker.name
        ));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "👤 **TASKS FOR {}** ({} task{})",
        worker.name.to_uppercase(),
        tasks.len(),
        plural(tasks.len())
    );
    for status in TASK_STATUS_ORDER {
        let group: Vec<&(String, ProjectTask)> =
            tasks.iter().filter(|(_, t)| t.status == status).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "**{}** ({}):", status.label(), group.len());
        for (project_name, task) in group {
            let _ = writeln!(out, "   {} {}", task.status.emoji(), task.title);
            let _ = writeln!(
                out,
                "      └─ Project: {project_name} | Priority: {} {}",
                task.priority.emoji(),
                task.priority.label()
            );
            let _ = writeln!(
                out,
                "      └─ Due: {} | Estimated: {}h | Actual: {}h",
                format_opt_date(task.due_date),
                task.estimated_hours,
                task.actual_hours
            );
        }
    }
    Ok(out.trim_end().to_string())
}

pub fn get_task_by_id(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let task_id = args.require_i64("taskId")?;
    let Some((project_name, task)) = store.task_by_id(task_id) else {
        return Ok(format!("❌ No task found with ID {task_id}."));
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} **{}** (ID: {})",
        task.status.emoji(),
        task.title,
        task.id
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "📝 **Description:**");
    let _ = writeln!(out, "   {}", task.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 **Information:**");
    let _ = writeln!(out, "   • Project: {project_name}");
    let _ = writeln!(out, "   • Status: {}", task.status.label());
    let _ = writeln!(
        out,
        "   • Priority: {} {}",
        task.priority.emoji(),
        task.priority.label()
    );
    let _ = writeln!(
        out,
        "   • Assigned to: {}",
        assignee_name(store, task.assigned_to)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "📅 **Dates:**");
    let _ = writeln!(out, "   • Created: {}", format_date(task.created_date));
    let _ = writeln!(out, "   • Due: {}", format_opt_date(task.due_date));
    if let Some(completed) = task.completed_date {
        let _ = writeln!(out, "   • Completed: {}", format_date(completed));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "⏱️ **Time:**");
    let _ = writeln!(out, "   • Estimated: {}h", task.estimated_hours);
    let _ = writeln!(out, "   • Actual: {}h", task.actual_hours);
    let _ = writeln!(out, "   • Remaining: {}h", task.remaining_hours());
    if !task.tags.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "🏷️ **Tags:** {}", task.tags.join(", "));
    }
    Ok(out.trim_end().to_string())
}

pub fn get_tasks_by_status(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let status_name = args.require_string("status")?;
    let Some(status) = TaskStatus::from_name(&status_name) else {
        return Ok(format!(
            "❌ Invalid status. Available statuses: {}",
            TaskStatus::VALID_NAMES
        ));
    };

    let tasks = store.tasks_by_status(status);
    if tasks.is_empty() {
        return Ok(format!("No tasks found with status '{}'.", status.label()));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "📋 **TASKS WITH STATUS: {}** ({} found)",
        status.label().to_uppercase(),
        tasks.len()
    );
    for (project_name, task) in &tasks {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} **{}** (ID: {})",
            task.status.emoji(),
            task.title,
            task.id
        );
        let _ = writeln!(out, "   └─ Project: {project_name}");
        let _ = writeln!(
            out,
            "   └─ Assigned to: {}",
            assignee_name(store, task.assigned_to)
        );
        let _ = writeln!(
            out,
            "   └─ Priority: {} {}",
            task.priority.emoji(),
            task.priority.label()
        );
        let _ = writeln!(out, "   └─ Due: {}", format_opt_date(task.due_date));
    }
    Ok(out.trim_end().to_string())
}

pub fn get_project_statistics(store: &Store, _args: &ToolArgs) -> Result<String, ToolError> {
    let stats = store.statistics();
    let total_budget: u64 = store.projects().iter().map(|p| p.budget).sum();
    #[allow(clippy::cast_precision_loss)]
    let completion_rate = if stats.total_tasks > 0 {
        stats.completed_tasks as f64 / stats.total_tasks as f64 * 100.0
    } else {
        0.0
    };

    let mut out = String::new();
    let _ = writeln!(out, "📊 **PROJECT SYSTEM STATISTICS**");
    let _ = writeln!(out);
    let _ = writeln!(out, "**📁 PROJECTS:**");
    let _ = writeln!(out, "   • Total projects: {}", stats.total_projects);
    let _ = writeln!(out, "   • In planning: {}", stats.planning_projects);
    let _ = writeln!(out, "   • In progress: {}", stats.active_projects);
    let _ = writeln!(out, "   • Completed: {}", stats.completed_projects);
    let _ = writeln!(out);
    let _ = writeln!(out, "**✅ TASKS:**");
    let _ = writeln!(out, "   • Total tasks: {}", stats.total_tasks);
    let _ = writeln!(out, "   • Completed: {}", stats.completed_tasks);
    let _ = writeln!(out, "   • In progress: {}", stats.in_progress_tasks);
    let _ = writeln!(out, "   • Blocked: {}", stats.blocked_tasks);
    let _ = writeln!(out);
    let _ = writeln!(out, "**💰 BUDGET:**");
    let _ = writeln!(out, "   • Total budget: {}", format_euros(total_budget));
    let _ = writeln!(out);
    let _ = write!(
        out,
        "**📈 OVERALL PROGRESS:** {completion_rate:.1}% of tasks completed"
    );
    Ok(out)
}

pub fn get_team_workload(store: &Store, _args: &ToolArgs) -> Result<String, ToolError> {
    let mut out = String::new();
    let _ = writeln!(out, "👥 **TEAM WORKLOAD**");

    for worker in store.workers() {
        let tasks = store.tasks_by_worker(worker.id);
        if tasks.is_empty() {
            continue;
        }

        let active = tasks
            .iter()
            .filter(|(_, t)| {
                t.status == TaskStatus::InProgress || t.status == TaskStatus::ToDo
            })
            .count();
        let outstanding_hours: i64 = tasks
            .iter()
            .filter(|(_, t)| t.status != TaskStatus::Completed)
            .map(|(_, t)| t.estimated_hours - t.actual_hours)
            .sum();

        let _ = writeln!(out);
        let _ = writeln!(out, "**{}** ({})", worker.name, worker.role);
        let _ = writeln!(
            out,
            "   └─ Active tasks: {active} | Total tasks: {}",
            tasks.len()
        );
        let _ = writeln!(out, "   └─ Outstanding hours: {outstanding_hours}h");
        let managed = store.projects_by_manager(worker.id).len();
        if managed > 0 {
            let _ = writeln!(
                out,
                "   └─ **Project Manager of {managed} project{}**",
                plural(managed)
            );
        }
    }
    Ok(out.trim_end().to_string())
}

fn assign_outcome_text(store: &Store, worker_id: i64, outcome: AssignOutcome) -> String {
    let worker = worker_name(store, worker_id);
    match outcome {
        AssignOutcome::ProjectNotFound => "❌ No project found.".to_string(),
        AssignOutcome::AlreadyAssigned { project_name } => {
            format!("⚠️ {worker} is already assigned to project '{project_name}'.")
        }
        AssignOutcome::Assigned {
            project_name,
            status,
            team_size,
        } => format!(
            "✅ **{worker}** has been successfully assigned to project **'{project_name}'**.\n\
             \u{20}  └─ Current team: {team_size} members\n\
             \u{20}  └─ Project: {project_name} ({})",
            status.label()
        ),
    }
}

pub fn assign_worker_to_project(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let project_id = args.require_i64("projectId")?;
    let worker_id = args.require_i64("workerId")?;

    if store.project_by_id(project_id).is_none() {
        return Ok(format!("❌ No project found with ID {project_id}."));
    }
    if store.worker_by_id(worker_id).is_none() {
        return Ok(format!("❌ No worker found with ID {worker_id}."));
    }

    let outcome = store.assign_worker(project_id, worker_id);
    Ok(assign_outcome_text(store, worker_id, outcome))
}

pub fn remove_worker_from_project(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let project_id = args.require_i64("projectId")?;
    let worker_id = args.require_i64("workerId")?;

    if store.project_by_id(project_id).is_none() {
        return Ok(format!("❌ No project found with ID {project_id}."));
    }
    if store.worker_by_id(worker_id).is_none() {
        return Ok(format!("❌ No worker found with ID {worker_id}."));
    }

    let worker = worker_name(store, worker_id);
    Ok(match store.remove_worker(project_id, worker_id) {
        RemoveOutcome::ProjectNotFound => format!("❌ No project found with ID {project_id}."),
        RemoveOutcome::NotAssigned { project_name } => {
            format!("⚠️ {worker} is not assigned to project '{project_name}'.")
        }
        RemoveOutcome::Removed {
            project_name,
            status,
            team_size,
        } => format!(
            "✅ **{worker}** has been removed from project **'{project_name}'**.\n\
             \u{20}  └─ Current team: {team_size} members\n\
             \u{20}  └─ Project: {project_name} ({})",
            status.label()
        ),
    })
}

pub fn assign_worker_by_name(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let worker_name_arg = args.require_string("workerName")?;
    let project_name_arg = args.require_string("projectName")?;

    let workers = store.search_workers(&worker_name_arg);
    if workers.is_empty() {
        return Ok(format!(
            "❌ No worker found with the name '{worker_name_arg}'."
        ));
    }
    if workers.len() > 1 {
        let candidates: Vec<String> = workers
            .iter()
            .map(|w| format!("{} (ID: {})", w.name, w.id))
            .collect();
        return Ok(format!(
            "⚠️ Found {} workers with that name: {}. Please specify the ID.",
            workers.len(),
            candidates.join(", ")
        ));
    }
    let worker_id = workers[0].id;

    let projects = store.search_projects(&project_name_arg);
    if projects.is_empty() {
        return Ok(format!(
            "❌ No project found with the name '{project_name_arg}'."
        ));
    }
    if projects.len() > 1 {
        let candidates: Vec<String> = projects
            .iter()
            .map(|p| format!("{} (ID: {})", p.name, p.id))
            .collect();
        return Ok(format!(
            "⚠️ Found {} projects with that name: {}. Please specify the ID.",
            projects.len(),
            candidates.join(", ")
        ));
    }
    let project_id = projects[0].id;

    let outcome = store.assign_worker(project_id, worker_id);
    Ok(assign_outcome_text(store, worker_id, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn call(
        store: &Store,
        f: fn(&Store, &ToolArgs) -> Result<String, ToolError>,
        value: Value,
    ) -> String {
        let map = args(value);
        f(store, &ToolArgs::new(Some(&map))).unwrap()
    }

    #[test]
    fn all_projects_lists_budgets_and_teams() {
        let store = Store::seeded();
        let text = get_all_projects(&store, &ToolArgs::empty()).unwrap();
        assert!(text.starts_with("📊 **PROJECT SUMMARY** (5 total)"));
        assert!(text.contains("└─ Budget: €250,000"));
        assert!(text.contains("└─ Team: [1,6,8] | Tasks: 4"));
    }

    #[test]
    fn project_detail_groups_tasks_by_status() {
        let store = Store::seeded();
        let text = call(&store, get_project_by_id, json!({"id": 1}));
        assert!(text.contains("🚀 **Azure Cloud Migration** (ID: 1)"));
        assert!(text.contains("✅ **Tasks:** (4 total)"));
        assert!(text.contains("   • To Do: 1"));
        assert!(text.contains("   • In Progress: 2"));
        assert!(text.contains("   • Completed: 1"));
    }

    #[test]
    fn project_lookup_misses_are_text() {
        let store = Store::seeded();
        assert_eq!(
            call(&store, get_project_by_id, json!({"id": 9})),
            "❌ No project found with ID 9."
        );
    }

    #[test]
    fn projects_by_status_validates_the_name() {
        let store = Store::seeded();
        let text = call(&store, get_projects_by_status, json!({"status": "Done"}));
        assert!(text.starts_with("❌ Invalid status."));
        assert!(text.contains("Planning, InProgress, OnHold, Completed, Cancelled"));

        let text = call(&store, get_projects_by_status, json!({"status": "planning"}));
        assert!(text.contains("PROJECTS WITH STATUS: PLANNING"));
        assert!(text.contains("(2 found)"));
    }

    #[test]
    fn projects_by_manager_checks_the_worker() {
        let store = Store::seeded();
        assert_eq!(
            call(&store, get_projects_by_manager, json!({"managerId": 50})),
            "❌ No worker found with ID 50."
        );
        let text = call(&store, get_projects_by_manager, json!({"managerId": 1}));
        assert_eq!(
            text,
            "Carlos Martínez López is not managing any projects at the moment."
        );
        let text = call(&store, get_projects_by_manager, json!({"managerId": 6}));
        assert!(text.contains("PROJECTS OF ALBERTO RAMÍREZ CRUZ"));
        assert!(text.contains("(1 project)"));
    }

    #[test]
    fn search_projects_matches_descriptions_too() {
        let store = Store::seeded();
        let text = call(&store, search_projects, json!({"searchTerm": "Colombia"}));
        assert!(text.contains("LATAM Market Expansion"));
    }

    #[test]
    fn tasks_by_project_groups_and_labels() {
        let store = Store::seeded();
        let text = call(&store, get_tasks_by_project, json!({"projectId": 4}));
        assert!(text.contains("TASKS FOR PROJECT: CLOUD ERP IMPLEMENTATION"));
        assert!(text.contains("(4 tasks)"));
        assert!(text.contains("**Blocked** (1):"));
        assert!(text.contains("Assigned to: Unassigned"));
    }

    #[test]
    fn tasks_by_worker_shows_project_and_hours() {
        let store = Store::seeded();
        let text = call(&store, get_tasks_by_worker, json!({"workerId": 8}));
        assert!(text.contains("TASKS FOR DAVID SILVA ROMERO"));
        assert!(text.contains("(3 tasks)"));
        assert!(text.contains("└─ Project: Azure Cloud Migration"));
        assert!(text.contains("Estimated: 120h | Actual: 65h"));
    }

    #[test]
    fn task_detail_includes_time_and_tags() {
        let store = Store::seeded();
        let text = call(&store, get_task_by_id, json!({"taskId": 101}));
        assert!(text.contains("✅ **Current infrastructure analysis** (ID: 101)"));
        assert!(text.contains("   • Completed: 28/01/2025"));
        assert!(text.contains("   • Remaining: 2h"));
        assert!(text.contains("🏷️ **Tags:** infrastructure, analysis"));
    }

    #[test]
    fn tasks_by_status_lists_matches() {
        let store = Store::seeded();
        let text = call(&store, get_tasks_by_status, json!({"status": "blocked"}));
        assert!(text.contains("TASKS WITH STATUS: BLOCKED"));
        assert!(text.contains("Historical data migration"));

        let text = call(&store, get_tasks_by_status, json!({"status": "bogus"}));
        assert!(text.contains("ToDo, InProgress, InReview, Blocked, Completed, Cancelled"));
    }

    #[test]
    fn statistics_report_totals_and_rate() {
        let store = Store::seeded();
        let text = get_project_statistics(&store, &ToolArgs::empty()).unwrap();
        assert!(text.contains("   • Total projects: 5"));
        assert!(text.contains("   • Total tasks: 16"));
        assert!(text.contains("   • Total budget: €1,405,000"));
        assert!(text.contains("**📈 OVERALL PROGRESS:** 18.8% of tasks completed"));
    }

    #[test]
    fn workload_skips_workers_without_tasks() {
        let store = Store::seeded();
        let text = get_team_workload(&store, &ToolArgs::empty()).unwrap();
        assert!(text.starts_with("👥 **TEAM WORKLOAD**"));
        // Worker 3 has two tasks and manages one project.
        assert!(text.contains("**Ricardo Sánchez Torres** (Project Manager)"));
        assert!(text.contains("**Project Manager of 1 project**"));
        // Worker 4 has tasks in two projects.
        assert!(text.contains("**Miguel Ángel Ruiz** (Manager)"));
    }

    #[test]
    fn assign_and_remove_round_trip() {
        let store = Store::seeded();
        let text = call(
            &store,
            assign_worker_to_project,
            json!({"projectId": 2, "workerId": 1}),
        );
        assert!(text.contains("has been successfully assigned to project **'Corporate Web Portal Revamp'**"));
        assert!(text.contains("Current team: 3 members"));

        let text = call(
            &store,
            assign_worker_to_project,
            json!({"projectId": 2, "workerId": 1}),
        );
        assert!(text.starts_with("⚠️ Carlos Martínez López is already assigned"));

        let text = call(
            &store,
            remove_worker_from_project,
            json!({"projectId": 2, "workerId": 1}),
        );
        assert!(text.contains("has been removed from project"));

        let text = call(
            &store,
            remove_worker_from_project,
            json!({"projectId": 2, "workerId": 1}),
        );
        assert!(text.starts_with("⚠️ Carlos Martínez López is not assigned"));
    }

    #[test]
    fn assign_validates_ids_as_text() {
        let store = Store::seeded();
        assert_eq!(
            call(
                &store,
                assign_worker_to_project,
                json!({"projectId": 42, "workerId": 1}),
            ),
            "❌ No project found with ID 42."
        );
        assert_eq!(
            call(
                &store,
                assign_worker_to_project,
                json!({"projectId": 1, "workerId": 42}),
            ),
            "❌ No worker found with ID 42."
        );
    }

    #[test]
    fn assign_by_name_rejects_ambiguity() {
        let store = Store::seeded();
        let text = call(
            &store,
            assign_worker_by_name,
            json!({"workerName": "or", "projectName": "portal"}),
        );
        assert!(text.starts_with("⚠️ Found 2 workers with that name:"));
        assert!(text.contains("Ricardo Sánchez Torres (ID: 3)"));
        assert!(text.contains("Please specify the ID."));

        let text = call(
            &store,
            assign_worker_by_name,
            json!({"workerName": "patricia", "projectName": "cloud"}),
        );
        assert!(text.starts_with("⚠️ Found "));
        assert!(text.contains("projects with that name:"));
    }

    #[test]
    fn assign_by_name_resolves_unique_matches() {
        let store = Store::seeded();
        let text = call(
            &store,
            assign_worker_by_name,
            json!({"workerName": "Patricia", "projectName": "portal"}),
        );
        assert!(text.contains(
            "**Patricia Moreno Díaz** has been successfully assigned to project \
             **'Corporate Web Portal Revamp'**"
        ));

        let text = call(
            &store,
            assign_worker_by_name,
            json!({"workerName": "nobody", "projectName": "portal"}),
        );
        assert_eq!(text, "❌ No worker found with the name 'nobody'.");
    }
}
