//! Worker directory tools.

use std::fmt::Write as _;

use crate::error::ToolError;
use crate::mcp::args::ToolArgs;
use crate::store::{Store, Worker};

fn format_worker(worker: &Worker) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "👤 {}", worker.name);
    let _ = writeln!(out, "📋 Role: {}", worker.role);
    let _ = writeln!(out, "🏢 Department: {}", worker.department);
    let _ = writeln!(out, "📧 Email: {}", worker.email);
    let _ = writeln!(out, "📱 Phone: {}", worker.phone);
    let _ = writeln!(out, "📍 Location: {}", worker.location);
    let _ = write!(out, "🆔 ID: {}", worker.id);
    out
}

fn format_worker_short(worker: &Worker) -> String {
    format!(
        "• [ID:{}] {} - {} ({})",
        worker.id, worker.name, worker.role, worker.department
    )
}

pub fn get_worker_by_id(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let id = args.require_i64("id")?;
    Ok(store.worker_by_id(id).map_or_else(
        || format!("No worker found with ID {id}."),
        format_worker,
    ))
}

pub fn get_all_workers(store: &Store, _args: &ToolArgs) -> Result<String, ToolError> {
    let workers = store.workers();
    if workers.is_empty() {
        return Ok("There are no workers registered in the system.".to_string());
    }

    let mut out = String::new();
    let _ = writeln!(out, "Complete worker list ({} total):", workers.len());
    for worker in workers {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", format_worker_short(worker));
    }
    Ok(out.trim_end().to_string())
}

pub fn search_workers_by_name(store: &Store, args: &ToolArgs) -> Result<String, ToolError> {
    let name = args.require_string("name")?;
    if name.trim().is_empty() {
        return Ok("Please provide a name to search for.".to_string());
    }

    let workers = store.search_workers(&name);
    if workers.is_empty() {
        return Ok(format!("No workers found with the name '{name}'."));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Search results for '{name}' ({} found):",
        workers.len()
    );
    for (i, worker) in workers.iter().enumerate() {
        let _ = writeln!(out);
        if i > 0 {
            let _ = writeln!(out, "---");
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}", format_worker(worker));
    }
    Ok(out.trim_end().to_string())
}
