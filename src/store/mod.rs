//! In-memory project and worker store.
//!
//! Workers form a fixed roster and are never mutated. Projects carry the only
//! mutable state (team membership), so they sit behind an [`RwLock`] and every
//! query hands back clones rather than leaking guard lifetimes. Assignment
//! checks and mutates under a single write lock so concurrent calls cannot
//! double-add a member.

use std::sync::RwLock;

pub mod models;
pub mod seed;

pub use models::{Project, ProjectStatus, ProjectTask, TaskStatus, Worker};

/// Portfolio-wide counters for the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStatistics {
    pub total_projects: usize,
    pub active_projects: usize,
    pub planning_projects: usize,
    pub completed_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub blocked_tasks: usize,
}

/// Result of an assignment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// No project exists with the given id.
    ProjectNotFound,
    /// The worker was already on the team; nothing changed.
    AlreadyAssigned { project_name: String },
    /// The worker was added.
    Assigned {
        project_name: String,
        status: ProjectStatus,
        team_size: usize,
    },
}

/// Result of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No project exists with the given id.
    ProjectNotFound,
    /// The worker was not on the team; nothing changed.
    NotAssigned { project_name: String },
    /// The worker was removed.
    Removed {
        project_name: String,
        status: ProjectStatus,
        team_size: usize,
    },
}

/// The shared data store backing every tool handler.
#[derive(Debug)]
pub struct Store {
    workers: Vec<Worker>,
    projects: RwLock<Vec<Project>>,
}

impl Store {
    /// Creates a store populated with the fixed seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            workers: seed::workers(),
            projects: RwLock::new(seed::projects()),
        }
    }

    fn read_projects(&self) -> std::sync::RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_projects(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    // ---- workers -----------------------------------------------------------

    /// The full roster.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Looks up a worker by id.
    #[must_use]
    pub fn worker_by_id(&self, id: i64) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Case-insensitive substring search over worker names. A blank term
    /// matches nothing.
    #[must_use]
    pub fn search_workers(&self, term: &str) -> Vec<&Worker> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.workers
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&term))
            .collect()
    }

    // ---- projects ----------------------------------------------------------

    /// Clones the full project list.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.read_projects().clone()
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn project_by_id(&self, id: i64) -> Option<Project> {
        self.read_projects().iter().find(|p| p.id == id).cloned()
    }

    /// Projects in the given lifecycle state.
    #[must_use]
    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.read_projects()
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    /// Projects managed by the given worker.
    #[must_use]
    pub fn projects_by_manager(&self, manager_id: i64) -> Vec<Project> {
        self.read_projects()
            .iter()
            .filter(|p| p.manager_id == manager_id)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over project names and descriptions.
    #[must_use]
    pub fn search_projects(&self, term: &str) -> Vec<Project> {
        let term = term.to_lowercase();
        self.read_projects()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    // ---- tasks -------------------------------------------------------------

    /// All tasks belonging to a project, or `None` if the project does not
    /// exist.
    #[must_use]
    pub fn tasks_by_project(&self, project_id: i64) -> Option<Vec<ProjectTask>> {
        self.read_projects()
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.tasks.clone())
    }

    /// All tasks assigned to a worker, paired with the owning project's name.
    #[must_use]
    pub fn tasks_by_worker(&self, worker_id: i64) -> Vec<(String, ProjectTask)> {
        self.read_projects()
            .iter()
            .flat_map(|p| {
                p.tasks
                    .iter()
                    .filter(|t| t.assigned_to == Some(worker_id))
                    .map(|t| (p.name.clone(), t.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// All tasks in a given state, paired with the owning project's name.
    #[must_use]
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<(String, ProjectTask)> {
        self.read_projects()
            .iter()
            .flat_map(|p| {
                p.tasks
                    .iter()
                    .filter(|t| t.status == status)
                    .map(|t| (p.name.clone(), t.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Looks up a task by id across all projects, returning the owning
    /// project's name alongside.
    #[must_use]
    pub fn task_by_id(&self, task_id: i64) -> Option<(String, ProjectTask)> {
        self.read_projects().iter().find_map(|p| {
            p.tasks
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| (p.name.clone(), t.clone()))
        })
    }

    // ---- mutations ---------------------------------------------------------

    /// Adds a worker to a project team. Idempotent: assigning a worker who is
    /// already on the team reports [`AssignOutcome::AlreadyAssigned`] without
    /// changing anything.
    pub fn assign_worker(&self, project_id: i64, worker_id: i64) -> AssignOutcome {
        let mut projects = self.write_projects();
        let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
            return AssignOutcome::ProjectNotFound;
        };
        if project.team_member_ids.contains(&worker_id) {
            return AssignOutcome::AlreadyAssigned {
                project_name: project.name.clone(),
            };
        }
        project.team_member_ids.push(worker_id);
        AssignOutcome::Assigned {
            project_name: project.name.clone(),
            status: project.status,
            team_size: project.team_member_ids.len(),
        }
    }

    /// Removes a worker from a project team. Removing a worker who is not on
    /// the team reports [`RemoveOutcome::NotAssigned`] without changing
    /// anything.
    pub fn remove_worker(&self, project_id: i64, worker_id: i64) -> RemoveOutcome {
        let mut projects = self.write_projects();
        let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
            return RemoveOutcome::ProjectNotFound;
        };
        if !project.team_member_ids.contains(&worker_id) {
            return RemoveOutcome::NotAssigned {
                project_name: project.name.clone(),
            };
        }
        project.team_member_ids.retain(|id| *id != worker_id);
        RemoveOutcome::Removed {
            project_name: project.name.clone(),
            status: project.status,
            team_size: project.team_member_ids.len(),
        }
    }

    // ---- reporting ---------------------------------------------------------

    /// Portfolio-wide counters.
    #[must_use]
    pub fn statistics(&self) -> ProjectStatistics {
        let projects = self.read_projects();
        let count_tasks = |status: TaskStatus| {
            projects
                .iter()
                .map(|p| p.tasks.iter().filter(|t| t.status == status).count())
                .sum()
        };
        ProjectStatistics {
            total_projects: projects.len(),
            active_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
            planning_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Planning)
                .count(),
            completed_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
            total_tasks: projects.iter().map(|p| p.tasks.len()).sum(),
            completed_tasks: count_tasks(TaskStatus::Completed),
            in_progress_tasks: count_tasks(TaskStatus::InProgress),
            blocked_tasks: count_tasks(TaskStatus::Blocked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_lookup_and_search() {
        let store = Store::seeded();
        assert_eq!(store.worker_by_id(1).map(|w| w.name.as_str()), Some("Carlos Martínez López"));
        assert!(store.worker_by_id(99).is_none());

        let hits = store.search_workers("martínez");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        assert!(store.search_workers("   ").is_empty());
    }

    #[test]
    fn project_queries() {
        let store = Store::seeded();
        assert_eq!(store.projects().len(), 5);
        assert_eq!(store.projects_by_status(ProjectStatus::Planning).len(), 2);
        assert_eq!(store.projects_by_manager(6).len(), 1);

        let hits = store.search_projects("cloud");
        assert!(hits.iter().any(|p| p.id == 1));
        assert!(hits.iter().any(|p| p.id == 4));
    }

    #[test]
    fn task_queries() {
        let store = Store::seeded();
        assert_eq!(store.tasks_by_project(1).map(|t| t.len()), Some(4));
        assert!(store.tasks_by_project(42).is_none());

        let blocked = store.tasks_by_status(TaskStatus::Blocked);
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].1.id, 404);

        let (project_name, task) = store.task_by_id(202).unwrap();
        assert_eq!(project_name, "Corporate Web Portal Revamp");
        assert_eq!(task.title, "Frontend development with React");
    }

    #[test]
    fn assign_is_idempotent() {
        let store = Store::seeded();
        match store.assign_worker(1, 3) {
            AssignOutcome::Assigned { team_size, .. } => assert_eq!(team_size, 4),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(matches!(
            store.assign_worker(1, 3),
            AssignOutcome::AlreadyAssigned { .. }
        ));
        assert_eq!(store.assign_worker(99, 3), AssignOutcome::ProjectNotFound);
    }

    #[test]
    fn remove_round_trip() {
        let store = Store::seeded();
        assert!(matches!(
            store.remove_worker(1, 3),
            RemoveOutcome::NotAssigned { .. }
        ));
        store.assign_worker(1, 3);
        match store.remove_worker(1, 3) {
            RemoveOutcome::Removed { team_size, .. } => assert_eq!(team_size, 3),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn statistics_reflect_seed_data() {
        let stats = Store::seeded().statistics();
        assert_eq!(stats.total_projects, 5);
        assert_eq!(stats.active_projects, 3);
        assert_eq!(stats.planning_projects, 2);
        assert_eq!(stats.completed_projects, 0);
        assert_eq!(stats.total_tasks, 16);
        assert_eq!(stats.completed_tasks, 3);
        assert_eq!(stats.in_progress_tasks, 6);
        assert_eq!(stats.blocked_tasks, 1);
    }
}
