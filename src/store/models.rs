//! Domain records for the in-memory store.

use chrono::NaiveDate;

/// A member of staff who can manage projects and carry tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    /// Unique worker id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Department label.
    pub department: String,
    /// Role/position label.
    pub role: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Office location.
    pub location: String,
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProjectStatus {
    /// Being planned, not yet started.
    Planning,
    /// Actively running.
    InProgress,
    /// Paused.
    OnHold,
    /// Finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl ProjectStatus {
    /// All states, for error messages listing the valid names.
    pub const VALID_NAMES: &'static str = "Planning, InProgress, OnHold, Completed, Cancelled";

    /// Parses a status name case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "planning" => Some(Self::Planning),
            "inprogress" => Some(Self::InProgress),
            "onhold" => Some(Self::OnHold),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Status marker for formatted output.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Planning => "📋",
            Self::InProgress => "🚀",
            Self::OnHold => "⏸️",
            Self::Completed => "✅",
            Self::Cancelled => "❌",
        }
    }
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskStatus {
    /// Not started.
    ToDo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Blocked on something external.
    Blocked,
    /// Done.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl TaskStatus {
    /// All states, for error messages listing the valid names.
    pub const VALID_NAMES: &'static str =
        "ToDo, InProgress, InReview, Blocked, Completed, Cancelled";

    /// Parses a status name case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "todo" => Some(Self::ToDo),
            "inprogress" => Some(Self::InProgress),
            "inreview" => Some(Self::InReview),
            "blocked" => Some(Self::Blocked),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Blocked => "Blocked",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Status marker for formatted output.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ToDo => "⬜",
            Self::InProgress => "🔵",
            Self::InReview => "🟣",
            Self::Blocked => "🔴",
            Self::Completed => "✅",
            Self::Cancelled => "❌",
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal.
    Medium,
    /// Should be next.
    High,
    /// Drop everything.
    Critical,
}

impl TaskPriority {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Priority marker for formatted output.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

/// A project with its team and embedded tasks.
#[derive(Debug, Clone)]
pub struct Project {
    /// Unique project id.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Start date.
    pub start_date: NaiveDate,
    /// Estimated end date, if set.
    pub end_date: Option<NaiveDate>,
    /// Current lifecycle state.
    pub status: ProjectStatus,
    /// Worker id of the project manager.
    pub manager_id: i64,
    /// Free-form priority label ("High", "Medium", "Low").
    pub priority: String,
    /// Budget in whole euros.
    pub budget: u64,
    /// Worker ids on the team.
    pub team_member_ids: Vec<i64>,
    /// Tasks belonging to this project.
    pub tasks: Vec<ProjectTask>,
}

/// A single unit of work within a project.
#[derive(Debug, Clone)]
pub struct ProjectTask {
    /// Unique task id.
    pub id: i64,
    /// Owning project id.
    pub project_id: i64,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Worker id the task is assigned to, if any.
    pub assigned_to: Option<i64>,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Creation date.
    pub created_date: NaiveDate,
    /// Due date, if set.
    pub due_date: Option<NaiveDate>,
    /// Completion date, once done.
    pub completed_date: Option<NaiveDate>,
    /// Estimated effort in hours.
    pub estimated_hours: i64,
    /// Effort spent so far in hours.
    pub actual_hours: i64,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl ProjectTask {
    /// Hours still outstanding, never negative.
    #[must_use]
    pub const fn remaining_hours(&self) -> i64 {
        let remaining = self.estimated_hours - self.actual_hours;
        if remaining > 0 {
            remaining
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_parse_is_case_insensitive() {
        assert_eq!(
            ProjectStatus::from_name("inprogress"),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(
            ProjectStatus::from_name("InProgress"),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(ProjectStatus::from_name("PLANNING"), Some(ProjectStatus::Planning));
        assert_eq!(ProjectStatus::from_name("done"), None);
    }

    #[test]
    fn task_status_parse_is_case_insensitive() {
        assert_eq!(TaskStatus::from_name("todo"), Some(TaskStatus::ToDo));
        assert_eq!(TaskStatus::from_name("InReview"), Some(TaskStatus::InReview));
        assert_eq!(TaskStatus::from_name("unknown"), None);
    }

    #[test]
    fn remaining_hours_clamps_at_zero() {
        let task = ProjectTask {
            id: 1,
            project_id: 1,
            title: String::new(),
            description: String::new(),
            assigned_to: None,
            status: TaskStatus::Completed,
            priority: TaskPriority::Low,
            created_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            due_date: None,
            completed_date: None,
            estimated_hours: 10,
            actual_hours: 12,
            tags: vec![],
        };
        assert_eq!(task.remaining_hours(), 0);
    }
}
