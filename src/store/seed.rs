//! Fixed seed data loaded once at startup.
//!
//! The data set is small on purpose: eight workers and five projects with
//! enough task variety (states, priorities, unassigned tasks) to exercise
//! every query tool.

use chrono::NaiveDate;

use super::models::{Project, ProjectStatus, ProjectTask, TaskPriority, TaskStatus, Worker};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn worker(
    id: i64,
    name: &str,
    department: &str,
    role: &str,
    email: &str,
    phone: &str,
    location: &str,
) -> Worker {
    Worker {
        id,
        name: name.to_string(),
        department: department.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
    }
}

/// The fixed worker roster.
#[must_use]
pub fn workers() -> Vec<Worker> {
    vec![
        worker(
            1,
            "Carlos Martínez López",
            "DAR",
            "Chief Architect",
            "carlos.martinez@empresa.com",
            "+34 912 345 001",
            "Valencia, Spain",
        ),
        worker(
            2,
            "Luis Fernando García",
            "DAR",
            "Chief Architect",
            "luis.garcia@empresa.com",
            "+34 912 345 002",
            "Valencia, Spain",
        ),
        worker(
            3,
            "Ricardo Sánchez Torres",
            "DAR",
            "Project Manager",
            "ricardo.sanchez@empresa.com",
            "+34 912 345 003",
            "Valencia, Spain",
        ),
        worker(
            4,
            "Miguel Ángel Ruiz",
            "DAR",
            "Manager",
            "miguel.ruiz@empresa.com",
            "+34 912 345 004",
            "Valencia, Spain",
        ),
        worker(
            5,
            "Antonio Fernández Vega",
            "DAR",
            "Director",
            "antonio.fernandez@empresa.com",
            "+34 912 345 005",
            "Valencia, Spain",
        ),
        worker(
            6,
            "Alberto Ramírez Cruz",
            "DAR",
            "Junior Engineer",
            "alberto.ramirez@empresa.com",
            "+34 912 345 006",
            "Valencia, Spain",
        ),
        worker(
            7,
            "Patricia Moreno Díaz",
            "Operations",
            "Operations Coordinator",
            "patricia.moreno@empresa.com",
            "+34 912 345 007",
            "Bilbao, Spain",
        ),
        worker(
            8,
            "David Silva Romero",
            "IT - Development",
            "Tech Lead Frontend",
            "david.silva@empresa.com",
            "+34 912 345 008",
            "Madrid, Spain",
        ),
    ]
}

#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
fn task(
    id: i64,
    project_id: i64,
    title: &str,
    description: &str,
    assigned_to: Option<i64>,
    status: TaskStatus,
    priority: TaskPriority,
    created: NaiveDate,
    due: Option<NaiveDate>,
    completed: Option<NaiveDate>,
    estimated_hours: i64,
    actual_hours: i64,
    tags: &[&str],
) -> ProjectTask {
    ProjectTask {
        id,
        project_id,
        title: title.to_string(),
        description: description.to_string(),
        assigned_to,
        status,
        priority,
        created_date: created,
        due_date: due,
        completed_date: completed,
        estimated_hours,
        actual_hours,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// The fixed project portfolio, tasks included.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Azure Cloud Migration".to_string(),
            description: "Full migration of on-premise infrastructure to Azure Cloud, \
                          including databases, applications and services."
                .to_string(),
            start_date: date(2025, 1, 15),
            end_date: Some(date(2025, 6, 30)),
            status: ProjectStatus::InProgress,
            manager_id: 6,
            priority: "High".to_string(),
            budget: 250_000,
            team_member_ids: vec![1, 6, 8],
            tasks: vec![
                task(
                    101,
                    1,
                    "Current infrastructure analysis",
                    "Document all existing on-premise infrastructure",
                    Some(6),
                    TaskStatus::Completed,
                    TaskPriority::High,
                    date(2025, 1, 15),
                    Some(date(2025, 2, 1)),
                    Some(date(2025, 1, 28)),
                    40,
                    38,
                    &["infrastructure", "analysis"],
                ),
                task(
                    102,
                    1,
                    "Set up Azure Landing Zone",
                    "Establish the base Azure architecture with networking, security and governance",
                    Some(6),
                    TaskStatus::InProgress,
                    TaskPriority::Critical,
                    date(2025, 2, 1),
                    Some(date(2025, 3, 15)),
                    None,
                    80,
                    45,
                    &["azure", "setup", "security"],
                ),
                task(
                    103,
                    1,
                    "Migrate databases to Azure SQL",
                    "Migration of SQL Server databases to Azure SQL Database",
                    Some(1),
                    TaskStatus::ToDo,
                    TaskPriority::High,
                    date(2025, 2, 15),
                    Some(date(2025, 4, 30)),
                    None,
                    60,
                    0,
                    &["database", "migration"],
                ),
                task(
                    104,
                    1,
                    "Build CI/CD pipeline",
                    "Implement Azure DevOps pipelines for automatic deployment",
                    Some(8),
                    TaskStatus::InProgress,
                    TaskPriority::Medium,
                    date(2025, 2, 20),
                    Some(date(2025, 4, 1)),
                    None,
                    50,
                    25,
                    &["devops", "ci/cd", "automation"],
                ),
            ],
        },
        Project {
            id: 2,
            name: "Corporate Web Portal Revamp".to_string(),
            description: "Complete redesign of the corporate web portal with new features \
                          and a modern responsive design."
                .to_string(),
            start_date: date(2025, 2, 1),
            end_date: Some(date(2025, 5, 31)),
            status: ProjectStatus::InProgress,
            manager_id: 8,
            priority: "Medium".to_string(),
            budget: 120_000,
            team_member_ids: vec![8, 4],
            tasks: vec![
                task(
                    201,
                    2,
                    "UX/UI design for the new portal",
                    "Create mockups and interactive prototypes of the new design",
                    Some(4),
                    TaskStatus::Completed,
                    TaskPriority::High,
                    date(2025, 2, 1),
                    Some(date(2025, 2, 28)),
                    Some(date(2025, 2, 25)),
                    60,
                    55,
                    &["design", "ux", "ui"],
                ),
                task(
                    202,
                    2,
                    "Frontend development with React",
                    "Implement the new frontend using React and TypeScript",
                    Some(8),
                    TaskStatus::InProgress,
                    TaskPriority::High,
                    date(2025, 3, 1),
                    Some(date(2025, 4, 30)),
                    None,
                    120,
                    65,
                    &["react", "frontend", "typescript"],
                ),
                task(
                    203,
                    2,
                    "CMS integration",
                    "Integrate the portal with the content management system",
                    Some(8),
                    TaskStatus::ToDo,
                    TaskPriority::Medium,
                    date(2025, 3, 15),
                    Some(date(2025, 5, 15)),
                    None,
                    40,
                    0,
                    &["cms", "integration"],
                ),
            ],
        },
        Project {
            id: 3,
            name: "Q2 Digital Marketing Campaign".to_string(),
            description: "End-to-end digital marketing campaign for the second quarter, \
                          focused on social media and SEO content."
                .to_string(),
            start_date: date(2025, 4, 1),
            end_date: Some(date(2025, 6, 30)),
            status: ProjectStatus::Planning,
            manager_id: 4,
            priority: "High".to_string(),
            budget: 85_000,
            team_member_ids: vec![4, 3],
            tasks: vec![
                task(
                    301,
                    3,
                    "Q2 content strategy",
                    "Define the editorial calendar and topics for the quarter",
                    Some(4),
                    TaskStatus::InProgress,
                    TaskPriority::High,
                    date(2025, 3, 15),
                    Some(date(2025, 3, 31)),
                    None,
                    30,
                    15,
                    &["strategy", "content", "planning"],
                ),
                task(
                    302,
                    3,
                    "Set up Google Ads campaigns",
                    "Create and configure Google Ads campaigns for the main products",
                    Some(4),
                    TaskStatus::ToDo,
                    TaskPriority::High,
                    date(2025, 3, 20),
                    Some(date(2025, 4, 10)),
                    None,
                    25,
                    0,
                    &["google-ads", "sem", "advertising"],
                ),
                task(
                    303,
                    3,
                    "Produce promotional videos",
                    "Create 10 short videos for social media",
                    None,
                    TaskStatus::ToDo,
                    TaskPriority::Medium,
                    date(2025, 3, 25),
                    Some(date(2025, 5, 1)),
                    None,
                    50,
                    0,
                    &["video", "social-media", "content"],
                ),
            ],
        },
        Project {
            id: 4,
            name: "Cloud ERP Implementation".to_string(),
            description: "Implementation of a cloud ERP system to centralise financial \
                          and human-resources operations."
                .to_string(),
            start_date: date(2025, 3, 1),
            end_date: Some(date(2025, 12, 31)),
            status: ProjectStatus::InProgress,
            manager_id: 7,
            priority: "High".to_string(),
            budget: 450_000,
            team_member_ids: vec![7, 2, 5],
            tasks: vec![
                task(
                    401,
                    4,
                    "ERP requirements analysis",
                    "Gather requirements from every area involved",
                    Some(7),
                    TaskStatus::Completed,
                    TaskPriority::Critical,
                    date(2025, 3, 1),
                    Some(date(2025, 3, 31)),
                    Some(date(2025, 3, 28)),
                    80,
                    85,
                    &["requirements", "analysis"],
                ),
                task(
                    402,
                    4,
                    "HR module configuration",
                    "Configure the ERP human-resources module",
                    Some(2),
                    TaskStatus::InProgress,
                    TaskPriority::High,
                    date(2025, 4, 1),
                    Some(date(2025, 6, 30)),
                    None,
                    100,
                    30,
                    &["hr", "configuration", "erp"],
                ),
                task(
                    403,
                    4,
                    "Finance module configuration",
                    "Configure the ERP finance and accounting module",
                    Some(5),
                    TaskStatus::InProgress,
                    TaskPriority::High,
                    date(2025, 4, 1),
                    Some(date(2025, 7, 31)),
                    None,
                    120,
                    25,
                    &["finance", "accounting", "erp"],
                ),
                task(
                    404,
                    4,
                    "Historical data migration",
                    "Migrate historical data from the legacy system to the new ERP",
                    None,
                    TaskStatus::Blocked,
                    TaskPriority::High,
                    date(2025, 4, 15),
                    Some(date(2025, 8, 31)),
                    None,
                    150,
                    0,
                    &["migration", "data", "blocked"],
                ),
            ],
        },
        Project {
            id: 5,
            name: "LATAM Market Expansion".to_string(),
            description: "Commercial expansion strategy for Latin American markets, \
                          starting with Mexico and Colombia."
                .to_string(),
            start_date: date(2025, 5, 1),
            end_date: Some(date(2025, 12, 31)),
            status: ProjectStatus::Planning,
            manager_id: 3,
            priority: "High".to_string(),
            budget: 500_000,
            team_member_ids: vec![3, 4],
            tasks: vec![
                task(
                    501,
                    5,
                    "LATAM market research",
                    "Carry out market analysis in Mexico, Colombia and Argentina",
                    Some(3),
                    TaskStatus::ToDo,
                    TaskPriority::Critical,
                    date(2025, 4, 15),
                    Some(date(2025, 5, 31)),
                    None,
                    60,
                    0,
                    &["market-research", "latam", "analysis"],
                ),
                task(
                    502,
                    5,
                    "Identify local partners",
                    "Contact and evaluate potential commercial partners in each country",
                    Some(3),
                    TaskStatus::ToDo,
                    TaskPriority::High,
                    date(2025, 5, 1),
                    Some(date(2025, 7, 31)),
                    None,
                    80,
                    0,
                    &["partnerships", "networking"],
                ),
            ],
        },
    ]
}
