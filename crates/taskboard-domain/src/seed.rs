//! Demo fixtures. The store ships with no backend, so a fresh workspace
//! is seeded with one project and a small team to render against.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    comment::Comment,
    project::Project,
    task::{Task, TaskPriority, TaskStatus},
    user::{User, UserRole},
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The demo team. The first member is the session user installed by
/// login.
pub fn demo_team() -> Vec<User> {
    vec![
        User {
            id: Uuid::new_v4(),
            name: "Emaya".to_string(),
            email: "emaya@company".to_string(),
            avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg".to_string(),
            role: UserRole::Manager,
        },
        User {
            id: Uuid::new_v4(),
            name: "Sarah Chen".to_string(),
            email: "sarah@company".to_string(),
            avatar: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg".to_string(),
            role: UserRole::Developer,
        },
        User {
            id: Uuid::new_v4(),
            name: "Priya Patel".to_string(),
            email: "priya@company".to_string(),
            avatar: "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg".to_string(),
            role: UserRole::Developer,
        },
    ]
}

/// One seeded project with a task in every board column.
pub fn demo_projects(team: &[User]) -> Vec<Project> {
    let members: Vec<_> = team.iter().map(|user| user.id).collect();
    let assignee = |index: usize| team.get(index).map(|user| user.id);

    let seeded = at(2024, 1, 15, 8, 0);
    let mut tasks = vec![
        Task {
            id: Uuid::new_v4(),
            title: "Design wireframes".to_string(),
            description: "Create initial wireframes for the new homepage layout".to_string(),
            status: TaskStatus::Done,
            priority: TaskPriority::High,
            assignee_id: assignee(0),
            due_date: date(2024, 1, 20),
            created_at: at(2024, 1, 15, 8, 0),
            updated_at: at(2024, 1, 15, 8, 0),
            comments: Vec::new(),
            attachments: Vec::new(),
            labels: vec!["design".to_string(), "ui".to_string()],
        },
        Task {
            id: Uuid::new_v4(),
            title: "Implement responsive navigation".to_string(),
            description: "Build mobile-first navigation component with smooth animations"
                .to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            assignee_id: assignee(1),
            due_date: date(2024, 1, 25),
            created_at: at(2024, 1, 15, 9, 0),
            updated_at: at(2024, 1, 15, 9, 0),
            comments: Vec::new(),
            attachments: Vec::new(),
            labels: vec!["frontend".to_string(), "mobile".to_string()],
        },
        Task {
            id: Uuid::new_v4(),
            title: "Set up analytics tracking".to_string(),
            description: "Integrate analytics and set up conversion tracking".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Low,
            assignee_id: None,
            due_date: date(2024, 2, 1),
            created_at: at(2024, 1, 15, 10, 0),
            updated_at: at(2024, 1, 15, 10, 0),
            comments: Vec::new(),
            attachments: Vec::new(),
            labels: vec!["analytics".to_string()],
        },
        Task {
            id: Uuid::new_v4(),
            title: "User testing session".to_string(),
            description: "Conduct usability testing with 5 target users".to_string(),
            status: TaskStatus::Review,
            priority: TaskPriority::High,
            assignee_id: assignee(2),
            due_date: date(2024, 1, 28),
            created_at: at(2024, 1, 15, 11, 0),
            updated_at: at(2024, 1, 15, 11, 0),
            comments: Vec::new(),
            attachments: Vec::new(),
            labels: vec!["testing".to_string(), "ux".to_string()],
        },
    ];

    if let Some(author) = team.get(1) {
        tasks[1].comments.push(Comment {
            id: Uuid::new_v4(),
            content: "Started working on the mobile menu component".to_string(),
            author_id: author.id,
            author_name: author.name.clone(),
            created_at: at(2024, 1, 16, 10, 0),
        });
    }

    vec![Project {
        id: Uuid::new_v4(),
        name: "Website Redesign".to_string(),
        description: "Complete redesign of company website".to_string(),
        color: "#6366F1".to_string(),
        created_at: seeded,
        members,
        tasks,
    }]
}
