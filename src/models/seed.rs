//! Example tasks used when no task collection has been persisted yet.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::{Difficulty, Task};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d).and_time(NaiveTime::MIN).and_utc()
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    skill_tags: &[&str],
    deadline: NaiveDate,
    difficulty: Difficulty,
    expected_outcome: &str,
    mentor: (&str, &str),
    created_at: DateTime<Utc>,
    upvotes: u64,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        skill_tags: skill_tags.iter().map(|s| s.to_string()).collect(),
        deadline,
        difficulty,
        expected_outcome: expected_outcome.to_string(),
        mentor_name: mentor.0.to_string(),
        mentor_email: mentor.1.to_string(),
        created_at,
        upvotes,
        submissions: Vec::new(),
    }
}

/// The five starter tasks.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        task(
            "1",
            "Build a Smart To-Do App with AI Categorization",
            "Create a modern to-do application that uses AI to automatically categorize tasks and suggest priorities based on user behavior patterns.",
            &["AI", "Web Dev", "React", "Node.js"],
            date(2025, 2, 15),
            Difficulty::Intermediate,
            "GitHub repository with deployed app and README documentation",
            ("Sarah Chen", "sarah.chen@techcorp.com"),
            midnight(2025, 1, 1),
            24,
        ),
        task(
            "2",
            "Cybersecurity Vulnerability Scanner",
            "Develop a web-based tool that scans websites for common security vulnerabilities and provides actionable recommendations.",
            &["Cybersecurity", "Python", "Web Security"],
            date(2025, 2, 28),
            Difficulty::Advanced,
            "Python application with comprehensive security report generation",
            ("Michael Rodriguez", "michael.r@securetech.com"),
            midnight(2025, 1, 3),
            18,
        ),
        task(
            "3",
            "Personal Finance Dashboard",
            "Create an intuitive dashboard for tracking personal expenses, budgeting, and financial goal setting with data visualizations.",
            &["Web Dev", "Data Visualization", "React"],
            date(2025, 2, 10),
            Difficulty::Beginner,
            "Interactive web application with charts and expense tracking",
            ("Emily Johnson", "emily.j@fintech.com"),
            midnight(2025, 1, 5),
            31,
        ),
        task(
            "4",
            "Machine Learning Image Classifier",
            "Build an image classification model that can identify different types of plants and provide care recommendations.",
            &["ML", "Python", "TensorFlow", "Computer Vision"],
            date(2025, 3, 1),
            Difficulty::Advanced,
            "Trained ML model with web interface for image uploads",
            ("Dr. Alex Kim", "alex.kim@ai-labs.com"),
            midnight(2025, 1, 7),
            27,
        ),
        task(
            "5",
            "Social Media Content Scheduler",
            "Develop a tool that helps users schedule and manage their social media posts across multiple platforms with analytics.",
            &["Web Dev", "API Integration", "Social Media"],
            date(2025, 2, 20),
            Difficulty::Intermediate,
            "Web application with API integrations and scheduling features",
            ("Jessica Liu", "jessica.liu@socialtech.com"),
            midnight(2025, 1, 10),
            22,
        ),
    ]
}
