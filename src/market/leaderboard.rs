//! Leaderboard aggregation over the task collection.
//!
//! Mentors and students are keyed by display name, so two people sharing a
//! name are counted as one. Everything is recomputed from scratch on each call.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Task;

pub const TOP_MENTORS: usize = 5;
pub const TOP_STUDENTS: usize = 5;
pub const POPULAR_TASKS: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MentorStats {
    pub name: String,
    /// Email of the first task seen for this name.
    pub email: String,
    pub tasks_posted: usize,
    pub total_upvotes: u64,
    pub total_submissions: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub name: String,
    pub email: String,
    pub submissions: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub top_mentors: Vec<MentorStats>,
    pub top_students: Vec<StudentStats>,
    pub popular_tasks: Vec<Task>,
}

impl Leaderboard {
    pub fn compute(tasks: &[Task]) -> Self {
        Self {
            top_mentors: top_mentors(tasks, TOP_MENTORS),
            top_students: top_students(tasks, TOP_STUDENTS),
            popular_tasks: popular_tasks(tasks, POPULAR_TASKS)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Group items by display name, keeping groups in first-seen order.
fn group_by_name<'a, T: 'a, S>(
    items: impl IntoIterator<Item = &'a T>,
    name: impl Fn(&T) -> &str,
    init: impl Fn(&T) -> S,
    mut merge: impl FnMut(&mut S, &T),
) -> Vec<S> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<S> = Vec::new();
    for item in items {
        let slot = *index.entry(name(item)).or_insert_with(|| {
            groups.push(init(item));
            groups.len() - 1
        });
        merge(&mut groups[slot], item);
    }
    groups
}

/// Mentors ranked by total upvotes; ties keep first-seen order.
pub fn top_mentors(tasks: &[Task], limit: usize) -> Vec<MentorStats> {
    let mut mentors = group_by_name(
        tasks,
        |t| t.mentor_name.as_str(),
        |t| MentorStats {
            name: t.mentor_name.clone(),
            email: t.mentor_email.clone(),
            tasks_posted: 0,
            total_upvotes: 0,
            total_submissions: 0,
        },
        |stats, t| {
            stats.tasks_posted += 1;
            stats.total_upvotes += t.upvotes;
            stats.total_submissions += t.submissions.len();
        },
    );
    mentors.sort_by(|a, b| b.total_upvotes.cmp(&a.total_upvotes));
    mentors.truncate(limit);
    mentors
}

/// Students ranked by submission count; ties keep first-seen order.
pub fn top_students(tasks: &[Task], limit: usize) -> Vec<StudentStats> {
    let mut students = group_by_name(
        tasks.iter().flat_map(|t| t.submissions.iter()),
        |s| s.student_name.as_str(),
        |s| StudentStats {
            name: s.student_name.clone(),
            email: s.student_email.clone(),
            submissions: 0,
        },
        |stats, _| stats.submissions += 1,
    );
    students.sort_by(|a, b| b.submissions.cmp(&a.submissions));
    students.truncate(limit);
    students
}

/// Tasks ranked by upvotes; ties keep collection order.
pub fn popular_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut ranked: Vec<&Task> = tasks.iter().collect();
    ranked.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    ranked.truncate(limit);
    ranked
}
