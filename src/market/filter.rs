//! Task search and filtering.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Difficulty, Task};

/// Browse-page filter state. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub skill_tag: String,
    pub difficulty: Option<Difficulty>,
}

/// Query parameters for the task listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub skill_tag: String,
    #[serde(default)]
    pub difficulty: String,
}

impl TryFrom<TaskFilterQuery> for TaskFilter {
    type Error = AppError;

    fn try_from(query: TaskFilterQuery) -> Result<Self, Self::Error> {
        let difficulty = if query.difficulty.is_empty() {
            None
        } else {
            Some(query.difficulty.parse()?)
        };
        Ok(TaskFilter {
            search: query.search,
            skill_tag: query.skill_tag,
            difficulty,
        })
    }
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.skill_tag.is_empty() && self.difficulty.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.matches_skill(task) && self.matches_difficulty(task)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&needle);

        hit(&task.title)
            || hit(&task.description)
            || hit(&task.mentor_name)
            || hit(&task.expected_outcome)
            || task.skill_tags.iter().any(|tag| hit(tag))
    }

    fn matches_skill(&self, task: &Task) -> bool {
        self.skill_tag.is_empty() || task.skill_tags.iter().any(|t| *t == self.skill_tag)
    }

    fn matches_difficulty(&self, task: &Task) -> bool {
        self.difficulty.map_or(true, |d| d == task.difficulty)
    }
}

/// Tasks matching `filter`, in their original order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Every distinct skill tag across all tasks, sorted.
pub fn available_skills(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .flat_map(|t| t.skill_tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_tasks;

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn search(text: &str) -> TaskFilter {
        TaskFilter {
            search: text.to_string(),
            ..TaskFilter::default()
        }
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let tasks = seed_tasks();
        let result = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let tasks = seed_tasks();
        // mentor name
        assert_eq!(ids(&filter_tasks(&tasks, &search("EMILY"))), vec!["3"]);
        // expected outcome
        assert_eq!(ids(&filter_tasks(&tasks, &search("image uploads"))), vec!["4"]);
        // skill tag substring
        assert_eq!(ids(&filter_tasks(&tasks, &search("tensor"))), vec!["4"]);
        // description
        assert_eq!(
            ids(&filter_tasks(&tasks, &search("vulnerabilities"))),
            vec!["2"]
        );
    }

    #[test]
    fn test_skill_tag_is_exact() {
        let tasks = seed_tasks();
        let filter = TaskFilter {
            skill_tag: "React".to_string(),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["1", "3"]);

        let lower = TaskFilter {
            skill_tag: "react".to_string(),
            ..TaskFilter::default()
        };
        assert!(filter_tasks(&tasks, &lower).is_empty());
    }

    #[test]
    fn test_predicates_combine() {
        let tasks = seed_tasks();
        let filter = TaskFilter {
            search: "security".to_string(),
            skill_tag: "Python".to_string(),
            difficulty: Some(Difficulty::Advanced),
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["2"]);

        let none = TaskFilter {
            difficulty: Some(Difficulty::Beginner),
            skill_tag: "ML".to_string(),
            ..TaskFilter::default()
        };
        assert!(filter_tasks(&tasks, &none).is_empty());
    }

    #[test]
    fn test_result_is_subsequence() {
        let tasks = seed_tasks();
        let result = filter_tasks(&tasks, &search("dev"));
        let positions: Vec<usize> = result
            .iter()
            .map(|r| tasks.iter().position(|t| t.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!positions.is_empty());
    }

    #[test]
    fn test_available_skills_sorted_unique() {
        let tasks = seed_tasks();
        let skills = available_skills(&tasks);
        assert_eq!(skills.iter().filter(|s| *s == "Web Dev").count(), 1);
        assert_eq!(skills.first().map(String::as_str), Some("AI"));
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
        assert_eq!(skills.len(), 13);
    }

    #[test]
    fn test_query_conversion() {
        let filter = TaskFilter::try_from(TaskFilterQuery {
            difficulty: "Intermediate".to_string(),
            ..TaskFilterQuery::default()
        })
        .unwrap();
        assert_eq!(filter.difficulty, Some(Difficulty::Intermediate));
        assert!(TaskFilter::try_from(TaskFilterQuery::default())
            .unwrap()
            .is_empty());
        assert!(TaskFilter::try_from(TaskFilterQuery {
            difficulty: "Expert".to_string(),
            ..TaskFilterQuery::default()
        })
        .is_err());
    }
}
