//! Curriculum validation rules.
//!
//! - Course ids must be non-empty and unique
//! - Prerequisites must reference defined courses
//! - A course cannot require itself
//! - A prerequisite is listed at most once per course
//! - Prerequisites must not form a cycle (such courses can never unlock)

use crate::config::schema::CurriculumConfig;
use crate::error::{MallaError, Result};
use std::collections::{HashMap, HashSet};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Course id if the error is course-specific
    pub course: Option<String>,
}

/// Validate a curriculum and return all errors.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &CurriculumConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_ids(config));
    errors.extend(validate_prerequisites(config));
    errors.extend(validate_cycles(config));

    errors
}

fn validate_ids(config: &CurriculumConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for semester in &config.semesters {
        for course in &semester.courses {
            if course.id.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-id".to_string(),
                    message: format!("A course in '{}' has an empty id", semester.name),
                    course: None,
                });
                continue;
            }

            if !seen.insert(course.id.as_str()) {
                errors.push(ValidationError {
                    rule: "duplicate-id".to_string(),
                    message: format!("Course '{}' is defined more than once", course.id),
                    course: Some(course.id.clone()),
                });
            }
        }
    }

    errors
}

fn validate_prerequisites(config: &CurriculumConfig) -> Vec<ValidationError> {
    let known: HashSet<&str> = config.courses().map(|c| c.id.as_str()).collect();
    let mut errors = Vec::new();

    for course in config.courses() {
        let mut listed = HashSet::new();
        for prereq in &course.prerequisites {
            if !listed.insert(prereq.as_str()) {
                errors.push(ValidationError {
                    rule: "duplicate-prerequisite".to_string(),
                    message: format!(
                        "Course '{}' lists prerequisite '{}' more than once",
                        course.id, prereq
                    ),
                    course: Some(course.id.clone()),
                });
            } else if prereq == &course.id {
                errors.push(ValidationError {
                    rule: "self-prerequisite".to_string(),
                    message: format!("Course '{}' lists itself as a prerequisite", course.id),
                    course: Some(course.id.clone()),
                });
            } else if !known.contains(prereq.as_str()) {
                errors.push(ValidationError {
                    rule: "unknown-prerequisite".to_string(),
                    message: format!(
                        "Course '{}' requires '{}' which does not exist",
                        course.id, prereq
                    ),
                    course: Some(course.id.clone()),
                });
            }
        }
    }

    errors
}

fn validate_cycles(config: &CurriculumConfig) -> Vec<ValidationError> {
    let graph: HashMap<&str, Vec<&str>> = config
        .courses()
        .map(|c| {
            let deps = c
                .prerequisites
                .iter()
                .map(String::as_str)
                // Self references are reported by their own rule.
                .filter(|p| *p != c.id)
                .collect();
            (c.id.as_str(), deps)
        })
        .collect();

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    for course in config.courses() {
        if let Some(cycle) = detect_cycle(
            course.id.as_str(),
            &graph,
            &mut visited,
            &mut rec_stack,
            &mut path,
        ) {
            // Only report one cycle
            return vec![ValidationError {
                rule: "circular-prerequisite".to_string(),
                message: format!("Circular prerequisites detected: {}", cycle),
                course: Some(course.id.clone()),
            }];
        }
    }

    Vec::new()
}

fn detect_cycle<'a>(
    course: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<String> {
    if rec_stack.contains(course) {
        let start = path.iter().position(|c| *c == course).unwrap_or(0);
        return Some(format!("{} -> {}", path[start..].join(" -> "), course));
    }

    if !visited.insert(course) {
        return None;
    }

    rec_stack.insert(course);
    path.push(course);

    if let Some(deps) = graph.get(course) {
        for dep in deps {
            if let Some(cycle) = detect_cycle(*dep, graph, visited, rec_stack, path) {
                return Some(cycle);
            }
        }
    }

    path.pop();
    rec_stack.remove(course);
    None
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &CurriculumConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(MallaError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CourseConfig, SemesterConfig};

    fn course(id: &str, prereqs: &[&str]) -> CourseConfig {
        CourseConfig {
            id: id.to_string(),
            prerequisites: prereqs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn config(courses: Vec<CourseConfig>) -> CurriculumConfig {
        CurriculumConfig {
            semesters: vec![SemesterConfig {
                name: "S1".to_string(),
                courses,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn valid_config_returns_no_errors() {
        let config = config(vec![course("a", &[]), course("b", &["a"])]);
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn detects_duplicate_ids_across_semesters() {
        let mut config = config(vec![course("a", &[])]);
        config.semesters.push(SemesterConfig {
            name: "S2".to_string(),
            courses: vec![course("a", &[])],
        });

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "duplicate-id"));
    }

    #[test]
    fn detects_empty_id() {
        let config = config(vec![course("  ", &[])]);
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-id"));
    }

    #[test]
    fn detects_unknown_prerequisite() {
        let config = config(vec![course("b", &["ghost"])]);
        let errors = validate_config(&config);
        let err = errors
            .iter()
            .find(|e| e.rule == "unknown-prerequisite")
            .unwrap();
        assert!(err.message.contains("ghost"));
        assert_eq!(err.course.as_deref(), Some("b"));
    }

    #[test]
    fn detects_self_prerequisite_without_cycle_noise() {
        let config = config(vec![course("a", &["a"])]);
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "self-prerequisite");
    }

    #[test]
    fn detects_each_repeated_prerequisite() {
        let config = config(vec![course("a", &[]), course("b", &["a", "a", "a"])]);
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.rule == "duplicate-prerequisite" && e.course.as_deref() == Some("b")));
    }

    #[test]
    fn detects_circular_prerequisites_once() {
        let config = config(vec![
            course("a", &["c"]),
            course("b", &["a"]),
            course("c", &["b"]),
        ]);
        let errors = validate_config(&config);
        let cycles: Vec<_> = errors
            .iter()
            .filter(|e| e.rule == "circular-prerequisite")
            .collect();
        assert_eq!(cycles.len(), 1);
        assert!(cycles[0].message.contains("->"));
    }

    #[test]
    fn validate_returns_result() {
        assert!(validate(&config(vec![course("a", &[])])).is_ok());

        let err = validate(&config(vec![course("b", &["x"]), course("b", &[])])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("more than once"));
    }
}
