//! The static course catalogue.

use std::collections::HashMap;

use crate::config::{validate, CurriculumConfig};
use crate::error::Result;

use super::{Course, Semester};

/// Read-only mapping from course id to its definition.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Curriculum {
    name: Option<String>,
    courses: Vec<Course>,
    index: HashMap<String, usize>,
    semesters: Vec<Semester>,
}

impl Curriculum {
    /// Build a curriculum from courses, grouping semesters in first-seen order.
    ///
    /// When an id repeats, lookups resolve to its first definition.
    pub fn new(courses: Vec<Course>) -> Self {
        let mut semesters: Vec<Semester> = Vec::new();
        for course in &courses {
            match semesters.iter_mut().find(|s| s.name == course.semester) {
                Some(semester) => semester.course_ids.push(course.id.clone()),
                None => semesters.push(Semester {
                    name: course.semester.clone(),
                    course_ids: vec![course.id.clone()],
                }),
            }
        }
        Self::assemble(None, courses, semesters)
    }

    /// Build a curriculum from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if the configuration fails validation.
    pub fn from_config(config: &CurriculumConfig) -> Result<Self> {
        validate(config)?;

        let courses = config
            .semesters
            .iter()
            .flat_map(|s| s.courses.iter().map(move |c| Course::from_config(c, &s.name)))
            .collect();
        let semesters = config.semesters.iter().map(Semester::from_config).collect();

        Ok(Self::assemble(config.name.clone(), courses, semesters))
    }

    fn assemble(name: Option<String>, courses: Vec<Course>, semesters: Vec<Semester>) -> Self {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            index.entry(course.id.clone()).or_insert(i);
        }

        tracing::debug!(
            "Curriculum loaded: {} courses in {} semesters",
            courses.len(),
            semesters.len()
        );

        Self {
            name,
            courses,
            index,
            semesters,
        }
    }

    /// Program name, if configured.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }

    /// Check whether a course id is defined.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Direct prerequisites of a course; empty for unknown ids.
    pub fn prerequisites(&self, id: &str) -> &[String] {
        self.course(id)
            .map(|c| c.prerequisites.as_slice())
            .unwrap_or(&[])
    }

    /// All courses in declared order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All semesters in declared order.
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Find a semester by name (case-insensitive).
    pub fn semester(&self, name: &str) -> Option<&Semester> {
        self.semesters
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Courses belonging to a semester, in declared order.
    pub fn semester_courses<'a>(
        &'a self,
        semester: &'a Semester,
    ) -> impl Iterator<Item = &'a Course> + 'a {
        semester.course_ids.iter().filter_map(|id| self.course(id))
    }

    /// Display name for a course id, falling back to the raw id.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        match self.course(id) {
            Some(course) => &course.name,
            None => {
                tracing::debug!("No course definition for '{}', showing raw id", id);
                id
            }
        }
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the curriculum has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of credits over all courses.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::path::Path;

    fn sample() -> Curriculum {
        Curriculum::new(vec![
            Course::new("mat1", "S1").with_name("Cálculo I").with_credits(6),
            Course::new("fis1", "S1").with_credits(5),
            Course::new("mat2", "S2")
                .with_name("Cálculo II")
                .with_credits(6)
                .with_prerequisites(["mat1"]),
        ])
    }

    #[test]
    fn new_groups_semesters_in_order() {
        let curriculum = sample();
        let names: Vec<_> = curriculum.semesters().iter().map(|s| &s.name).collect();
        assert_eq!(names, vec!["S1", "S2"]);
        assert_eq!(curriculum.semesters()[0].course_ids, vec!["mat1", "fis1"]);
    }

    #[test]
    fn prerequisites_are_empty_for_unknown_ids() {
        let curriculum = sample();
        assert_eq!(curriculum.prerequisites("mat2"), ["mat1".to_string()]);
        assert!(curriculum.prerequisites("nope").is_empty());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let curriculum = sample();
        assert_eq!(curriculum.display_name("mat1"), "Cálculo I");
        assert_eq!(curriculum.display_name("ghost"), "ghost");
    }

    #[test]
    fn total_credits_sums_all_courses() {
        assert_eq!(sample().total_credits(), 17);
    }

    #[test]
    fn semester_lookup_is_case_insensitive() {
        let curriculum = sample();
        let semester = curriculum.semester("s2").unwrap();
        let ids: Vec<_> = curriculum
            .semester_courses(semester)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mat2"]);
    }

    #[test]
    fn from_config_keeps_empty_semesters_and_names() {
        let yaml = r#"
name: Plan Común
semesters:
  - name: S1
    courses:
      - { id: a, name: Álgebra, credits: 4 }
  - name: S2
"#;
        let config = parse_config(yaml, Path::new("c.yml")).unwrap();
        let curriculum = Curriculum::from_config(&config).unwrap();
        assert_eq!(curriculum.name(), Some("Plan Común"));
        assert_eq!(curriculum.semesters().len(), 2);
        assert_eq!(curriculum.course("a").unwrap().semester, "S1");
    }

    #[test]
    fn from_config_rejects_invalid_curriculum() {
        let yaml = r#"
semesters:
  - name: S1
    courses:
      - { id: a, prerequisites: [missing] }
"#;
        let config = parse_config(yaml, Path::new("c.yml")).unwrap();
        assert!(Curriculum::from_config(&config).is_err());
    }
}
