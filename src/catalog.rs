//! Catalog store
//!
//! Immutable-per-session collection of course and program records, loaded
//! once from two JSON documents. The only mutation permitted after load is
//! appending user-authored custom courses; canonical records are never
//! touched.

use std::fs;
use std::path::Path;

use crate::error::{PlanError, PlanResult};
use crate::models::{Course, Program};

/// The loaded course and program catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    programs: Vec<Program>,
}

impl Catalog {
    /// Build a catalog from already-parsed records (mainly for tests)
    pub fn new(courses: Vec<Course>, programs: Vec<Program>) -> Self {
        Self { courses, programs }
    }

    /// Parse a catalog from the two JSON documents.
    ///
    /// Either document failing to parse is fatal for the session.
    pub fn from_json(courses_json: &str, programs_json: &str) -> PlanResult<Self> {
        let courses: Vec<Course> = serde_json::from_str(courses_json)
            .map_err(|e| PlanError::catalog_load(format!("courses: {e}")))?;
        let programs: Vec<Program> = serde_json::from_str(programs_json)
            .map_err(|e| PlanError::catalog_load(format!("programs: {e}")))?;
        Ok(Self { courses, programs })
    }

    /// Read and parse the two catalog files.
    ///
    /// Both must be readable before the engine can run; either failing is
    /// fatal, with no retry.
    pub fn load(courses_path: &Path, programs_path: &Path) -> PlanResult<Self> {
        let courses_json = fs::read_to_string(courses_path)
            .map_err(|e| PlanError::catalog_load(format!("{}: {e}", courses_path.display())))?;
        let programs_json = fs::read_to_string(programs_path)
            .map_err(|e| PlanError::catalog_load(format!("{}: {e}", programs_path.display())))?;
        Self::from_json(&courses_json, &programs_json)
    }

    /// Look up a course by code
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Look up a program by code
    pub fn program(&self, code: u32) -> Option<&Program> {
        self.programs.iter().find(|p| p.code == code)
    }

    /// All courses, catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All programs, catalog order
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Courses authored by the user this session
    pub fn custom_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_custom).collect()
    }

    /// Append a user-authored course.
    ///
    /// Rejects a code that already exists; the catalog is unchanged on
    /// rejection.
    pub fn add_custom(&mut self, course: Course) -> PlanResult<()> {
        if self.course(&course.code).is_some() {
            return Err(PlanError::DuplicateCustomCode {
                code: course.code,
            });
        }
        self.courses.push(course);
        Ok(())
    }

    /// Bulk-insert custom courses from a share link or saved state, skipping
    /// any code already present
    pub fn merge_customs(&mut self, courses: Vec<Course>) {
        for course in courses {
            if self.course(&course.code).is_none() {
                self.courses.push(course);
            }
        }
    }
}
