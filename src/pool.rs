//! Course pool views
//!
//! The pool is everything not yet planned, grouped the way the planner
//! displays it: program core, core options, major courses, and free
//! electives with text/campus/trimester filters. Unknown codes in program
//! lists are dropped rather than surfaced.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{Course, Major, Program};
use crate::plan::Plan;

/// Which pool tab to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolCategory {
    Core,
    CoreOptions,
    Major,
    Electives,
}

impl std::str::FromStr for PoolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(PoolCategory::Core),
            "core-options" => Ok(PoolCategory::CoreOptions),
            "major" => Ok(PoolCategory::Major),
            "electives" => Ok(PoolCategory::Electives),
            other => Err(format!("unknown pool category '{other}'")),
        }
    }
}

/// Free-text and facet filters for the electives pool
#[derive(Debug, Clone, Default)]
pub struct ElectiveFilter {
    /// Case-insensitive substring match on course name or code
    pub search: Option<String>,
    /// Campus membership
    pub campus: Option<String>,
    /// Trimester display label, e.g. "Trimester 1" (label match, matching
    /// the planner's filter dropdown)
    pub trimester: Option<String>,
}

/// Compute a pool view: unplanned courses for the requested category.
///
/// Core, core-options and major pools follow the program's (or major's)
/// code lists; electives cover the whole catalog. Already-planned courses
/// are always excluded.
pub fn pool<'a>(
    category: PoolCategory,
    catalog: &'a Catalog,
    program: Option<&Program>,
    major: Option<&Major>,
    plan: &Plan,
    filter: &ElectiveFilter,
) -> Vec<&'a Course> {
    let planned: HashSet<&str> = plan.planned_codes().into_iter().collect();

    match category {
        PoolCategory::Core => {
            from_code_list(catalog, program.map(|p| p.core.as_slice()), &planned)
        }
        PoolCategory::CoreOptions => {
            from_code_list(catalog, program.map(|p| p.core_options.as_slice()), &planned)
        }
        PoolCategory::Major => {
            from_code_list(catalog, major.map(|m| m.courses.as_slice()), &planned)
        }
        PoolCategory::Electives => catalog
            .courses()
            .iter()
            .filter(|c| !planned.contains(c.code.as_str()))
            .filter(|c| filter.matches(c))
            .collect(),
    }
}

fn from_code_list<'a>(
    catalog: &'a Catalog,
    codes: Option<&[String]>,
    planned: &HashSet<&str>,
) -> Vec<&'a Course> {
    codes
        .unwrap_or_default()
        .iter()
        .filter_map(|code| catalog.course(code))
        .filter(|c| !planned.contains(c.code.as_str()))
        .collect()
}

impl ElectiveFilter {
    fn matches(&self, course: &Course) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !course.name.to_lowercase().contains(&needle)
                && !course.code.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(campus) = &self.campus {
            if !course.campuses.iter().any(|c| c == campus) {
                return false;
            }
        }
        if let Some(trimester) = &self.trimester {
            if !course.trimesters_offered.values().any(|v| v == trimester) {
                return false;
            }
        }
        true
    }
}
