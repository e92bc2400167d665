//! Planning session
//!
//! One explicit object owning the live state the planner works against:
//! the loaded catalog, the plan, and the program/major selection. Engine
//! operations go through the session so nothing lives in ambient globals
//! and everything is testable without a UI.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::PlanResult;
use crate::models::{Course, Major, Program};
use crate::plan::Plan;
use crate::scaffold;
use crate::share::{self, DecodedShare};
use crate::validate::{self, Verdict};

/// Persisted session state.
///
/// Layout matches the planner's saved-data JSON: camelCase keys, custom
/// courses omitted when there are none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedData {
    #[serde(default)]
    pub program_code: Option<u32>,
    #[serde(default)]
    pub major_name: Option<String>,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_courses: Option<Vec<Course>>,
}

/// A verdict paired with the placement it was computed for
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementVerdict {
    pub term_index: usize,
    pub code: String,
    pub verdict: Verdict,
}

/// The active planning session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    pub plan: Plan,
    program_code: Option<u32>,
    major_name: Option<String>,
}

impl Session {
    /// Start a session over a loaded catalog, with no selection and an
    /// empty plan
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            plan: Plan::new(),
            program_code: None,
            major_name: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selected program's record, if any
    pub fn program(&self) -> Option<&Program> {
        self.program_code.and_then(|code| self.catalog.program(code))
    }

    /// The selected major's record, if any
    pub fn major(&self) -> Option<&Major> {
        let name = self.major_name.as_deref()?;
        self.program()?.find_major(name)
    }

    /// Select a program and replace the plan with a fresh scaffold.
    ///
    /// The major selection is cleared; an unknown code clears the program
    /// selection and empties the plan.
    pub fn select_program(&mut self, code: u32) {
        self.select_program_from(code, chrono_year());
    }

    /// `select_program` with an explicit scaffold start year
    pub fn select_program_from(&mut self, code: u32, start_year: i32) {
        self.major_name = None;
        self.program_code = self.catalog.program(code).map(|p| p.code);
        self.plan = scaffold::scaffold_plan(self.program(), start_year);
    }

    /// Select a major of the current program; anything else clears the
    /// selection
    pub fn select_major(&mut self, name: Option<&str>) {
        self.major_name = name
            .and_then(|n| self.program().and_then(|p| p.find_major(n)))
            .map(|m| m.name.clone());
    }

    /// Throw away all placements and re-scaffold from the selected program
    pub fn clear_plan(&mut self) {
        self.clear_plan_from(chrono_year());
    }

    /// `clear_plan` with an explicit scaffold start year
    pub fn clear_plan_from(&mut self, start_year: i32) {
        self.plan = scaffold::scaffold_plan(self.program(), start_year);
    }

    /// Verdict for a course at a term position
    pub fn validate(&self, code: &str, term_index: usize) -> Verdict {
        validate::validate_course(self.catalog.course(code), &self.plan, term_index)
    }

    /// Verdicts for every placement in the plan, sequence order
    pub fn validate_all(&self) -> Vec<PlacementVerdict> {
        let mut verdicts = Vec::new();
        for (index, term) in self.plan.terms().iter().enumerate() {
            for code in term.courses() {
                verdicts.push(PlacementVerdict {
                    term_index: index,
                    code: code.clone(),
                    verdict: self.validate(code, index),
                });
            }
        }
        verdicts
    }

    /// Author a custom course and drop it into the first term.
    ///
    /// The code is uppercased; an existing code is rejected with no state
    /// change. An empty plan gets a current-year trimester-1 term to hold
    /// the course.
    pub fn add_custom_course(
        &mut self,
        code: &str,
        name: &str,
        credit_points: u32,
        description: &str,
    ) -> PlanResult<()> {
        let code = code.to_uppercase();
        self.catalog
            .add_custom(Course::custom(&code, name, credit_points, description))?;

        let first = match self.plan.term_at(0) {
            Some(term) => term.id(),
            None => self.plan.add_term(chrono_year()),
        };
        self.plan.place_course(&code, first);
        Ok(())
    }

    /// Encode the current plan and selection into a share token
    pub fn share(&self) -> PlanResult<String> {
        share::encode(&self.plan, self.program(), self.major(), &self.catalog)
    }

    /// Replace the session state from a share token.
    ///
    /// Embedded custom courses are merged into the catalog, skipping codes
    /// already present. On any decode failure the session is untouched.
    pub fn load_share(&mut self, token: &str) -> PlanResult<()> {
        let DecodedShare {
            program_code,
            major_name,
            plan,
            custom_courses,
        } = share::decode(token)?;

        self.catalog.merge_customs(custom_courses);
        self.program_code = self.catalog.program(program_code).map(|p| p.code);
        self.major_name = self
            .program()
            .and_then(|p| p.find_major(&major_name))
            .map(|m| m.name.clone());
        self.plan = plan;
        Ok(())
    }

    /// Snapshot for persistence
    pub fn saved_data(&self) -> SavedData {
        let customs: Vec<Course> = self
            .catalog
            .custom_courses()
            .into_iter()
            .cloned()
            .collect();
        SavedData {
            program_code: self.program_code,
            major_name: self.major_name.clone(),
            plan: self.plan.clone(),
            custom_courses: (!customs.is_empty()).then_some(customs),
        }
    }

    /// Restore a persisted snapshot.
    ///
    /// Custom courses merge skip-existing; an empty saved plan falls back
    /// to a scaffold for the restored program.
    pub fn restore(&mut self, data: SavedData) {
        self.restore_from(data, chrono_year());
    }

    /// `restore` with an explicit scaffold start year
    pub fn restore_from(&mut self, data: SavedData, start_year: i32) {
        if let Some(customs) = data.custom_courses {
            self.catalog.merge_customs(customs);
        }
        self.program_code = data
            .program_code
            .and_then(|code| self.catalog.program(code))
            .map(|p| p.code);
        self.major_name = data.major_name.and_then(|name| {
            self.program()
                .and_then(|p| p.find_major(&name))
                .map(|m| m.name.clone())
        });
        self.plan = if data.plan.is_empty() {
            scaffold::scaffold_plan(self.program(), start_year)
        } else {
            data.plan
        };
    }
}

fn chrono_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
