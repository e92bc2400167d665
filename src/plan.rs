//! Plan model
//!
//! A plan is an ordered sequence of terms. Sequence position is the
//! authoritative temporal order for "completed before" computations - it is
//! never re-derived from year/trimester values, which the user may edit out
//! of order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;

/// Stable identifier for a term.
///
/// Generated on creation and never regenerated; ids are process-local and
/// are not carried by share tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermId(Uuid);

impl TermId {
    /// Generate a fresh unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Which period field of a term to update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodField {
    Year,
    Trimester,
}

/// One planned trimester instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    id: TermId,
    pub year: i32,
    /// Trimester number, 1-3
    pub trimester: u8,
    courses: Vec<String>,
}

impl Term {
    /// Create an empty term with a fresh id
    pub fn new(year: i32, trimester: u8) -> Self {
        Self {
            id: TermId::generate(),
            year,
            trimester,
            courses: Vec::new(),
        }
    }

    /// Create a term pre-populated with course codes (share-link decode)
    pub fn with_courses(year: i32, trimester: u8, courses: Vec<String>) -> Self {
        Self {
            id: TermId::generate(),
            year,
            trimester,
            courses,
        }
    }

    pub fn id(&self) -> TermId {
        self.id
    }

    /// Course codes in this term, lexicographic order
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c == code)
    }
}

/// The ordered sequence of terms making up a degree plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    terms: Vec<Term>,
}

impl Plan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from pre-constructed terms (scaffolder, codec)
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term by id
    pub fn term(&self, id: TermId) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// Term by sequence position
    pub fn term_at(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    /// Sequence position of a term id
    pub fn position(&self, id: TermId) -> Option<usize> {
        self.terms.iter().position(|t| t.id == id)
    }

    /// Sequence position of the term holding a course, if planned
    pub fn position_of_course(&self, code: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.contains(code))
    }

    /// Append a new empty term continuing the year/trimester cadence.
    ///
    /// Follows the last term: same year, next trimester, wrapping 3 -> 1
    /// with the year advanced. An empty plan starts at the given year,
    /// trimester 1. Returns the new term's id.
    pub fn add_term(&mut self, current_year: i32) -> TermId {
        let (year, trimester) = match self.terms.last() {
            Some(last) if last.trimester >= 3 => (last.year + 1, 1),
            Some(last) => (last.year, last.trimester + 1),
            None => (current_year, 1),
        };
        let term = Term::new(year, trimester);
        let id = term.id;
        self.terms.push(term);
        id
    }

    /// Remove the term with the given id; its courses become unplanned.
    ///
    /// No-op if the id is absent.
    pub fn remove_term(&mut self, id: TermId) {
        self.terms.retain(|t| t.id != id);
    }

    /// Place a course in the target term.
    ///
    /// The code is first removed from whichever term currently holds it, so
    /// a course appears in at most one term. The target term's courses are
    /// kept sorted by code. No-op if the target term does not exist.
    pub fn place_course(&mut self, code: &str, target: TermId) {
        if self.term(target).is_none() {
            return;
        }
        for term in &mut self.terms {
            term.courses.retain(|c| c != code);
        }
        if let Some(term) = self.terms.iter_mut().find(|t| t.id == target) {
            term.courses.push(code.to_string());
            term.courses.sort();
        }
    }

    /// Remove a course from the named term; no-op if either is absent
    pub fn remove_course(&mut self, code: &str, term_id: TermId) {
        if let Some(term) = self.terms.iter_mut().find(|t| t.id == term_id) {
            term.courses.retain(|c| c != code);
        }
    }

    /// Update a term's year or trimester.
    ///
    /// Trimester values are clamped to 1-3. No cross-term validation:
    /// duplicate year/trimester pairs are allowed, and sequence order is
    /// deliberately left untouched.
    pub fn set_term_period(&mut self, term_id: TermId, field: PeriodField, value: i32) {
        if let Some(term) = self.terms.iter_mut().find(|t| t.id == term_id) {
            match field {
                PeriodField::Year => term.year = value,
                PeriodField::Trimester => term.trimester = value.clamp(1, 3) as u8,
            }
        }
    }

    /// All planned course codes across every term, sequence order
    pub fn planned_codes(&self) -> Vec<&str> {
        self.terms
            .iter()
            .flat_map(|t| t.courses.iter().map(String::as_str))
            .collect()
    }

    /// Course codes in terms strictly before the given sequence position
    pub fn completed_before(&self, index: usize) -> Vec<&str> {
        self.terms
            .iter()
            .take(index)
            .flat_map(|t| t.courses.iter().map(String::as_str))
            .collect()
    }

    /// Sum of credit points for all planned codes resolvable in the catalog.
    ///
    /// Exposed as a count only; nothing gates on it.
    pub fn planned_credit_points(&self, catalog: &Catalog) -> u32 {
        self.planned_codes()
            .iter()
            .filter_map(|code| catalog.course(code))
            .map(|c| c.credit_points)
            .sum()
    }
}
