//! Core data models for gradplan
//!
//! Defines the catalog-facing data structures:
//! - `Course`: a catalog or user-authored course record
//! - `Requisite`: a prerequisite or anti-requisite constraint
//! - `Program` and `Major`: degree structure records
//!
//! All shapes mirror the catalog JSON exactly. Only `code`/`name` style
//! identifying fields are required; every collection defaults to empty so a
//! sparse catalog entry still deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logic connector for a `courses`-kind requisite.
///
/// The catalog stores this as a bare string. `"OR"` selects any-of; every
/// other value, including absence, means all-of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReqLogic {
    #[default]
    And,
    Or,
}

impl Serialize for ReqLogic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            ReqLogic::And => "AND",
            ReqLogic::Or => "OR",
        })
    }
}

impl<'de> Deserialize<'de> for ReqLogic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("OR") => ReqLogic::Or,
            _ => ReqLogic::And,
        })
    }
}

/// A prerequisite or anti-requisite constraint attached to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requisite {
    /// Course-based constraint: a set of codes joined by AND/OR logic
    Courses {
        #[serde(default)]
        logic: ReqLogic,
        codes: Vec<String>,
        /// Human-readable rendering for display surfaces
        #[serde(default)]
        summary: String,
    },
    /// Minimum cumulative credit points.
    ///
    /// Parsed and displayed but never gates validity (see `validate`).
    Units {
        amount: u32,
        #[serde(default)]
        summary: String,
    },
}

impl Requisite {
    /// Course codes named by this requisite (empty for `Units`)
    pub fn codes(&self) -> &[String] {
        match self {
            Requisite::Courses { codes, .. } => codes,
            Requisite::Units { .. } => &[],
        }
    }

    /// Human-readable summary for display
    pub fn summary(&self) -> &str {
        match self {
            Requisite::Courses { summary, .. } | Requisite::Units { summary, .. } => summary,
        }
    }
}

/// A course record from the catalog (or authored by the user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code, e.g. "1004ICT"
    pub code: String,

    /// Course title
    pub name: String,

    /// Credit point value (catalog courses are worth 10)
    #[serde(default)]
    pub credit_points: u32,

    /// Campuses the course runs at
    #[serde(default)]
    pub campuses: Vec<String>,

    /// Trimester-number key (as a string) to display label.
    ///
    /// Key presence means the course runs in that trimester; the label is
    /// display-only (e.g. "1" -> "Trimester 1").
    #[serde(default)]
    pub trimesters_offered: BTreeMap<String, String>,

    #[serde(default)]
    pub prerequisites: Vec<Requisite>,

    #[serde(default)]
    pub anti_requisites: Vec<Requisite>,

    #[serde(default)]
    pub description: String,

    /// User-authored courses bypass the offering-term check
    #[serde(default, rename = "isCustom")]
    pub is_custom: bool,
}

impl Course {
    /// Create a minimal course with the given code and name
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit_points: 10,
            campuses: Vec::new(),
            trimesters_offered: BTreeMap::new(),
            prerequisites: Vec::new(),
            anti_requisites: Vec::new(),
            description: String::new(),
            is_custom: false,
        }
    }

    /// Create a user-authored custom course.
    ///
    /// Custom courses carry no campuses, offerings, or requisites; they are
    /// exempt from the offering-term check.
    pub fn custom(
        code: impl Into<String>,
        name: impl Into<String>,
        credit_points: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit_points,
            campuses: Vec::new(),
            trimesters_offered: BTreeMap::new(),
            prerequisites: Vec::new(),
            anti_requisites: Vec::new(),
            description: description.into(),
            is_custom: true,
        }
    }

    /// Builder: mark the trimesters the course is offered in
    pub fn offered_in(mut self, trimesters: &[u8]) -> Self {
        for t in trimesters {
            self.trimesters_offered
                .insert(t.to_string(), format!("Trimester {t}"));
        }
        self
    }

    /// Builder: set the campuses
    pub fn with_campuses(mut self, campuses: Vec<String>) -> Self {
        self.campuses = campuses;
        self
    }

    /// Builder: add a prerequisite
    pub fn with_prerequisite(mut self, req: Requisite) -> Self {
        self.prerequisites.push(req);
        self
    }

    /// Builder: add an anti-requisite
    pub fn with_anti_requisite(mut self, req: Requisite) -> Self {
        self.anti_requisites.push(req);
        self
    }

    /// True if the course is offered in the given trimester number.
    ///
    /// Custom courses are always considered offered.
    pub fn offered_in_trimester(&self, trimester: u8) -> bool {
        self.is_custom || self.trimesters_offered.contains_key(&trimester.to_string())
    }
}

fn default_credit_points() -> u32 {
    240
}

/// A degree program record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Unique program code, e.g. 1001
    pub code: u32,

    pub name: String,

    /// Total credit points required to complete the program
    #[serde(default = "default_credit_points", rename = "creditPoints")]
    pub credit_points: u32,

    /// Compulsory course codes
    #[serde(default)]
    pub core: Vec<String>,

    /// Choose-from course codes
    #[serde(default)]
    pub core_options: Vec<String>,

    /// Majors offered by the program (possibly none)
    #[serde(default)]
    pub major: Vec<Major>,
}

impl Program {
    /// Find a major by name
    pub fn find_major(&self, name: &str) -> Option<&Major> {
        self.major.iter().find(|m| m.name == name)
    }
}

/// A major within a program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Major {
    /// Unique within the parent program
    pub name: String,

    /// Course codes making up the major
    #[serde(default)]
    pub courses: Vec<String>,
}
