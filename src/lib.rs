//! Gradplan - degree plan validation engine
//!
//! Gradplan helps a student assemble a multi-term academic plan from a fixed
//! course catalog, checking offering-term, prerequisite, and anti-requisite
//! constraints for every placement, and sharing plans as compact URL-safe
//! tokens.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod pool;
pub mod scaffold;
pub mod session;
pub mod share;
pub mod storage;
pub mod validate;

// Re-exports for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{PlanError, PlanResult};
pub use models::{Course, Major, Program, ReqLogic, Requisite};
pub use plan::{PeriodField, Plan, Term, TermId};
pub use pool::{pool, ElectiveFilter, PoolCategory};
pub use scaffold::{scaffold_plan, scaffold_plan_now};
pub use session::{SavedData, Session};
pub use share::{decode, encode, DecodedShare};
pub use validate::{validate_course, Verdict};
