//! Compact share codec
//!
//! Serializes a plan plus the program/major selection (and any custom
//! courses the plan references) into a URL-safe token, and reverses it.
//!
//! The payload is a short-keyed JSON object encoded with unpadded URL-safe
//! base64. Terms travel as `"{year}-{trimester}:{code,code,...}"` segments
//! joined with `|`; course codes are percent-escaped so codes containing a
//! delimiter round-trip. Term ids are process-local and never transmitted.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{PlanError, PlanResult};
use crate::models::{Course, Major, Program};
use crate::plan::{Plan, Term};

/// Wire shape of the token payload. Keys are shortened to keep links small.
#[derive(Debug, Serialize, Deserialize)]
struct SharePayload {
    /// Program code
    p: u32,
    /// Major name, empty when none selected
    #[serde(default)]
    m: String,
    /// Compact term string
    t: String,
    /// Custom courses referenced by the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    c: Option<Vec<Course>>,
}

/// Everything a decoded token carries.
///
/// Custom courses are returned rather than inserted; the session merges
/// them into the catalog (skipping codes already present).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedShare {
    pub program_code: u32,
    pub major_name: String,
    pub plan: Plan,
    pub custom_courses: Vec<Course>,
}

/// Encode a plan and selection into a URL-safe token.
///
/// Fails with `NothingToShare` when no program is selected.
pub fn encode(
    plan: &Plan,
    program: Option<&Program>,
    major: Option<&Major>,
    catalog: &Catalog,
) -> PlanResult<String> {
    let program = program.ok_or(PlanError::NothingToShare)?;

    let term_string = plan
        .terms()
        .iter()
        .map(term_segment)
        .collect::<Vec<_>>()
        .join("|");

    let customs: Vec<Course> = plan
        .planned_codes()
        .iter()
        .filter_map(|code| catalog.course(code))
        .filter(|c| c.is_custom)
        .cloned()
        .collect();

    let payload = SharePayload {
        p: program.code,
        m: major.map(|m| m.name.clone()).unwrap_or_default(),
        t: term_string,
        c: (!customs.is_empty()).then_some(customs),
    };

    let json = serde_json::to_vec(&payload).map_err(PlanError::corrupt_token)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token back into a plan and selection.
///
/// Every malformed input is a `CorruptShareToken`, never a panic. Each
/// reconstructed term gets a fresh id.
pub fn decode(token: &str) -> PlanResult<DecodedShare> {
    let json = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| PlanError::corrupt_token(format!("bad encoding: {e}")))?;
    let payload: SharePayload = serde_json::from_slice(&json)
        .map_err(|e| PlanError::corrupt_token(format!("bad payload: {e}")))?;

    let mut terms = Vec::new();
    for segment in payload.t.split('|') {
        if segment.is_empty() {
            continue;
        }
        terms.push(parse_segment(segment)?);
    }

    Ok(DecodedShare {
        program_code: payload.p,
        major_name: payload.m,
        plan: Plan::from_terms(terms),
        custom_courses: payload.c.unwrap_or_default(),
    })
}

fn term_segment(term: &Term) -> String {
    let codes = term
        .courses()
        .iter()
        .map(|c| escape_code(c))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}-{}:{}", term.year, term.trimester, codes)
}

fn parse_segment(segment: &str) -> PlanResult<Term> {
    let (period, codes_str) = segment
        .split_once(':')
        .ok_or_else(|| PlanError::corrupt_token(format!("term segment missing ':': {segment}")))?;
    // split on the LAST '-' so a negative year keeps its sign
    let (year_str, tri_str) = period
        .rsplit_once('-')
        .ok_or_else(|| PlanError::corrupt_token(format!("term period missing '-': {period}")))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| PlanError::corrupt_token(format!("bad year: {year_str}")))?;
    let trimester: u8 = tri_str
        .parse()
        .map_err(|_| PlanError::corrupt_token(format!("bad trimester: {tri_str}")))?;

    let courses = if codes_str.is_empty() {
        Vec::new()
    } else {
        codes_str.split(',').map(unescape_code).collect()
    };
    Ok(Term::with_courses(year, trimester, courses))
}

// `:` never needs escaping (segments split on the first `:` only) and `-`
// none either (the period splits on its last `-`, and codes sit after the
// `:`), so only `%`, `|`, `,` are reserved.
fn escape_code(code: &str) -> String {
    code.replace('%', "%25")
        .replace('|', "%7C")
        .replace(',', "%2C")
}

fn unescape_code(code: &str) -> String {
    code.replace("%2C", ",")
        .replace("%7C", "|")
        .replace("%25", "%")
}
