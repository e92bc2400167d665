//! Command execution over a planning session.
//!
//! Terms are addressed by 1-based position on the command line; ids stay
//! process-local. Every command reports what it did on stdout and returns
//! whether it changed session state (the caller persists on change).

use anyhow::{bail, Context, Result};

use gradplan::plan::PeriodField;
use gradplan::pool::{pool, ElectiveFilter, PoolCategory};
use gradplan::{Session, TermId};

use crate::cli::{Commands, TermAction};

/// Run one command. `Ok(true)` means session state changed and should be
/// persisted.
pub fn run(command: Commands, session: &mut Session) -> Result<bool> {
    match command {
        Commands::Init { program, major } => init(session, program, major.as_deref()),
        Commands::Show => show(session),
        Commands::Check => check(session),
        Commands::Add { code, term } | Commands::MoveCourse { code, term } => {
            place(session, &code, term)
        }
        Commands::Remove { code, term } => remove(session, &code, term),
        Commands::Term { action } => term_action(session, action),
        Commands::Custom {
            code,
            name,
            credits,
            description,
        } => custom(session, &code, &name, credits, &description),
        Commands::Pool {
            category,
            search,
            campus,
            trimester,
        } => show_pool(session, category, search, campus, trimester),
        Commands::Share => share(session),
        Commands::Load { token } => load(session, &token),
        Commands::Clear => {
            session.clear_plan();
            println!("Plan cleared and re-scaffolded.");
            Ok(true)
        }
        Commands::Programs => programs(session),
    }
}

fn term_id_at(session: &Session, position: usize) -> Result<TermId> {
    position
        .checked_sub(1)
        .and_then(|i| session.plan.term_at(i))
        .map(|t| t.id())
        .with_context(|| format!("no term at position {position}"))
}

fn init(session: &mut Session, program: u32, major: Option<&str>) -> Result<bool> {
    session.select_program(program);
    if session.program().is_none() {
        bail!("unknown program code {program} (try `gradplan programs`)");
    }
    session.select_major(major);
    if major.is_some() && session.major().is_none() {
        bail!("program {program} has no major named '{}'", major.unwrap_or_default());
    }
    println!(
        "Started a {}-term plan for {}.",
        session.plan.len(),
        session.program().map(|p| p.name.as_str()).unwrap_or_default()
    );
    Ok(true)
}

fn show(session: &Session) -> Result<bool> {
    let program_name = session
        .program()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "(no program selected)".to_string());
    let major_name = session
        .major()
        .map(|m| format!(" - {}", m.name))
        .unwrap_or_default();
    println!("{program_name}{major_name}");

    for (index, term) in session.plan.terms().iter().enumerate() {
        println!("  Term {} ({} T{})", index + 1, term.year, term.trimester);
        if term.courses().is_empty() {
            println!("    (empty)");
        }
        for code in term.courses() {
            let verdict = session.validate(code, index);
            let name = session
                .catalog()
                .course(code)
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            if verdict.is_valid {
                println!("    {code}  {name}");
            } else {
                println!("    {code}  {name}  [{}]", verdict.messages.join(" "));
            }
        }
    }

    let planned = session.plan.planned_credit_points(session.catalog());
    let total = session.program().map(|p| p.credit_points).unwrap_or(240);
    println!("Total Credit Points: {planned} / {total}");
    Ok(false)
}

fn check(session: &Session) -> Result<bool> {
    let verdicts = session.validate_all();
    let invalid: Vec<_> = verdicts.iter().filter(|v| !v.verdict.is_valid).collect();
    for v in &invalid {
        println!(
            "Term {}: {} - {}",
            v.term_index + 1,
            v.code,
            v.verdict.messages.join(" ")
        );
    }
    if invalid.is_empty() {
        println!("All {} placements are valid.", verdicts.len());
        Ok(false)
    } else {
        bail!("{} of {} placements are invalid", invalid.len(), verdicts.len());
    }
}

fn place(session: &mut Session, code: &str, term: usize) -> Result<bool> {
    let id = term_id_at(session, term)?;
    if session.catalog().course(code).is_none() {
        bail!("unknown course code '{code}'");
    }
    session.plan.place_course(code, id);
    let index = term - 1;
    let verdict = session.validate(code, index);
    if verdict.is_valid {
        println!("Placed {code} in term {term}.");
    } else {
        println!(
            "Placed {code} in term {term} with warnings: {}",
            verdict.messages.join(" ")
        );
    }
    Ok(true)
}

fn remove(session: &mut Session, code: &str, term: usize) -> Result<bool> {
    let id = term_id_at(session, term)?;
    session.plan.remove_course(code, id);
    println!("Removed {code} from term {term}.");
    Ok(true)
}

fn term_action(session: &mut Session, action: TermAction) -> Result<bool> {
    match action {
        TermAction::Add => {
            let id = session.plan.add_term(current_year());
            let term = session.plan.term(id).map(|t| (t.year, t.trimester));
            if let Some((year, trimester)) = term {
                println!("Added term {} ({year} T{trimester}).", session.plan.len());
            }
            Ok(true)
        }
        TermAction::Remove { term } => {
            let id = term_id_at(session, term)?;
            session.plan.remove_term(id);
            println!("Removed term {term}; its courses returned to the pool.");
            Ok(true)
        }
        TermAction::Set {
            term,
            year,
            trimester,
        } => {
            let id = term_id_at(session, term)?;
            if year.is_none() && trimester.is_none() {
                bail!("nothing to set: pass --year and/or --trimester");
            }
            if let Some(year) = year {
                session.plan.set_term_period(id, PeriodField::Year, year);
            }
            if let Some(trimester) = trimester {
                if !(1..=3).contains(&trimester) {
                    bail!("trimester must be 1, 2, or 3");
                }
                session
                    .plan
                    .set_term_period(id, PeriodField::Trimester, trimester as i32);
            }
            println!("Updated term {term}.");
            Ok(true)
        }
    }
}

fn custom(
    session: &mut Session,
    code: &str,
    name: &str,
    credits: u32,
    description: &str,
) -> Result<bool> {
    session.add_custom_course(code, name, credits, description)?;
    println!("Added custom course {} to term 1.", code.to_uppercase());
    Ok(true)
}

fn show_pool(
    session: &Session,
    category: PoolCategory,
    search: Option<String>,
    campus: Option<String>,
    trimester: Option<String>,
) -> Result<bool> {
    let filter = ElectiveFilter {
        search,
        campus,
        trimester,
    };
    let courses = pool(
        category,
        session.catalog(),
        session.program(),
        session.major(),
        &session.plan,
        &filter,
    );
    if courses.is_empty() {
        println!("(no courses)");
    }
    for course in courses {
        let offerings = course
            .trimesters_offered
            .keys()
            .map(|k| format!("T{k}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}  {}  {}", course.code, course.name, offerings);
    }
    Ok(false)
}

fn share(session: &Session) -> Result<bool> {
    let token = session.share()?;
    println!("{token}");
    Ok(false)
}

fn load(session: &mut Session, token: &str) -> Result<bool> {
    session
        .load_share(token)
        .context("could not load the shared plan; local state was left untouched")?;
    println!(
        "Loaded shared plan: {} terms, {} courses.",
        session.plan.len(),
        session.plan.planned_codes().len()
    );
    Ok(true)
}

fn programs(session: &Session) -> Result<bool> {
    for program in session.catalog().programs() {
        println!(
            "{}  {} ({} CP)",
            program.code, program.name, program.credit_points
        );
        for major in &program.major {
            println!("      major: {}", major.name);
        }
    }
    Ok(false)
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
