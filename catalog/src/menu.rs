//! Interactive console shell.
//!
//! Thin presentation layer: prompt, parse, dispatch to a repository, print
//! the outcome. Invalid menu selections and malformed field input re-prompt
//! instead of terminating; the only errors that leave this module are
//! storage failures, which have no recovery path.

use std::io::{self, Write as _};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::courses::CourseRepository;
use crate::error::RepoError;
use crate::io::config::CatalogConfig;
use crate::model::{Course, Program};
use crate::programs::ProgramRepository;

/// Run the menu loop until the operator exits.
pub fn run(config: &CatalogConfig) -> Result<()> {
    let programs = ProgramRepository::new(&config.programs_file);
    let courses = CourseRepository::new(&config.courses_file, &config.programs_file);

    loop {
        println!();
        println!("=== Academic catalog ===");
        println!("1) Manage programs");
        println!("2) Manage courses");
        println!("3) Reset data");
        println!("0) Exit");
        let choice = prompt_line("option")?;
        debug!(choice = %choice, "main menu selection");
        match choice.as_str() {
            "1" => programs_menu(&programs, &courses)?,
            "2" => courses_menu(&courses)?,
            "3" => reset_menu(&programs, &courses)?,
            "0" => return Ok(()),
            other => println!("invalid option: {other}"),
        }
    }
}

fn programs_menu(programs: &ProgramRepository, courses: &CourseRepository) -> Result<()> {
    loop {
        println!();
        println!("--- Programs ---");
        println!("1) Create");
        println!("2) List");
        println!("3) Update");
        println!("4) Delete");
        println!("5) Courses of a program");
        println!("0) Back");
        match prompt_line("option")?.as_str() {
            "1" => {
                // Identifiers are assigned, not asked: max existing + 1.
                let id = programs.next_id()?;
                let program = Program {
                    id,
                    name: prompt_line("name")?,
                    duration_years: prompt_u32("duration (years)")?,
                    active: prompt_bool("active (y/n)")?,
                    created_on: prompt_line("creation date (dd/MM/yyyy)")?,
                };
                report(programs.create(program).map(|()| format!("program {id} created")))?;
            }
            "2" => print_programs(&programs.read_all()?),
            "3" => {
                let id = prompt_u32("id to update")?;
                let program = Program {
                    id,
                    name: prompt_line("new name")?,
                    duration_years: prompt_u32("new duration (years)")?,
                    active: prompt_bool("active (y/n)")?,
                    created_on: prompt_line("creation date (dd/MM/yyyy)")?,
                };
                report(programs.update(id, program).map(|()| format!("program {id} updated")))?;
            }
            "4" => {
                let id = prompt_u32("id to delete")?;
                report(programs.delete(id).map(|()| format!("program {id} deleted")))?;
            }
            "5" => {
                let id = prompt_u32("program id")?;
                let owned = courses.list_by_program(id)?;
                if owned.is_empty() {
                    println!("no courses found for program {id}");
                } else {
                    print_courses(&owned);
                }
            }
            "0" => return Ok(()),
            other => println!("invalid option: {other}"),
        }
    }
}

fn courses_menu(courses: &CourseRepository) -> Result<()> {
    loop {
        println!();
        println!("--- Courses ---");
        println!("1) Create");
        println!("2) List");
        println!("3) Update");
        println!("4) Delete");
        println!("0) Back");
        match prompt_line("option")?.as_str() {
            "1" => {
                let id = prompt_u32("id")?;
                let course = Course {
                    id,
                    name: prompt_line("name")?,
                    credits: prompt_f64("credits")?,
                    mandatory: prompt_bool("mandatory (y/n)")?,
                    program_id: prompt_u32("program id")?,
                };
                report(courses.create(course).map(|()| format!("course {id} created")))?;
            }
            "2" => print_courses(&courses.read_all()?),
            "3" => {
                let id = prompt_u32("id to update")?;
                let course = Course {
                    id,
                    name: prompt_line("new name")?,
                    credits: prompt_f64("new credits")?,
                    mandatory: prompt_bool("mandatory (y/n)")?,
                    program_id: prompt_u32("program id")?,
                };
                report(courses.update(id, course).map(|()| format!("course {id} updated")))?;
            }
            "4" => {
                let id = prompt_u32("id to delete")?;
                report(courses.delete(id).map(|()| format!("course {id} deleted")))?;
            }
            "0" => return Ok(()),
            other => println!("invalid option: {other}"),
        }
    }
}

fn reset_menu(programs: &ProgramRepository, courses: &CourseRepository) -> Result<()> {
    println!();
    println!("--- Reset ---");
    println!("1) Programs");
    println!("2) Courses");
    println!("3) Both");
    println!("0) Cancel");
    match prompt_line("option")?.as_str() {
        "1" => report(programs.reset().map(|()| "programs cleared".to_string()))?,
        "2" => report(courses.reset().map(|()| "courses cleared".to_string()))?,
        "3" => {
            programs.reset()?;
            courses.reset()?;
            println!("programs and courses cleared");
        }
        "0" => {}
        other => println!("invalid option: {other}"),
    }
    Ok(())
}

/// Print a domain outcome and keep going; let storage failures escape.
fn report(outcome: Result<String, RepoError>) -> Result<()> {
    match outcome {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) if err.is_domain_outcome() => {
            println!("error: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_programs(programs: &[Program]) {
    if programs.is_empty() {
        println!("no programs recorded");
        return;
    }
    for p in programs {
        println!(
            "[{}] {} — {} years, active: {}, created: {}",
            p.id, p.name, p.duration_years, p.active, p.created_on
        );
    }
}

fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("no courses recorded");
        return;
    }
    for c in courses {
        println!(
            "[{}] {} — {} credits, mandatory: {}, program: {}",
            c.id, c.name, c.credits, c.mandatory, c.program_id
        );
    }
}

/// Read one non-empty trimmed line from stdin, re-prompting until given one.
fn prompt_line(label: &str) -> Result<String> {
    loop {
        print!("{label}: ");
        io::stdout().flush().context("flush stdout")?;
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("read from stdin")?;
        if read == 0 {
            bail!("stdin closed");
        }
        let value = line.trim();
        if value.is_empty() {
            println!("a value is required");
            continue;
        }
        return Ok(value.to_string());
    }
}

fn prompt_u32(label: &str) -> Result<u32> {
    loop {
        match prompt_line(label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("enter a whole number"),
        }
    }
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        match prompt_line(label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("enter a number"),
        }
    }
}

fn prompt_bool(label: &str) -> Result<bool> {
    loop {
        match parse_bool(&prompt_line(label)?) {
            Some(value) => return Ok(value),
            None => println!("enter y or n"),
        }
    }
}

/// Tokens accepted for boolean fields, case-insensitive.
fn parse_bool(input: &str) -> Option<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
