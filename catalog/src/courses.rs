//! CRUD repository for course records.
//!
//! Same load-fresh/rewrite-in-full cycle as the program repository, with one
//! extra rule: creating a course requires its program reference to exist at
//! that moment. The reference is never re-checked afterwards — updating a
//! course or deleting its program can leave it dangling, and that is
//! accepted behavior.

use std::path::PathBuf;

use tracing::debug;

use crate::error::RepoError;
use crate::io::store::{load_records, save_records};
use crate::model::{Course, Program};

/// Repository for the course list, backed by one JSON file. Holds the
/// programs path as well, for the existence check at creation.
pub struct CourseRepository {
    path: PathBuf,
    programs_path: PathBuf,
}

impl CourseRepository {
    pub fn new(path: impl Into<PathBuf>, programs_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            programs_path: programs_path.into(),
        }
    }

    /// Append a course. Fails with [`RepoError::DuplicateId`] when the
    /// identifier is taken, or [`RepoError::ProgramNotFound`] when no stored
    /// program matches `course.program_id`. Neither failure writes.
    pub fn create(&self, course: Course) -> Result<(), RepoError> {
        let mut courses = load_records::<Course>(&self.path)?;
        if courses.iter().any(|c| c.id == course.id) {
            return Err(RepoError::DuplicateId { id: course.id });
        }
        let programs = load_records::<Program>(&self.programs_path)?;
        if !programs.iter().any(|p| p.id == course.program_id) {
            return Err(RepoError::ProgramNotFound {
                id: course.program_id,
            });
        }
        debug!(id = course.id, program_id = course.program_id, "creating course");
        courses.push(course);
        save_records(&self.path, &courses)?;
        Ok(())
    }

    /// The full ordered list as currently persisted.
    pub fn read_all(&self) -> Result<Vec<Course>, RepoError> {
        Ok(load_records(&self.path)?)
    }

    /// Positional replacement by id, exactly like the program repository.
    /// The program reference of `course` is NOT re-validated here.
    pub fn update(&self, id: u32, course: Course) -> Result<(), RepoError> {
        let mut courses = load_records::<Course>(&self.path)?;
        let Some(slot) = courses.iter_mut().find(|c| c.id == id) else {
            return Err(RepoError::NotFound { id });
        };
        debug!(id, new_id = course.id, "updating course");
        *slot = course;
        save_records(&self.path, &courses)?;
        Ok(())
    }

    /// Remove every entry with the given id and save unconditionally.
    pub fn delete(&self, id: u32) -> Result<(), RepoError> {
        let mut courses = load_records::<Course>(&self.path)?;
        courses.retain(|c| c.id != id);
        debug!(id, remaining = courses.len(), "deleting course");
        save_records(&self.path, &courses)?;
        Ok(())
    }

    /// Overwrite the backing file with an empty list.
    pub fn reset(&self) -> Result<(), RepoError> {
        save_records::<Course>(&self.path, &[])?;
        Ok(())
    }

    /// The ordered subsequence of courses owned by `program_id`. An empty
    /// result is a valid outcome, not an error.
    pub fn list_by_program(&self, program_id: u32) -> Result<Vec<Course>, RepoError> {
        let courses = load_records::<Course>(&self.path)?;
        Ok(courses
            .into_iter()
            .filter(|c| c.program_id == program_id)
            .collect())
    }
}
