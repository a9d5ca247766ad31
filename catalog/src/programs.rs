//! CRUD repository for program records.
//!
//! Every operation is a single stateless request/response cycle: load the
//! full list from the backing file, apply the change, rewrite the file in
//! full. Nothing is cached between calls.

use std::path::PathBuf;

use tracing::debug;

use crate::error::RepoError;
use crate::io::store::{load_records, save_records};
use crate::model::Program;

/// Repository for the program list, backed by one JSON file.
pub struct ProgramRepository {
    path: PathBuf,
}

impl ProgramRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a program. Fails with [`RepoError::DuplicateId`] (and writes
    /// nothing) when the identifier is already taken.
    pub fn create(&self, program: Program) -> Result<(), RepoError> {
        let mut programs = load_records::<Program>(&self.path)?;
        if programs.iter().any(|p| p.id == program.id) {
            return Err(RepoError::DuplicateId { id: program.id });
        }
        debug!(id = program.id, name = %program.name, "creating program");
        programs.push(program);
        save_records(&self.path, &programs)?;
        Ok(())
    }

    /// The full ordered list as currently persisted.
    pub fn read_all(&self) -> Result<Vec<Program>, RepoError> {
        Ok(load_records(&self.path)?)
    }

    /// Replace the first entry whose id matches with `program` as given.
    ///
    /// Replacement is positional, not a reassignment: `program` is stored
    /// verbatim even when `program.id != id`. Fails with
    /// [`RepoError::NotFound`] (and writes nothing) when no entry matches.
    pub fn update(&self, id: u32, program: Program) -> Result<(), RepoError> {
        let mut programs = load_records::<Program>(&self.path)?;
        let Some(slot) = programs.iter_mut().find(|p| p.id == id) else {
            return Err(RepoError::NotFound { id });
        };
        debug!(id, new_id = program.id, "updating program");
        *slot = program;
        save_records(&self.path, &programs)?;
        Ok(())
    }

    /// Remove every entry with the given id (at most one, given the
    /// uniqueness invariant). The resulting list is saved unconditionally;
    /// deleting an absent id is not an error.
    pub fn delete(&self, id: u32) -> Result<(), RepoError> {
        let mut programs = load_records::<Program>(&self.path)?;
        programs.retain(|p| p.id != id);
        debug!(id, remaining = programs.len(), "deleting program");
        save_records(&self.path, &programs)?;
        Ok(())
    }

    /// Overwrite the backing file with an empty list.
    pub fn reset(&self) -> Result<(), RepoError> {
        save_records::<Program>(&self.path, &[])?;
        Ok(())
    }

    /// The identifier a newly created program should get: max existing + 1,
    /// or 1 when the list is empty.
    pub fn next_id(&self) -> Result<u32, RepoError> {
        let programs = load_records::<Program>(&self.path)?;
        Ok(programs.iter().map(|p| p.id).max().map_or(1, |max| max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TempCatalog, program};

    #[test]
    fn read_all_on_missing_file_is_empty() {
        let catalog = TempCatalog::new();
        assert!(catalog.programs().read_all().expect("read").is_empty());
    }

    #[test]
    fn create_rejects_duplicate_id_without_writing() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        repo.create(program(1)).expect("create");

        let err = repo.create(program(1)).expect_err("must fail");
        assert!(matches!(err, RepoError::DuplicateId { id: 1 }));
        assert_eq!(repo.read_all().expect("read"), vec![program(1)]);
    }

    #[test]
    fn update_replaces_positionally_even_with_new_id() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        repo.create(program(1)).expect("create");
        repo.create(program(2)).expect("create");

        // Replacement keeps list position; the stored id becomes 7.
        repo.update(1, program(7)).expect("update");
        assert_eq!(
            repo.read_all().expect("read"),
            vec![program(7), program(2)]
        );
    }

    #[test]
    fn update_missing_id_leaves_list_unchanged() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        repo.create(program(1)).expect("create");

        let err = repo.update(99, program(99)).expect_err("must fail");
        assert!(matches!(err, RepoError::NotFound { id: 99 }));
        assert_eq!(repo.read_all().expect("read"), vec![program(1)]);
    }

    #[test]
    fn delete_missing_id_is_not_an_error() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        repo.create(program(1)).expect("create");

        repo.delete(99).expect("delete");
        assert_eq!(repo.read_all().expect("read"), vec![program(1)]);
    }

    #[test]
    fn reset_empties_any_prior_content() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        repo.create(program(1)).expect("create");
        repo.create(program(2)).expect("create");

        repo.reset().expect("reset");
        assert!(repo.read_all().expect("read").is_empty());
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let catalog = TempCatalog::new();
        let repo = catalog.programs();
        assert_eq!(repo.next_id().expect("next id"), 1);

        repo.create(program(4)).expect("create");
        repo.create(program(2)).expect("create");
        assert_eq!(repo.next_id().expect("next id"), 5);
    }
}
