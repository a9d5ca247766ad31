//! End-to-end lifecycle scenarios over temp-dir data files.
//!
//! These drive both repositories through multi-step sequences to verify the
//! persisted behavior: duplicate rejection, reference checks, orphan
//! survival, and the on-disk JSON contract.

use std::fs;

use catalog::error::RepoError;
use catalog::test_support::{TempCatalog, course, program};

/// Program lifecycle: missing file → empty, create persists one entry,
/// duplicate create is rejected and the file keeps exactly one entry.
#[test]
fn program_create_then_duplicate_is_rejected() {
    let catalog = TempCatalog::new();
    let programs = catalog.programs();

    assert!(programs.read_all().expect("read").is_empty());

    programs.create(program(1)).expect("create");
    assert_eq!(programs.read_all().expect("read").len(), 1);

    let err = programs.create(program(1)).expect_err("duplicate");
    assert!(matches!(err, RepoError::DuplicateId { id: 1 }));
    assert_eq!(programs.read_all().expect("read"), vec![program(1)]);
}

/// Course lifecycle: create against an existing program succeeds, a second
/// create with the same id reports DuplicateId, and a create citing an
/// absent program reports ProgramNotFound — in both failures the list
/// length is unchanged.
#[test]
fn course_creation_checks_id_then_reference() {
    let catalog = TempCatalog::new();
    catalog.programs().create(program(5)).expect("create program");
    let courses = catalog.courses();

    courses.create(course(10, 5)).expect("create course");

    let err = courses.create(course(10, 5)).expect_err("duplicate");
    assert!(matches!(err, RepoError::DuplicateId { id: 10 }));

    let err = courses.create(course(11, 999)).expect_err("bad reference");
    assert!(matches!(err, RepoError::ProgramNotFound { id: 999 }));

    assert_eq!(courses.read_all().expect("read").len(), 1);
}

/// Deleting a program does not cascade: its courses stay on disk and remain
/// retrievable, dangling reference and all.
#[test]
fn program_delete_leaves_orphan_courses() {
    let catalog = TempCatalog::new();
    catalog.programs().create(program(5)).expect("create program");
    catalog.courses().create(course(10, 5)).expect("create course");

    catalog.programs().delete(5).expect("delete program");

    assert!(catalog.programs().read_all().expect("read").is_empty());
    assert_eq!(
        catalog.courses().read_all().expect("read"),
        vec![course(10, 5)]
    );
    // The orphan still shows up when listing by its (now absent) program.
    assert_eq!(
        catalog.courses().list_by_program(5).expect("list").len(),
        1
    );
}

/// Reset empties both files regardless of prior content.
#[test]
fn reset_clears_both_lists() {
    let catalog = TempCatalog::new();
    catalog.programs().create(program(1)).expect("create");
    catalog.programs().create(program(2)).expect("create");
    catalog.courses().create(course(10, 1)).expect("create");

    catalog.programs().reset().expect("reset programs");
    catalog.courses().reset().expect("reset courses");

    assert!(catalog.programs().read_all().expect("read").is_empty());
    assert!(catalog.courses().read_all().expect("read").is_empty());
}

/// The files on disk carry the legacy Spanish field names exactly.
#[test]
fn data_files_keep_the_persisted_field_names() {
    let catalog = TempCatalog::new();
    catalog.programs().create(program(1)).expect("create program");
    catalog.courses().create(course(10, 1)).expect("create course");

    let programs_raw =
        fs::read_to_string(&catalog.config.programs_file).expect("read programs file");
    for key in ["\"nombre\"", "\"duracion\"", "\"activa\"", "\"fechaCreacion\""] {
        assert!(programs_raw.contains(key), "missing {key}");
    }

    let courses_raw = fs::read_to_string(&catalog.config.courses_file).expect("read courses file");
    for key in ["\"creditos\"", "\"obligatoria\"", "\"carreraId\""] {
        assert!(courses_raw.contains(key), "missing {key}");
    }
}

/// A corrupted data file surfaces as a hard failure on the next load.
#[test]
fn corrupted_file_fails_to_load() {
    let catalog = TempCatalog::new();
    catalog.programs().create(program(1)).expect("create");
    fs::write(&catalog.config.programs_file, "not json at all").expect("corrupt");

    let err = catalog.programs().read_all().expect_err("must fail");
    assert!(matches!(err, RepoError::Store(_)));
    assert!(!err.is_domain_outcome());
}
