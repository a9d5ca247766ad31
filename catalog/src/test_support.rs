//! Test-only helpers: deterministic sample records and a temp-dir catalog.

use tempfile::TempDir;

use crate::courses::CourseRepository;
use crate::io::config::CatalogConfig;
use crate::model::{Course, Program};
use crate::programs::ProgramRepository;

/// Create a deterministic program with default fields.
pub fn program(id: u32) -> Program {
    Program {
        id,
        name: format!("program {id}"),
        duration_years: 4,
        active: true,
        created_on: "15/02/2021".to_string(),
    }
}

/// Create a deterministic course owned by `program_id`.
pub fn course(id: u32, program_id: u32) -> Course {
    Course {
        id,
        name: format!("course {id}"),
        credits: 6.0,
        mandatory: true,
        program_id,
    }
}

/// A catalog whose data files live in a temporary directory, dropped with it.
pub struct TempCatalog {
    _temp: TempDir,
    pub config: CatalogConfig,
}

impl TempCatalog {
    /// Temp dir with the default file names; no data files exist yet.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("tempdir");
        let config = CatalogConfig {
            programs_file: temp.path().join("carreras.json"),
            courses_file: temp.path().join("materias.json"),
        };
        Self {
            _temp: temp,
            config,
        }
    }

    pub fn programs(&self) -> ProgramRepository {
        ProgramRepository::new(&self.config.programs_file)
    }

    pub fn courses(&self) -> CourseRepository {
        CourseRepository::new(&self.config.courses_file, &self.config.programs_file)
    }
}
