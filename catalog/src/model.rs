//! The two record types and their persisted JSON contract.
//!
//! The serde renames are load-bearing: the files on disk predate this
//! implementation and carry Spanish field names. Changing a rename breaks
//! compatibility with existing data files.

use serde::{Deserialize, Serialize};

/// An academic program (carrera).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Nominal length of the program in years.
    #[serde(rename = "duracion")]
    pub duration_years: u32,
    #[serde(rename = "activa")]
    pub active: bool,
    /// Free-text `dd/MM/yyyy` date, stored exactly as entered (unvalidated).
    #[serde(rename = "fechaCreacion")]
    pub created_on: String,
}

/// A course (materia) belonging to exactly one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "creditos")]
    pub credits: f64,
    #[serde(rename = "obligatoria")]
    pub mandatory: bool,
    /// Identifier of the owning program. Checked to exist only when the
    /// course is created; a deleted program leaves this dangling.
    #[serde(rename = "carreraId")]
    pub program_id: u32,
}
