use crate::{error::SourceError, memory::MemorySource};
use model::{
    domain::{lecturer::Lecturer, status::UserStatus, student::Student},
    records::record::Record,
};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedEntity {
    Lecturers,
    Students,
}

impl SeedEntity {
    pub fn records(&self) -> Vec<Record> {
        match self {
            SeedEntity::Lecturers => lecturers().iter().map(Record::from).collect(),
            SeedEntity::Students => students().iter().map(Record::from).collect(),
        }
    }

    pub fn source(&self) -> MemorySource {
        MemorySource::new(&self.to_string(), self.records())
    }
}

impl FromStr for SeedEntity {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lecturers" | "lecturer" | "lecture" => Ok(SeedEntity::Lecturers),
            "students" | "student" => Ok(SeedEntity::Students),
            other => Err(SourceError::UnsupportedFormat(format!(
                "No seed data for '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SeedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedEntity::Lecturers => write!(f, "lecturers"),
            SeedEntity::Students => write!(f, "students"),
        }
    }
}

pub fn lecturers() -> Vec<Lecturer> {
    vec![
        Lecturer {
            id: 1,
            nidn: Some("012345678901234".to_string()),
            name: "Dr. Andi Wijaya".to_string(),
            expertise: "Software Engineering".to_string(),
            academic_rank: 3,
            is_active: true,
        },
        Lecturer {
            id: 2,
            nidn: Some("098765432109876".to_string()),
            name: "Prof. Budi Santoso".to_string(),
            expertise: "Data Science".to_string(),
            academic_rank: 5,
            is_active: true,
        },
        Lecturer {
            id: 3,
            nidn: None,
            name: "Siti Rahma, M.Kom".to_string(),
            expertise: "Information Systems".to_string(),
            academic_rank: 2,
            is_active: false,
        },
    ]
}

pub fn students() -> Vec<Student> {
    let student = |id, nim: &str, name: &str, program: &str, entry_year, status| Student {
        id,
        nim: nim.to_string(),
        name: name.to_string(),
        faculty: "Fakultas Ilmu Komputer".to_string(),
        program: program.to_string(),
        entry_year,
        status,
    };

    vec![
        student(1, "2021010001", "Rina Kartika", "Informatika", 2021, UserStatus::Active),
        student(2, "2020010014", "Dimas Pratama", "Sistem Informasi", 2020, UserStatus::Active),
        student(3, "2019010027", "Ayu Lestari", "Informatika", 2019, UserStatus::Inactive),
        student(4, "2022010003", "Fajar Nugroho", "Teknik Komputer", 2022, UserStatus::Suspended),
    ]
}
