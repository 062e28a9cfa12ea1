//! Course catalogue and generator settings used to fill in sample schedules
use crate::error::{Result, TranscriptError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// All programs sample courses can be drawn from.
///
/// Serialized as a bare JSON array of programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    pub programs: Vec<Program>,
}

/// A program's course list and the staff who teach it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub name: String,
    pub courses: Vec<CatalogCourse>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCourse {
    pub code: String,   // e.g. "COMP1234"
    pub title: String,  // e.g. "Intro to Systems"
    #[serde(default)]
    pub credits: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
}

/// Knobs for the sample generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub min_courses: usize,
    pub max_courses: usize,
    /// Year printed in terms, statuses and date ranges
    pub year: i32,
    /// Shortest meeting length in whole hours
    pub min_hours: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            min_courses: 3,
            max_courses: 5,
            year: 2025,
            min_hours: 3,
        }
    }
}

impl SampleConfig {
    /// Loads generator settings from a JSON file; missing keys keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TranscriptError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl CourseCatalog {
    /// Loads a catalogue from a single JSON file
    ///
    /// # Arguments
    /// * `path` - Path to a JSON array of programs
    ///
    /// # Returns
    /// * `Ok(CourseCatalog)` - The parsed catalogue
    /// * `Err` - If the file can't be read or parsed
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TranscriptError::io(path, e))?;
        let catalog: CourseCatalog = serde_json::from_str(&content)?;

        info!(
            "Loaded course catalogue from {} ({} programs, {} courses)",
            path.display(),
            catalog.programs.len(),
            catalog.course_count()
        );

        Ok(catalog)
    }

    /// Loads and merges every `.json` catalogue in a directory
    ///
    /// Files are read in name order so the merged program order is stable.
    /// A missing directory yields an empty catalogue.
    pub fn load_from_directory(dir: &Path) -> Result<Self> {
        let mut programs = Vec::new();

        if dir.exists() && dir.is_dir() {
            let mut paths = Vec::new();
            for entry in fs::read_dir(dir).map_err(|e| TranscriptError::io(dir, e))? {
                let path = entry.map_err(|e| TranscriptError::io(dir, e))?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("json") {
                    paths.push(path);
                }
            }
            paths.sort();

            for path in paths {
                programs.extend(Self::load_from_path(&path)?.programs);
            }
        }

        Ok(CourseCatalog { programs })
    }

    /// Small catalogue bundled with the crate.
    pub fn builtin() -> Self {
        fn course(code: &str, title: &str, credits: Option<f64>) -> CatalogCourse {
            CatalogCourse {
                code: code.to_string(),
                title: title.to_string(),
                credits,
            }
        }
        fn staff(names: &[&str]) -> Vec<StaffMember> {
            names
                .iter()
                .map(|name| StaffMember {
                    name: name.to_string(),
                })
                .collect()
        }

        CourseCatalog {
            programs: vec![
                Program {
                    name: "Computing".to_string(),
                    courses: vec![
                        course("COMP1234", "Intro to Systems", Some(3.0)),
                        course("COMP2510", "Procedural Programming", Some(4.0)),
                        course("COMP3760", "Algorithm Analysis and Design", Some(4.0)),
                        course("COMP4960", "Software Engineering", None),
                    ],
                    staff: staff(&["Pat Morgan", "Jordan Lee", "Sam Okafor"]),
                },
                Program {
                    name: "Business".to_string(),
                    courses: vec![
                        course("BUSA1100", "Fundamentals of Accounting", Some(3.0)),
                        course("MKTG1102", "Marketing Principles", Some(3.0)),
                        course("OPMT1130", "Business Statistics", Some(1.5)),
                    ],
                    staff: staff(&["Alex Chen", "Riley Singh"]),
                },
                Program {
                    name: "Mathematics".to_string(),
                    courses: vec![
                        course("MATH1310", "Technical Mathematics", Some(4.5)),
                        course("MATH2441", "Probability and Statistics", Some(3.0)),
                    ],
                    staff: staff(&["Morgan Diaz"]),
                },
            ],
        }
    }

    /// Number of courses across all programs.
    pub fn course_count(&self) -> usize {
        self.programs.iter().map(|p| p.courses.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.course_count() == 0
    }
}
