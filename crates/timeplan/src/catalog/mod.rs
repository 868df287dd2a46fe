//! Lecture catalog loading and lookup.
//!
//! Catalogs arrive as per-term CSV exports from the registrar. The export
//! layout is fixed: course name in column 6, credits in column 7, professor
//! in column 9, the raw time description in column 10, and the declared
//! lecture hours in column 11 when present. Rows are matched
//! by course name, exactly first and then by normalized substring, because
//! roadmap data and user input rarely spell names identically to the export.

use crate::error::PlannerError;
use dashmap::DashMap;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// One lecture row from a catalog export.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogLecture {
    pub name: String,
    pub professor: String,
    pub credits: f64,
    /// Declared weekly lecture length in hours, when the export carries it.
    /// Overrides the period span when the time text is parsed.
    pub hours: Option<u32>,
    /// Raw time description, fed to the schedule parser on demand.
    pub time_text: String,
}

/// An in-memory catalog for one term.
#[derive(Debug)]
pub struct Catalog {
    lectures: Vec<CatalogLecture>,
}

impl Catalog {
    /// Parses a catalog from raw CSV content. Header row is skipped; rows
    /// with too few columns are dropped rather than treated as errors.
    pub fn from_csv(content: &str) -> Self {
        let lectures = content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let columns = split_csv_line(line);
                if columns.len() < 11 {
                    return None;
                }

                let name = columns[6].trim().to_string();
                if name.is_empty() {
                    return None;
                }

                Some(CatalogLecture {
                    name,
                    professor: columns[9].trim().to_string(),
                    credits: columns[7].trim().parse().unwrap_or(3.0),
                    hours: columns.get(11).and_then(|c| c.trim().parse().ok()),
                    time_text: columns[10].trim().to_string(),
                })
            })
            .collect();

        Catalog { lectures }
    }

    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// Finds the first lecture matching the course name.
    pub fn find(&self, name: &str) -> Option<&CatalogLecture> {
        self.find_all(name).into_iter().next()
    }

    /// Finds every lecture matching the course name, so the caller can offer
    /// a choice between sections of the same course at different times.
    ///
    /// Exact name matches win; otherwise falls back to whitespace-stripped,
    /// case-insensitive substring matching in both directions.
    pub fn find_all(&self, name: &str) -> Vec<&CatalogLecture> {
        let exact: Vec<_> = self.lectures.iter().filter(|l| l.name == name).collect();
        if !exact.is_empty() {
            return exact;
        }

        let needle = normalize(name);
        self.lectures
            .iter()
            .filter(|l| {
                let candidate = normalize(&l.name);
                candidate.contains(&needle) || needle.contains(&candidate)
            })
            .collect()
    }

    /// Keyword search across course names and professors.
    pub fn search(&self, keyword: &str) -> Vec<&CatalogLecture> {
        self.lectures
            .iter()
            .filter(|l| l.name.contains(keyword) || l.professor.contains(keyword))
            .collect()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits one CSV line, honoring double-quoted fields.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => result.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    result.push(current);
    result
}

/// Lazily-loaded per-term catalog cache.
///
/// Catalogs are immutable once exported, so each term's file is read once
/// and shared.
pub struct CatalogStore {
    dir: PathBuf,
    cache: DashMap<String, Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(dir: PathBuf) -> Self {
        CatalogStore {
            dir,
            cache: DashMap::new(),
        }
    }

    /// Returns the catalog for a term, loading `<dir>/<term>.csv` on first use.
    pub fn for_term(&self, term: &str) -> Result<Arc<Catalog>, PlannerError> {
        // Term becomes a file name; keep path syntax out of it.
        if term.is_empty() || term.contains(['/', '\\', '.']) {
            return Err(PlannerError::InvalidTerm {
                term: term.to_string(),
            });
        }

        if let Some(catalog) = self.cache.get(term) {
            return Ok(catalog.clone());
        }

        let path = self.dir.join(format!("{term}.csv"));
        if !path.exists() {
            return Err(PlannerError::CatalogNotFound {
                term: term.to_string(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let catalog = Arc::new(Catalog::from_csv(&content));
        info!(
            "Loaded catalog for term {} ({} lectures)",
            term,
            catalog.len()
        );

        self.cache.insert(term.to_string(), catalog.clone());
        Ok(catalog)
    }

    /// Drops a cached term so the next request re-reads the file.
    pub fn invalidate(&self, term: &str) {
        self.cache.remove(term);
    }
}
