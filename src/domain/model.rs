use crate::utils::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A person taking part in review, identified solely by `employee_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersonRecord")]
pub struct Person {
    name: String,
    employee_id: String,
}

/// Raw JSON shape of a person. Missing fields read as blank so `Person::new` rejects them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    employee_id: String,
}

impl Person {
    /// Both fields are trimmed and must be non-empty afterwards.
    pub fn new(name: impl AsRef<str>, employee_id: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        let employee_id = employee_id.as_ref().trim();

        if name.is_empty() {
            return Err(RosterError::validation_with_ids(
                format!("name must not be empty (employee id '{}')", employee_id),
                vec![employee_id.to_string()],
            ));
        }
        if employee_id.is_empty() {
            return Err(RosterError::validation(format!(
                "employee id must not be empty (name '{}')",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            employee_id: employee_id.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = RosterError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::new(record.name, record.employee_id)
    }
}

impl Borrow<str> for Person {
    fn borrow(&self) -> &str {
        &self.employee_id
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.employee_id.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.employee_id.cmp(&other.employee_id)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.employee_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AssignmentMode {
    /// Everyone reviews the next person in a shuffled ring.
    Single,
    /// Two disjoint pools review each other.
    Dual,
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentMode::Single => write!(f, "single pool (circular)"),
            AssignmentMode::Dual => write!(f, "dual pool (cross review)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Csv,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Reviewer to reviewees mapping. Iterates in reviewer `employee_id` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    mode: AssignmentMode,
    entries: BTreeMap<Person, Vec<Person>>,
}

impl Assignment {
    pub(crate) fn new(mode: AssignmentMode, entries: BTreeMap<Person, Vec<Person>>) -> Self {
        Self { mode, entries }
    }

    pub fn mode(&self) -> AssignmentMode {
        self.mode
    }

    /// Number of participating reviewers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, reviewer: &Person) -> Option<&[Person]> {
        self.entries.get(reviewer).map(Vec::as_slice)
    }

    /// Lookup by id, convenient when only the key is at hand.
    pub fn reviewees_of(&self, employee_id: &str) -> Option<&[Person]> {
        self.entries.get(employee_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Person, &[Person])> {
        self.entries
            .iter()
            .map(|(reviewer, reviewees)| (reviewer, reviewees.as_slice()))
    }

    pub fn reviewers(&self) -> impl Iterator<Item = &Person> {
        self.entries.keys()
    }

    pub fn total_tasks(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn covered_reviewee_ids(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flatten()
            .map(Person::employee_id)
            .collect()
    }

    pub fn average_load(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total_tasks() as f64 / self.entries.len() as f64
    }

    /// Smallest and largest per-reviewer load, `None` when nobody was assigned.
    pub fn load_range(&self) -> Option<(usize, usize)> {
        let min = self.entries.values().map(Vec::len).min()?;
        let max = self.entries.values().map(Vec::len).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn person(name: &str, id: &str) -> Person {
        Person::new(name, id).unwrap()
    }

    #[test]
    fn test_person_trims_fields() {
        let p = person("  Alice ", " E1\t");
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.employee_id(), "E1");
        assert_eq!(p.to_string(), "Alice(E1)");
    }

    #[test]
    fn test_person_rejects_blank_fields() {
        assert!(matches!(
            Person::new("   ", "E1"),
            Err(RosterError::ValidationError { .. })
        ));
        assert!(matches!(
            Person::new("Alice", ""),
            Err(RosterError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_identity_is_employee_id_only() {
        let a = person("Alice", "E1");
        let renamed = person("Alicia", "E1");
        let b = person("Alice", "E2");

        assert_eq!(a, renamed);
        assert_ne!(a, b);

        let set: HashSet<Person> = [a, renamed, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_person_json_uses_camel_case() {
        let p: Person =
            serde_json::from_str(r#"{"name": " Bob ", "employeeId": "E7", "team": "x"}"#).unwrap();
        assert_eq!(p.name(), "Bob");
        assert_eq!(p.employee_id(), "E7");

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Bob", "employeeId": "E7"}));

        assert!(serde_json::from_str::<Person>(r#"{"name": "", "employeeId": "E7"}"#).is_err());
    }

    #[test]
    fn test_assignment_statistics() {
        let (a, b, c, d) = (
            person("A", "E1"),
            person("B", "E2"),
            person("C", "E3"),
            person("D", "E4"),
        );
        let mut entries = BTreeMap::new();
        entries.insert(d.clone(), vec![a.clone(), b.clone()]);
        entries.insert(a.clone(), vec![d.clone()]);
        entries.insert(c.clone(), vec![d.clone()]);
        let assignment = Assignment::new(AssignmentMode::Dual, entries);

        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.total_tasks(), 4);
        assert_eq!(
            assignment.covered_reviewee_ids().into_iter().collect::<Vec<_>>(),
            vec!["E1", "E2", "E4"]
        );
        assert_eq!(assignment.load_range(), Some((1, 2)));
        assert!((assignment.average_load() - 4.0 / 3.0).abs() < f64::EPSILON);

        let order: Vec<&str> = assignment.reviewers().map(Person::employee_id).collect();
        assert_eq!(order, vec!["E1", "E3", "E4"]);
        assert_eq!(assignment.reviewees_of("E4"), Some(&[a.clone(), b.clone()][..]));
        assert_eq!(assignment.reviewees_of("E3"), assignment.get(&c));
        assert_eq!(assignment.reviewees_of("E2"), None);
    }

    #[test]
    fn test_person_borrows_as_employee_id() {
        let mut by_person = BTreeMap::new();
        by_person.insert(person("Alice", "E1"), 1);
        by_person.insert(person("Bob", "E2"), 2);

        assert_eq!(by_person.get("E2"), Some(&2));
        assert_eq!(by_person.get("Bob"), None);

        let set: HashSet<Person> = [person("Alice", "E1")].into_iter().collect();
        assert!(set.contains("E1"));
    }

    #[test]
    fn test_empty_assignment_statistics() {
        let assignment = Assignment::new(AssignmentMode::Single, BTreeMap::new());
        assert!(assignment.is_empty());
        assert_eq!(assignment.average_load(), 0.0);
        assert_eq!(assignment.load_range(), None);
    }
}
