use crate::domain::model::Person;
use crate::utils::error::{Result, RosterError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Non-empty pool with unique employee ids. Every duplicated id is reported once,
/// in the order its second occurrence was found.
pub fn validate_pool(pool_name: &str, people: &[Person]) -> Result<()> {
    if people.is_empty() {
        return Err(RosterError::validation(format!(
            "{} must not be empty",
            pool_name
        )));
    }

    let mut seen = HashSet::with_capacity(people.len());
    let mut duplicates: Vec<String> = Vec::new();
    for person in people {
        let id = person.employee_id();
        if !seen.insert(id) && !duplicates.iter().any(|d| d == id) {
            duplicates.push(id.to_string());
        }
    }

    if !duplicates.is_empty() {
        return Err(RosterError::validation_with_ids(
            format!(
                "{} contains duplicate employee ids: {}",
                pool_name,
                duplicates.join(", ")
            ),
            duplicates,
        ));
    }

    Ok(())
}

pub fn validate_min_pool_size(pool_name: &str, people: &[Person], min_size: usize) -> Result<()> {
    if people.len() < min_size {
        return Err(RosterError::validation_with_ids(
            format!(
                "{} needs at least {} people, got {}",
                pool_name,
                min_size,
                people.len()
            ),
            people.iter().map(|p| p.employee_id().to_string()).collect(),
        ));
    }
    Ok(())
}

/// Both pools must have disjoint id sets; all overlapping ids are reported in `pool_b` order.
pub fn validate_disjoint(pool_a: &[Person], pool_b: &[Person]) -> Result<()> {
    let pool_a_ids: HashSet<&str> = pool_a.iter().map(Person::employee_id).collect();
    let overlap: Vec<String> = pool_b
        .iter()
        .map(Person::employee_id)
        .filter(|id| pool_a_ids.contains(id))
        .map(str::to_string)
        .collect();

    if !overlap.is_empty() {
        return Err(RosterError::validation_with_ids(
            format!(
                "poolA and poolB share employee ids: {}",
                overlap.join(", ")
            ),
            overlap,
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one value is required".to_string(),
        });
    }
    Ok(())
}
