use crate::domain::model::{Person, PersonRecord};
use crate::utils::error::{Result, RosterError};
use serde::Deserialize;

/// `{ "people": [...] }`
#[derive(Debug, Deserialize)]
struct PoolSection {
    people: Option<Vec<Option<PersonRecord>>>,
}

/// `{ "poolA": { "people": [...] }, "poolB": { "people": [...] } }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DualPoolDocument {
    pool_a: Option<PoolSection>,
    pool_b: Option<PoolSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualPools {
    pub pool_a: Vec<Person>,
    pub pool_b: Vec<Person>,
}

pub fn parse_single_pool(bytes: &[u8]) -> Result<Vec<Person>> {
    let section: PoolSection = serde_json::from_slice(bytes)?;
    section.into_people("single pool")
}

pub fn parse_dual_pool(bytes: &[u8]) -> Result<DualPools> {
    let document: DualPoolDocument = serde_json::from_slice(bytes)?;
    let pool_a = document
        .pool_a
        .ok_or_else(|| RosterError::validation("poolA is missing"))?
        .into_people("poolA")?;
    let pool_b = document
        .pool_b
        .ok_or_else(|| RosterError::validation("poolB is missing"))?
        .into_people("poolB")?;
    Ok(DualPools { pool_a, pool_b })
}

impl PoolSection {
    fn into_people(self, pool_name: &str) -> Result<Vec<Person>> {
        let entries = self
            .people
            .ok_or_else(|| RosterError::validation(format!("{} has no people list", pool_name)))?;

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let record = entry.ok_or_else(|| {
                    RosterError::validation(format!(
                        "{} contains a null entry at index {}",
                        pool_name, index
                    ))
                })?;
                Person::try_from(record).map_err(|e| match e {
                    RosterError::ValidationError {
                        message,
                        employee_ids,
                    } => RosterError::validation_with_ids(
                        format!("{} entry at index {}: {}", pool_name, index, message),
                        employee_ids,
                    ),
                    other => other,
                })
            })
            .collect()
    }
}
