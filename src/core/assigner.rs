//! Reviewer assignment.
//!
//! Coverage of the reviewee side is mandatory; reviewer participation is not.
//! - Single pool: a shuffled ring where every member reviews the next one.
//! - Dual pool: `A→B` and `B→A` directional passes over two disjoint pools.
//!   When there are more candidate reviewers than reviewees only as many
//!   reviewers as needed are drawn (load 1 each); otherwise every reviewer
//!   takes part round-robin and loads differ by at most one.

use crate::core::shuffle::{FisherYates, Shuffler};
use crate::domain::model::{Assignment, AssignmentMode, Person};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_disjoint, validate_min_pool_size, validate_pool};
use rand::rngs::StdRng;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

pub const SINGLE_POOL_MIN_SIZE: usize = 2;

/// Reviewer to reviewees accumulated by one directional pass.
pub type DirectionalAssignment = BTreeMap<Person, Vec<Person>>;

pub struct ReviewAssigner<S: Shuffler> {
    shuffler: S,
}

impl ReviewAssigner<FisherYates<StdRng>> {
    pub fn from_os_rng() -> Self {
        Self::new(FisherYates::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(FisherYates::seeded(seed))
    }
}

impl<S: Shuffler> ReviewAssigner<S> {
    pub fn new(shuffler: S) -> Self {
        Self { shuffler }
    }

    /// Every member reviews exactly one other member and is reviewed exactly once.
    pub fn assign_single_pool(&mut self, people: &[Person]) -> Result<Assignment> {
        validate_pool("single pool", people)?;
        validate_min_pool_size("single pool", people, SINGLE_POOL_MIN_SIZE)?;

        let mut ring = people.to_vec();
        self.shuffler.shuffle(&mut ring);

        let n = ring.len();
        let entries: BTreeMap<Person, Vec<Person>> = (0..n)
            .map(|i| (ring[i].clone(), vec![ring[(i + 1) % n].clone()]))
            .collect();

        tracing::debug!("Single pool ring built over {} people", n);
        Ok(Assignment::new(AssignmentMode::Single, entries))
    }

    /// Cross review between two disjoint pools; both sides end up fully covered.
    pub fn assign_dual_pool(&mut self, pool_a: &[Person], pool_b: &[Person]) -> Result<Assignment> {
        validate_pool("poolA", pool_a)?;
        validate_pool("poolB", pool_b)?;
        validate_disjoint(pool_a, pool_b)?;

        let mut entries = self.assign_direction(pool_a, pool_b, "A→B")?;
        let reverse = self.assign_direction(pool_b, pool_a, "B→A")?;
        merge_into(&mut entries, reverse);

        Ok(Assignment::new(AssignmentMode::Dual, entries))
    }

    /// Distributes every reviewee to exactly one reviewer. `direction` only labels errors and logs.
    pub fn assign_direction(
        &mut self,
        reviewers: &[Person],
        reviewees: &[Person],
        direction: &str,
    ) -> Result<DirectionalAssignment> {
        if reviewees.is_empty() {
            return Ok(DirectionalAssignment::new());
        }
        if reviewers.is_empty() {
            return Err(RosterError::validation_with_ids(
                format!(
                    "direction {}: no reviewers available to cover {} reviewees",
                    direction,
                    reviewees.len()
                ),
                reviewees.iter().map(|p| p.employee_id().to_string()).collect(),
            ));
        }

        let mut shuffled_reviewees = reviewees.to_vec();
        self.shuffler.shuffle(&mut shuffled_reviewees);
        let mut shuffled_reviewers = reviewers.to_vec();
        self.shuffler.shuffle(&mut shuffled_reviewers);

        let mut assignment = DirectionalAssignment::new();

        if shuffled_reviewers.len() >= shuffled_reviewees.len() {
            // Large pool reviews small pool: draw one reviewer per reviewee.
            shuffled_reviewers.truncate(shuffled_reviewees.len());
            for (reviewer, reviewee) in shuffled_reviewers.into_iter().zip(shuffled_reviewees) {
                assignment.insert(reviewer, vec![reviewee]);
            }
            tracing::debug!(
                "Direction {}: sampled {} of {} reviewers, load 1 each",
                direction,
                reviewees.len(),
                reviewers.len()
            );
        } else {
            // Small pool reviews large pool: everyone works, round-robin.
            let reviewer_count = shuffled_reviewers.len();
            for (i, reviewee) in shuffled_reviewees.into_iter().enumerate() {
                let reviewer = &shuffled_reviewers[i % reviewer_count];
                assignment
                    .entry(reviewer.clone())
                    .or_default()
                    .push(reviewee);
            }
            tracing::debug!(
                "Direction {}: {} reviewers share {} reviewees",
                direction,
                reviewer_count,
                reviewees.len()
            );
        }

        Ok(assignment)
    }
}

/// Unions reviewee lists when a reviewer already has an entry.
fn merge_into(target: &mut DirectionalAssignment, part: DirectionalAssignment) {
    for (reviewer, reviewees) in part {
        match target.entry(reviewer) {
            Entry::Vacant(slot) => {
                slot.insert(reviewees);
            }
            Entry::Occupied(mut slot) => {
                tracing::warn!(
                    "Reviewer {} assigned in both directions, merging reviewee lists",
                    slot.key()
                );
                slot.get_mut().extend(reviewees);
            }
        }
    }
}

/// Single-pool assignment with an OS-seeded shuffle.
pub fn assign_single_pool(people: &[Person]) -> Result<Assignment> {
    ReviewAssigner::from_os_rng().assign_single_pool(people)
}

/// Dual-pool assignment with an OS-seeded shuffle.
pub fn assign_dual_pool(pool_a: &[Person], pool_b: &[Person]) -> Result<Assignment> {
    ReviewAssigner::from_os_rng().assign_dual_pool(pool_a, pool_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shuffle::KeepOrder;

    fn person(name: &str, id: &str) -> Person {
        Person::new(name, id).unwrap()
    }

    fn pool(prefix: &str, ids: std::ops::RangeInclusive<u32>) -> Vec<Person> {
        ids.map(|i| person(&format!("{}{}", prefix, i), &format!("E{}", i)))
            .collect()
    }

    fn ids(people: &[Person]) -> Vec<&str> {
        people.iter().map(Person::employee_id).collect()
    }

    #[test]
    fn test_two_people_review_each_other() {
        let a = person("A", "E1");
        let b = person("B", "E2");
        let assignment = ReviewAssigner::new(KeepOrder)
            .assign_single_pool(&[a.clone(), b.clone()])
            .unwrap();

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get(&a), Some(&[b.clone()][..]));
        assert_eq!(assignment.get(&b), Some(&[a][..]));
        assert_eq!(assignment.mode(), AssignmentMode::Single);
    }

    #[test]
    fn test_single_pool_ring_with_identity_order() {
        let people = pool("P", 1..=4);
        let assignment = ReviewAssigner::new(KeepOrder)
            .assign_single_pool(&people)
            .unwrap();

        assert_eq!(ids(assignment.reviewees_of("E1").unwrap()), vec!["E2"]);
        assert_eq!(ids(assignment.reviewees_of("E3").unwrap()), vec!["E4"]);
        assert_eq!(ids(assignment.reviewees_of("E4").unwrap()), vec!["E1"]);
    }

    #[test]
    fn test_single_pool_rejects_one_person() {
        let err = ReviewAssigner::seeded(1)
            .assign_single_pool(&[person("A", "E1")])
            .unwrap_err();
        assert!(matches!(err, RosterError::ValidationError { .. }));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_single_pool_rejects_duplicates_and_empty() {
        let dup = vec![person("A", "E1"), person("B", "E1")];
        let err = ReviewAssigner::seeded(1).assign_single_pool(&dup).unwrap_err();
        assert_eq!(err.employee_ids(), ["E1".to_string()]);
        assert!(err.to_string().contains("single pool"));

        assert!(ReviewAssigner::seeded(1).assign_single_pool(&[]).is_err());
    }

    #[test]
    fn test_dual_pool_identity_example() {
        let pool_a = pool("A", 1..=3);
        let pool_b = vec![person("B1", "E4")];
        let assignment = ReviewAssigner::new(KeepOrder)
            .assign_dual_pool(&pool_a, &pool_b)
            .unwrap();

        // A→B draws only E1; E2 and E3 are idle in that direction.
        assert_eq!(ids(assignment.reviewees_of("E1").unwrap()), vec!["E4"]);
        assert!(assignment.reviewees_of("E2").is_none());
        assert!(assignment.reviewees_of("E3").is_none());
        // B→A: the single member of B covers all of A.
        assert_eq!(
            ids(assignment.reviewees_of("E4").unwrap()),
            vec!["E1", "E2", "E3"]
        );
        assert_eq!(assignment.mode(), AssignmentMode::Dual);
    }

    #[test]
    fn test_dual_pool_overlap_names_ids() {
        let pool_a = vec![person("A", "E1"), person("B", "E2")];
        let pool_b = vec![person("B again", "E2"), person("C", "E3")];
        let err = ReviewAssigner::seeded(9)
            .assign_dual_pool(&pool_a, &pool_b)
            .unwrap_err();

        assert_eq!(err.employee_ids(), ["E2".to_string()]);
        assert!(err.to_string().contains("E2"));
    }

    #[test]
    fn test_dual_pool_validates_each_pool() {
        let good = pool("A", 1..=2);
        let dup = vec![person("X", "E9"), person("Y", "E9")];
        let err = ReviewAssigner::seeded(2).assign_dual_pool(&good, &dup).unwrap_err();
        assert!(err.to_string().contains("poolB"));

        let err = ReviewAssigner::seeded(2).assign_dual_pool(&[], &good).unwrap_err();
        assert!(err.to_string().contains("poolA"));
    }

    #[test]
    fn test_direction_with_no_reviewees_is_empty() {
        let result = ReviewAssigner::seeded(5)
            .assign_direction(&[], &[], "A→B")
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_direction_without_reviewers_fails() {
        let err = ReviewAssigner::seeded(5)
            .assign_direction(&[], &pool("B", 1..=2), "A→B")
            .unwrap_err();
        assert!(err.to_string().contains("A→B"));
        assert_eq!(err.employee_ids().len(), 2);
    }

    #[test]
    fn test_direction_round_robin_identity() {
        let reviewers = pool("R", 1..=2);
        let reviewees = pool("T", 3..=7);
        let result = ReviewAssigner::new(KeepOrder)
            .assign_direction(&reviewers, &reviewees, "R→T")
            .unwrap();

        assert_eq!(ids(&result[&reviewers[0]]), vec!["E3", "E5", "E7"]);
        assert_eq!(ids(&result[&reviewers[1]]), vec!["E4", "E6"]);
    }

    #[test]
    fn test_caller_pools_are_not_reordered() {
        let pool_a = pool("A", 1..=6);
        let pool_b = pool("B", 7..=9);
        let before_a = pool_a.clone();
        let before_b = pool_b.clone();

        ReviewAssigner::seeded(11)
            .assign_dual_pool(&pool_a, &pool_b)
            .unwrap();

        assert_eq!(ids(&pool_a), ids(&before_a));
        assert_eq!(ids(&pool_b), ids(&before_b));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let people = pool("P", 1..=12);
        let first = ReviewAssigner::seeded(2024).assign_single_pool(&people).unwrap();
        let second = ReviewAssigner::seeded(2024).assign_single_pool(&people).unwrap();
        assert_eq!(first, second);

        let pool_a = pool("A", 1..=3);
        let pool_b = pool("B", 4..=10);
        let first = ReviewAssigner::seeded(7).assign_dual_pool(&pool_a, &pool_b).unwrap();
        let second = ReviewAssigner::seeded(7).assign_dual_pool(&pool_a, &pool_b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_unions_lists() {
        let r = person("R", "E1");
        let mut target = DirectionalAssignment::new();
        target.insert(r.clone(), vec![person("X", "E2")]);
        let mut part = DirectionalAssignment::new();
        part.insert(r.clone(), vec![person("Y", "E3")]);
        part.insert(person("S", "E4"), vec![person("Z", "E5")]);

        merge_into(&mut target, part);

        assert_eq!(ids(&target[&r]), vec!["E2", "E3"]);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_os_seeded_helpers_hold_invariants() {
        let people = pool("P", 1..=5);
        let assignment = assign_single_pool(&people).unwrap();
        assert_eq!(assignment.len(), 5);
        assert!(assignment
            .iter()
            .all(|(reviewer, reviewees)| reviewees.len() == 1 && reviewees[0] != *reviewer));

        let assignment = assign_dual_pool(&pool("A", 1..=2), &pool("B", 3..=3)).unwrap();
        assert_eq!(assignment.covered_reviewee_ids().len(), 3);
    }
}
