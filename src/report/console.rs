use crate::domain::model::{Assignment, Person};
use crate::utils::format::{display_width, left_align};

const COLUMN_GAP: usize = 2;
const EMPTY_COLUMN_WIDTH: usize = 20;
const MIN_RULE_WIDTH: usize = 50;

fn column_width<'a>(people: impl Iterator<Item = &'a Person>) -> usize {
    people
        .map(|p| display_width(&p.to_string()))
        .max()
        .unwrap_or(EMPTY_COLUMN_WIDTH)
        + COLUMN_GAP
}

/// Two-column table: reviewer, then reviewees joined with `, `.
pub fn render_table(assignment: &Assignment) -> String {
    let reviewer_width = column_width(assignment.reviewers());
    let reviewee_width = column_width(assignment.iter().flat_map(|(_, reviewees)| reviewees));
    let rule = "─".repeat((reviewer_width + reviewee_width).max(MIN_RULE_WIDTH));

    let mut lines = Vec::with_capacity(assignment.len() + 4);
    lines.push(format!(
        "{}{}",
        left_align("Reviewer", reviewer_width),
        left_align("→ Reviewees", reviewee_width)
    ));
    lines.push(rule.clone());

    for (reviewer, reviewees) in assignment.iter() {
        let targets: Vec<String> = reviewees.iter().map(Person::to_string).collect();
        lines.push(format!(
            "{}{}",
            left_align(&reviewer.to_string(), reviewer_width),
            targets.join(", ")
        ));
    }

    lines.push(rule);
    lines.push(format!(
        "{} reviewers assigned, all reviewees covered",
        assignment.len()
    ));
    lines.join("\n")
}

pub fn print_assignments(assignment: &Assignment) {
    println!("{}", render_table(assignment));
}
