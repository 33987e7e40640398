use crate::domain::model::{Assignment, Person};
use crate::report::naming::CONTENT_TIMESTAMP_FORMAT;
use crate::report::{ensure_exportable, ReportExporter};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

/// Summary statistics plus a per-reviewer table sorted by employee id.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn or_dash(text: String) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text
    }
}

impl ReportExporter for MarkdownExporter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn default_prefix(&self) -> &'static str {
        "review_summary"
    }

    fn render(&self, assignment: &Assignment, generated_at: NaiveDateTime) -> Result<Vec<u8>> {
        ensure_exportable(assignment, "Markdown")?;

        let reviewers = assignment.len();
        let covered = assignment.covered_reviewee_ids().len();
        let tasks = assignment.total_tasks();
        let (min_load, max_load) = assignment.load_range().unwrap_or((0, 0));

        let mut out = String::new();
        out.push_str("# Code Review Assignments\n\n");
        out.push_str(&format!(
            "> **Generated**: {}  \n",
            generated_at.format(CONTENT_TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("> **Mode**: {}  \n", assignment.mode()));

        out.push_str("\n## Summary\n");
        out.push_str("| Item | Value |\n");
        out.push_str("|------|------|\n");
        out.push_str(&format!("| Participating reviewers | **{}** |\n", reviewers));
        out.push_str(&format!("| Reviewees covered | **{}** |\n", covered));
        out.push_str(&format!("| Review tasks | **{}** |\n", tasks));
        out.push_str(&format!(
            "| Average load | **{:.1}** per reviewer |\n",
            assignment.average_load()
        ));
        out.push_str(&format!(
            "| Load range | **{}** to **{}** |\n",
            min_load, max_load
        ));
        out.push_str(
            "\n> Every reviewee is covered; reviewers are sampled when there are more than needed, \
             and loads differ by at most one.\n\n",
        );

        out.push_str("## Assignments\n");
        out.push_str("| Reviewer | Employee ID | Reviewees | Reviewee IDs | Count |\n");
        out.push_str("|:---------|:------------|:----------|:-------------|------:|\n");
        for (reviewer, reviewees) in assignment.iter() {
            let names: Vec<String> = reviewees
                .iter()
                .map(|p| escape_markdown(p.name()))
                .collect();
            let ids: Vec<&str> = reviewees.iter().map(Person::employee_id).collect();
            out.push_str(&format!(
                "| {} | `{}` | {} | `{}` | {} |\n",
                escape_markdown(reviewer.name()),
                reviewer.employee_id(),
                or_dash(names.join(", ")),
                or_dash(ids.join(", ")),
                reviewees.len()
            ));
        }

        out.push_str("\n## Notes\n");
        out.push_str("- **Reviewers**: finish the reviews listed next to your name\n");
        out.push_str("- **Reviewees**: have your changes ready and let your reviewer know\n");
        out.push_str("- **Load**: balanced automatically, the busiest reviewer has at most one more review than the least busy\n\n");

        out.push_str("---\n");
        out.push_str(&format!(
            "Generated by review-roster v{}. Report file names carry a timestamp so earlier runs are kept.\n",
            env!("CARGO_PKG_VERSION")
        ));

        tracing::debug!(
            "Rendered Markdown report: {} reviewers, {} reviewees covered",
            reviewers,
            covered
        );
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assigner::ReviewAssigner;
    use crate::core::shuffle::KeepOrder;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_markdown_summary_and_rows() {
        let pool_a: Vec<Person> = ["A3", "A1", "A2"]
            .iter()
            .map(|id| Person::new(format!("Dev {}", id), id).unwrap())
            .collect();
        let pool_b = vec![Person::new("Ops|Lead", "B1").unwrap()];
        let assignment = ReviewAssigner::new(KeepOrder)
            .assign_dual_pool(&pool_a, &pool_b)
            .unwrap();

        let text = String::from_utf8(MarkdownExporter.render(&assignment, generated_at()).unwrap())
            .unwrap();

        assert!(text.contains("> **Generated**: 2026-02-07 09:05:00"));
        assert!(text.contains("> **Mode**: dual pool (cross review)"));
        assert!(text.contains("| Participating reviewers | **2** |"));
        assert!(text.contains("| Reviewees covered | **4** |"));
        assert!(text.contains("| Review tasks | **4** |"));
        assert!(text.contains("| Average load | **2.0** per reviewer |"));
        assert!(text.contains("| Load range | **1** to **3** |"));
        assert!(text.contains("| Dev A3 | `A3` | Ops\\|Lead | `B1` | 1 |"));
        assert!(text.contains("| Ops\\|Lead | `B1` | Dev A3, Dev A1, Dev A2 | `A3, A1, A2` | 3 |"));

        // Rows are ordered by reviewer id.
        let a3 = text.find("| Dev A3 |").unwrap();
        let b1 = text.find("| Ops\\|Lead | `B1`").unwrap();
        assert!(a3 < b1);
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a|b\nc"), "a\\|b c");
    }
}
