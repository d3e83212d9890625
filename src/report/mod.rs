//! Run report aggregation and rendering
//!
//! Collects probe outcomes in run order and renders the final
//! human-readable summary printed to stdout.

use crate::probe::ProbeOutcome;
use chrono::{DateTime, Utc};

/// Width of the banner rule lines
const RULE_WIDTH: usize = 60;

/// Aggregated outcomes of one probe run
#[derive(Debug)]
pub struct ProbeReport {
    /// Endpoint the run targeted
    endpoint: String,
    /// Outcomes in run order
    outcomes: Vec<ProbeOutcome>,
    /// When the run started
    started_at: DateTime<Utc>,
}

impl ProbeReport {
    /// Create an empty report for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            outcomes: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Record one probe outcome
    pub fn record(&mut self, outcome: ProbeOutcome) {
        self.outcomes.push(outcome);
    }

    /// Endpoint the run targeted
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Recorded outcomes in run order
    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    /// Number of passed probes
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Total number of recorded probes
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether every recorded probe passed
    ///
    /// An empty report never counts as passing.
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| o.passed)
    }

    /// Render the summary block
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&rule);
        out.push('\n');
        out.push_str("CONTACT FORM API PROBE SUMMARY\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Endpoint: {}\n", self.endpoint));
        out.push_str(&format!(
            "Started:  {}\n\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("{}: {}\n", title_case(outcome.name), status));
        }

        out.push_str(&format!(
            "\nOverall: {}/{} probes passed\n",
            self.passed_count(),
            self.total()
        ));

        if self.all_passed() {
            out.push_str("All probes passed - contact form API is behaving as expected\n");
        } else {
            out.push_str("Some probes failed - contact form API violates the expected contract\n");
        }

        out
    }
}

/// Turn a snake_case probe name into a title-cased display label
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> ProbeReport {
        let mut report = ProbeReport::new("http://localhost:8001/api/contacts");
        report.record(ProbeOutcome::passed("valid_submission").with_contact_id("id-1"));
        report.record(ProbeOutcome::passed("invalid_email"));
        report.record(ProbeOutcome::failed("missing_fields"));
        report
    }

    #[test]
    fn test_counts() {
        let report = sample_report();
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed_count(), 2);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_all_passed() {
        let mut report = ProbeReport::new("http://localhost:8001/api/contacts");
        report.record(ProbeOutcome::passed("valid_submission"));
        report.record(ProbeOutcome::passed("invalid_email"));
        assert!(report.all_passed());
    }

    #[test]
    fn test_empty_report_is_not_passing() {
        let report = ProbeReport::new("http://localhost:8001/api/contacts");
        assert!(!report.all_passed());
    }

    #[test]
    fn test_render_contains_per_probe_lines() {
        let rendered = sample_report().render();

        assert!(rendered.contains("CONTACT FORM API PROBE SUMMARY"));
        assert!(rendered.contains("Endpoint: http://localhost:8001/api/contacts"));
        assert!(rendered.contains("Valid Submission: PASS"));
        assert!(rendered.contains("Invalid Email: PASS"));
        assert!(rendered.contains("Missing Fields: FAIL"));
        assert!(rendered.contains("Overall: 2/3 probes passed"));
        assert!(rendered.contains("Some probes failed"));
    }

    #[test]
    fn test_render_success_verdict() {
        let mut report = ProbeReport::new("http://localhost:8001/api/contacts");
        report.record(ProbeOutcome::passed("valid_submission"));

        let rendered = report.render();
        assert!(rendered.contains("Overall: 1/1 probes passed"));
        assert!(rendered.contains("All probes passed"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("valid_submission"), "Valid Submission");
        assert_eq!(title_case("persistence"), "Persistence");
        assert_eq!(title_case("invalid_message"), "Invalid Message");
    }
}
