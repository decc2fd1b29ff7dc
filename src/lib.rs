pub mod cli;
mod constants;
mod path;
mod report;
mod textual;

pub use constants::{ALT_SEPARATOR, DEMO_LEFT, DEMO_RIGHTS, SEPARATOR};
pub use path::DrivePath;
pub use report::JoinReport;
pub use textual::{is_absolute_text, splice};

// runs both joining rules on one fragment pair
pub fn compare_join(left: &str, right: &str) -> JoinReport {
    JoinReport::new(left, right)
}

// runs both joining rules on each right fragment against the same left fragment
pub fn compare_join_pairs(left: &str, rights: &[&str]) -> Vec<JoinReport> {
    rights
        .iter()
        .map(|right| JoinReport::new(left, right))
        .collect()
}

#[cfg(test)]
mod tests {
    #[test]
    fn demo_pairs_compare() {
        let reports = super::compare_join_pairs(super::DEMO_LEFT, &super::DEMO_RIGHTS);

        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].joined.to_string(), "C:\\foo");
        assert!(reports[0].joined_is_absolute());
        assert_eq!(reports[0].spliced, "C:\\C:foo");
        assert!(!reports[0].spliced_is_absolute());

        assert_eq!(reports[1].joined.to_string(), "D:foo");
        assert!(!reports[1].joined_is_absolute());
        assert_eq!(reports[1].spliced, "C:\\D:foo");
        assert!(!reports[1].spliced_is_absolute());
    }

    #[test]
    fn compare_join_matches_pairwise_run() {
        let single = super::compare_join("C:\\", "C:foo");
        let paired = super::compare_join_pairs("C:\\", &["C:foo"]);

        assert_eq!(paired.len(), 1);
        assert_eq!(paired[0], single);
    }
}
