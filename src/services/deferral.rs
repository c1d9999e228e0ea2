use serde::Serialize;

/// Illustrative justifications for unassigned jobs.
///
/// The rotation is a presentation aid. It is not derived from the optimizer's
/// actual constraint data and must not be read as the authoritative cause.
pub const REASONS: [&str; 3] = [
    "Insufficient machine capacity within the schedule horizon",
    "Conflicts with a planned maintenance window",
    "Deferred to stay within cost constraints",
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeferredJobEntry {
    pub job_id: String,
    pub reason: &'static str,
}

pub fn explain_deferrals(unassigned_jobs: &[String]) -> Vec<DeferredJobEntry> {
    unassigned_jobs
        .iter()
        .enumerate()
        .map(|(index, job_id)| DeferredJobEntry {
            job_id: job_id.clone(),
            reason: REASONS[index % REASONS.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_rotate_with_period_three() {
        let ids: Vec<String> = (1..=8).map(|i| format!("J{i}")).collect();
        let entries = explain_deferrals(&ids);

        assert_eq!(entries.len(), ids.len());
        for i in 0..entries.len() - 3 {
            assert_eq!(entries[i].reason, entries[i + 3].reason);
        }
        assert_eq!(entries[0].reason, REASONS[0]);
        assert_eq!(entries[1].reason, REASONS[1]);
        assert_eq!(entries[2].reason, REASONS[2]);
    }

    #[test]
    fn order_of_job_ids_is_kept() {
        let ids = vec!["J9".to_string(), "J2".to_string()];
        let entries = explain_deferrals(&ids);
        assert_eq!(entries[0].job_id, "J9");
        assert_eq!(entries[1].job_id, "J2");
    }

    #[test]
    fn no_unassigned_jobs_means_no_entries() {
        assert!(explain_deferrals(&[]).is_empty());
    }
}
