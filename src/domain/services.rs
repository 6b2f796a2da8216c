use crate::domain::Job;

/// Free-text search over the job catalog.
pub struct JobSearch;

impl JobSearch {
    /// Case-insensitive substring match against title, company, or any skill.
    ///
    /// An empty term matches every job.
    pub fn matches(job: &Job, term: &str) -> bool {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        job.title.to_lowercase().contains(&needle)
            || job.company.to_lowercase().contains(&needle)
            || job.skills.iter().any(|skill| skill.to_lowercase().contains(&needle))
    }

    /// Returns the jobs matching `term`, in catalog order.
    pub fn filter<'a>(jobs: &'a [Job], term: &str) -> Vec<&'a Job> {
        jobs.iter().filter(|job| Self::matches(job, term)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobCatalog, JobId};

    fn ids(jobs: &[&Job]) -> Vec<JobId> {
        jobs.iter().map(|job| job.id).collect()
    }

    #[test]
    fn test_empty_term_matches_all() {
        let catalog = JobCatalog::mock();
        assert_eq!(JobSearch::filter(catalog.jobs(), "").len(), catalog.len());
    }

    #[test]
    fn test_matches_company_case_insensitive() {
        let catalog = JobCatalog::mock();
        let found = JobSearch::filter(catalog.jobs(), "citibank");
        assert_eq!(ids(&found), vec![JobId(1), JobId(2), JobId(5)]);
    }

    #[test]
    fn test_matches_skill() {
        let catalog = JobCatalog::mock();
        let found = JobSearch::filter(catalog.jobs(), "aws");
        assert_eq!(ids(&found), vec![JobId(1), JobId(3)]);
    }

    #[test]
    fn test_matches_title_fragment() {
        let catalog = JobCatalog::mock();
        let found = JobSearch::filter(catalog.jobs(), "Intern");
        assert_eq!(ids(&found), vec![JobId(5)]);
    }

    #[test]
    fn test_location_is_not_searched() {
        let catalog = JobCatalog::mock();
        assert!(JobSearch::filter(catalog.jobs(), "Singapore").is_empty());
    }
}
