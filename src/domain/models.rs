use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        JobId(id)
    }
}

/// The job postings the current user has applied to.
///
/// Members keep the order they were first applied in and never repeat.
/// Nothing removes a member once it is in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<JobId>", into = "Vec<JobId>")]
pub struct AppliedJobSet {
    members: Vec<JobId>,
}

impl AppliedJobSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = JobId> + '_ {
        self.members.iter().copied()
    }

    pub fn as_slice(&self) -> &[JobId] {
        &self.members
    }

    /// Returns a set holding `id` and every current member.
    ///
    /// When `id` is already present the result is an equal copy.
    pub fn with(&self, id: JobId) -> AppliedJobSet {
        let mut next = self.clone();
        next.insert(id);
        next
    }

    /// Adds `id` in place, returning whether membership grew.
    pub fn insert(&mut self, id: JobId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }
}

impl FromIterator<JobId> for AppliedJobSet {
    fn from_iter<I: IntoIterator<Item = JobId>>(iter: I) -> Self {
        let mut set = AppliedJobSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<JobId>> for AppliedJobSet {
    fn from(ids: Vec<JobId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<AppliedJobSet> for Vec<JobId> {
    fn from(set: AppliedJobSet) -> Self {
        set.members
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

/// Badge tier shown next to a posting's match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Strong,
    Good,
    Fair,
}

impl MatchTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            90.. => MatchTier::Strong,
            80..=89 => MatchTier::Good,
            _ => MatchTier::Fair,
        }
    }
}

/// A job posting from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: JobType,
    pub experience: &'static str,
    pub salary: &'static str,
    pub posted: &'static str,
    pub applicants: u32,
    /// Static literal, not computed.
    pub match_percent: u8,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub featured: bool,
}

impl Job {
    pub fn match_tier(&self) -> MatchTier {
        MatchTier::from_percent(self.match_percent)
    }
}

const MOCK_JOBS: [Job; 5] = [
    Job {
        id: JobId(1),
        title: "Senior Frontend Engineer",
        company: "CitiBank",
        location: "New York, NY",
        job_type: JobType::FullTime,
        experience: "3-5 years",
        salary: "$120k - $160k",
        posted: "2 days ago",
        applicants: 47,
        match_percent: 95,
        skills: &["React", "TypeScript", "Node.js", "AWS"],
        description: "Join our digital transformation team to build next-generation banking solutions...",
        featured: true,
    },
    Job {
        id: JobId(2),
        title: "Data Scientist - ML Engineer",
        company: "CitiBank",
        location: "London, UK",
        job_type: JobType::FullTime,
        experience: "2-4 years",
        salary: "£80k - £110k",
        posted: "1 week ago",
        applicants: 23,
        match_percent: 88,
        skills: &["Python", "TensorFlow", "SQL", "Apache Spark"],
        description: "Develop AI/ML models for risk assessment and customer insights...",
        featured: true,
    },
    Job {
        id: JobId(3),
        title: "Cloud Solutions Architect",
        company: "Tech Innovators Inc",
        location: "Remote",
        job_type: JobType::Contract,
        experience: "5+ years",
        salary: "$150k - $200k",
        posted: "3 days ago",
        applicants: 31,
        match_percent: 82,
        skills: &["AWS", "Kubernetes", "Docker", "Terraform"],
        description: "Design and implement scalable cloud infrastructure solutions...",
        featured: false,
    },
    Job {
        id: JobId(4),
        title: "Product Manager - FinTech",
        company: "StartupFlow",
        location: "San Francisco, CA",
        job_type: JobType::FullTime,
        experience: "3-6 years",
        salary: "$130k - $170k",
        posted: "5 days ago",
        applicants: 19,
        match_percent: 76,
        skills: &["Product Strategy", "Agile", "Data Analysis", "Fintech"],
        description: "Lead product development for innovative financial technology solutions...",
        featured: false,
    },
    Job {
        id: JobId(5),
        title: "Backend Developer Intern",
        company: "CitiBank",
        location: "Singapore",
        job_type: JobType::Internship,
        experience: "0-1 years",
        salary: "$4k - $6k/month",
        posted: "1 day ago",
        applicants: 89,
        match_percent: 71,
        skills: &["Java", "Spring Boot", "MySQL", "REST APIs"],
        description: "Summer internship program focused on backend system development...",
        featured: true,
    },
];

/// Static listing of job postings rendered by the job board.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn mock() -> Self {
        Self::new(MOCK_JOBS.to_vec())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        Self::mock()
    }
}
