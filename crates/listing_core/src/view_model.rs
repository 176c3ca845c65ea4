use crate::{format_posted_date, Job, JobId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingViewModel {
    pub jobs: Vec<JobRowView>,
    pub page: u32,
    pub total_pages: u32,
    pub location_filter: String,
    pub loading: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub selected: Option<JobDetailView>,
}

/// One entry of the job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub selected: bool,
}

impl JobRowView {
    pub(crate) fn from_job(job: &Job, selected: bool) -> Self {
        Self {
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            company: job.company.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            selected,
        }
    }
}

/// Detail pane for the selected job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub company_url: Option<String>,
    pub company_image_url: Option<String>,
    pub location: String,
    /// Long-form posting date, e.g. "March 5, 2024".
    pub posted: Option<String>,
    pub employment_type: String,
    pub experience: String,
    pub seniority_level: String,
    pub company_type: String,
    pub job_link: Option<String>,
}

impl JobDetailView {
    pub(crate) fn from_job(job: &Job) -> Self {
        Self {
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            company: job.company.clone().unwrap_or_default(),
            company_url: job.company_url.clone(),
            company_image_url: job.company_image_url.clone(),
            location: job.location.clone().unwrap_or_default(),
            posted: job.posted_date_time.as_deref().map(format_posted_date),
            employment_type: job.employment_type.clone().unwrap_or_default(),
            experience: job.experience.clone().unwrap_or_default(),
            seniority_level: job.seniority_level.clone().unwrap_or_default(),
            company_type: job.company_type.clone().unwrap_or_default(),
            job_link: job.job_link.clone(),
        }
    }
}
