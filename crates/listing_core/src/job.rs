use std::fmt;

use serde::{Deserialize, Deserializer};

/// Job identifier. The API sends either a string or a number; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => JobId(text),
            RawId::Signed(n) => JobId(n.to_string()),
            RawId::Unsigned(n) => JobId(n.to_string()),
        })
    }
}

/// One job posting as returned by the Listing API. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    pub title: String,
    pub company: Option<String>,
    #[serde(rename = "companyImageUrl")]
    pub company_image_url: Option<String>,
    pub company_url: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub seniority_level: Option<String>,
    #[serde(rename = "companytype")]
    pub company_type: Option<String>,
    #[serde(rename = "postedDateTime")]
    pub posted_date_time: Option<String>,
    pub job_link: Option<String>,
}

impl Job {
    /// Minimal record with only the required fields set.
    pub fn new(job_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            job_id: JobId::new(job_id),
            title: title.into(),
            company: None,
            company_image_url: None,
            company_url: None,
            location: None,
            employment_type: None,
            experience: None,
            seniority_level: None,
            company_type: None,
            posted_date_time: None,
            job_link: None,
        }
    }
}

/// Decoded body of a successful Listing API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingPage {
    pub jobs: Vec<Job>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}
