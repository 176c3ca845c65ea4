use url::Url;

/// Fixed number of jobs per page.
pub const PAGE_SIZE: u32 = 10;

/// Listing endpoint, relative to the API base URL.
pub const JOBS_PATH: &str = "api/jobs";

/// Parameters of one Listing API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub page: u32,
    pub limit: u32,
    pub location: Option<String>,
}

impl ListingRequest {
    /// Builds a request for `page`; an empty filter means no `location` parameter.
    pub fn new(page: u32, location_filter: &str) -> Self {
        let location = (!location_filter.is_empty()).then(|| location_filter.to_string());
        Self {
            page,
            limit: PAGE_SIZE,
            location,
        }
    }

    /// `page=..&limit=..[&location=..]` with the location percent-encoded.
    pub fn query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if let Some(location) = &self.location {
            query.push_str("&location=");
            query.push_str(&encode_component(location));
        }
        query
    }

    /// Full request URL against `base`. A base with a path is treated as a directory.
    pub fn to_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = if base.path().ends_with('/') {
            base.join(JOBS_PATH)?
        } else {
            let mut dir = base.clone();
            dir.set_path(&format!("{}/", base.path()));
            dir.join(JOBS_PATH)?
        };
        url.set_query(Some(&self.query_string()));
        Ok(url)
    }
}

// form_urlencoded writes spaces as '+' and a literal '+' as %2B, so every '+'
// left in the output stands for a space.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
