use std::fmt::Write;

use listing_core::{JobDetailView, JobRowView, ListingViewModel};

const RULE: &str = "----------------------------------------";

pub fn render(view: &ListingViewModel) -> String {
    let mut out = String::new();

    let filter = if view.location_filter.is_empty() {
        "(any)"
    } else {
        view.location_filter.as_str()
    };
    let _ = writeln!(out, "Location: {filter}");
    if view.loading {
        out.push_str("Loading...\n");
    }

    for (index, row) in view.jobs.iter().enumerate() {
        out.push_str(&format_row(index + 1, row));
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{prev} Page {page} of {total} {next}",
        prev = if view.can_go_previous { "[:prev]" } else { "[     ]" },
        page = view.page,
        total = view.total_pages,
        next = if view.can_go_next { "[:next]" } else { "[     ]" },
    );
    out.push_str(RULE);
    out.push('\n');

    match &view.selected {
        Some(detail) => out.push_str(&format_detail(detail)),
        None => out.push_str("Select a job to view details\n"),
    }
    out
}

fn format_row(position: usize, row: &JobRowView) -> String {
    let marker = if row.selected { '>' } else { ' ' };
    let mut line = format!("{marker}{position:>3}. {}", row.title);
    for part in [&row.company, &row.location] {
        if !part.is_empty() {
            line.push_str(" | ");
            line.push_str(part);
        }
    }
    line
}

fn format_detail(detail: &JobDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    match &detail.company_url {
        Some(url) => {
            let _ = writeln!(out, "Company: {} <{}>", detail.company, url);
        }
        None => {
            let _ = writeln!(out, "Company: {}", detail.company);
        }
    }
    let _ = writeln!(out, "Location: {}", detail.location);
    if let Some(posted) = &detail.posted {
        let _ = writeln!(out, "Posted {posted}");
    }
    let _ = writeln!(out, "Employment Type: {}", detail.employment_type);
    let _ = writeln!(out, "Experience: {}", detail.experience);
    let _ = writeln!(out, "Seniority Level: {}", detail.seniority_level);
    let _ = writeln!(out, "Company Type: {}", detail.company_type);
    if let Some(link) = &detail.job_link {
        let _ = writeln!(out, "View Original Job Posting: {link}");
    }
    out
}
