use chrono::NaiveDate;
use shared_types::JobPosting;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in postings used when no seed file is configured.
pub fn postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "job-1".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            company: "Northwind Labs".to_string(),
            location: "Remote (US)".to_string(),
            description: "Own the candidate-facing web experience, from design system \
                          components to performance budgets."
                .to_string(),
            requirements: strings(&[
                "5+ years building production web applications",
                "Strong TypeScript or Rust/WASM experience",
                "Experience with accessibility audits",
            ]),
            benefits: strings(&[
                "Fully remote",
                "Health, dental and vision coverage",
                "Annual learning stipend",
            ]),
            posted_date: date(2025, 6, 2),
        },
        JobPosting {
            id: "job-2".to_string(),
            title: "Backend Engineer, Platform".to_string(),
            company: "Contoso Systems".to_string(),
            location: "Austin, TX".to_string(),
            description: "Design and operate the services that power search and \
                          matching for millions of job seekers."
                .to_string(),
            requirements: strings(&[
                "3+ years with distributed systems",
                "Comfort with PostgreSQL and message queues",
                "On-call experience",
            ]),
            benefits: strings(&["Hybrid schedule", "401(k) match", "Commuter benefits"]),
            posted_date: date(2025, 5, 27),
        },
        JobPosting {
            id: "job-3".to_string(),
            title: "Product Designer".to_string(),
            company: "Fabrikam Studio".to_string(),
            location: "New York, NY".to_string(),
            description: "Shape the recruiter workflow end to end, from requisition \
                          intake to offer letters."
                .to_string(),
            requirements: strings(&[
                "Portfolio demonstrating shipped B2B products",
                "Proficiency with Figma",
            ]),
            benefits: strings(&["Equity package", "Parental leave"]),
            posted_date: date(2025, 5, 19),
        },
        JobPosting {
            id: "job-4".to_string(),
            title: "Data Analyst".to_string(),
            company: "Tailspin Analytics".to_string(),
            location: "Chicago, IL".to_string(),
            description: "Turn hiring funnel data into insight for talent partners \
                          and leadership."
                .to_string(),
            requirements: strings(&[
                "Advanced SQL",
                "Experience with a BI tool such as Looker or Metabase",
                "Clear written communication",
            ]),
            benefits: strings(&["Flexible hours", "Wellness stipend"]),
            posted_date: date(2025, 5, 8),
        },
        JobPosting {
            id: "job-5".to_string(),
            title: "Technical Recruiter".to_string(),
            company: "Woodgrove Talent".to_string(),
            location: "Seattle, WA".to_string(),
            description: "Partner with engineering leaders to hire across backend, \
                          infrastructure and security teams."
                .to_string(),
            requirements: strings(&[
                "2+ years of full-cycle technical recruiting",
                "Familiarity with structured interviewing",
            ]),
            benefits: strings(&[
                "Uncapped referral bonuses",
                "Health coverage from day one",
            ]),
            posted_date: date(2025, 4, 30),
        },
    ]
}
