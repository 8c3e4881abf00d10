//! Static catalogue behind the listing and detail pages.

use chrono::NaiveDate;

pub struct Service {
    pub slug: &'static str,
    pub practice: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub outcomes: &'static [&'static str],
    pub faq: &'static [(&'static str, &'static str)],
}

pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub challenges: &'static [&'static str],
}

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct CaseStudy {
    pub slug: &'static str,
    pub client: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub industry: &'static str,
    pub metrics: &'static [Metric],
    pub quote: Option<(&'static str, &'static str)>,
}

pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub author_photo: &'static str,
    /// ISO date, e.g. `2025-10-12`.
    pub published: &'static str,
    pub read_minutes: u32,
    pub image: &'static str,
    pub body: &'static [&'static str],
}

impl Article {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// `Oct 12, 2025`, or the raw string if it does not parse.
    pub fn display_date(&self) -> String {
        self.published_on()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.published.to_string())
    }

    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

pub struct Opening {
    pub title: &'static str,
    pub team: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub struct Partner {
    pub name: &'static str,
    pub tier: &'static str,
    pub detail: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "generative-ai",
        practice: "AI + Machine Learning",
        title: "Generative AI Development",
        summary: "Enterprise-grade generative AI applications on Vertex AI, grounded in your proprietary data.",
        outcomes: &[
            "Retrieval-augmented assistants over internal knowledge",
            "Evaluation harnesses and guardrails before launch",
            "Cost and latency budgets per use case",
        ],
        faq: &[
            ("How long does a pilot take?", "Most pilots reach a production-ready candidate in six to eight weeks."),
            ("Is our data used to train models?", "No. Data stays in your project and is never used to train foundation models."),
        ],
    },
    Service {
        slug: "data-engineering",
        practice: "Data + Analytics",
        title: "Data Engineering & Analytics",
        summary: "Scalable BigQuery foundations, streaming pipelines and governed self-service analytics.",
        outcomes: &[
            "Warehouse migrations with zero-downtime cutover",
            "Streaming ingestion with Dataflow and Pub/Sub",
            "Semantic layers your analysts can trust",
        ],
        faq: &[
            ("Can you migrate from Teradata or Snowflake?", "Yes. We run parallel validation until both sides reconcile."),
        ],
    },
    Service {
        slug: "cloud-architecture",
        practice: "Infrastructure",
        title: "Cloud Architecture & Migration",
        summary: "Landing zones, network design and migration factories for regulated workloads.",
        outcomes: &[
            "Policy-as-code landing zones",
            "Zero-trust network boundaries",
            "Wave-based migration plans with rollback",
        ],
        faq: &[
            ("Do you work outside Google Cloud?", "Our depth is Google Cloud, but we design hybrid estates with AWS and Azure."),
        ],
    },
    Service {
        slug: "training",
        practice: "Enablement",
        title: "Training & Enablement",
        summary: "Hands-on programmes that leave your teams able to run what we build together.",
        outcomes: &[
            "Certification bootcamps",
            "Pairing during delivery",
            "Runbooks and architecture decision records",
        ],
        faq: &[],
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "financial-services",
        name: "Financial Services",
        summary: "Modern data platforms for banks, insurers and fintechs operating under strict regulators.",
        challenges: &["Regulatory reporting", "Fraud detection latency", "Legacy core systems"],
    },
    Industry {
        slug: "healthcare",
        name: "Healthcare & Life Sciences",
        summary: "Secure analytics and AI over clinical and research data.",
        challenges: &["PHI governance", "Research data sharing", "Imaging at scale"],
    },
    Industry {
        slug: "retail",
        name: "Retail & Consumer",
        summary: "Demand forecasting, personalisation and unified customer data.",
        challenges: &["Seasonal demand spikes", "Fragmented customer data", "Store-level forecasting"],
    },
    Industry {
        slug: "public-sector",
        name: "Public Sector",
        summary: "Sovereign cloud foundations and citizen-facing digital services.",
        challenges: &["Data residency", "Procurement timelines", "Accessibility requirements"],
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "northwind-bank-warehouse",
        client: "Northwind Bank",
        title: "Retiring a 15-year-old warehouse in nine months",
        summary: "A Teradata to BigQuery migration with parallel reconciliation and zero reporting downtime.",
        image: "/assets/work/northwind.webp",
        tags: &["BigQuery", "Migration", "Dataflow"],
        industry: "financial-services",
        metrics: &[
            Metric { value: "62%", label: "lower platform cost" },
            Metric { value: "9 mo", label: "end-to-end migration" },
            Metric { value: "0", label: "missed regulatory reports" },
        ],
        quote: Some(("The cutover weekend was the quietest we have ever had.", "Head of Data, Northwind Bank")),
    },
    CaseStudy {
        slug: "meridian-health-assistant",
        client: "Meridian Health",
        title: "A clinical knowledge assistant clinicians actually use",
        summary: "Retrieval-augmented generation over 40,000 internal guidelines with audited answers.",
        image: "/assets/work/meridian.webp",
        tags: &["Vertex AI", "RAG", "Evaluation"],
        industry: "healthcare",
        metrics: &[
            Metric { value: "4x", label: "faster guideline lookup" },
            Metric { value: "97%", label: "grounded answer rate" },
        ],
        quote: None,
    },
    CaseStudy {
        slug: "harbor-retail-forecasting",
        client: "Harbor Retail",
        title: "Store-level demand forecasting for 1,200 locations",
        summary: "Replacing spreadsheet forecasts with a governed ML pipeline retrained nightly.",
        image: "/assets/work/harbor.webp",
        tags: &["Forecasting", "MLOps"],
        industry: "retail",
        metrics: &[
            Metric { value: "18%", label: "less overstock" },
            Metric { value: "1,200", label: "stores forecast nightly" },
        ],
        quote: Some(("We stopped arguing about the numbers and started acting on them.", "VP Supply Chain, Harbor Retail")),
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        slug: "agentic-workflows-on-google-cloud",
        title: "Architecting for Agentic Workflows on Google Cloud",
        excerpt: "Building autonomous LLM agents with Vertex AI and BigQuery integration patterns.",
        category: "Generative AI",
        author: "Alex Chen",
        author_photo: "/assets/team/alex-chen.webp",
        published: "2025-10-12",
        read_minutes: 8,
        image: "/assets/hub/agentic.webp",
        body: &[
            "Agents are only as reliable as the tools they call and the data they read.",
            "Start with a narrow task, an evaluation set and a hard budget for every call.",
            "Treat tool definitions as an API surface: version them and test them.",
        ],
    },
    Article {
        slug: "teradata-to-bigquery",
        title: "Migrating from Teradata to BigQuery: A Strategic Guide",
        excerpt: "Frameworks and operating models for a zero-downtime warehouse migration.",
        category: "Data Engineering",
        author: "Priya Raman",
        author_photo: "/assets/team/priya-raman.webp",
        published: "2025-09-28",
        read_minutes: 12,
        image: "/assets/hub/migration.webp",
        body: &[
            "Inventory every consumer before you move a single table.",
            "Run both platforms in parallel and reconcile daily until the numbers agree.",
        ],
    },
    Article {
        slug: "zero-trust-landing-zones",
        title: "Implementing Zero Trust Security in GCP Landing Zones",
        excerpt: "VPC Service Controls, BeyondCorp and IAM boundaries for regulated industries.",
        category: "Cloud Architecture",
        author: "Marcus Lee",
        author_photo: "/assets/team/marcus-lee.webp",
        published: "2025-09-15",
        read_minutes: 10,
        image: "/assets/hub/zero-trust.webp",
        body: &[
            "Perimeters still matter, but identity is the boundary that travels with the request.",
        ],
    },
    Article {
        slug: "state-of-finops-2025",
        title: "The State of FinOps 2025",
        excerpt: "Trends in cloud cost allocation, optimisation and automated scaling.",
        category: "FinOps",
        author: "Priya Raman",
        author_photo: "/assets/team/priya-raman.webp",
        published: "2025-08-30",
        read_minutes: 6,
        image: "/assets/hub/finops.webp",
        body: &[
            "Cost visibility without ownership changes nothing. Tag by team, then report by team.",
        ],
    },
];

pub const OPENINGS: &[Opening] = &[
    Opening {
        title: "Senior Data Engineer",
        team: "Data + Analytics",
        location: "Seattle or remote (US)",
        description: "Design and build BigQuery platforms and streaming pipelines for enterprise clients.",
    },
    Opening {
        title: "ML Engineer, Generative AI",
        team: "AI + Machine Learning",
        location: "Remote (US / EU)",
        description: "Ship retrieval-augmented systems with rigorous evaluation and monitoring.",
    },
    Opening {
        title: "Cloud Architect",
        team: "Infrastructure",
        location: "London or remote (UK)",
        description: "Lead landing-zone and migration engagements for regulated industries.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Alex Chen", role: "Chief Technology Officer", photo: "/assets/team/alex-chen.webp" },
    TeamMember { name: "Priya Raman", role: "Head of Data", photo: "/assets/team/priya-raman.webp" },
    TeamMember { name: "Marcus Lee", role: "Principal Cloud Architect", photo: "/assets/team/marcus-lee.webp" },
    TeamMember { name: "Sofia Alvarez", role: "Director of Delivery", photo: "/assets/team/sofia-alvarez.webp" },
];

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Google Cloud", tier: "Premier Partner", detail: "Specialisations in Data Analytics, Machine Learning and Infrastructure." },
    Partner { name: "dbt Labs", tier: "Preferred Consulting Partner", detail: "Certified analytics engineers on every data engagement." },
    Partner { name: "Fivetran", tier: "Implementation Partner", detail: "Managed ingestion for hundreds of SaaS sources." },
    Partner { name: "Looker", tier: "Certified Partner", detail: "Semantic modelling and embedded analytics." },
];

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub fn industry_by_slug(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.slug == slug)
}

pub fn case_study_by_slug(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug)
}

pub fn case_studies_in(industry: &str) -> impl Iterator<Item = &'static CaseStudy> + '_ {
    CASE_STUDIES.iter().filter(move |c| c.industry == industry)
}

pub fn article_by_slug(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

/// Distinct categories in first-seen order.
pub fn article_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for article in ARTICLES {
        if !categories.contains(&article.category) {
            categories.push(article.category);
        }
    }
    categories
}

/// Newest first, optionally restricted to one category.
pub fn articles_in(category: Option<&str>) -> Vec<&'static Article> {
    let mut articles: Vec<&'static Article> = ARTICLES
        .iter()
        .filter(|a| category.map_or(true, |c| a.category == c))
        .collect();
    articles.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(slugs: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for slug in slugs {
            assert!(seen.insert(slug), "duplicate slug {}", slug);
        }
    }

    #[test]
    fn slugs_are_unique_per_collection() {
        assert_unique(SERVICES.iter().map(|s| s.slug));
        assert_unique(INDUSTRIES.iter().map(|i| i.slug));
        assert_unique(CASE_STUDIES.iter().map(|c| c.slug));
        assert_unique(ARTICLES.iter().map(|a| a.slug));
    }

    #[test]
    fn lookups_find_known_and_reject_unknown_slugs() {
        assert_eq!(service_by_slug("training").map(|s| s.title), Some("Training & Enablement"));
        assert!(industry_by_slug("healthcare").is_some());
        assert!(case_study_by_slug("harbor-retail-forecasting").is_some());
        assert!(article_by_slug("state-of-finops-2025").is_some());
        assert!(service_by_slug("quantum").is_none());
        assert!(article_by_slug("").is_none());
    }

    #[test]
    fn every_case_study_points_at_a_known_industry() {
        for study in CASE_STUDIES {
            assert!(industry_by_slug(study.industry).is_some(), "{}", study.slug);
        }
        assert_eq!(case_studies_in("retail").count(), 1);
    }

    #[test]
    fn article_dates_parse_and_format() {
        for article in ARTICLES {
            assert!(article.published_on().is_some(), "{}", article.slug);
        }
        let first = article_by_slug("agentic-workflows-on-google-cloud").unwrap();
        assert_eq!(first.display_date(), "Oct 12, 2025");
        assert_eq!(first.read_time(), "8 min read");
    }

    #[test]
    fn hub_listing_is_newest_first_and_filterable() {
        let all = articles_in(None);
        assert_eq!(all.len(), ARTICLES.len());
        assert!(all.windows(2).all(|w| w[0].published_on() >= w[1].published_on()));

        let data = articles_in(Some("Data Engineering"));
        assert_eq!(data.len(), 1);
        assert!(articles_in(Some("Nothing")).is_empty());
        assert_eq!(article_categories().len(), 4);
    }
}
