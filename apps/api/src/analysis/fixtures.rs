//! Sample generator replies and the records they must map to.
//!
//! When a prompt change alters how the generator names or formats sections,
//! these fixtures are where the drift shows up first.

pub struct Expected {
    pub match_percentage: u32,
    pub skills: &'static [&'static str],
    pub suggested_jobs: &'static [&'static str],
    pub reasons: &'static [&'static str],
    pub cold_emails: &'static [&'static str],
    pub improvement_suggestions: &'static [&'static str],
}

pub struct Fixture {
    pub name: &'static str,
    pub raw: &'static str,
    pub expected: Expected,
}

const NONE: &[&str] = &[];

pub const CONTRACT_FIXTURES: &[Fixture] = &[
    Fixture {
        name: "markdown_match_analysis",
        raw: "## Resume Analysis

**1. Key Skills:**

* Python
* Django
* REST APIs
* PostgreSQL

**Technologies:** Docker, AWS, Git

**Experience:** 4 years

**Suitable Job Roles:**

* Backend Developer
* Python Engineer
* API Developer

**2. Job Description Comparison:**

**Match Score: 78%**

**Reasons:**

* Strong Python and Django experience aligns with the core stack.
* Limited exposure to Kubernetes, which the role lists as required.
",
        expected: Expected {
            match_percentage: 78,
            skills: &["Python", "Django", "REST APIs", "PostgreSQL"],
            suggested_jobs: &["Backend Developer", "Python Engineer", "API Developer"],
            reasons: &[
                "Strong Python and Django experience aligns with the core stack.",
                "Limited exposure to Kubernetes, which the role lists as required.",
            ],
            cold_emails: NONE,
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "comma_style_match_analysis",
        raw: "Key Skills: Java, Spring Boot, SQL
Suitable job roles: Backend Engineer, Java Developer
Match percentage - 64
Reasons: Solid Java fundamentals, but no cloud deployment experience.",
        expected: Expected {
            match_percentage: 64,
            skills: &["Java", "Spring Boot", "SQL"],
            suggested_jobs: &["Backend Engineer", "Java Developer"],
            reasons: &["Solid Java fundamentals, but no cloud deployment experience."],
            cold_emails: NONE,
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "no_headings",
        raw: "I could not evaluate this resume against the job description because the resume text was empty.",
        expected: Expected {
            match_percentage: 0,
            skills: NONE,
            suggested_jobs: NONE,
            reasons: NONE,
            cold_emails: NONE,
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "markdown_outreach",
        raw: "**Key Skills:** Rust, Tokio, PostgreSQL

**Reasons:**
- Built async Rust services in production
- Owns the deployment pipeline end to end

**Cold Email Templates:**

**Template 1:**
Subject: Rust Engineer role

Hi Priya,

I noticed your opening for a Rust engineer and would love to chat.

Best,
Sam

**Template 2:**
Subject: Following up

Hi Priya, just following up on my note about the Rust role.

**Improvement Suggestions:**
- Quantify latency improvements
- Add a link to open-source work
",
        expected: Expected {
            match_percentage: 0,
            skills: &["Rust", "Tokio", "PostgreSQL"],
            suggested_jobs: NONE,
            reasons: &[
                "Built async Rust services in production",
                "Owns the deployment pipeline end to end",
            ],
            cold_emails: &[
                "Subject: Rust Engineer role\n\nHi Priya,\n\nI noticed your opening for a Rust engineer and would love to chat.\n\nBest,\nSam",
                "Subject: Following up\n\nHi Priya, just following up on my note about the Rust role.",
            ],
            improvement_suggestions: &[
                "Quantify latency improvements",
                "Add a link to open-source work",
            ],
        },
    },
    Fixture {
        name: "cold_emails_without_markers",
        raw: "Key Skills:
- Communication
- Salesforce

Cold emails:
Hello Alex, I am writing to express interest in the Account Executive role at Northwind.
Regards, Jamie
",
        expected: Expected {
            match_percentage: 0,
            skills: &["Communication", "Salesforce"],
            suggested_jobs: NONE,
            reasons: NONE,
            cold_emails: &[
                "Hello Alex, I am writing to express interest in the Account Executive role at Northwind.\nRegards, Jamie",
            ],
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "crlf_bad_match",
        raw: "Match Score: 35%\r\n\r\nWhy this is a bad match:\r\n- No Python experience\r\n- Role needs 5+ years, candidate has 2\r\n\r\nSuggested Jobs: Junior Developer, QA Analyst\r\n",
        expected: Expected {
            match_percentage: 35,
            skills: NONE,
            suggested_jobs: &["Junior Developer", "QA Analyst"],
            reasons: &["No Python experience", "Role needs 5+ years, candidate has 2"],
            cold_emails: NONE,
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "template_marker_without_section",
        raw: "Here is a draft.\nTemplate 1: Hello, I am reaching out about the opening.\n",
        expected: Expected {
            match_percentage: 0,
            skills: NONE,
            suggested_jobs: NONE,
            reasons: NONE,
            cold_emails: NONE,
            improvement_suggestions: NONE,
        },
    },
    Fixture {
        name: "colon_after_emphasis",
        raw: "**Key Skills**:
- Python
- SQL

**Reasons why it's a good match**:
- Five years of Python services

**Improvement Suggestions**: Add metrics, Quantify impact
",
        expected: Expected {
            match_percentage: 0,
            skills: &["Python", "SQL"],
            suggested_jobs: NONE,
            reasons: &["Five years of Python services"],
            cold_emails: NONE,
            improvement_suggestions: &["Add metrics", "Quantify impact"],
        },
    },
    Fixture {
        name: "numbered_cold_email_headings",
        raw: "**Cold Email Template 1:**
Hi Sam, I am reaching out about the Rust role.

**Cold Email Template 2:**
Hello Jordan, following up on the platform opening.
",
        expected: Expected {
            match_percentage: 0,
            skills: NONE,
            suggested_jobs: NONE,
            reasons: NONE,
            cold_emails: &[
                "Hi Sam, I am reaching out about the Rust role.",
                "Hello Jordan, following up on the platform opening.",
            ],
            improvement_suggestions: NONE,
        },
    },
];
