// Prompt text for the two analysis variants.
// Section headings named here are the ones the parser looks for; rename both together.

/// System instruction shared by both variants.
pub const ANALYSIS_SYSTEM: &str = "You are an AI career assistant. \
    Answer in plain text with a clear heading for every section. \
    Use hyphen bullet points for lists.";

/// Match-analysis prompt. Replace `{resume_text}` and `{job_description}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are analyzing a resume against a job description.

1. Extract from the following resume:
   - Key Skills (list as bullet points)
   - Technologies
   - Experience (years if available)
   - Suitable job roles (list 2-3 roles)

2. Compare it with this job description:
   - Give a match score (0-100%)
   - List 2-3 specific reasons why it's a good or bad match

Format your response with clear headings for each section.

Resume:
{resume_text}

Job Description:
{job_description}
"#;

/// Cold-email prompt. Replace `{resume_text}` and `{job_description}` before sending.
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"You are helping a candidate reach out to a hiring manager.

Using the resume and job description below, write these sections in this order:

Key Skills:
- the candidate's skills most relevant to the role, as bullet points

Reasons:
- 2-3 reasons the candidate is a strong fit, as bullet points

Cold Email Templates:
Write 2 short cold emails to the hiring manager. Start each one with
"Template 1:", "Template 2:" on its own line, then the full email.

Improvement Suggestions:
- 2-3 concrete changes that would make the resume a better fit, as bullet points

Resume:
{resume_text}

Job Description:
{job_description}
"#;

pub fn build_match_prompt(resume_text: &str, job_description: &str) -> String {
    fill(MATCH_PROMPT_TEMPLATE, resume_text, job_description)
}

pub fn build_outreach_prompt(resume_text: &str, job_description: &str) -> String {
    fill(OUTREACH_PROMPT_TEMPLATE, resume_text, job_description)
}

// The job description is substituted first so resume text containing the
// literal placeholder is not expanded a second time.
fn fill(template: &str, resume_text: &str, job_description: &str) -> String {
    template
        .replace("{job_description}", job_description)
        .replacen("{resume_text}", resume_text, 1)
}
