// Collaborators that turn uploads and URLs into plain text for the prompts.
// Nothing here sees generator output.

pub mod job_page;
pub mod pdf;
