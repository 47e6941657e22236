// Turns a generator's free-form reply into structured fields.
// Section Locator -> List Extractor / Template Splitter -> Record Assembly.
// Pure and synchronous: no I/O, no shared state.

pub mod handlers;
pub mod lists;
pub mod prompts;
pub mod record;
pub mod sections;
pub mod templates;

#[cfg(test)]
mod fixtures;
