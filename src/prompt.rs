//! Clinical note prompt template.

const PREAMBLE: &str = "You are a professional medical assistant.\n\
Please generate a clinical note in SOAP format based on the following information:\n\
---\n";

const CLOSING: &str = "\n---\n";

/// Wraps the caller's text in the SOAP note instruction.
///
/// The input is inserted verbatim between the `---` delimiters.
pub fn compose_prompt(raw: &str) -> String {
    let mut composite = String::with_capacity(PREAMBLE.len() + raw.len() + CLOSING.len());
    composite.push_str(PREAMBLE);
    composite.push_str(raw);
    composite.push_str(CLOSING);
    composite
}
