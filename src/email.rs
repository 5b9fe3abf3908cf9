//! Builds the content list sent to the model for one request.

use crate::ai::Part;
use crate::models::EmailRequest;
use crate::prompts;

/// Inline file first (when both file and mime type are present), then the
/// rendered instructions.
///
/// A file without a mime type, or a mime type without a file, is dropped
/// silently and the prompt is built as if no file was sent.
pub fn build_parts(request: &EmailRequest) -> Vec<Part> {
    let mut parts = Vec::with_capacity(2);
    let mut reference = "";

    if let (Some(data), Some(mime_type)) = (request.base64_file(), request.mime_type()) {
        parts.push(Part::inline_data(data, mime_type));
        reference = prompts::FILE_REFERENCE;
    }

    let content = request.brief().unwrap_or(prompts::FILE_ONLY_FALLBACK);
    parts.push(Part::text(prompts::email_prompt(reference, content)));

    parts
}
