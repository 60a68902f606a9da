pub const PDF_MIME: &str = "application/pdf";

/// Declared type for a file name, guessed from its extension.
///
/// Names without a recognised extension give an empty string, the same thing
/// a browser reports for a file it cannot classify.
pub fn mime_from_name(name: &str) -> String {
    mime_guess::from_path(name)
        .first()
        .map(|m| m.essence_str().to_owned())
        .unwrap_or_default()
}
