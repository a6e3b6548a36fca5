use std::fmt::Formatter;

/// Writes the error followed by its whole `source()` chain.
pub fn error_chain_fmt(e: &impl std::error::Error, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Pulls a human-readable message out of an error body returned by one of
/// the external services.
///
/// Understands `{"error": {"message": ".."}}` (chat completions),
/// `{"error": ".."}` (Nominatim) and `{"message": ".."}`.
pub fn extract_service_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value
        .get("error")
        .and_then(|error| error.get("message").or(Some(error)))
        .and_then(|message| message.as_str())
        .or_else(|| value.get("message").and_then(|m| m.as_str()))?;

    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
