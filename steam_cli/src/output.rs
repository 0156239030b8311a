#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Raw,
    Pretty,
}

/// Renders a response body. `Pretty` re-indents JSON and leaves anything
/// else (HTML error pages, empty bodies) as received.
pub fn render_body(body: &str, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Raw => body.to_string(),
        OutputFormat::Pretty => match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
            Err(_) => body.to_string(),
        },
    }
}

pub fn print_body(body: &str, format: &OutputFormat) {
    println!("{}", render_body(body, format));
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
