use std::collections::HashMap;

/// Render placeholders in a single pass so substituted markup is never rescanned.
///
/// Placeholder keys include delimiters (for example, `"{{content}}"`).
/// Unknown placeholders are kept unchanged.
pub fn render_template_single_pass(template: &str, replacements: &HashMap<&str, &str>) -> String {
    let extra: usize = replacements.values().map(|value| value.len()).sum();
    let mut rendered = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        if let Some(end_offset) = rest[start..].find("}}") {
            let key = &rest[start..start + end_offset + 2];
            if let Some(value) = replacements.get(key) {
                rendered.push_str(value);
            } else {
                rendered.push_str(key);
            }
            rest = &rest[start + end_offset + 2..];
        } else {
            rendered.push_str(&rest[start..]);
            rest = "";
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Escape text for HTML content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Encode `text` as a JavaScript string literal safe to place inside an
/// HTML event-handler attribute.
pub fn js_string_attr(text: &str) -> String {
    escape_html(&serde_json::Value::String(text.to_owned()).to_string())
}
