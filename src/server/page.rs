//! HTML page rendering
//!
//! Every submitted or model-produced value is escaped here and nowhere else.

use crate::core::models::SubmissionResult;

/// Languages offered in the form's select box
pub const LANGUAGES: &[&str] = &[
    "Английский",
    "Русский",
    "Французский",
    "Немецкий",
    "Испанский",
    "Китайский",
];

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the page: the form, plus result blocks when `result` is present
pub fn render_page(result: Option<&SubmissionResult>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"ru\"><head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>AI Переводчик и Критик</title>\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; }\n");
    html.push_str("textarea { width: 100%; min-height: 8rem; }\n");
    html.push_str(".result { padding: 0.75rem; margin: 0.75rem 0; border-radius: 4px; background: #f4f4f4; white-space: pre-wrap; }\n");
    html.push_str(".evaluation { background: #fff3cd; }\n");
    html.push_str("</style>\n</head><body>\n");

    html.push_str("<h1>AI Переводчик и Критик</h1>\n");
    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str("  <label for=\"text\">Текст для перевода:</label>\n");
    html.push_str(&format!(
        "  <textarea id=\"text\" name=\"text\" required>{}</textarea>\n",
        result.map(|r| escape_html(&r.original)).unwrap_or_default()
    ));
    html.push_str("  <label for=\"language\">Язык перевода:</label>\n");
    html.push_str("  <select id=\"language\" name=\"language\">\n");
    for language in LANGUAGES {
        let selected = match result {
            Some(r) if r.language == *language => " selected",
            _ => "",
        };
        html.push_str(&format!(
            "    <option value=\"{0}\"{1}>{0}</option>\n",
            language, selected
        ));
    }
    html.push_str("  </select>\n");
    html.push_str("  <button type=\"submit\">Перевести</button>\n");
    html.push_str("</form>\n");

    if let Some(result) = result {
        html.push_str("<h2>Оригинал</h2>\n");
        html.push_str(&format!(
            "<div class=\"result original\">{}</div>\n",
            escape_html(&result.original)
        ));
        html.push_str(&format!(
            "<h2>Перевод ({})</h2>\n",
            escape_html(&result.language)
        ));
        html.push_str(&format!(
            "<div class=\"result translated\">{}</div>\n",
            escape_html(&result.translated)
        ));
        html.push_str("<h2>Оценка LLM-as-a-Judge</h2>\n");
        html.push_str(&format!(
            "<div class=\"result evaluation\">{}</div>\n",
            escape_html(&result.evaluation)
        ));
    }

    html.push_str("</body></html>");
    html
}
