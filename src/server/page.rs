//! HTML rendering of the single search page.

use crate::search::MAX_RESULTS;
use crate::view::{found_message, Outcome, SearchForm, NO_RESULTS_MESSAGE};

const STYLE: &str = "\
body { background: #000; color: #fff; font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
h1 { text-align: center; }
.description { text-align: center; margin-bottom: 2.5rem; }
form { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
input[type=text] { width: 100%; padding: 0.5rem; color: #fff; background: #262730; border: 1px solid #4a4a4a; border-radius: 5px; }
button { background: #1e90ff; color: #fff; border: none; padding: 0.5rem 2rem; width: 200px; }
button:hover { background: #0066cc; }
.search-result { background: #262730; padding: 0.5rem; border-radius: 5px; margin: 0.5rem 0; }
.info { color: #9ecbff; }
.error { color: #ff6b6b; }
";

/// Render the full page for `form` and its evaluated `outcome`.
pub fn render(title: &str, form: &SearchForm, outcome: &Outcome) -> String {
    let title = escape(title);
    let query = escape(form.query.as_deref().unwrap_or_default());

    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n<p class=\"description\">Search the table of contents (at most {MAX_RESULTS} results)</p>\n<form method=\"get\" action=\"/\">\n<input type=\"text\" name=\"q\" value=\"{query}\" placeholder=\"Search term\" autofocus>\n<button type=\"submit\" name=\"submit\" value=\"1\">Search</button>\n</form>\n"
    );

    html.push_str(&render_outcome(outcome));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Idle => String::new(),
        Outcome::Results(result) => {
            let mut html = format!("<p>{}</p>\n", found_message(result.rows.len()));
            for row in &result.rows {
                html.push_str(&format!(
                    "<div class=\"search-result\">{}</div>\n",
                    escape(&row.display_line())
                ));
            }
            html
        }
        Outcome::NoResults => format!("<p class=\"info\">{NO_RESULTS_MESSAGE}</p>\n"),
        Outcome::LoadFailed(_) | Outcome::SearchFailed(_) => {
            let message = outcome.to_string();
            format!("<p class=\"error\">{}</p>\n", escape(message.trim_end()))
        }
    }
}

pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
