//! Case and diacritic folding shared by queries and cell values.

use deunicode::deunicode;

/// Lower-case `text`, then transliterate it to plain ASCII.
///
/// `"Café"` becomes `"cafe"` and `"Straße"` becomes `"strasse"`.
pub fn normalize(text: &str) -> String {
    deunicode(&text.to_lowercase())
}
