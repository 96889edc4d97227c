use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));
static IFRAME_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<iframe[^>]*>.*?</iframe>").expect("valid iframe regex"));

/// Makes a field value safe to embed in a prompt.
///
/// 1. Drops `<script>…</script>` and `<iframe>…</iframe>` blocks with their contents
///    (case-insensitive, may span lines). Best-effort, not an HTML parser.
/// 2. Escapes `&`, then `<` and `>`.
/// 3. Trims surrounding whitespace. Internal newlines are kept.
pub fn sanitize(text: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(text, "");
    let text = IFRAME_BLOCK.replace_all(&text, "");
    let text = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    text.trim().to_string()
}
