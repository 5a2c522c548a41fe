use unicode_normalization::UnicodeNormalization;

/// Normalize user input before it reaches the translation path.
///
/// Dictated and pasted text arrives with stray newlines and composed or
/// decomposed unicode depending on the source; NFC keeps prompts stable.
pub fn normalize_input(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfc().collect();

    // Collapse hard line breaks into spaces, then squeeze runs of spaces.
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
        if ch == ' ' {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}
