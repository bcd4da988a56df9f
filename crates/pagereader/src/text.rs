//! Text normalisation helpers shared by the extractors

/// Clean whitespace: collapse runs, trim, keep max 2 newlines
pub fn clean_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_space = false;
    let mut newline_count = 0;

    for c in s.chars() {
        if c == '\n' {
            if last_was_space && result.ends_with(' ') {
                result.pop();
            }
            newline_count += 1;
            last_was_space = true;
            if newline_count <= 2 {
                result.push(c);
            }
        } else if c.is_whitespace() {
            // A space right after a newline is indentation, drop it
            if !last_was_space {
                newline_count = 0;
                result.push(' ');
                last_was_space = true;
            }
        } else {
            newline_count = 0;
            last_was_space = false;
            result.push(c);
        }
    }

    result.trim().to_string()
}

/// Collapse all whitespace, newlines included, into single spaces
pub fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace and drop the value when nothing is left
pub fn non_empty(s: &str) -> Option<String> {
    let collapsed = collapse_spaces(s);
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
