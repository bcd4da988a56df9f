//! Cursor pagination of rendered pages
//!
//! Offsets and lengths count chars, never bytes.

/// Default character budget, roughly 1,000 tokens
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Larger budget for models with more context
pub const EXTENDED_MAX_CHARS: usize = 8000;

/// Return up to `max_length` chars of `text` starting at `cursor`
///
/// A cursor past the end yields an empty string. Never fails.
pub fn page(text: &str, cursor: usize, max_length: usize) -> String {
    text.chars().skip(cursor).take(max_length).collect()
}

/// When the continuation hint is appended to a truncated page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HintPolicy {
    /// Whenever the page exceeds the budget, even if the window reached the end
    #[default]
    Always,
    /// Only when unread text remains after the window
    WhenRemaining,
    /// Never; the page is cut silently
    Never,
}

/// Continuation hint appended after a truncated window
pub fn continuation_hint(next_cursor: usize) -> String {
    format!("\nRESULT TOO LONG, TRUNCATED. USE CURSOR={next_cursor} TO CONTINUE.")
}

/// Character budget applied to rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Pages longer than this are windowed
    pub max_chars: usize,
    /// Hint behaviour
    pub hint: HintPolicy,
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            hint: HintPolicy::default(),
        }
    }
}

impl Truncation {
    /// Create a budget; `max_chars` is raised to at least 1
    pub fn new(max_chars: usize, hint: HintPolicy) -> Self {
        Self {
            max_chars: max_chars.max(1),
            hint,
        }
    }

    /// Apply the budget to a rendered page
    ///
    /// Pages within budget are returned whole and the cursor is ignored.
    /// Otherwise the window at `cursor` is returned, followed by the hint
    /// naming `cursor + chars(window)`.
    pub fn apply(&self, text: &str, cursor: usize) -> String {
        let total = text.chars().count();
        if total <= self.max_chars {
            return text.to_string();
        }

        let mut window = page(text, cursor, self.max_chars);
        let next_cursor = cursor + window.chars().count();

        let hint = match self.hint {
            HintPolicy::Always => true,
            HintPolicy::WhenRemaining => next_cursor < total,
            HintPolicy::Never => false,
        };
        if hint {
            window.push_str(&continuation_hint(next_cursor));
        }

        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page() {
        let s = "Hello world";
        assert_eq!(page(s, 0, 5), "Hello");
        assert_eq!(page(s, 4, 1), "o");
        assert_eq!(page(s, 10, 5), "d");
        assert_eq!(page(s, 11, 5), "");
        assert_eq!(page(s, 10_000, 5), "");
        assert_eq!(page(s, 0, 0), "");
        assert_eq!(page(s, 6, 100), "world");
    }

    #[test]
    fn test_page_bounds() {
        let s = "Grüße, 世界! 🦀 done";
        let len = s.chars().count();
        for cursor in 0..len + 3 {
            for max_length in 0..len + 3 {
                let result = page(s, cursor, max_length);
                let n = result.chars().count();
                assert!(n <= max_length);
                assert!(n <= len.saturating_sub(cursor));
                let expected: String = s.chars().collect::<Vec<_>>()
                    [cursor.min(len)..(cursor + max_length).min(len)]
                    .iter()
                    .collect();
                assert_eq!(result, expected);
            }
        }
    }

    #[test]
    fn test_within_budget_ignores_cursor() {
        let truncation = Truncation::new(20, HintPolicy::Always);
        assert_eq!(truncation.apply("short text", 5), "short text");
    }

    #[test]
    fn test_truncated_with_hint() {
        let truncation = Truncation::new(5, HintPolicy::Always);
        assert_eq!(
            truncation.apply("Hello world", 0),
            "Hello\nRESULT TOO LONG, TRUNCATED. USE CURSOR=5 TO CONTINUE."
        );
        assert_eq!(
            truncation.apply("Hello world", 5),
            " worl\nRESULT TOO LONG, TRUNCATED. USE CURSOR=10 TO CONTINUE."
        );
    }

    #[test]
    fn test_hint_at_end_of_page() {
        let always = Truncation::new(5, HintPolicy::Always);
        assert_eq!(
            always.apply("Hello world", 10),
            "d\nRESULT TOO LONG, TRUNCATED. USE CURSOR=11 TO CONTINUE."
        );
        assert_eq!(
            always.apply("Hello world", 50),
            "\nRESULT TOO LONG, TRUNCATED. USE CURSOR=50 TO CONTINUE."
        );

        let remaining = Truncation::new(5, HintPolicy::WhenRemaining);
        assert_eq!(remaining.apply("Hello world", 10), "d");
        assert_eq!(
            remaining.apply("Hello world", 0),
            "Hello\nRESULT TOO LONG, TRUNCATED. USE CURSOR=5 TO CONTINUE."
        );
    }

    #[test]
    fn test_never_hint() {
        let truncation = Truncation::new(5, HintPolicy::Never);
        assert_eq!(truncation.apply("Hello world", 0), "Hello");
    }

    #[test]
    fn test_zero_budget_is_raised() {
        assert_eq!(Truncation::new(0, HintPolicy::Never).max_chars, 1);
    }
}
