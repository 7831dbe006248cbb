//! Text reflow
//!
//! Greedy wrapping of text into lines that fit a width budget. Breaks happen
//! on character boundaries, not word boundaries: each line is grown one
//! character at a time until adding the next one would overflow.

/// Separator placed between wrapped lines
pub const LINE_SEPARATOR: &str = "\n";

/// Errors raised by [`reflow`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReflowError {
    /// The width budget is not a number
    #[error("Invalid argument: width budget must not be NaN")]
    InvalidWidth,
}

/// Wrap `text` into lines whose measured width does not exceed `max_width`
///
/// `measure` must be deterministic and non-decreasing in the length of its
/// input. Every line holds at least one character, so a character wider than
/// the budget still gets a line of its own. Empty or whitespace-only text, as
/// well as a whitespace-only remainder after the last full line, produces no
/// lines.
///
/// # Example
///
/// ```
/// use textdraw_ui::ui::reflow;
///
/// let fitted = reflow("HelloWorld", |s| s.chars().count() as f32, 5.0).unwrap();
/// assert_eq!(fitted, "Hello\nWorld");
/// ```
pub fn reflow<M>(text: &str, measure: M, max_width: f32) -> Result<String, ReflowError>
where
    M: Fn(&str) -> f32,
{
    if max_width.is_nan() {
        return Err(ReflowError::InvalidWidth);
    }

    Ok(wrap_lines(text, &measure, max_width).join(LINE_SEPARATOR))
}

/// Split `text` into fitted lines without joining them
pub fn wrap_lines<'a, M>(text: &'a str, measure: M, max_width: f32) -> Vec<&'a str>
where
    M: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut remaining = text;

    while !remaining.trim().is_empty() {
        let split = line_end(remaining, &measure, max_width);
        let (line, rest) = remaining.split_at(split);
        lines.push(line);
        remaining = rest;
    }

    log::trace!("Wrapped {} bytes into {} lines at width {}", text.len(), lines.len(), max_width);
    lines
}

/// Byte offset where the first line of `text` ends
///
/// Always past the first character of a non-empty `text`.
fn line_end<M>(text: &str, measure: &M, max_width: f32) -> usize
where
    M: Fn(&str) -> f32,
{
    let mut boundaries = text.char_indices().map(|(i, _)| i).skip(1);
    let mut end = match boundaries.next() {
        Some(second) => second,
        None => return text.len(),
    };

    for next in boundaries.chain(std::iter::once(text.len())) {
        if measure(&text[..next]) > max_width {
            return end;
        }
        end = next;
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(reflow("HelloWorld", chars, 5.0).unwrap(), "Hello\nWorld");
        assert_eq!(wrap_lines("HelloWorld", chars, 5.0), ["Hello", "World"]);
    }

    #[test]
    fn test_single_wide_character() {
        let wide = |s: &str| chars(s) * 100.0;
        assert_eq!(reflow("A", wide, 1.0).unwrap(), "A");
    }

    #[test]
    fn test_every_character_too_wide() {
        let wide = |s: &str| chars(s) * 100.0;
        assert_eq!(reflow("ABC", wide, 1.0).unwrap(), "A\nB\nC");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(reflow("", chars, 5.0).unwrap(), "");
        assert_eq!(reflow("   ", chars, 5.0).unwrap(), "");
        assert_eq!(reflow("\t\n ", chars, 5.0).unwrap(), "");
    }

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(reflow("short", chars, 100.0).unwrap(), "short");
        assert_eq!(reflow("exact", chars, 5.0).unwrap(), "exact");
    }

    #[test]
    fn test_breaks_inside_words() {
        assert_eq!(reflow("the quick fox", chars, 4.0).unwrap(), "the \nquic\nk fo\nx");
    }

    #[test]
    fn test_trailing_whitespace_chunk_dropped() {
        assert_eq!(reflow("Hello     ", chars, 5.0).unwrap(), "Hello");
    }

    #[test]
    fn test_multibyte_characters_not_split() {
        let fitted = reflow("ÄÖÜäöü€€", chars, 3.0).unwrap();
        assert_eq!(fitted, "ÄÖÜ\näöü\n€€");
    }

    #[test]
    fn test_nan_width_rejected() {
        assert_eq!(reflow("abc", chars, f32::NAN), Err(ReflowError::InvalidWidth));
    }

    #[test]
    fn test_lines_fit_or_are_single_characters() {
        let texts = [
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit",
            "iiiiiiWWWWWWiiiiii",
            "a",
            "mixed  spacing\tand\nnewlines inside",
        ];
        let weighted = |s: &str| {
            s.chars()
                .map(|c| match c {
                    'i' | 'l' | '.' | ',' | ' ' => 0.5,
                    'W' | 'M' => 2.0,
                    _ => 1.0,
                })
                .sum::<f32>()
        };

        for text in texts {
            for width in [0.0, 0.5, 1.0, 3.0, 7.5, 20.0] {
                for line in wrap_lines(text, weighted, width) {
                    assert!(
                        weighted(line) <= width || line.chars().count() == 1,
                        "line {line:?} exceeds {width}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_lines_are_maximal() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let lines = wrap_lines(text, chars, 6.0);
        for line in &lines[..lines.len() - 1] {
            assert_eq!(line.chars().count(), 6);
        }
    }

    #[test]
    fn test_lines_cover_input_text() {
        let text = "The Quick Brown Fox Jumps Over The Lazy Dog";
        for width in [1.0, 2.0, 5.0, 13.0, 100.0] {
            let fitted = reflow(text, chars, width).unwrap();
            assert_eq!(fitted.replace(LINE_SEPARATOR, ""), text);
        }
    }
}
