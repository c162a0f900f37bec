//! Rendered-width measurement for styled, multi-line cell text.
//!
//! Cells may embed SGR escape sequences (`ESC [ … m`) and literal newlines.
//! Escapes contribute zero width and are never split; newlines delimit
//! logical lines. These helpers are pure and shared by the table layout and
//! the prompt redraw accounting.

use crate::width::char_columns;

/// Number of logical lines in a cell (`\n` count + 1; `""` is one line).
pub fn line_count(cell: &str) -> usize {
    cell.chars().filter(|&c| c == '\n').count() + 1
}

/// One logical line of a cell, escape sequences preserved verbatim.
///
/// Out-of-range indices yield `""` so callers can walk ragged grids without
/// bounds bookkeeping.
pub fn line_content(cell: &str, line_index: usize) -> &str {
    cell.split('\n').nth(line_index).unwrap_or("")
}

/// Rendered width of one logical line of a cell.
pub fn line_width(cell: &str, line_index: usize) -> usize {
    visible_width(line_content(cell, line_index))
}

/// Widest logical line of a cell, in terminal cells.
pub fn max_line_width(cell: &str) -> usize {
    cell.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Rendered width of a single line, skipping embedded SGR sequences.
///
/// A malformed sequence (ESC not followed by `[`, or no terminating `m`)
/// degrades to zero contribution; scanning resumes rather than failing.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0usize;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Consume through the terminating 'm'; an unterminated
                // sequence runs to end of line and still counts as zero.
                for inner in chars.by_ref() {
                    if inner == 'm' {
                        break;
                    }
                }
            }
            continue;
        }
        width += char_columns(c);
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_one_line_of_width_zero() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_width("", 0), 0);
        assert_eq!(line_content("", 0), "");
    }

    #[test]
    fn measures_narrow_wide_and_zero_width() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("a"), 1);
        assert_eq!(visible_width("你"), 2);
        assert_eq!(visible_width("\u{200B}"), 0);
        assert_eq!(visible_width("e\u{0301}"), 1); // e + combining acute
    }

    #[test]
    fn sgr_sequences_do_not_count() {
        assert_eq!(visible_width("\x1b[1;32mOK\x1b[0m"), 2);
        assert_eq!(visible_width("\x1b[0m"), 0);
    }

    #[test]
    fn unterminated_escape_measures_zero_and_survives() {
        assert_eq!(visible_width("\x1b[1;32"), 0);
        assert_eq!(visible_width("ab\x1b[9"), 2);
    }

    #[test]
    fn bare_escape_without_bracket_is_inert() {
        // The ESC itself contributes nothing; scanning resumes at 'Q'.
        assert_eq!(visible_width("\x1bQ"), 1);
    }

    #[test]
    fn multi_line_cells_measure_per_line() {
        let cell = "a\nbb\nccc";
        assert_eq!(line_count(cell), 3);
        assert_eq!(line_width(cell, 0), 1);
        assert_eq!(line_width(cell, 1), 2);
        assert_eq!(line_width(cell, 2), 3);
        assert_eq!(line_width(cell, 3), 0);
        assert_eq!(max_line_width(cell), 3);
    }

    #[test]
    fn line_content_preserves_escapes_verbatim() {
        let cell = "\x1b[1mtop\x1b[0m\nbottom";
        assert_eq!(line_content(cell, 0), "\x1b[1mtop\x1b[0m");
        assert_eq!(line_content(cell, 1), "bottom");
        assert_eq!(line_content(cell, 2), "");
    }

    #[test]
    fn line_that_is_only_an_unterminated_escape() {
        let cell = "\x1b[33";
        assert_eq!(line_count(cell), 1);
        assert_eq!(line_width(cell, 0), 0);
        assert_eq!(line_content(cell, 0), "\x1b[33");
    }
}
