//! Border themes: the glyph set used to draw table corners, intersections,
//! bars, and cell padding.
//!
//! Themes are selected by reference and must outlive the table that uses
//! them; the three built-ins are `'static` so they always qualify.

/// Glyphs for every border position plus the padding applied inside each
/// cell slot. All glyphs are expected to render one terminal cell wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTheme {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal_bar: &'static str,
    pub vertical_bar: &'static str,
    pub top_intersection: &'static str,
    pub bottom_intersection: &'static str,
    pub left_intersection: &'static str,
    pub right_intersection: &'static str,
    pub intersection: &'static str,
    pub padding_left: &'static str,
    pub padding_right: &'static str,
}

/// Single-line box-drawing glyphs.
pub static MODERN: BorderTheme = BorderTheme {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal_bar: "─",
    vertical_bar: "│",
    top_intersection: "┬",
    bottom_intersection: "┴",
    left_intersection: "├",
    right_intersection: "┤",
    intersection: "┼",
    padding_left: " ",
    padding_right: " ",
};

/// Like [`MODERN`] but with rounded corners.
pub static ROUNDED: BorderTheme = BorderTheme {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_bar: "─",
    vertical_bar: "│",
    top_intersection: "┬",
    bottom_intersection: "┴",
    left_intersection: "├",
    right_intersection: "┤",
    intersection: "┼",
    padding_left: " ",
    padding_right: " ",
};

/// Pure 7-bit ASCII, for terminals or logs without box-drawing support.
pub static ASCII: BorderTheme = BorderTheme {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal_bar: "-",
    vertical_bar: "|",
    top_intersection: "+",
    bottom_intersection: "+",
    left_intersection: "+",
    right_intersection: "+",
    intersection: "+",
    padding_left: " ",
    padding_right: " ",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::visible_width;

    #[test]
    fn builtin_glyphs_are_one_cell_wide() {
        for theme in [&MODERN, &ROUNDED, &ASCII] {
            for glyph in [
                theme.top_left,
                theme.top_right,
                theme.bottom_left,
                theme.bottom_right,
                theme.horizontal_bar,
                theme.vertical_bar,
                theme.top_intersection,
                theme.bottom_intersection,
                theme.left_intersection,
                theme.right_intersection,
                theme.intersection,
            ] {
                assert_eq!(visible_width(glyph), 1, "glyph {glyph:?}");
            }
        }
    }
}
