//! Display-width classification for Unicode code points.
//!
//! Terminal cells are the unit of layout: most glyphs occupy one cell, East
//! Asian scripts and most emoji occupy two, combining marks occupy none, and
//! control characters have no cell representation at all. Everything in the
//! measurement and table modules reduces to [`width_of`].

mod tables;

/// Width class of a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Control character with no cell representation.
    Control,
    /// Zero-cell code point (combining mark, joiner, variation selector).
    Zero,
    /// Ordinary single-cell glyph.
    Narrow,
    /// Double-cell glyph (East Asian scripts, most emoji).
    Wide,
}

impl WidthClass {
    /// Terminal columns consumed by this class; -1 marks control characters.
    pub fn columns(self) -> i8 {
        match self {
            Self::Control => -1,
            Self::Zero => 0,
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

/// Zero-width code points outside the combining-mark table: NUL, the
/// combining grapheme joiner, the ZWSP..RLM run, line/paragraph separators
/// and directional formatting, and the word-joiner..invisible-separator run.
const ZERO_SINGLETONS: &[(u32, u32)] = &[
    (0x0000, 0x0000),
    (0x034F, 0x034F),
    (0x200B, 0x200F),
    (0x2028, 0x202E),
    (0x2060, 0x2063),
];

/// Classify one code point by the number of terminal cells it occupies.
///
/// NUL is zero-width (the wcwidth convention), so the zero set is consulted
/// before the control ranges.
pub fn width_of(cp: u32) -> WidthClass {
    if in_table(ZERO_SINGLETONS, cp) || in_table(tables::COMBINING, cp) {
        return WidthClass::Zero;
    }
    if cp < 0x20 || (0x7F..=0xA0).contains(&cp) {
        return WidthClass::Control;
    }
    if in_table(tables::WIDE, cp) {
        return WidthClass::Wide;
    }
    WidthClass::Narrow
}

/// Cell count for a `char`, clamped so control characters count as zero.
///
/// Callers summing line widths want `max(0, columns)`; the signed -1 is only
/// meaningful to callers that filter non-printable input explicitly.
pub fn char_columns(c: char) -> usize {
    width_of(c as u32).columns().max(0) as usize
}

/// Binary search over a sorted, disjoint table of inclusive ranges.
fn in_table(table: &[(u32, u32)], cp: u32) -> bool {
    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let (start, end) = table[mid];
        if cp < start {
            hi = mid;
        } else if cp > end {
            lo = mid + 1;
        } else {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(table: &[(u32, u32)]) {
        for window in table.windows(2) {
            let (alo, ahi) = window[0];
            let (blo, _) = window[1];
            assert!(alo <= ahi, "inverted range ({alo:#X}, {ahi:#X})");
            assert!(ahi < blo, "overlap between ({alo:#X}, {ahi:#X}) and {blo:#X}");
        }
        if let Some(&(lo, hi)) = table.last() {
            assert!(lo <= hi);
        }
    }

    #[test]
    fn combining_table_is_sorted_and_disjoint() {
        assert_sorted_disjoint(tables::COMBINING);
    }

    #[test]
    fn wide_table_is_sorted_and_disjoint() {
        assert_sorted_disjoint(tables::WIDE);
    }

    #[test]
    fn nul_is_zero_width_not_control() {
        assert_eq!(width_of(0x00), WidthClass::Zero);
        assert_eq!(width_of(0x01), WidthClass::Control);
    }

    #[test]
    fn classifies_representative_code_points() {
        assert_eq!(width_of('a' as u32), WidthClass::Narrow);
        assert_eq!(width_of('~' as u32), WidthClass::Narrow);
        assert_eq!(width_of(0x1B), WidthClass::Control);
        assert_eq!(width_of(0x7F), WidthClass::Control);
        assert_eq!(width_of(0xA0), WidthClass::Control);
        assert_eq!(width_of(0x0301), WidthClass::Zero); // combining acute
        assert_eq!(width_of(0x200B), WidthClass::Zero); // zero-width space
        assert_eq!(width_of(0x200D), WidthClass::Zero); // zero-width joiner
        assert_eq!(width_of('你' as u32), WidthClass::Wide);
        assert_eq!(width_of('カ' as u32), WidthClass::Wide);
        assert_eq!(width_of(0x1F600), WidthClass::Wide); // grinning face
    }

    #[test]
    fn char_columns_clamps_control_to_zero() {
        assert_eq!(char_columns('\t'), 0);
        assert_eq!(char_columns('x'), 1);
        assert_eq!(char_columns('你'), 2);
        assert_eq!(char_columns('\u{0301}'), 0);
    }

    #[test]
    fn binary_search_agrees_with_linear_scan_at_table_edges() {
        for table in [tables::COMBINING, tables::WIDE] {
            for &(lo, hi) in table {
                assert!(in_table(table, lo));
                assert!(in_table(table, hi));
            }
            let (first, _) = table[0];
            assert!(!in_table(table, first.saturating_sub(1)) || first == 0);
        }
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn linear_lookup(table: &[(u32, u32)], cp: u32) -> bool {
            table.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
        }

        proptest! {
            #[test]
            fn width_is_total_and_matches_linear_oracle(cp in 0u32..0x110000) {
                let class = width_of(cp);
                prop_assert!(matches!(
                    class,
                    WidthClass::Control | WidthClass::Zero | WidthClass::Narrow | WidthClass::Wide
                ));
                prop_assert_eq!(
                    in_table(tables::COMBINING, cp),
                    linear_lookup(tables::COMBINING, cp)
                );
                prop_assert_eq!(in_table(tables::WIDE, cp), linear_lookup(tables::WIDE, cp));
            }

            #[test]
            fn width_is_deterministic(cp in 0u32..0x110000) {
                prop_assert_eq!(width_of(cp), width_of(cp));
            }
        }
    }
}
