// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;

/// Maps page numbers between two editions of the same book.
///
/// The main edition runs from `main_first` to the last page of the book, the
/// alternative one from `alt_first` to `alt_last`. Pages are matched by their
/// relative position, so both ranges are assumed to cover the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionMapping {
    main_first: i64,
    main_last: i64,
    alt_first: i64,
    alt_last: i64,
}

impl EditionMapping {
    /// Validates and creates a mapping.
    pub fn new(total_pages: i64, main_first: i64, alt_first: i64, alt_last: i64) -> Result<Self, Error> {
        if main_first < 1 {
            return Err(Error::InvalidEdition("the first page of the main edition must be positive"));
        } else if main_first > total_pages {
            return Err(Error::InvalidEdition(
                "the first page of the main edition is past the end of the book",
            ));
        } else if alt_first < 1 {
            return Err(Error::InvalidEdition(
                "the first page of the alternative edition must be positive",
            ));
        } else if alt_last < alt_first {
            return Err(Error::InvalidEdition(
                "the last page of the alternative edition comes before its first page",
            ));
        }

        Ok(Self {
            main_first,
            main_last: total_pages,
            alt_first,
            alt_last,
        })
    }

    fn main_pages(&self) -> i64 {
        self.main_last - self.main_first + 1
    }

    fn alt_pages(&self) -> i64 {
        self.alt_last - self.alt_first + 1
    }

    /// Alternative pages per main page.
    pub fn main_to_alternative(&self) -> f64 {
        self.alt_pages() as f64 / self.main_pages() as f64
    }

    /// Main pages per alternative page.
    pub fn alternative_to_main(&self) -> f64 {
        self.main_pages() as f64 / self.alt_pages() as f64
    }

    /// The alternative page matching a main edition page.
    pub fn to_alternative(&self, main_page: i64) -> i64 {
        let offset = (main_page - self.main_first) as f64;
        (self.alt_first as f64 + offset * self.main_to_alternative()).round_ties_even() as i64
    }

    /// The main edition page matching an alternative page.
    pub fn to_main(&self, alt_page: i64) -> i64 {
        let offset = (alt_page - self.alt_first) as f64;
        (self.main_first as f64 + offset * self.alternative_to_main()).round_ties_even() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_between_editions() {
        // 300 main pages (1..=300) against 150 alternative pages (11..=160)
        let m = EditionMapping::new(300, 1, 11, 160).unwrap();
        assert_eq!(m.to_alternative(1), 11);
        assert_eq!(m.to_alternative(101), 61);
        assert_eq!(m.to_main(61), 101);
        assert_eq!(m.to_main(160), 299);
        assert!((m.main_to_alternative() - 0.5).abs() < 1e-12);
        assert!((m.alternative_to_main() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn identical_editions_map_to_themselves() {
        let m = EditionMapping::new(200, 5, 5, 200).unwrap();
        for page in [5, 50, 123, 200] {
            assert_eq!(m.to_alternative(page), page);
            assert_eq!(m.to_main(page), page);
        }
    }

    #[test]
    fn rounds_half_to_even() {
        // 4 main pages onto 2 alternative pages: main page 2 sits at 1.5
        let m = EditionMapping::new(4, 1, 1, 2).unwrap();
        assert_eq!(m.to_alternative(2), 2);
        // main page 4 sits at 2.5
        assert_eq!(m.to_alternative(4), 2);
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(EditionMapping::new(100, 0, 1, 10).is_err());
        assert!(EditionMapping::new(100, 101, 1, 10).is_err());
        assert!(EditionMapping::new(100, 1, 0, 10).is_err());
        assert!(matches!(
            EditionMapping::new(100, 1, 10, 9),
            Err(Error::InvalidEdition(_))
        ));
        assert!(EditionMapping::new(100, 100, 10, 10).is_ok());
    }
}
