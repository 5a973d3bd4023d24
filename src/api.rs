// api.rs - The public, idiomatic surface over the mapping/comparison core.
//
// Wraps the internal mappers (`casemap::generic`/`casemap::greek`/
// `casemap::title`, `compare`) with a small builder-style type, the way the
// teacher wraps its own compiled-pattern internals behind `Regex`/
// `RegexBuilder`.

use smallvec::SmallVec;

use crate::casemap::{generic, greek, title};
use crate::compare;
use crate::edits::Edits;
use crate::error::CaseMapError;
use crate::options::{CaseLocale, CompareOptions, FoldOptions, TitleOptions};
use crate::ucd::UnicodeCaseData;
use crate::wordbreak::WordBreakIterator;

/// Backs the `_with_overlap` family: snapshots `buf[..src_len]` into an
/// owned buffer (inline up to 300 code units, grounded on
/// `ustrcase_mapWithOverlap`'s stack `UChar buffer[300]`, per spec.md
/// section 5) before letting `map` write its result back into `buf`.
///
/// The C original instead buffers the *destination*, because there `src`
/// and `dest` are two raw pointers that may overlap in either direction.
/// Here the overlap this variant exists for is always the same-buffer,
/// in-place case (`buf` serves as both source and destination); Rust's
/// aliasing rules already forbid ever holding a `&[u16]` and `&mut [u16]`
/// over truly distinct-but-overlapping memory, so the one case left to
/// support is the in-place one, and snapshotting the (short) source is
/// simpler than buffering the (possibly-expanding) destination.
fn map_with_overlap<F>(buf: &mut [u16], src_len: usize, map: F) -> Result<usize, CaseMapError>
where
    F: FnOnce(&[u16], &mut [u16]) -> Result<usize, CaseMapError>,
{
    let temp: SmallVec<[u16; 300]> = SmallVec::from_slice(&buf[..src_len]);
    map(&temp, buf)
}

/// A case mapper bound to a Unicode Character Database and a resolved
/// case-locale.
///
/// # Examples
///
/// ```
/// use unicase_map::prelude::*;
///
/// let ucd = MinimalCaseData::new();
/// let map = CaseMap::new(&ucd);
/// let src: Vec<u16> = "HELLO".encode_utf16().collect();
/// let mut dest = vec![0u16; src.len()];
/// let len = map.to_lower(&src, &mut dest, None).unwrap();
/// assert_eq!(String::from_utf16(&dest[..len]).unwrap(), "hello");
/// ```
pub struct CaseMap<'a> {
    ucd: &'a dyn UnicodeCaseData,
    locale: CaseLocale,
}

impl<'a> CaseMap<'a> {
    /// A `CaseMap` for the root (locale-independent) behavior.
    pub fn new(ucd: &'a dyn UnicodeCaseData) -> Self {
        CaseMap {
            ucd,
            locale: CaseLocale::Root,
        }
    }

    /// Start a [`CaseMapBuilder`] for locale-specific configuration.
    pub fn builder(ucd: &'a dyn UnicodeCaseData) -> CaseMapBuilder<'a> {
        CaseMapBuilder::new(ucd)
    }

    pub fn locale(&self) -> CaseLocale {
        self.locale
    }

    /// Lower-cases `src` into `dest`, returning the required length (which
    /// may exceed `dest.len()` in preflight mode -- call with an empty
    /// `dest` to learn the length before allocating).
    pub fn to_lower(
        &self,
        src: &[u16],
        dest: &mut [u16],
        edits: Option<&mut Edits>,
    ) -> Result<usize, CaseMapError> {
        generic::map_lower(src, dest, self.ucd, self.locale, edits)
    }

    /// Upper-cases `src` into `dest`. Dispatches to the Greek state machine
    /// when this mapper's locale is [`CaseLocale::Greek`].
    pub fn to_upper(
        &self,
        src: &[u16],
        dest: &mut [u16],
        edits: Option<&mut Edits>,
    ) -> Result<usize, CaseMapError> {
        if self.locale == CaseLocale::Greek {
            greek::map_upper(src, dest, self.ucd, edits)
        } else {
            generic::map_upper_non_greek(src, dest, self.ucd, self.locale, edits)
        }
    }

    /// Title-cases `src` into `dest`, segmenting words via `iter`.
    pub fn to_title(
        &self,
        src: &[u16],
        dest: &mut [u16],
        options: TitleOptions,
        iter: &mut dyn WordBreakIterator,
        edits: Option<&mut Edits>,
    ) -> Result<usize, CaseMapError> {
        title::map_title(src, dest, self.ucd, self.locale, options, iter, edits)
    }

    /// Case-folds `src` into `dest`. Folding is always locale-independent
    /// except for the Turkic dotted/dotless I special case carried in
    /// `options`.
    pub fn fold(
        &self,
        src: &[u16],
        dest: &mut [u16],
        options: FoldOptions,
        edits: Option<&mut Edits>,
    ) -> Result<usize, CaseMapError> {
        generic::map_fold(src, dest, self.ucd, options, edits)
    }

    /// Lower-cases `buf[..src_len]` in place: `buf` is both the source and
    /// the destination, with `buf.len()` as the destination capacity. No
    /// edit log is produced, matching `ustrcase_mapWithOverlap`'s `NULL`
    /// edits argument.
    pub fn to_lower_with_overlap(
        &self,
        buf: &mut [u16],
        src_len: usize,
    ) -> Result<usize, CaseMapError> {
        map_with_overlap(buf, src_len, |src, dest| {
            generic::map_lower(src, dest, self.ucd, self.locale, None)
        })
    }

    /// Upper-cases `buf[..src_len]` in place. See [`CaseMap::to_lower_with_overlap`].
    pub fn to_upper_with_overlap(
        &self,
        buf: &mut [u16],
        src_len: usize,
    ) -> Result<usize, CaseMapError> {
        let locale = self.locale;
        let ucd = self.ucd;
        map_with_overlap(buf, src_len, |src, dest| {
            if locale == CaseLocale::Greek {
                greek::map_upper(src, dest, ucd, None)
            } else {
                generic::map_upper_non_greek(src, dest, ucd, locale, None)
            }
        })
    }

    /// Title-cases `buf[..src_len]` in place. See [`CaseMap::to_lower_with_overlap`].
    pub fn to_title_with_overlap(
        &self,
        buf: &mut [u16],
        src_len: usize,
        options: TitleOptions,
        iter: &mut dyn WordBreakIterator,
    ) -> Result<usize, CaseMapError> {
        let locale = self.locale;
        let ucd = self.ucd;
        map_with_overlap(buf, src_len, |src, dest| {
            title::map_title(src, dest, ucd, locale, options, iter, None)
        })
    }

    /// Case-folds `buf[..src_len]` in place. See [`CaseMap::to_lower_with_overlap`].
    pub fn fold_with_overlap(
        &self,
        buf: &mut [u16],
        src_len: usize,
        options: FoldOptions,
    ) -> Result<usize, CaseMapError> {
        let ucd = self.ucd;
        map_with_overlap(buf, src_len, |src, dest| {
            generic::map_fold(src, dest, ucd, options, None)
        })
    }
}

/// Builds a [`CaseMap`] for a given locale.
pub struct CaseMapBuilder<'a> {
    ucd: &'a dyn UnicodeCaseData,
    locale: CaseLocale,
}

impl<'a> CaseMapBuilder<'a> {
    pub fn new(ucd: &'a dyn UnicodeCaseData) -> Self {
        CaseMapBuilder {
            ucd,
            locale: CaseLocale::Root,
        }
    }

    /// Set the case-locale (affects Turkic/Azeri dotted-I handling, Dutch
    /// `IJ`, Lithuanian dot retention, and Greek upper-casing).
    pub fn locale(mut self, locale: CaseLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn build(self) -> CaseMap<'a> {
        CaseMap {
            ucd: self.ucd,
            locale: self.locale,
        }
    }
}

/// Case-insensitively compares `s1` and `s2`, returning a value whose sign
/// matches `Ordering`.
pub fn case_compare(
    ucd: &dyn UnicodeCaseData,
    s1: &[u16],
    s2: &[u16],
    fold_options: FoldOptions,
    compare_options: CompareOptions,
) -> i32 {
    compare::case_compare(ucd, s1, s2, fold_options, compare_options)
}

/// Case-insensitively matches the longest common prefix of `s1` and `s2`,
/// returning `(ordering, matched_len1, matched_len2)`.
pub fn case_insensitive_prefix_match(
    ucd: &dyn UnicodeCaseData,
    s1: &[u16],
    s2: &[u16],
    fold_options: FoldOptions,
    compare_options: CompareOptions,
) -> (i32, usize, usize) {
    compare::case_insensitive_prefix_match(ucd, s1, s2, fold_options, compare_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucd::MinimalCaseData;
    use crate::wordbreak::SimpleWordBreaks;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn to_lower_scenario() {
        // Scenario 1 from spec.md section 8.
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("HELLO");
        let mut dest = vec![0u16; src.len()];
        let mut edits = Edits::new();
        let len = map.to_lower(&src, &mut dest, Some(&mut edits)).unwrap();
        assert_eq!(&dest[..len], &utf16("hello")[..]);
        assert!(edits.has_changes());
    }

    #[test]
    fn to_upper_turkish_locale_scenario() {
        // Scenario 2 from spec.md section 8.
        let ucd = MinimalCaseData::new();
        let map = CaseMap::builder(&ucd).locale(CaseLocale::Turkish).build();
        let src = utf16("i");
        let mut dest = vec![0u16; 1];
        let len = map.to_upper(&src, &mut dest, None).unwrap();
        assert_eq!(dest[..len][0], 0x0130);
    }

    #[test]
    fn to_upper_greek_locale_dispatches_to_state_machine() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::builder(&ucd).locale(CaseLocale::Greek).build();
        let src: Vec<u16> = [0x03AEu16].to_vec();
        let mut dest = vec![0u16; 1];
        let len = map.to_upper(&src, &mut dest, None).unwrap();
        assert_eq!(&dest[..len], &[0x0389]);
    }

    #[test]
    fn to_title_dutch_locale_scenario() {
        // Scenario 6 from spec.md section 8.
        let ucd = MinimalCaseData::new();
        let map = CaseMap::builder(&ucd).locale(CaseLocale::Dutch).build();
        let src = utf16("ijsland");
        let mut dest = vec![0u16; src.len()];
        let mut iter = SimpleWordBreaks::new(&src);
        let len = map
            .to_title(&src, &mut dest, TitleOptions::empty(), &mut iter, None)
            .unwrap();
        assert_eq!(&dest[..len], &utf16("IJsland")[..]);
    }

    #[test]
    fn fold_collapses_eszett() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("stra\u{00DF}e");
        let mut dest = vec![0u16; 8];
        let len = map.fold(&src, &mut dest, FoldOptions::empty(), None).unwrap();
        assert_eq!(&dest[..len], &utf16("strasse")[..]);
    }

    #[test]
    fn to_lower_with_overlap_maps_in_place() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("HELLO");
        let mut buf = src.clone();
        let len = map.to_lower_with_overlap(&mut buf, src.len()).unwrap();
        assert_eq!(&buf[..len], &utf16("hello")[..]);
    }

    #[test]
    fn to_upper_with_overlap_expands_within_capacity() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("stra\u{00DF}e");
        let mut buf = vec![0u16; src.len() + 1];
        buf[..src.len()].copy_from_slice(&src);
        let len = map.to_upper_with_overlap(&mut buf, src.len()).unwrap();
        assert_eq!(&buf[..len], &utf16("STRASSE")[..]);
    }

    #[test]
    fn to_upper_with_overlap_reports_overflow_truthfully() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("stra\u{00DF}e");
        let mut buf = src.clone();
        assert_eq!(
            map.to_upper_with_overlap(&mut buf, src.len()),
            Err(CaseMapError::BufferOverflow)
        );
    }

    #[test]
    fn fold_with_overlap_collapses_eszett() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("stra\u{00DF}e");
        let mut buf = vec![0u16; src.len() + 1];
        buf[..src.len()].copy_from_slice(&src);
        let len = map.fold_with_overlap(&mut buf, src.len(), FoldOptions::empty()).unwrap();
        assert_eq!(&buf[..len], &utf16("strasse")[..]);
    }

    #[test]
    fn to_title_with_overlap_titlecases_in_place() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("hello world");
        let mut buf = src.clone();
        let mut iter = SimpleWordBreaks::new(&src);
        let len = map
            .to_title_with_overlap(&mut buf, src.len(), TitleOptions::empty(), &mut iter)
            .unwrap();
        assert_eq!(&buf[..len], &utf16("Hello World")[..]);
    }

    #[test]
    fn case_compare_scenario() {
        // Scenario 7 from spec.md section 8, corrected per DESIGN.md: folded
        // "Fust" > "Fussball" at the divergence ('t' > the second 's'), so
        // the ordering is positive, not negative as spec.md states.
        let ucd = MinimalCaseData::new();
        let a = utf16("Fust");
        let b = utf16("Fu\u{00DF}ball");
        let (ord, m1, m2) = case_insensitive_prefix_match(
            &ucd,
            &a,
            &b,
            FoldOptions::empty(),
            CompareOptions::empty(),
        );
        assert!(ord > 0);
        assert_eq!(m1, 2);
        assert_eq!(m2, 2);
    }

    #[test]
    fn preflight_then_allocate_round_trip() {
        let ucd = MinimalCaseData::new();
        let map = CaseMap::new(&ucd);
        let src = utf16("Stra\u{00DF}e");
        let mut probe: [u16; 0] = [];
        let needed = map.to_upper(&src, &mut probe, None).unwrap();
        let mut dest = vec![0u16; needed];
        let written = map.to_upper(&src, &mut dest, None).unwrap();
        assert_eq!(written, needed);
    }
}
