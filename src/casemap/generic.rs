// casemap/generic.rs - The shared case-map loop for lower, non-Greek
// upper, and fold.
//
// Grounded on ustrcase.cpp's `_caseMap` (context-aware lower/upper) and
// `ustrcase_internalFold` (context-free fold).

use crate::casemap::append::{append_result, check_overflow_and_edits_error};
use crate::context::{decode_forward, CaseContext, CaseContextCursor};
use crate::edits::Edits;
use crate::error::CaseMapError;
use crate::options::{CaseLocale, FoldOptions};
use crate::ucd::{FullMappingResult, UnicodeCaseData};

/// Runs a context-sensitive full mapping over `src[start..end)`, appending
/// into `dest` starting at `dest_index`. The case context always scans the
/// *whole* of `src` (`source_base=0`, `scan_limit=src.len()`), matching the
/// C original's single `UCaseContext` shared across a titlecasing segment's
/// sub-mapping call -- only the iteration bounds are restricted to the
/// range. Returns the new `dest_index`, uncapped by `check_overflow_and_edits_error`
/// so a caller doing multiple sub-mappings (the title mapper) can check
/// overflow once at the end.
pub fn map_range_with_context<F>(
    src: &[u16],
    start: usize,
    end: usize,
    dest: &mut [u16],
    mut dest_index: usize,
    mut edits: Option<&mut Edits>,
    mut full_map: F,
) -> Result<usize, CaseMapError>
where
    F: FnMut(u32, &mut CaseContextCursor<'_>) -> FullMappingResult,
{
    let mut i = start;
    while i < end {
        let (c, len) = decode_forward(src, i, end);
        let j = i + len;
        let ctx = CaseContext::new(0, i, j, src.len());
        let mut cursor = ctx.cursor(src);
        let result = full_map(c, &mut cursor);
        dest_index = append_result(dest, dest_index, &result, c, len as u32, edits.as_deref_mut())?;
        i = j;
    }
    Ok(dest_index)
}

/// Runs a context-sensitive full mapping (lower or non-Greek upper) over
/// the whole of `src`, into `dest`. Returns the required destination
/// length, which may exceed `dest.len()` in preflight mode.
pub fn map_with_context<F>(
    src: &[u16],
    dest: &mut [u16],
    mut edits: Option<&mut Edits>,
    full_map: F,
) -> Result<usize, CaseMapError>
where
    F: FnMut(u32, &mut CaseContextCursor<'_>) -> FullMappingResult,
{
    let dest_index =
        map_range_with_context(src, 0, src.len(), dest, 0, edits.as_deref_mut(), full_map)?;
    check_overflow_and_edits_error(dest_index, dest.len(), edits.as_deref())
}

pub fn map_lower(
    src: &[u16],
    dest: &mut [u16],
    ucd: &dyn UnicodeCaseData,
    locale: CaseLocale,
    edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    map_with_context(src, dest, edits, |cp, cursor| {
        ucd.to_full_lower(cp, cursor, locale)
    })
}

/// Non-Greek upper-casing. Callers resolving a Greek case-locale should use
/// `casemap::greek::map_upper` instead.
pub fn map_upper_non_greek(
    src: &[u16],
    dest: &mut [u16],
    ucd: &dyn UnicodeCaseData,
    locale: CaseLocale,
    edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    map_with_context(src, dest, edits, |cp, cursor| {
        ucd.to_full_upper(cp, cursor, locale)
    })
}

/// Context-free case folding.
pub fn map_fold(
    src: &[u16],
    dest: &mut [u16],
    ucd: &dyn UnicodeCaseData,
    options: FoldOptions,
    mut edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    let mut dest_index = 0usize;
    let mut i = 0usize;
    while i < src.len() {
        let (c, len) = decode_forward(src, i, src.len());
        let result = ucd.to_full_folding(c, options);
        dest_index = append_result(dest, dest_index, &result, c, len as u32, edits.as_deref_mut())?;
        i += len;
    }
    check_overflow_and_edits_error(dest_index, dest.len(), edits.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucd::MinimalCaseData;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn lowercases_hello() {
        // Scenario 1 from spec.md section 8.
        let ucd = MinimalCaseData::new();
        let src = utf16("HELLO");
        let mut dest = vec![0u16; 5];
        let mut edits = Edits::new();
        let len = map_lower(&src, &mut dest, &ucd, CaseLocale::Root, Some(&mut edits)).unwrap();
        assert_eq!(len, 5);
        assert_eq!(dest, utf16("hello"));
        let mut it = edits.coarse_iter();
        assert!(it.next().unwrap());
        assert_eq!(it.old_length(), 5);
        assert_eq!(it.new_length(), 5);
        assert!(!it.next().unwrap());
    }

    #[test]
    fn turkish_upper_of_dotless_i() {
        // Scenario 2 from spec.md section 8.
        let ucd = MinimalCaseData::new();
        let src = utf16("i");
        let mut dest = vec![0u16; 1];
        let len = map_upper_non_greek(&src, &mut dest, &ucd, CaseLocale::Turkish, None).unwrap();
        assert_eq!(len, 1);
        assert_eq!(dest[0], 0x0130);
    }

    #[test]
    fn preflight_matches_actual_length() {
        let ucd = MinimalCaseData::new();
        let src = utf16("Stra\u{00DF}e"); // eszett expands on upper-casing
        let mut probe = [0u16; 0];
        let needed = map_upper_non_greek(&src, &mut probe, &ucd, CaseLocale::Root, None).unwrap();
        let mut dest = vec![0u16; needed];
        let written =
            map_upper_non_greek(&src, &mut dest, &ucd, CaseLocale::Root, None).unwrap();
        assert_eq!(written, needed);
    }

    #[test]
    fn fold_collapses_eszett_to_ss() {
        let ucd = MinimalCaseData::new();
        let src = utf16("stra\u{00DF}e");
        let mut dest = vec![0u16; 8];
        let len = map_fold(&src, &mut dest, &ucd, FoldOptions::empty(), None).unwrap();
        assert_eq!(&dest[..len], utf16("strasse"));
    }
}
