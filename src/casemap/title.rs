// casemap/title.rs - The title mapper.
//
// Grounded on `ustrcase_internalToTitle` in ustrcase.cpp: segments the
// source via an injected word-boundary iterator, and per segment splits it
// into an uncased-prefix copy, a title-cased head, and a lower-cased tail
// per Unicode 4/5 section 3.13 Default Case Operations rule R3, as
// described in spec.md section 4.4.

use crate::casemap::append::{
    append_code_unit, append_result, append_unchanged, check_overflow_and_edits_error,
};
use crate::casemap::generic::map_range_with_context;
use crate::context::{decode_forward, CaseContext};
use crate::edits::Edits;
use crate::error::CaseMapError;
use crate::options::{CaseLocale, TitleOptions};
use crate::ucd::{CaseType, UnicodeCaseData};
use crate::wordbreak::WordBreakIterator;

fn cased(ucd: &dyn UnicodeCaseData, c: u32) -> bool {
    !matches!(ucd.case_type(c), CaseType::None)
}

/// Title-cases `src` into `dest`, segmenting on the boundaries `iter`
/// yields. Returns the required destination length, which may exceed
/// `dest.len()` in preflight mode.
pub fn map_title(
    src: &[u16],
    dest: &mut [u16],
    ucd: &dyn UnicodeCaseData,
    locale: CaseLocale,
    options: TitleOptions,
    iter: &mut dyn WordBreakIterator,
    mut edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    let mut dest_index = 0usize;
    let mut prev = 0usize;
    let mut first = true;

    while prev < src.len() {
        let idx = if first {
            first = false;
            iter.first()
        } else {
            match iter.next() {
                Some(idx) => idx,
                None => src.len(),
            }
        }
        .min(src.len());

        if prev < idx {
            let (mut c, mut len) = decode_forward(src, prev, idx);
            let mut title_start = prev;
            let mut title_limit = prev + len;

            if !options.contains(TitleOptions::NO_BREAK_ADJUSTMENT) && !cased(ucd, c) {
                loop {
                    title_start = title_limit;
                    if title_limit == idx {
                        break;
                    }
                    let (next_c, next_len) = decode_forward(src, title_limit, idx);
                    c = next_c;
                    len = next_len;
                    title_limit += len;
                    if cased(ucd, c) {
                        break;
                    }
                }
                dest_index = append_unchanged(
                    dest,
                    dest_index,
                    &src[prev..title_start],
                    edits.as_deref_mut(),
                )?;
            }

            if title_start < title_limit {
                let ctx = CaseContext::new(0, title_start, title_limit, src.len());
                let mut cursor = ctx.cursor(src);
                let result = ucd.to_full_title(c, &mut cursor, locale);
                dest_index = append_result(
                    dest,
                    dest_index,
                    &result,
                    c,
                    (title_limit - title_start) as u32,
                    edits.as_deref_mut(),
                )?;

                let mut title_limit_after_ij = title_limit;
                if locale == CaseLocale::Dutch
                    && title_start + 1 < idx
                    && matches!(src[title_start], 0x0049 | 0x0069)
                    && matches!(src[title_start + 1], 0x004A | 0x006A)
                {
                    dest_index = append_code_unit(dest, dest_index, 0x004A)?;
                    if let Some(ref mut edits) = edits {
                        edits.add_replace(1, 1)?;
                    }
                    title_limit_after_ij += 1;
                }

                if title_limit_after_ij < idx {
                    if !options.contains(TitleOptions::NO_LOWERCASE) {
                        dest_index = map_range_with_context(
                            src,
                            title_limit_after_ij,
                            idx,
                            dest,
                            dest_index,
                            edits.as_deref_mut(),
                            |cp, cursor| ucd.to_full_lower(cp, cursor, locale),
                        )?;
                    } else {
                        dest_index = append_unchanged(
                            dest,
                            dest_index,
                            &src[title_limit_after_ij..idx],
                            edits.as_deref_mut(),
                        )?;
                    }
                }
            }
        }

        prev = idx;
    }

    check_overflow_and_edits_error(dest_index, dest.len(), edits.as_deref())
}
