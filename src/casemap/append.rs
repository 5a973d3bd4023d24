// casemap/append.rs - The result appender shared by every mapper.
//
// Grounded on ustrcase.cpp's `appendResult`/`appendUChar`/`appendUnchanged`/
// `checkOverflowAndEditsError`, generalized from the C original's
// int32_t-multiplexed `result` parameter (negative = unchanged, small
// positive = string length, large = scalar) to the `FullMappingResult` enum
// from `ucd.rs` (see DESIGN.md open question 3).

use crate::edits::Edits;
use crate::error::CaseMapError;
use crate::ucd::FullMappingResult;

fn checked_advance(dest_index: usize, len: usize) -> Result<usize, CaseMapError> {
    dest_index
        .checked_add(len)
        .ok_or(CaseMapError::IndexOutOfBounds)
}

/// Writes one decoded scalar at `dest_index`, as one code unit in the BMP
/// or a surrogate pair above it. Writes beyond `dest.len()` are counted but
/// not performed, so this is safe to call in preflight mode.
pub fn append_code_point(dest: &mut [u16], dest_index: usize, c: u32) -> Result<usize, CaseMapError> {
    if c <= 0xFFFF {
        let new_index = checked_advance(dest_index, 1)?;
        if new_index <= dest.len() {
            dest[dest_index] = c as u16;
        }
        Ok(new_index)
    } else {
        let new_index = checked_advance(dest_index, 2)?;
        if new_index <= dest.len() {
            let c = c - 0x10000;
            dest[dest_index] = 0xD800 + (c >> 10) as u16;
            dest[dest_index + 1] = 0xDC00 + (c & 0x3FF) as u16;
        }
        Ok(new_index)
    }
}

/// Writes a single code unit -- used by the Greek mapper to emit a
/// combining dialytika, tonos, or trailing iota one at a time.
pub fn append_code_unit(dest: &mut [u16], dest_index: usize, c: u16) -> Result<usize, CaseMapError> {
    let new_index = checked_advance(dest_index, 1)?;
    if new_index <= dest.len() {
        dest[dest_index] = c;
    }
    Ok(new_index)
}

fn append_units(dest: &mut [u16], dest_index: usize, units: &[u16]) -> Result<usize, CaseMapError> {
    let new_index = checked_advance(dest_index, units.len())?;
    if new_index <= dest.len() {
        dest[dest_index..new_index].copy_from_slice(units);
    }
    Ok(new_index)
}

/// Appends a decoded full-mapping result, updating `edits` (if present) and
/// writing code units to `dest` starting at `dest_index`. `cp` is the
/// original code point and `cp_length` the number of source code units it
/// occupied.
pub fn append_result(
    dest: &mut [u16],
    dest_index: usize,
    result: &FullMappingResult,
    cp: u32,
    cp_length: u32,
    edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    match result {
        FullMappingResult::Unchanged => {
            if let Some(edits) = edits {
                edits.add_unchanged(cp_length)?;
                if edits.omits_unchanged() {
                    return Ok(dest_index);
                }
            }
            append_code_point(dest, dest_index, cp)
        }
        FullMappingResult::Single(c) => {
            let new_len = if *c <= 0xFFFF { 1 } else { 2 };
            if let Some(edits) = edits {
                edits.add_replace(cp_length, new_len)?;
            }
            append_code_point(dest, dest_index, *c)
        }
        FullMappingResult::Expansion(units) => {
            if let Some(edits) = edits {
                edits.add_replace(cp_length, units.len() as u32)?;
            }
            append_units(dest, dest_index, units)
        }
    }
}

/// Appends a verbatim, unchanged sub-span (used by the title mapper's
/// uncased-prefix copy).
pub fn append_unchanged(
    dest: &mut [u16],
    dest_index: usize,
    src: &[u16],
    edits: Option<&mut Edits>,
) -> Result<usize, CaseMapError> {
    if src.is_empty() {
        return Ok(dest_index);
    }
    if let Some(edits) = edits {
        edits.add_unchanged(src.len() as u32)?;
        if edits.omits_unchanged() {
            return Ok(dest_index);
        }
    }
    append_units(dest, dest_index, src)
}

/// Resolves the final return value for a mapper: buffer-overflow if the
/// written length exceeds capacity, else any sticky edit-log error, else
/// the length itself.
pub fn check_overflow_and_edits_error(
    dest_index: usize,
    dest_capacity: usize,
    edits: Option<&Edits>,
) -> Result<usize, CaseMapError> {
    if dest_index > dest_capacity {
        return Err(CaseMapError::BufferOverflow);
    }
    if let Some(edits) = edits {
        if let Some(err) = edits.error() {
            return Err(err);
        }
    }
    Ok(dest_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_code_point_bmp_counts_past_capacity() {
        let mut dest = [0u16; 1];
        let len = append_code_point(&mut dest, 1, 'x' as u32).unwrap();
        assert_eq!(len, 2);
        assert_eq!(dest, [0]);
    }

    #[test]
    fn append_code_point_supplementary_writes_surrogate_pair() {
        let mut dest = [0u16; 2];
        let len = append_code_point(&mut dest, 0, 0x1F600).unwrap();
        assert_eq!(len, 2);
        assert_eq!(dest[0], 0xD83D);
        assert_eq!(dest[1], 0xDE00);
    }

    #[test]
    fn unchanged_result_records_log_and_writes_original() {
        let mut dest = [0u16; 1];
        let mut edits = Edits::new();
        let len = append_result(
            &mut dest,
            0,
            &FullMappingResult::Unchanged,
            'A' as u32,
            1,
            Some(&mut edits),
        )
        .unwrap();
        assert_eq!(len, 1);
        assert_eq!(dest[0], 'A' as u16);
        assert!(!edits.has_changes());
    }

    #[test]
    fn overflow_is_reported_only_past_capacity() {
        assert_eq!(check_overflow_and_edits_error(3, 3, None), Ok(3));
        assert_eq!(
            check_overflow_and_edits_error(4, 3, None),
            Err(CaseMapError::BufferOverflow)
        );
    }
}
