// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use unicase_map::prelude::*;
//!
//! let ucd = MinimalCaseData::new();
//! let map = CaseMap::new(&ucd);
//! let src: Vec<u16> = "HELLO".encode_utf16().collect();
//! let mut dest = vec![0u16; src.len()];
//! let len = map.to_lower(&src, &mut dest, None).unwrap();
//! assert_eq!(String::from_utf16(&dest[..len]).unwrap(), "hello");
//! ```

pub use crate::api::{case_compare, case_insensitive_prefix_match, CaseMap, CaseMapBuilder};
pub use crate::edits::{Edits, EditsIterator};
pub use crate::error::CaseMapError;
pub use crate::options::{CaseLocale, CompareOptions, FoldOptions, TitleOptions};
pub use crate::ucd::{CaseType, FullMappingResult, MinimalCaseData, UnicodeCaseData};
pub use crate::wordbreak::{SimpleWordBreaks, WordBreakIterator};
