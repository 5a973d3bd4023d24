// unicase_map - UTF-16 Unicode case mapping and case-insensitive comparison
// engine.
//
// Module structure:
//   error      -> CaseMapError
//   options    -> CaseLocale, FoldOptions, TitleOptions, CompareOptions
//   context    -> CaseContext, CaseContextCursor (context-sensitive mapping)
//   ucd        -> UnicodeCaseData trait (external UCD capability)
//   wordbreak  -> WordBreakIterator trait (external word-boundary capability)
//   edits      -> Edits, EditsIterator (bit-packed edit log)
//   casemap    -> append/generic/greek/title mapping implementations
//   compare    -> the case-fold comparator
//   api        -> CaseMap/CaseMapBuilder, case_compare, case_insensitive_prefix_match
//   prelude    -> convenient re-exports

pub mod api;
pub mod casemap;
pub mod compare;
pub mod context;
pub mod edits;
pub mod error;
pub mod options;
pub mod prelude;
pub mod ucd;
pub mod wordbreak;
