#[macro_use]
extern crate lazy_static;

pub mod filter;
pub mod output;
pub mod ranges;
pub mod surrogate;

use unicode_identifiers_source::SourceError;

pub use filter::eligible;
pub use ranges::{collect_ranges, Accumulator, IdentifierRanges, Range, SurrogateBuckets};
pub use surrogate::split;

/// фрагмент грамматики по строкам UnicodeData.txt
pub fn generate<I, S>(lines: I) -> Result<String, SourceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ranges = collect_ranges(unicode_identifiers_source::entries(lines))?;

    Ok(output::render(&ranges))
}
