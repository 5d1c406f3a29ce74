use crate::ranges::IdentifierRanges;

/// сводка по построенным диапазонам
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats
{
    /// диапазонов в BMP
    pub bmp_ranges: usize,
    /// кодпоинтов в BMP
    pub bmp_codepoints: u32,
    /// старших суррогатов
    pub buckets: usize,
    /// диапазонов младших суррогатов
    pub surrogate_ranges: usize,
    /// кодпоинтов за пределами BMP
    pub surrogate_codepoints: u32,
}

impl Stats
{
    pub fn of(ranges: &IdentifierRanges) -> Self
    {
        let surrogate_ranges = ranges.surrogates.values().flatten();

        Self {
            bmp_ranges: ranges.bmp.len(),
            bmp_codepoints: ranges.bmp.iter().map(|r| r.size()).sum(),
            buckets: ranges.surrogates.len(),
            surrogate_ranges: surrogate_ranges.clone().count(),
            surrogate_codepoints: surrogate_ranges.map(|r| r.size()).sum(),
        }
    }
}

/// информация о результате
pub fn print(ranges: &IdentifierRanges)
{
    let stats = Stats::of(ranges);

    tracing::info!(
        bmp_ranges = stats.bmp_ranges,
        bmp_codepoints = stats.bmp_codepoints,
        buckets = stats.buckets,
        surrogate_ranges = stats.surrogate_ranges,
        surrogate_codepoints = stats.surrogate_codepoints,
        "диапазоны символов идентификатора построены"
    );
}

#[cfg(test)]
mod tests
{
    use crate::ranges::Range;

    use super::*;

    #[test]
    fn counts()
    {
        let mut ranges = IdentifierRanges::default();

        ranges.bmp.push(Range { start: 0x41, end: 0x5A });
        ranges.bmp.push(Range::single(0x5F));
        ranges.surrogates.insert(0xD800, vec![Range::single(0xDC00), Range { start: 0xDC02, end: 0xDC03 }]);
        ranges.surrogates.insert(0xD801, vec![Range { start: 0xDC00, end: 0xDFFF }]);

        assert_eq!(
            Stats::of(&ranges),
            Stats {
                bmp_ranges: 2,
                bmp_codepoints: 27,
                buckets: 2,
                surrogate_ranges: 3,
                surrogate_codepoints: 3 + 0x400,
            }
        );
    }
}
