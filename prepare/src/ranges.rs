use std::collections::BTreeMap;
use std::mem;

use unicode_identifiers_source::{CodepointEntry, SourceError};

use crate::filter::eligible;
use crate::surrogate::split;

/// непрерывный диапазон, включая границы
///
/// для BMP - кодпоинты, для суррогатных пар - значения младших суррогатов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range
{
    pub start: u32,
    pub end: u32,
}

impl Range
{
    /// диапазон из одного значения
    #[inline]
    pub fn single(value: u32) -> Self
    {
        Self {
            start: value,
            end: value,
        }
    }

    /// количество значений в диапазоне
    #[inline]
    pub fn size(&self) -> u32
    {
        self.end - self.start + 1
    }

    /// можно-ли продолжить диапазон этим значением
    #[inline]
    fn continues_with(&self, value: u32) -> bool
    {
        self.end + 1 == value
    }
}

/// диапазоны младших суррогатов, сгруппированные по старшему суррогату (по возрастанию)
pub type SurrogateBuckets = BTreeMap<u16, Vec<Range>>;

/// диапазоны символов идентификатора
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRanges
{
    /// диапазоны BMP
    pub bmp: Vec<Range>,
    /// диапазоны за пределами BMP
    pub surrogates: SurrogateBuckets,
}

/// открытый диапазон
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State
{
    Idle,
    Bmp(Range),
    Surrogate(u16, Range),
}

/// свертка записей таблицы в диапазоны
///
/// записи должны поступать в порядке возрастания кодпоинтов. открытым может быть не более одного
/// диапазона - либо в BMP, либо в пределах одного старшего суррогата. диапазон младших суррогатов
/// никогда не переходит на следующий старший суррогат, даже если кодпоинты идут подряд
#[derive(Debug)]
pub struct Accumulator
{
    state: State,
    ranges: IdentifierRanges,
}

impl Default for Accumulator
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Accumulator
{
    pub fn new() -> Self
    {
        Self {
            state: State::Idle,
            ranges: IdentifierRanges::default(),
        }
    }

    /// учесть очередную запись таблицы
    pub fn push(&mut self, entry: &CodepointEntry)
    {
        if !eligible(entry) {
            self.close();
            return;
        }

        self.state = match (self.state, split(entry.code)) {
            (State::Bmp(range), (unit, None)) if range.continues_with(unit as u32) => State::Bmp(Range {
                start: range.start,
                end: unit as u32,
            }),
            (State::Surrogate(high, range), (unit, Some(low))) if high == unit && range.continues_with(low as u32) => {
                State::Surrogate(
                    high,
                    Range {
                        start: range.start,
                        end: low as u32,
                    },
                )
            }
            (_, (unit, None)) => {
                self.close();
                State::Bmp(Range::single(unit as u32))
            }
            (_, (high, Some(low))) => {
                self.close();
                State::Surrogate(high, Range::single(low as u32))
            }
        };
    }

    /// закрыть открытый диапазон (если есть)
    fn close(&mut self)
    {
        match mem::replace(&mut self.state, State::Idle) {
            State::Idle => (),
            State::Bmp(range) => {
                tracing::info!("0x{:X}..0x{:X}", range.start, range.end);
                self.ranges.bmp.push(range);
            }
            State::Surrogate(high, range) => {
                tracing::info!("0x{:X}..0x{:X} (0x{:X})", range.start, range.end, high);
                self.ranges.surrogates.entry(high).or_default().push(range);
            }
        }
    }

    /// закрыть последний диапазон и получить результат
    pub fn finish(mut self) -> IdentifierRanges
    {
        self.close();
        self.ranges
    }
}

impl FromIterator<CodepointEntry> for IdentifierRanges
{
    fn from_iter<T: IntoIterator<Item = CodepointEntry>>(iter: T) -> Self
    {
        iter.into_iter()
            .fold(Accumulator::new(), |mut acc, entry| {
                acc.push(&entry);
                acc
            })
            .finish()
    }
}

/// построить диапазоны по записям таблицы
///
/// при первой же ошибке в записях результата нет
pub fn collect_ranges<I>(entries: I) -> Result<IdentifierRanges, SourceError>
where
    I: IntoIterator<Item = Result<CodepointEntry, SourceError>>,
{
    let acc = entries.into_iter().try_fold(Accumulator::new(), |mut acc, entry| {
        acc.push(&entry?);
        Ok::<_, SourceError>(acc)
    })?;

    Ok(acc.finish())
}
