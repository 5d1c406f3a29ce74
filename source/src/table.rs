use std::io::BufRead;
use std::ops::RangeInclusive;

use crate::error::SourceError;
use crate::properties::{CodepointEntry, GeneralCategory};

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// код, название и категория - остальные колонки UnicodeData.txt нам не нужны
const REQUIRED_FIELDS: usize = 3;

/// то, что мы берем из строки UnicodeData.txt
struct Record<'a>
{
    code: u32,
    name: &'a str,
    gc: GeneralCategory,
}

/// разбор одной строки таблицы
fn parse_record(line: usize, source: &str) -> Result<Record<'_>, SourceError>
{
    let props: Vec<&str> = source.split(';').collect();

    if props.len() < REQUIRED_FIELDS {
        return Err(SourceError::MissingField {
            line,
            found: props.len(),
        });
    }

    let code = u32::from_str_radix(props[0], 16).map_err(|source| SourceError::InvalidCode {
        line,
        value: props[0].to_owned(),
        source,
    })?;

    if code > LAST_CODEPOINT {
        return Err(SourceError::OutOfRange { line, code });
    }

    let gc = GeneralCategory::try_from(props[2]).map_err(|_| SourceError::UnknownCategory {
        line,
        value: props[2].to_owned(),
    })?;

    Ok(Record {
        code,
        name: props[1],
        gc,
    })
}

/// записи таблицы кодпоинтов в порядке возрастания кода
///
/// блоки, заданные в UCD парой записей `<..., First>` / `<..., Last>` (CJK, хангыль, тангутский,
/// приватное использование, суррогаты), разворачиваются в отдельные записи для каждого кодпоинта.
/// после первой ошибки итератор больше ничего не возвращает
pub struct Entries<I>
{
    lines: I,
    /// номер последней прочитанной строки, считая с единицы
    line: usize,
    /// остаток развернутого блока
    block: Option<(RangeInclusive<u32>, GeneralCategory)>,
    /// последний прочитанный кодпоинт
    previous: Option<u32>,
    done: bool,
}

/// записи таблицы из строк UnicodeData.txt
pub fn entries<I, S>(lines: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Entries {
        lines: lines.into_iter(),
        line: 0,
        block: None,
        previous: None,
        done: false,
    }
}

/// прочитать таблицу целиком
///
/// источник дочитывается до конца прежде, чем начинается разбор записей
pub fn read_table<R: BufRead>(reader: R) -> Result<Vec<CodepointEntry>, SourceError>
{
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

    entries(lines).collect()
}

impl<I, S> Entries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// следующая непустая строка и ее номер
    fn next_line(&mut self) -> Option<(usize, S)>
    {
        for source in self.lines.by_ref() {
            self.line += 1;

            if !source.as_ref().trim_end_matches('\r').is_empty() {
                return Some((self.line, source));
            }
        }

        None
    }

    /// кодпоинты должны строго возрастать
    fn check_order(&mut self, line: usize, code: u32) -> Result<(), SourceError>
    {
        if let Some(previous) = self.previous {
            if code <= previous {
                return Err(SourceError::NotAscending {
                    line,
                    code,
                    previous,
                });
            }
        }

        self.previous = Some(code);

        Ok(())
    }

    fn read_entry(&mut self) -> Result<Option<CodepointEntry>, SourceError>
    {
        let (line, source) = match self.next_line() {
            Some(next) => next,
            None => return Ok(None),
        };

        let record = parse_record(line, source.as_ref().trim_end_matches('\r'))?;
        self.check_order(line, record.code)?;

        if !record.name.ends_with(", First>") {
            return Ok(Some(CodepointEntry::new(record.code, record.gc)));
        }

        // начало блока - следующей записью обязан быть его конец
        let unclosed = SourceError::UnclosedBlock {
            line,
            first: record.code,
        };

        let (last_line, last_source) = match self.next_line() {
            Some(next) => next,
            None => return Err(unclosed),
        };

        let last = parse_record(last_line, last_source.as_ref().trim_end_matches('\r'))?;

        if !last.name.ends_with(", Last>") {
            return Err(unclosed);
        }

        self.check_order(last_line, last.code)?;
        self.block = Some((record.code + 1 ..= last.code, record.gc));

        Ok(Some(CodepointEntry::new(record.code, record.gc)))
    }
}

impl<I, S> Iterator for Entries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<CodepointEntry, SourceError>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.done {
            return None;
        }

        if let Some((codes, gc)) = &mut self.block {
            match codes.next() {
                Some(code) => return Some(Ok(CodepointEntry::new(code, *gc))),
                None => self.block = None,
            }
        }

        match self.read_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
