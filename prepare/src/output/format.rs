use std::iter::Peekable;

use crate::ranges::Range;

/// кодовая единица в виде строкового литерала грамматики
#[inline]
pub fn format_unit(unit: u32) -> String
{
    format!("\"\\u{:04X}\"", unit)
}

/// диапазон: `"\uHHHH"` или `"\uHHHH"-"\uHHHH"`
pub fn format_range(range: &Range) -> String
{
    match range.start == range.end {
        true => format_unit(range.start),
        false => format!("{}-{}", format_unit(range.start), format_unit(range.end)),
    }
}

/// элементы списка вместе с разделителями: после последнего элемента - закрывающая часть
struct Pieces<'a, I: Iterator<Item = String>>
{
    tokens: Peekable<I>,
    closing: &'a str,
}

impl<'a, I: Iterator<Item = String>> Iterator for Pieces<'a, I>
{
    type Item = String;

    fn next(&mut self) -> Option<String>
    {
        let mut piece = self.tokens.next()?;

        match self.tokens.peek().is_some() {
            true => piece.push(','),
            false => piece.push_str(self.closing),
        }

        Some(piece)
    }
}

/// строки списка, разбитого по ширине
pub struct Lines<'a, I: Iterator<Item = String>>
{
    indent: &'a str,
    closing: &'a str,
    width: usize,
    pieces: Peekable<Pieces<'a, I>>,
    done: bool,
}

/// разбить список элементов, разделенных запятыми, на строки не длиннее `width`
///
/// каждая строка начинается с `indent`, последний элемент завершается `closing`. элемент, который
/// не помещается в текущую строку, переносится на следующую. пустой список - одна строка с `closing`
pub fn wrap<'a, I>(indent: &'a str, tokens: I, closing: &'a str, width: usize) -> Lines<'a, I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    Lines {
        indent,
        closing,
        width,
        pieces: Pieces {
            tokens: tokens.into_iter().peekable(),
            closing,
        }
        .peekable(),
        done: false,
    }
}

impl<'a, I: Iterator<Item = String>> Iterator for Lines<'a, I>
{
    type Item = String;

    fn next(&mut self) -> Option<String>
    {
        if self.done {
            return None;
        }

        let mut line = self.indent.to_owned();
        let mut filled = false;

        while let Some(piece) = self.pieces.peek() {
            if filled && line.len() + piece.len() > self.width {
                return Some(line);
            }

            line.push_str(piece);
            self.pieces.next();
            filled = true;
        }

        self.done = true;

        if !filled {
            line.push_str(self.closing);
        }

        Some(line)
    }
}
