use std::io;

use crate::ranges::IdentifierRanges;

pub use self::format::{format_range, format_unit, wrap, Lines};
pub use self::stats::Stats;

mod format;
pub mod stats;

/// максимальная длина строки фрагмента грамматики
pub const LINE_WIDTH: usize = 80;

/// отступ списка диапазонов BMP
const BMP_INDENT: &str = "    ";
/// отступ списка младших суррогатов
const LOW_INDENT: &str = "      ";
/// закрытие списка диапазонов
const CLOSING: &str = "])";

/// фрагмент грамматики: токен LETTER с диапазонами символов идентификатора и ID_REST
pub fn render(ranges: &IdentifierRanges) -> String
{
    let mut output = String::new();

    output.push_str("  <#LETTER: ([\n");

    for line in wrap(BMP_INDENT, ranges.bmp.iter().map(format_range), CLOSING, LINE_WIDTH) {
        output.push_str(&line);
        output.push('\n');
    }

    for (&high, lows) in ranges.surrogates.iter() {
        output.push_str(format!("    | ({} [\n", format_unit(u32::from(high))).as_str());

        for line in wrap(LOW_INDENT, lows.iter().map(format_range), CLOSING, LINE_WIDTH) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push_str("  >\n");
    output.push_str("  |\n");
    output.push_str("  <#ID_REST: [\"0\"-\"9\"] | <LETTER> >\n");

    output
}

/// записываем фрагмент грамматики
pub fn write<W: io::Write>(ranges: &IdentifierRanges, out: &mut W) -> io::Result<()>
{
    out.write_all(render(ranges).as_bytes())?;
    out.flush()
}
