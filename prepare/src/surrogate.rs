use unicode_identifiers_source::LAST_CODEPOINT;

/// первый кодпоинт за пределами BMP
pub const SUPPLEMENTARY_START: u32 = 0x10000;
/// старшие суррогаты: 0xD800 ..= 0xDBFF
pub const HIGH_SURROGATE: u16 = 0b_1101_1000_0000_0000;
/// младшие суррогаты: 0xDC00 ..= 0xDFFF
pub const LOW_SURROGATE: u16 = 0b_1101_1100_0000_0000;

/// представление кодпоинта в UTF-16: кодовая единица BMP, либо пара (старший суррогат, младший суррогат)
///
/// кодпоинт за пределами Unicode - ошибка вызывающей стороны
#[inline]
pub fn split(code: u32) -> (u16, Option<u16>)
{
    assert!(code <= LAST_CODEPOINT, "кодпоинт 0x{:X} за пределами Unicode", code);

    if code < SUPPLEMENTARY_START {
        return (code as u16, None);
    }

    //    000uuuuuxxxxxxxxxxxxxxxx
    let u = (code >> 16) & 0b_1_1111;
    let x = code & 0xFFFF;
    let w = u - 1;

    let high = HIGH_SURROGATE | ((w << 6) | (x >> 10)) as u16;
    let low = LOW_SURROGATE | (x & 0b_11_1111_1111) as u16;

    (high, Some(low))
}
