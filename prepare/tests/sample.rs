use std::collections::BTreeSet;

use unicode_identifiers_prepare::filter::{eligible, EXCLUDED};
use unicode_identifiers_prepare::surrogate::{HIGH_SURROGATE, LOW_SURROGATE, SUPPLEMENTARY_START};
use unicode_identifiers_prepare::{generate, output, IdentifierRanges};
use unicode_identifiers_source::{read_table, CodepointEntry};

const DATA: &str = include_str!("./../../test_data/UnicodeData.sample.txt");

fn sample() -> Vec<CodepointEntry>
{
    read_table(DATA.as_bytes()).unwrap()
}

/// кодпоинт по паре суррогатов
fn from_surrogates(high: u16, low: u32) -> u32
{
    SUPPLEMENTARY_START + ((u32::from(high - HIGH_SURROGATE) << 10) | (low - u32::from(LOW_SURROGATE)))
}

/// все кодпоинты, попавшие в диапазоны (с повторами, если они есть)
fn covered(ranges: &IdentifierRanges) -> Vec<u32>
{
    let mut codes = vec![];

    for range in ranges.bmp.iter() {
        codes.extend(range.start ..= range.end);
    }

    for (&high, lows) in ranges.surrogates.iter() {
        for range in lows {
            codes.extend((range.start ..= range.end).map(|low| from_surrogates(high, low)));
        }
    }

    codes
}

/// каждый подходящий кодпоинт встречается в диапазонах ровно один раз
#[test]
fn coverage()
{
    let table = sample();
    let ranges: IdentifierRanges = table.iter().copied().collect();

    let expected: Vec<u32> = table
        .iter()
        .filter(|entry| eligible(entry))
        .map(|entry| entry.code)
        .collect();

    assert_eq!(covered(&ranges), expected);
}

#[test]
fn excluded_codepoints_never_appear()
{
    let ranges: IdentifierRanges = sample().into_iter().collect();
    let codes: BTreeSet<u32> = covered(&ranges).into_iter().collect();

    for code in EXCLUDED.iter() {
        assert!(!codes.contains(code), "U+{:04X}", code);
    }
}

#[test]
fn ranges_stay_within_plane_and_bucket()
{
    let ranges: IdentifierRanges = sample().into_iter().collect();

    for range in ranges.bmp.iter() {
        assert!(range.start <= range.end);
        assert!(range.end < SUPPLEMENTARY_START);
    }

    for (&high, lows) in ranges.surrogates.iter() {
        assert!((0xD800 ..= 0xDBFF).contains(&high));

        for range in lows {
            assert!(range.start <= range.end);
            assert!(range.start >= 0xDC00 && range.end <= 0xDFFF);
        }
    }
}

/// соседние подходящие кодпоинты одной плоскости / одного старшего суррогата - в одном диапазоне
#[test]
fn ranges_are_minimal()
{
    let ranges: IdentifierRanges = sample().into_iter().collect();

    for pair in ranges.bmp.windows(2) {
        assert!(pair[0].end + 1 < pair[1].start, "{:?}", pair);
    }

    for lows in ranges.surrogates.values() {
        assert!(!lows.is_empty());

        for pair in lows.windows(2) {
            assert!(pair[0].end + 1 < pair[1].start, "{:?}", pair);
        }
    }
}

#[test]
fn known_ranges()
{
    let ranges: IdentifierRanges = sample().into_iter().collect();
    let text = output::render(&ranges);

    // $, A-Z, _, a-z
    assert!(text.starts_with("  <#LETTER: ([\n    \"\\u0024\",\"\\u0041\"-\"\\u005A\",\"\\u005F\",\"\\u0061\"-\"\\u007A\","));
    // CJK Extension A целиком
    assert!(text.contains(r#""\u3400"-"\u4DBF""#));
    // Linear B: U+10000 ..= U+1000B
    assert!(text.contains("    | (\"\\uD800\" [\n      \"\\uDC00\"-\"\\uDC0B\","));
    // CJK Extension B: каждый старший суррогат D840 ..= D868 заполнен полностью
    assert!(text.contains("    | (\"\\uD840\" [\n      \"\\uDC00\"-\"\\uDFFF\"])\n"));
    assert!(text.contains("    | (\"\\uD869\" [\n      \"\\uDC00\"-\"\\uDEDF\"])\n"));
    // суррогаты и приватное использование не попадают в BMP
    assert!(!text.contains(r#""\uE000""#));
    assert!(!text.contains(r#""\uD800"-"#));
    assert!(text.ends_with("  >\n  |\n  <#ID_REST: [\"0\"-\"9\"] | <LETTER> >\n"));
}

#[test]
fn line_width()
{
    let text = generate(DATA.lines()).unwrap();

    for line in text.lines() {
        assert!(line.len() <= output::LINE_WIDTH, "{}", line);
    }
}

#[test]
fn same_output_every_time()
{
    assert_eq!(generate(DATA.lines()).unwrap(), generate(DATA.lines()).unwrap());

    let ranges: IdentifierRanges = sample().into_iter().collect();
    assert_eq!(output::render(&ranges), generate(DATA.lines()).unwrap());
}
