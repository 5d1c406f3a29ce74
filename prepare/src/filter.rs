use std::collections::HashSet;

use unicode_identifiers_source::{CodepointEntry, GeneralCategory};

/// символы-операторы и знаки пунктуации, которые не могут быть частью идентификатора,
/// даже если их категория подходит
pub const EXCEPT: &[char] = &[
    '+', '-', '*', '/', '%', '<', '=', '>', '!', '(', ')', '[', ']', '{', '}', '#', '\'', '"', '^', '|', '.', '~',
    '\\', ':', ';', '?', '@', '`',
];

lazy_static! {
    /// исключенные кодпоинты
    pub static ref EXCLUDED: HashSet<u32> = EXCEPT.iter().map(|&c| u32::from(c)).collect();
}

/// может-ли символ этой категории входить в идентификатор:
/// буквы (кроме модификаторов), буквоподобные числа, символы валют, математические и прочие символы,
/// объединяющая пунктуация
#[inline]
pub fn is_identifier_category(gc: GeneralCategory) -> bool
{
    match gc {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::OtherLetter
        | GeneralCategory::LetterNumber
        | GeneralCategory::CurrencySymbol
        | GeneralCategory::MathSymbol
        | GeneralCategory::OtherSymbol
        | GeneralCategory::ConnectorPunctuation => true,

        GeneralCategory::Unassigned
        | GeneralCategory::ModifierLetter
        | GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark
        | GeneralCategory::DecimalNumber
        | GeneralCategory::OtherNumber
        | GeneralCategory::SpaceSeparator
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator
        | GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::DashPunctuation
        | GeneralCategory::OpenPunctuation
        | GeneralCategory::ClosePunctuation
        | GeneralCategory::InitialPunctuation
        | GeneralCategory::FinalPunctuation
        | GeneralCategory::OtherPunctuation
        | GeneralCategory::ModifierSymbol => false,
    }
}

/// входит-ли кодпоинт в идентификатор
#[inline]
pub fn eligible(entry: &CodepointEntry) -> bool
{
    is_identifier_category(entry.gc) && !EXCLUDED.contains(&entry.code)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn entry(code: u32, gc: &str) -> CodepointEntry
    {
        CodepointEntry::new(code, GeneralCategory::try_from(gc).unwrap())
    }

    #[test]
    fn letters_and_symbols()
    {
        assert!(eligible(&entry(0x41, "Lu")));
        assert!(eligible(&entry(0x61, "Ll")));
        assert!(eligible(&entry(0x24, "Sc")));
        assert!(eligible(&entry(0x5F, "Pc")));
        assert!(eligible(&entry(0x2160, "Nl")));
        assert!(eligible(&entry(0x10000, "Lo")));
    }

    #[test]
    fn other_categories()
    {
        assert!(!eligible(&entry(0x30, "Nd")));
        assert!(!eligible(&entry(0x2B0, "Lm")));
        assert!(!eligible(&entry(0x300, "Mn")));
        assert!(!eligible(&entry(0x20, "Zs")));
        assert!(!eligible(&entry(0x2C, "Po")));
        assert!(!eligible(&entry(0xD800, "Cs")));
    }

    #[test]
    fn operators_are_excluded()
    {
        // + < = > | ~ - математические символы, но в идентификатор не входят
        for c in ['+', '<', '=', '>', '|', '~'] {
            assert!(!eligible(&entry(u32::from(c), "Sm")), "{}", c);
        }

        // исключение действует независимо от категории
        for &c in EXCEPT {
            assert!(!eligible(&entry(u32::from(c), "Lo")), "{}", c);
        }

        // остальные математические символы остаются
        assert!(eligible(&entry(0xD7, "Sm")));
    }

    #[test]
    fn every_category_is_classified()
    {
        let allowed: Vec<&str> = GeneralCategory::ALL
            .into_iter()
            .filter(|&gc| is_identifier_category(gc))
            .map(|gc| gc.abbr())
            .collect();

        assert_eq!(allowed, ["Lu", "Ll", "Lt", "Lo", "Nl", "Pc", "Sm", "Sc", "So"]);
    }
}
