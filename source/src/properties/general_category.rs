use core::fmt;
use core::str::FromStr;

use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt (считая с нуля)
///
/// общие категории:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено
    Unassigned,

    /// Lu - прописная буква
    UppercaseLetter,
    /// Ll - строчная буква
    LowercaseLetter,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter,
    /// Lm - буква-модификатор
    ModifierLetter,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter,

    /// Mn - неразрывный комбинирующий маркер
    NonspacingMark,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark,

    /// Nd - десятичная цифра
    DecimalNumber,
    /// Nl - буквоподобный числовой символ
    LetterNumber,
    /// No - прочие числовые символы
    OtherNumber,

    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl - разделитель строки
    LineSeparator,
    /// Zp - разделитель параграфов
    ParagraphSeparator,

    /// Cc - управляющий символ, относится к C0 или C1
    Control,
    /// Cf - управляющий символ форматирования
    Format,
    /// Cs - символ-суррогат
    Surrogate,
    /// Co - символ для приватного использования
    PrivateUse,

    /// Pc - объединяющая пунктуация, например _
    ConnectorPunctuation,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation,
    /// Pi - начальный знак цитаты
    InitialPunctuation,
    /// Pf - конечный знак цитаты
    FinalPunctuation,
    /// Po - знак препинания другого типа
    OtherPunctuation,

    /// Sm - математический символ
    MathSymbol,
    /// Sc - символ валюты
    CurrencySymbol,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol,
    /// So - прочие символы
    OtherSymbol,
}

impl GeneralCategory
{
    /// все категории в порядке объявления
    pub const ALL: [Self; 30] = [
        Self::Unassigned,
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
    ];

    /// двухбуквенное обозначение категории, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
        }
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            _ => return Err(PropertiesError::UnknownPropertyValue(abbr.to_owned())),
        })
    }
}

impl FromStr for GeneralCategory
{
    type Err = PropertiesError;

    fn from_str(abbr: &str) -> Result<Self, Self::Err>
    {
        Self::try_from(abbr)
    }
}

impl fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.abbr())
    }
}
