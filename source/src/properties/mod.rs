mod general_category;

pub use general_category::GeneralCategory;

/// запись таблицы кодпоинтов
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointEntry
{
    /// код символа
    pub code: u32,
    /// категория символа (general category)
    pub gc: GeneralCategory,
}

impl CodepointEntry
{
    #[inline]
    pub fn new(code: u32, gc: GeneralCategory) -> Self
    {
        Self { code, gc }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: `{0}`")]
    UnknownPropertyValue(String),
}
