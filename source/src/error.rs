use core::num::ParseIntError;

/// ошибки чтения таблицы кодпоинтов
///
/// любая ошибка прерывает разбор, записи не пропускаются
#[derive(Debug, thiserror::Error)]
pub enum SourceError
{
    #[error("строка {line}: ожидается как минимум 3 поля, найдено {found}")]
    MissingField
    {
        line: usize,
        found: usize,
    },

    #[error("строка {line}: некорректный код символа `{value}`")]
    InvalidCode
    {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("строка {line}: кодпоинт 0x{code:X} за пределами Unicode")]
    OutOfRange
    {
        line: usize,
        code: u32,
    },

    #[error("строка {line}: неизвестная категория `{value}`")]
    UnknownCategory
    {
        line: usize,
        value: String,
    },

    #[error("строка {line}: кодпоинт U+{code:04X} следует за U+{previous:04X}, ожидается возрастающий порядок")]
    NotAscending
    {
        line: usize,
        code: u32,
        previous: u32,
    },

    #[error("строка {line}: у блока, начинающегося с U+{first:04X}, нет завершающей записи")]
    UnclosedBlock
    {
        line: usize,
        first: u32,
    },

    #[error("ошибка чтения таблицы: {0}")]
    Io(#[from] std::io::Error),
}
