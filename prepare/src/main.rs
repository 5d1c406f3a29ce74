use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use unicode_identifiers_prepare::{output, IdentifierRanges};
use unicode_identifiers_source::read_table;

const HELP: &str = "\
Использование: unicode-identifiers [параметры] [UnicodeData.txt]
  -h, --help              Вывести эту справку
  -o, --output <файл>     Записать фрагмент грамматики в файл (по умолчанию - stdout)
  -q, --quiet             Не выводить найденные диапазоны в stderr

Без имени файла (или с именем \"-\") таблица читается из stdin.
Таблица: https://www.unicode.org/Public/UCD/latest/ucd/UnicodeData.txt
";

/// параметры командной строки
struct Args
{
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    quiet: bool,
}

fn parse_args() -> anyhow::Result<Option<Args>>
{
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        eprint!("{HELP}");
        return Ok(None);
    }

    let quiet = args.contains(["-q", "--quiet"]);
    let output = args.opt_value_from_os_str(["-o", "--output"], |s| -> Result<PathBuf, &'static str> {
        Ok(s.into())
    })?;
    let input = args
        .opt_free_from_os_str(|s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?
        .filter(|path| path.as_os_str() != "-");

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("неизвестные аргументы: {:?}", remaining);
    }

    Ok(Some(Args { input, output, quiet }))
}

/// диагностика - в stderr, уровень задается RUST_LOG
fn init_logging(quiet: bool)
{
    let directive = match quiet {
        true => "warn",
        false => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn main() -> anyhow::Result<()>
{
    let args = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    init_logging(args.quiet);

    let table = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("не удалось открыть {}", path.display()))?;
            read_table(BufReader::new(file)).with_context(|| format!("не удалось прочитать {}", path.display()))?
        }
        None => read_table(io::stdin().lock()).context("не удалось прочитать таблицу из stdin")?,
    };

    tracing::info!(entries = table.len(), "таблица прочитана");

    let ranges: IdentifierRanges = table.into_iter().collect();
    output::stats::print(&ranges);

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).with_context(|| format!("не удалось создать {}", path.display()))?;
            output::write(&ranges, &mut file).with_context(|| format!("не удалось записать {}", path.display()))?;
        }
        None => output::write(&ranges, &mut io::stdout().lock())?,
    }

    Ok(())
}
