use std::fs;
use std::path::Path;

/// прочитать папку с таблицами: все файлы `UnicodeData*.txt`, по имени файла
pub fn read_tables(dir: impl AsRef<Path>) -> Vec<(String, String)>
{
    let mut data = vec![];

    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();

        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) if name.starts_with("UnicodeData") && name.ends_with(".txt") => name.to_owned(),
            _ => continue,
        };

        data.push((name, fs::read_to_string(&path).unwrap()));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}
