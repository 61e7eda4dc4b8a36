use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

/// 每个查过的单词在 ~/.dict/words 下存一份原始 data 对象，
/// 只写不读，留给用户自己翻看。重复查询直接覆盖。
pub struct WordCache {
    words_dir: PathBuf,
}

impl WordCache {
    pub fn new(dict_dir: &Path) -> io::Result<WordCache> {
        let words_dir = dict_dir.join("words");
        std::fs::create_dir_all(&words_dir)?;
        Ok(WordCache { words_dir })
    }

    pub fn save(&self, word: &str, data: &Value) -> io::Result<()> {
        let path = self.words_dir.join(format!("{}.json", word));
        let pretty = serde_json::to_string_pretty(data)?;
        std::fs::write(path, pretty)
    }
}
