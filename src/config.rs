use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_API_URL: &str = "https://v2.xxapi.cn/api/englishwords";

/// 用户配置，来自 ~/.dict/config.toml，文件不存在时全部取默认值
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 词典接口地址
    pub api_url: String,
    /// 查到单词后是否播放美式发音
    pub play_audio: bool,
    /// 输出是否使用终端加粗
    pub emphasis: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            play_audio: true,
            emphasis: true,
        }
    }
}

impl Config {
    pub fn load(dict_dir: &Path) -> Result<Config> {
        let path = dict_dir.join("config.toml");
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("配置文件解析失败 {}", path.display()))?;
        Ok(config)
    }
}

/// 工具的数据目录 ~/.dict
pub fn dict_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("无法定位用户主目录")?;
    Ok(home.join(".dict"))
}
