use anyhow::Result;
use serde_json::Value;

use crate::api::{ApiClient, LookupOutcome};
use crate::cache::WordCache;
use crate::config::Config;
use crate::error::DictError;
use crate::logger::Logger;
use crate::mapper::parse_entry;
use crate::render::render_entry;

/// 一次查询用到的全部协作对象：接口客户端、日志、缓存、配置。
/// 由入口显式构造后传入，不依赖全局状态。
pub struct DictApp {
    client: ApiClient,
    logger: Logger,
    cache: WordCache,
    config: Config,
}

impl DictApp {
    pub fn new(config: Config, logger: Logger, cache: WordCache) -> DictApp {
        let client = ApiClient::new(config.api_url.clone());
        DictApp {
            client,
            logger,
            cache,
            config,
        }
    }

    /// 查一个词并打印报告。所有失败都化为提示信息，不向上抛。
    pub async fn run(&self, word: &str) {
        self.note_info(&format!("Query: {}", word));

        let response = match self.client.lookup(word).await {
            Ok(LookupOutcome::Found { response }) => response,
            Ok(LookupOutcome::NotFound { message }) => {
                // 查无此词是正常结果，不记错误日志
                println!("错误: {}", message);
                return;
            }
            Err(err) => {
                self.note_error(&err.to_string());
                return;
            }
        };

        let data = response.get("data").cloned().unwrap_or(Value::Null);
        let entry = parse_entry(&data);

        if let Err(err) = self.cache.save(word, &data) {
            self.note_error(&DictError::Cache(err).to_string());
            return;
        }

        // 播放美式发音，失败不影响文本输出
        if self.config.play_audio && !entry.usspeech.is_empty() {
            if let Err(err) = self.play_pronunciation(&entry.usspeech).await {
                self.note_error(&format!("Error: Can't play sounds, {}", err));
            }
        }

        println!("{}", render_entry(&entry, self.config.emphasis));
    }

    async fn play_pronunciation(&self, url: &str) -> Result<()> {
        let bytes = self.client.fetch_audio(url).await?;
        // 播放会阻塞到放完，放到阻塞线程上跑
        tokio::task::spawn_blocking(move || crate::audio::play_bytes(&bytes)).await?
    }

    // 错误先记日志再打印；日志本身写不进去时退回标准错误
    fn note_error(&self, message: &str) {
        if let Err(err) = self.logger.log_error(message) {
            eprintln!("dict: 无法写入日志: {}", err);
        }
        println!("dict: {}", message);
    }

    fn note_info(&self, message: &str) {
        if let Err(err) = self.logger.log_info(message) {
            eprintln!("dict: 无法写入日志: {}", err);
        }
    }
}
