/// 查询阶段的错误分类。
/// 网络错误和响应解析错误会被记录到 error.log 并打印给用户；
/// 查不到单词不算错误，由 LookupOutcome 表达，不走这里。
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("NetworkError: when connect {url}\n\n{source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Error: Failed to parse response from {url}")]
    MalformedResponse { url: String },
    #[error("Error parsing data: {0}")]
    Cache(#[from] std::io::Error),
}
