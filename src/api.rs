use reqwest::Client;
use serde_json::Value;

use crate::error::DictError;

/// 上游接口的默认 "未找到" 提示，响应里没带 msg 时用它
const DEFAULT_NOT_FOUND_MSG: &str = "未找到该单词";

/// 一次查词的正常结果：查到了，或者上游明确说没有
#[derive(Debug)]
pub enum LookupOutcome {
    /// code == 200，携带完整响应体
    Found { response: Value },
    /// code != 200，携带上游的提示文本
    NotFound { message: String },
}

pub struct ApiClient {
    client: Client,
    api_url: String,
}

impl ApiClient {
    pub fn new(api_url: String) -> Self {
        ApiClient {
            client: Client::new(),
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// 查询单词。传输层失败或响应不是 JSON 返回 Err，
    /// 上游报 "查无此词" 是正常结果，返回 Ok(NotFound)。
    pub async fn lookup(&self, word: &str) -> Result<LookupOutcome, DictError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("word", word)])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| DictError::Network {
                url: self.api_url.clone(),
                source,
            })?;

        let body = response.text().await.map_err(|source| DictError::Network {
            url: self.api_url.clone(),
            source,
        })?;

        let json: Value =
            serde_json::from_str(&body).map_err(|_| DictError::MalformedResponse {
                url: self.api_url.clone(),
            })?;

        Ok(classify_response(json))
    }

    /// 下载发音音频
    pub async fn fetch_audio(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

// code 字段决定成败，msg 缺失时用默认提示
fn classify_response(json: Value) -> LookupOutcome {
    let code = json.get("code").and_then(Value::as_i64);
    if code == Some(200) {
        LookupOutcome::Found { response: json }
    } else {
        let message = json
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_NOT_FOUND_MSG)
            .to_string();
        LookupOutcome::NotFound { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn code_200_is_found() {
        let outcome = classify_response(json!({"code": 200, "data": {"word": "run"}}));
        match outcome {
            LookupOutcome::Found { response } => {
                assert_eq!(response["data"]["word"], "run");
            }
            LookupOutcome::NotFound { .. } => panic!("expected Found"),
        }
    }

    #[test]
    fn non_200_code_carries_upstream_message() {
        let outcome = classify_response(json!({"code": 404, "msg": "not found"}));
        match outcome {
            LookupOutcome::NotFound { message } => assert_eq!(message, "not found"),
            LookupOutcome::Found { .. } => panic!("expected NotFound"),
        }
    }

    #[test]
    fn missing_code_or_msg_falls_back_to_default_message() {
        for body in [json!({}), json!({"code": "200"}), json!({"code": 500})] {
            match classify_response(body) {
                LookupOutcome::NotFound { message } => {
                    assert_eq!(message, DEFAULT_NOT_FOUND_MSG)
                }
                LookupOutcome::Found { .. } => panic!("expected NotFound"),
            }
        }
    }
}
