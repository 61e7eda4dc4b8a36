use serde_json::Value;

use crate::models::*;

// 上游接口的字段大多可有可无，类型也不保证。统一用两个取值函数兜底：
// 标量缺失补空字符串，列表缺失补空列表，任何输入都不报错。

fn text(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn items<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// 把上游返回的 data 对象解析为 Entry。
/// 纯函数，输入再畸形也不失败，最坏情况下所有字段为空。
pub fn parse_entry(data: &Value) -> Entry {
    let mut entry = Entry {
        content: text(data, "word"),
        usphone: text(data, "usphone"),
        ukphone: text(data, "ukphone"),
        usspeech: text(data, "usspeech"),
        ukspeech: text(data, "ukspeech"),
        ..Entry::default()
    };

    // 释义
    for trans in items(data, "translations") {
        entry.translations.push(Translation {
            part_of_speech: text(trans, "pos"),
            chinese: text(trans, "tran_cn"),
        });
    }

    // 同根词，保持分组和组内顺序
    for rel in items(data, "relWords") {
        let headwords = items(rel, "Hwds")
            .iter()
            .map(|hwd| Headword {
                content: text(hwd, "hwd"),
                chinese: text(hwd, "tran"),
            })
            .collect();
        entry.related_words.push(RelatedWordGroup {
            part_of_speech: text(rel, "Pos"),
            headwords,
        });
    }

    // 短语
    for phrase in items(data, "phrases") {
        entry.phrases.push(Phrase {
            content: text(phrase, "p_content"),
            chinese: text(phrase, "p_cn"),
        });
    }

    // 近义词组
    for syn in items(data, "synonyms") {
        let synonyms = items(syn, "Hwds")
            .iter()
            .map(|hwd| SynonymItem {
                word: text(hwd, "word"),
            })
            .collect();
        entry.synonym_groups.push(SynonymGroup {
            part_of_speech: text(syn, "pos"),
            synonyms,
            chinese: text(syn, "tran"),
        });
    }

    // 例句
    for sentence in items(data, "sentences") {
        entry.sentences.push(Sentence {
            content: text(sentence, "s_content"),
            chinese: text(sentence, "s_cn"),
        });
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_maps_to_empty_entry() {
        let entry = parse_entry(&json!({}));
        assert_eq!(entry, Entry::default());
    }

    #[test]
    fn non_object_input_maps_to_empty_entry() {
        assert_eq!(parse_entry(&json!(null)), Entry::default());
        assert_eq!(parse_entry(&json!([1, 2, 3])), Entry::default());
        assert_eq!(parse_entry(&json!("run")), Entry::default());
    }

    #[test]
    fn wrong_typed_fields_fall_back_to_defaults() {
        let entry = parse_entry(&json!({
            "word": 42,
            "usphone": ["not", "a", "string"],
            "translations": "not a list",
            "sentences": {"also": "not a list"},
        }));
        assert_eq!(entry.content, "");
        assert_eq!(entry.usphone, "");
        assert!(entry.translations.is_empty());
        assert!(entry.sentences.is_empty());
    }

    #[test]
    fn malformed_list_elements_map_to_empty_fields() {
        let entry = parse_entry(&json!({
            "translations": [{"pos": "v."}, {}, 7],
        }));
        assert_eq!(entry.translations.len(), 3);
        assert_eq!(entry.translations[0].part_of_speech, "v.");
        assert_eq!(entry.translations[0].chinese, "");
        assert_eq!(entry.translations[1].part_of_speech, "");
        assert_eq!(entry.translations[2].part_of_speech, "");
    }

    #[test]
    fn scalars_and_translations_map_in_order() {
        let entry = parse_entry(&json!({
            "word": "run",
            "usphone": "rʌn",
            "ukphone": "rʌn",
            "usspeech": "http://x/run.mp3",
            "translations": [
                {"pos": "v.", "tran_cn": "跑"},
                {"pos": "n.", "tran_cn": "奔跑"},
            ],
        }));
        assert_eq!(entry.content, "run");
        assert_eq!(entry.usspeech, "http://x/run.mp3");
        assert_eq!(entry.ukspeech, "");
        assert_eq!(entry.translations[0].chinese, "跑");
        assert_eq!(entry.translations[1].part_of_speech, "n.");
    }

    #[test]
    fn nested_groups_preserve_order() {
        let entry = parse_entry(&json!({
            "relWords": [
                {"Pos": "n.", "Hwds": [
                    {"hwd": "runner", "tran": "跑步者"},
                    {"hwd": "running", "tran": "跑步"},
                ]},
                {"Pos": "adj.", "Hwds": [{"hwd": "runny", "tran": "流动的"}]},
            ],
            "synonyms": [
                {"pos": "n.", "tran": "疾跑", "Hwds": [
                    {"word": "sprint"},
                    {"word": "dash"},
                ]},
            ],
        }));
        assert_eq!(entry.related_words.len(), 2);
        assert_eq!(entry.related_words[0].headwords[1].content, "running");
        assert_eq!(entry.related_words[1].part_of_speech, "adj.");
        let group = &entry.synonym_groups[0];
        assert_eq!(group.synonyms[0].word, "sprint");
        assert_eq!(group.synonyms[1].word, "dash");
        assert_eq!(group.chinese, "疾跑");
    }
}
