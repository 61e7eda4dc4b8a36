use crate::models::*;

// 终端加粗。emphasis 关闭时原样输出。
fn bold(text: &str, emphasis: bool) -> String {
    if emphasis {
        format!("\x1b[1m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

fn render_translation(trans: &Translation) -> String {
    format!("    - {}. {}", trans.part_of_speech, trans.chinese)
}

fn render_headword(hwd: &Headword) -> String {
    format!("{} {}", hwd.content, hwd.chinese)
}

// 同根词组内每个词各占一行，共用组的词性
fn render_related_group(group: &RelatedWordGroup) -> Vec<String> {
    group
        .headwords
        .iter()
        .map(|hwd| format!("    - {}. {}", group.part_of_speech, render_headword(hwd)))
        .collect()
}

fn render_phrase(phrase: &Phrase) -> String {
    format!("    - {} {}", phrase.content, phrase.chinese)
}

// 近义词空格连接，组的释义放在最后
fn render_synonym_group(group: &SynonymGroup) -> String {
    let words: Vec<&str> = group.synonyms.iter().map(|syn| syn.word.as_str()).collect();
    format!(
        "    - {}. {} {}",
        group.part_of_speech,
        words.join(" "),
        group.chinese
    )
}

// 例句两行：原句带短横，译文缩进六格
fn render_sentence(sentence: &Sentence) -> Vec<String> {
    vec![
        format!("    - {}", sentence.content),
        format!("      {}", sentence.chinese),
    ]
}

/// 把词条渲染成多行报告。
/// 固定顺序：词头、释义、同根词、短语、近义词、例句；空的部分整段不输出。
pub fn render_entry(entry: &Entry, emphasis: bool) -> String {
    let mut lines = Vec::new();

    // 单词和音标
    lines.push(bold(&entry.content, emphasis));
    lines.push(format!("美: {} | 英: {}", entry.usphone, entry.ukphone));
    lines.push(String::new());

    if !entry.translations.is_empty() {
        lines.push(bold("Translations:", emphasis));
        lines.extend(entry.translations.iter().map(render_translation));
        lines.push(String::new());
    }

    if !entry.related_words.is_empty() {
        lines.push(bold("Related Words:", emphasis));
        for group in &entry.related_words {
            lines.extend(render_related_group(group));
        }
        lines.push(String::new());
    }

    if !entry.phrases.is_empty() {
        lines.push(bold("Phrases:", emphasis));
        lines.extend(entry.phrases.iter().map(render_phrase));
        lines.push(String::new());
    }

    if !entry.synonym_groups.is_empty() {
        lines.push(bold("Synonyms:", emphasis));
        lines.extend(entry.synonym_groups.iter().map(render_synonym_group));
        lines.push(String::new());
    }

    if !entry.sentences.is_empty() {
        lines.push(bold("Sentences:", emphasis));
        for sentence in &entry.sentences {
            lines.extend(render_sentence(sentence));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
