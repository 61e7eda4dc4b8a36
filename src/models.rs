// 词条数据结构定义：一次查询产生一个 Entry，构造后不再修改。
// 缺失的数据用空字符串/空列表表示，不用 Option。

/// 一个单词的完整词条
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub content: String,
    pub usphone: String,
    pub ukphone: String,
    pub usspeech: String,
    pub ukspeech: String,
    pub translations: Vec<Translation>,
    pub related_words: Vec<RelatedWordGroup>,
    pub phrases: Vec<Phrase>,
    pub synonym_groups: Vec<SynonymGroup>,
    pub sentences: Vec<Sentence>,
}

/// 释义：词性 + 中文翻译
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub part_of_speech: String,
    pub chinese: String,
}

/// 同根词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headword {
    pub content: String,
    pub chinese: String,
}

/// 按词性分组的同根词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedWordGroup {
    pub part_of_speech: String,
    pub headwords: Vec<Headword>,
}

/// 短语
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub content: String,
    pub chinese: String,
}

/// 单个近义词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymItem {
    pub word: String,
}

/// 近义词组：一组近义词共享一个词性和一条中文释义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub part_of_speech: String,
    pub synonyms: Vec<SynonymItem>,
    pub chinese: String,
}

/// 例句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub content: String,
    pub chinese: String,
}
