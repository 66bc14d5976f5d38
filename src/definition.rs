use crate::label::LabelMapping;
use crate::scanner::{scan_definition, Location};
use serde::Serialize;
use std::fmt;

/// 一行 `[^label]: content` 形式的脚注定义
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDefinition<'input> {
    pub label: &'input str,
    /// 冒号及其后空白之后直到行尾的内容
    pub content: &'input str,
    pub location: Location,
}

/// 重新编号后输出的定义行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDefinitionEntry {
    pub number: usize,
    pub content: String,
}

impl fmt::Display for OutputDefinitionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[^{}]: {}", self.number, self.content)
    }
}

/// Stage B：提取所有以 `[^label]:` 开头的行，无论 label 是否被引用
pub fn extract_definitions(text: &str) -> Vec<FootnoteDefinition<'_>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let (label, rest) = scan_definition(line)?;
            Some(FootnoteDefinition {
                label,
                content: rest.trim_start(),
                location: Location::new(idx as u64 + 1, 1),
            })
        })
        .collect()
}

/// Stage C：丢弃未被引用的定义，其余按新编号升序排列。
///
/// 排序是稳定的，同一 label 的多条定义保持文件中的先后顺序。
/// 内容取自原文，其中的引用不改写。
pub fn resolve_definitions(
    definitions: &[FootnoteDefinition<'_>],
    mapping: &LabelMapping,
) -> Vec<OutputDefinitionEntry> {
    let mut entries = definitions
        .iter()
        .filter_map(|definition| {
            mapping
                .get(definition.label)
                .map(|number| OutputDefinitionEntry {
                    number,
                    content: definition.content.to_owned(),
                })
        })
        .collect::<Vec<_>>();
    entries.sort_by_key(|it| it.number);
    entries
}
