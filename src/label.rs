use crate::scanner::Location;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    /// 原始 label
    pub label: String,
    /// 新编号，从 1 开始
    pub number: usize,
    /// 第一次被引用的位置
    pub first_seen: Location,
}

/// 原始 label 到新编号的映射。
///
/// 编号按第一次出现的顺序从 1 开始连续分配，同一个 label 只分配一次。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    index: HashMap<String, usize>, // label, position in entries
    entries: Vec<LabelEntry>,
}

impl LabelMapping {
    pub fn new() -> Self {
        Self::default()
    }
    /// 返回 label 已有的编号，没有则分配下一个编号
    pub fn assign(&mut self, label: &str, location: Location) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return self.entries[idx].number;
        }
        let number = self.entries.len() + 1;
        tracing::trace!(label, number, %location, "assigned footnote number");
        self.index.insert(label.to_owned(), self.entries.len());
        self.entries.push(LabelEntry {
            label: label.to_owned(),
            number,
            first_seen: location,
        });
        number
    }
    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&idx| self.entries[idx].number)
    }
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// 按编号（即第一次出现的顺序）排列
    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }
}
