use crate::assemble::assemble;
use crate::definition::{extract_definitions, resolve_definitions};
use crate::label::LabelEntry;
use crate::reference::renumber_references;
use crate::scanner::Location;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DroppedDefinition {
    pub label: String,
    pub location: Location,
}

/// 一次重新编号的附带信息
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberReport {
    /// 按新编号排列的映射
    pub labels: Vec<LabelEntry>,
    /// 被引用但没有定义的 label
    pub dangling: Vec<LabelEntry>,
    /// 没有被引用、因此被丢弃的定义
    pub dropped: Vec<DroppedDefinition>,
    /// 定义了不止一次的 label，每个只列一次
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renumbered {
    pub text: String,
    pub report: RenumberReport,
}

pub struct FootnoteRenumberer<'input> {
    text: &'input str,
}

impl<'input> FootnoteRenumberer<'input> {
    pub fn new(text: &'input str) -> Self {
        Self { text }
    }
    pub fn run(&self) -> Renumbered {
        let (rewritten, mapping) = renumber_references(self.text);
        let definitions = extract_definitions(self.text);
        let entries = resolve_definitions(&definitions, &mapping);
        tracing::debug!(
            labels = mapping.len(),
            definitions = definitions.len(),
            kept = entries.len(),
            "renumbered footnotes"
        );
        let text = assemble(&rewritten, &entries);

        let defined = definitions.iter().map(|it| it.label).collect::<HashSet<_>>();
        let dangling = mapping
            .entries()
            .iter()
            .filter(|it| !defined.contains(it.label.as_str()))
            .cloned()
            .collect();
        let dropped = definitions
            .iter()
            .filter(|it| !mapping.contains(it.label))
            .map(|it| DroppedDefinition {
                label: it.label.to_string(),
                location: it.location,
            })
            .collect();
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for definition in definitions.iter() {
            if !seen.insert(definition.label)
                && !duplicates.iter().any(|it: &String| it == definition.label)
            {
                duplicates.push(definition.label.to_string());
            }
        }
        Renumbered {
            text,
            report: RenumberReport {
                labels: mapping.entries().to_vec(),
                dangling,
                dropped,
                duplicates,
            },
        }
    }
}

/// 重新编号脚注引用，并按新编号重建文末的定义块
pub fn renumber(text: &str) -> String {
    FootnoteRenumberer::new(text).run().text
}
