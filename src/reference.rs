//! 脚注引用的编号与改写。
//!
//! 先收集引用得到 [`LabelMapping`]，再用该映射改写文本中的每个标记。
//! 定义行开头的标记不参与编号，但其 label 已被引用时会被一并改写。

use crate::label::LabelMapping;
use crate::scanner::Scanner;

/// 按从左到右的顺序为所有引用分配编号
pub fn collect_labels(text: &str) -> LabelMapping {
    let mut mapping = LabelMapping::new();
    for marker in Scanner::new(text).filter(|it| !it.is_definition) {
        mapping.assign(marker.label, marker.location);
    }
    mapping
}

/// 把已映射的 `[^label]` 改写为 `[^n]`，未映射的标记原样保留
pub fn rewrite_references(text: &str, mapping: &LabelMapping) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for marker in Scanner::new(text) {
        let Some(number) = mapping.get(marker.label) else {
            continue;
        };
        output.push_str(&text[last..marker.start]);
        output.push_str("[^");
        output.push_str(&number.to_string());
        output.push(']');
        last = marker.end;
    }
    output.push_str(&text[last..]);
    output
}

/// Stage A：返回改写后的文本和编号映射
pub fn renumber_references(text: &str) -> (String, LabelMapping) {
    let mapping = collect_labels(text);
    let rewritten = rewrite_references(text, &mapping);
    (rewritten, mapping)
}
