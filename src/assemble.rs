use crate::definition::OutputDefinitionEntry;
use crate::scanner::scan_definition;

/// 从文档末尾向前扫描，去掉末尾连续的定义行（其间可以夹着空行，行首可以缩进）以及尾部空白。
pub fn strip_trailing_definitions(text: &str) -> &str {
    let mut body = text.trim_end();
    loop {
        let line_start = body.rfind('\n').map_or(0, |idx| idx + 1);
        if scan_definition(body[line_start..].trim_start()).is_none() {
            return body;
        }
        body = body[..line_start].trim_end();
    }
}

/// Stage D：去掉末尾的定义块，再以一个空行分隔追加新的定义块
pub fn assemble(text: &str, entries: &[OutputDefinitionEntry]) -> String {
    let body = strip_trailing_definitions(text);
    let mut output = String::with_capacity(text.len());
    output.push_str(body);
    for (idx, entry) in entries.iter().enumerate() {
        output.push_str(if idx == 0 { "\n\n" } else { "\n" });
        output.push_str(&entry.to_string());
    }
    output
}
