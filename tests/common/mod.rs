/// 文末定义块之前的正文
pub fn body(text: &str) -> &str {
    text.split("\n\n[^").next().unwrap_or_default()
}

/// 正文中按出现顺序排列的 `[^label]` 的 label
pub fn reference_labels(body: &str) -> Vec<&str> {
    body.match_indices("[^")
        .filter_map(|(idx, _)| {
            let rest = &body[idx + 2..];
            rest.find(']').map(|end| &rest[..end])
        })
        .collect()
}
