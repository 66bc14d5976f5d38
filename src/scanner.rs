use serde::Serialize;
use std::fmt;

#[derive(Eq, PartialEq, Clone, Copy, Serialize)]
pub struct Location {
    /// Line number, starting from 1
    pub line: u64,
    /// Line column, starting from 1
    pub column: u64,
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}
impl Location {
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }
}

/// 一个 `[^label]` 标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'input> {
    pub label: &'input str,
    /// `[` 的字节偏移
    pub start: usize,
    /// `]` 之后的字节偏移
    pub end: usize,
    pub location: Location,
    /// 位于行首且紧跟 `:` 的标记是脚注定义，而不是引用
    pub is_definition: bool,
}

/// 字节扫描器，直接在输入字节切片上查找脚注标记。
///
/// `[`、`^`、`]` 都是 ASCII，所以标记的边界总是落在 UTF-8 字符边界上。
pub struct Scanner<'input> {
    /// 原始输入（字节切片）
    source: &'input [u8],
    /// 原始输入字符串引用（用于 UTF-8 安全切片）
    source_str: &'input str,
    /// 当前扫描位置（字节偏移）
    pos: usize,
    /// 当前行号（从 1 开始）
    line: u64,
    /// 当前列号（从 1 开始，按字符计数）
    col: u64,
}

impl<'input> Scanner<'input> {
    pub fn new(source: &'input str) -> Self {
        Self {
            source: source.as_bytes(),
            source_str: source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// 查看相对当前位置偏移 offset 处的字节
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    /// 前进 n 个字节（更新行列信息）
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        while self.pos < end {
            let b = self.source[self.pos];
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if !is_utf8_continuation(b) {
                self.col += 1;
            }
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.pos)
    }

    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.col)
    }

    /// 获取从 start 到 end 的字符串切片，越界或不在字符边界时返回空字符串
    pub fn slice(&self, start: usize, end: usize) -> &'input str {
        self.source_str.get(start..end).unwrap_or("")
    }

    /// 指定位置是否为行首
    #[inline]
    pub fn is_line_start(&self, pos: usize) -> bool {
        pos == 0 || self.source.get(pos - 1) == Some(&b'\n')
    }

    /// 查找下一个 `[^label]` 标记并越过它。
    ///
    /// label 是 `[^` 之后直到第一个 `]` 的全部内容，至少一个字节，可以跨行。
    /// `[^]` 不构成标记，扫描从其后一个字节继续。
    pub fn next_marker(&mut self) -> Option<Marker<'input>> {
        loop {
            let offset = memchr::memchr(b'[', &self.source[self.pos..])?;
            self.advance_by(offset);
            let start = self.pos;
            let location = self.location();
            if self.peek_at(1) != Some(b'^') {
                self.advance_by(1);
                continue;
            }
            let label_start = start + 2;
            let close = match memchr::memchr(b']', &self.source[label_start..]) {
                Some(offset) => label_start + offset,
                None => {
                    // 之后再也没有 `]`，不可能再出现标记
                    self.advance_by(self.remaining());
                    return None;
                }
            };
            if close == label_start {
                self.advance_by(1);
                continue;
            }
            let is_definition = self.is_line_start(start)
                && self.source.get(close + 1) == Some(&b':')
                && memchr::memchr(b'\n', &self.source[label_start..close]).is_none();
            self.advance_by(close + 1 - start);
            return Some(Marker {
                label: self.slice(label_start, close),
                start,
                end: close + 1,
                location,
                is_definition,
            });
        }
    }
}

impl<'input> Iterator for Scanner<'input> {
    type Item = Marker<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_marker()
    }
}

/// 按定义行的形状拆分单行：`[^label]:` 开头时返回 `(label, 冒号之后的剩余部分)`。
///
/// `line` 不应包含换行符。
pub fn scan_definition(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("[^")?;
    let close = memchr::memchr(b']', rest.as_bytes())?;
    if close == 0 {
        return None;
    }
    let (label, tail) = rest.split_at(close);
    tail.strip_prefix("]:").map(|after| (label, after))
}

/// 判断字节是否为 UTF-8 continuation byte (10xxxxxx)
#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}
