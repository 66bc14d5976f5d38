use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(typescript_custom_section)]
const TYPESCRIPT_TYPE_CONST: &'static str = r##"
/**
 * 文档中的位置信息
 * Location information in the document
 */
export interface Location{
    /** 行号（从 1 开始）/ Line number (1-based) */
    line: number,
    /** 列号（从 1 开始）/ Column number (1-based) */
    column: number
}

/**
 * 原始 label 与新编号
 * Original label and its new number
 */
export interface LabelEntry{
    label: string,
    /** 从 1 开始 / 1-based */
    number: number,
    /** 第一次被引用的位置 / Where the label was first referenced */
    first_seen: Location
}

/**
 * 未被引用而丢弃的定义
 * A definition dropped because nothing references it
 */
export interface DroppedDefinition{
    label: string,
    location: Location
}

/**
 * 重新编号的附带信息
 * Details of one renumbering run
 */
export interface Report{
    /** 按新编号排列 / Ordered by new number */
    labels: LabelEntry[],
    /** 被引用但没有定义 / Referenced but never defined */
    dangling: LabelEntry[],
    dropped: DroppedDefinition[],
    /** 定义了不止一次的 label / Labels defined more than once */
    duplicates: string[]
}
"##;
