mod types;

use footnote_sort::FootnoteRenumberer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "Report")]
    pub type Report;
}

/// 重新编号脚注并重建文末的定义块
#[wasm_bindgen]
pub fn renumber(text: &str) -> String {
    footnote_sort::renumber(text)
}

#[wasm_bindgen(skip_typescript)]
pub struct Renumbered {
    text: String,
    report: footnote_sort::RenumberReport,
}

#[wasm_bindgen]
impl Renumbered {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
    #[wasm_bindgen(getter)]
    pub fn report(&self) -> Result<Report, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.report)?.unchecked_into::<Report>())
    }
}

/// 重新编号并返回结果和报告
#[wasm_bindgen]
pub fn analyze(text: &str) -> Renumbered {
    let footnote_sort::Renumbered { text, report } = FootnoteRenumberer::new(text).run();
    Renumbered { text, report }
}
