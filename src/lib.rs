//! # BOM 發料建議引擎
//!
//! 將計劃產量換算為原料建議發料量的純函數計算引擎：
//! 依原料類型配置選擇公式換算、直接數值、產出覆蓋或手動輸入，
//! 無狀態、無 I/O，任意並發呼叫皆安全。

pub use bom_calc::{calculate_bom_suggestions, calculate_suggested_quantity, CalculationResult};
pub use bom_core::{
    BomError, BomLineItem, CalculationInput, ConversionMethod, RawMaterialTypeConversion,
};
