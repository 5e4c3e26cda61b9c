//! # BOM Calculation Engine
//!
//! 發料建議量計算引擎

pub mod calculator;
pub mod coverage;
pub mod direct_value;
pub mod formula;

// Re-export 主要入口
pub use calculator::{calculate_bom_suggestions, calculate_suggested_quantity};

use bom_core::ConversionMethod;
use serde::{Deserialize, Serialize};

/// 建議量計算結果
///
/// 每次呼叫都回傳完整結果，不落庫、不快取；是否採用由呼叫端決定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 建議發料量（原始計算值，保證非負且有限）
    pub suggested_quantity: f64,

    /// 實際採用的換算方式
    pub calculation_basis: ConversionMethod,

    /// 計算說明（含採用的關鍵換算參數，僅供顯示）
    pub calculation_details: String,

    /// 無條件進位後的發料量（操作人員實際發料的數字）
    pub rounded_quantity: f64,
}

impl CalculationResult {
    /// 手動輸入結果：建議量 0，由操作人員自行填量
    pub fn manual_entry() -> Self {
        Self {
            suggested_quantity: 0.0,
            calculation_basis: ConversionMethod::Manual,
            calculation_details: "Manual entry required".to_string(),
            rounded_quantity: 0.0,
        }
    }
}
