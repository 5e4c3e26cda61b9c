//! 計算請求模型

use serde::{Deserialize, Serialize};

use crate::RawMaterialTypeConversion;

/// 單筆建議量計算請求
///
/// 由呼叫端（發料表單、生產錄入流程）逐次組裝，引擎不持有、不快取。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 計劃產量（目標成品數）
    pub planned_output: f64,

    /// BOM 單位用量（每一單位成品所需的此原料數量，通常為 1）
    pub quantity_required: f64,

    /// 原料類型換算配置
    pub type_conversion: RawMaterialTypeConversion,
}

impl CalculationInput {
    /// 創建新的計算請求
    pub fn new(
        planned_output: f64,
        quantity_required: f64,
        type_conversion: RawMaterialTypeConversion,
    ) -> Self {
        Self {
            planned_output,
            quantity_required,
            type_conversion,
        }
    }
}

/// BOM 明細行（批次計算輸入）
///
/// 由呼叫端自 BOM 查詢結果組出，`raw_material_id` 為批次結果映射的鍵。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLineItem {
    /// 原料ID（不透明識別字串）
    pub raw_material_id: String,

    /// BOM 單位用量
    pub quantity_required: f64,

    /// 原料類型換算配置
    pub type_conversion: RawMaterialTypeConversion,
}

impl BomLineItem {
    /// 創建新的 BOM 明細行
    pub fn new(
        raw_material_id: String,
        quantity_required: f64,
        type_conversion: RawMaterialTypeConversion,
    ) -> Self {
        Self {
            raw_material_id,
            quantity_required,
            type_conversion,
        }
    }
}
