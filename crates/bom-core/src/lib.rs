//! # BOM Core
//!
//! 發料建議引擎的核心資料模型與類型定義

pub mod conversion;
pub mod input;
pub mod method;

// Re-export 主要類型
pub use conversion::RawMaterialTypeConversion;
pub use input::{BomLineItem, CalculationInput};
pub use method::ConversionMethod;

/// BOM 引擎錯誤類型
///
/// 僅用於資料輸入邊界（嚴格解析、配置檢核）；
/// 計算路徑本身不回錯誤，缺資料一律降級為建議量 0。
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("無法識別的換算方式: {0}")]
    UnknownConversionMethod(String),

    #[error("損耗率超出範圍（須在 0 至 100 之間，不含 100）: {0}")]
    InvalidLossPercent(f64),

    #[error("換算配置不完整: {0}")]
    IncompleteConversionConfig(String),
}

pub type Result<T> = std::result::Result<T, BomError>;
