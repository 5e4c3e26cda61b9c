//! 換算方式模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單位換算方式
///
/// 決定如何將原料的基礎採購單位（袋、箱、公斤）換算為產出當量。
/// 每筆換算配置依此選定一組方式專屬欄位，其餘欄位可缺省。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMethod {
    /// 公式換算（重量基礎：每基礎單位重量 ÷ 每產出單位消耗重量）
    FormulaBased,
    /// 直接數值（每基礎單位件數）
    DirectValue,
    /// 產出覆蓋（每基礎單位可覆蓋的成品數）
    OutputCoverage,
    /// 手動輸入（不自動計算）
    Manual,
}

impl ConversionMethod {
    /// 正規化舊系統的自由文字換算方式標籤
    ///
    /// 換算方式欄位可能來自尚未遷移完成的上游資料，大小寫與拼法不一。
    /// 依序做子字串比對；空值或無法識別一律降級為手動輸入，
    /// 寧可要求人工填量，不做錯誤的自動計算。
    ///
    /// 僅供舊資料匯入使用；新資料請直接以本枚舉型別輸入，
    /// 或走嚴格的 [`FromStr`] 解析。
    pub fn from_legacy(raw: Option<&str>) -> Self {
        let value = match raw {
            Some(s) => s.trim().to_lowercase(),
            None => return Self::Manual,
        };

        if value.is_empty() {
            Self::Manual
        } else if value.contains("formula") {
            Self::FormulaBased
        } else if value.contains("direct") {
            Self::DirectValue
        } else if value.contains("output") || value.contains("coverage") {
            Self::OutputCoverage
        } else {
            // 含 "manual" 或完全無法識別，皆視為手動
            Self::Manual
        }
    }

    /// 標準標籤（kebab-case，與序列化表示一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormulaBased => "formula-based",
            Self::DirectValue => "direct-value",
            Self::OutputCoverage => "output-coverage",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMethod {
    type Err = crate::BomError;

    /// 嚴格解析標準標籤，僅接受四個 kebab-case 值
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formula-based" => Ok(Self::FormulaBased),
            "direct-value" => Ok(Self::DirectValue),
            "output-coverage" => Ok(Self::OutputCoverage),
            "manual" => Ok(Self::Manual),
            other => Err(crate::BomError::UnknownConversionMethod(other.to_string())),
        }
    }
}
