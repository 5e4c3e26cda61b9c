//! 原料類型換算配置

use serde::{Deserialize, Serialize};

use crate::{BomError, ConversionMethod};

/// 損耗率上限（百分比）
///
/// 嚴格低於 100：只要換算值為正，扣損後的可用量必為正。
pub const MAX_LOSS_PERCENT: f64 = 99.0;

/// 對換算值套用損耗率，得出淨可用量
///
/// 損耗率以百分比表示，未填視為 0，計算時上限 99。
pub fn apply_loss(value: f64, loss_percent: Option<f64>) -> f64 {
    let loss = loss_percent.unwrap_or(0.0).min(MAX_LOSS_PERCENT);
    value * (1.0 - loss / 100.0)
}

/// 原料類型換算配置
///
/// 描述如何將一種原料的基礎採購單位（袋、箱、公斤）換算為產出當量。
/// 依 `conversion_method` 僅一組方式專屬欄位有意義，其餘可缺省：
/// - 公式換算：`base_unit_weight` + `weight_per_derived_unit`
/// - 直接數值：`derived_value_per_base` 或 `pcs_per_base`
/// - 產出覆蓋：`output_units_covered`
/// - 手動輸入：無
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterialTypeConversion {
    /// 換算方式
    pub conversion_method: ConversionMethod,

    /// 每基礎單位重量（公式換算用，例：每袋公克數）
    #[serde(default)]
    pub base_unit_weight: Option<f64>,

    /// 每產出單位消耗重量（公式換算用，例：每支瓶胚公克數）
    #[serde(default)]
    pub weight_per_derived_unit: Option<f64>,

    /// 每基礎單位件數（直接數值用，例：每箱件數）
    #[serde(default)]
    pub pcs_per_base: Option<f64>,

    /// 每基礎單位產出當量（直接數值用；與 `pcs_per_base` 同義的
    /// 舊欄位，兩者皆有值時優先採用本欄位）
    #[serde(default)]
    pub derived_value_per_base: Option<f64>,

    /// 每基礎單位可覆蓋的成品數（產出覆蓋用，例：每公斤標籤紙可貼的瓶數）
    #[serde(default)]
    pub output_units_covered: Option<f64>,

    /// 預期損耗率（百分比，0–100，計算時上限 99）
    #[serde(default)]
    pub loss_percent: Option<f64>,

    /// 扣損後的換算值（上游預先算好，僅供顯示文字使用，不參與計算）
    #[serde(default)]
    pub usable_units: Option<f64>,
}

impl RawMaterialTypeConversion {
    /// 創建新的換算配置（所有方式專屬欄位留空）
    pub fn new(conversion_method: ConversionMethod) -> Self {
        Self {
            conversion_method,
            base_unit_weight: None,
            weight_per_derived_unit: None,
            pcs_per_base: None,
            derived_value_per_base: None,
            output_units_covered: None,
            loss_percent: None,
            usable_units: None,
        }
    }

    /// 從舊系統的自由文字方式標籤創建配置
    ///
    /// # 範例
    /// ```
    /// # use bom_core::{ConversionMethod, RawMaterialTypeConversion};
    /// let conversion = RawMaterialTypeConversion::from_legacy_label(Some("Formula-Based"))
    ///     .with_base_unit_weight(25000.0)
    ///     .with_weight_per_derived_unit(21.0);
    /// assert_eq!(conversion.conversion_method, ConversionMethod::FormulaBased);
    /// ```
    pub fn from_legacy_label(raw: Option<&str>) -> Self {
        Self::new(ConversionMethod::from_legacy(raw))
    }

    /// 建構器模式：設置每基礎單位重量
    pub fn with_base_unit_weight(mut self, weight: f64) -> Self {
        self.base_unit_weight = Some(weight);
        self
    }

    /// 建構器模式：設置每產出單位消耗重量
    pub fn with_weight_per_derived_unit(mut self, weight: f64) -> Self {
        self.weight_per_derived_unit = Some(weight);
        self
    }

    /// 建構器模式：設置每基礎單位件數
    pub fn with_pcs_per_base(mut self, pcs: f64) -> Self {
        self.pcs_per_base = Some(pcs);
        self
    }

    /// 建構器模式：設置每基礎單位產出當量
    pub fn with_derived_value_per_base(mut self, value: f64) -> Self {
        self.derived_value_per_base = Some(value);
        self
    }

    /// 建構器模式：設置每基礎單位覆蓋成品數
    pub fn with_output_units_covered(mut self, units: f64) -> Self {
        self.output_units_covered = Some(units);
        self
    }

    /// 建構器模式：設置損耗率
    pub fn with_loss_percent(mut self, percent: f64) -> Self {
        self.loss_percent = Some(percent);
        self
    }

    /// 建構器模式：設置顯示用的扣損換算值
    pub fn with_usable_units(mut self, units: f64) -> Self {
        self.usable_units = Some(units);
        self
    }

    /// 直接數值方式的每基礎單位件數
    ///
    /// 優先取 `derived_value_per_base`，其次 `pcs_per_base`（取先出現者，
    /// 不合併）。兩欄位為同一數量的新舊兩種命名，資料理應一致。
    pub fn pieces_per_base(&self) -> Option<f64> {
        self.derived_value_per_base.or(self.pcs_per_base)
    }

    /// 資料輸入邊界的配置檢核
    ///
    /// 計算路徑不會報錯（缺欄位一律回建議量 0）；此檢核供表單、
    /// 匯入端在存檔前擋下明顯不完整的配置。
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(loss) = self.loss_percent {
            if !(0.0..100.0).contains(&loss) {
                return Err(BomError::InvalidLossPercent(loss));
            }
        }

        match self.conversion_method {
            ConversionMethod::FormulaBased => {
                if self.base_unit_weight.is_none() || self.weight_per_derived_unit.is_none() {
                    return Err(BomError::IncompleteConversionConfig(
                        "公式換算需要 base_unit_weight 與 weight_per_derived_unit".to_string(),
                    ));
                }
            }
            ConversionMethod::DirectValue => {
                if self.pieces_per_base().is_none() {
                    return Err(BomError::IncompleteConversionConfig(
                        "直接數值需要 derived_value_per_base 或 pcs_per_base".to_string(),
                    ));
                }
            }
            ConversionMethod::OutputCoverage => {
                if self.output_units_covered.is_none() {
                    return Err(BomError::IncompleteConversionConfig(
                        "產出覆蓋需要 output_units_covered".to_string(),
                    ));
                }
            }
            ConversionMethod::Manual => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_loss() {
        assert_eq!(apply_loss(1000.0, None), 1000.0);
        assert_eq!(apply_loss(1000.0, Some(0.0)), 1000.0);
        assert_eq!(apply_loss(1000.0, Some(5.0)), 950.0);

        // 100% 以上的損耗率上限 99，可用量仍為正
        let capped = apply_loss(1000.0, Some(100.0));
        assert!(capped > 0.0);
        assert_eq!(capped, apply_loss(1000.0, Some(250.0)));
    }

    #[test]
    fn test_builder() {
        let conversion = RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
            .with_base_unit_weight(25000.0)
            .with_weight_per_derived_unit(21.0)
            .with_loss_percent(5.0)
            .with_usable_units(1130.95);

        assert_eq!(conversion.conversion_method, ConversionMethod::FormulaBased);
        assert_eq!(conversion.base_unit_weight, Some(25000.0));
        assert_eq!(conversion.weight_per_derived_unit, Some(21.0));
        assert_eq!(conversion.loss_percent, Some(5.0));
        assert_eq!(conversion.usable_units, Some(1130.95));
        assert!(conversion.pcs_per_base.is_none());
    }

    #[test]
    fn test_pieces_per_base_precedence() {
        // 新舊欄位皆有值時，derived_value_per_base 優先
        let both = RawMaterialTypeConversion::new(ConversionMethod::DirectValue)
            .with_derived_value_per_base(6930.0)
            .with_pcs_per_base(144.0);
        assert_eq!(both.pieces_per_base(), Some(6930.0));

        let only_pcs = RawMaterialTypeConversion::new(ConversionMethod::DirectValue)
            .with_pcs_per_base(144.0);
        assert_eq!(only_pcs.pieces_per_base(), Some(144.0));

        let neither = RawMaterialTypeConversion::new(ConversionMethod::DirectValue);
        assert_eq!(neither.pieces_per_base(), None);
    }

    #[test]
    fn test_validate_field_groups() {
        let incomplete = RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
            .with_base_unit_weight(25000.0);
        assert!(incomplete.validate().is_err());

        let complete = incomplete.with_weight_per_derived_unit(21.0);
        assert!(complete.validate().is_ok());

        // 手動輸入不需要任何欄位
        let manual = RawMaterialTypeConversion::new(ConversionMethod::Manual);
        assert!(manual.validate().is_ok());
    }

    #[test]
    fn test_validate_loss_percent() {
        let base = RawMaterialTypeConversion::new(ConversionMethod::OutputCoverage)
            .with_output_units_covered(2500.0);

        assert!(base.clone().with_loss_percent(0.0).validate().is_ok());
        assert!(base.clone().with_loss_percent(99.5).validate().is_ok());
        assert!(base.clone().with_loss_percent(100.0).validate().is_err());
        assert!(base.clone().with_loss_percent(-5.0).validate().is_err());
        assert!(base.with_loss_percent(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_deserialize_orm_record() {
        // ORM 層送來的持久化配置（kebab-case 方式標籤）
        let json = r#"{
            "conversion_method": "formula-based",
            "base_unit_weight": 25000.0,
            "weight_per_derived_unit": 21.0,
            "pcs_per_base": null,
            "derived_value_per_base": null,
            "output_units_covered": null,
            "loss_percent": 5.0,
            "usable_units": 1130.95
        }"#;

        let conversion: RawMaterialTypeConversion = serde_json::from_str(json).unwrap();
        assert_eq!(conversion.conversion_method, ConversionMethod::FormulaBased);
        assert_eq!(conversion.base_unit_weight, Some(25000.0));
        assert!(conversion.validate().is_ok());
    }
}
