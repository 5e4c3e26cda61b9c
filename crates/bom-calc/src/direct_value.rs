//! 直接數值換算（件數基礎）

use bom_core::conversion::apply_loss;
use bom_core::RawMaterialTypeConversion;

/// 直接數值計算器
///
/// 採購單位本身就是件數包裝（例：一箱已知件數的瓶蓋）時，
/// 不經過重量中間步驟，直接以每基礎單位件數換算所需箱數。
pub struct DirectValueCalculator;

impl DirectValueCalculator {
    /// 計算所需基礎單位數
    ///
    /// 每基礎單位件數優先取 `derived_value_per_base`，其次 `pcs_per_base`
    /// （取先出現者，不合併）；兩者皆缺時回 0。
    pub fn calculate(
        conversion: &RawMaterialTypeConversion,
        quantity_required: f64,
        planned_output: f64,
    ) -> f64 {
        let Some(pcs_per_base) = conversion.pieces_per_base() else {
            return 0.0;
        };

        let usable_units = apply_loss(pcs_per_base, conversion.loss_percent);

        if usable_units <= 0.0 {
            return 0.0;
        }

        (quantity_required * planned_output) / usable_units
    }
}
