//! 公式換算（重量基礎）

use bom_core::conversion::apply_loss;
use bom_core::RawMaterialTypeConversion;

/// 公式換算計算器
///
/// 將重量基礎的採購單位（例：25 公斤一袋的原料粒）換算為所需袋數：
/// 先以每袋重量除以每產出單位消耗重量得出每袋可產件數，扣損後
/// 作為除數換算需求量。
pub struct FormulaCalculator;

impl FormulaCalculator {
    /// 計算所需基礎單位數
    ///
    /// `base_unit_weight` 或 `weight_per_derived_unit` 缺省或為 0 時回 0，
    /// 表示「無法建議」（資料不完整的信號），不是錯誤。
    /// 函數內不做任何進位，進位統一由調度端處理。
    pub fn calculate(
        conversion: &RawMaterialTypeConversion,
        quantity_required: f64,
        planned_output: f64,
    ) -> f64 {
        let (Some(base_unit_weight), Some(weight_per_derived_unit)) = (
            conversion.base_unit_weight.filter(|w| *w != 0.0),
            conversion.weight_per_derived_unit.filter(|w| *w != 0.0),
        ) else {
            return 0.0;
        };

        // 每基礎單位可產件數，扣損後為淨可用件數
        let pieces_per_base = base_unit_weight / weight_per_derived_unit;
        let usable_units = apply_loss(pieces_per_base, conversion.loss_percent);

        if usable_units <= 0.0 {
            return 0.0;
        }

        (quantity_required * planned_output) / usable_units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_core::ConversionMethod;

    fn preform_resin() -> RawMaterialTypeConversion {
        // 25 公斤（25000 公克）一袋，每支瓶胚 21 公克
        RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
            .with_base_unit_weight(25000.0)
            .with_weight_per_derived_unit(21.0)
    }

    #[test]
    fn test_formula_with_loss() {
        let conversion = preform_resin().with_loss_percent(5.0);

        let result = FormulaCalculator::calculate(&conversion, 1.0, 12000.0);

        // 每袋 25000/21 ≈ 1190.48 支，扣損 5% 後 ≈ 1130.95 支
        let expected = 12000.0 / ((25000.0 / 21.0) * (1.0 - 5.0 / 100.0));
        assert_eq!(result, expected);
        assert!((result - 10.61).abs() < 0.01);
    }

    #[test]
    fn test_formula_without_loss() {
        let result = FormulaCalculator::calculate(&preform_resin(), 1.0, 12000.0);

        // 無損耗時等價於 qty × output × 單耗 ÷ 袋重
        assert_eq!(result, (1.0 * 12000.0) / (25000.0 / 21.0));
        assert!((result - 12000.0 * 21.0 / 25000.0).abs() < 1e-9);
    }

    #[test]
    fn test_formula_missing_fields() {
        let no_base = RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
            .with_weight_per_derived_unit(21.0);
        assert_eq!(FormulaCalculator::calculate(&no_base, 1.0, 12000.0), 0.0);

        let no_unit_weight = RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
            .with_base_unit_weight(25000.0);
        assert_eq!(
            FormulaCalculator::calculate(&no_unit_weight, 1.0, 12000.0),
            0.0
        );
    }

    #[test]
    fn test_formula_zero_weights_treated_as_missing() {
        let zero_unit_weight = preform_resin().with_weight_per_derived_unit(0.0);
        assert_eq!(
            FormulaCalculator::calculate(&zero_unit_weight, 1.0, 12000.0),
            0.0
        );

        let zero_base = preform_resin().with_base_unit_weight(0.0);
        assert_eq!(FormulaCalculator::calculate(&zero_base, 1.0, 12000.0), 0.0);
    }

    #[test]
    fn test_formula_extreme_loss_capped() {
        // 損耗率 100 以上內部上限 99，結果仍為有限正值
        let conversion = preform_resin().with_loss_percent(150.0);
        let result = FormulaCalculator::calculate(&conversion, 1.0, 12000.0);

        assert!(result.is_finite());
        assert!(result > 0.0);
        assert_eq!(result, 12000.0 / ((25000.0 / 21.0) * (1.0 - 99.0 / 100.0)));
    }
}
