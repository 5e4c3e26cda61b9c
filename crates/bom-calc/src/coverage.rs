//! 產出覆蓋換算

use bom_core::conversion::apply_loss;
use bom_core::RawMaterialTypeConversion;

/// 產出覆蓋計算器
///
/// 換算率直接以成品數為分母（例：每公斤標籤紙可貼 2500 支瓶子），
/// 已表達整批關係，因此刻意不乘 BOM 單位用量。
pub struct CoverageCalculator;

impl CoverageCalculator {
    /// 計算所需基礎單位數
    ///
    /// `output_units_covered` 缺省時回 0。
    pub fn calculate(conversion: &RawMaterialTypeConversion, planned_output: f64) -> f64 {
        let Some(output_units_covered) = conversion.output_units_covered else {
            return 0.0;
        };

        let effective_coverage = apply_loss(output_units_covered, conversion.loss_percent);

        if effective_coverage <= 0.0 {
            return 0.0;
        }

        planned_output / effective_coverage
    }
}
