//! 發料建議主計算器

use std::collections::HashMap;

use bom_core::{BomLineItem, CalculationInput, ConversionMethod};

use crate::coverage::CoverageCalculator;
use crate::direct_value::DirectValueCalculator;
use crate::formula::FormulaCalculator;
use crate::CalculationResult;

/// 顯示用數值：缺省時回字面 "N/A"
fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

/// 單筆建議量計算
///
/// 永不失敗：資料不完整、方式無法識別、數值退化等情況一律回
/// 建議量 0 加說明文字，是否擋單或改手動填量由呼叫端決定。
pub fn calculate_suggested_quantity(input: &CalculationInput) -> CalculationResult {
    let conversion = &input.type_conversion;
    let basis = conversion.conversion_method;

    let (raw_quantity, mut details) = match basis {
        ConversionMethod::FormulaBased => (
            FormulaCalculator::calculate(
                conversion,
                input.quantity_required,
                input.planned_output,
            ),
            format!(
                "Formula-based: {} usable pcs per base unit",
                display_value(conversion.usable_units)
            ),
        ),
        ConversionMethod::DirectValue => (
            DirectValueCalculator::calculate(
                conversion,
                input.quantity_required,
                input.planned_output,
            ),
            format!(
                "Direct value: {} pcs per base unit",
                display_value(conversion.pieces_per_base())
            ),
        ),
        ConversionMethod::OutputCoverage => (
            CoverageCalculator::calculate(conversion, input.planned_output),
            format!(
                "Output coverage: 1 base unit covers {} output units",
                display_value(conversion.output_units_covered)
            ),
        ),
        ConversionMethod::Manual => {
            return CalculationResult::manual_entry();
        }
    };

    // 消毒：除以零或極端輸入造成的非有限值一律歸零，並在說明中標注
    let suggested_quantity = if raw_quantity.is_finite() {
        raw_quantity.max(0.0)
    } else {
        details.push_str(" (Invalid: Division by zero or loss >= 100%)");
        0.0
    };

    // 發料量一律無條件進位：少發會停線，多發只是損耗
    let rounded_quantity = suggested_quantity.ceil();

    tracing::debug!(
        "建議量計算完成：方式 {}，建議 {:.4}，發料 {}",
        basis,
        suggested_quantity,
        rounded_quantity
    );

    CalculationResult {
        suggested_quantity,
        calculation_basis: basis,
        calculation_details: details,
        rounded_quantity,
    }
}

/// 批次建議量計算
///
/// 對 BOM 明細逐筆獨立計算（無跨行彙總），回傳原料ID → 結果的映射。
/// 重複的原料ID 依輸入順序以後者覆蓋前者。
pub fn calculate_bom_suggestions(
    planned_output: f64,
    bom_items: &[BomLineItem],
) -> HashMap<String, CalculationResult> {
    tracing::debug!(
        "開始批次建議量計算：計劃產量 {}，BOM 明細 {} 筆",
        planned_output,
        bom_items.len()
    );

    let mut results = HashMap::new();

    for item in bom_items {
        let input = CalculationInput::new(
            planned_output,
            item.quantity_required,
            item.type_conversion.clone(),
        );

        let result = calculate_suggested_quantity(&input);

        tracing::debug!(
            "原料 {}: 建議 {:.4}，發料 {}",
            item.raw_material_id,
            result.suggested_quantity,
            result.rounded_quantity
        );

        results.insert(item.raw_material_id.clone(), result);
    }

    results
}
