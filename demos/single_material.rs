//! 單筆原料建議量計算示例

use bom::{calculate_suggested_quantity, CalculationInput, RawMaterialTypeConversion};

fn main() {
    println!("=== 單筆建議量計算示例 ===\n");

    // 舊系統標籤先正規化，再補齊公式換算欄位
    let conversion = RawMaterialTypeConversion::from_legacy_label(Some("Formula-Based"))
        .with_base_unit_weight(25000.0)
        .with_weight_per_derived_unit(21.0)
        .with_loss_percent(5.0)
        .with_usable_units(1130.95);

    let input = CalculationInput::new(12000.0, 1.0, conversion);
    let result = calculate_suggested_quantity(&input);

    println!("換算方式: {}", result.calculation_basis);
    println!("建議量:   {:.4}", result.suggested_quantity);
    println!("發料量:   {}", result.rounded_quantity);
    println!("說明:     {}", result.calculation_details);
}
