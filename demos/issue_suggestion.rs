//! 整批發料建議示例

use bom::{calculate_bom_suggestions, BomLineItem, ConversionMethod, RawMaterialTypeConversion};

fn main() {
    // 開啟 debug 日誌可觀察逐筆計算過程
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== 整批發料建議示例 ===\n");

    let planned_output = 12000.0;

    let items = vec![
        BomLineItem::new(
            "RM-PET-RESIN".to_string(),
            1.0,
            RawMaterialTypeConversion::new(ConversionMethod::FormulaBased)
                .with_base_unit_weight(25000.0)
                .with_weight_per_derived_unit(21.0)
                .with_loss_percent(5.0)
                .with_usable_units(1130.95),
        ),
        BomLineItem::new(
            "RM-CAP-28MM".to_string(),
            1.0,
            RawMaterialTypeConversion::new(ConversionMethod::DirectValue)
                .with_derived_value_per_base(6930.0),
        ),
        BomLineItem::new(
            "RM-LABEL-STOCK".to_string(),
            1.0,
            RawMaterialTypeConversion::new(ConversionMethod::OutputCoverage)
                .with_output_units_covered(2500.0),
        ),
        BomLineItem::new(
            "RM-TAPE".to_string(),
            1.0,
            RawMaterialTypeConversion::new(ConversionMethod::Manual),
        ),
    ];

    println!("計劃產量: {} 支\n", planned_output);

    let results = calculate_bom_suggestions(planned_output, &items);

    println!("發料建議:");
    for item in &items {
        let result = &results[&item.raw_material_id];
        println!(
            "  - {:<16} 建議 {:>8.3}  發料 {:>4}  （{}）",
            item.raw_material_id,
            result.suggested_quantity,
            result.rounded_quantity,
            result.calculation_details
        );
    }
}
