// ==========================================
// FBA货件装箱清单生成系统 - 产品资料装载
// ==========================================
// 输入: 产品资料工作簿, 两张固定表名:
//   品号汇总 → ProductCatalog
//   装箱清单 → PackingTable（品号与客户型号各登记一次）
// 红线: 缺表/缺列即致命错误, 在货件解析前中止任务
// ==========================================

use crate::domain::reference::{PackingSpec, PackingTable, ProductCatalog, ReferenceProduct};
use crate::importer::error::ImportResult;
use crate::importer::sheet_reader::{get_string, read_sheet, require_columns};
use std::path::Path;
use tracing::{debug, warn};

/// 品号汇总表名
pub const PRODUCT_SUMMARY_SHEET: &str = "品号汇总";

/// 装箱清单表名
pub const PACKING_LIST_SHEET: &str = "装箱清单";

const PRODUCT_SUMMARY_COLUMNS: [&str; 5] = ["乌托邦新品号", "客户型号", "颜色", "描述", "品牌"];
const PACKING_LIST_COLUMNS: [&str; 4] = ["乌托邦新品号", "客户型号", "普通箱箱数(PCS)", "危险品"];

// ==========================================
// ReferenceLoader - 产品资料装载器
// ==========================================
pub struct ReferenceLoader;

impl ReferenceLoader {
    /// 装载产品资料工作簿
    ///
    /// # 返回
    /// - (ProductCatalog, PackingTable)
    pub fn load(reference_path: &Path) -> ImportResult<(ProductCatalog, PackingTable)> {
        let catalog = Self::load_product_summary(reference_path)?;
        let packing = Self::load_packing_list(reference_path)?;

        debug!(
            products = catalog.len(),
            packing_keys = packing.len(),
            "产品资料装载完成"
        );

        Ok((catalog, packing))
    }

    /// 装载品号汇总表
    fn load_product_summary(reference_path: &Path) -> ImportResult<ProductCatalog> {
        let sheet = read_sheet(reference_path, Some(PRODUCT_SUMMARY_SHEET))?;
        require_columns(&sheet, PRODUCT_SUMMARY_SHEET, &PRODUCT_SUMMARY_COLUMNS)?;

        let mut catalog = ProductCatalog::new();
        for (row_number, row) in &sheet.rows {
            // 品号为空的行不可检索, 跳过
            let Some(internal_code) = get_string(row, "乌托邦新品号") else {
                warn!(row = row_number, "品号汇总存在空品号行, 已跳过");
                continue;
            };

            catalog.push(ReferenceProduct {
                internal_code,
                customer_model: get_string(row, "客户型号").unwrap_or_default(),
                color: get_string(row, "颜色").unwrap_or_default(),
                description: get_string(row, "描述").unwrap_or_default(),
                brand: get_string(row, "品牌").unwrap_or_default(),
            });
        }

        Ok(catalog)
    }

    /// 装载装箱清单表
    ///
    /// 同一物理行按 乌托邦新品号 与 客户型号 各登记一次,
    /// 两个键互为独立查找路径
    fn load_packing_list(reference_path: &Path) -> ImportResult<PackingTable> {
        let sheet = read_sheet(reference_path, Some(PACKING_LIST_SHEET))?;
        require_columns(&sheet, PACKING_LIST_SHEET, &PACKING_LIST_COLUMNS)?;

        let mut table = PackingTable::new();
        for (row_number, row) in &sheet.rows {
            let spec = PackingSpec {
                units_per_carton: Self::parse_units(row.get("普通箱箱数(PCS)"), *row_number),
                hazardous: row.get("危险品").map(|v| v.trim()) == Some("危险品"),
            };

            if let Some(code) = get_string(row, "乌托邦新品号") {
                table.insert(code, spec);
            }
            if let Some(model) = get_string(row, "客户型号") {
                table.insert(model, spec);
            }
        }

        Ok(table)
    }

    /// 解析普通装箱数; 空白或非正整数回落到缺省值
    fn parse_units(value: Option<&String>, row_number: usize) -> u32 {
        let Some(raw) = value.map(|v| v.trim()).filter(|v| !v.is_empty()) else {
            return PackingSpec::default().units_per_carton;
        };

        // Excel 数值单元格可能带小数点（如 "40.0"）
        match raw.parse::<f64>() {
            Ok(n) if n >= 1.0 => n as u32,
            _ => {
                warn!(row = row_number, value = raw, "普通箱箱数无效, 使用缺省值");
                PackingSpec::default().units_per_carton
            }
        }
    }
}
