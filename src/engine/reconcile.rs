// ==========================================
// FBA货件装箱清单生成系统 - 对账引擎
// ==========================================
// 职责: 货件行 × 品号汇总 × 装箱清单 → 清单行
// 红线: 品号未命中是静默丢弃, 不是错误;
//       装箱未命中回落缺省规格
// ==========================================

use crate::domain::manifest::ManifestRow;
use crate::domain::reference::{PackingSpec, PackingTable, ProductCatalog};
use crate::domain::shipment::{ShipmentLayout, ShipmentRecord};
use crate::engine::brand::infer_brand;
use tracing::debug;

/// 箱数计算: 建单数量/装箱数 向上取整
///
/// 沿用领域口径 `int(qty/units + 0.99999)`,
/// 对正整数等价于上取整
pub fn carton_count(quantity: u32, units_per_carton: u32) -> u32 {
    (quantity as f64 / units_per_carton as f64 + 0.99999) as u32
}

// ==========================================
// Reconciler - 对账引擎
// ==========================================
pub struct Reconciler<'a> {
    catalog: &'a ProductCatalog,
    packing: &'a PackingTable,
}

impl<'a> Reconciler<'a> {
    pub fn new(catalog: &'a ProductCatalog, packing: &'a PackingTable) -> Self {
        Self { catalog, packing }
    }

    /// 对全部货件行做对账, 保持行序
    ///
    /// 一条货件行按型号字段 `/` 展开为多个型号,
    /// 每个命中的型号产出一条清单行
    pub fn reconcile(&self, records: &[ShipmentRecord]) -> Vec<ManifestRow> {
        let mut rows = Vec::new();

        for record in records {
            let Some(brand) = infer_brand(&record.shop, record.layout) else {
                debug!(
                    row = record.row_number,
                    shop = %record.shop,
                    "店铺未命中品牌关键词, 货件行不产出"
                );
                continue;
            };

            for model in record.model_field.split('/') {
                let model = model.trim();
                if model.is_empty() {
                    continue;
                }
                if let Some(row) = self.reconcile_model(record, model, &brand) {
                    rows.push(row);
                }
            }
        }

        rows
    }

    /// 单个型号的对账
    fn reconcile_model(
        &self,
        record: &ShipmentRecord,
        model: &str,
        brand: &str,
    ) -> Option<ManifestRow> {
        let Some(product) = self.catalog.find(model, brand) else {
            debug!(
                row = record.row_number,
                model,
                brand,
                "品号汇总未命中, 型号丢弃"
            );
            return None;
        };

        let packing = self.resolve_packing(model, &product.customer_model);
        let cartons = carton_count(record.quantity, packing.units_per_carton);

        Some(ManifestRow {
            brand_account: brand.to_string(),
            shipment_date: record.created_at,
            country: record.country.clone(),
            shipment_id: record.shipment_id.clone(),
            // 纸箱编号与单票合计由装箱分配阶段回填
            carton_range: String::new(),
            cartons,
            shipment_total_cartons: 0,
            product_model: format!("{}{}", product.customer_model, product.color),
            product_code: model.to_string(),
            product_spec: record.spec.clone(),
            quantity: record.quantity,
            units_per_carton: packing.units_per_carton,
            logistics_center: record.logistics_center.clone(),
            transparency_msku: match record.layout {
                ShipmentLayout::FbaOutbound => record.msku.clone(),
                ShipmentLayout::OverseasWarehouse => String::new(),
            },
            fnsku: record.fnsku.clone(),
        })
    }

    /// 装箱规格解析: 精确键 → 客户型号子串 → 缺省
    fn resolve_packing(&self, model: &str, customer_model: &str) -> PackingSpec {
        self.packing
            .exact(model)
            .or_else(|| self.packing.fuzzy(customer_model))
            .unwrap_or_default()
    }
}
