// ==========================================
// FBA货件装箱清单生成系统 - 清单生成流水线
// ==========================================
// 职责: 资料装载 → 货件解析 → 对账 → 装箱分配
// 红线: 任一阶段出错即中止, 不产出部分清单
// ==========================================

use crate::domain::manifest::ManifestRow;
use crate::engine::allocator::CartonAllocator;
use crate::engine::reconcile::Reconciler;
use crate::importer::error::ImportResult;
use crate::importer::reference_loader::ReferenceLoader;
use crate::importer::shipment_parser::ShipmentParser;
use std::path::Path;
use tracing::info;

// ==========================================
// ManifestPipeline - 清单生成流水线
// ==========================================
pub struct ManifestPipeline;

impl ManifestPipeline {
    /// 端到端生成清单行
    ///
    /// # 参数
    /// - shipment_path: 货件导出工作簿
    /// - reference_path: 产品资料工作簿
    ///
    /// # 流程
    /// 1. 装载产品资料（品号汇总 + 装箱清单）
    /// 2. 解析货件文件（版式识别 + 货件头补齐）
    /// 3. 对账展开清单行
    /// 4. 装箱分配与排序
    pub fn generate(shipment_path: &Path, reference_path: &Path) -> ImportResult<Vec<ManifestRow>> {
        let start_time = std::time::Instant::now();

        // === 步骤 1: 装载产品资料 ===
        let (catalog, packing) = ReferenceLoader::load(reference_path)?;

        // === 步骤 2: 解析货件文件 ===
        let (layout, records) = ShipmentParser::parse(shipment_path)?;

        // === 步骤 3: 对账 ===
        let reconciler = Reconciler::new(&catalog, &packing);
        let mut rows = reconciler.reconcile(&records);

        // === 步骤 4: 装箱分配与排序 ===
        CartonAllocator::allocate(&mut rows);

        info!(
            layout = layout.as_str(),
            shipment_rows = records.len(),
            manifest_rows = rows.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "清单生成完成"
        );

        Ok(rows)
    }
}
