// ==========================================
// FBA货件装箱清单生成系统 - 清单行模型
// ==========================================
// 输出工作簿固定 25 列, 列名与顺序逐字匹配
// 空白列不入结构体, 由导出层按列位补空
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 输出清单表头（25列, 顺序固定）
pub const MANIFEST_HEADERS: [&str; 25] = [
    "账号",
    "货件日期",
    "国家",
    "货件编码",
    "纸箱编号",
    "产品型号",
    "品号",
    "产品规格",
    "建单数量",
    "库存",
    "待生产",
    "件数/箱",
    "单票合计/箱",
    "箱规",
    "装箱规格个/箱",
    "物流渠道",
    "货件特殊说明",
    "物流中心编码",
    "报关单价",
    "平台售价",
    "备注",
    "透明计划标签（MSKU）",
    "标签(FNSKU)",
    "外箱标签",
    "班级",
];

// ==========================================
// ManifestRow - 清单行
// ==========================================
// 一条 (货件行, 型号) 对账结果;
// 纸箱编号/单票合计 由装箱分配阶段回填
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRow {
    // ===== 账号与货件头 =====
    pub brand_account: String,         // 账号（推断出的品牌）
    pub shipment_date: NaiveDateTime,  // 货件日期（创建时间）
    pub country: String,               // 国家
    pub shipment_id: String,           // 货件编码

    // ===== 装箱分配（第二阶段回填）=====
    pub carton_range: String,          // 纸箱编号, 如 "1-2"; 0箱行留空
    pub cartons: u32,                  // 件数/箱（本行箱数）
    pub shipment_total_cartons: u32,   // 单票合计/箱

    // ===== 产品信息 =====
    pub product_model: String,         // 产品型号 = 客户型号 + 颜色
    pub product_code: String,          // 品号（乌托邦新品号）
    pub product_spec: String,          // 产品规格
    pub quantity: u32,                 // 建单数量
    pub units_per_carton: u32,         // 装箱规格个/箱

    // ===== 物流与标签 =====
    pub logistics_center: String,      // 物流中心编码
    pub transparency_msku: String,     // 透明计划标签（MSKU）, 仅版式A
    pub fnsku: String,                 // 标签(FNSKU)
}

impl ManifestRow {
    /// 货件日期的显示格式
    pub fn shipment_date_display(&self) -> String {
        self.shipment_date.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
