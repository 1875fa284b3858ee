// ==========================================
// FBA货件装箱清单生成系统 - 货件领域模型
// ==========================================
// 来源: 货件导出工作簿（两种版式, 按列名自动识别）
// 红线: 记录顺序即文件行序, 后续补齐依赖该顺序
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ShipmentLayout - 货件文件版式
// ==========================================
/// 货件导出文件的两种版式
///
/// - `FbaOutbound`(版式A): 本地发往 FBA 仓库的发货单
/// - `OverseasWarehouse`(版式B): 本地发往海外仓的备货单
///   （以 `备货单号` 列存在与否识别）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentLayout {
    FbaOutbound,
    OverseasWarehouse,
}

impl ShipmentLayout {
    pub fn as_str(&self) -> &str {
        match self {
            ShipmentLayout::FbaOutbound => "A",
            ShipmentLayout::OverseasWarehouse => "B",
        }
    }
}

// ==========================================
// ShipmentRecord - 货件行记录
// ==========================================
// 一行一条, 品名已拆解; 型号字段可含多个型号（`/` 分隔）,
// 对账阶段再展开
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    // ===== 主键 =====
    pub msku: String, // MSKU（版式A）/ sku（版式B）

    // ===== 品名拆解字段 =====
    pub model_field: String, // 型号字段（可含 `/` 分隔的多个型号）
    pub spec: String,        // 规格（品名第三段 `/` 拆分后下标1）
    pub color: String,       // 颜色（品名第三段 `/` 拆分后下标3）

    // ===== 数量与标签 =====
    pub quantity: u32,  // 申报量（版式A）/ 备货数量（版式B）
    pub fnsku: String,  // FNSKU, 版式B为空

    // ===== 货件头字段（可被后续补齐覆盖）=====
    pub shipment_id: String,      // 货件单号 / 备货单号
    pub shop: String,             // 店铺 / 收货仓库
    pub country: String,          // 国家
    pub created_at: NaiveDateTime, // 创建时间
    pub logistics_center: String, // 物流中心编码, 版式B为空

    // ===== 元信息 =====
    pub layout: ShipmentLayout,
    pub row_number: usize, // 文件中的行号（含表头, 从1起）
}

// ==========================================
// ShipmentHeader - 货件头补齐状态
// ==========================================
/// 最近一条完整行的货件头字段
///
/// 国家无法直接解析的行, 从该状态继承
/// 货件单号/国家/店铺/创建时间/物流中心编码 五个字段
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentHeader {
    pub shipment_id: String,
    pub country: String,
    pub shop: String,
    pub created_at: NaiveDateTime,
    pub logistics_center: String,
}

impl ShipmentHeader {
    /// 从一条完整行提取货件头
    pub fn from_record(record: &ShipmentRecord) -> Self {
        Self {
            shipment_id: record.shipment_id.clone(),
            country: record.country.clone(),
            shop: record.shop.clone(),
            created_at: record.created_at,
            logistics_center: record.logistics_center.clone(),
        }
    }

    /// 将货件头写回一条待补齐的行
    pub fn apply_to(&self, record: &mut ShipmentRecord) {
        record.shipment_id = self.shipment_id.clone();
        record.country = self.country.clone();
        record.shop = self.shop.clone();
        record.created_at = self.created_at;
        record.logistics_center = self.logistics_center.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> ShipmentRecord {
        ShipmentRecord {
            msku: "MSKU-1".to_string(),
            model_field: "W10".to_string(),
            spec: "10000mAh".to_string(),
            color: "黑色".to_string(),
            quantity: 50,
            fnsku: "X001".to_string(),
            shipment_id: "FBA123".to_string(),
            shop: "VEGER-US-FBA".to_string(),
            country: "美国".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            logistics_center: "ONT8".to_string(),
            layout: ShipmentLayout::FbaOutbound,
            row_number: 2,
        }
    }

    #[test]
    fn test_header_roundtrip() {
        let complete = record();
        let header = ShipmentHeader::from_record(&complete);

        let mut partial = record();
        partial.country.clear();
        partial.shipment_id = "其他".to_string();

        header.apply_to(&mut partial);
        assert_eq!(partial.country, "美国");
        assert_eq!(partial.shipment_id, "FBA123");
        assert_eq!(partial.created_at, complete.created_at);
    }
}
