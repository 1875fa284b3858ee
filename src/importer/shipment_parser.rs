// ==========================================
// FBA货件装箱清单生成系统 - 货件文件解析
// ==========================================
// 职责: 版式识别 + 品名拆解 + 国家解析 + 货件头补齐
// 红线: 输出顺序即文件行序; 补齐是对行序的显式折叠,
//       不依赖循环内隐式状态
// ==========================================

use crate::domain::shipment::{ShipmentHeader, ShipmentLayout, ShipmentRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet_reader::{get_string, read_sheet, require_columns, SheetRows};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// 版式B识别列: 备货单号 存在即为海外仓备货单
const LAYOUT_B_MARKER: &str = "备货单号";

const LAYOUT_A_COLUMNS: [&str; 9] = [
    "MSKU",
    "品名",
    "申报量",
    "FNSKU",
    "货件单号",
    "店铺",
    "国家",
    "创建时间",
    "物流中心编码",
];

const LAYOUT_B_COLUMNS: [&str; 6] = ["sku", "品名", "备货数量", "备货单号", "收货仓库", "创建时间"];

/// 海外仓仓库名中可识别的国家（按此顺序取首个命中）
pub const COUNTRIES: [&str; 16] = [
    "德国",
    "法国",
    "意大利",
    "西班牙",
    "英国",
    "荷兰",
    "比利时",
    "瑞典",
    "波兰",
    "澳大利亚",
    "迪拜",
    "美国",
    "加拿大",
    "墨西哥",
    "日本",
    "沙特阿拉伯",
];

/// 创建时间可接受的文本格式
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

// ==========================================
// ShipmentParser - 货件文件解析器
// ==========================================
pub struct ShipmentParser;

impl ShipmentParser {
    /// 解析货件工作簿（单表, 表名不限）
    ///
    /// # 返回
    /// - (版式, 行记录序列): 行序与文件一致, 货件头已补齐
    pub fn parse(shipment_path: &Path) -> ImportResult<(ShipmentLayout, Vec<ShipmentRecord>)> {
        let sheet = read_sheet(shipment_path, None)?;
        let layout = Self::detect_layout(&sheet);
        debug!(layout = layout.as_str(), rows = sheet.rows.len(), "货件版式识别完成");

        match layout {
            ShipmentLayout::FbaOutbound => {
                require_columns(&sheet, "货件导出", &LAYOUT_A_COLUMNS)?
            }
            ShipmentLayout::OverseasWarehouse => {
                require_columns(&sheet, "货件导出", &LAYOUT_B_COLUMNS)?
            }
        }

        // 逐行解析后按行序折叠补齐货件头
        let mut state: Option<ShipmentHeader> = None;
        let mut records = Vec::with_capacity(sheet.rows.len());
        for (row_number, row) in &sheet.rows {
            let record = Self::parse_row(layout, row, *row_number)?;
            let (next_state, filled) = Self::carry_forward_step(state, record)?;
            state = next_state;
            records.push(filled);
        }

        Ok((layout, records))
    }

    /// 按列名识别版式
    pub fn detect_layout(sheet: &SheetRows) -> ShipmentLayout {
        if sheet.has_column(LAYOUT_B_MARKER) {
            ShipmentLayout::OverseasWarehouse
        } else {
            ShipmentLayout::FbaOutbound
        }
    }

    /// 解析单行为 ShipmentRecord
    ///
    /// 国家可能为空（版式B仓库名未命中国家清单, 或版式A国家列空白）,
    /// 留待补齐折叠处理
    fn parse_row(
        layout: ShipmentLayout,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ShipmentRecord> {
        let (msku_col, qty_col, shipment_col, shop_col) = match layout {
            ShipmentLayout::FbaOutbound => ("MSKU", "申报量", "货件单号", "店铺"),
            ShipmentLayout::OverseasWarehouse => ("sku", "备货数量", "备货单号", "收货仓库"),
        };

        let msku = get_string(row, msku_col).ok_or_else(|| ImportError::FieldMissing {
            row: row_number,
            field: msku_col.to_string(),
        })?;

        let product_name = get_string(row, "品名").ok_or_else(|| ImportError::FieldMissing {
            row: row_number,
            field: "品名".to_string(),
        })?;
        let (model_field, spec, color) = Self::parse_product_name(&product_name, row_number)?;

        let quantity = Self::parse_quantity(row, qty_col, row_number)?;
        let shop = get_string(row, shop_col).unwrap_or_default();

        let country = match layout {
            ShipmentLayout::FbaOutbound => get_string(row, "国家").unwrap_or_default(),
            ShipmentLayout::OverseasWarehouse => Self::match_country(&shop).unwrap_or_default(),
        };

        // 创建时间: 补齐行允许为空, 完整行必须可解析
        let created_at = match get_string(row, "创建时间") {
            Some(raw) => Some(Self::parse_datetime(&raw, row_number)?),
            None => None,
        };

        let (fnsku, logistics_center) = match layout {
            ShipmentLayout::FbaOutbound => (
                get_string(row, "FNSKU").unwrap_or_default(),
                get_string(row, "物流中心编码").unwrap_or_default(),
            ),
            ShipmentLayout::OverseasWarehouse => (String::new(), String::new()),
        };

        Ok(ShipmentRecord {
            msku,
            model_field,
            spec,
            color,
            quantity,
            fnsku,
            shipment_id: get_string(row, shipment_col).unwrap_or_default(),
            shop,
            country,
            // 补齐折叠前暂以纪元零点占位, 完整行在折叠中校验
            created_at: created_at.unwrap_or(NaiveDateTime::UNIX_EPOCH),
            logistics_center,
            layout,
            row_number,
        })
    }

    /// 货件头补齐的单步折叠
    ///
    /// 国家为空的行从最近一条完整行继承五个货件头字段;
    /// 文件首行必须自身完整, 否则整批拒绝
    pub fn carry_forward_step(
        state: Option<ShipmentHeader>,
        mut record: ShipmentRecord,
    ) -> ImportResult<(Option<ShipmentHeader>, ShipmentRecord)> {
        if record.country.is_empty() {
            let header = state.ok_or(ImportError::CarryForwardWithoutHeader {
                row: record.row_number,
            })?;
            header.apply_to(&mut record);
            Ok((Some(header), record))
        } else {
            // 完整行必须带有可用的创建时间
            if record.created_at == NaiveDateTime::UNIX_EPOCH {
                return Err(ImportError::FieldMissing {
                    row: record.row_number,
                    field: "创建时间".to_string(),
                });
            }
            let header = ShipmentHeader::from_record(&record);
            Ok((Some(header), record))
        }
    }

    /// 拆解品名: 型号*包装*属性, 属性段含至少4个 / 分隔字段
    ///
    /// # 返回
    /// - (型号字段, 规格, 颜色)
    fn parse_product_name(
        product_name: &str,
        row_number: usize,
    ) -> ImportResult<(String, String, String)> {
        let malformed = || ImportError::ProductNameFormat {
            row: row_number,
            value: product_name.to_string(),
        };

        let segments: Vec<&str> = product_name.split('*').collect();
        if segments.len() < 3 {
            return Err(malformed());
        }

        let attributes: Vec<&str> = segments[2].split('/').collect();
        if attributes.len() < 4 {
            return Err(malformed());
        }

        Ok((
            segments[0].trim().to_string(),
            attributes[1].trim().to_string(),
            attributes[3].trim().to_string(),
        ))
    }

    /// 仓库名 → 国家（子串匹配, 清单序首个命中）
    pub fn match_country(warehouse_name: &str) -> Option<String> {
        COUNTRIES
            .iter()
            .find(|c| warehouse_name.contains(*c))
            .map(|c| c.to_string())
    }

    fn parse_quantity(
        row: &HashMap<String, String>,
        field: &str,
        row_number: usize,
    ) -> ImportResult<u32> {
        let raw = get_string(row, field).ok_or_else(|| ImportError::FieldMissing {
            row: row_number,
            field: field.to_string(),
        })?;

        // Excel 数值单元格可能带小数点
        match raw.parse::<f64>() {
            Ok(n) if n >= 1.0 && n.fract() == 0.0 => Ok(n as u32),
            _ => Err(ImportError::NumberFormat {
                row: row_number,
                field: field.to_string(),
                value: raw,
            }),
        }
    }

    /// 解析创建时间: 常见文本格式 + Excel 序列值
    fn parse_datetime(raw: &str, row_number: usize) -> ImportResult<NaiveDateTime> {
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(dt);
            }
        }
        for format in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
                if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                    return Ok(dt);
                }
            }
        }

        // Excel 序列值（自 1899-12-30 起的天数, 可含小数时刻）
        if let Ok(serial) = raw.parse::<f64>() {
            if serial > 0.0 {
                if let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30) {
                    let days = serial.trunc() as i64;
                    let secs = (serial.fract() * 86_400.0).round() as i64;
                    if let Some(dt) = epoch
                        .and_hms_opt(0, 0, 0)
                        .map(|t| t + Duration::days(days) + Duration::seconds(secs))
                    {
                        return Ok(dt);
                    }
                }
            }
        }

        Err(ImportError::DateFormat {
            row: row_number,
            field: "创建时间".to_string(),
            value: raw.to_string(),
        })
    }
}
