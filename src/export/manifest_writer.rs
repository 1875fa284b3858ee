// ==========================================
// FBA货件装箱清单生成系统 - 清单写出
// ==========================================
// 输出工作簿: 单表, 25列表头逐字匹配;
// 列宽20 / 行高35 / 单元格水平垂直居中
// ==========================================

use crate::domain::manifest::{ManifestRow, MANIFEST_HEADERS};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};
use std::path::Path;
use thiserror::Error;

/// 输出列宽
const COLUMN_WIDTH: f64 = 20.0;

/// 输出行高
const ROW_HEIGHT: f64 = 35.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("清单写出失败: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("清单写出 IO 失败: {0}")]
    Io(#[from] std::io::Error),
}

// ==========================================
// ManifestWriter - 清单写出器
// ==========================================
pub struct ManifestWriter;

impl ManifestWriter {
    /// 写出清单工作簿
    pub fn write(rows: &[ManifestRow], output_path: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let format = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        // 列宽统一
        for col in 0..MANIFEST_HEADERS.len() as u16 {
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        // 表头
        worksheet.set_row_height(0, ROW_HEIGHT)?;
        for (col, header) in MANIFEST_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &format)?;
        }

        // 数据行
        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            worksheet.set_row_height(r, ROW_HEIGHT)?;
            Self::write_row(worksheet, r, row, &format)?;
        }

        workbook.save(output_path)?;
        Ok(())
    }

    fn write_row(
        worksheet: &mut rust_xlsxwriter::Worksheet,
        r: u32,
        row: &ManifestRow,
        format: &Format,
    ) -> Result<(), XlsxError> {
        // 列序与 MANIFEST_HEADERS 一致; 空白列写空串占位
        worksheet.write_string_with_format(r, 0, &row.brand_account, format)?; // 账号
        worksheet.write_string_with_format(r, 1, row.shipment_date_display(), format)?; // 货件日期
        worksheet.write_string_with_format(r, 2, &row.country, format)?; // 国家
        worksheet.write_string_with_format(r, 3, &row.shipment_id, format)?; // 货件编码
        worksheet.write_string_with_format(r, 4, &row.carton_range, format)?; // 纸箱编号
        worksheet.write_string_with_format(r, 5, &row.product_model, format)?; // 产品型号
        worksheet.write_string_with_format(r, 6, &row.product_code, format)?; // 品号
        worksheet.write_string_with_format(r, 7, &row.product_spec, format)?; // 产品规格
        worksheet.write_number_with_format(r, 8, row.quantity as f64, format)?; // 建单数量
        worksheet.write_string_with_format(r, 9, "", format)?; // 库存
        worksheet.write_string_with_format(r, 10, "", format)?; // 待生产
        worksheet.write_number_with_format(r, 11, row.cartons as f64, format)?; // 件数/箱
        worksheet.write_number_with_format(r, 12, row.shipment_total_cartons as f64, format)?; // 单票合计/箱
        worksheet.write_string_with_format(r, 13, "", format)?; // 箱规
        worksheet.write_number_with_format(r, 14, row.units_per_carton as f64, format)?; // 装箱规格个/箱
        worksheet.write_string_with_format(r, 15, "", format)?; // 物流渠道
        worksheet.write_string_with_format(r, 16, "", format)?; // 货件特殊说明
        worksheet.write_string_with_format(r, 17, &row.logistics_center, format)?; // 物流中心编码
        worksheet.write_string_with_format(r, 18, "", format)?; // 报关单价
        worksheet.write_string_with_format(r, 19, "", format)?; // 平台售价
        worksheet.write_string_with_format(r, 20, "", format)?; // 备注
        worksheet.write_string_with_format(r, 21, &row.transparency_msku, format)?; // 透明计划标签（MSKU）
        worksheet.write_string_with_format(r, 22, &row.fnsku, format)?; // 标签(FNSKU)
        worksheet.write_string_with_format(r, 23, "", format)?; // 外箱标签
        worksheet.write_string_with_format(r, 24, "", format)?; // 班级
        Ok(())
    }
}
