// ==========================================
// FBA货件装箱清单生成系统 - 测试辅助
// ==========================================
// 职责: 在临时目录生成 xlsx 测试夹具
// ==========================================

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// 生成标准产品资料工作簿（品号汇总 + 装箱清单）
///
/// 品号: W10(艾美柯/40个箱/危险品), W11(超麦/艾美柯, 装箱未登记),
///       W20(超麦/套装键20个箱)
pub fn write_reference_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("product_info.xlsx");
    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    summary.set_name("品号汇总").unwrap();
    let headers = ["乌托邦新品号", "客户型号", "颜色", "描述", "品牌"];
    write_rows(
        summary,
        &headers,
        &[
            &["W10", "C10", "黑", "十千毫安移动电源", "艾美柯"],
            &["W11", "C11", "白", "", "超麦/艾美柯"],
            &["W20", "C20", "蓝", "", "超麦"],
        ],
    );

    let packing = workbook.add_worksheet();
    packing.set_name("装箱清单").unwrap();
    let headers = ["乌托邦新品号", "客户型号", "普通箱箱数(PCS)", "危险品"];
    write_rows(
        packing,
        &headers,
        &[
            &["W10", "C10", "40", "危险品"],
            &["W20", "C20-套装", "20", ""],
        ],
    );

    workbook.save(&path).unwrap();
    path
}

/// 生成版式A货件文件
///
/// 每行: (MSKU, 品名, 申报量, FNSKU, 货件单号, 店铺, 国家, 创建时间, 物流中心编码)
pub fn write_shipment_a(dir: &Path, rows: &[[&str; 9]]) -> PathBuf {
    let path = dir.join("shipment_a.xlsx");
    let headers = [
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
    write_workbook(&path, &headers, rows);
    path
}

/// 生成版式B货件文件
///
/// 每行: (sku, 品名, 备货数量, 备货单号, 收货仓库, 创建时间)
pub fn write_shipment_b(dir: &Path, rows: &[[&str; 6]]) -> PathBuf {
    let path = dir.join("shipment_b.xlsx");
    let headers = ["sku", "品名", "备货数量", "备货单号", "收货仓库", "创建时间"];
    write_workbook(&path, &headers, rows);
    path
}

/// 标准品名（单型号）
pub fn product_name(model: &str) -> String {
    format!("{}*彩盒*PD/10000mAh/Type-C/黑色", model)
}

fn write_workbook<const N: usize>(path: &Path, headers: &[&str; N], rows: &[[&str; N]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((r + 1) as u32, col as u16, *value).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

fn write_rows(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    headers: &[&str],
    rows: &[&[&str]],
) {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((r + 1) as u32, col as u16, *value).unwrap();
        }
    }
}
