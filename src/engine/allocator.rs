// ==========================================
// FBA货件装箱清单生成系统 - 装箱分配引擎
// ==========================================
// 职责: 单票合计 + 纸箱编号区间 + 结果排序
// 红线: 同一货件编码内区间连续不重叠, 自1起;
//       排序为稳定排序, 同日期行保持相对行序
// ==========================================

use crate::domain::manifest::ManifestRow;
use std::collections::HashMap;

// ==========================================
// CartonAllocator - 装箱分配引擎
// ==========================================
pub struct CartonAllocator;

impl CartonAllocator {
    /// 两遍后处理 + 排序, 就地修改清单行
    ///
    /// 1. 按货件编码汇总箱数, 回写每行 单票合计/箱
    /// 2. 按货件编码维护下一箱号（自1起）, 逐行分配区间;
    ///    0箱行区间留空且不推进计数
    /// 3. 按货件日期降序稳定排序
    pub fn allocate(rows: &mut Vec<ManifestRow>) {
        Self::fill_shipment_totals(rows);
        Self::assign_carton_ranges(rows);

        rows.sort_by(|a, b| b.shipment_date.cmp(&a.shipment_date));
    }

    /// 第一遍: 单票合计/箱
    fn fill_shipment_totals(rows: &mut [ManifestRow]) {
        let mut totals: HashMap<String, u32> = HashMap::new();
        for row in rows.iter() {
            *totals.entry(row.shipment_id.clone()).or_insert(0) += row.cartons;
        }
        for row in rows.iter_mut() {
            row.shipment_total_cartons = totals[&row.shipment_id];
        }
    }

    /// 第二遍: 纸箱编号区间
    fn assign_carton_ranges(rows: &mut [ManifestRow]) {
        let mut next_carton: HashMap<String, u32> = HashMap::new();
        for row in rows.iter_mut() {
            let next = next_carton.entry(row.shipment_id.clone()).or_insert(1);
            if row.cartons > 0 {
                let start = *next;
                let end = start + row.cartons - 1;
                row.carton_range = format!("{}-{}", start, end);
                *next = end + 1;
            } else {
                row.carton_range.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn row(shipment_id: &str, cartons: u32, day: u32, code: &str) -> ManifestRow {
        ManifestRow {
            brand_account: "艾美柯".to_string(),
            shipment_date: date(day),
            country: "美国".to_string(),
            shipment_id: shipment_id.to_string(),
            carton_range: String::new(),
            cartons,
            shipment_total_cartons: 0,
            product_model: String::new(),
            product_code: code.to_string(),
            product_spec: String::new(),
            quantity: cartons * 40,
            units_per_carton: 40,
            logistics_center: String::new(),
            transparency_msku: String::new(),
            fnsku: String::new(),
        }
    }

    #[test]
    fn test_totals_and_ranges_per_shipment() {
        let mut rows = vec![
            row("S1", 2, 1, "A"),
            row("S2", 5, 1, "B"),
            row("S1", 1, 1, "C"),
        ];
        CartonAllocator::allocate(&mut rows);

        // 同日期稳定排序, 行序不变
        let s1: Vec<_> = rows.iter().filter(|r| r.shipment_id == "S1").collect();
        assert_eq!(s1[0].carton_range, "1-2");
        assert_eq!(s1[1].carton_range, "3-3");
        assert!(s1.iter().all(|r| r.shipment_total_cartons == 3));

        let s2: Vec<_> = rows.iter().filter(|r| r.shipment_id == "S2").collect();
        assert_eq!(s2[0].carton_range, "1-5");
        assert_eq!(s2[0].shipment_total_cartons, 5);
    }

    #[test]
    fn test_zero_carton_row_keeps_counter() {
        let mut rows = vec![row("S1", 2, 1, "A"), row("S1", 0, 1, "B"), row("S1", 3, 1, "C")];
        CartonAllocator::allocate(&mut rows);

        assert_eq!(rows[0].carton_range, "1-2");
        assert_eq!(rows[1].carton_range, "");
        assert_eq!(rows[2].carton_range, "3-5");
        assert!(rows.iter().all(|r| r.shipment_total_cartons == 5));
    }

    #[test]
    fn test_ranges_cover_total_without_gaps() {
        let mut rows = vec![
            row("S1", 4, 1, "A"),
            row("S1", 1, 1, "B"),
            row("S1", 2, 1, "C"),
        ];
        CartonAllocator::allocate(&mut rows);

        let mut covered = Vec::new();
        for r in &rows {
            let (start, end) = r.carton_range.split_once('-').unwrap();
            let (start, end) = (start.parse::<u32>().unwrap(), end.parse::<u32>().unwrap());
            covered.extend(start..=end);
        }
        covered.sort_unstable();
        let total = rows[0].shipment_total_cartons;
        assert_eq!(covered, (1..=total).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_date_descending_stable() {
        let mut rows = vec![
            row("S1", 1, 1, "旧1"),
            row("S2", 1, 3, "新"),
            row("S3", 1, 1, "旧2"),
            row("S4", 1, 2, "中"),
        ];
        CartonAllocator::allocate(&mut rows);

        let order: Vec<_> = rows.iter().map(|r| r.product_code.as_str()).collect();
        assert_eq!(order, ["新", "中", "旧1", "旧2"]);
    }
}
