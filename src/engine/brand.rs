// ==========================================
// FBA货件装箱清单生成系统 - 品牌推断
// ==========================================
// 依据: 店铺/仓库名称中的品牌关键词, 表序首个命中
// 红线: 关键词表是领域查找数据, 顺序即优先级
// ==========================================

use crate::domain::shipment::ShipmentLayout;

/// 店铺名关键词 → 品牌（小写匹配, 表序优先）
pub const BRAND_KEYWORDS: [(&str, &str); 5] = [
    ("charmast", "超麦"),
    ("chenying", "晨樱"),
    ("veger", "艾美柯"),
    ("vrurc", "创立嘉城"),
    ("gh", "谷和"),
];

/// 中文品牌关键词（版式B优先于拼音关键词匹配）
pub const BRAND_KEYWORDS_CN: [(&str, &str); 6] = [
    ("超麦", "超麦"),
    ("晨樱", "晨樱"),
    ("艾美柯", "艾美柯"),
    ("创立嘉城", "创立嘉城"),
    ("创立嘉诚", "创立嘉城"),
    ("谷和", "谷和"),
];

/// 从店铺/仓库名推断品牌
///
/// - 版式A: 小写后按拼音关键词表匹配; 未命中返回 None,
///   该货件行不产出清单行
/// - 版式B: 先按中文关键词、再按拼音关键词匹配;
///   都未命中时以仓库名原文作为品牌回落
pub fn infer_brand(shop: &str, layout: ShipmentLayout) -> Option<String> {
    let lowered = shop.to_lowercase();

    match layout {
        ShipmentLayout::FbaOutbound => BRAND_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, brand)| brand.to_string()),
        ShipmentLayout::OverseasWarehouse => {
            let hit = BRAND_KEYWORDS_CN
                .iter()
                .find(|(keyword, _)| shop.contains(keyword))
                .or_else(|| {
                    BRAND_KEYWORDS
                        .iter()
                        .find(|(keyword, _)| lowered.contains(keyword))
                });

            Some(match hit {
                Some((_, brand)) => brand.to_string(),
                None => shop.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_a_case_insensitive() {
        assert_eq!(
            infer_brand("VEGER-US-FBA", ShipmentLayout::FbaOutbound).as_deref(),
            Some("艾美柯")
        );
        assert_eq!(
            infer_brand("Charmast-DE", ShipmentLayout::FbaOutbound).as_deref(),
            Some("超麦")
        );
    }

    #[test]
    fn test_layout_a_no_match_yields_none() {
        assert_eq!(infer_brand("unknown-shop", ShipmentLayout::FbaOutbound), None);
    }

    #[test]
    fn test_layout_a_table_order_priority() {
        // charmast 在 gh 之前, 即使店铺名同时包含两者
        assert_eq!(
            infer_brand("gh-charmast", ShipmentLayout::FbaOutbound).as_deref(),
            Some("超麦")
        );
    }

    #[test]
    fn test_layout_b_chinese_priority() {
        // 中文关键词先于拼音关键词
        assert_eq!(
            infer_brand("veger谷和仓", ShipmentLayout::OverseasWarehouse).as_deref(),
            Some("谷和")
        );
        // 异体写法归一
        assert_eq!(
            infer_brand("创立嘉诚美国仓", ShipmentLayout::OverseasWarehouse).as_deref(),
            Some("创立嘉城")
        );
    }

    #[test]
    fn test_layout_b_raw_fallback() {
        assert_eq!(
            infer_brand("某海外仓", ShipmentLayout::OverseasWarehouse).as_deref(),
            Some("某海外仓")
        );
    }
}
