// ==========================================
// FBA货件装箱清单生成系统 - 产品资料领域模型
// ==========================================
// 来源: 产品资料工作簿（品号汇总 / 装箱清单）
// 用途: 导入层写入, 引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 缺省普通装箱数（装箱清单中查不到时使用）
pub const DEFAULT_UNITS_PER_CARTON: u32 = 40;

// ==========================================
// ReferenceProduct - 品号汇总条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceProduct {
    // ===== 主键 =====
    pub internal_code: String, // 乌托邦新品号

    // ===== 基础信息 =====
    pub customer_model: String, // 客户型号
    pub color: String,          // 颜色
    pub description: String,    // 描述
    pub brand: String,          // 品牌（可含多个品牌名）
}

// ==========================================
// ProductCatalog - 品号查找表
// ==========================================
// 红线: 查找按载入顺序扫描, 先载入者优先,
//       不依赖哈希表遍历顺序
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    entries: Vec<ReferenceProduct>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条品号记录（保持载入顺序）
    pub fn push(&mut self, product: ReferenceProduct) {
        self.entries.push(product);
    }

    /// 查找品号: 品号等于 model 且 品牌字段包含 brand 子串
    ///
    /// 按载入顺序返回第一条命中的记录
    pub fn find(&self, model: &str, brand: &str) -> Option<&ReferenceProduct> {
        self.entries
            .iter()
            .find(|p| p.internal_code == model && p.brand.contains(brand))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// PackingSpec - 装箱规格
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingSpec {
    /// 普通箱箱数(PCS)
    pub units_per_carton: u32,

    /// 是否危险品
    pub hazardous: bool,
}

impl Default for PackingSpec {
    /// 缺省装箱规格: 40个/箱, 非危险品
    fn default() -> Self {
        Self {
            units_per_carton: DEFAULT_UNITS_PER_CARTON,
            hazardous: false,
        }
    }
}

// ==========================================
// PackingTable - 装箱清单查找表
// ==========================================
// 同一物理行按 乌托邦新品号 与 客户型号 各登记一次;
// 同键重复时后写覆盖, 模糊查找按登记顺序扫描
#[derive(Debug, Clone, Default)]
pub struct PackingTable {
    entries: Vec<(String, PackingSpec)>,
    index: HashMap<String, usize>,
}

impl PackingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一条装箱规格（同键后写覆盖, 保持首次登记位置）
    pub fn insert(&mut self, key: impl Into<String>, spec: PackingSpec) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 = spec,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, spec));
            }
        }
    }

    /// 精确查找（按键）
    pub fn exact(&self, key: &str) -> Option<PackingSpec> {
        self.index.get(key).map(|&idx| self.entries[idx].1)
    }

    /// 模糊查找: 登记键包含 customer_model 子串, 按登记顺序取第一条
    pub fn fuzzy(&self, customer_model: &str) -> Option<PackingSpec> {
        if customer_model.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key.contains(customer_model))
            .map(|(_, spec)| *spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str, brand: &str) -> ReferenceProduct {
        ReferenceProduct {
            internal_code: code.to_string(),
            customer_model: format!("CM-{}", code),
            color: "黑色".to_string(),
            description: String::new(),
            brand: brand.to_string(),
        }
    }

    #[test]
    fn test_catalog_brand_substring_match() {
        let mut catalog = ProductCatalog::new();
        catalog.push(product("W10", "超麦"));
        catalog.push(product("W10", "艾美柯/超麦"));

        let hit = catalog.find("W10", "艾美柯").expect("应命中第二条");
        assert_eq!(hit.brand, "艾美柯/超麦");
        assert!(catalog.find("W10", "谷和").is_none());
    }

    #[test]
    fn test_catalog_first_inserted_wins() {
        let mut catalog = ProductCatalog::new();
        catalog.push(ReferenceProduct {
            customer_model: "CM-A".to_string(),
            ..product("W20", "超麦")
        });
        catalog.push(ReferenceProduct {
            customer_model: "CM-B".to_string(),
            ..product("W20", "超麦")
        });

        // 同号同品牌, 取先载入的一条
        assert_eq!(catalog.find("W20", "超麦").unwrap().customer_model, "CM-A");
    }

    #[test]
    fn test_packing_exact_last_write_wins() {
        let mut table = PackingTable::new();
        table.insert(
            "W10",
            PackingSpec {
                units_per_carton: 20,
                hazardous: false,
            },
        );
        table.insert(
            "W10",
            PackingSpec {
                units_per_carton: 30,
                hazardous: true,
            },
        );

        let spec = table.exact("W10").unwrap();
        assert_eq!(spec.units_per_carton, 30);
        assert!(spec.hazardous);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_packing_fuzzy_by_substring() {
        let mut table = PackingTable::new();
        table.insert(
            "CM-100/CM-200",
            PackingSpec {
                units_per_carton: 24,
                hazardous: false,
            },
        );

        assert_eq!(table.fuzzy("CM-200").unwrap().units_per_carton, 24);
        assert!(table.fuzzy("CM-300").is_none());
        assert!(table.fuzzy("").is_none());
    }

    #[test]
    fn test_packing_default_spec() {
        let spec = PackingSpec::default();
        assert_eq!(spec.units_per_carton, 40);
        assert!(!spec.hazardous);
    }
}
