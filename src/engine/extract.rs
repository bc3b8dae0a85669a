// ==========================================
// SCM 납기관리 AI Agent - STEP 1 PO 추출 집계
// ==========================================
// 전체 데이터셋에 대한 구분/공급사/자재구분별 건수 집계
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::PurchaseOrder;

/// STEP 1 집계 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSummary {
    /// 전체 건수
    pub total_count: usize,
    /// 공급사 수
    pub supplier_count: usize,
    /// 구분별 건수
    pub by_category: BTreeMap<String, usize>,
    /// 공급사별 건수
    pub by_supplier: BTreeMap<String, usize>,
    /// 자재구분별 건수
    pub by_material_type: BTreeMap<String, usize>,
}

/// 전체 데이터셋 집계
///
/// 그룹 키 순서는 의미가 없으므로 정렬 맵으로 결정적 출력을 보장한다.
pub fn summarize(records: &[PurchaseOrder]) -> ExtractSummary {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_supplier: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_material_type: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        *by_category.entry(record.category.clone()).or_default() += 1;
        *by_supplier.entry(record.supplier.clone()).or_default() += 1;
        if let Some(material_type) = &record.material_type {
            *by_material_type.entry(material_type.clone()).or_default() += 1;
        }
    }

    ExtractSummary {
        total_count: records.len(),
        supplier_count: by_supplier.len(),
        by_category,
        by_supplier,
        by_material_type,
    }
}
