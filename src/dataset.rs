// ==========================================
// SCM 납기관리 AI Agent - 데모 데이터셋
// ==========================================
// 하드코딩된 발주 레코드 16건. 프로세스 시작 시 1회 적재되고
// 이후 읽기 전용이다. 어떤 엔드포인트도 레코드를 변경하지 않는다.
// ==========================================

use chrono::NaiveDate;

use crate::domain::PurchaseOrder;

// ==========================================
// PoDataset - 읽기 전용 데이터셋
// ==========================================

/// 읽기 전용 발주 데이터셋
///
/// 모든 단계 엔진은 이 구조체의 불변 참조만 받는다.
#[derive(Debug)]
pub struct PoDataset {
    records: Vec<PurchaseOrder>,
}

impl PoDataset {
    /// 데모 데이터셋 적재
    pub fn demo() -> Self {
        Self {
            records: demo_orders(),
        }
    }

    /// 임의 레코드로 데이터셋 구성 (테스트용 포함)
    pub fn from_records(records: Vec<PurchaseOrder>) -> Self {
        Self { records }
    }

    /// 전체 레코드
    pub fn records(&self) -> &[PurchaseOrder] {
        &self.records
    }

    /// 레코드 수
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 공급사 목록 (최초 등장 순서 유지, 중복 제거)
    pub fn suppliers(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.supplier) {
                seen.push(record.supplier.clone());
            }
        }
        seen
    }

    /// 특정 공급사의 레코드
    pub fn records_of_supplier<'a>(&'a self, supplier: &str) -> Vec<&'a PurchaseOrder> {
        self.records
            .iter()
            .filter(|r| r.supplier == supplier)
            .collect()
    }
}

// ==========================================
// 데모 레코드 정의
// ==========================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    // 데모 데이터는 상수 날짜만 사용하므로 유효성이 보장된다
    NaiveDate::from_ymd_opt(y, m, day).expect("고정 데모 날짜")
}

#[allow(clippy::too_many_arguments)]
fn base(
    po_number: &str,
    category: &str,
    supplier: &str,
    hull_no: &str,
    material_no: &str,
    material_desc: &str,
    material_type: &str,
    lead_time_days: i64,
    order_date: NaiveDate,
    contract_date: Option<NaiveDate>,
) -> PurchaseOrder {
    PurchaseOrder {
        po_number: po_number.to_string(),
        category: category.to_string(),
        supplier: supplier.to_string(),
        hull_no: hull_no.to_string(),
        material_no: material_no.to_string(),
        material_desc: material_desc.to_string(),
        material_type: Some(material_type.to_string()),
        lead_time_days,
        order_date,
        contract_date,
        pnd: None,
        revised_pnd: None,
        pnd_changed: false,
        supply_request_date: None,
        week47_forecast: None,
        week48_forecast: None,
        week49_forecast: None,
        delay_category: None,
        shortage_category: None,
        remarks: None,
    }
}

/// 데모 발주 레코드 16건
pub fn demo_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            pnd: Some(d(2025, 2, 1)),
            supply_request_date: Some(d(2025, 2, 5)),
            week47_forecast: Some(d(2025, 1, 25)),
            week48_forecast: Some(d(2025, 2, 2)),
            week49_forecast: Some(d(2025, 2, 10)),
            delay_category: Some("지연".to_string()),
            ..base(
                "PO-2579-0001", "대형", "SNRI SCHUF", "2579",
                "2579AVGTKWCG1030", "GATE VALVE 5K-200A", "기계",
                120, d(2024, 9, 20), Some(d(2025, 1, 20)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 10)),
            supply_request_date: Some(d(2025, 2, 12)),
            week47_forecast: Some(d(2025, 1, 28)),
            delay_category: Some("주의".to_string()),
            ..base(
                "PO-2579-0002", "대형", "SNRI SCHUF", "2579",
                "2579AVGTKWCG1040", "GLOBE VALVE 5K-125A", "기계",
                90, d(2024, 11, 5), Some(d(2025, 1, 25)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 10)),
            revised_pnd: Some(d(2025, 2, 21)),
            pnd_changed: true,
            supply_request_date: Some(d(2025, 2, 20)),
            week47_forecast: Some(d(2025, 2, 10)),
            week48_forecast: Some(d(2025, 2, 14)),
            ..base(
                "PO-2582-0003", "일반", "FUJI TRADING CO.", "2582",
                "2582AVEJBUBA2310", "BUTTERFLY VALVE 10K-300A", "배관",
                100, d(2024, 10, 10), Some(d(2025, 2, 15)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 5)),
            supply_request_date: Some(d(2025, 3, 1)),
            delay_category: Some("지연".to_string()),
            ..base(
                "PO-2582-0004", "일반", "FUJI TRADING CO.", "2582",
                "2582AVEJBUBA2320", "PIPE SPOOL SUS316L", "배관",
                75, d(2024, 12, 1), Some(d(2025, 2, 20)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 15)),
            supply_request_date: Some(d(2025, 1, 30)),
            week47_forecast: Some(d(2025, 2, 5)),
            week48_forecast: Some(d(2025, 2, 12)),
            week49_forecast: Some(d(2025, 2, 20)),
            delay_category: Some("지연".to_string()),
            shortage_category: Some("결품".to_string()),
            remarks: Some("긴급 - 생산1팀 김철수 요청".to_string()),
            ..base(
                "PO-2583-0005", "대형", "한국마린텍", "2583",
                "2583AVMHMAIN0010", "MAIN ENGINE SPARE KIT", "기계",
                150, d(2024, 9, 1), Some(d(2025, 2, 1)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 1)),
            remarks: Some("긴급 자재 - 즉시 처리 필요".to_string()),
            ..base(
                "PO-2583-0006", "대형", "한국마린텍", "2583",
                "2583AVMHHATC0020", "HATCH COVER HYD CYLINDER", "기계",
                60, d(2024, 12, 20), Some(d(2025, 2, 25)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 20)),
            supply_request_date: Some(d(2025, 2, 11)),
            week47_forecast: Some(d(2025, 2, 8)),
            week48_forecast: Some(d(2025, 2, 15)),
            week49_forecast: Some(d(2025, 2, 24)),
            delay_category: Some("지연".to_string()),
            ..base(
                "PO-2539-0007", "일반", "대양밸브공업", "2539",
                "2539AVRHAWCG4150-M", "AIR WINCH CONTROL GEAR", "전장",
                110, d(2024, 10, 25), Some(d(2025, 2, 10)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 10)),
            supply_request_date: Some(d(2025, 3, 5)),
            ..base(
                "PO-2539-0008", "일반", "대양밸브공업", "2539",
                "2539AVRHBLST0080", "BALLAST PUMP MECH SEAL", "기계",
                45, d(2025, 1, 5), Some(d(2025, 2, 28)),
            )
        },
        // 계약납기일 누락 레코드: STEP 2에서 unknown으로 분류된다
        PurchaseOrder {
            pnd: Some(d(2025, 3, 1)),
            supply_request_date: Some(d(2025, 2, 28)),
            ..base(
                "PO-2579-0009", "대형", "세진선박기자재", "2579",
                "2579AVELCBLE0090", "POWER CABLE 0.6/1KV", "전장",
                80, d(2024, 11, 15), None,
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 15)),
            revised_pnd: Some(d(2025, 3, 22)),
            pnd_changed: true,
            supply_request_date: Some(d(2025, 3, 12)),
            week47_forecast: Some(d(2025, 3, 2)),
            week48_forecast: Some(d(2025, 3, 6)),
            delay_category: Some("주의".to_string()),
            ..base(
                "PO-2582-0010", "일반", "세진선박기자재", "2582",
                "2582AVELSWBD0100", "SWITCHBOARD PANEL 440V", "전장",
                95, d(2024, 11, 20), Some(d(2025, 3, 5)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 10)),
            supply_request_date: Some(d(2025, 1, 28)),
            week47_forecast: Some(d(2025, 1, 28)),
            week48_forecast: Some(d(2025, 2, 6)),
            week49_forecast: Some(d(2025, 2, 14)),
            delay_category: Some("지연".to_string()),
            shortage_category: Some("결품".to_string()),
            remarks: Some("긴급".to_string()),
            ..base(
                "PO-2583-0011", "대형", "MARINE HYDRAULICS KOREA", "2583",
                "2583AVHYPUMP0110", "HYD POWER PACK 37KW", "기계",
                130, d(2024, 9, 10), Some(d(2025, 1, 30)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 25)),
            supply_request_date: Some(d(2025, 2, 22)),
            week47_forecast: Some(d(2025, 2, 12)),
            ..base(
                "PO-2579-0012", "대형", "MARINE HYDRAULICS KOREA", "2579",
                "2579AVHYVALV0120", "PROPORTIONAL VALVE ASSY", "기계",
                70, d(2024, 12, 10), Some(d(2025, 2, 15)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 20)),
            revised_pnd: Some(d(2025, 3, 15)),
            pnd_changed: true,
            supply_request_date: Some(d(2025, 3, 18)),
            ..base(
                "PO-2539-0013", "일반", "광명조선기자재", "2539",
                "2539AVOUTF0130", "ACCOMMODATION LADDER", "의장",
                55, d(2025, 1, 10), Some(d(2025, 3, 10)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 2, 28)),
            supply_request_date: Some(d(2025, 2, 20)),
            week47_forecast: Some(d(2025, 2, 16)),
            week48_forecast: Some(d(2025, 2, 21)),
            delay_category: Some("주의".to_string()),
            ..base(
                "PO-2582-0014", "일반", "광명조선기자재", "2582",
                "2582AVOUTF0140", "MOORING FITTING SET", "의장",
                65, d(2024, 12, 15), Some(d(2025, 2, 18)),
            )
        },
        PurchaseOrder {
            pnd: Some(d(2025, 3, 2)),
            supply_request_date: Some(d(2025, 2, 27)),
            week48_forecast: Some(d(2025, 2, 24)),
            delay_category: Some("지연".to_string()),
            ..base(
                "PO-2579-0015", "대형", "SNRI SCHUF", "2579",
                "2579AVGTKWCG1050", "CHECK VALVE 5K-80A", "기계",
                85, d(2024, 11, 25), Some(d(2025, 2, 20)),
            )
        },
        // 보급요청일 누락 레코드: STEP 5에서 unknown으로 분류된다
        PurchaseOrder {
            pnd: Some(d(2025, 2, 22)),
            week47_forecast: Some(d(2025, 2, 10)),
            remarks: Some("긴급 검토 요청 - 호선 2583".to_string()),
            ..base(
                "PO-2583-0016", "대형", "FUJI TRADING CO.", "2583",
                "2583AVNAVEQ0160", "RADAR SCANNER UNIT", "전장",
                140, d(2024, 9, 25), Some(d(2025, 2, 12)),
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let dataset = PoDataset::demo();
        assert_eq!(dataset.len(), 16);

        // 공급사 7개, 최초 등장 순서 유지
        let suppliers = dataset.suppliers();
        assert_eq!(suppliers.len(), 7);
        assert_eq!(suppliers[0], "SNRI SCHUF");
        assert_eq!(suppliers[1], "FUJI TRADING CO.");
        assert_eq!(suppliers[6], "광명조선기자재");
    }

    #[test]
    fn test_demo_dataset_signal_coverage() {
        let dataset = PoDataset::demo();
        let records = dataset.records();

        // 각 단계가 의미 있는 결과를 내도록 신호가 분포되어 있어야 한다
        assert_eq!(records.iter().filter(|r| r.is_delayed()).count(), 6);
        assert_eq!(records.iter().filter(|r| r.is_caution()).count(), 3);
        assert_eq!(records.iter().filter(|r| r.is_shortage()).count(), 2);
        assert_eq!(records.iter().filter(|r| r.has_pnd_change()).count(), 3);
        assert_eq!(records.iter().filter(|r| r.is_urgent()).count(), 4);
        assert_eq!(records.iter().filter(|r| r.has_forecast()).count(), 11);
        assert_eq!(
            records.iter().filter(|r| r.contract_date.is_none()).count(),
            1
        );
        assert_eq!(
            records
                .iter()
                .filter(|r| r.supply_request_date.is_none())
                .count(),
            2
        );
    }

    #[test]
    fn test_records_of_supplier() {
        let dataset = PoDataset::demo();
        let snri = dataset.records_of_supplier("SNRI SCHUF");
        assert_eq!(snri.len(), 3);
        assert!(snri.iter().all(|r| r.supplier == "SNRI SCHUF"));
        assert!(dataset.records_of_supplier("없는 공급사").is_empty());
    }
}
