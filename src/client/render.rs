// ==========================================
// SCM 납기관리 AI Agent - HTML 프래그먼트 렌더러
// ==========================================
// 캐시된 단계 응답으로부터 고정 템플릿의 HTML 조각을 만든다.
// DOM 접근 없이 문자열만 생성하며, 뷰모델의 불변 참조만 받는다.
// ==========================================

use serde_json::Value;

use crate::client::view_model::{DashboardViewModel, STEPS, STEP_COUNT};
use crate::domain::StepState;

/// 상태 배지 조각
pub fn status_badge(status: &str) -> &'static str {
    match status {
        "danger" => r#"<span class="badge badge-danger">위험</span>"#,
        "warning" => r#"<span class="badge badge-warning">주의</span>"#,
        "normal" => r#"<span class="badge badge-normal">정상</span>"#,
        _ => r#"<span class="badge badge-unknown">미정</span>"#,
    }
}

/// 단계 진행 표시줄 렌더링
pub fn render_stepper(vm: &DashboardViewModel) -> String {
    let mut html = String::from(r#"<ol class="stepper">"#);
    for (index, step) in STEPS.iter().enumerate() {
        let state = vm
            .state_of(index)
            .unwrap_or(StepState::Pending)
            .to_string();
        html.push_str(&format!(
            r#"<li class="step step-{state}" data-step="{id}">{name}</li>"#,
            state = state,
            id = step.id,
            name = step.name,
        ));
    }
    html.push_str("</ol>");
    html
}

/// 단계 본문 렌더링
///
/// 완료된 단계는 캐시된 응답의 summary로 요약 카드를 그리고,
/// 그 외 상태는 상태 안내 조각을 돌려준다.
pub fn render_step(vm: &DashboardViewModel, index: usize) -> String {
    if index >= STEP_COUNT {
        return String::new();
    }

    match vm.state_of(index) {
        Some(StepState::Completed) => match vm.payload_of(index) {
            Some(payload) => step_body(index, payload),
            None => placeholder("데이터 없음"),
        },
        Some(StepState::Processing) => placeholder("처리 중..."),
        Some(StepState::Error) => {
            r#"<div class="step-error">단계 처리 실패 - 자동 실행이 중단되었습니다</div>"#
                .to_string()
        }
        _ => placeholder("대기 중"),
    }
}

fn placeholder(message: &str) -> String {
    format!(r#"<div class="step-placeholder">{message}</div>"#)
}

fn count(value: &Value, path: &[&str]) -> u64 {
    let mut current = value;
    for key in path {
        current = &current[*key];
    }
    current.as_u64().unwrap_or(0)
}

fn step_body(index: usize, payload: &Value) -> String {
    let step = &STEPS[index];
    let summary = &payload["summary"];

    let cards = match index {
        // STEP 1: 전체/공급사 건수
        0 => format!(
            r#"<div class="card">전체 {total}건</div><div class="card">공급사 {suppliers}개</div>"#,
            total = count(summary, &["totalCount"]),
            suppliers = count(summary, &["supplierCount"]),
        ),
        // STEP 2/5: 상태 분포
        1 | 4 => format!(
            r#"<div class="card card-danger">위험 {danger}</div><div class="card card-warning">주의 {warning}</div><div class="card card-normal">정상 {normal}</div><div class="card card-unknown">미정 {unknown}</div>"#,
            danger = count(summary, &["danger"]),
            warning = count(summary, &["warning"]),
            normal = count(summary, &["normal"]),
            unknown = count(summary, &["unknown"]),
        ),
        // STEP 3: 변경 방향
        2 => format!(
            r#"<div class="card">변경 {total}건</div><div class="card">앞당김 {earlier}</div><div class="card">미뤄짐 {later}</div>"#,
            total = count(summary, &["totalChanges"]),
            earlier = count(summary, &["earlier"]),
            later = count(summary, &["later"]),
        ),
        // STEP 4: 보급 요청
        3 => format!(
            r#"<div class="card">요청 {with}건</div><div class="card">미요청 {without}건</div><div class="card card-danger">긴급 {urgent}건</div>"#,
            with = count(summary, &["withRequest"]),
            without = count(summary, &["withoutRequest"]),
            urgent = count(summary, &["urgent"]),
        ),
        // STEP 6: 발송 진행률
        5 => {
            let sent = count(summary, &["sent"]);
            let total = count(summary, &["totalSuppliers"]);
            format!(
                r#"<div class="card">발송 완료 {sent}/{total} 공급사</div>"#,
                sent = sent,
                total = total,
            )
        }
        // STEP 7: 제출률
        6 => format!(
            r#"<div class="card">제출률 {rate}%</div><div class="card">미제출 {pending}개 공급사</div>"#,
            rate = count(summary, &["submissionRate"]),
            pending = count(summary, &["notSubmitted"]),
        ),
        // STEP 8: 위험 분포
        _ => format!(
            r#"<div class="card card-danger">지연 {delayed}</div><div class="card card-warning">주의 {caution}</div><div class="card card-danger">결품 {shortage}</div><div class="card">일정 변동 {changes}</div>"#,
            delayed = count(summary, &["delayed"]),
            caution = count(summary, &["caution"]),
            shortage = count(summary, &["shortage"]),
            changes = count(summary, &["withScheduleChanges"]),
        ),
    };

    format!(
        r#"<section class="step-panel" data-step="{id}"><h2>STEP {id}: {name}</h2><div class="cards">{cards}</div></section>"#,
        id = step.id,
        name = step.name,
        cards = cards,
    )
}
