// ==========================================
// SCM 납기관리 AI Agent - 도메인 계층
// ==========================================
// 엔티티와 공용 타입 정의
// ==========================================

pub mod alert;
pub mod purchase_order;
pub mod types;

pub use alert::Alert;
pub use purchase_order::PurchaseOrder;
pub use types::{
    AlertKind, ChangeDirection, DeliveryStatus, MailStatus, RiskGrade, StepState,
};
