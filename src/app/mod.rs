// ==========================================
// SCM 납기관리 AI Agent - 애플리케이션 계층
// ==========================================
// HTTP 와이어링: 상태, 라우터, 핸들러
// ==========================================

pub mod handlers;
pub mod router;
pub mod state;

pub use router::{build_router, API_ENDPOINTS};
pub use state::AppState;
