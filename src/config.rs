// ==========================================
// SCM 납기관리 AI Agent - 서버 설정
// ==========================================
// 환경변수는 프로세스 포트뿐이다 (원천 서버와 동일).
// ==========================================

use std::net::SocketAddr;

/// 기본 포트
pub const DEFAULT_PORT: u16 = 3000;

/// 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인드 호스트
    pub host: [u8; 4],
    /// 리슨 포트
    pub port: u16,
    /// 정적 번들 디렉터리
    pub static_dir: String,
}

impl ServerConfig {
    /// 환경변수에서 설정 읽기
    ///
    /// - `PORT`: 리슨 포트 (기본 3000, 파싱 실패 시 기본값)
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: [0, 0, 0, 0],
            port,
            static_dir: "public/static".to_string(),
        }
    }

    /// 바인드 주소
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [0, 0, 0, 0],
            port: DEFAULT_PORT,
            static_dir: "public/static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().port(), 3000);
    }
}
