//! 설정 로드.
//!
//! 우선순위: 기본값 → 설정 파일(TOML) → `GESTORLY_*` 환경변수 → `GESTORLY_BFF_URL`
//! → CLI 인자(`--server`). 검증은 모든 덮어쓰기가 끝난 뒤 한 번만 한다.

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use gestorly_core::config::{AppConfig, DEFAULT_BASE_URL};
use gestorly_core::error::CoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 환경변수 접두사 (`GESTORLY_SERVER__BASE_URL` 등)
pub const ENV_PREFIX: &str = "GESTORLY";

/// BFF URL 단축 환경변수
pub const BFF_URL_ENV: &str = "GESTORLY_BFF_URL";

/// 세션 토큰 환경변수
pub const TOKEN_ENV: &str = "GESTORLY_TOKEN";

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.toml";

/// 플랫폼별 기본 설정 파일 경로
///
/// - macOS: `~/Library/Application Support/app.gestorly.demo/config.toml`
/// - Windows: `%APPDATA%\gestorly\demo\config\config.toml`
/// - Linux: `~/.config/demo/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("app", "gestorly", "demo").map(|p| p.config_dir().join(CONFIG_FILE_NAME))
}

/// 프로세스 환경변수로 설정 로드
///
/// `path`를 명시하면 파일이 반드시 있어야 하고, 없으면 기본 경로를 선택적으로 읽는다.
/// `server`는 `--server` 인자이며 다른 모든 출처보다 우선한다.
pub fn load(path: Option<&Path>, server: Option<&str>) -> Result<AppConfig, CoreError> {
    load_with_env(path, server, None)
}

/// 환경변수 맵을 직접 지정하여 설정 로드 (`None`이면 프로세스 환경)
pub fn load_with_env(
    path: Option<&Path>,
    server: Option<&str>,
    env: Option<HashMap<String, String>>,
) -> Result<AppConfig, CoreError> {
    let bff_url = match &env {
        Some(vars) => vars.get(BFF_URL_ENV).cloned(),
        None => std::env::var(BFF_URL_ENV).ok(),
    };

    let mut builder = Config::builder()
        .set_default("server.base_url", DEFAULT_BASE_URL)
        .map_err(config_error)?;

    let (file, required) = match path {
        Some(p) => (Some(p.to_path_buf()), true),
        None => (default_config_path(), false),
    };
    if let Some(file) = file {
        debug!("설정 파일: {} (필수: {required})", file.display());
        builder = builder.add_source(File::from(file).required(required));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(env),
    );

    let base_url_override = server
        .map(str::to_string)
        .or(bff_url)
        .filter(|u| !u.trim().is_empty());
    if let Some(url) = base_url_override {
        builder = builder
            .set_override("server.base_url", url)
            .map_err(config_error)?;
    }

    let config: AppConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(config_error)?;
    config.validate()?;

    Ok(config)
}

fn config_error(e: ConfigError) -> CoreError {
    CoreError::Config(e.to_string())
}
