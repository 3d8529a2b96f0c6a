// ==========================================
// 成衣生产系统 - 配置管理器
// ==========================================
// 职责: 质检参数配置的定位、加载与应用
// 存储: JSON 文件 (<config_dir>/garment-mes-core/quality_profile.json)
// 容错: 文件缺失 → 默认配置; 字段缺失 → 字段默认; JSON 损坏 → 报错
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::quality_profile::QualityProfile;
use crate::domain::inspection::DEFAULT_PASS_THRESHOLD;

/// 配置路径环境变量 (覆盖默认位置)
pub const ENV_CONFIG_PATH: &str = "GARMENT_MES_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// # 返回
    /// - Some(PathBuf): `<config_dir>/garment-mes-core/quality_profile.json`
    /// - None: 当前平台无法解析用户配置目录
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("garment-mes-core").join("quality_profile.json"))
    }

    /// 从指定路径加载配置
    ///
    /// # 规则
    /// - 文件不存在 → 默认配置 (warn, 不报错)
    /// - 字段缺失 → serde 字段默认
    /// - JSON 损坏 → Err (配置写错应当暴露, 而非静默吞掉)
    /// - 合格线非正数 → 回退默认值 (warn)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<QualityProfile> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "配置文件不存在, 使用默认配置");
            return Ok(QualityProfile::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("配置文件读取失败: {}", path.display()))?;
        let profile: QualityProfile = serde_json::from_str(&raw)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;

        info!(
            path = %path.display(),
            pass_threshold = profile.pass_threshold,
            locale = %profile.locale,
            "配置加载完成"
        );
        Ok(Self::sanitize(profile))
    }

    /// 加载配置 (环境变量路径优先, 其次默认路径)
    pub fn load_default() -> Result<QualityProfile> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) => Self::load_from(path),
            None => {
                warn!("无法解析用户配置目录, 使用默认配置");
                Ok(QualityProfile::default())
            }
        }
    }

    /// 应用配置 (设置全局语言)
    pub fn apply(profile: &QualityProfile) {
        crate::i18n::set_locale(&profile.locale);
    }

    /// 配置值兜底修正
    fn sanitize(mut profile: QualityProfile) -> QualityProfile {
        if !(profile.pass_threshold > 0.0) {
            warn!(
                pass_threshold = profile.pass_threshold,
                "合格线非正数, 回退默认值"
            );
            profile.pass_threshold = DEFAULT_PASS_THRESHOLD;
        }
        profile
    }
}
