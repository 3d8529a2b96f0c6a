use serde::{Deserialize, Serialize};

use crate::domain::inspection::DEFAULT_PASS_THRESHOLD;

/// 质检参数配置（持久化对象）
///
/// 存储位置：`<config_dir>/garment-mes-core/quality_profile.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfile {
    /// 合格线（分/百码），默认 28.0（与 C 级上限一致）
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    /// 标签与错误消息语言（"id" / "zh-CN" / "en"）
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_pass_threshold() -> f64 {
    DEFAULT_PASS_THRESHOLD
}

fn default_locale() -> String {
    "id".to_string()
}

impl Default for QualityProfile {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            locale: default_locale(),
        }
    }
}
