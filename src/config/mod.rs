// ==========================================
// 成衣生产系统 - 配置模块
// ==========================================
// 职责: 质检参数配置 (合格线/语言) 的结构定义与加载
// ==========================================

pub mod config_manager;
pub mod quality_profile;

pub use config_manager::{ConfigManager, ENV_CONFIG_PATH};
pub use quality_profile::QualityProfile;
