// ==========================================
// 成衣生产系统 - 决策核心库
// ==========================================
// 技术栈: Rust (纯计算核心, 无存储/无界面)
// 系统定位: 生产流转与质检分级的决策支持 (人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "id");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CutPlanStatus, FabricGrade, ProductionStage};

// 领域实体
pub use domain::{
    DefectImportBatch, DefectImportResult, DqLevel, DqReport, DqSummary, DqViolation,
    FabricDefectEntry, FabricInspection, GradingResult, StatusPalette, DEFAULT_PASS_THRESHOLD,
};

// 引擎
pub use engine::{
    CutPlanFlowEngine, FlowError, FlowResult, GradingEngine, StageFlowEngine, YARDS_PER_METER,
};

// 导入器
pub use importer::{DefectSheetImporter, ImportError};

// 配置
pub use config::{ConfigManager, QualityProfile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "成衣生产决策核心";

// ==========================================
// 预编译检查
// ==========================================
