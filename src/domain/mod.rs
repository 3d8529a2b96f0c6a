// ==========================================
// 成衣生产系统 - 领域模型模块
// ==========================================
// 职责: 生产阶段/裁剪计划/验布分级的核心类型定义
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod display;
pub mod inspection;
pub mod types;

// 重新导出常用类型
pub use display::{StatusPalette, CUT_PLAN_PALETTES, STAGE_PALETTES};
pub use inspection::{
    DefectImportBatch, DefectImportResult, DqLevel, DqReport, DqSummary, DqViolation,
    FabricDefectEntry, FabricInspection, GradingResult, RawDefectRecord, DEFAULT_PASS_THRESHOLD,
};
pub use types::{CutPlanStatus, FabricGrade, ProductionStage};
