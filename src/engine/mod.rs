// ==========================================
// 成衣生产系统 - 决策引擎模块
// ==========================================
// 职责: 阶段流转 / 计划生命周期 / 验布分级 三大纯函数引擎
// 红线: 无 I/O, 无持久化, 仅依赖 domain 层
// ==========================================

pub mod cut_plan_flow;
pub mod error;
pub mod grading;
pub mod stage_flow;

// 重新导出引擎与边表
pub use cut_plan_flow::{CutPlanEdge, CutPlanFlowEngine, CUT_PLAN_EDGES};
pub use error::{FlowError, FlowResult};
pub use grading::{GradingEngine, YARDS_PER_METER};
pub use stage_flow::{StageEdge, StageFlowEngine, STAGE_EDGES};
