// ==========================================
// 成衣生产系统 - 流转引擎错误类型
// ==========================================
// 职责: 非法状态转换的唯一失败出口
// 红线: 错误消息直接面向用户, 须使用本地化标签而非枚举标识符
// ==========================================

use thiserror::Error;

use crate::domain::types::{CutPlanStatus, ProductionStage};
use crate::i18n;

/// 流转引擎统一结果类型
pub type FlowResult<T> = Result<T, FlowError>;

// ==========================================
// FlowError - 流转错误
// ==========================================
// 查询类操作永不失败; 仅显式执行非法转换时返回此错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// 生产阶段转换非法 (如 裁剪 → 完成 跳段)
    #[error("{}", stage_transition_message(.from, .to))]
    InvalidStageTransition {
        from: ProductionStage,
        to: ProductionStage,
    },

    /// 裁剪计划状态转换非法 (如 已完成 → 裁剪中 回退)
    #[error("{}", cut_plan_transition_message(.from, .to))]
    InvalidCutPlanTransition {
        from: CutPlanStatus,
        to: CutPlanStatus,
    },
}

/// 生成阶段转换错误消息 (当前语言)
fn stage_transition_message(from: &ProductionStage, to: &ProductionStage) -> String {
    i18n::t_with_args(
        "flow.invalid_stage_transition",
        &[("from", &from.label()), ("to", &to.label())],
    )
}

/// 生成裁剪计划转换错误消息 (当前语言)
fn cut_plan_transition_message(from: &CutPlanStatus, to: &CutPlanStatus) -> String {
    i18n::t_with_args(
        "flow.invalid_cut_plan_transition",
        &[("from", &from.label()), ("to", &to.label())],
    )
}
