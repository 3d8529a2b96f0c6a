// ==========================================
// 成衣生产系统 - 裁剪计划生命周期引擎
// ==========================================
// 依据: 裁剪计划状态机 (草稿→裁剪中→已完成, 非终态可取消)
// 职责: 状态机合法转换判定、终态与可编辑性查询的纯逻辑
// 红线: 无状态、无副作用; 无返工类回退边 (与生产阶段流转不同)
// ==========================================

use crate::domain::types::CutPlanStatus;
use crate::engine::error::{FlowError, FlowResult};

// ==========================================
// CutPlanEdge - 裁剪计划状态边
// ==========================================
// next 为空即终态; 可编辑性与状态绑定, 同表维护
#[derive(Debug, Clone, Copy)]
pub struct CutPlanEdge {
    pub status: CutPlanStatus,            // 起始状态
    pub next: &'static [CutPlanStatus],   // 合法去向 (有序)
    pub editable: bool,                   // 计划内容是否可修改
}

/// 裁剪计划状态边表, 行序与 `CutPlanStatus::ALL` 严格一致
pub static CUT_PLAN_EDGES: [CutPlanEdge; 4] = [
    CutPlanEdge {
        status: CutPlanStatus::Draft,
        next: &[CutPlanStatus::InProgress, CutPlanStatus::Cancelled],
        editable: true, // 仅草稿可改排料与数量
    },
    CutPlanEdge {
        status: CutPlanStatus::InProgress,
        next: &[CutPlanStatus::Completed, CutPlanStatus::Cancelled],
        editable: false,
    },
    CutPlanEdge {
        status: CutPlanStatus::Completed,
        next: &[],
        editable: false,
    },
    CutPlanEdge {
        status: CutPlanStatus::Cancelled,
        next: &[],
        editable: false,
    },
];

// ==========================================
// CutPlanFlowEngine - 纯函数工具类
// ==========================================
pub struct CutPlanFlowEngine;

impl CutPlanFlowEngine {
    /// 查边表 (行序与枚举序一致, 直接按 index 取)
    fn edge(status: CutPlanStatus) -> &'static CutPlanEdge {
        &CUT_PLAN_EDGES[status.index()]
    }

    /// 枚举当前状态的全部合法去向 (表序)
    pub fn next_statuses(status: CutPlanStatus) -> Vec<CutPlanStatus> {
        Self::edge(status).next.to_vec()
    }

    /// 校验一次状态变更请求
    ///
    /// # 规则
    /// - to ∈ next_statuses(from) → Ok(())
    /// - 否则 → Err(InvalidCutPlanTransition), 错误消息带双方本地化标签
    pub fn assert_transition(from: CutPlanStatus, to: CutPlanStatus) -> FlowResult<()> {
        if Self::edge(from).next.contains(&to) {
            Ok(())
        } else {
            Err(FlowError::InvalidCutPlanTransition { from, to })
        }
    }

    /// 是否终态 (已完成 / 已取消)
    pub fn is_terminal(status: CutPlanStatus) -> bool {
        Self::edge(status).next.is_empty()
    }

    /// 计划内容是否可编辑 (仅草稿)
    pub fn is_editable(status: CutPlanStatus) -> bool {
        Self::edge(status).editable
    }
}
