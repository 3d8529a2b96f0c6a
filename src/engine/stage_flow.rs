// ==========================================
// 成衣生产系统 - 生产阶段流转引擎
// ==========================================
// 依据: 六阶段生产流水线 (裁剪→缝制→后整→质检→包装→完成)
// 职责: 合法流转判定、返工边判定、进度计算的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作; 阶段集合与边表编译期固定
// ==========================================

use crate::domain::types::ProductionStage;
use crate::engine::error::{FlowError, FlowResult};

// ==========================================
// StageEdge - 阶段流转边
// ==========================================
// 每个阶段至多 1 条正向边 + 至多 1 条返工边;
// 全部合法转换由此表唯一定义, 便于审计
#[derive(Debug, Clone, Copy)]
pub struct StageEdge {
    pub stage: ProductionStage,               // 起始阶段
    pub forward: Option<ProductionStage>,     // 正向边 (完成阶段无)
    pub rework: Option<ProductionStage>,      // 返工边 (仅后整/质检有)
}

/// 阶段流转边表, 行序与 `ProductionStage::ALL` 严格一致
pub static STAGE_EDGES: [StageEdge; 6] = [
    StageEdge {
        stage: ProductionStage::Cutting,
        forward: Some(ProductionStage::Sewing),
        rework: None,
    },
    StageEdge {
        stage: ProductionStage::Sewing,
        forward: Some(ProductionStage::Finishing),
        rework: None,
    },
    StageEdge {
        stage: ProductionStage::Finishing,
        forward: Some(ProductionStage::Qc),
        rework: Some(ProductionStage::Sewing), // 后整返工 → 缝制
    },
    StageEdge {
        stage: ProductionStage::Qc,
        forward: Some(ProductionStage::Packing),
        rework: Some(ProductionStage::Finishing), // 质检不合格 → 后整
    },
    StageEdge {
        stage: ProductionStage::Packing,
        forward: Some(ProductionStage::Done),
        rework: None,
    },
    StageEdge {
        stage: ProductionStage::Done,
        forward: None,
        rework: None,
    },
];

// ==========================================
// StageFlowEngine - 纯函数工具类
// ==========================================
pub struct StageFlowEngine;

impl StageFlowEngine {
    /// 查边表 (行序与枚举序一致, 直接按 index 取)
    fn edge(stage: ProductionStage) -> &'static StageEdge {
        &STAGE_EDGES[stage.index()]
    }

    /// 正向下一阶段
    ///
    /// # 规则
    /// - 流水线顺序推进一格; 完成阶段无下一步 → None
    pub fn next_stage(stage: ProductionStage) -> Option<ProductionStage> {
        Self::edge(stage).forward
    }

    /// 返工目标阶段
    ///
    /// # 规则
    /// - 质检 → 后整 (质检不合格返修)
    /// - 后整 → 缝制 (后整发现缝制缺陷)
    /// - 其余阶段 (含完成) → None
    pub fn rework_stage(stage: ProductionStage) -> Option<ProductionStage> {
        Self::edge(stage).rework
    }

    /// 枚举当前阶段的全部合法去向
    ///
    /// # 返回
    /// - 正向边在前、返工边在后; 调用方按集合语义使用
    /// - 完成阶段返回空向量
    pub fn allowed_transitions(stage: ProductionStage) -> Vec<ProductionStage> {
        let edge = Self::edge(stage);
        let mut targets = Vec::with_capacity(2);
        if let Some(next) = edge.forward {
            targets.push(next);
        }
        if let Some(rework) = edge.rework {
            targets.push(rework);
        }
        targets
    }

    /// 校验一次转换请求
    ///
    /// # 规则
    /// - to ∈ allowed_transitions(from) → Ok(())
    /// - 否则 → Err(InvalidStageTransition), 错误消息带双方本地化标签
    ///
    /// # 说明
    /// - 原地转换 (from == to) 不在边表内, 同样拒绝
    pub fn assert_transition(from: ProductionStage, to: ProductionStage) -> FlowResult<()> {
        let edge = Self::edge(from);
        if edge.forward == Some(to) || edge.rework == Some(to) {
            Ok(())
        } else {
            Err(FlowError::InvalidStageTransition { from, to })
        }
    }

    /// 阶段序号 (裁剪=0 … 完成=5)
    pub fn stage_index(stage: ProductionStage) -> usize {
        stage.index()
    }

    /// 阶段进度百分比
    ///
    /// # 规则
    /// - round((index + 1) / 6 × 100), 四舍五入
    /// - 全表: 17 / 33 / 50 / 67 / 83 / 100
    pub fn stage_progress(stage: ProductionStage) -> u8 {
        let total = ProductionStage::ALL.len() as f64;
        (((stage.index() + 1) as f64 / total) * 100.0).round() as u8
    }

    /// 是否终态 (仅完成阶段)
    pub fn is_terminal(stage: ProductionStage) -> bool {
        Self::edge(stage).forward.is_none() && Self::edge(stage).rework.is_none()
    }

    /// 判定一次转换是否为返工边
    pub fn is_rework(from: ProductionStage, to: ProductionStage) -> bool {
        Self::edge(from).rework == Some(to)
    }
}
