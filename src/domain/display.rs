// ==========================================
// 成衣生产系统 - 展示配色表
// ==========================================
// 职责: 阶段/状态的静态配色数据, 供展示层读取
// 红线: 仅数据, 不含任何渲染逻辑; 编译期常量, 运行期只读
// ==========================================

use crate::domain::types::{CutPlanStatus, ProductionStage};

// ==========================================
// StatusPalette - 配色三元组
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    pub background: &'static str, // 背景色 (hex)
    pub text: &'static str,       // 文字色 (hex)
    pub accent: &'static str,     // 强调色 (hex)
}

// ==========================================
// 生产阶段配色 (下标 = ProductionStage::index)
// ==========================================
pub const STAGE_PALETTES: [StatusPalette; 6] = [
    // CUTTING - 琥珀
    StatusPalette {
        background: "#FEF3C7",
        text: "#92400E",
        accent: "#F59E0B",
    },
    // SEWING - 蓝
    StatusPalette {
        background: "#DBEAFE",
        text: "#1E40AF",
        accent: "#3B82F6",
    },
    // FINISHING - 紫
    StatusPalette {
        background: "#EDE9FE",
        text: "#5B21B6",
        accent: "#8B5CF6",
    },
    // QC - 橙
    StatusPalette {
        background: "#FFEDD5",
        text: "#9A3412",
        accent: "#F97316",
    },
    // PACKING - 青
    StatusPalette {
        background: "#CCFBF1",
        text: "#115E59",
        accent: "#14B8A6",
    },
    // DONE - 绿
    StatusPalette {
        background: "#D1FAE5",
        text: "#065F46",
        accent: "#10B981",
    },
];

// ==========================================
// 裁剪计划状态配色 (下标与 CutPlanStatus::ALL 对齐)
// ==========================================
pub const CUT_PLAN_PALETTES: [StatusPalette; 4] = [
    // DRAFT - 灰
    StatusPalette {
        background: "#F1F5F9",
        text: "#334155",
        accent: "#64748B",
    },
    // IN_PROGRESS - 蓝
    StatusPalette {
        background: "#DBEAFE",
        text: "#1E40AF",
        accent: "#3B82F6",
    },
    // COMPLETED - 绿
    StatusPalette {
        background: "#D1FAE5",
        text: "#065F46",
        accent: "#10B981",
    },
    // CANCELLED - 红
    StatusPalette {
        background: "#FEE2E2",
        text: "#991B1B",
        accent: "#EF4444",
    },
];

impl ProductionStage {
    /// 阶段配色
    pub fn palette(&self) -> &'static StatusPalette {
        &STAGE_PALETTES[self.index()]
    }
}

impl CutPlanStatus {
    /// 状态配色
    pub fn palette(&self) -> &'static StatusPalette {
        &CUT_PLAN_PALETTES[self.index()]
    }
}
