// ==========================================
// 成衣生产系统 - 领域类型定义
// ==========================================
// 职责: 生产阶段/裁剪计划状态/面料等级的封闭枚举
// 红线: 阶段顺序固定且全序, 运行期不可变更
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 生产阶段 (Production Stage)
// ==========================================
// 工艺路线: 裁剪 → 缝制 → 后整 → 质检 → 包装 → 完成
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionStage {
    Cutting,   // 裁剪
    Sewing,    // 缝制
    Finishing, // 后整
    Qc,        // 质检
    Packing,   // 包装
    Done,      // 完成(终态)
}

impl fmt::Display for ProductionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProductionStage {
    /// 全部阶段, 按工艺路线顺序
    pub const ALL: [ProductionStage; 6] = [
        ProductionStage::Cutting,
        ProductionStage::Sewing,
        ProductionStage::Finishing,
        ProductionStage::Qc,
        ProductionStage::Packing,
        ProductionStage::Done,
    ];

    /// 阶段在工艺路线中的位置 (0 起)
    pub fn index(&self) -> usize {
        match self {
            ProductionStage::Cutting => 0,
            ProductionStage::Sewing => 1,
            ProductionStage::Finishing => 2,
            ProductionStage::Qc => 3,
            ProductionStage::Packing => 4,
            ProductionStage::Done => 5,
        }
    }

    /// 从字符串解析阶段
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CUTTING" => Some(ProductionStage::Cutting),
            "SEWING" => Some(ProductionStage::Sewing),
            "FINISHING" => Some(ProductionStage::Finishing),
            "QC" => Some(ProductionStage::Qc),
            "PACKING" => Some(ProductionStage::Packing),
            "DONE" => Some(ProductionStage::Done),
            _ => None,
        }
    }

    /// 转换为存储字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionStage::Cutting => "CUTTING",
            ProductionStage::Sewing => "SEWING",
            ProductionStage::Finishing => "FINISHING",
            ProductionStage::Qc => "QC",
            ProductionStage::Packing => "PACKING",
            ProductionStage::Done => "DONE",
        }
    }

    /// 阶段显示名称 (按当前语言, 词条见 locales/)
    pub fn label(&self) -> String {
        let key = match self {
            ProductionStage::Cutting => "stage.cutting",
            ProductionStage::Sewing => "stage.sewing",
            ProductionStage::Finishing => "stage.finishing",
            ProductionStage::Qc => "stage.qc",
            ProductionStage::Packing => "stage.packing",
            ProductionStage::Done => "stage.done",
        };
        crate::i18n::t(key)
    }
}

// ==========================================
// 裁剪计划状态 (Cut Plan Status)
// ==========================================
// 生命周期: 草稿 → 裁剪中 → 已完成, 非终态可取消
// 红线: 无返工式回退边, 终态不可再变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutPlanStatus {
    Draft,      // 草稿(唯一可编辑状态)
    InProgress, // 裁剪中
    Completed,  // 已完成(终态)
    Cancelled,  // 已取消(终态)
}

impl fmt::Display for CutPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CutPlanStatus {
    /// 全部状态, 按生命周期顺序
    pub const ALL: [CutPlanStatus; 4] = [
        CutPlanStatus::Draft,
        CutPlanStatus::InProgress,
        CutPlanStatus::Completed,
        CutPlanStatus::Cancelled,
    ];

    /// 状态在生命周期中的位置 (0 起)
    pub fn index(&self) -> usize {
        match self {
            CutPlanStatus::Draft => 0,
            CutPlanStatus::InProgress => 1,
            CutPlanStatus::Completed => 2,
            CutPlanStatus::Cancelled => 3,
        }
    }

    /// 从字符串解析状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(CutPlanStatus::Draft),
            "IN_PROGRESS" => Some(CutPlanStatus::InProgress),
            "COMPLETED" => Some(CutPlanStatus::Completed),
            "CANCELLED" => Some(CutPlanStatus::Cancelled),
            _ => None,
        }
    }

    /// 转换为存储字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            CutPlanStatus::Draft => "DRAFT",
            CutPlanStatus::InProgress => "IN_PROGRESS",
            CutPlanStatus::Completed => "COMPLETED",
            CutPlanStatus::Cancelled => "CANCELLED",
        }
    }

    /// 状态显示名称 (按当前语言, 词条见 locales/)
    pub fn label(&self) -> String {
        let key = match self {
            CutPlanStatus::Draft => "cut_plan.draft",
            CutPlanStatus::InProgress => "cut_plan.in_progress",
            CutPlanStatus::Completed => "cut_plan.completed",
            CutPlanStatus::Cancelled => "cut_plan.cancelled",
        };
        crate::i18n::t(key)
    }
}

// ==========================================
// 面料等级 (Fabric Grade)
// ==========================================
// 依据: 四分制验布标准 (ASTM D5430)
// 口径: 按百码扣分划级, 阈值固定, 与合格线配置无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FabricGrade {
    A,      // 优等 (≤10 分/百码)
    B,      // 一等 (≤20 分/百码)
    C,      // 合格 (≤28 分/百码)
    Reject, // 拒收 (>28 分/百码)
}

impl fmt::Display for FabricGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FabricGrade::A => write!(f, "A"),
            FabricGrade::B => write!(f, "B"),
            FabricGrade::C => write!(f, "C"),
            FabricGrade::Reject => write!(f, "REJECT"),
        }
    }
}

impl FabricGrade {
    /// A 级百码扣分上限
    pub const A_MAX_POINTS_PER_100YD: f64 = 10.0;
    /// B 级百码扣分上限
    pub const B_MAX_POINTS_PER_100YD: f64 = 20.0;
    /// C 级百码扣分上限 (超过即拒收)
    pub const C_MAX_POINTS_PER_100YD: f64 = 28.0;

    /// 按百码扣分划级
    ///
    /// # 规则 (阈值固定, 不随合格线配置变化)
    /// - ≤10 → A
    /// - ≤20 → B
    /// - ≤28 → C
    /// - >28 → REJECT
    pub fn from_points_per_100_yards(points_per_100_yards: f64) -> Self {
        if points_per_100_yards <= Self::A_MAX_POINTS_PER_100YD {
            FabricGrade::A
        } else if points_per_100_yards <= Self::B_MAX_POINTS_PER_100YD {
            FabricGrade::B
        } else if points_per_100_yards <= Self::C_MAX_POINTS_PER_100YD {
            FabricGrade::C
        } else {
            FabricGrade::Reject
        }
    }

    /// 从字符串解析等级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(FabricGrade::A),
            "B" => Some(FabricGrade::B),
            "C" => Some(FabricGrade::C),
            "REJECT" => Some(FabricGrade::Reject),
            _ => None,
        }
    }

    /// 等级显示名称 (按当前语言)
    pub fn label(&self) -> String {
        let key = match self {
            FabricGrade::A => "grade.a",
            FabricGrade::B => "grade.b",
            FabricGrade::C => "grade.c",
            FabricGrade::Reject => "grade.reject",
        };
        crate::i18n::t(key)
    }
}
