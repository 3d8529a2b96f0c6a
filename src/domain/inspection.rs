// ==========================================
// 成衣生产系统 - 验布领域模型
// ==========================================
// 依据: 四分制验布标准 (ASTM D5430)
// 职责: 疵点记录/分级结果/验布单实体与导入中间结构
// 红线: 纯数据载体, 不含分级算法 (算法见 engine/grading)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::FabricGrade;

// ==========================================
// 合格线默认值
// ==========================================
// 默认合格线与 C 级上限一致 (28 分/百码), 但二者独立:
// 调用方可收紧合格线 (如 15), 此时可能出现 "C 级且不合格"
pub const DEFAULT_PASS_THRESHOLD: f64 = 28.0;

// ==========================================
// FabricDefectEntry - 疵点记录
// ==========================================
// 用途: 验布时逐条登记的疵点, 分级计算的最小输入单元
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricDefectEntry {
    pub location: String,    // 疵点位置 (自由文本, 如 "边缘 2.3m 处")
    pub defect_type: String, // 疵点类别 (自由文本, 如 "断纱")
    pub points: u8,          // 扣分 (四分制: 1/2/3/4, 越严重分越高)
}

impl FabricDefectEntry {
    /// 四分制最小扣分
    pub const MIN_POINTS: u8 = 1;
    /// 四分制最大扣分
    pub const MAX_POINTS: u8 = 4;

    pub fn new(location: impl Into<String>, defect_type: impl Into<String>, points: u8) -> Self {
        Self {
            location: location.into(),
            defect_type: defect_type.into(),
            points,
        }
    }
}

// ==========================================
// GradingResult - 分级结果
// ==========================================
// 用途: 分级引擎输出, 由调用方持久化/展示
// 红线: grade 与 passed 独立计算, 不得合并为单一字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingResult {
    pub meters_inspected: f64,     // 验布米数 (回显输入)
    pub total_points: u32,         // 扣分合计
    pub defect_count: usize,       // 疵点条数
    pub points_per_100_yards: f64, // 百码扣分 (保留一位小数)
    pub grade: FabricGrade,        // 等级 (固定阈值划级)
    pub passed: bool,              // 是否过合格线 (合格线可配置)
}

// ==========================================
// FabricInspection - 验布单
// ==========================================
// 用途: 质检录入流程的聚合对象, 创建与持久化由调用方负责
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FabricInspection {
    // ===== 主键 =====
    pub inspection_id: String, // 验布单 ID (UUID)

    // ===== 业务标识 =====
    pub roll_no: Option<String>,   // 布卷号
    pub order_no: Option<String>,  // 订单号
    pub inspector: Option<String>, // 验布员

    // ===== 检验输入 =====
    pub meters_inspected: f64,          // 验布米数
    pub pass_threshold: f64,            // 合格线 (默认 28 分/百码)
    pub defects: Vec<FabricDefectEntry>, // 疵点明细

    // ===== 审计字段 =====
    pub inspected_at: DateTime<Utc>, // 检验时间
}

impl FabricInspection {
    pub fn new(meters_inspected: f64, defects: Vec<FabricDefectEntry>) -> Self {
        Self {
            inspection_id: Uuid::new_v4().to_string(),
            roll_no: None,
            order_no: None,
            inspector: None,
            meters_inspected,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            defects,
            inspected_at: Utc::now(),
        }
    }
}

// ==========================================
// RawDefectRecord - 导入中间结构体
// ==========================================
// 用途: 疵点表导入管道中间产物 (文件解析 → 字段映射 → 此结构)
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDefectRecord {
    // 源字段 (已类型转换)
    pub location: Option<String>,    // 疵点位置
    pub defect_type: Option<String>, // 疵点类别
    pub points: Option<i32>,         // 扣分 (待校验 1..=4)

    // 元信息
    pub row_number: usize, // 数据行号 (1 起, 不含表头, 用于 DQ 报告)
}

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DqLevel {
    Error,   // 错误 (该行阻断, 不进入疵点明细)
    Warning, // 警告 (允许导入)
    Info,    // 提示 (仅记录)
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize, // 原始文件行号
    pub level: DqLevel,    // 违规级别
    pub field: String,     // 违规字段
    pub message: String,   // 违规描述
}

// ==========================================
// DqSummary - 数据质量汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize, // 总行数
    pub success: usize,    // 成功导入
    pub blocked: usize,    // 阻断 (ERROR)
    pub warning: usize,    // 警告 (WARNING)
}

// ==========================================
// DqReport - 数据质量报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqReport {
    pub batch_id: String,             // 批次 ID
    pub summary: DqSummary,           // 汇总统计
    pub violations: Vec<DqViolation>, // 违规明细
}

// ==========================================
// DefectImportBatch - 疵点导入批次
// ==========================================
// 用途: 记录导入批次元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectImportBatch {
    pub batch_id: String,           // 批次 ID (UUID)
    pub file_name: Option<String>,  // 源文件名
    pub total_rows: usize,          // 总行数
    pub success_rows: usize,        // 成功导入行数
    pub blocked_rows: usize,        // 阻断行数 (DQ ERROR)
    pub warning_rows: usize,        // 警告行数 (DQ WARNING)
    pub imported_at: DateTime<Utc>, // 导入时间
    pub elapsed_ms: u64,            // 导入耗时 (毫秒)
}

// ==========================================
// DefectImportResult - 疵点导入结果
// ==========================================
// 用途: 导入接口返回值, entries 仅含通过 DQ 校验的行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectImportResult {
    pub batch: DefectImportBatch,        // 批次信息
    pub entries: Vec<FabricDefectEntry>, // 可用疵点明细
    pub report: DqReport,                // DQ 报告
}
