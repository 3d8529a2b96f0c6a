// ==========================================
// 成衣生产系统 - 四分制验布分级引擎
// ==========================================
// 依据: 四分制验布标准 (ASTM D5430)
// 职责: 百码扣分计算、等级判定、合格判定的纯逻辑
// 红线: 无状态、无副作用; 全函数 (任何输入都有定义输出, 永不失败)
// ==========================================

use crate::domain::inspection::{
    FabricDefectEntry, FabricInspection, GradingResult, DEFAULT_PASS_THRESHOLD,
};
use crate::domain::types::FabricGrade;

/// 米 → 码换算系数
pub const YARDS_PER_METER: f64 = 1.09361;

// ==========================================
// GradingEngine - 纯函数工具类
// ==========================================
pub struct GradingEngine;

impl GradingEngine {
    /// 四分制分级计算
    ///
    /// # 规则
    /// 1. total_points = Σ 疵点扣分; defect_count = 疵点条数
    /// 2. yards = meters_inspected × 1.09361
    /// 3. points_per_100_yards = round1(total_points / yards × 100)
    ///    - 验布米数 ≤ 0 → 0.0 (定义值, 不报错不产生 NaN)
    ///    - round1: 四舍五入保留一位小数
    /// 4. grade: 固定阈值 ≤10 A / ≤20 B / ≤28 C / >28 REJECT, 按舍入后值判定
    /// 5. passed = points_per_100_yards ≤ pass_threshold, 与 grade 相互独立
    ///
    /// # 参数
    /// - meters_inspected: 验布米数
    /// - defects: 疵点明细 (扣分范围校验在导入层完成)
    /// - pass_threshold: 合格线 (百码扣分上限, 可与等级线不同)
    ///
    /// # 说明
    /// - 收紧合格线 (如 15.0) 时可能出现 "C 级且不合格"
    pub fn calculate_four_point_score(
        meters_inspected: f64,
        defects: &[FabricDefectEntry],
        pass_threshold: f64,
    ) -> GradingResult {
        let total_points: u32 = defects.iter().map(|d| u32::from(d.points)).sum();
        let defect_count = defects.len();

        let points_per_100_yards = if meters_inspected > 0.0 {
            let yards = meters_inspected * YARDS_PER_METER;
            round1(f64::from(total_points) / yards * 100.0)
        } else {
            // 零米数: 无可检长度, 按无疵点处理
            0.0
        };

        let grade = FabricGrade::from_points_per_100_yards(points_per_100_yards);
        let passed = points_per_100_yards <= pass_threshold;

        GradingResult {
            meters_inspected,
            total_points,
            defect_count,
            points_per_100_yards,
            grade,
            passed,
        }
    }

    /// 四分制分级计算 (默认合格线 28 分/百码)
    ///
    /// # 示例
    /// ```
    /// use garment_mes_core::domain::FabricDefectEntry;
    /// use garment_mes_core::engine::GradingEngine;
    ///
    /// let defects = vec![FabricDefectEntry::new("tepi 2.3m", "benang putus", 1)];
    /// let result = GradingEngine::calculate_four_point_score_default(100.0, &defects);
    /// assert_eq!(result.points_per_100_yards, 0.9);
    /// assert!(result.passed);
    /// ```
    pub fn calculate_four_point_score_default(
        meters_inspected: f64,
        defects: &[FabricDefectEntry],
    ) -> GradingResult {
        Self::calculate_four_point_score(meters_inspected, defects, DEFAULT_PASS_THRESHOLD)
    }

    /// 对验布单聚合对象分级 (取其自身米数/疵点/合格线)
    pub fn grade_inspection(inspection: &FabricInspection) -> GradingResult {
        Self::calculate_four_point_score(
            inspection.meters_inspected,
            &inspection.defects,
            inspection.pass_threshold,
        )
    }
}

/// 四舍五入保留一位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
