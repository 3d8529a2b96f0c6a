// ==========================================
// GradingEngine 引擎集成测试
// ==========================================
// 测试目标: 验证四分制验布分级全流程
// 覆盖范围: 百码扣分换算 / A-B-C-REJECT 分级 / 合格线独立性 / 序列化契约
// ==========================================

use garment_mes_core::domain::inspection::{FabricDefectEntry, FabricInspection};
use garment_mes_core::domain::types::FabricGrade;
use garment_mes_core::engine::GradingEngine;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的疵点明细（同分值 × 条数）
fn defects(points: u8, count: usize) -> Vec<FabricDefectEntry> {
    (0..count)
        .map(|i| FabricDefectEntry::new(format!("posisi {}", i + 1), "cacat uji", points))
        .collect()
}

// ==========================================
// 测试用例 1: 典型分级场景
// ==========================================

#[test]
fn test_typical_grading_scenarios() {
    println!("\n=== 测试：典型分级场景 ===");

    // (米数, 疵点, 期望百码扣分, 期望等级, 期望合格)
    let cases: Vec<(f64, Vec<FabricDefectEntry>, f64, FabricGrade, bool)> = vec![
        (100.0, vec![], 0.0, FabricGrade::A, true),
        (100.0, defects(1, 1), 0.9, FabricGrade::A, true),
        (100.0, defects(1, 5), 4.6, FabricGrade::A, true),
        (100.0, defects(3, 5), 13.7, FabricGrade::B, true),
        (50.0, defects(4, 5), 36.6, FabricGrade::Reject, false),
    ];

    for (meters, entries, expected_pts, expected_grade, expected_passed) in cases {
        let result = GradingEngine::calculate_four_point_score_default(meters, &entries);
        println!(
            "  - {}m / {} 条疵点: {} 分/百码, {:?}, passed={}",
            meters,
            result.defect_count,
            result.points_per_100_yards,
            result.grade,
            result.passed
        );
        assert_eq!(result.points_per_100_yards, expected_pts);
        assert_eq!(result.grade, expected_grade);
        assert_eq!(result.passed, expected_passed);
    }

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 2: 等级与合格线独立
// ==========================================

#[test]
fn test_grade_and_pass_are_independent() {
    println!("\n=== 测试：等级与合格线独立 ===");

    // 100m, 25 分 → 22.9 分/百码 → C 级
    let mut entries = defects(4, 6);
    entries.push(FabricDefectEntry::new("tepi 88m", "noda", 1));

    // 默认合格线 28: C 级且合格
    let relaxed = GradingEngine::calculate_four_point_score_default(100.0, &entries);
    assert_eq!(relaxed.points_per_100_yards, 22.9);
    assert_eq!(relaxed.grade, FabricGrade::C);
    assert!(relaxed.passed, "默认合格线下 C 级应合格");

    // 收紧合格线 15: 等级不变, 合格结论翻转
    let strict = GradingEngine::calculate_four_point_score(100.0, &entries, 15.0);
    assert_eq!(strict.points_per_100_yards, 22.9);
    assert_eq!(strict.grade, FabricGrade::C, "等级不随合格线变化");
    assert!(!strict.passed, "收紧合格线后应不合格");

    println!(
        "✓ 22.9 分/百码: 合格线 28 → C/合格, 合格线 15 → C/不合格"
    );
    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 3: 零米数边界
// ==========================================

#[test]
fn test_zero_length_inspection() {
    println!("\n=== 测试：零米数边界 ===");

    let result = GradingEngine::calculate_four_point_score_default(0.0, &defects(4, 2));

    // 定义值: 0.0 分/百码, A 级, 合格; 不报错不产生 NaN
    assert_eq!(result.points_per_100_yards, 0.0);
    assert!(result.points_per_100_yards.is_finite());
    assert_eq!(result.grade, FabricGrade::A);
    assert!(result.passed);
    assert_eq!(result.total_points, 8, "扣分合计仍如实回显");

    println!("✓ 零米数 → 0.0 分/百码 (定义值)");
    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 4: 验布单聚合分级
// ==========================================

#[test]
fn test_fabric_inspection_aggregate() {
    println!("\n=== 测试：验布单聚合分级 ===");

    let mut inspection = FabricInspection::new(100.0, defects(3, 5));
    inspection.roll_no = Some("ROLL-2026-0115".to_string());
    inspection.inspector = Some("Sari".to_string());
    inspection.pass_threshold = 20.0;

    let result = GradingEngine::grade_inspection(&inspection);

    println!(
        "  - 布卷 {:?}: {} 分/百码, {:?}",
        inspection.roll_no, result.points_per_100_yards, result.grade
    );

    assert_eq!(result.meters_inspected, 100.0);
    assert_eq!(result.points_per_100_yards, 13.7);
    assert_eq!(result.grade, FabricGrade::B);
    assert!(result.passed, "13.7 ≤ 20.0 应合格");
    assert!(!inspection.inspection_id.is_empty(), "验布单应有 UUID 主键");

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 5: 序列化契约
// ==========================================

#[test]
fn test_grading_result_serialization_contract() {
    println!("\n=== 测试：序列化契约 ===");

    let result = GradingEngine::calculate_four_point_score_default(50.0, &defects(4, 5));
    let json = serde_json::to_string(&result).expect("序列化失败");
    println!("  - JSON: {}", json);

    // 等级使用 SCREAMING_SNAKE_CASE 导出
    assert!(json.contains("\"grade\":\"REJECT\""), "等级序列化形式: {}", json);
    assert!(json.contains("\"passed\":false"));

    // 反序列化还原
    let back: garment_mes_core::domain::inspection::GradingResult =
        serde_json::from_str(&json).expect("反序列化失败");
    assert_eq!(back.grade, FabricGrade::Reject);
    assert_eq!(back.points_per_100_yards, result.points_per_100_yards);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 6: 等级阈值边界 (分级器直测)
// ==========================================

#[test]
fn test_grade_classifier_boundaries() {
    println!("\n=== 测试：等级阈值边界 ===");

    let cases = [
        (0.0, FabricGrade::A),
        (10.0, FabricGrade::A),  // A 上限含
        (10.1, FabricGrade::B),
        (20.0, FabricGrade::B),  // B 上限含
        (20.1, FabricGrade::C),
        (28.0, FabricGrade::C),  // C 上限含
        (28.1, FabricGrade::Reject),
        (100.0, FabricGrade::Reject),
    ];

    for (pts, expected) in cases {
        let grade = FabricGrade::from_points_per_100_yards(pts);
        println!("  - {} 分/百码 → {:?}", pts, grade);
        assert_eq!(grade, expected, "{} 分/百码分级错误", pts);
    }

    println!("=== 测试通过 ===\n");
}
