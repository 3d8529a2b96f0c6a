// ==========================================
// StageFlowEngine 引擎集成测试
// ==========================================
// 测试目标: 验证六阶段生产流水线的流转规则
// 覆盖范围: 正向推进 / 两条返工边 / 进度计算 / 非法转换错误消息
// ==========================================

use garment_mes_core::domain::types::ProductionStage;
use garment_mes_core::engine::{FlowError, StageFlowEngine};
use garment_mes_core::i18n;
use std::sync::Mutex;

// rust-i18n 的 locale 为全局状态; 断言错误文案的测试须串行化
static LOCALE_LOCK: Mutex<()> = Mutex::new(());

// ==========================================
// 测试用例 1: 全流程正向推进
// ==========================================

#[test]
fn test_full_pipeline_forward_walk() {
    println!("\n=== 测试：全流程正向推进 ===");

    let mut stage = ProductionStage::Cutting;
    let mut visited = vec![stage];

    // 从裁剪一路推进到完成
    while let Some(next) = StageFlowEngine::next_stage(stage) {
        assert!(
            StageFlowEngine::assert_transition(stage, next).is_ok(),
            "正向边 {:?} -> {:?} 应合法",
            stage,
            next
        );
        stage = next;
        visited.push(stage);
    }

    println!("✓ 推进路径: {:?}", visited);

    // 恰好 6 个阶段, 止于完成
    assert_eq!(visited.len(), 6, "应经过全部 6 个阶段");
    assert_eq!(visited, ProductionStage::ALL.to_vec(), "推进顺序应与流水线一致");
    assert_eq!(stage, ProductionStage::Done);
    assert!(StageFlowEngine::is_terminal(stage), "完成应为终态");

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 2: 返工闭环
// ==========================================

#[test]
fn test_rework_loop_qc_finishing_sewing() {
    println!("\n=== 测试：返工闭环 ===");

    // 质检不合格 → 后整
    assert!(StageFlowEngine::assert_transition(ProductionStage::Qc, ProductionStage::Finishing).is_ok());
    assert!(StageFlowEngine::is_rework(ProductionStage::Qc, ProductionStage::Finishing));

    // 后整发现缝制缺陷 → 缝制
    assert!(StageFlowEngine::assert_transition(ProductionStage::Finishing, ProductionStage::Sewing).is_ok());
    assert!(StageFlowEngine::is_rework(ProductionStage::Finishing, ProductionStage::Sewing));

    // 返工后可重新正向推进: 缝制 → 后整 → 质检 → 包装
    let mut stage = ProductionStage::Sewing;
    for expected in [
        ProductionStage::Finishing,
        ProductionStage::Qc,
        ProductionStage::Packing,
    ] {
        let next = StageFlowEngine::next_stage(stage).expect("非终态应有正向边");
        assert_eq!(next, expected);
        stage = next;
    }

    println!("✓ 返工后可重新推进至包装");

    // 返工边全表恰好两条
    let rework_pairs: Vec<_> = ProductionStage::ALL
        .iter()
        .filter_map(|&s| StageFlowEngine::rework_stage(s).map(|t| (s, t)))
        .collect();
    assert_eq!(
        rework_pairs,
        vec![
            (ProductionStage::Finishing, ProductionStage::Sewing),
            (ProductionStage::Qc, ProductionStage::Finishing),
        ],
        "返工边应恰好两条"
    );

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 3: 非法转换全量审计
// ==========================================

#[test]
fn test_illegal_transitions_exhaustive() {
    println!("\n=== 测试：非法转换全量审计 ===");

    let mut legal = 0;
    let mut illegal = 0;

    // 遍历全部 36 个有序对, 与边表声明逐一对照
    for &from in &ProductionStage::ALL {
        let allowed = StageFlowEngine::allowed_transitions(from);
        for &to in &ProductionStage::ALL {
            let result = StageFlowEngine::assert_transition(from, to);
            if allowed.contains(&to) {
                assert!(result.is_ok(), "{:?} -> {:?} 应合法", from, to);
                legal += 1;
            } else {
                assert_eq!(
                    result,
                    Err(FlowError::InvalidStageTransition { from, to }),
                    "{:?} -> {:?} 应非法",
                    from,
                    to
                );
                illegal += 1;
            }
        }
    }

    println!("✓ 合法转换: {} 条, 非法转换: {} 条", legal, illegal);

    // 5 条正向边 + 2 条返工边 = 7 条合法
    assert_eq!(legal, 7, "合法转换应恰好 7 条");
    assert_eq!(illegal, 29);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 4: 进度与序号
// ==========================================

#[test]
fn test_stage_progress_and_index() {
    println!("\n=== 测试：进度与序号 ===");

    let expected_progress = [17u8, 33, 50, 67, 83, 100];

    for (i, &stage) in ProductionStage::ALL.iter().enumerate() {
        assert_eq!(StageFlowEngine::stage_index(stage), i);
        assert_eq!(
            StageFlowEngine::stage_progress(stage),
            expected_progress[i],
            "{:?} 进度错误",
            stage
        );
        println!("  - {:?}: index={}, progress={}%", stage, i, expected_progress[i]);
    }

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 5: 错误消息本地化标签
// ==========================================

#[test]
fn test_invalid_transition_message_indonesian() {
    let _guard = LOCALE_LOCK.lock().unwrap();
    i18n::set_locale("id");

    println!("\n=== 测试：错误消息本地化标签 (id) ===");

    // 裁剪 → 完成 跳段
    let err = StageFlowEngine::assert_transition(ProductionStage::Cutting, ProductionStage::Done)
        .expect_err("跳段应报错");
    let msg = err.to_string();
    println!("  - 错误消息: {}", msg);

    assert!(msg.contains("Potong"), "应含起始阶段标签: {}", msg);
    assert!(msg.contains("Selesai"), "应含目标阶段标签: {}", msg);
    assert!(!msg.contains("CUTTING"), "不应出现枚举标识符: {}", msg);
    assert!(!msg.contains("DONE"), "不应出现枚举标识符: {}", msg);

    i18n::set_locale("id");
    println!("=== 测试通过 ===\n");
}

#[test]
fn test_invalid_transition_message_locale_switch() {
    let _guard = LOCALE_LOCK.lock().unwrap();

    println!("\n=== 测试：错误消息随语言切换 ===");

    let err = StageFlowEngine::assert_transition(ProductionStage::Done, ProductionStage::Cutting)
        .expect_err("终态出边应报错");

    i18n::set_locale("zh-CN");
    let msg = err.to_string();
    println!("  - zh-CN: {}", msg);
    assert!(msg.contains("完成") && msg.contains("裁剪"), "中文标签: {}", msg);

    i18n::set_locale("en");
    let msg = err.to_string();
    println!("  - en: {}", msg);
    assert!(msg.contains("Done") && msg.contains("Cutting"), "英文标签: {}", msg);

    i18n::set_locale("id");
    println!("=== 测试通过 ===\n");
}

// ==========================================
// 测试用例 6: 标签与调色板数据
// ==========================================

#[test]
fn test_stage_labels_and_palettes() {
    let _guard = LOCALE_LOCK.lock().unwrap();
    i18n::set_locale("id");

    println!("\n=== 测试：标签与调色板数据 ===");

    // 印尼语标签全表
    let labels: Vec<String> = ProductionStage::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec!["Potong", "Jahit", "Finishing", "QC", "Packing", "Selesai"]
    );

    // 每个阶段有完整的调色板
    for &stage in &ProductionStage::ALL {
        let palette = stage.palette();
        assert!(palette.background.starts_with('#'));
        assert!(palette.text.starts_with('#'));
        assert!(palette.accent.starts_with('#'));
    }

    println!("✓ 标签: {:?}", labels);

    i18n::set_locale("id");
    println!("=== 测试通过 ===\n");
}
