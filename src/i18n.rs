// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持印尼语（默认, 车间现场语言）、中文和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

// rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
// 所有断言翻译文案的测试须先持有该锁。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"id"、"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use garment_mes_core::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use garment_mes_core::i18n::t_with_args;
/// let msg = t_with_args("import.file_not_found", &[("path", "/tmp/defects.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 显式设置为默认语言
        set_locale("id");
        assert_eq!(current_locale(), "id");
    }

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试切换语言
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 恢复默认语言
        set_locale("id");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试印尼语翻译
        set_locale("id");
        let msg = t("common.success");
        assert_eq!(msg, "Operasi berhasil");

        // 测试中文翻译
        set_locale("zh-CN");
        let msg = t("common.success");
        assert_eq!(msg, "操作成功");

        // 测试英文翻译
        set_locale("en");
        let msg = t("common.success");
        assert_eq!(msg, "Operation successful");

        // 恢复默认语言
        set_locale("id");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        // 测试印尼语翻译（带参数）
        set_locale("id");
        let msg = t_with_args("import.file_not_found", &[("path", "/tmp/defects.csv")]);
        assert!(msg.contains("/tmp/defects.csv"));
        assert!(msg.contains("tidak ditemukan"));

        // 测试英文翻译（带参数）
        set_locale("en");
        let msg = t_with_args("import.file_not_found", &[("path", "/tmp/defects.csv")]);
        assert!(msg.contains("/tmp/defects.csv"));
        assert!(msg.contains("File not found"));

        // 恢复默认语言
        set_locale("id");
    }
}
