use serde::Serialize;

/// All localized strings shown in the admin interface for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminTranslation {
    // ==================== Login ====================
    /// Title of the login form
    pub login_title: &'static str,

    pub email_label: &'static str,

    pub password_label: &'static str,

    /// Label of the login submit button
    pub login_button: &'static str,

    /// Shown when the email/password pair is rejected
    pub invalid_credentials: &'static str,

    pub login_success: &'static str,

    // ==================== Dashboard ====================
    pub dashboard_title: &'static str,

    pub logout_button: &'static str,

    /// Label of the content language selector
    pub language_label: &'static str,

    pub save_button: &'static str,

    // ==================== Toasts ====================
    /// Transient message while a save is in flight
    pub saving: &'static str,

    pub saved: &'static str,

    pub save_failed: &'static str,

    /// Shown next to the "last updated" date of a record
    pub last_updated: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "Admin Login",
    email_label: "Email",
    password_label: "Password",
    login_button: "Sign in",
    invalid_credentials: "Invalid email or password.",
    login_success: "Signed in.",

    dashboard_title: "Dashboard",
    logout_button: "Sign out",
    language_label: "Language",
    save_button: "Save",

    saving: "Saving...",
    saved: "Saved successfully.",
    save_failed: "Failed to save. Please try again.",
    last_updated: "Last updated",
};

// ==================== Korean Strings ====================

pub const KOREAN_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "관리자 로그인",
    email_label: "이메일",
    password_label: "비밀번호",
    login_button: "로그인",
    invalid_credentials: "이메일 또는 비밀번호가 올바르지 않습니다.",
    login_success: "로그인되었습니다.",

    dashboard_title: "대시보드",
    logout_button: "로그아웃",
    language_label: "언어",
    save_button: "저장",

    saving: "저장 중...",
    saved: "저장되었습니다.",
    save_failed: "저장하지 못했습니다. 다시 시도해 주세요.",
    last_updated: "최종 수정일",
};

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "管理者ログイン",
    email_label: "メールアドレス",
    password_label: "パスワード",
    login_button: "ログイン",
    invalid_credentials: "メールアドレスまたはパスワードが正しくありません。",
    login_success: "ログインしました。",

    dashboard_title: "ダッシュボード",
    logout_button: "ログアウト",
    language_label: "言語",
    save_button: "保存",

    saving: "保存中...",
    saved: "保存しました。",
    save_failed: "保存に失敗しました。もう一度お試しください。",
    last_updated: "最終更新日",
};

// ==================== Indonesian Strings ====================

pub const INDONESIAN_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "Masuk Admin",
    email_label: "Email",
    password_label: "Kata sandi",
    login_button: "Masuk",
    invalid_credentials: "Email atau kata sandi salah.",
    login_success: "Berhasil masuk.",

    dashboard_title: "Dasbor",
    logout_button: "Keluar",
    language_label: "Bahasa",
    save_button: "Simpan",

    saving: "Menyimpan...",
    saved: "Berhasil disimpan.",
    save_failed: "Gagal menyimpan. Silakan coba lagi.",
    last_updated: "Terakhir diperbarui",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "تسجيل دخول المسؤول",
    email_label: "البريد الإلكتروني",
    password_label: "كلمة المرور",
    login_button: "تسجيل الدخول",
    invalid_credentials: "البريد الإلكتروني أو كلمة المرور غير صحيحة.",
    login_success: "تم تسجيل الدخول.",

    dashboard_title: "لوحة التحكم",
    logout_button: "تسجيل الخروج",
    language_label: "اللغة",
    save_button: "حفظ",

    saving: "جارٍ الحفظ...",
    saved: "تم الحفظ بنجاح.",
    save_failed: "فشل الحفظ. يرجى المحاولة مرة أخرى.",
    last_updated: "آخر تحديث",
};

// ==================== Chinese Strings ====================

pub const CHINESE_STRINGS: AdminTranslation = AdminTranslation {
    login_title: "管理员登录",
    email_label: "电子邮件",
    password_label: "密码",
    login_button: "登录",
    invalid_credentials: "电子邮件或密码不正确。",
    login_success: "登录成功。",

    dashboard_title: "控制台",
    logout_button: "退出登录",
    language_label: "语言",
    save_button: "保存",

    saving: "正在保存...",
    saved: "保存成功。",
    save_failed: "保存失败，请重试。",
    last_updated: "最后更新",
};

/// Get the admin translation table for a locale code.
///
/// Unknown codes (including differently-cased known codes) get the English
/// table.
pub fn get_admin_translation(code: &str) -> &'static AdminTranslation {
    match code {
        "ko" => &KOREAN_STRINGS,
        "ja" => &JAPANESE_STRINGS,
        "id" => &INDONESIAN_STRINGS,
        "ar" => &ARABIC_STRINGS,
        "zh" => &CHINESE_STRINGS,
        _ => &ENGLISH_STRINGS,
    }
}
