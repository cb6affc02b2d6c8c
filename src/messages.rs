//! Localized UI messages
//!
//! Pre-translated simplified/traditional pairs, selected once by user
//! locale. Selection only; no script conversion happens here.

/// Chinese writing variant of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Hans,
    Hant,
}

impl Variant {
    /// Map a user locale to a variant; simplified for zh-hans/zh-cn,
    /// traditional otherwise
    pub fn from_locale(locale: &str) -> Self {
        match locale {
            "zh-hans" | "zh-cn" => Variant::Hans,
            _ => Variant::Hant,
        }
    }
}

/// Every message the UI can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKey {
    Settings,
    SettingsTitle,
    Enable,
    EnableDesc,
    UseWebfont,
    LoadMode,
    LoadModeFallback,
    LoadModeFallbackDesc,
    LoadModeAlways,
    LoadModeAlwaysDesc,
    PreferredFont,
    EnableWebfontToShowFonts,
    LoadingFonts,
    FontLoadFailed,
    Version,
    Close,
    Save,
    Help,
    SettingsLoadFailed,
}

struct Message {
    key: MsgKey,
    hans: &'static str,
    hant: &'static str,
}

const MESSAGES: &[Message] = &[
    Message {
        key: MsgKey::Settings,
        hans: "设置",
        hant: "設定",
    },
    Message {
        key: MsgKey::SettingsTitle,
        hans: "僻字辅助工具设置",
        hant: "僻字輔助工具設定",
    },
    Message {
        key: MsgKey::Enable,
        hans: "启用僻字辅助工具",
        hant: "啟用僻字輔助工具",
    },
    Message {
        key: MsgKey::EnableDesc,
        hans: "如要完全关闭，请登录后在参数设置取消勾选本小工具。",
        hant: "如要完全關閉，請登入後在偏好設定取消勾選本小工具。",
    },
    Message {
        key: MsgKey::UseWebfont,
        hans: "使用网络字形",
        hant: "使用網路字型",
    },
    Message {
        key: MsgKey::LoadMode,
        hans: "网络字形加载模式",
        hant: "網路字型載入模式",
    },
    Message {
        key: MsgKey::LoadModeFallback,
        hans: "优先使用系统字形",
        hant: "優先使用系統字型",
    },
    Message {
        key: MsgKey::LoadModeFallbackDesc,
        hans: "仅当系统无法正确显示时获取网络字形。",
        hant: "僅當系統無法正確顯示時取得網路字型。",
    },
    Message {
        key: MsgKey::LoadModeAlways,
        hans: "总是覆盖系统字形",
        hant: "總是覆蓋系統字型",
    },
    Message {
        key: MsgKey::LoadModeAlwaysDesc,
        hans: "总是使用网络字形显示罕用字。",
        hant: "總是使用網路字型顯示罕用字。",
    },
    Message {
        key: MsgKey::PreferredFont,
        hans: "偏好字体",
        hant: "偏好字型",
    },
    Message {
        key: MsgKey::EnableWebfontToShowFonts,
        hans: "启用网络字形以显示可用字体。",
        hant: "啟用網路字型以顯示可用字型。",
    },
    Message {
        key: MsgKey::LoadingFonts,
        hans: "加载可用字体中……",
        hant: "載入可用字型中……",
    },
    Message {
        key: MsgKey::FontLoadFailed,
        hans: "网络字体加载失败。",
        hant: "網路字型載入失敗。",
    },
    Message {
        key: MsgKey::Version,
        hans: "版本：",
        hant: "版本：",
    },
    Message {
        key: MsgKey::Close,
        hans: "关闭",
        hant: "關閉",
    },
    Message {
        key: MsgKey::Save,
        hans: "确定",
        hant: "確定",
    },
    Message {
        key: MsgKey::Help,
        hans: "帮助",
        hant: "說明",
    },
    Message {
        key: MsgKey::SettingsLoadFailed,
        hans: "无法加载设置模块",
        hant: "無法載入設定模組",
    },
];

/// Message lookup bound to one variant
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    variant: Variant,
}

impl Messages {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn text(&self, key: MsgKey) -> &'static str {
        let message = MESSAGES
            .iter()
            .find(|message| message.key == key)
            .unwrap_or(&MESSAGES[0]);
        match self.variant {
            Variant::Hans => message.hans,
            Variant::Hant => message.hant,
        }
    }
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod messages_tests;
