use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::build_info::BuildInfo;
use crate::props::{self, PropStore, PROP_NEEDS_MODEL_EDIT, PROP_STOCK_FINGERPRINT};

/// 伪装策略:两个开关,缺省时对应分支关闭
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SpoofConfig {
    #[serde(default)]
    pub needs_model_edit: bool,
    #[serde(default)]
    pub stock_fingerprint: String,
}

impl SpoofConfig {
    pub fn from_props(props: &PropStore) -> Self {
        Self {
            needs_model_edit: props.get_bool(PROP_NEEDS_MODEL_EDIT, false),
            stock_fingerprint: props.get(PROP_STOCK_FINGERPRINT).to_string(),
        }
    }
}

/// 配置文件整体:构建身份 + 伪装策略
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FakerConfig {
    #[serde(default)]
    pub build: BuildInfo,
    #[serde(default)]
    pub spoof: SpoofConfig,
}

impl FakerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_props(props: &PropStore) -> Self {
        Self {
            build: BuildInfo::from_props(props),
            spoof: SpoofConfig::from_props(props),
        }
    }
}

// 策略在首次使用时解析一次,进程内不再变化
static SPOOF_CONFIG: OnceLock<SpoofConfig> = OnceLock::new();

pub fn spoof_config() -> &'static SpoofConfig {
    SPOOF_CONFIG.get_or_init(|| SpoofConfig::from_props(props::global()))
}
