use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// 策略相关属性
pub const PROP_NEEDS_MODEL_EDIT: &str = "ro.product.needs_model_edit";
pub const PROP_STOCK_FINGERPRINT: &str = "ro.build.stock_fingerprint";

// 构建描述符来源属性
pub const PROP_BRAND: &str = "ro.product.brand";
pub const PROP_DEVICE: &str = "ro.product.device";
pub const PROP_FINGERPRINT: &str = "ro.build.fingerprint";
pub const PROP_MANUFACTURER: &str = "ro.product.manufacturer";
pub const PROP_MODEL: &str = "ro.product.model";
pub const PROP_NAME: &str = "ro.product.name";

/// 系统属性表:system.prop 风格的 key=value 集合
#[derive(Debug, Clone, Default)]
pub struct PropStore {
    props: HashMap<String, String>,
}

impl PropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析 system.prop / build.prop 格式:
    /// 每行一条 key=value,跳过空行和 # 注释,重复的 key 以后出现的为准
    pub fn parse(content: &str) -> Self {
        let mut props = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                props.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { props }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read prop file {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// 缺失的 key 返回空字符串
    pub fn get(&self, key: &str) -> &str {
        self.props.get(key).map(String::as_str).unwrap_or("")
    }

    /// 布尔属性:1/y/yes/true/on 为真,0/n/no/false/off 为假,其余取默认值
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).to_ascii_lowercase().as_str() {
            "1" | "y" | "yes" | "true" | "on" => true,
            "0" | "n" | "no" | "false" | "off" => false,
            _ => default,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

// 进程级属性表,只安装一次
static GLOBAL: OnceLock<PropStore> = OnceLock::new();

pub fn init_global(store: PropStore) {
    if GLOBAL.set(store).is_err() {
        log::warn!("Global property store already initialized, ignoring");
    }
}

/// 未安装时返回空表
pub fn global() -> &'static PropStore {
    GLOBAL.get_or_init(PropStore::new)
}
