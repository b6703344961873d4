use serde::{Deserialize, Serialize};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

use crate::props::{
    self, PropStore, PROP_BRAND, PROP_DEVICE, PROP_FINGERPRINT, PROP_MANUFACTURER, PROP_MODEL,
    PROP_NAME,
};

/// 进程对外报告的构建身份
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct BuildInfo {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub product: String,
}

impl BuildInfo {
    /// 从常规系统属性填充
    pub fn from_props(props: &PropStore) -> Self {
        Self {
            brand: props.get(PROP_BRAND).to_string(),
            device: props.get(PROP_DEVICE).to_string(),
            fingerprint: props.get(PROP_FINGERPRINT).to_string(),
            manufacturer: props.get(PROP_MANUFACTURER).to_string(),
            model: props.get(PROP_MODEL).to_string(),
            product: props.get(PROP_NAME).to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldWriteError {
    #[error("no such build field: {0}")]
    UnknownField(String),
    #[error("build info is sealed")]
    Sealed,
}

#[derive(Debug)]
struct Inner {
    info: BuildInfo,
    sealed: bool,
}

/// 进程内共享的构建描述符。初始化阶段允许按字段名改写,
/// seal 之后任何写入都会被拒绝。
#[derive(Debug)]
pub struct BuildStore {
    inner: Mutex<Inner>,
}

impl BuildStore {
    pub fn new(info: BuildInfo) -> Self {
        Self {
            inner: Mutex::new(Inner {
                info,
                sealed: false,
            }),
        }
    }

    /// 按平台字段名改写单个字段
    pub fn set_field(&self, key: &str, value: &str) -> Result<(), FieldWriteError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.sealed {
            return Err(FieldWriteError::Sealed);
        }
        let info = &mut inner.info;
        let field = match key {
            "BRAND" => &mut info.brand,
            "DEVICE" => &mut info.device,
            "FINGERPRINT" => &mut info.fingerprint,
            "MANUFACTURER" => &mut info.manufacturer,
            "MODEL" => &mut info.model,
            "PRODUCT" => &mut info.product,
            _ => return Err(FieldWriteError::UnknownField(key.to_string())),
        };
        *field = value.to_string();
        Ok(())
    }

    /// 结束初始化阶段,描述符此后只读
    pub fn seal(&self) {
        self.inner.lock().unwrap().sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.lock().unwrap().sealed
    }

    pub fn snapshot(&self) -> BuildInfo {
        self.inner.lock().unwrap().info.clone()
    }

    pub fn fingerprint(&self) -> String {
        self.inner.lock().unwrap().info.fingerprint.clone()
    }

    pub fn model(&self) -> String {
        self.inner.lock().unwrap().info.model.clone()
    }
}

// 进程级描述符,平台在任何应用代码之前构建一次
static PROCESS_BUILD: OnceLock<BuildStore> = OnceLock::new();

pub fn init_process_build(info: BuildInfo) {
    if PROCESS_BUILD.set(BuildStore::new(info)).is_err() {
        log::warn!("Process build info already initialized, ignoring");
    }
}

/// 未显式安装时从全局属性表惰性构建
pub fn process_build() -> &'static BuildStore {
    PROCESS_BUILD.get_or_init(|| BuildStore::new(BuildInfo::from_props(props::global())))
}
