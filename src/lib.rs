pub mod build_info;
pub mod config;
pub mod props;

use log::{error, info};

pub use build_info::{init_process_build, process_build, BuildInfo, BuildStore, FieldWriteError};
pub use config::{spoof_config, FakerConfig, SpoofConfig};
pub use props::PropStore;

/// GMS 包名
pub const PACKAGE_GMS: &str = "com.google.android.gms";
/// Google App(Assistant 宿主)包名
pub const PACKAGE_VELVET: &str = "com.google.android.googlequicksearchbox";

// Assistant 在 Pixel 4 系机型上会启用 NGA,报成 Pixel 3 XL 可绕开
const SPOOFED_MODEL: &str = "Pixel 3 XL";

// 改写失败只记日志,应用继续以原始身份运行
fn set_build_field(store: &BuildStore, package_name: &str, key: &str, value: &str) {
    match store.set_field(key, value) {
        Ok(()) => info!("Set Build.{} = {} for {}", key, value, package_name),
        Err(e) => error!("Failed to spoof Build.{} for {}: {}", key, package_name, e),
    }
}

/// 按策略改写构建身份,最多触碰一个字段
pub fn maybe_spoof_build(store: &BuildStore, config: &SpoofConfig, package_name: &str) {
    if package_name == PACKAGE_GMS {
        // 恢复 stock 指纹,让 SafetyNet 通过
        if !config.stock_fingerprint.is_empty() {
            set_build_field(store, package_name, "FINGERPRINT", &config.stock_fingerprint);
        }
    } else if config.needs_model_edit && package_name == PACKAGE_VELVET {
        set_build_field(store, package_name, "MODEL", SPOOFED_MODEL);
    }
}

/// 应用启动路径入口,必须在应用自身初始化之前调用一次。
/// 返回前封存描述符,此后进程内只读。
pub fn init_application(package_name: &str) {
    let store = build_info::process_build();
    maybe_spoof_build(store, config::spoof_config(), package_name);
    store.seal();
}
