use build_faker::{
    maybe_spoof_build, BuildStore, FakerConfig, PropStore, PACKAGE_GMS, PACKAGE_VELVET,
};
use log::{LevelFilter, Metadata, Record};
use pretty_assertions::assert_eq;
use std::sync::Mutex;

// 收集日志供断言用
struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn init_logger() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

const SYSTEM_PROP: &str = "\
# identity overrides
ro.product.needs_model_edit=1
ro.build.stock_fingerprint=google/coral/coral:13/stock
ro.product.brand=google
ro.product.model=Pixel 4 XL
ro.build.fingerprint=google/coral/coral:13/custom
";

#[test]
fn prop_file_drives_gms_fingerprint_override() {
    let config = FakerConfig::from_props(&PropStore::parse(SYSTEM_PROP));
    let store = BuildStore::new(config.build.clone());
    maybe_spoof_build(&store, &config.spoof, PACKAGE_GMS);
    assert_eq!("google/coral/coral:13/stock", store.fingerprint());
    assert_eq!("Pixel 4 XL", store.model());
}

#[test]
fn prop_file_drives_assistant_model_override() {
    let config = FakerConfig::from_props(&PropStore::parse(SYSTEM_PROP));
    let store = BuildStore::new(config.build.clone());
    maybe_spoof_build(&store, &config.spoof, PACKAGE_VELVET);
    assert_eq!("Pixel 3 XL", store.model());
    assert_eq!("google/coral/coral:13/custom", store.fingerprint());
}

#[test]
fn denied_write_is_logged_and_non_fatal() {
    init_logger();
    let config = FakerConfig::from_props(&PropStore::parse(SYSTEM_PROP));
    let store = BuildStore::new(config.build.clone());
    store.seal();

    // 不应 panic,也不应改写任何字段
    maybe_spoof_build(&store, &config.spoof, PACKAGE_GMS);
    assert_eq!("google/coral/coral:13/custom", store.fingerprint());

    let records = LOGGER.records.lock().unwrap();
    assert!(records
        .iter()
        .any(|r| r.starts_with("ERROR") && r.contains(PACKAGE_GMS) && r.contains("FINGERPRINT")));
}
