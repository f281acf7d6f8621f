pub mod file_scanner;

pub use file_scanner::{is_image_path, scan_photos, PhotoSource, ScanConfig, ScanResult};
