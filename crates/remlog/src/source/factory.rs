use std::sync::Arc;

use super::adapters::SharedSource;

pub fn default_source() -> SharedSource {
    #[cfg(target_os = "macos")]
    {
        Arc::new(super::adapters::macos::MacosSource::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(super::adapters::portable::PortableSource::new())
    }
}
