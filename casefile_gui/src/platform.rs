//! Platform glue: where state is stored and how downloads reach the user.
//!
//! - Native: `FileStore` in the settings' data directory, save dialog via rfd
//! - WASM: browser `localStorage`, download through a temporary object URL

use casefile_core::dates::DateStyle;
use casefile_core::errors::CaseResult;
use casefile_core::timeline::Download;
use casefile_core::KeyValueStore;

/// The store the app runs on, plus a description for the status bar
pub struct OpenedStore {
    pub store: Box<dyn KeyValueStore>,
    pub dates: DateStyle,
    pub label: String,
    /// Set when the preferred store could not be used
    pub warning: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{offer_download, open_store};
#[cfg(target_arch = "wasm32")]
pub use web::{offer_download, open_store};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use casefile_core::config::Settings;
    use casefile_core::file_io::write_atomic;
    use casefile_core::{FileStore, MemoryStore};

    /// Open the file store; fall back to an in-memory store if it is locked or unreadable
    pub fn open_store() -> OpenedStore {
        let settings = Settings::load();
        let path = settings.store_path();

        match FileStore::open(&path, whoami::username()) {
            Ok(store) => OpenedStore {
                store: Box::new(store),
                dates: settings.dates,
                label: path.display().to_string(),
                warning: None,
            },
            Err(e) => {
                log::error!("Falling back to memory store: {}", e);
                OpenedStore {
                    store: Box::new(MemoryStore::new()),
                    dates: settings.dates,
                    label: "memory (not saved)".to_string(),
                    warning: Some(format!("Changes will not be saved: {}", e)),
                }
            }
        }
    }

    /// Ask where to save the download and write it.
    ///
    /// Returns `Ok(None)` when the user closes the dialog.
    pub fn offer_download(download: &Download) -> CaseResult<Option<String>> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&download.file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return Ok(None);
        };

        write_atomic(&path, &download.contents)?;
        Ok(Some(path.display().to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use casefile_core::errors::CaseError;
    use casefile_core::MemoryStore;
    use wasm_bindgen::{JsCast, JsValue};

    fn js_error(operation: &str, key: &str, e: JsValue) -> CaseError {
        CaseError::storage(operation, key, format!("{:?}", e))
    }

    /// `window.localStorage`
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> CaseResult<Self> {
            let window = web_sys::window()
                .ok_or_else(|| CaseError::storage("open", "localStorage", "no window"))?;
            let storage = window
                .local_storage()
                .map_err(|e| js_error("open", "localStorage", e))?
                .ok_or_else(|| CaseError::storage("open", "localStorage", "storage disabled"))?;
            Ok(LocalStorage { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> CaseResult<Option<String>> {
            self.storage.get_item(key).map_err(|e| js_error("get", key, e))
        }

        fn set(&mut self, key: &str, value: &str) -> CaseResult<()> {
            self.storage.set_item(key, value).map_err(|e| js_error("set", key, e))
        }

        fn remove(&mut self, key: &str) -> CaseResult<()> {
            self.storage.remove_item(key).map_err(|e| js_error("remove", key, e))
        }
    }

    pub fn open_store() -> OpenedStore {
        match LocalStorage::open() {
            Ok(store) => OpenedStore {
                store: Box::new(store),
                dates: DateStyle::default(),
                label: "browser storage".to_string(),
                warning: None,
            },
            Err(e) => OpenedStore {
                store: Box::new(MemoryStore::new()),
                dates: DateStyle::default(),
                label: "memory (not saved)".to_string(),
                warning: Some(format!("Changes will not be saved: {}", e)),
            },
        }
    }

    /// Trigger a browser download of `download`
    pub fn offer_download(download: &Download) -> CaseResult<Option<String>> {
        let name = download.file_name.as_str();
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&download.contents));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&download.mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("create blob", name, e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| js_error("create url", name, e))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CaseError::storage("download", name, "no document"))?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_error("download", name, e))?
            .dyn_into()
            .map_err(|e| js_error("download", name, e.into()))?;
        anchor.set_href(&url);
        anchor.set_download(name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(|e| js_error("revoke url", name, e))?;
        Ok(Some(download.file_name.clone()))
    }
}
