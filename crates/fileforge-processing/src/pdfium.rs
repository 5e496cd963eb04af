//! Shared pdfium binding.
//!
//! pdfium is loaded as a dynamic library at runtime. The library itself is
//! not thread-safe, so every conversion that touches it holds `lock()` for
//! the duration of the call.

use std::sync::{Mutex, MutexGuard};

use pdfium_render::prelude::*;

use crate::error::ConvertError;

static PDFIUM_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn lock() -> MutexGuard<'static, ()> {
    PDFIUM_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Bind to a pdfium dynamic library.
///
/// Search order: `PDFIUM_DYNAMIC_LIB_PATH`, the working directory, then the
/// system library paths.
pub(crate) fn bind() -> Result<Pdfium, ConvertError> {
    let bindings = match std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
        Ok(dir) => {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir))
                .or_else(|_| Pdfium::bind_to_system_library())
        }
        Err(_) => {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
        }
    }
    .map_err(|e| ConvertError::Pdf(format!("pdfium library is not available: {e:?}")))?;

    Ok(Pdfium::new(bindings))
}
