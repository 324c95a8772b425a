//! Language constants shared across the engine.

/// File extensions recognized as Python source.
pub const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi", "pyw"];

/// Name of the package initializer module.
pub const PACKAGE_INIT: &str = "__init__";

/// Name of the instance constructor.
pub const CONSTRUCTOR_NAME: &str = "__init__";

/// Check whether a path carries a supported source extension.
pub fn is_supported_path(path: &str) -> bool {
    extension_of(path).is_some_and(|ext| PYTHON_EXTENSIONS.contains(&ext))
}

/// The extension of the last path component, without the dot.
pub fn extension_of(path: &str) -> Option<&str> {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() { None } else { Some(ext) }
}

/// Derive a dotted module name from a file path.
///
/// `pkg/sub/mod.py` becomes `pkg.sub.mod`; `pkg/__init__.py` becomes `pkg`.
pub fn module_name_from_path(path: &str) -> String {
    let trimmed = path.trim_start_matches("./");
    let without_ext = match extension_of(trimmed) {
        Some(ext) => &trimmed[..trimmed.len() - ext.len() - 1],
        None => trimmed,
    };

    let mut parts: Vec<&str> = without_ext
        .split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();
    if parts.len() > 1 && parts.last() == Some(&PACKAGE_INIT) {
        parts.pop();
    }
    parts.join(".")
}
