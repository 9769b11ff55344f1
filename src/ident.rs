//! Identifier synthesis from input filenames.
//!
//! Each input file becomes one C array; its name is derived from the
//! filename alone, deterministically, so regenerating the same inputs
//! yields the same symbols. Collisions between distinct inputs (for
//! example `a-b.png` and `a_b.png`) are the caller's responsibility.

/// A synthesized array identifier, recorded for the end-of-run manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub identifier: String,
}

/// Returns the last path component of `path`, handling both `/` and `\`
/// separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Derive a legal C identifier for the byte array generated from `path`.
///
/// The directory prefix is dropped; the extension (when present) is moved
/// in front of the base name between underscores; every character that is
/// not ASCII alphanumeric maps to `_`; a `data` / `_data` suffix is chosen
/// so the result never ends in a double underscore.
///
/// `art/logo.png` → `_png_logo_data`, `README` → `README_data`,
/// `.gitignore` → `_gitignore_data`.
pub fn synthesize_identifier(path: &str) -> String {
    let name = last_name_from_path(path);
    let (base, ext) = match name.rfind('.') {
        Some(pos) => (&name[..pos], Some(&name[pos + 1..])),
        None => (name, None),
    };

    let mut ident = String::with_capacity(name.len() + 10);
    if let Some(ext) = ext {
        ident.push('_');
        push_mapped(&mut ident, ext);
        ident.push('_');
    }
    push_mapped(&mut ident, base);

    if ident.ends_with('_') {
        ident.push_str("data");
    } else {
        ident.push_str("_data");
    }
    ident
}

/// Append `s` to `ident` with every non-alphanumeric character replaced by
/// an underscore.
fn push_mapped(ident: &mut String, s: &str) {
    for c in s.chars() {
        ident.push(if c.is_ascii_alphanumeric() { c } else { '_' });
    }
}
