//! Macro expansion for version patterns
//!
//! Watch entries may embed a fixed vocabulary of `@NAME@` tokens that
//! stand for the package name or for well-known regex fragments. The
//! vocabulary is closed: it is a data table, not an extensible template
//! mechanism, and unknown `@...@` tokens pass through untouched.

/// Capturing regex fragment matching a generic upstream version token:
/// a digit followed by version characters, optionally preceded by a
/// separator
pub const ANY_VERSION: &str = r"[-_]?(\d[\-+\.:\~\da-zA-Z]*)";

/// Non-capturing regex fragment matching the usual archive extensions
pub const ARCHIVE_EXT: &str = r"(?i)\.(?:tar\.xz|tar\.bz2|tar\.gz|zip|tgz|tbz|txz)";

/// [`ARCHIVE_EXT`] followed by a detached-signature extension
pub const SIGNATURE_EXT: &str =
    r"(?i)\.(?:tar\.xz|tar\.bz2|tar\.gz|zip|tgz|tbz|txz)\.(?:asc|pgp|gpg|sig|sign)";

/// Capturing regex fragment matching a repacked-tarball suffix
pub const DEB_EXT: &str = r"[\+~](debian|dfsg|ds|deb)(\.)?(\d+)?$";

/// Substitute the macro vocabulary into a template string.
///
/// A single pass over the fixed table; pure, no I/O.
pub fn expand(template: &str, package: &str) -> String {
    let substitutions = [
        ("@PACKAGE@", package),
        ("@ANY_VERSION@", ANY_VERSION),
        ("@ARCHIVE_EXT@", ARCHIVE_EXT),
        ("@SIGNATURE_EXT@", SIGNATURE_EXT),
        ("@DEB_EXT@", DEB_EXT),
    ];

    let mut text = template.to_string();
    for (token, replacement) in substitutions {
        if text.contains(token) {
            text = text.replace(token, replacement);
        }
    }
    text
}
