//! Path transformation from handler files to route keys and module identifiers.
//!
//! Both transformations are pure string functions over forward-slash paths. The
//! routes root is passed in as given to the scanner, so a path like
//! `src/routes/users/get.ts` with root `src/routes` yields the route key
//! `/users/get` and the identifier `usersGetTs`.

/// Trims trailing separators from a routes root so it can be used as a path prefix.
///
/// A root consisting only of separators is left as a single `/`.
pub fn root_prefix(root: &str) -> &str {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() && root.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Derives the module identifier for a handler file.
///
/// The part of `path` below `root` is split into maximal runs of ASCII letters and
/// digits. The first run is kept as-is and every following run is title-cased, so
/// `users/get.ts` becomes `usersGetTs` and `login-update.ts` becomes `loginUpdateTs`.
/// A suffix without separators is returned unchanged.
pub fn module_identifier(path: &str, root: &str) -> String {
    let remainder = strip_root(path, root);
    let suffix = remainder.strip_prefix('/').unwrap_or(remainder);

    let mut segments = alphanumeric_segments(suffix).into_iter();
    let mut identifier = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        identifier.push_str(&title_case(segment));
    }
    identifier
}

/// Derives the route key for a handler file.
///
/// The file name is cut at its first `.`, so `users/get.ts` and `users/get.v2.ts` both map
/// to `/users/get`. A file named `index` stands for its directory: `users/index.ts` maps to
/// `/users` and a top-level `index.ts` maps to `/`.
pub fn route_key(path: &str, root: &str) -> String {
    let remainder = strip_root(path, root);
    let basename = remainder.rsplit('/').next().unwrap_or(remainder);
    let name = match basename.find('.') {
        Some(dot) => &basename[..dot],
        None => basename,
    };
    let route_prefix = &remainder[..remainder.len() - basename.len()];

    if name == "index" {
        normalize_path(route_prefix)
    } else {
        format!("{}{}", route_prefix, name)
    }
}

/// Normalizes a `/`-separated path lexically.
///
/// Repeated separators and `.` segments collapse, `..` removes the preceding segment,
/// and trailing separators are dropped. An absolute path stays absolute (`..` at the
/// root is discarded) and an empty result becomes `.`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Returns true if `identifier` can be used as a TypeScript identifier.
///
/// Identifiers produced by [`module_identifier`] only contain ASCII letters and digits,
/// so this just rejects empty names and names with a leading digit.
pub fn is_valid_identifier(identifier: &str) -> bool {
    identifier
        .chars()
        .next()
        .is_some_and(|first| !first.is_ascii_digit())
}

fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    let prefix = root_prefix(root);
    if prefix == "/" {
        // Keep the leading separator so the remainder still starts with `/`.
        return path;
    }
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Splits `input` into maximal runs of ASCII letters and digits, dropping everything else.
fn alphanumeric_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;

    for (index, ch) in input.char_indices() {
        match (ch.is_ascii_alphanumeric(), start) {
            (true, None) => start = Some(index),
            (false, Some(begin)) => {
                segments.push(&input[begin..index]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        segments.push(&input[begin..]);
    }

    segments
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_ascii_uppercase().to_string();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}
