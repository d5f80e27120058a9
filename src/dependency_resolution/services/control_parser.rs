use crate::dependency_resolution::domain::{DependencyList, DependencyMap, PackageName};
use tracing::{debug, trace};

const PACKAGE_FIELD: &str = "Package:";
const DEPENDS_FIELD: &str = "Depends:";

/// Parses a Debian `Packages` control-file stream into a [`DependencyMap`].
///
/// Records are separated by blank lines. From each record only the
/// `Package:` and `Depends:` fields are read; a repeated field overwrites the
/// earlier one. Records without a usable `Package:` are skipped, and a later
/// record for the same package replaces an earlier one.
///
/// `Depends:` values keep every alternative's bare name: `|` separators,
/// parenthesised version constraints and `:arch` qualifiers are dropped.
pub fn parse_control_text(text: &str) -> DependencyMap {
    let mut map = DependencyMap::new();
    let mut skipped = 0usize;

    for block in split_blocks(text) {
        match parse_block(&block) {
            Some((package, dependencies)) => {
                if map.insert(package.clone(), dependencies).is_some() {
                    trace!(package = %package, "later record replaces earlier one");
                }
            }
            None => skipped += 1,
        }
    }

    debug!(
        packages = map.len(),
        skipped_blocks = skipped,
        "parsed control text"
    );
    map
}

/// Groups lines into records; blank lines (CRLF tolerated) end a record.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end_matches('\r'));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[&str]) -> Option<(PackageName, DependencyList)> {
    let mut package: Option<&str> = None;
    let mut depends: Option<String> = None;
    let mut continuing_depends = false;

    for line in lines {
        // Folded field: the line continues whatever field precedes it.
        if line.starts_with([' ', '\t']) {
            if continuing_depends {
                if let Some(value) = depends.as_mut() {
                    value.push(' ');
                    value.push_str(line.trim());
                }
            }
            continue;
        }

        continuing_depends = false;
        if let Some(value) = line.strip_prefix(PACKAGE_FIELD) {
            package = Some(value.trim());
        } else if let Some(value) = line.strip_prefix(DEPENDS_FIELD) {
            depends = Some(value.to_string());
            continuing_depends = true;
        }
    }

    let package = match PackageName::new(package?) {
        Ok(name) => name,
        Err(e) => {
            trace!("skipping record: {}", e);
            return None;
        }
    };
    let dependencies = depends
        .as_deref()
        .map(parse_depends_value)
        .unwrap_or_default();

    Some((package, dependencies))
}

/// Extracts bare package names from a `Depends:` value.
///
/// Commas, `|` and whitespace all separate names.
pub(crate) fn parse_depends_value(value: &str) -> DependencyList {
    strip_version_constraints(value)
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let bare = token.split(':').next().unwrap_or(token);
            PackageName::new(bare).ok()
        })
        .collect()
}

/// Removes `( ... )` constraint groups. An unclosed group ends at the next comma.
fn strip_version_constraints(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut depth = 0usize;

    for c in value.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            ',' => {
                depth = 0;
                out.push(c);
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    out
}
