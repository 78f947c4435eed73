//! Text extraction of named regions from source files and markdown documents.
//!
//! Both extractors return a borrowed slice of the input and fall back to an empty
//! string when the region cannot be located. Callers treat an empty region as
//! "requirement not met".

use regex::Regex;

/// Extract a function from its `function <name>` declaration through the first
/// line that consists solely of `}` at column zero.
///
/// Nested braces at column zero inside the function body end the region early.
#[must_use]
pub fn extract_function<'a>(content: &'a str, name: &str) -> &'a str {
    let pattern = format!(r"\bfunction\s+{}\b", regex::escape(name));
    let Ok(decl) = Regex::new(&pattern) else {
        return "";
    };
    let Some(found) = decl.find(content) else {
        return "";
    };

    let start = found.start();
    let mut offset = found.end();
    // Skip the remainder of the declaration line; the closing brace is on a later line.
    let Some(newline) = content[offset..].find('\n') else {
        return "";
    };
    offset += newline + 1;

    for line in content[offset..].split_inclusive('\n') {
        let line_end = offset + line.len();
        if line.trim_end() == "}" {
            return &content[start..offset + 1];
        }
        offset = line_end;
    }

    ""
}

/// Extract the body of a level-2 markdown section.
///
/// The body starts after the line `## <heading>` and stops before the next level-1
/// or level-2 heading, or at end of file. Surrounding whitespace is trimmed.
#[must_use]
pub fn extract_section<'a>(content: &'a str, heading: &str) -> &'a str {
    let target = format!("## {heading}");
    let mut offset = 0;
    let mut body_start = None;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match body_start {
            None => {
                if line.trim() == target {
                    body_start = Some(offset);
                }
            }
            Some(start) => {
                if is_top_level_heading(line) {
                    return content[start..line_start].trim();
                }
            }
        }
    }

    body_start.map_or("", |start| content[start..].trim())
}

fn is_top_level_heading(line: &str) -> bool {
    line.starts_with("# ") || line.starts_with("## ")
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
