//! Go source rendering of the layout facts.

use crate::arch::ArchTag;
use crate::layout::LayoutFacts;

/// Package of the facade consuming the generated constants
pub const PACKAGE: &str = "v4l2";

/// Name of the pointer-width constant
pub const POINTER_WIDTH_NAME: &str = "__SIZEOF_POINTER__";

const BANNER: [&str; 5] = [
    "/////////////////////////////////////////////////////",
    "//                                                 //",
    "//  !!! THIS IS A GENERATED FILE, DO NOT EDIT !!!  //",
    "//                                                 //",
    "/////////////////////////////////////////////////////",
];

/// Render the complete Go source file.
///
/// Output depends only on the arguments, so equal inputs give byte-identical
/// files.
pub fn render(arch: &ArchTag, facts: &LayoutFacts) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("// +build linux".to_string());
    lines.push(format!("// +build {}", arch));
    lines.push(String::new());

    lines.extend(BANNER.iter().map(|line| line.to_string()));
    lines.push(String::new());

    lines.push(format!("package {}", PACKAGE));
    lines.push(String::new());

    push_const_block(&mut lines, &[(POINTER_WIDTH_NAME, facts.pointer_width)]);

    let offsets: Vec<(&str, u64)> = facts
        .offsets
        .iter()
        .map(|fact| (fact.name, fact.offset))
        .collect();
    push_const_block(&mut lines, &offsets);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `const ( ... )` with the `=` signs aligned, followed by a blank line.
fn push_const_block(lines: &mut Vec<String>, entries: &[(&str, u64)]) {
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    lines.push("const (".to_string());
    for (name, value) in entries {
        lines.push(format!("\t{:<width$} = {}", name, value, width = width));
    }
    lines.push(")".to_string());
    lines.push(String::new());
}
