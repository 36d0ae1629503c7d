//! Markdown-like report rendering.

use std::fmt::Write;

use smartchangelog_commit::{Commit, date_to_str};

use crate::Node;

/// Renders a grouping tree.
///
/// Every labeled group gets a `#` header whose level is its depth below the
/// root, followed by a blank line; every child block is followed by one blank
/// line. Leaves are rendered as a bulleted block.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut output = String::new();
    render_node(node, 0, &mut output);
    output
}

fn render_node(node: &Node, depth: usize, output: &mut String) {
    let Node::Group(group) = node else {
        if let Some(commit) = node.commit() {
            render_leaf(commit, output);
        }
        return;
    };

    for child in &group.children {
        if let Some(heading) = child.heading().filter(|heading| !heading.name.is_empty()) {
            _ = writeln!(
                output,
                "{} {}: {}\n",
                "#".repeat(depth + 1),
                heading.criterion,
                heading.name
            );
        }

        let mut child_output = String::new();
        render_node(child, depth + 1, &mut child_output);
        _ = writeln!(output, "{}\n", child_output.trim_matches('\n'));
    }
}

fn render_leaf(commit: &Commit, output: &mut String) {
    _ = writeln!(
        output,
        "* subject: {}",
        commit.subject.as_deref().unwrap_or_default()
    );
    if let Some(body) = commit.body.as_deref().filter(|body| !body.is_empty()) {
        render_multiline("body", body, output);
    }
    _ = writeln!(output, "    * date: {}", date_to_str(&commit.date));
    _ = writeln!(output, "    * author: {}", commit.author);
    _ = writeln!(output, "    * commit: {}", commit.id);
}

fn render_multiline(name: &str, value: &str, output: &mut String) {
    if value.contains('\n') {
        _ = writeln!(output, "    * {name}:");
        for line in value.split('\n') {
            _ = writeln!(output, "        - {line}");
        }
    } else {
        _ = writeln!(output, "    * {name}: {value}");
    }
}
