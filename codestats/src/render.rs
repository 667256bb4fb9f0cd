//! Terminal rendering for scan reports.

use codestatslib::{Diagnostic, LanguageConfig, ScanReport, StatsNode};
use console::Style;

const NAME_WIDTH: usize = 24;
const COUNT_WIDTH: usize = 12;

/// Render the full report: a flattened per-language table, plus a
/// repository breakdown when boundaries were discovered.
pub fn render_report(report: &ScanReport, config: &LanguageConfig) -> String {
    let mut output = String::new();

    let flat = report.tree.flattened();
    let mut rows: Vec<(&String, u64)> = flat.iter().map(|(name, count)| (name, *count)).collect();
    // Largest languages first, name as tie-breaker.
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    // Pad before styling so escape codes never count toward column widths.
    let header = Style::new().bold();
    output.push_str(&format!(
        "{}{}\n",
        header.apply_to(format!("{:<width$}", "Language", width = NAME_WIDTH)),
        header.apply_to(format!("{:>width$}", "Lines", width = COUNT_WIDTH)),
    ));
    output.push_str(&format!("{}\n", "-".repeat(NAME_WIDTH + COUNT_WIDTH)));

    for (name, count) in &rows {
        let style = language_style(config, name);
        output.push_str(&format!(
            "{}{:>width$}\n",
            style.apply_to(format!("{:<name_width$}", name, name_width = NAME_WIDTH)),
            count,
            width = COUNT_WIDTH,
        ));
    }

    output.push_str(&format!("{}\n", "-".repeat(NAME_WIDTH + COUNT_WIDTH)));
    output.push_str(&format!(
        "{}{:>width$}\n",
        header.apply_to(format!("{:<name_width$}", "Total", name_width = NAME_WIDTH)),
        report.tree.total_lines(),
        width = COUNT_WIDTH,
    ));

    if !report.tree.children.is_empty() {
        output.push('\n');
        output.push_str(&format!("{}\n", header.apply_to("Repositories")));
        render_children(&report.tree, 1, &mut output);
    }

    output
}

/// Indented per-repository totals, one line per node.
fn render_children(node: &StatsNode, depth: usize, output: &mut String) {
    for (name, child) in &node.children {
        let label = format!("{}{}", "  ".repeat(depth), name);
        output.push_str(&format!(
            "{:<name$}{:>count$}\n",
            label,
            child.total_lines(),
            name = NAME_WIDTH,
            count = COUNT_WIDTH,
        ));
        render_children(child, depth + 1, output);
    }
}

/// Recovered-condition listing for `--verbose`.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} recovered error(s):\n", diagnostics.len()));
    for diagnostic in diagnostics {
        output.push_str(&format!("  {}\n", diagnostic));
    }
    output
}

/// Style for a language row, from its configured "#rrggbb" color.
fn language_style(config: &LanguageConfig, name: &str) -> Style {
    config
        .language_by_name(name)
        .color
        .as_deref()
        .and_then(hex_to_color256)
        .map(|index| Style::new().color256(index))
        .unwrap_or_default()
}

/// Map a "#rrggbb" color to the nearest entry of the 6x6x6 xterm cube.
fn hex_to_color256(hex: &str) -> Option<u8> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    let quantize = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
    Some(16 + 36 * quantize(r) + 6 * quantize(g) + quantize(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codestatslib::{scan, Language, ScanOptions};
    use std::fs;
    use tempfile::tempdir;

    fn test_config() -> LanguageConfig {
        LanguageConfig::from_parts(
            vec![Language::new(
                "Python",
                vec![".py".into()],
                Some("#3572A5".into()),
            )],
            vec![],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_hex_to_color256() {
        assert_eq!(hex_to_color256("#000000"), Some(16));
        assert_eq!(hex_to_color256("#ffffff"), Some(231));
        assert_eq!(hex_to_color256("#ff0000"), Some(196));
        assert_eq!(hex_to_color256("not-a-color"), None);
        assert_eq!(hex_to_color256("#fff"), None);
    }

    #[test]
    fn test_render_report_lists_languages_and_total() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.py"), "x = 1\ny = 2\n").unwrap();

        let config = test_config();
        let report = scan(temp.path(), &config, ScanOptions::new()).unwrap();
        let rendered = render_report(&report, &config);

        assert!(rendered.contains("Python"));
        assert!(rendered.contains("Total"));
        assert!(rendered.contains('2'));
        // No boundaries discovered, no repository section.
        assert!(!rendered.contains("Repositories"));
    }

    #[test]
    fn test_render_report_repository_breakdown() {
        let temp = tempdir().unwrap();
        let sub = temp.path().join("engine");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(".git"), "gitdir: elsewhere\n").unwrap();
        fs::write(sub.join("a.py"), "x = 1\n").unwrap();

        let config = test_config();
        let report = scan(temp.path(), &config, ScanOptions::new().git_mode(true)).unwrap();
        let rendered = render_report(&report, &config);

        assert!(rendered.contains("Repositories"));
        assert!(rendered.contains("engine"));
    }

    #[test]
    fn test_render_diagnostics_lists_paths() {
        use codestatslib::DiagnosticKind;
        let diagnostics = vec![Diagnostic::new(
            "/some/file",
            DiagnosticKind::FileRead,
            "permission denied",
        )];
        let rendered = render_diagnostics(&diagnostics);
        assert!(rendered.contains("1 recovered error(s)"));
        assert!(rendered.contains("/some/file"));
        assert!(rendered.contains("permission denied"));
    }
}
