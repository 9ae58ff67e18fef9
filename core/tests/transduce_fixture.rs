use confman_core::{LineKind, LineOutcome, TransducerState, step, transduce};

const CONFIG: &str = "\
#
# Example config file for mcelog
# when set to yes this looks like an explanation
#

# Set CPU type for which mcelog decodes events:
#cpu = type
# for valid values for type please see mcelog --help.

[page]
# Memory error accounting per 4K page.
# threshold for the correct memory errors trigger script.
memory-ce-threshold = 10 / 24h
#memory-ce-trigger = page-error-trigger
memory-ce-action = soft
";

fn run(config: &str) -> (Vec<String>, String) {
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    transduce(config.as_bytes(), &mut out, &mut diagnostics).expect("transduce");
    let out = String::from_utf8(out).expect("utf8");
    (
        out.lines().map(str::to_string).collect(),
        String::from_utf8(diagnostics).expect("utf8"),
    )
}

#[test]
fn test_fixture_body() {
    let (lines, diagnostics) = run(CONFIG);
    assert_eq!(
        lines,
        vec![
            ".PP",
            "Set CPU type for which mcelog decodes events:",
            ".PP",
            ".B cpu = type",
            ".PP",
            "For valid values for type please see mcelog --help.",
            ".PP",
            ".PP",
            ".SS \"The page config section\"",
            "Memory error accounting per 4K page.",
            "threshold for the correct memory errors trigger script.",
            ".PP",
            ".B memory-ce-threshold = 10 / 24h",
            ".PP",
            ".B memory-ce-trigger = page-error-trigger",
            ".PP",
            ".B memory-ce-action = soft",
            ".PP",
        ]
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_header_explanations_never_reach_output() {
    let (lines, _) = run(CONFIG);
    assert!(!lines.iter().any(|line| line.contains("Example config file")));
    assert!(!lines.iter().any(|line| line.contains("looks like an explanation")));
}

#[test]
fn test_every_explanation_run_is_closed_exactly_once() {
    let (lines, _) = run(CONFIG);
    let mut in_run = false;
    for (idx, line) in lines.iter().enumerate() {
        let is_text = !line.starts_with('.');
        if in_run && !is_text {
            assert_eq!(line, ".PP", "run not closed before line {idx}");
        }
        in_run = is_text;
    }
    assert!(!in_run, "trailing explanation run");
}

#[test]
fn test_every_option_is_followed_by_paragraph() {
    let (lines, _) = run(CONFIG);
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with(".B ") {
            assert_eq!(lines.get(idx + 1).map(String::as_str), Some(".PP"));
        }
    }
}

#[test]
fn test_trailing_explanation_run_stays_open() {
    let (lines, _) = run("# h\n\n# dangling note\n");
    assert_eq!(lines, vec![".PP", "Dangling note"]);
}

#[test]
fn test_step_is_pure() {
    let state = TransducerState {
        in_header: false,
        explanation_run: 2,
        line_number: 41,
    };
    let (first, outcome_a) = step(state, "[dimm]");
    let (second, outcome_b) = step(state, "[dimm]");
    assert_eq!(first, second);
    assert_eq!(outcome_a, outcome_b);
    assert_eq!(first.line_number, 42);
    assert_eq!(
        outcome_a,
        LineOutcome::Line {
            closes_explanation: true,
            kind: LineKind::GroupHeader {
                name: "dimm".to_string()
            },
        }
    );
}
