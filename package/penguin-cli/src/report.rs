use std::io::Write;
use std::ops::Range;
use ariadne::{Color, Label, Report, ReportKind, Source};
use penguin_diagnostics::{Diagnostic, DiagnosticSeverity, ErrorKind};

const fn error_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::UnterminatedString => 1,
        ErrorKind::InvalidIdentifier => 2,
        ErrorKind::UnsupportedStatement => 3,
        ErrorKind::CaseSensitivity => 4,
        ErrorKind::MissingParentheses => 5,
        ErrorKind::UndefinedVariable => 6,
        ErrorKind::InvalidExpression => 7,
        ErrorKind::InvalidInputSyntax => 8,
        ErrorKind::EmptySource => 9,
        ErrorKind::SourceTooLong => 10,
        ErrorKind::Unclassified => 99,
    }
}

/// Char range of the 0-based `index`th raw line, without its line break.
fn line_span(source: &str, index: usize) -> Range<usize> {
    let start = source.split_inclusive('\n').take(index).map(|l| l.chars().count()).sum();
    let len = source.lines().nth(index).map_or(0, |l| l.chars().count());

    start..start + len
}

const fn report_kind(severity: DiagnosticSeverity) -> ReportKind<'static> {
    match severity {
        DiagnosticSeverity::Error => ReportKind::Error,
        DiagnosticSeverity::Defect => ReportKind::Custom("Interpreter defect", Color::Magenta),
    }
}

/// Writes `diagnostic` against `source` the way a compiler would.
pub fn write_report(diagnostic: &dyn Diagnostic, source: &str, out: impl Write) -> std::io::Result<()> {
    let line = diagnostic.line();
    let message = diagnostic.human_readable_message();
    let span = line.map_or(0..0, |line| line_span(source, line.index()));
    let mut report = Report::<Range<usize>>::build(report_kind(diagnostic.severity()), (), span.start)
        .with_code(format!("E{:02}", error_code(diagnostic.kind())))
        .with_message(diagnostic.kind().to_string());

    report = if line.is_some() {
        report.with_label(Label::new(span).with_message(message))
    } else {
        report.with_note(message)
    };

    report.finish().write(Source::from(source), out)
}

#[cfg(test)]
mod tests {
    use penguin_diagnostics::{ClassifiedError, ErrorKind};
    use penguin_source_span::LineNumber;
    use super::{line_span, write_report};

    #[test]
    fn spans_count_chars() {
        let source = "x = 1\nprint(\"é\")\r\nprint(y)";
        assert_eq!(line_span(source, 0), 0..5);
        assert_eq!(line_span(source, 1), 6..16);
        assert_eq!(line_span(source, 2), 18..26);
        assert_eq!(line_span(source, 9), 26..26);
    }

    #[test]
    fn report_names_kind_and_message() {
        let source = "name = \"Alex\"\nprint(score)";
        let error = ClassifiedError::new(ErrorKind::UndefinedVariable, LineNumber::try_new(2), "score is not defined".to_string());
        let mut out = vec![];
        write_report(&error, source, &mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("ariadne writes UTF-8");
        assert!(text.contains("E06"));
        assert!(text.contains("undefined variable"));
        assert!(text.contains("score is not defined"));
    }

    #[test]
    fn defect_is_reported_as_such() {
        let error = ClassifiedError::new(ErrorKind::Unclassified, None, "something broke".to_string());
        let mut out = vec![];
        write_report(&error, "x = 1", &mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("ariadne writes UTF-8");
        assert!(text.contains("Interpreter defect"));
        assert!(text.contains("something broke"));
    }
}
