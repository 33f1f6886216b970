//! Diagnostic reporting for configuration errors using ariadne
use crate::error::{SpecError, TemplateError};
use crate::span::Span;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Convert a span to a range for ariadne
fn span_to_range(span: Span) -> Range<usize> {
    span.range()
}

/// Render a configuration error as an annotated report.
///
/// Template errors point into the template text; `source_name` names the
/// template in the report header (e.g. the catalog entry it came from).
pub fn report_spec_error(source_name: &str, error: &SpecError) -> String {
    match error {
        SpecError::Template { template, error } => {
            report_template_error(source_name, template, error)
        }
        other => report_plain_error(source_name, other),
    }
}

/// Report a template error against the template source
pub fn report_template_error(source_name: &str, template: &str, error: &TemplateError) -> String {
    let report: Report<(&str, Range<usize>)> = match error {
        TemplateError::UnterminatedPlaceholder { span } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_message("Unterminated placeholder")
                .with_label(
                    Label::new((source_name, span_to_range(*span)))
                        .with_message("this placeholder is missing a closing '}'")
                        .with_color(Color::Red),
                )
                .with_help("Close the placeholder, e.g. {0}, or write '{{' for a literal brace")
                .finish()
        }
        TemplateError::InvalidPlaceholder { text, span } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_message(format!("Invalid placeholder: '{{{}}}'", text))
                .with_label(
                    Label::new((source_name, span_to_range(*span)))
                        .with_message("placeholders must be a group index")
                        .with_color(Color::Red),
                )
                .with_help("Use positional placeholders such as {0} and {1}")
                .finish()
        }
        TemplateError::UnmatchedBrace { span } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_message("Unmatched closing brace")
                .with_label(
                    Label::new((source_name, span_to_range(*span)))
                        .with_message("this '}' does not close a placeholder")
                        .with_color(Color::Red),
                )
                .with_help("Write '}}' for a literal brace")
                .finish()
        }
        TemplateError::MissingGroup {
            index,
            groups,
            span,
        } => Report::build(ReportKind::Error, source_name, span.start)
            .with_message(format!("No group for placeholder {{{}}}", index))
            .with_label(
                Label::new((source_name, span_to_range(*span)))
                    .with_message(format!("group {} does not exist", index))
                    .with_color(Color::Red),
            )
            .with_note(format!("{} group(s) were given", groups))
            .finish(),
        TemplateError::UnusedGroup { index } => {
            Report::build(ReportKind::Error, source_name, 0)
                .with_message(format!("Group {} is never used", index))
                .with_label(
                    Label::new((source_name, 0..template.len()))
                        .with_message(format!("this template has no {{{}}} placeholder", index))
                        .with_color(Color::Yellow),
                )
                .with_help("Remove the group or reference it in the template")
                .finish()
        }
    };

    render(report, source_name, template)
}

fn report_plain_error(source_name: &str, error: &SpecError) -> String {
    let help = match error {
        SpecError::EmptySelect => "Give the selection at least one child",
        SpecError::EmptyWeights => "Give at least one weight, or a single fixed weight",
        SpecError::InvalidWeight { .. } => "Weights must be finite numbers greater than zero",
        SpecError::ZeroCount => "Use a count of at least 1, or remove the branch",
        SpecError::InvalidRange { .. } => "Swap the bounds so that min <= max",
        SpecError::SubsetTooSmall { .. } => "Subsets are phrased over three or more items",
        SpecError::Template { .. } => "Check the template",
    };

    let report: Report<(&str, Range<usize>)> = Report::build(ReportKind::Error, source_name, 0)
        .with_message(error.to_string())
        .with_help(help)
        .finish();

    render(report, source_name, "")
}

fn render<'a>(
    report: Report<(&'a str, Range<usize>)>,
    source_name: &'a str,
    source: &str,
) -> String {
    let mut output = Vec::new();
    if report
        .write((source_name, Source::from(source)), &mut output)
        .is_err()
    {
        return String::new();
    }
    String::from_utf8_lossy(&output).into_owned()
}
