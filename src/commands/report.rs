use std::io::Write;

use anyhow::Result;

use crate::model::{Check, Detail, HighlightColor, ValidationReport, ValidationRun};

const RULE_WIDTH: usize = 80;

fn write_banner<W: Write>(output: &mut W, title: &str) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(output, "{rule}\n{title}\n{rule}\n")?;
    Ok(())
}

fn write_checks<W: Write>(output: &mut W, checks: &[Check]) -> Result<()> {
    for check in checks {
        writeln!(output, "{} [{}]", check.title, check.status.as_str().to_uppercase())?;
        for detail in &check.details {
            writeln!(output, "  {detail}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_text_report<W: Write>(output: &mut W, report: &ValidationReport) -> Result<()> {
    let run = &report.run;
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(output, "{rule}")?;
    writeln!(output, "METHODOLOGY & MODEL VALIDATION REPORT")?;
    writeln!(output, "Generated: {}", report.generated_at)?;
    writeln!(output, "{rule}\n")?;

    writeln!(output, "FILES ANALYZED:")?;
    writeln!(output, "- Methodology: {}", report.methodology_path)?;
    writeln!(
        output,
        "- Excel Model: {}\n",
        report.model_path.as_deref().unwrap_or("(none)")
    )?;

    writeln!(
        output,
        "OVERALL: {} ({}% validated; {} of {} scorable checks passed, {} failed)\n",
        run.score.label.as_str(),
        run.score.percentage,
        run.score.passed,
        run.score.scorable,
        run.score.failed
    )?;

    write_banner(output, "METHODOLOGY ANALYSIS")?;
    write_checks(output, &run.methodology)?;

    write_banner(output, "EXCEL MODEL ANALYSIS")?;
    write_checks(output, &run.excel)?;

    write_banner(output, "ALIGNMENT ANALYSIS")?;
    write_checks(output, &run.alignment)?;

    write_banner(output, "SROI ANALYSIS")?;
    if let Some(value) = run.sroi.value {
        writeln!(output, "SROI Value: 1:{value:.2}\n")?;
    }
    for detail in &run.sroi.details {
        writeln!(output, "{detail}")?;
    }
    writeln!(output)?;

    if !run.sroi.warnings.is_empty() {
        writeln!(output, "\nSROI WARNINGS:")?;
        for warning in &run.sroi.warnings {
            writeln!(output, "\n⚠ {}", warning.message)?;
            for recommendation in &warning.recommendations {
                writeln!(output, "  - {recommendation}")?;
            }
        }
    }

    writeln!(output)?;
    write_banner(output, "RECOMMENDATIONS")?;
    for recommendation in &run.recommendations {
        writeln!(
            output,
            "{} [{}]",
            recommendation.title,
            recommendation.level.as_str().to_uppercase()
        )?;
        for item in &recommendation.items {
            writeln!(output, "  - {item}")?;
        }
        writeln!(output)?;
    }

    Ok(())
}

fn highlighted<'a>(
    run: &'a ValidationRun,
    color: HighlightColor,
) -> impl Iterator<Item = (&'a str, &'a Detail)> {
    run.all_checks().flat_map(move |check| {
        check
            .details
            .iter()
            .filter(move |detail| detail.highlight() == Some(color))
            .map(move |detail| (check.title.as_str(), detail))
    })
}

/// Review highlights grouped by colour: yellow for concerns, blue for UK data.
pub fn write_highlights<W: Write>(output: &mut W, run: &ValidationRun) -> Result<()> {
    writeln!(output, "METHODOLOGY REVIEW HIGHLIGHTS")?;
    writeln!(output, "{}\n", "=".repeat(RULE_WIDTH))?;

    writeln!(output, "YELLOW HIGHLIGHTS (Questions/Concerns):")?;
    for (title, detail) in highlighted(run, HighlightColor::Yellow) {
        writeln!(output, "- [{title}] {}", detail.text())?;
    }
    writeln!(output, "- Review data inputs alignment with methodology")?;
    writeln!(output, "- Verify all mentioned impacts are captured\n")?;

    writeln!(output, "BLUE HIGHLIGHTS (UK-Specific Data):")?;
    for (title, detail) in highlighted(run, HighlightColor::Blue) {
        writeln!(output, "- [{title}] {}", detail.text())?;
    }
    writeln!(output, "- Extract for expandable data tables")?;
    writeln!(output, "- Prepare for multi-country support")?;

    Ok(())
}
