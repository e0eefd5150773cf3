use anyhow::Result;
use tracing::info;

use crate::cli::SampleArgs;
use crate::model::{CellValue, SheetGrid, SpreadsheetModel};
use crate::util::{write_json_pretty, write_text};

pub const SAMPLE_METHODOLOGY_FILE: &str = "sample-methodology.txt";
pub const SAMPLE_MODEL_FILE: &str = "sample-model.json";

const SAMPLE_METHODOLOGY: &str = "\
Youth Employment Skills Training: SROI Methodology

1. Theory of change
The impact pathway runs from six months of skills training to secured employment,
higher earnings and improved wellbeing. Figure 1 shows the causal diagram.

2. Evidence base
Employment outcomes draw on longitudinal research published in peer-reviewed journals
and on official ONS statistics (Annual Survey of Hours and Earnings 2024). Wellbeing
benefits follow HM Treasury Green Book guidance and university-led studies.

3. Valuation approach
Outcomes are monetised using value factors: the average UK salary for earnings and a
QALY-based wellbeing value. Attribution, deadweight and displacement are applied as
deflation factors. Volunteering by alumni is not valued and is excluded from the
model because no robust financial proxy exists.
";

fn cell(text: &str) -> CellValue {
    CellValue::from(text)
}

fn rows(data: &[&[CellValue]]) -> SheetGrid {
    data.iter().map(|row| row.to_vec()).collect()
}

pub fn sample_model() -> SpreadsheetModel {
    let empty = CellValue::Empty;

    let results = rows(&[
        &[cell("Youth Employment Skills Training - Results")],
        &[],
        &[cell("Key Metrics")],
        &[],
        &[cell("SROI (Social Return on Investment)"), cell("1:5.5")],
        &[cell("Total Social Value Created"), cell("£275,000")],
        &[cell("Total Investment"), cell("£50,000")],
        &[],
        &[cell("Participants Helped"), CellValue::Number(150.0)],
        &[cell("Jobs Secured"), CellValue::Number(98.0)],
    ]);

    let assumptions = rows(&[
        &[cell("Value Factors & Assumptions")],
        &[],
        &[cell("Assumption"), cell("Value"), cell("Source")],
        &[cell("Average UK Salary"), cell("£33,000"), cell("ONS 2024")],
        &[cell("Wellbeing Value (QALY)"), cell("£8,500"), cell("NHS/HM Treasury")],
        &[cell("Attribution Factor"), cell("60%"), cell("Academic Research")],
        &[cell("Deadweight Factor"), cell("25%"), cell("IES Research")],
        &[cell("Displacement Factor"), cell("10%"), cell("Sector Standards")],
        &[cell("Drop-off per year"), cell("15%"), cell("Longitudinal Studies")],
    ]);

    let inputs = rows(&[
        &[cell("Data Input Fields")],
        &[],
        &[cell("Field"), cell("Example Value"), cell("Mandatory?")],
        &[cell("Number of Participants"), CellValue::Number(150.0), cell("YES")],
        &[cell("Program Cost"), cell("£50,000"), cell("YES")],
        &[cell("Duration (months)"), CellValue::Number(6.0), cell("YES")],
        &[cell("Age Range"), cell("16-24"), cell("NO")],
        &[cell("Employment Rate Achieved"), cell("65%"), cell("NO (uses research default)")],
        &[cell("Average Salary of Jobs"), cell("£25,000"), cell("NO (uses UK average)")],
    ]);

    let location = rows(&[
        &[cell("UK-Specific Data Table")],
        &[],
        &[cell("Metric"), cell("UK Value"), cell("Source/Year")],
        &[cell("Youth Unemployment Rate"), cell("11.2%"), cell("ONS 2024")],
        &[cell("Median Salary"), cell("£33,000"), cell("ONS 2024")],
        &[cell("Minimum Wage"), cell("£11.44/hour"), cell("Gov 2024")],
        &[cell("Tax Rate (Basic)"), cell("20%"), cell("HMRC")],
        &[cell("National Insurance"), cell("12%"), cell("HMRC")],
        &[cell("Wellbeing Value"), cell("£8,500"), cell("HM Treasury")],
        &[],
        &[empty, cell("Note: This table can be expanded for other countries")],
    ]);

    SpreadsheetModel::new()
        .with_sheet("Results", results)
        .with_sheet("Assumptions", assumptions)
        .with_sheet("Data Inputs", inputs)
        .with_sheet("UK Location Data", location)
}

pub fn sample_methodology() -> &'static str {
    SAMPLE_METHODOLOGY
}

pub fn run(args: SampleArgs) -> Result<()> {
    let methodology_path = args.out_dir.join(SAMPLE_METHODOLOGY_FILE);
    let model_path = args.out_dir.join(SAMPLE_MODEL_FILE);

    write_text(&methodology_path, sample_methodology())?;
    info!(path = %methodology_path.display(), "wrote sample methodology");

    let model = sample_model();
    write_json_pretty(&model_path, &model)?;
    info!(
        path = %model_path.display(),
        sheets = %model.sheet_names.join(", "),
        "wrote sample model"
    );

    Ok(())
}
