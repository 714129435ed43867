use std::path::Path;

use anyhow::{Context, Result};
use platewise_plan::{OptimalPlan, SensitivityCell};
use serde::Serialize;

/// Row of the optimal-quantities artifact.
#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    #[serde(rename = "Type of Food")]
    food_type: &'a str,
    #[serde(rename = "Event Type")]
    event_type: &'a str,
    #[serde(rename = "Optimal Quantity")]
    optimal_quantity: f64,
    #[serde(rename = "Wastage Per Unit")]
    wastage_per_unit: f64,
    #[serde(rename = "Cost Per Unit")]
    cost_per_unit: u32,
}

/// Row of the sensitivity artifact. A cell that did not reach an optimum
/// leaves the wastage column empty.
#[derive(Debug, Serialize)]
struct SweepRow<'a> {
    #[serde(rename = "Budget")]
    budget: f64,
    #[serde(rename = "Guest Factor")]
    guest_factor: f64,
    #[serde(rename = "Wastage Factor")]
    wastage_factor: f64,
    #[serde(rename = "Optimal Wastage")]
    optimal_wastage: Option<f64>,
    #[serde(rename = "Status")]
    status: &'a str,
}

pub fn write_plan_csv(plan: &OptimalPlan, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating plan output {}", path.display()))?;
    for line in &plan.lines {
        writer
            .serialize(PlanRow {
                food_type: &line.food_type,
                event_type: &line.event_type,
                optimal_quantity: line.optimal_quantity,
                wastage_per_unit: line.wastage_per_unit,
                cost_per_unit: line.cost_per_unit,
            })
            .context("writing plan row")?;
    }
    writer.flush().context("flushing plan output")?;
    Ok(())
}

pub fn write_sweep_csv(cells: &[SensitivityCell], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating sweep output {}", path.display()))?;
    for cell in cells {
        writer
            .serialize(SweepRow {
                budget: cell.budget,
                guest_factor: cell.guest_factor,
                wastage_factor: cell.wastage_factor,
                optimal_wastage: cell.optimal_wastage,
                status: cell.status_label(),
            })
            .context("writing sweep row")?;
    }
    writer.flush().context("flushing sweep output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_plan::PlanLine;
    use platewise_solver::LpStatus;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_plan_csv() {
        let plan = OptimalPlan {
            lines: vec![PlanLine {
                food_type: "Meat".to_string(),
                event_type: "Corporate".to_string(),
                optimal_quantity: 45.0,
                wastage_per_unit: 10.0,
                cost_per_unit: 200,
            }],
            total_wastage: 450.0,
        };

        let file = NamedTempFile::new().unwrap();
        write_plan_csv(&plan, file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Type of Food,Event Type,Optimal Quantity,Wastage Per Unit,Cost Per Unit"
        );
        assert_eq!(lines.next().unwrap(), "Meat,Corporate,45.0,10.0,200");
    }

    #[test]
    fn test_write_sweep_csv_leaves_failed_cells_empty() {
        let cells = vec![
            SensitivityCell {
                budget: 300.0,
                guest_factor: 0.2,
                wastage_factor: 0.5,
                optimal_wastage: Some(62.5),
                status: LpStatus::Optimal,
            },
            SensitivityCell {
                budget: 300.0,
                guest_factor: 0.2,
                wastage_factor: 0.7,
                optimal_wastage: None,
                status: LpStatus::Infeasible,
            },
        ];

        let file = NamedTempFile::new().unwrap();
        write_sweep_csv(&cells, file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Budget,Guest Factor,Wastage Factor,Optimal Wastage,Status"
        );
        assert_eq!(lines.next().unwrap(), "300.0,0.2,0.5,62.5,Optimal");
        assert_eq!(lines.next().unwrap(), "300.0,0.2,0.7,,Infeasible");
    }
}
