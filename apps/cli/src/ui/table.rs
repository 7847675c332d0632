use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use differential::application::{CatalogSummary, RankedDisorder};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn probability(value: f64) -> Cell {
    Cell::new(format!("{value:.6}")).set_alignment(CellAlignment::Right)
}

pub fn ranking_table(candidates: &[RankedDisorder]) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        "#", "Disorder", "Type", "p_low", "p_high", "Weight", "Matched",
    ]);

    for (rank, candidate) in candidates.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&candidate.name),
            Cell::new(&candidate.disorder_type),
            probability(candidate.p_low),
            probability(candidate.p_high),
            probability(candidate.relative_weight),
            Cell::new(candidate.matched_symptoms.join(", ")),
        ]);
    }
    table
}

pub fn summary_table(summary: &CatalogSummary) -> Table {
    let mut table = base_table();
    table.set_header(vec!["", "Count"]);
    table.add_row(vec![Cell::new("Disorders"), Cell::new(summary.disorders)]);
    table.add_row(vec![Cell::new("Distinct symptoms"), Cell::new(summary.symptoms)]);
    table.add_row(vec![
        Cell::new("Disorder-symptom associations"),
        Cell::new(summary.associations),
    ]);
    table.add_row(vec![
        Cell::new("Disorders without symptoms"),
        Cell::new(summary.disorders_without_symptoms),
    ]);
    for (disorder_type, count) in &summary.disorder_types {
        table.add_row(vec![Cell::new(format!("  {disorder_type}")), Cell::new(count)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_table_rows() {
        let candidates = vec![RankedDisorder {
            name: "Dravet syndrome".to_string(),
            id: 109,
            expert_link: String::new(),
            disorder_type: "Disease".to_string(),
            p_low: 0.25,
            p_high: 0.5,
            relative_weight: 1.0,
            matched_symptoms: vec!["Seizure".to_string(), "Ataxia".to_string()],
        }];

        let rendered = ranking_table(&candidates).to_string();
        assert!(rendered.contains("Dravet syndrome"));
        assert!(rendered.contains("0.500000"));
        assert!(rendered.contains("Seizure, Ataxia"));
    }
}
