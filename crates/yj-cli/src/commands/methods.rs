use comfy_table::{ContentArrangement, Table};
use yj_core::{CastingMethod, LineKind};

const KINDS: [LineKind; 4] = [
    LineKind::ChangingYin,
    LineKind::Yang,
    LineKind::Yin,
    LineKind::ChangingYang,
];

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Method".to_string()];
    header.extend(KINDS.iter().map(|k| format!("{k} ({})", k.value())));
    table.set_header(header);

    for method in [CastingMethod::ThreeCoin, CastingMethod::YarrowStalk] {
        let distribution = method.distribution();
        let mut row = vec![method.to_string()];
        row.extend(
            KINDS
                .iter()
                .map(|k| format!("{:.4}", distribution.probability(*k))),
        );
        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
