use printq_core::order::Order;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render a queue as an aligned table: id, status, part, area, equipment,
/// requester, created.
pub fn print_orders(orders: &[Order]) {
    let headers = ["ID", "STATUS", "PART", "AREA", "EQUIPMENT", "REQUESTER", "CREATED"];
    let rows: Vec<[String; 7]> = orders
        .iter()
        .map(|o| {
            let part = match (&o.part, &o.other_part_description) {
                (printq_core::types::Part::Outra, Some(desc)) => format!("Outra ({desc})"),
                (part, _) => part.to_string(),
            };
            [
                o.id.clone(),
                o.status.to_string(),
                part,
                o.area.to_string(),
                o.equipment.clone(),
                o.name_and_registration.clone(),
                o.created_at.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", render(&header_cells));
    println!(
        "{}",
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &rows {
        println!("{}", render(row));
    }
}
