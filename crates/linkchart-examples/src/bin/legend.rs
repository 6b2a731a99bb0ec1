// File: crates/linkchart-examples/src/bin/legend.rs
// Summary: Minimal example that lays out a horizontal and a vertical legend and prints them as JSON.

use linkchart_core::Legend;
use serde_json::json;

fn main() -> linkchart_core::Result<()> {
    let labels = json!(["apples", "pears", "plums", "figs"]);

    let mut across = Legend::horizontal(&json!({ "labels": labels }))?;
    across.set_attr("caption", "Fruit")?.set_attr("color", "category10")?;

    let down = Legend::vertical(&json!({ "labels": labels, "cellHeight": 24 }))?;

    for legend in [&across, &down] {
        println!("{}", serde_json::to_string_pretty(&legend.render())?);
    }
    Ok(())
}
