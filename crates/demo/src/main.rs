// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV table, reports its columns, then links a scatter plot and a line chart
//          and writes their layouts after a simulated hover and brush.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use linkchart_core::{BrushExtent, LineChart, ScatterPlot, Table};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SAMPLE: &str = "\
month,visits,signups,channel
1,120,8,search
2,135,11,search
3,160,9,social
4,210,17,social
5,260,22,email
6,240,19,email
";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linkchart_core=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let table = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            info!(path = %path.display(), "Loaded CSV");
            Table::from_csv_str(&text).with_context(|| format!("failed to parse '{}'", path.display()))?
        }
        None => {
            info!("No input given; using built-in sample");
            Table::from_csv_str(SAMPLE)?
        }
    };

    println!("Headers: {:?}", table.header());
    println!("Numeric headers: {:?}", table.numeric_headers());
    for (i, name) in table.header().iter().enumerate() {
        match (table.min(i), table.max(i)) {
            (Ok(lo), Ok(hi)) => println!("  {name}: [{lo}, {hi}]"),
            (Err(e), _) | (_, Err(e)) => warn!(column = %name, error = %e, "No range"),
        }
    }
    println!("Records: {}", serde_json::to_string_pretty(&table.to_records())?);

    let numeric = table.numeric_indices();
    let [xc, yc] = match numeric.as_slice() {
        [x, y, ..] => [*x, *y],
        _ => anyhow::bail!("need at least two numeric columns to plot, found {}", numeric.len()),
    };
    let data = table.numeric_matrix(&[xc, yc])?;
    let labels = [table.header()[xc].clone(), table.header()[yc].clone()];

    let scatter = Rc::new(ScatterPlot::new("scatter", &json!({ "data": data, "labels": labels }))?);
    let line = Rc::new(LineChart::new("line", &json!({ "data": data, "labels": labels }))?);
    scatter.add_listener(&line);
    line.add_listener(&scatter);

    if let Some(row) = data.get(data.len() / 2) {
        let delivery = line.mouse_over(row.clone())?;
        info!(delivered = delivery.delivered, failed = delivery.failed.len(), "Hover relayed");
    }

    let (x0, x1) = span(&data, 0);
    let (y0, y1) = span(&data, 1);
    let brush = BrushExtent::new(x0 + (x1 - x0) / 2.0, y0, x1, y1);
    let delivery = scatter.brush(brush)?;
    info!(delivered = delivery.delivered, selected = line.state().selection.len(), "Brush relayed");

    let out = out_dir()?;
    write_json(&out.join("scatter.json"), &scatter.render()?)?;
    write_json(&out.join("line.json"), &line.render()?)?;
    Ok(())
}

fn span(data: &[Vec<f64>], col: usize) -> (f64, f64) {
    data.iter()
        .map(|d| d[col])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn out_dir() -> Result<PathBuf> {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    Ok(out)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
