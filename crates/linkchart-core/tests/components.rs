// File: crates/linkchart-core/tests/components.rs
// Purpose: Option defaults/overrides and the layouts produced by legends, line charts and scatter plots.

use linkchart_core::geometry::{Point, Rect};
use linkchart_core::{
    BrushExtent, ChartError, Color, LineChart, Legend, Orientation, Palette, ScatterPlot,
};
use serde_json::{json, Value};

#[test]
fn horizontal_legend_defaults_and_layout() {
    let legend = Legend::horizontal(&Value::Null).expect("legend");
    assert_eq!(legend.orientation(), Orientation::Horizontal);
    assert_eq!(legend.attr("cellWidth").expect("attr"), json!(30.0));
    assert_eq!(legend.attr("caption").expect("attr"), json!("Legend"));

    let layout = legend.render();
    assert_eq!(layout.origin, Point::new(10.0, 20.0));
    assert_eq!(layout.cells.len(), 3);
    assert_eq!(layout.cells[2].rect, Rect::from_xywh(60.0, 0.0, 30.0, 20.0));
    assert_eq!(layout.cells[0].color, Color::from_hex(0x3182bd));
    assert_eq!(layout.ticks[1].to, Point::new(30.0, 25.0));
    assert_eq!(layout.ticks[1].text_at, Point::new(30.0, 35.0));
    assert_eq!(layout.caption.position, Point::new(0.0, -6.0));
    assert_eq!(layout.caption.font_size, 14.0);
}

#[test]
fn vertical_legend_stacks_cells_and_points_ticks_left() {
    let legend = Legend::vertical(&json!({ "labels": ["low", "high"] })).expect("legend");
    let layout = legend.render();
    assert_eq!(layout.origin, Point::new(50.0, 30.0));
    assert_eq!(layout.cells[1].rect, Rect::from_xywh(0.0, 20.0, 30.0, 20.0));
    assert_eq!(layout.ticks[1].to, Point::new(-5.0, 20.0));
    assert_eq!(layout.ticks[1].text_at, Point::new(-15.0, 20.0));
    assert_eq!(layout.caption.position, Point::new(-30.0, -20.0));

    let v = serde_json::to_value(&layout).expect("json");
    assert_eq!(v["orientation"], "vertical");
    assert_eq!(v["cells"][0]["label"], "low");
}

#[test]
fn legend_setters_chain_and_reject_unknown_names() {
    let mut legend = Legend::horizontal(&Value::Null).expect("legend");
    legend
        .set_attr("caption", "Fruit")
        .expect("caption")
        .set_attr("cellWidth", 40)
        .expect("cellWidth")
        .set_attr("color", "category10")
        .expect("color");
    assert_eq!(legend.config().caption, "Fruit");
    assert_eq!(legend.config().color, Palette::category10());
    assert_eq!(legend.render().cells[1].rect.x, 40.0);

    assert!(matches!(legend.set_attr("colour", "red"), Err(ChartError::UnknownOption { .. })));
    assert!(matches!(legend.attr("colour"), Err(ChartError::UnknownOption { .. })));
    assert!(matches!(legend.set_attr("cellWidth", "wide"), Err(ChartError::InvalidOption { .. })));
    assert_eq!(legend.config().cell_width, 40.0);
}

#[test]
fn construction_rejects_bad_overrides() {
    let err = LineChart::new("l", &json!({ "colour": "red" })).err().expect("unknown key");
    assert!(matches!(err, ChartError::UnknownOption { component: "LineChart", .. }));
    let err = ScatterPlot::new("s", &json!([1, 2])).err().expect("not an object");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert!(Legend::vertical(&json!({ "tickLength": "long" })).is_err());
}

#[test]
fn line_chart_layout_and_hover_marker() {
    let chart = LineChart::new("line", &Value::Null).expect("line");
    chart.set_attr("labels", json!(["t", "v"])).expect("labels");

    let layout = chart.render().expect("layout");
    assert_eq!(layout.path.len(), 5);
    assert_eq!(layout.path[0], Point::new(0.0, 400.0));
    assert_eq!(layout.path[4], Point::new(600.0, 0.0));
    assert_eq!(layout.zones[1].rect, Rect::from_xywh(150.0, 0.0, 150.0, 400.0));
    assert_eq!(layout.zones[1].rect.right(), layout.zones[2].rect.x);
    assert_eq!(layout.zones[1].rect.bottom(), 400.0);
    assert_eq!(layout.y_axis.label.as_deref(), Some("v"));
    assert!(layout.hover.is_none());

    chart.mouse_over(vec![2.0, 4.0]).expect("hover");
    let layout = chart.render().expect("layout");
    let (marker, label) = layout.hover.expect("hover marker");
    assert_eq!(marker.center, Point::new(300.0, 300.0));
    assert_eq!(marker.color, Color::rgb(255, 0, 0));
    assert_eq!(label.text, "4");
    assert_eq!(label.position, Point::new(300.0, 290.0));

    chart.mouse_out(vec![2.0, 4.0]).expect("out");
    assert!(chart.render().expect("layout").hover.is_none());
}

#[test]
fn line_chart_single_row_zone_spans_width() {
    let chart = LineChart::new("line", &json!({ "data": [[5.0, 5.0]] })).expect("line");
    let layout = chart.render().expect("layout");
    assert_eq!(layout.zones.len(), 1);
    assert_eq!(layout.zones[0].rect.width, 600.0);

    chart.set_attr("data", json!([])).expect("data");
    assert!(matches!(chart.render(), Err(ChartError::InvalidInput(_))));
}

#[test]
fn line_chart_uses_configured_columns() {
    let chart = LineChart::new(
        "line",
        &json!({ "data": [[9.0, 0.0, 1.0], [9.0, 2.0, 3.0]], "xi": 1, "yi": 2 }),
    )
    .expect("line");
    let layout = chart.render().expect("layout");
    assert_eq!(layout.path, vec![Point::new(0.0, 400.0), Point::new(600.0, 0.0)]);

    chart.set_attr("yi", 7).expect("yi");
    assert!(matches!(chart.render(), Err(ChartError::InvalidInput(_))));
}

#[test]
fn scatter_layout_reflects_brush_selection() {
    let plot = ScatterPlot::new("scatter", &json!({ "selectedRadius": 10.0 })).expect("scatter");
    let layout = plot.render().expect("layout");
    assert_eq!(layout.origin, Point::new(60.0, 20.0));
    assert_eq!(layout.plot_width, 525.0);
    assert_eq!(layout.plot_height, 320.0);
    assert_eq!(layout.dots[4].center, Point::new(525.0, 0.0));
    assert!(layout.dots.iter().all(|d| !d.selected && d.color == Color::rgb(70, 130, 180)));

    plot.brush(BrushExtent::new(4.0, 16.0, 2.5, 5.0)).expect("brush");
    let layout = plot.render().expect("layout");
    let picked: Vec<usize> = layout.dots.iter().filter(|d| d.selected).map(|d| d.row).collect();
    assert_eq!(picked, vec![3, 4]);
    assert_eq!(layout.dots[3].radius, 10.0);
    assert_eq!(layout.dots[3].color, Color::rgb(255, 0, 0));
}

#[test]
fn scatter_hover_label_shows_y_value() {
    let plot = ScatterPlot::new("scatter", &Value::Null).expect("scatter");
    plot.mouse_over(vec![3.0, 9.0]).expect("hover");
    let layout = plot.render().expect("layout");
    let label = layout.label.expect("label");
    assert_eq!(label.text, "9");
    assert!(layout.dots[3].selected);
    assert_eq!(plot.attr("unselectedColor").expect("attr"), json!("#4682b4"));
}
