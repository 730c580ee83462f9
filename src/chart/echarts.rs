//! Export a [`ChartSpec`] as an ECharts option document.
//!
//! `yAxis` is always emitted as an array, even for a single axis, so consumers see one shape.

use serde_json::{Map, Value, json};

use super::types::{
    AxisPosition, AxisSpec, ChartSpec, SeriesSpec, ZoomDimension, ZoomKind, ZoomRegion,
};

/// Build the option object for `spec`.
pub fn to_option(spec: &ChartSpec) -> Value {
    let legend: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
    json!({
        "title": { "text": spec.title, "left": "center", "top": 0 },
        "tooltip": { "trigger": "axis" },
        "legend": { "data": legend, "top": "30px" },
        "xAxis": { "type": "category", "data": spec.categories },
        "yAxis": spec.axes.iter().map(y_axis).collect::<Vec<_>>(),
        "series": spec.series.iter().map(series).collect::<Vec<_>>(),
        "dataZoom": spec.zoom.iter().map(data_zoom).collect::<Vec<_>>(),
    })
}

fn y_axis(axis: &AxisSpec) -> Value {
    let mut out = Map::new();
    out.insert("type".into(), json!("value"));
    if let Some(name) = &axis.name {
        out.insert("name".into(), json!(name));
    }
    out.insert("min".into(), json!(axis.min));
    out.insert("max".into(), json!(axis.max));
    out.insert("interval".into(), json!(axis.tick_interval));
    let position = match axis.position {
        AxisPosition::Left => "left",
        AxisPosition::Right => "right",
    };
    out.insert("position".into(), json!(position));
    out.insert("offset".into(), json!(axis.offset));
    let mut line = json!({ "show": true });
    if let Some(color) = axis.color_hint {
        line["lineStyle"] = json!({ "color": color.to_hex() });
    }
    out.insert("axisLine".into(), line);
    Value::Object(out)
}

fn series(s: &SeriesSpec) -> Value {
    let mut out = Map::new();
    out.insert("name".into(), json!(s.name));
    out.insert("type".into(), json!("line"));
    out.insert("data".into(), json!(s.values));
    out.insert("yAxisIndex".into(), json!(s.axis_index));
    out.insert("itemStyle".into(), json!({ "color": s.color.to_hex() }));
    if let Some(y) = s.benchmark_line {
        out.insert("markLine".into(), json!({ "data": [{ "yAxis": y }] }));
    }
    Value::Object(out)
}

fn data_zoom(z: &ZoomRegion) -> Value {
    let kind = match z.kind {
        ZoomKind::Slider => "slider",
        ZoomKind::Inside => "inside",
    };
    let index_key = match z.dimension {
        ZoomDimension::X => "xAxisIndex",
        ZoomDimension::Y => "yAxisIndex",
    };
    let mut out = Map::new();
    out.insert("type".into(), json!(kind));
    out.insert(index_key.into(), json!(z.axis_indices));
    out.insert("start".into(), json!(z.start));
    out.insert("end".into(), json!(z.end));
    Value::Object(out)
}
