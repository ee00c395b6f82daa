use crate::format::format_weight_kg;
use shared::models::EprReport;
use std::f64::consts::{FRAC_PI_2, TAU};
use yew::{Html, Properties, function_component, html};

/// Fixed slice palette, reused cyclically by slice position.
pub const PALETTE: [&str; 6] = [
    "#38761d", "#5a9a47", "#7cb870", "#a0d69a", "#c5f4c3", "#e7f9e6",
];

const VIEW_SIZE: f64 = 240.0;
const RADIUS: f64 = 100.0;

/// One entry of the derived chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSlice {
    pub name: String,
    pub weight: f64,
}

/// Derive the chart series from a report, in stream-map iteration order.
#[must_use]
pub fn stream_series(report: &EprReport) -> Vec<StreamSlice> {
    report
        .streams
        .iter()
        .map(|(name, metrics)| StreamSlice {
            name: name.clone(),
            weight: metrics.weight,
        })
        .collect()
}

/// Palette color for the slice at `index`, cycling past the palette end.
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// SVG path for a pie slice spanning `start..end`, both fractions of the
/// full circle measured clockwise from 12 o'clock.
fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let start_angle = start.mul_add(TAU, -FRAC_PI_2);
    let end_angle = end.mul_add(TAU, -FRAC_PI_2);
    let x1 = r.mul_add(start_angle.cos(), cx);
    let y1 = r.mul_add(start_angle.sin(), cy);
    let x2 = r.mul_add(end_angle.cos(), cx);
    let y2 = r.mul_add(end_angle.sin(), cy);
    let large_arc = u8::from(end - start > 0.5);
    format!("M {cx:.3} {cy:.3} L {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z")
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub series: Vec<StreamSlice>,
}

/// Proportional breakdown of the series, with a legend underneath.
#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let total: f64 = props
        .series
        .iter()
        .map(|slice| slice.weight.max(0.0))
        .sum();

    if total <= 0.0 {
        return html! {
            <div class="p-8 text-center text-sm text-base-content/70">
                {"No stream data to chart yet."}
            </div>
        };
    }

    let center = VIEW_SIZE / 2.0;
    let mut cursor = 0.0_f64;
    let slices: Vec<Html> = props
        .series
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.weight > 0.0)
        .map(|(index, slice)| {
            let fraction = slice.weight / total;
            let start = cursor;
            cursor += fraction;
            let fill = palette_color(index);
            // A single-stream report covers the whole disc; the arc form
            // degenerates at a full turn.
            if fraction >= 1.0 {
                html! {
                    <circle
                        cx={center.to_string()}
                        cy={center.to_string()}
                        r={RADIUS.to_string()}
                        fill={fill}
                    >
                        <title>{ format!("{}: {}", slice.name, format_weight_kg(slice.weight)) }</title>
                    </circle>
                }
            } else {
                html! {
                    <path d={arc_path(center, center, RADIUS, start, cursor)} fill={fill}>
                        <title>{ format!("{}: {}", slice.name, format_weight_kg(slice.weight)) }</title>
                    </path>
                }
            }
        })
        .collect();

    html! {
        <div class="flex flex-col items-center gap-4">
            <svg
                viewBox={format!("0 0 {VIEW_SIZE} {VIEW_SIZE}")}
                class="w-full max-w-xs"
                role="img"
                aria-label="Weight by EPR stream"
            >
                { for slices }
            </svg>
            <ul class="flex flex-wrap justify-center gap-x-4 gap-y-1 text-sm">
                { for props.series.iter().enumerate().map(|(index, slice)| html! {
                    <li class="flex items-center gap-2">
                        <span
                            class="inline-block w-3 h-3 rounded-sm"
                            style={format!("background-color: {}", palette_color(index))}
                        ></span>
                        <span>{ format!("{} ({})", slice.name, format_weight_kg(slice.weight)) }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
