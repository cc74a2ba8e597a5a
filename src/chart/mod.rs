// src/chart/mod.rs
//
// Task-wise performance chart: the employee's per-service-type averages in
// blue with the team averages overlaid in red, rendered to an in-memory PNG.
// Each call draws into its own buffer, so concurrent requests never share
// drawing state.

use std::io::Cursor;

use anyhow::anyhow;
use image::{ImageFormat, RgbImage};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::FontTransform;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 1000;

/// Value labels go on at most this many leading points of each series.
const MAX_POINT_LABELS: usize = 15;

fn draw_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow!("chart rendering failed: {e}")
}

/// Render the comparison chart for one employee. `employee_avgs` and
/// `team_avgs` are aligned with `service_types`; zeros in the employee series
/// mean "no task of this type performed" (called out by the annotation).
pub fn render(
    employee: &str,
    service_types: &[String],
    employee_avgs: &[f64],
    team_avgs: &[f64],
) -> anyhow::Result<Vec<u8>> {
    let n = service_types.len();
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let y_top = employee_avgs
            .iter()
            .chain(team_avgs)
            .fold(1.0f64, |acc, &v| acc.max(v))
            * 1.15;
        let x_max = (n as f64 - 0.5).max(0.5);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Task Wise Performance of {employee}"),
                ("sans-serif", 30),
            )
            .margin(20)
            .x_label_area_size(200)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_top)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.max(1))
            .x_label_formatter(&|x| {
                let i = x.round();
                // Only integer positions carry a category name.
                if (x - i).abs() > 0.25 || i < 0.0 {
                    return String::new();
                }
                service_types.get(i as usize).cloned().unwrap_or_default()
            })
            .x_label_style(("sans-serif", 16).into_font().transform(FontTransform::Rotate90))
            .y_desc("Processing Time in mins.")
            .draw()
            .map_err(draw_err)?;

        draw_series(&mut chart, employee_avgs, &BLUE, (-20, -8))?;
        draw_series(&mut chart, team_avgs, &RED, (0, 8))?;

        let note_x = n.saturating_sub(1).min(5) as f64;
        let note_y = employee_avgs.iter().fold(0.0f64, |acc, &v| acc.max(v));
        chart
            .draw_series(std::iter::once(
                EmptyElement::at((note_x, note_y))
                    + Text::new(
                        "0 indicates no task performed".to_string(),
                        (0, -24),
                        ("sans-serif", 18).into_font(),
                    ),
            ))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    let img = RgbImage::from_raw(WIDTH, HEIGHT, pixels)
        .ok_or_else(|| anyhow!("raster buffer size mismatch"))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// One point-per-service-type line with integer value labels on the first
/// `MAX_POINT_LABELS` points.
fn draw_series<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[f64],
    color: &RGBColor,
    label_offset: (i32, i32),
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
{
    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
            color.stroke_width(2),
        ))
        .map_err(draw_err)?;
    chart
        .draw_series(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| Circle::new((i as f64, v), 4, color.filled())),
        )
        .map_err(draw_err)?;
    chart
        .draw_series(values.iter().take(MAX_POINT_LABELS).enumerate().map(
            |(i, &v)| {
                EmptyElement::at((i as f64, v))
                    + Text::new(
                        format!("{}", v as i64),
                        label_offset,
                        ("sans-serif", 14).into_font(),
                    )
            },
        ))
        .map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn render_produces_png_bytes() {
        let types = vec!["Password Reset".to_string(), "VPN Setup".to_string()];
        let png = render("Alice", &types, &[12.0, 0.0], &[15.0, 30.0]).unwrap();
        assert!(png.len() > PNG_MAGIC.len());
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn render_is_deterministic() {
        let types = vec!["Password Reset".to_string()];
        let a = render("Bob", &types, &[42.0], &[40.0]).unwrap();
        let b = render("Bob", &types, &[42.0], &[40.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_handles_many_service_types() {
        // More categories than the label cap; labels stop at 15 but the
        // render must still succeed.
        let types: Vec<String> = (0..20).map(|i| format!("Type {i}")).collect();
        let values: Vec<f64> = (0..20).map(|i| f64::from(i) + 1.0).collect();
        let png = render("Carol", &types, &values, &values).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }
}
