//! End-to-end redraw scenarios.

use std::f64::consts::{FRAC_PI_2, PI};

use smith_chart::{
    CanvasSize, ChartConfig, DrawPrimitive, Point, PrimitiveBuffer, RedrawTrigger, SmithChart,
    SvgSurface, SweepDirection,
};

const EPS: f64 = 1e-6;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[test]
fn test_two_by_two_chart_on_square_canvas() {
    let config = ChartConfig::with_values(vec![0.0, 1.0], vec![0.0, 1.0]).with_padding(20.0);
    let mut chart = SmithChart::new(config);
    let primitives = chart.mount(CanvasSize::new(400.0, 400.0)).to_vec();

    // 2 circles + 1 line + 1 arc
    assert_eq!(primitives.len(), 4);

    match primitives[0] {
        DrawPrimitive::Circle { center, radius, .. } => {
            assert_eq!(center, Point::new(200.0, 200.0));
            assert_eq!(radius, 180.0);
        }
        other => panic!("expected boundary circle, got {other:?}"),
    }

    match primitives[1] {
        DrawPrimitive::Circle { center, radius, .. } => {
            assert_eq!(center, Point::new(290.0, 200.0));
            assert_eq!(radius, 90.0);
        }
        other => panic!("expected r = 1 circle, got {other:?}"),
    }

    match primitives[2] {
        DrawPrimitive::Line { start, end, .. } => {
            assert_eq!(start, Point::new(20.0, 200.0));
            assert_eq!(end, Point::new(380.0, 200.0));
        }
        other => panic!("expected real axis, got {other:?}"),
    }

    match primitives[3] {
        DrawPrimitive::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
            ..
        } => {
            assert_eq!(center, Point::new(380.0, 20.0));
            assert_eq!(radius, 180.0);
            assert!((start_angle - PI).abs() < EPS);
            assert!((end_angle - FRAC_PI_2).abs() < EPS);
            assert_eq!(direction, SweepDirection::CounterClockwise);
        }
        other => panic!("expected x = 1 arc, got {other:?}"),
    }
}

#[test]
fn test_every_contour_meets_the_open_circuit_point() {
    let mut chart = SmithChart::default();
    let size = CanvasSize::new(640.0, 480.0);
    let primitives = chart.mount(size).to_vec();
    let viewport = chart.viewport().unwrap();
    let open = viewport.point_to_pixel(Point::new(1.0, 0.0));

    for primitive in &primitives {
        match *primitive {
            DrawPrimitive::Circle { center, radius, .. } => {
                assert!((center.distance(open) - radius).abs() < EPS, "{primitive:?}");
            }
            DrawPrimitive::Arc {
                center,
                radius,
                end_angle,
                ..
            } => {
                assert!((center.distance(open) - radius).abs() < EPS, "{primitive:?}");
                // the far end of the arc lands on the open-circuit point
                let end = Point::new(
                    center.x + radius * end_angle.cos(),
                    center.y + radius * end_angle.sin(),
                );
                assert!(close(end, open), "{primitive:?} ends at {end:?}");
            }
            DrawPrimitive::Line { end, .. } => assert!(close(end, open)),
        }
    }
}

#[test]
fn test_arc_start_lies_on_chart_boundary() {
    let mut chart = SmithChart::default();
    let primitives = chart.mount(CanvasSize::new(500.0, 500.0)).to_vec();
    let viewport = chart.viewport().unwrap();
    let origin = viewport.point_to_pixel(Point::ORIGIN);

    for primitive in primitives {
        if let DrawPrimitive::Arc {
            center,
            radius,
            start_angle,
            ..
        } = primitive
        {
            let start = Point::new(
                center.x + radius * start_angle.cos(),
                center.y + radius * start_angle.sin(),
            );
            assert!((start.distance(origin) - viewport.r).abs() < EPS);
        }
    }
}

#[test]
fn test_positive_reactance_draws_in_upper_half() {
    let config = ChartConfig::with_values(vec![], vec![2.0, -2.0]);
    let mut chart = SmithChart::new(config);
    let primitives = chart.mount(CanvasSize::new(400.0, 400.0)).to_vec();

    let centers: Vec<Point> = primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Arc { center, .. } => Some(*center),
            _ => None,
        })
        .collect();

    // pixel y grows downward
    assert!(centers[0].y < 200.0);
    assert!(centers[1].y > 200.0);
    assert_eq!(centers[0].x, centers[1].x);
}

#[test]
fn test_redraw_is_idempotent() {
    let mut chart = SmithChart::default();
    let size = CanvasSize::new(731.0, 517.0);

    let first = chart.mount(size).to_vec();
    let second = chart.redraw(RedrawTrigger::Resize(size)).to_vec();
    let third = chart.redraw(RedrawTrigger::ConfigChanged).to_vec();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(chart.redraw_count(), 3);
}

#[test]
fn test_resize_round_trip_restores_primitives() {
    let mut chart = SmithChart::default();
    let small = CanvasSize::new(300.0, 300.0);

    let before = chart.mount(small).to_vec();
    let large = chart.resize(CanvasSize::new(1200.0, 900.0)).to_vec();
    let after = chart.resize(small).to_vec();

    assert_ne!(before, large);
    assert_eq!(before, after);
}

#[test]
fn test_duplicate_and_unsorted_values_are_kept() {
    let config = ChartConfig::with_values(vec![5.0, 0.2, 5.0], vec![1.0, -1.0, 1.0, 0.0, 0.0]);
    let mut chart = SmithChart::new(config);
    let primitives = chart.mount(CanvasSize::new(400.0, 400.0)).to_vec();

    assert_eq!(primitives.len(), 8);
    assert_eq!(primitives[0], primitives[2]);
    assert_eq!(primitives[3], primitives[5]);
    assert_eq!(primitives[6], primitives[7]);
}

#[test]
fn test_present_to_surfaces() {
    let mut chart = SmithChart::default();
    chart.mount(CanvasSize::new(400.0, 400.0));

    let mut buffer = PrimitiveBuffer::new();
    chart.present(&mut buffer);
    assert_eq!(buffer.primitives(), chart.primitives());

    let mut svg = SvgSurface::new(CanvasSize::new(400.0, 400.0));
    chart.present(&mut svg);
    let document = svg.finish();
    assert_eq!(document.matches("<circle").count(), 7);
    assert_eq!(document.matches("<path").count(), 11);
    assert_eq!(document.matches("<line").count(), 1);
}

#[test]
fn test_config_file_drives_chart() {
    let path = std::env::temp_dir().join(format!("smith_chart_{}.toml", std::process::id()));
    std::fs::write(&path, "resistances = [0.0]\nreactances = [0.0, 1.0]\npadding = 0.0\n").unwrap();

    let config = ChartConfig::from_toml_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut chart = SmithChart::new(config);
    let primitives = chart.mount(CanvasSize::new(200.0, 100.0)).to_vec();
    assert_eq!(primitives.len(), 3);
    assert_eq!(chart.viewport().map(|v| v.r), Some(50.0));
}
