use std::time::Duration;

use fractal_zoomer::{
    Complex, Complex32, EscapeTimeEvaluator, FractalCommand, FractalKind, FrameParams,
    PaletteKind, PixelRect, Point, PrecisionMode, SampleResult, ScreenPoint, ShareableState,
    Velocity, ViewportController, ViewportEvent, ViewportLimits, from_query, iteration_budget,
    render_frame, render_frame_serial, screen_to_world, smooth_iteration, to_query,
};

const FRAME: Duration = Duration::from_millis(16);

fn controller() -> ViewportController {
    ViewportController::with_defaults(PixelRect::new(640, 480).unwrap())
}

fn world_under(controller: &ViewportController, position: ScreenPoint) -> Complex {
    let view = controller.view();
    screen_to_world(position, controller.viewport(), view.target_center, view.target_zoom)
}

fn assert_close(actual: Complex, expected: Complex, tolerance: f64) {
    assert!(
        (actual.real - expected.real).abs() <= tolerance
            && (actual.imag - expected.imag).abs() <= tolerance,
        "actual={actual:?} expected={expected:?}"
    );
}

#[test]
fn wheel_zoom_holds_the_point_under_the_cursor() {
    let mut controller = controller();
    let cursors = [
        ScreenPoint::new(50.0, 400.0),
        ScreenPoint::new(320.0, 240.0),
        ScreenPoint::new(600.0, 20.0),
    ];

    for cursor in cursors {
        for delta_y in [-1.0, -1.0, -1.0, 1.0, -1.0, 1.0] {
            let before = world_under(&controller, cursor);
            let tolerance = 1e-12 / controller.view().target_zoom.min(1.0);

            controller.handle_event(ViewportEvent::WheelZoom { position: cursor, delta_y });
            controller.tick(FRAME);

            assert_close(world_under(&controller, cursor), before, tolerance);
        }
    }
}

#[test]
fn smooth_value_falls_steadily_as_final_radius_grows() {
    let mut previous = f32::INFINITY;

    for step in 0..=64 {
        let magnitude_squared = 256.0 + step as f32 * 1000.0;
        let smooth = smooth_iteration(7, magnitude_squared).unwrap();

        assert!(smooth < previous);
        previous = smooth;
    }

    // Escaping one step later at the squared radius is the same colour.
    let here = smooth_iteration(7, 300.0).unwrap();
    let next = smooth_iteration(8, 300.0 * 300.0).unwrap();
    assert!((here - next).abs() < 1e-3);
}

#[test]
fn origin_is_in_the_set_for_every_budget() {
    for max_iterations in [1, 7, 150, 1000, 2000] {
        let evaluator = EscapeTimeEvaluator::new(max_iterations).unwrap();

        assert_eq!(
            evaluator.evaluate(FractalKind::Mandelbrot, Complex32::ZERO, Complex32::ZERO),
            SampleResult::InSet
        );
    }
}

#[test]
fn far_point_escapes_immediately() {
    let evaluator = EscapeTimeEvaluator::new(150).unwrap();

    let result = evaluator.evaluate(
        FractalKind::Mandelbrot,
        Complex32::new(10.0, 10.0),
        Complex32::ZERO,
    );

    assert!(matches!(result, SampleResult::Escaped { iteration: 1, .. }));
}

#[test]
fn precision_paths_agree_below_switch_threshold() {
    let frame = |precision| FrameParams {
        pixel_rect: PixelRect::new(16, 12).unwrap(),
        center: Complex::new(0.5, 0.5),
        zoom: 1e3,
        precision,
        max_iterations: 150,
        palette: PaletteKind::Nebula,
        kind: FractalKind::Mandelbrot,
        julia_c: Complex::new(-0.7, 0.27015),
        time_phase: 0.0,
    };

    let single = render_frame(&frame(PrecisionMode::Single)).unwrap();
    let extended = render_frame(&frame(PrecisionMode::Extended)).unwrap();

    for (a, b) in single.buffer().iter().zip(extended.buffer()) {
        assert!(a.abs_diff(*b) <= 2, "channel {a} vs {b}");
    }
}

#[test]
fn iteration_budget_never_decreases_with_depth() {
    let limits = ViewportLimits::default();
    let mut previous = 0;

    for step in 0..=340 {
        let zoom = 10f64.powf(-2.0 + f64::from(step) * 0.05);
        let budget = iteration_budget(zoom, &limits);

        assert!((100..=2000).contains(&budget), "budget {budget} at zoom {zoom}");
        assert!(budget >= previous, "budget fell at zoom {zoom}");
        previous = budget;
    }
}

#[test]
fn share_link_restores_a_session() {
    let mut original = controller();
    original.apply_command(FractalCommand::SetJulia(true));
    original.apply_command(FractalCommand::SetJuliaConstant(Complex::new(0.285, 0.013)));
    original.apply_command(FractalCommand::SetPalette(1));
    for _ in 0..40 {
        original.handle_event(ViewportEvent::WheelZoom {
            position: ScreenPoint::new(500.0, 130.0),
            delta_y: -1.0,
        });
    }
    original.tick(Duration::from_secs(1));

    let query = to_query(&original.shareable_state()).unwrap();
    let mut restored = controller();
    restored.apply_command(FractalCommand::ApplyShared(from_query(&query).unwrap()));

    assert_eq!(restored.shareable_state(), original.shareable_state());

    // Palette phase follows wall-clock time, not the link.
    let restored_frame = FrameParams { time_phase: 0.0, ..restored.tick(FRAME) };
    let original_frame = FrameParams { time_phase: 0.0, ..original.tick(FRAME) };
    assert_eq!(restored_frame, original_frame);
}

#[test]
fn share_link_of_default_state_is_default_state() {
    let query = to_query(&ShareableState::default()).unwrap();

    assert_eq!(from_query(&query).unwrap(), ShareableState::default());
}

#[test]
fn released_drag_coasts_to_a_stop() {
    for (dx, dy) in [(20.0, 0.0), (-8.0, 14.0), (0.3, -0.2)] {
        let mut controller = controller();
        controller.handle_event(ViewportEvent::PointerDown {
            position: ScreenPoint::new(300.0, 300.0),
        });
        controller.handle_event(ViewportEvent::PointerMove {
            position: ScreenPoint::new(300.0 + dx, 300.0 + dy),
        });
        controller.handle_event(ViewportEvent::PointerUp);

        let mut ticks = 0;
        while controller.interaction().velocity != Velocity::ZERO {
            controller.tick(FRAME);
            ticks += 1;
            assert!(ticks <= 50, "drag ({dx}, {dy}) still coasting");
        }
    }
}

#[test]
fn parallel_and_serial_frames_match_at_depth() {
    let mut controller = controller();
    controller.handle_event(ViewportEvent::Resize { width: 48, height: 32 });
    controller.apply_command(FractalCommand::ApplyShared(ShareableState {
        x: -0.743_643_887_037_151,
        y: 0.131_825_904_205_33,
        zoom: 4e7,
        iterations: 400,
        ..ShareableState::default()
    }));

    let params = controller.tick(FRAME);
    assert_eq!(params.precision, PrecisionMode::Extended);

    let parallel = render_frame(&params).unwrap();
    let serial = render_frame_serial(&params).unwrap();

    assert_eq!(parallel, serial);
    assert_eq!(parallel.pixel_rect(), PixelRect::new(48, 32).unwrap());
    assert!(parallel.pixel(Point { x: 47, y: 31 }).is_ok());
}
