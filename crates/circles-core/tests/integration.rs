//! Integration tests for circles-core.
//!
//! These tests drive the public API end to end: simulation, view, driver,
//! loop and surfaces together.

use circles_core::{
    draw, AnimationLoop, BufferView, Color, ConfigError, FrameDriver, FrameHost, HeapSimulation,
    LoopError, PixelSurface, RecordLayout, RecordingSurface, Region, RenderConfig,
};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Debug, Default)]
struct SlotHost {
    pending: Option<u32>,
    max_pending: usize,
    requests: u32,
}

impl FrameHost for SlotHost {
    type Handle = u32;

    fn request_frame(&mut self) -> Result<u32, LoopError> {
        self.requests += 1;
        let in_flight = usize::from(self.pending.is_some()) + 1;
        self.max_pending = self.max_pending.max(in_flight);
        self.pending = Some(self.requests);
        Ok(self.requests)
    }

    fn cancel_frame(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

impl SlotHost {
    fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_two_circles_red_then_green() {
    let sim = HeapSimulation::new(
        vec![10, 10, 5, 255, 0, 0, 20, 20, 3, 0, 255, 0],
        |_: &mut [i32], _, _| 0,
    );
    let layout = RecordLayout::new(12, 6).expect("valid layout");
    let mut driver = FrameDriver::new(layout, sim, RecordingSurface::new(64, 64));

    driver.render_frame();

    let circles = driver.surface().circles();
    assert_eq!(circles.len(), 2);
    assert_eq!((circles[0].x, circles[0].y, circles[0].radius), (10.0, 10.0, 5.0));
    assert_eq!(circles[0].color, Color::RED);
    assert_eq!((circles[1].x, circles[1].y, circles[1].radius), (20.0, 20.0, 3.0));
    assert_eq!(circles[1].color, Color::GREEN);
}

#[test]
fn test_zero_length_clears_and_reschedules_once() {
    let sim = HeapSimulation::new(Vec::new(), |_: &mut [i32], _, _| 0);
    let driver = FrameDriver::new(
        RecordLayout::new(0, 6).expect("valid"),
        sim,
        RecordingSurface::default(),
    );
    let mut lp = AnimationLoop::new(driver, SlotHost::default());

    lp.start().expect("start");
    assert!(lp.host_mut().fire());
    let report = lp.on_frame().expect("scheduled").expect("drawn");

    assert_eq!(report.circles, 0);
    assert_eq!(lp.driver().surface().clear_count(), 1);
    assert_eq!(lp.driver().surface().fill_count(), 0);
    // one request from start, exactly one from the frame
    assert_eq!(lp.host().requests, 2);
}

#[test]
fn test_moved_buffer_is_read_from_new_offset() {
    // Two buffers in one heap; the simulation switches after frame one.
    let mut heap = vec![1, 1, 1, 255, 0, 0];
    heap.extend_from_slice(&[2, 2, 2, 0, 0, 255]);
    let mut frame = 0;
    let sim = HeapSimulation::new(heap, move |_: &mut [i32], _, _| {
        frame += 1;
        if frame == 1 {
            0
        } else {
            24
        }
    });
    let mut driver = FrameDriver::new(
        RecordLayout::for_circles(1),
        sim,
        RecordingSurface::default(),
    );

    driver.render_frame();
    let first = driver.surface_mut().take_commands();
    let report = driver.render_frame();
    let second = driver.surface().circles();

    assert_eq!(draw::DrawCommand::BeginPath, first[1]);
    assert_eq!(report.offset, 24);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].color, Color::BLUE);
}

#[test]
fn test_single_pending_frame_across_many_frames() {
    let sim = HeapSimulation::new(vec![3; 60], |_: &mut [i32], _, _| 0);
    let driver = FrameDriver::new(RecordLayout::for_circles(10), sim, RecordingSurface::default());
    let mut lp = AnimationLoop::new(driver, SlotHost::default());

    lp.start().expect("start");
    for _ in 0..100 {
        assert!(lp.host_mut().fire());
        lp.on_frame().expect("scheduled");
    }
    lp.stop();

    assert_eq!(lp.frames_rendered(), 100);
    assert_eq!(lp.host().max_pending, 1);
    assert_eq!(lp.host().pending, None);
}

#[test]
fn test_overlap_owned_by_later_record() {
    let sim = HeapSimulation::new(
        vec![8, 8, 6, 255, 0, 0, 12, 8, 6, 0, 255, 0],
        |_: &mut [i32], _, _| 0,
    );
    let mut driver = FrameDriver::new(RecordLayout::for_circles(2), sim, PixelSurface::new(24, 16));
    driver.render_frame();

    let surface = driver.surface();
    assert_eq!(surface.pixel(10, 8), Some([0, 255, 0, 255]));
    assert_eq!(surface.pixel(4, 8), Some([255, 0, 0, 255]));
}

#[test]
fn test_recorded_frame_replays_onto_pixels() {
    let sim = HeapSimulation::new(vec![5, 5, 3, 0, 0, 255], |_: &mut [i32], _, _| 0);
    let mut driver = FrameDriver::new(RecordLayout::for_circles(1), sim, RecordingSurface::new(10, 10));
    driver.render_frame();

    let mut pixels = PixelSurface::new(10, 10);
    pixels.flood(Color::RED);
    draw::replay(driver.surface().commands(), &mut pixels);

    assert_eq!(pixels.pixel(5, 5), Some([0, 0, 255, 255]));
    assert_eq!(pixels.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn test_view_reread_is_stable() {
    let data = [4, 4, 4, 4, 4, 4, 9, 9, 9, 9, 9, 9];
    let view = BufferView::new(Region::from_elements(&data), 0, 12, 6);
    let a: Vec<_> = view.records().collect();
    let b: Vec<_> = view.records().collect();
    assert_eq!(a, b);
    assert_eq!(data[6], 9);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_yaml_config_to_running_driver() {
    let config = RenderConfig::from_yaml("data_length: 12\nstride_length: 6\n").expect("valid");
    let layout = config.layout().expect("valid layout");
    let sim = HeapSimulation::new(vec![0; 12], |_: &mut [i32], _, _| 0);
    let mut driver = FrameDriver::new(layout, sim, RecordingSurface::default());
    assert_eq!(driver.render_frame().circles, 2);
}

#[test]
fn test_misconfigured_stride_rejected_at_setup() {
    assert!(matches!(
        RenderConfig::default().with_data_length(10).layout(),
        Err(ConfigError::MisalignedLength { .. })
    ));
}
