use egui::{Align2, Color32, Pos2};
use kinelab::{DrawSurface, RenderPipeline, SampleStore, Vec2};

/// Headless draw surface that records the primitives a view emits.
#[derive(Default)]
struct Recording {
    clears: usize,
    lines: Vec<(Pos2, Pos2)>,
    polygons: Vec<Vec<Pos2>>,
    circles: Vec<(Pos2, f32, bool)>,
    texts: Vec<String>,
}

impl DrawSurface for Recording {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }
    fn line(&mut self, from: Pos2, to: Pos2, _width: f32, _color: Color32) {
        self.lines.push((from, to));
    }
    fn polygon(&mut self, points: &[Pos2], _color: Color32) {
        self.polygons.push(points.to_vec());
    }
    fn circle(&mut self, center: Pos2, radius: f32, _fill: Color32, outline: Option<(f32, Color32)>) {
        self.circles.push((center, radius, outline.is_some()));
    }
    fn text(&mut self, _pos: Pos2, _anchor: Align2, text: &str, _size: f32, _color: Color32) {
        self.texts.push(text.to_owned());
    }
}

impl Recording {
    fn all_points_finite(&self) -> bool {
        self.lines
            .iter()
            .flat_map(|(a, b)| [a, b])
            .chain(self.polygons.iter().flatten())
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

#[test]
fn position_view_draws_all_markers_and_outlines_selection() {
    let pipeline = RenderPipeline::default();
    let mut store = SampleStore::new();
    store.select(2);

    let mut rec = Recording::default();
    pipeline.draw_position_view(&mut rec, &store);

    assert_eq!(rec.clears, 1);
    assert_eq!(rec.circles.len(), 4);
    let outlined: Vec<_> = rec.circles.iter().filter(|(_, _, o)| *o).collect();
    assert_eq!(outlined.len(), 1);
    let max_radius = rec
        .circles
        .iter()
        .map(|&(_, r, _)| r)
        .fold(f32::MIN, f32::max);
    assert_eq!(outlined[0].1, max_radius, "selected marker is the largest");
}

#[test]
fn default_layout_renders_both_acceleration_vectors() {
    let pipeline = RenderPipeline::default();
    let store = SampleStore::new();

    let mut rec = Recording::default();
    pipeline.draw_acceleration_view(&mut rec, &store);

    // One arrowhead polygon per defined acceleration triple.
    assert_eq!(rec.polygons.len(), 2);
    assert!(rec.all_points_finite());
    assert!(rec.texts.iter().any(|t| t.contains("m/s\u{b2}")));
}

#[test]
fn undefined_quantities_are_skipped_not_drawn() {
    let pipeline = RenderPipeline::default();
    let mut store = SampleStore::empty();
    store.set_position(0, Vec2::new(1.0, 0.0));
    store.set_position(1, Vec2::new(1.0, 1.0));

    // Two placed positions: two displacement arrows, one velocity arrow,
    // no acceleration at all.
    let mut displacement = Recording::default();
    pipeline.draw_displacement_view(&mut displacement, &store);
    assert_eq!(displacement.polygons.len(), 2);

    let mut velocity = Recording::default();
    pipeline.draw_velocity_view(&mut velocity, &store);
    assert_eq!(velocity.polygons.len(), 1);

    let mut acceleration = Recording::default();
    pipeline.draw_acceleration_view(&mut acceleration, &store);
    assert!(acceleration.polygons.is_empty());
    // The grid and title still render.
    assert_eq!(acceleration.clears, 1);
    assert!(acceleration.texts.iter().any(|t| t == "Acceleration Vectors"));
}

#[test]
fn degenerate_time_delta_suppresses_the_pair_vector() {
    let pipeline = RenderPipeline::default();
    let mut store = SampleStore::new();
    // Collapse t1 and t2: series becomes [1, 1, 3, 4], so pair 1-2 has a
    // zero elapsed time.
    store.set_time(1, 1.0);
    store.set_time(2, 3.0);
    store.set_time(3, 4.0);
    assert_eq!(store.times(), &[1.0, 1.0, 3.0, 4.0]);

    let mut velocity = Recording::default();
    pipeline.draw_velocity_view(&mut velocity, &store);
    assert_eq!(velocity.polygons.len(), 2, "only the two well-defined pairs");
    assert!(velocity.all_points_finite(), "no NaN or infinity reaches the surface");
}

#[test]
fn empty_store_draws_only_chrome_on_every_view() {
    let pipeline = RenderPipeline::default();
    let store = SampleStore::empty();

    let views: [fn(&RenderPipeline, &mut dyn DrawSurface, &SampleStore); 4] = [
        RenderPipeline::draw_displacement_view,
        RenderPipeline::draw_delta_view,
        RenderPipeline::draw_velocity_view,
        RenderPipeline::draw_acceleration_view,
    ];
    for draw in views {
        let mut rec = Recording::default();
        draw(&pipeline, &mut rec, &store);
        assert!(rec.polygons.is_empty());
        assert_eq!(rec.clears, 1);
        assert!(!rec.lines.is_empty(), "grid and axes always render");
    }
}
