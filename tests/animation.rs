use approx::assert_relative_eq;
use solar_travel_sim::animation::{
    self, AnimationError, CsvTrackRenderer, Frame, FrameClock, Renderer, Scene, StopHandle,
};
use solar_travel_sim::orbits::{OrbitModel, OrbitalBody};

/// Records every call and optionally raises the stop flag or fails after some frames.
#[derive(Default)]
struct Recorder {
    began: usize,
    finished: usize,
    frames: Vec<Frame>,
    stop_after: Option<(usize, StopHandle)>,
    fail_after: Option<usize>,
}

impl Renderer for Recorder {
    type Error = String;

    fn begin(&mut self, scene: &Scene<'_>) -> Result<(), String> {
        assert!(!scene.bodies.is_empty());
        self.began += 1;
        Ok(())
    }

    fn render(&mut self, frame: &Frame) -> Result<(), String> {
        if self.fail_after == Some(self.frames.len()) {
            return Err(format!("display lost at frame {}", frame.index));
        }
        self.frames.push(frame.clone());
        if let Some((count, handle)) = &self.stop_after {
            if self.frames.len() == *count {
                handle.stop();
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), String> {
        self.finished += 1;
        Ok(())
    }
}

fn bodies() -> Vec<OrbitalBody> {
    vec![
        OrbitalBody::circular("EARTH", 1.0, 1.0).expect("earth"),
        OrbitalBody::new("MARS", 1.524, None, 0.0934, 1.88, 0.0).expect("mars"),
    ]
}

#[test]
fn clock_runs_to_its_limit() {
    let bodies = bodies();
    let scene = Scene::new(&bodies, OrbitModel::Parametric);
    let mut recorder = Recorder::default();

    let summary = animation::run(
        &scene,
        FrameClock::new(0.0, 0.25).with_limit(5),
        &StopHandle::new(),
        &mut recorder,
    )
    .expect("run");

    assert_eq!(summary.frames_rendered, 5);
    assert!(!summary.stopped);
    assert_eq!(summary.last_time, Some(1.0));
    assert_eq!((recorder.began, recorder.finished), (1, 1));

    // A full period brings the Earth back to its starting point.
    let first = recorder.frames[0].bodies[0].position;
    let last = recorder.frames[4].bodies[0].position;
    assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
    assert_relative_eq!(first.y, last.y, epsilon = 1e-12);
    assert_eq!(recorder.frames[2].bodies[1].name, "MARS");
}

#[test]
fn stop_flag_ends_the_run_and_still_finishes() {
    let bodies = bodies();
    let scene = Scene::new(&bodies, OrbitModel::keplerian());
    let stop = StopHandle::new();
    let mut recorder = Recorder {
        stop_after: Some((3, stop.clone())),
        ..Recorder::default()
    };

    let summary = animation::run(&scene, FrameClock::new(0.0, 0.1), &stop, &mut recorder)
        .expect("run");

    assert!(summary.stopped);
    assert_eq!(summary.frames_rendered, 3);
    assert_eq!(recorder.finished, 1);
}

#[test]
fn renderer_failure_still_releases() {
    let bodies = bodies();
    let scene = Scene::new(&bodies, OrbitModel::Parametric);
    let mut recorder = Recorder {
        fail_after: Some(2),
        ..Recorder::default()
    };

    let err = animation::run(
        &scene,
        FrameClock::new(0.0, 0.1).with_limit(10),
        &StopHandle::new(),
        &mut recorder,
    )
    .unwrap_err();

    assert!(matches!(err, AnimationError::Render(ref msg) if msg.contains("frame 2")));
    assert_eq!(recorder.finished, 1);
}

#[test]
fn csv_renderer_writes_one_row_per_body_per_frame() {
    let bodies = bodies();
    let scene = Scene::new(&bodies, OrbitModel::Parametric);
    let mut renderer = CsvTrackRenderer::new(Vec::new());

    animation::run(
        &scene,
        FrameClock::paced(0.0, 4.0, 1.0).with_limit(3),
        &StopHandle::new(),
        &mut renderer,
    )
    .expect("run");

    let csv = String::from_utf8(renderer.into_inner()).expect("utf8");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1 + 3 * 2);
    assert_eq!(lines[1], "0,0.000000,EARTH,1.000000000,0.000000000");
    assert!(lines[3].starts_with("1,0.250000,EARTH,"));
}
