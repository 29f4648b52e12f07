//! Frame-clock scheduler for rendering body positions.
//!
//! A [`FrameClock`] yields ticks, a [`Scene`] turns each tick into a [`Frame`] of body
//! positions, and a [`Renderer`] consumes the frames. [`run`] drives the loop on the caller's
//! thread until the clock runs out or a [`StopHandle`] is raised. Pacing against wall time is
//! left to the renderer.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use solar_export::track;
use solar_orbits::{KeplerError, OrbitModel, OrbitalBody, Position};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    /// Simulation time in years.
    pub time: f64,
}

/// Evenly spaced simulation times starting at `start`, `step` years apart.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: f64,
    step: f64,
    next_index: usize,
    limit: Option<usize>,
}

impl FrameClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            next_index: 0,
            limit: None,
        }
    }

    /// Clock advancing `years_per_second / fps` years per frame.
    pub fn paced(start: f64, fps: f64, years_per_second: f64) -> Self {
        let step = if fps > 0.0 { years_per_second / fps } else { 0.0 };
        Self::new(start, step)
    }

    /// Stop after `frames` ticks in total.
    pub fn with_limit(mut self, frames: usize) -> Self {
        self.limit = Some(frames);
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for FrameClock {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.limit.is_some_and(|limit| self.next_index >= limit) {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        Some(Tick {
            index,
            time: self.start + self.step * index as f64,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.next_index);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Shared cancellation flag; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyPosition {
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub time: f64,
    pub bodies: Vec<BodyPosition>,
}

/// Bodies to draw and the strategy placing them.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub bodies: &'a [OrbitalBody],
    pub model: OrbitModel,
}

impl<'a> Scene<'a> {
    pub fn new(bodies: &'a [OrbitalBody], model: OrbitModel) -> Self {
        Self { bodies, model }
    }

    pub fn frame(&self, tick: Tick) -> Result<Frame, KeplerError> {
        let bodies = self
            .bodies
            .iter()
            .map(|body| {
                Ok(BodyPosition {
                    name: body.name().to_string(),
                    position: self.model.position(body, tick.time)?,
                })
            })
            .collect::<Result<Vec<_>, KeplerError>>()?;
        Ok(Frame {
            index: tick.index,
            time: tick.time,
            bodies,
        })
    }
}

/// Drawing backend. `begin` acquires whatever the backend needs; `finish` releases it and is
/// called exactly once after every successful `begin`, even when rendering fails or stops.
pub trait Renderer {
    type Error;

    fn begin(&mut self, scene: &Scene<'_>) -> Result<(), Self::Error>;
    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error>;
    fn finish(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum AnimationError<E> {
    #[error("position update failed: {0}")]
    Orbit(#[from] KeplerError),
    #[error("renderer failed: {0}")]
    Render(E),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSummary {
    pub frames_rendered: usize,
    pub last_time: Option<f64>,
    /// True when the stop flag ended the run before the clock did.
    pub stopped: bool,
}

/// Render ticks from `clock` until it is exhausted or `stop` is raised.
pub fn run<R: Renderer>(
    scene: &Scene<'_>,
    clock: FrameClock,
    stop: &StopHandle,
    renderer: &mut R,
) -> Result<AnimationSummary, AnimationError<R::Error>> {
    renderer.begin(scene).map_err(AnimationError::Render)?;
    let outcome = render_frames(scene, clock, stop, renderer);
    let finished = renderer.finish().map_err(AnimationError::Render);
    let summary = outcome?;
    finished?;
    Ok(summary)
}

fn render_frames<R: Renderer>(
    scene: &Scene<'_>,
    clock: FrameClock,
    stop: &StopHandle,
    renderer: &mut R,
) -> Result<AnimationSummary, AnimationError<R::Error>> {
    let mut summary = AnimationSummary {
        frames_rendered: 0,
        last_time: None,
        stopped: false,
    };
    for tick in clock {
        if stop.is_stopped() {
            summary.stopped = true;
            break;
        }
        let frame = scene.frame(tick)?;
        renderer.render(&frame).map_err(AnimationError::Render)?;
        summary.frames_rendered += 1;
        summary.last_time = Some(frame.time);
    }
    Ok(summary)
}

/// Renderer streaming every body position as a CSV row.
pub struct CsvTrackRenderer<W: Write> {
    writer: W,
}

impl<W: Write> CsvTrackRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for CsvTrackRenderer<W> {
    type Error = io::Error;

    fn begin(&mut self, _scene: &Scene<'_>) -> io::Result<()> {
        track::write_header(&mut self.writer)
    }

    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        for body in &frame.bodies {
            track::Record {
                frame: frame.index,
                time_years: frame.time,
                body: &body.name,
                x_au: body.position.x,
                y_au: body.position.y,
            }
            .write_to(&mut self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
