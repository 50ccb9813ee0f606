//! Scene assembly: turns a qubit state into an ordered list of draw
//! primitives for the frontend to replay onto its drawing surface.

use crate::constants::*;
use crate::projection::{geographic_of, LonLat, OrthographicView};
use crate::state::QubitState;
use glam::DVec2;

/// Static stroke styling carried by each drawable primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// One draw call, in back-to-front order within a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Filled and stroked circle (the sphere background and horizon).
    Disc {
        center: DVec2,
        radius: f64,
        fill: &'static str,
        stroke: Stroke,
    },
    /// Open polyline through screen-space points.
    Polyline { points: Vec<DVec2>, stroke: Stroke },
    /// Straight line segment.
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    /// Static text anchored at a screen position.
    Label {
        text: &'static str,
        anchor: DVec2,
        color: &'static str,
        font_px: f64,
    },
    /// Filled triangle marker at the state-vector tip. `direction` is the
    /// unit vector the arrow points along.
    Arrowhead {
        tip: DVec2,
        direction: DVec2,
        color: &'static str,
    },
}

/// Complete drawable frame. Regenerated from scratch on every angle change;
/// nothing is mutated incrementally or kept between updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

/// Builds the full Bloch-sphere scene for a given state under the fixed
/// orthographic view. Stateless: identical states give identical scenes.
#[derive(Clone, Copy, Debug)]
pub struct SceneComposer {
    view: OrthographicView,
}

impl SceneComposer {
    pub fn new(view: OrthographicView) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &OrthographicView {
        &self.view
    }

    pub fn compose(&self, state: &QubitState) -> Scene {
        let mut scene = Scene::default();
        self.push_sphere(&mut scene);
        self.push_graticule(&mut scene);
        self.push_equator(&mut scene);
        self.push_axes(&mut scene);
        self.push_state_vector(&mut scene, state);
        scene
    }

    fn push_sphere(&self, scene: &mut Scene) {
        let (center, radius) = self.view.sphere_outline();
        scene.primitives.push(Primitive::Disc {
            center,
            radius,
            fill: SPHERE_FILL,
            stroke: Stroke {
                color: SPHERE_STROKE,
                width: SPHERE_STROKE_WIDTH,
            },
        });
    }

    fn push_graticule(&self, scene: &mut Scene) {
        let stroke = Stroke {
            color: GRATICULE_COLOR,
            width: GRATICULE_WIDTH,
        };
        for line in self.view.graticule(GRATICULE_STEP_DEG, GRATICULE_SAMPLE_DEG) {
            for points in self.view.clip_polyline(&line) {
                scene.primitives.push(Primitive::Polyline { points, stroke });
            }
        }
    }

    // The equator sits in the graticule too, but gets a heavier restroke on
    // top to anchor the |+⟩/|i⟩ plane visually.
    fn push_equator(&self, scene: &mut Scene) {
        let steps = (360.0 / GRATICULE_SAMPLE_DEG) as usize;
        let equator: Vec<_> = (0..=steps)
            .map(|i| LonLat::new(-180.0 + i as f64 * GRATICULE_SAMPLE_DEG, 0.0))
            .collect();
        let stroke = Stroke {
            color: EQUATOR_COLOR,
            width: EQUATOR_WIDTH,
        };
        for points in self.view.clip_polyline(&equator) {
            scene.primitives.push(Primitive::Polyline { points, stroke });
        }
    }

    fn push_axes(&self, scene: &mut Scene) {
        let size = self.view.size();
        let margin = self.view.margin();
        let radius = self.view.radius();
        let mid = size / 2.0;
        let stroke = Stroke {
            color: AXIS_COLOR,
            width: AXIS_WIDTH,
        };

        // Polar (Z) axis lies in the view plane: a straight vertical line.
        scene.primitives.push(Primitive::Line {
            from: DVec2::new(mid, margin),
            to: DVec2::new(mid, size - margin),
            stroke,
        });
        // Equatorial X axis, horizontal through the disk.
        scene.primitives.push(Primitive::Line {
            from: DVec2::new(margin, mid),
            to: DVec2::new(size - margin, mid),
            stroke,
        });
        // The Y axis points along the viewing direction and would project to
        // a single point, so it gets labels only, no line.

        let labels: [(&'static str, f64, f64, &'static str, f64); 7] = [
            ("|0⟩", mid + 5.0, margin - 5.0, LABEL_COLOR, LABEL_FONT_PX),
            ("|1⟩", mid + 5.0, size - margin + 15.0, LABEL_COLOR, LABEL_FONT_PX),
            ("+Z", mid + 10.0, margin + 15.0, AXIS_COLOR, TICK_FONT_PX),
            ("|+⟩", size - margin + 5.0, mid + 5.0, LABEL_COLOR, LABEL_FONT_PX),
            ("+X", size - margin - 15.0, mid - 10.0, AXIS_COLOR, TICK_FONT_PX),
            ("|i⟩", mid + 5.0, mid + radius + 15.0, LABEL_COLOR, LABEL_FONT_PX),
            ("+Y", mid + radius - 15.0, mid - 10.0, AXIS_COLOR, TICK_FONT_PX),
        ];
        for (text, x, y, color, font_px) in labels {
            scene.primitives.push(Primitive::Label {
                text,
                anchor: DVec2::new(x, y),
                color,
                font_px,
            });
        }
    }

    // The endpoint check is deliberate even though θ ∈ [0, π] never lands on
    // the far hemisphere under this fixed view: if the projection is absent
    // the vector is omitted for the frame, never drawn at a fallback point.
    fn push_state_vector(&self, scene: &mut Scene, state: &QubitState) {
        let endpoint = geographic_of(state.theta, state.phi);
        let Some(tip) = self.view.project(endpoint) else {
            return;
        };
        let from = self.view.center();
        scene.primitives.push(Primitive::Line {
            from,
            to: tip,
            stroke: Stroke {
                color: VECTOR_COLOR,
                width: VECTOR_WIDTH,
            },
        });
        let direction = (tip - from).normalize_or_zero();
        if direction != DVec2::ZERO {
            scene.primitives.push(Primitive::Arrowhead {
                tip,
                direction,
                color: VECTOR_COLOR,
            });
        }
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(OrthographicView::new(VIEW_SIZE, VIEW_MARGIN))
    }
}
