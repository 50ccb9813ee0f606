//! Pure single-qubit state math shared with the web frontend.
//!
//! Angles live in radians everywhere inside the engine; the degree
//! conversions here are the only place the slider units cross over.

use crate::constants::ZERO_SNAP_EPS;
use glam::DVec3;
use std::f64::consts::PI;

/// Polar/azimuthal angle pair for a pure qubit state, in radians.
///
/// `theta` is measured from the |0⟩ pole and stays in \[0, π\]; `phi` is the
/// azimuth from +X and stays in \[0, 2π). Construction through
/// [`QubitState::from_degrees`] enforces both ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QubitState {
    pub theta: f64,
    pub phi: f64,
}

impl QubitState {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Build a state from slider values, clamping θ and wrapping φ.
    pub fn from_degrees(theta_deg: f64, phi_deg: f64) -> Self {
        Self {
            theta: theta_from_degrees(theta_deg),
            phi: phi_from_degrees(phi_deg),
        }
    }

    /// θ rounded to whole degrees for readout display.
    pub fn theta_degrees(&self) -> i32 {
        (self.theta * 180.0 / PI).round() as i32
    }

    /// φ rounded to whole degrees for readout display.
    pub fn phi_degrees(&self) -> i32 {
        (self.phi * 180.0 / PI).round() as i32
    }

    pub fn amplitudes(&self) -> Amplitudes {
        Amplitudes::of(self.theta, self.phi)
    }

    /// Cartesian Bloch vector: z = cos θ, x = sin θ cos φ, y = sin θ sin φ.
    pub fn bloch_vector(&self) -> DVec3 {
        let sin_theta = self.theta.sin();
        DVec3::new(
            sin_theta * self.phi.cos(),
            sin_theta * self.phi.sin(),
            self.theta.cos(),
        )
    }
}

impl Default for QubitState {
    fn default() -> Self {
        // |+i⟩-leaning start the sliders open on: θ = 90°, φ = 45°
        Self::new(PI / 2.0, PI / 4.0)
    }
}

/// Clamp a slider θ value to \[0°, 180°\] and convert to radians.
pub fn theta_from_degrees(deg: f64) -> f64 {
    deg.clamp(0.0, 180.0).to_radians()
}

/// Wrap a slider φ value into \[0°, 360°) and convert to radians.
pub fn phi_from_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0).to_radians()
}

/// Probability amplitudes of |ψ⟩ = α|0⟩ + β|1⟩.
///
/// α is real by convention (global phase fixed); β is split into real and
/// imaginary parts. The trigonometric construction keeps |α|² + |β|² = 1
/// without any explicit renormalization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Amplitudes {
    pub alpha: f64,
    pub beta_re: f64,
    pub beta_im: f64,
}

impl Amplitudes {
    /// α = cos(θ/2), β = e^{iφ}·sin(θ/2).
    pub fn of(theta: f64, phi: f64) -> Self {
        let beta_mag = (theta / 2.0).sin();
        Self {
            alpha: (theta / 2.0).cos(),
            beta_re: phi.cos() * beta_mag,
            beta_im: phi.sin() * beta_mag,
        }
    }

    /// |α|² + |β|²; equals 1 for any real angle pair up to float error.
    pub fn norm_sqr(&self) -> f64 {
        self.alpha * self.alpha + self.beta_re * self.beta_re + self.beta_im * self.beta_im
    }

    /// Full ket notation: `|ψ⟩ = 0.707|0⟩ + (0.500 - 0.500i)|1⟩`.
    ///
    /// The imaginary part always renders as an explicit sign token followed
    /// by the magnitude, never as a bare negative number before the `i`.
    pub fn ket_string(&self) -> String {
        let sign = if self.beta_im >= 0.0 { '+' } else { '-' };
        format!(
            "|ψ⟩ = {}|0⟩ + ({} {} {}i)|1⟩",
            format_component(self.alpha),
            format_component(self.beta_re),
            sign,
            format_component(self.beta_im.abs()),
        )
    }
}

/// Format one amplitude component to 3 decimals, snapping near-zero values
/// to `"0.000"` so signed zeros and float noise never reach the display.
pub fn format_component(value: f64) -> String {
    if value.abs() < ZERO_SNAP_EPS {
        return "0.000".to_string();
    }
    format!("{value:.3}")
}
