// Host-side tests for the amplitude model and the formatting boundary.

use qubit_core::{
    format_component, phi_from_degrees, theta_from_degrees, Amplitudes, QubitState,
};
use std::f64::consts::PI;

#[test]
fn amplitudes_stay_normalized_over_angle_grid() {
    // Property: |α|² + |β|² = 1 for every reachable angle pair. The
    // trigonometric construction guarantees it; this pins the guarantee.
    for theta_deg in 0..=180 {
        for phi_deg in (0..360).step_by(5) {
            let state = QubitState::from_degrees(theta_deg as f64, phi_deg as f64);
            let norm = state.amplitudes().norm_sqr();
            assert!(
                (norm - 1.0).abs() < 1e-9,
                "norm drifted at θ={theta_deg}° φ={phi_deg}°: {norm}"
            );
        }
    }
}

#[test]
fn north_pole_is_ket_zero_for_any_phi() {
    for phi_deg in (0..360).step_by(30) {
        let a = Amplitudes::of(0.0, (phi_deg as f64).to_radians());
        assert!((a.alpha - 1.0).abs() < 1e-12, "α should be 1 at θ=0");
        assert!(a.beta_re.abs() < 1e-12 && a.beta_im.abs() < 1e-12);
    }
}

#[test]
fn south_pole_is_ket_one() {
    let a = Amplitudes::of(PI, 0.0);
    assert!(a.alpha.abs() < 1e-12, "α should vanish at θ=π");
    let beta_mag = (a.beta_re * a.beta_re + a.beta_im * a.beta_im).sqrt();
    assert!((beta_mag - 1.0).abs() < 1e-12, "|β| should be 1 at θ=π");
}

#[test]
fn plus_state_formats_with_positive_zero_imaginary() {
    let a = Amplitudes::of(PI / 2.0, 0.0);
    let expected = std::f64::consts::FRAC_1_SQRT_2;
    assert!((a.alpha - expected).abs() < 1e-12);
    assert!((a.beta_re - expected).abs() < 1e-12);
    assert!(a.beta_im.abs() < 1e-12);
    assert_eq!(a.ket_string(), "|ψ⟩ = 0.707|0⟩ + (0.707 + 0.000i)|1⟩");
}

#[test]
fn i_state_uses_plus_sign_token() {
    let a = Amplitudes::of(PI / 2.0, PI / 2.0);
    assert!((a.alpha - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    assert!((a.beta_im - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    assert_eq!(a.ket_string(), "|ψ⟩ = 0.707|0⟩ + (0.000 + 0.707i)|1⟩");
}

#[test]
fn minus_i_state_uses_minus_sign_token_with_positive_magnitude() {
    // φ = 270°: the imaginary part is −0.707 but renders as "- 0.707i",
    // never as a bare negative number before the imaginary unit.
    let a = Amplitudes::of(PI / 2.0, 3.0 * PI / 2.0);
    assert!((a.beta_im + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    assert_eq!(a.ket_string(), "|ψ⟩ = 0.707|0⟩ + (0.000 - 0.707i)|1⟩");
}

#[test]
fn near_zero_components_never_render_signed_zero() {
    assert_eq!(format_component(0.0), "0.000");
    assert_eq!(format_component(-0.0), "0.000");
    assert_eq!(format_component(1e-11), "0.000");
    assert_eq!(format_component(-1e-15), "0.000");
    assert_eq!(format_component(-0.5), "-0.500");
    assert_eq!(format_component(0.7071067811865476), "0.707");
}

#[test]
fn theta_boundary_clamps_out_of_range_degrees() {
    assert_eq!(theta_from_degrees(-5.0), 0.0);
    assert!((theta_from_degrees(200.0) - PI).abs() < 1e-12);
    assert!((theta_from_degrees(90.0) - PI / 2.0).abs() < 1e-12);
}

#[test]
fn phi_boundary_wraps_into_full_turn() {
    assert_eq!(phi_from_degrees(0.0), 0.0);
    assert_eq!(phi_from_degrees(360.0), 0.0);
    assert!((phi_from_degrees(-90.0) - 270.0_f64.to_radians()).abs() < 1e-12);
    assert!((phi_from_degrees(450.0) - 90.0_f64.to_radians()).abs() < 1e-12);
}

#[test]
fn degree_readouts_round_trip_whole_degrees() {
    for deg in 0..=180 {
        let state = QubitState::from_degrees(deg as f64, 0.0);
        assert_eq!(state.theta_degrees(), deg, "θ readout at {deg}°");
    }
    for deg in 0..360 {
        let state = QubitState::from_degrees(90.0, deg as f64);
        assert_eq!(state.phi_degrees(), deg, "φ readout at {deg}°");
    }
}

#[test]
fn bloch_vector_is_unit_and_matches_cardinal_states() {
    for theta_deg in (0..=180).step_by(15) {
        for phi_deg in (0..360).step_by(15) {
            let v = QubitState::from_degrees(theta_deg as f64, phi_deg as f64).bloch_vector();
            assert!(
                (v.length() - 1.0).abs() < 1e-12,
                "non-unit Bloch vector at θ={theta_deg}° φ={phi_deg}°"
            );
        }
    }

    let north = QubitState::new(0.0, 0.0).bloch_vector();
    assert!((north.z - 1.0).abs() < 1e-12);

    let plus = QubitState::new(PI / 2.0, 0.0).bloch_vector();
    assert!((plus.x - 1.0).abs() < 1e-12 && plus.y.abs() < 1e-12 && plus.z.abs() < 1e-12);

    let i_state = QubitState::new(PI / 2.0, PI / 2.0).bloch_vector();
    assert!((i_state.y - 1.0).abs() < 1e-12 && i_state.z.abs() < 1e-12);
}
