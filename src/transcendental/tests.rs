use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

use num_complex::Complex64;

use super::*;
use crate::{Complex, Error};

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im).unwrap()
}

fn assert_complex_near(a: Complex, b: Complex, tol: f64, msg: &str) {
    assert!(
        (a.re() - b.re()).abs() < tol && (a.im() - b.im()).abs() < tol,
        "{msg}: {a:?} vs {b:?}, tol = {tol}"
    );
}

fn assert_matches_oracle(ours: Complex, oracle: Complex64, msg: &str) {
    let oracle = Complex::try_from(oracle).unwrap();
    assert_complex_near(ours, oracle, 1e-12, msg);
}

/// Sample points away from every branch cut and pole.
const SAMPLES: [(f64, f64); 5] = [(0.3, 0.7), (-1.2, 0.4), (2.0, -1.5), (-0.6, -0.9), (0.9, 0.05)];

fn samples() -> impl Iterator<Item = (Complex, Complex64)> {
    SAMPLES
        .into_iter()
        .map(|(re, im)| (c(re, im), Complex64::new(re, im)))
}

// =====================================================================
// exp / ln
// =====================================================================

#[test]
fn exp_matches_num_complex() {
    for (z, n) in samples() {
        assert_matches_oracle(exp(z).unwrap(), n.exp(), "exp");
    }
}

#[test]
fn ln_matches_num_complex() {
    for (z, n) in samples() {
        assert_matches_oracle(ln(z).unwrap(), n.ln(), "ln");
    }
}

#[test]
fn exp_ln_round_trip() {
    for (z, _) in samples() {
        assert_complex_near(exp(ln(z).unwrap()).unwrap(), z, 1e-12, "exp(ln z)");
    }
    let neg = c(-5.0, 0.0);
    assert_complex_near(exp(ln(neg).unwrap()).unwrap(), neg, 1e-12, "exp(ln -5)");
}

#[test]
fn euler_identity() {
    assert_eq!(exp(c(0.0, PI)).unwrap(), Complex::NEG_ONE);
    assert_eq!(expi(FRAC_PI_2).unwrap(), Complex::I);
}

#[test]
fn exp_overflow_is_reported() {
    assert_eq!(
        exp(c(1000.0, 0.0)),
        Err(Error::NonFiniteResult { op: "exp" })
    );
}

#[test]
fn ln_of_zero() {
    assert_eq!(ln(Complex::ZERO), Err(Error::LogOfZero));
    assert_eq!(ln(c(1e-12, -1e-12)), Err(Error::LogOfZero));
    assert_eq!(ln_real(0.0), Err(Error::LogOfZero));
    assert_eq!(ln_imag(0.0), Err(Error::LogOfZero));
    assert_eq!(ln_modulus(Complex::ZERO), Err(Error::LogOfZero));
}

#[test]
fn ln_fast_paths_agree_with_general_formula() {
    // ln(-x) = ln x + iπ
    let general = Complex::new(2.0_f64.ln(), c(-2.0, 0.0).arg().unwrap()).unwrap();
    assert_eq!(ln_real(-2.0).unwrap(), general);
    assert_eq!(ln_real(-2.0).unwrap(), c(2.0_f64.ln(), PI));

    // ln(±iy) = ln y ± iπ/2
    assert_eq!(ln_imag(3.0).unwrap(), c(3.0_f64.ln(), FRAC_PI_2));
    assert_eq!(ln_imag(-3.0).unwrap(), c(3.0_f64.ln(), -FRAC_PI_2));
    assert_eq!(ln(c(0.0, -3.0)).unwrap(), ln_imag(-3.0).unwrap());

    // A component just off the axis takes the general path and stays close
    let off_axis = ln(c(1e-13, -3.0)).unwrap();
    assert_complex_near(off_axis, ln_imag(-3.0).unwrap(), 1e-10, "near-imaginary ln");
}

#[test]
fn ln_modulus_is_real_part() {
    let z = c(3.0, 4.0);
    assert_eq!(ln_modulus(z).unwrap(), 5.0_f64.ln());
    assert_eq!(ln_modulus(z).unwrap(), ln(z).unwrap().re());
}

#[test]
fn logarithm_bases() {
    assert_eq!(log10(c(1000.0, 0.0)).unwrap(), c(3.0, 0.0));
    assert_eq!(log_real_base(c(81.0, 0.0), 3.0).unwrap(), c(4.0, 0.0));
    assert_eq!(log(c(5.0, 0.0), Complex::ONE), Err(Error::LogBaseOne));
    assert_eq!(log(Complex::ZERO, c(2.0, 0.0)), Err(Error::LogOfZero));
    assert_eq!(log(c(2.0, 0.0), Complex::ZERO), Err(Error::LogOfZero));
}

#[test]
fn logarithm_base_negative_one() {
    // ln(-1) / (iπ) = iπ / iπ = 1
    assert_eq!(log(Complex::NEG_ONE, Complex::NEG_ONE).unwrap(), Complex::ONE);
    // Matches the general ratio ln z / ln(-1)
    let z = c(2.0, 1.0);
    let general = ln(z).unwrap().checked_div(ln(Complex::NEG_ONE).unwrap()).unwrap();
    assert_eq!(log(z, Complex::NEG_ONE).unwrap(), general);
}

// =====================================================================
// powers and roots
// =====================================================================

#[test]
fn pow_matches_num_complex() {
    let w = c(0.5, -1.25);
    let wn = Complex64::new(0.5, -1.25);
    for (z, n) in samples() {
        assert_matches_oracle(pow(z, w).unwrap(), n.powc(wn), "pow");
    }
}

#[test]
fn pow_zero_base() {
    assert_eq!(pow(Complex::ZERO, Complex::ZERO), Err(Error::UndefinedPower));
    assert_eq!(pow(Complex::ZERO, c(2.0, 1.0)).unwrap(), Complex::ZERO);
    assert_eq!(powf(Complex::ZERO, 0.5).unwrap(), Complex::ZERO);
}

#[test]
fn powi_by_squaring() {
    let z = c(1.0, 1.0);
    // (1+i)^2 = 2i, (1+i)^8 = 16
    assert_eq!(powi(z, 2).unwrap(), c(0.0, 2.0));
    assert_eq!(powi(z, 8).unwrap(), c(16.0, 0.0));
    assert_eq!(powi(z, -2).unwrap(), c(0.0, -0.5));
    assert_eq!(powi(z, 0).unwrap(), Complex::ONE);
    assert_eq!(powi(z, 7).unwrap(), pow(z, c(7.0, 0.0)).unwrap());
    assert_eq!(powi(Complex::ZERO, 0), Err(Error::UndefinedPower));
    assert_eq!(powi(Complex::ZERO, -1), Err(Error::DivisionByZero));
    assert_eq!(powi(Complex::ZERO, 3).unwrap(), Complex::ZERO);
}

#[test]
fn sqrt_matches_num_complex() {
    for (z, n) in samples() {
        assert_matches_oracle(sqrt(z).unwrap(), n.sqrt(), "sqrt");
    }
    assert_eq!(sqrt(c(-4.0, 0.0)).unwrap(), c(0.0, 2.0));
    assert_eq!(sqrt(Complex::ZERO).unwrap(), Complex::ZERO);
}

#[test]
fn cbrt_principal_branch() {
    // cbrt(-8) = 2·e^{iπ/3}
    assert_eq!(cbrt(c(-8.0, 0.0)).unwrap(), c(1.0, 3.0_f64.sqrt()));
    assert_eq!(cbrt(c(27.0, 0.0)).unwrap(), c(3.0, 0.0));
    assert_eq!(nth_root(c(16.0, 0.0), 4).unwrap(), c(2.0, 0.0));
    assert_eq!(nth_root(c(16.0, 0.0), 0), Err(Error::ZeroRootIndex));
}

#[test]
fn nth_root_complex_index() {
    // z^(1/2) with complex index 2 is sqrt
    let z = c(-3.0, 4.0);
    assert_eq!(nth_root_complex(z, c(2.0, 0.0)).unwrap(), c(1.0, 2.0));
    assert_eq!(nth_root_complex(z, Complex::ZERO), Err(Error::ZeroRootIndex));
}

#[test]
fn all_nth_roots_raise_back() {
    for (z, _) in samples() {
        for n in 1..=7 {
            let roots = all_nth_roots(z, n).unwrap();
            assert_eq!(roots.len(), n as usize);
            for (k, r) in roots.iter().enumerate() {
                let back = powi(*r, n as i32).unwrap();
                assert_complex_near(back, z, 1e-11, &format!("root {k} of {n}"));
            }
        }
    }
}

#[test]
fn all_nth_roots_ordering() {
    let roots = all_nth_roots(Complex::ONE, 4).unwrap();
    assert_eq!(
        roots,
        vec![Complex::ONE, Complex::I, Complex::NEG_ONE, Complex::NEG_I]
    );
    assert_eq!(roots[0], nth_root(Complex::ONE, 4).unwrap());
    let z = c(-2.0, 5.0);
    assert_eq!(all_nth_roots(z, 3).unwrap()[0], cbrt(z).unwrap());
}

#[test]
fn all_nth_roots_of_zero() {
    assert_eq!(all_nth_roots(Complex::ZERO, 3).unwrap(), vec![Complex::ZERO; 3]);
    assert_eq!(all_nth_roots(Complex::ONE, 0), Err(Error::ZeroRootIndex));
}

#[test]
fn fixed_size_root_sets() {
    let [a, b] = sqrt_all(c(0.0, 2.0)).unwrap();
    assert_eq!(a, c(1.0, 1.0));
    assert_eq!(b, c(-1.0, -1.0));
    let set = cbrt_all(Complex::ONE).unwrap();
    assert_eq!(set, [Complex::ONE, Complex::OMEGA, Complex::OMEGA_SQR]);
}

// =====================================================================
// trigonometric
// =====================================================================

#[test]
fn trig_matches_num_complex() {
    for (z, n) in samples() {
        assert_matches_oracle(sin(z).unwrap(), n.sin(), "sin");
        assert_matches_oracle(cos(z).unwrap(), n.cos(), "cos");
        assert_matches_oracle(tan(z).unwrap(), n.tan(), "tan");
        assert_matches_oracle(sec(z).unwrap(), n.cos().inv(), "sec");
        assert_matches_oracle(csc(z).unwrap(), n.sin().inv(), "csc");
        assert_matches_oracle(cot(z).unwrap(), n.tan().inv(), "cot");
    }
}

#[test]
fn pythagorean_identity() {
    for (z, _) in samples() {
        let s = sin(z).unwrap();
        let k = cos(z).unwrap();
        assert_complex_near(s * s + k * k, Complex::ONE, 1e-12, "sin² + cos²");
    }
}

#[test]
fn reciprocal_trig_poles() {
    let half_pi = c(FRAC_PI_2, 0.0);
    assert_eq!(
        sec(half_pi),
        Err(Error::UndefinedTrig {
            function: "sec",
            denominator: "cos"
        })
    );
    assert_eq!(
        tan(half_pi),
        Err(Error::UndefinedTrig {
            function: "tan",
            denominator: "cos"
        })
    );
    assert_eq!(
        csc(Complex::ZERO),
        Err(Error::UndefinedTrig {
            function: "csc",
            denominator: "sin"
        })
    );
    assert_eq!(
        cot(c(PI, 0.0)),
        Err(Error::UndefinedTrig {
            function: "cot",
            denominator: "tan"
        })
    );
    // cot is zero where cos is zero
    assert_eq!(cot(half_pi).unwrap(), Complex::ZERO);
}

#[test]
fn degree_variants_commute() {
    let deg = c(30.0, 12.0);
    let rad = to_radians(deg);
    assert_eq!(sin_deg(deg).unwrap(), sin(rad).unwrap());
    assert_eq!(cos_deg(deg).unwrap(), cos(rad).unwrap());
    assert_eq!(tan_deg(deg).unwrap(), tan(rad).unwrap());
    assert_eq!(sec_deg(deg).unwrap(), sec(rad).unwrap());
    assert_eq!(csc_deg(deg).unwrap(), csc(rad).unwrap());
    assert_eq!(cot_deg(deg).unwrap(), cot(rad).unwrap());
    assert_eq!(to_degrees(to_radians(deg)), deg);
    assert_eq!(cos_deg(c(60.0, 0.0)).unwrap(), c(0.5, 0.0));
}

// =====================================================================
// inverse trigonometric
// =====================================================================

#[test]
fn inverse_trig_matches_num_complex() {
    for (z, n) in samples() {
        assert_matches_oracle(arcsin(z).unwrap(), n.asin(), "arcsin");
        assert_matches_oracle(arccos(z).unwrap(), n.acos(), "arccos");
        assert_matches_oracle(arctan(z).unwrap(), n.atan(), "arctan");
    }
}

#[test]
fn inverse_trig_round_trip() {
    for (z, _) in samples() {
        assert_complex_near(sin(arcsin(z).unwrap()).unwrap(), z, 1e-12, "sin(arcsin z)");
        assert_complex_near(cos(arccos(z).unwrap()).unwrap(), z, 1e-12, "cos(arccos z)");
        assert_complex_near(tan(arctan(z).unwrap()).unwrap(), z, 1e-12, "tan(arctan z)");
        assert_complex_near(cot(arccot(z).unwrap()).unwrap(), z, 1e-12, "cot(arccot z)");
    }
}

#[test]
fn inverse_trig_large_arguments() {
    for x in [1e5f64, 1e8, 1e12] {
        let acosh = x.acosh();
        assert_complex_near(arccos(c(x, 0.0)).unwrap(), c(0.0, acosh), 1e-12, "arccos(x)");
        assert_complex_near(arccos(c(-x, 0.0)).unwrap(), c(PI, -acosh), 1e-12, "arccos(-x)");

        let asinh = x.asinh();
        assert_complex_near(arcsin(c(0.0, x)).unwrap(), c(0.0, asinh), 1e-12, "arcsin(ix)");
        assert_complex_near(arcsin(c(0.0, -x)).unwrap(), c(0.0, -asinh), 1e-12, "arcsin(-ix)");
    }
}

#[test]
fn inverse_trig_round_trip_far_from_origin() {
    let points = [c(1e5, 0.0), c(-3e4, 2e4), c(0.5, 1e6), c(2e3, -7e3)];
    for z in points {
        let tol = 1e-12 * z.modulus();
        assert_complex_near(cos(arccos(z).unwrap()).unwrap(), z, tol, "cos(arccos z)");
        assert_complex_near(sin(arcsin(z).unwrap()).unwrap(), z, tol, "sin(arcsin z)");
    }
}

#[test]
fn inverse_trig_real_values() {
    assert_eq!(arcsin(c(0.5, 0.0)).unwrap(), c(FRAC_PI_6, 0.0));
    assert_eq!(arccos(c(0.5, 0.0)).unwrap(), c(PI / 3.0, 0.0));
    assert_eq!(arctan(Complex::ONE).unwrap(), c(FRAC_PI_4, 0.0));
    assert_eq!(arccot(Complex::ONE).unwrap(), c(FRAC_PI_4, 0.0));
    assert_eq!(arccot(Complex::ZERO).unwrap(), c(FRAC_PI_2, 0.0));
    assert_eq!(arcsec(c(2.0, 0.0)).unwrap(), c(PI / 3.0, 0.0));
    assert_eq!(arccsc(c(2.0, 0.0)).unwrap(), c(FRAC_PI_6, 0.0));
    assert_eq!(arccsc(Complex::NEG_ONE).unwrap(), c(-FRAC_PI_2, 0.0));
}

#[test]
fn arctan_poles() {
    assert_eq!(
        arctan(Complex::I),
        Err(Error::InverseTrigPole { function: "arctan" })
    );
    assert_eq!(
        arctan(Complex::NEG_I),
        Err(Error::InverseTrigPole { function: "arctan" })
    );
    assert_eq!(
        arccot(Complex::I),
        Err(Error::InverseTrigPole { function: "arccot" })
    );
}

#[test]
fn arcsec_arccsc_domain() {
    for x in [0.0, 0.5, -0.999] {
        assert_eq!(
            arcsec(c(x, 0.0)),
            Err(Error::InverseTrigDomain { function: "arcsec" })
        );
        assert_eq!(
            arccsc(c(x, 0.0)),
            Err(Error::InverseTrigDomain { function: "arccsc" })
        );
    }
    // Off the real axis the restriction does not apply
    let z = c(0.5, 0.5);
    assert_eq!(arcsec(z).unwrap(), arccos(z.reciprocal().unwrap()).unwrap());
    assert_eq!(arccsc(z).unwrap(), arcsin(z.reciprocal().unwrap()).unwrap());
}

#[test]
fn inverse_degree_variants() {
    assert_eq!(arcsin_deg(c(0.5, 0.0)).unwrap(), c(30.0, 0.0));
    assert_eq!(arccos_deg(c(0.5, 0.0)).unwrap(), c(60.0, 0.0));
    assert_eq!(arctan_deg(Complex::ONE).unwrap(), c(45.0, 0.0));
    assert_eq!(arcsec_deg(c(2.0, 0.0)).unwrap(), c(60.0, 0.0));
    assert_eq!(arccsc_deg(c(2.0, 0.0)).unwrap(), c(30.0, 0.0));
    assert_eq!(arccot_deg(Complex::ZERO).unwrap(), c(90.0, 0.0));
    let z = c(0.3, 0.7);
    assert_eq!(arcsin_deg(z).unwrap(), to_degrees(arcsin(z).unwrap()));
}
