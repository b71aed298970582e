use std::fs::File;
use std::io::{BufWriter, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Elastic modulus of the synthetic alloy, GPa.
const MODULUS: f64 = 45.0;
/// End of the elastic ramp.
const YIELD_STRAIN: f64 = 0.04;
/// Strain at peak stress.
const PEAK_STRAIN: f64 = 0.08;
/// Stress gained between yield and peak, GPa.
const HARDENING: f64 = 0.6;
/// Necking decay length in strain.
const NECKING_DECAY: f64 = 0.05;
/// Standard deviation of the thermal noise on stress, GPa.
const NOISE: f64 = 0.01;

/// Idealised true stress at `strain`: linear ramp, parabolic hardening up to
/// the peak, then exponential softening.
fn tensile_stress(strain: f64) -> f64 {
    let yield_stress = MODULUS * YIELD_STRAIN;
    let peak_stress = yield_stress + HARDENING;
    if strain <= YIELD_STRAIN {
        MODULUS * strain
    } else if strain <= PEAK_STRAIN {
        let t = (strain - YIELD_STRAIN) / (PEAK_STRAIN - YIELD_STRAIN);
        yield_stress + HARDENING * t * (2.0 - t)
    } else {
        peak_stress * (-(strain - PEAK_STRAIN) / NECKING_DECAY).exp()
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, NOISE).expect("Invalid noise distribution");

    let output_path = "CaMg_stress_strain.txt";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut out = BufWriter::new(file);

    // LAMMPS-style header; the analyzer skips it as non-numeric.
    writeln!(out, "# Fix print output for fix def1").expect("Failed to write header");
    writeln!(out, "# strain stress(GPa)").expect("Failed to write header");

    // Strain: 0 → 0.2, step 0.001
    let steps = 200;
    for i in 0..=steps {
        let strain = i as f64 * 0.001;
        let stress = tensile_stress(strain) + noise.sample(&mut rng);
        writeln!(out, "{strain:.6} {stress:.6}").expect("Failed to write sample");
    }
    out.flush().expect("Failed to flush output");

    println!("Wrote {} samples to {output_path}", steps + 1);
}
