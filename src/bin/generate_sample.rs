//! Writes a synthetic `raman_shift.csv` / `spectra.csv` / `data_set.csv`
//! triple into the given directory (default: current directory).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    wavenumbers: &[f64],
    peaks: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    wavenumbers
        .iter()
        .map(|&wn| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(wn, mu, sigma, amp))
                .sum();
            // Sloped fluorescence background.
            let background = 50.0 + 0.02 * (wn - wavenumbers[0]);
            signal + background + rng.gauss(0.0, noise_level)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Reference materials and their main bands: (centre cm⁻¹, width, height).
fn reference_materials() -> Vec<(&'static str, Vec<(f64, f64, f64)>)> {
    vec![
        ("Polystyrene", vec![(620.0, 6.0, 300.0), (1001.0, 5.0, 1000.0), (1031.0, 6.0, 350.0), (1602.0, 8.0, 450.0)]),
        ("Calcite", vec![(281.0, 8.0, 300.0), (712.0, 6.0, 200.0), (1086.0, 5.0, 1000.0)]),
        ("Aragonite", vec![(206.0, 6.0, 350.0), (705.0, 6.0, 180.0), (1085.0, 5.0, 950.0)]),
        ("Quartz", vec![(206.0, 8.0, 250.0), (464.0, 6.0, 1000.0)]),
        ("Anatase", vec![(399.0, 10.0, 400.0), (515.0, 10.0, 350.0), (639.0, 12.0, 600.0)]),
        ("Gypsum", vec![(415.0, 8.0, 200.0), (494.0, 8.0, 180.0), (1008.0, 5.0, 1000.0), (1136.0, 8.0, 150.0)]),
        ("Cellulose", vec![(380.0, 10.0, 250.0), (1095.0, 10.0, 600.0), (1120.0, 10.0, 500.0), (1380.0, 15.0, 200.0)]),
        ("Graphite", vec![(1350.0, 25.0, 500.0), (1580.0, 15.0, 900.0)]),
    ]
}

fn write_csv(path: &Path, header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    if let Some(header) = header {
        writer.write_record(&header)?;
    }
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    // Raman shift: 200 → 1800 cm⁻¹, step 2
    let wavenumbers: Vec<f64> = (0..801).map(|i| 200.0 + i as f64 * 2.0).collect();
    let materials = reference_materials();

    // Clean reference spectra, one per material.
    let reference_rows: Vec<Vec<String>> = materials
        .iter()
        .map(|(name, peaks)| {
            let mut row = vec![name.to_string()];
            row.extend(
                generate_spectrum(&wavenumbers, peaks, 0.0, &mut rng)
                    .iter()
                    .map(|v| format!("{v:.3}")),
            );
            row
        })
        .collect();

    // 25 noisy measurements: calcite with traces of graphite, then polystyrene.
    let calcite = &materials[1].1;
    let polystyrene = &materials[0].1;
    let graphite = &materials[7].1;
    let mut sample_rows: Vec<Vec<String>> = Vec::new();
    for i in 0..25 {
        let mut peaks: Vec<(f64, f64, f64)> = if i < 15 {
            calcite.clone()
        } else {
            polystyrene.clone()
        };
        let scale = 0.8 + 0.02 * i as f64;
        for p in &mut peaks {
            p.2 *= scale;
        }
        peaks.extend(graphite.iter().map(|&(mu, s, a)| (mu, s, a * 0.05)));
        let y = generate_spectrum(&wavenumbers, &peaks, 12.0, &mut rng);
        sample_rows.push(y.iter().map(|v| format!("{v:.3}")).collect());
    }

    let shift_rows = wavenumbers.iter().map(|w| vec![format!("{w:.1}")]).collect();
    write_csv(&out_dir.join("raman_shift.csv"), None, shift_rows)?;

    let spectra_header = wavenumbers.iter().map(|w| format!("I_{w:.0}")).collect();
    write_csv(&out_dir.join("spectra.csv"), Some(spectra_header), sample_rows)?;

    let mut reference_header = vec!["name".to_string()];
    reference_header.extend(wavenumbers.iter().map(|w| format!("{w:.1}")));
    write_csv(&out_dir.join("data_set.csv"), Some(reference_header), reference_rows)?;

    println!(
        "Wrote 25 spectra and {} reference spectra ({} Raman shifts each) to {}",
        materials.len(),
        wavenumbers.len(),
        out_dir.display()
    );
    println!("spectra.csv has a header row; pass `--spectra-header present` to `average`");
    Ok(())
}
