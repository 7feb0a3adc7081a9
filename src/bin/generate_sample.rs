//! Writes `sample_salaries.csv`, a synthetic survey in the published schema,
//! for running the dashboard offline via File → Open….

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const HEADER: [&str; 12] = [
    "ano",
    "senioridade",
    "contrato",
    "cargo",
    "salario",
    "moeda",
    "usd",
    "residencia",
    "remoto",
    "empresa",
    "tamanho_empresa",
    "residencia_iso3",
];

/// (role, base salary in USD)
const ROLES: [(&str, f64); 8] = [
    ("Data Scientist", 120_000.0),
    ("Data Engineer", 125_000.0),
    ("Data Analyst", 85_000.0),
    ("Machine Learning Engineer", 150_000.0),
    ("Analytics Engineer", 110_000.0),
    ("Research Scientist", 160_000.0),
    ("Data Architect", 140_000.0),
    ("Head of Data", 190_000.0),
];

/// (seniority, salary multiplier)
const SENIORITY: [(&str, f64); 4] = [
    ("junior", 0.55),
    ("pleno", 0.85),
    ("senior", 1.15),
    ("executivo", 1.5),
];

/// (ISO2, ISO3, salary multiplier)
const COUNTRIES: [(&str, &str, f64); 8] = [
    ("US", "USA", 1.2),
    ("CA", "CAN", 1.0),
    ("GB", "GBR", 0.9),
    ("DE", "DEU", 0.85),
    ("ES", "ESP", 0.65),
    ("BR", "BRA", 0.45),
    ("IN", "IND", 0.35),
    ("AU", "AUS", 0.95),
];

const CONTRACTS: [&str; 4] = ["integral", "parcial", "contrato", "freelancer"];
const REMOTE: [&str; 3] = ["remoto", "hibrido", "presencial"];
const SIZES: [&str; 3] = ["pequena", "media", "grande"];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_salaries.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(HEADER)?;

    let rows = 2_000;
    for _ in 0..rows {
        let year = 2020 + (rng.next_u64() % 6) as i32;
        let &(seniority, level_factor) = rng.pick(&SENIORITY);
        let &(role, base) = rng.pick(&ROLES);
        let &(iso2, iso3, country_factor) = rng.pick(&COUNTRIES);
        let contract = *rng.pick(&CONTRACTS);
        let remote = *rng.pick(&REMOTE);
        let size = *rng.pick(&SIZES);

        let growth = 1.0 + 0.04 * (year - 2020) as f64;
        let mean = base * level_factor * country_factor * growth;
        let usd = rng.gauss(mean, mean * 0.2).max(8_000.0).round();

        writer.write_record([
            year.to_string(),
            seniority.to_string(),
            contract.to_string(),
            role.to_string(),
            usd.to_string(),
            "USD".to_string(),
            usd.to_string(),
            iso2.to_string(),
            remote.to_string(),
            iso2.to_string(),
            size.to_string(),
            iso3.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {rows} salary records to {output_path}");
    Ok(())
}
