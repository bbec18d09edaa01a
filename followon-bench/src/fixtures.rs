//! Deterministic award/contract population generators.
//! Same seed → same population across runs.

use chrono::NaiveDate;

use followon_core::types::{Award, AwardPatent, Contract};

/// A generated benchmark population.
pub struct Population {
    pub awards: Vec<Award>,
    pub contracts: Vec<Contract>,
    pub patents: Vec<AwardPatent>,
    /// Awards generated with a deliberately matching follow-on contract.
    pub seeded_transitions: usize,
}

/// Population size presets.
#[derive(Debug, Clone, Copy)]
pub enum PopulationSize {
    /// ~100 awards — unit test scale.
    Micro,
    /// ~1K awards — small agency snapshot.
    Small,
    /// ~10K awards — full yearly batch.
    Large,
}

impl PopulationSize {
    pub fn award_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Large => 10_000,
        }
    }
}

const AGENCIES: &[&str] = &["NASA", "NAVY", "ARMY", "AIRFORCE", "DOE", "NIH"];
const TECH_AREAS: &[&str] = &[
    "Hypersonics",
    "Quantum",
    "Autonomy",
    "Space",
    "Biotech",
];
const PHASES: &[&str] = &["Phase I", "Phase II", "Phase III"];

// Two coprime-length stem lists give every vendor in a Micro population a
// unique two-word name, far enough apart that distinct vendors never
// fuzzy-match each other.
const NAME_ADJ: &[&str] = &[
    "Crimson", "Amber", "Cobalt", "Ivory", "Onyx", "Scarlet", "Azure", "Umber", "Viridian",
    "Sable", "Argent", "Cerulean", "Ochre", "Indigo", "Vermilion", "Slate", "Teal", "Maroon",
    "Sepia", "Fuchsia", "Beryl", "Coral", "Jade", "Lilac", "Mauve", "Peridot", "Quartz",
    "Russet", "Saffron", "Topaz", "Zircon",
];
const NAME_NOUN: &[&str] = &[
    "Dynamics", "Photonics", "Robotics", "Avionics", "Optics", "Microwave", "Ordnance",
    "Telemetry", "Hydraulics", "Ceramics", "Polymers", "Acoustics", "Turbines", "Sensors",
    "Actuators", "Composites", "Thermal", "Navigation", "Radar", "Antennas", "Propulsion",
    "Materials", "Imaging", "Lasers", "Coatings", "Electronics", "Machining", "Forgings",
    "Instruments",
];
// Disjoint stems for unrelated noise vendors.
const NOISE_ADJ: &[&str] = &[
    "Northgate", "Harborview", "Lakeshore", "Ridgeline", "Meadowbrook", "Stonewall",
    "Clearwater", "Oakfield", "Pinecrest", "Elmwood", "Fairhaven", "Glenrock", "Hillsboro",
    "Kingsport", "Larkspur", "Maplewood", "Newhall", "Overbrook", "Parkdale", "Quarryside",
    "Riverton", "Southgate", "Westfall",
];

fn vendor_name(i: usize) -> String {
    format!("{} {}", NAME_ADJ[i % NAME_ADJ.len()], NAME_NOUN[i % NAME_NOUN.len()])
}

/// Generate a deterministic population.
///
/// `transition_fraction` of awards (0.0–1.0) get a same-vendor,
/// same-agency contract inside the lookback window; the rest of the
/// contract table is unrelated noise.
pub fn generate_population(size: PopulationSize, seed: u64, transition_fraction: f64) -> Population {
    let award_count = size.award_count();
    let mut rng = SimpleRng::new(seed);
    let fraction = transition_fraction.clamp(0.0, 1.0);
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");

    let mut awards = Vec::with_capacity(award_count);
    let mut contracts = Vec::new();
    let mut patents = Vec::new();
    let mut seeded_transitions = 0;

    for i in 0..award_count {
        let agency = AGENCIES[(rng.next_u64() as usize) % AGENCIES.len()];
        let tech = TECH_AREAS[(rng.next_u64() as usize) % TECH_AREAS.len()];
        let phase = PHASES[(rng.next_u64() as usize) % PHASES.len()];
        let award_day = (rng.next_u64() % 365) as i64;
        let award_date = base_date + chrono::Duration::days(award_day);
        let uei = format!("UEI{:08}", i);

        awards.push(Award {
            award_id: format!("AWD-{:06}", i),
            uei: Some(uei.clone()),
            vendor_name: Some(vendor_name(i)),
            phase: Some(phase.to_string()),
            agency: Some(agency.to_string()),
            award_date: Some(award_date),
            tech_area: Some(tech.to_string()),
            ..Default::default()
        });

        // Seed a genuine follow-on for the configured fraction
        let roll = (rng.next_u64() % 1_000) as f64 / 1_000.0;
        if roll < fraction {
            seeded_transitions += 1;
            let gap_days = 30 + (rng.next_u64() % 300) as i64;
            contracts.push(Contract {
                contract_id: format!("CON-{:06}", i),
                uei: Some(uei.clone()),
                vendor_name: Some(vendor_name(i)),
                agency: Some(agency.to_string()),
                action_date: Some(award_date + chrono::Duration::days(gap_days)),
                ..Default::default()
            });
            if rng.next_u64() % 4 == 0 {
                patents.push(AwardPatent {
                    award_id: format!("AWD-{:06}", i),
                    patent_id: format!("PAT-{:06}", i),
                    filing_date: Some(award_date + chrono::Duration::days(90)),
                    topics: vec![tech.to_ascii_lowercase()],
                });
            }
        }

        // Unrelated noise contract for a different vendor
        if rng.next_u64() % 2 == 0 {
            let noise_day = (rng.next_u64() % 900) as i64;
            contracts.push(Contract {
                contract_id: format!("NOISE-{:06}", i),
                uei: Some(format!("XEI{:08}", i + award_count)),
                vendor_name: Some(format!("{} Freight Lines", NOISE_ADJ[i % NOISE_ADJ.len()])),
                agency: Some(AGENCIES[(rng.next_u64() as usize) % AGENCIES.len()].to_string()),
                action_date: Some(base_date + chrono::Duration::days(noise_day)),
                ..Default::default()
            });
        }
    }

    Population {
        awards,
        contracts,
        patents,
        seeded_transitions,
    }
}

/// Xorshift PRNG — deterministic, dependency-free.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
