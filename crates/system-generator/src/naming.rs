//! Syllable-based names for settled worlds and starports.

use star_system::{Random, StarSystem};
use stellar::BodyType;

/// Collisions tolerated before a station name gets a numeral suffix.
const UNIQUE_NAME_ATTEMPTS: u32 = 64;

static ONSETS: &[&str] = &[
    "B", "Br", "C", "Ch", "D", "Dr", "F", "G", "Gr", "H", "J", "K", "Kr", "L", "M", "N", "P",
    "Pr", "Qu", "R", "S", "Sh", "St", "T", "Th", "Tr", "V", "W", "Y", "Z",
];

static VOWELS: &[&str] = &[
    "a", "e", "i", "o", "u", "ae", "ai", "ea", "ei", "ia", "io", "oa", "ou",
];

static CODAS: &[&str] = &[
    "", "", "", "n", "r", "s", "l", "m", "nd", "rk", "th", "x", "st", "ll",
];

static MIDDLES: &[&str] = &[
    "b", "d", "g", "k", "l", "m", "n", "r", "s", "t", "v", "z", "nd", "rt", "st",
];

static ORBITAL_SUFFIXES: &[&str] = &["Station", "Orbital", "High", "Ring", "Dock"];

/// `{}` stands for the generated name.
static SURFACE_PATTERNS: &[&str] = &[
    "{} City",
    "Port {}",
    "{} Base",
    "{} Landing",
    "New {}",
    "{} Colony",
    "Fort {}",
    "{}ville",
];

/// Names drawn from a seeded stream.
#[derive(Clone)]
pub struct NameGenerator {
    rng: Random,
}

impl NameGenerator {
    pub fn new(rng: Random) -> Self {
        Self { rng }
    }

    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        table[self.rng.int32_below(table.len() as u32) as usize]
    }

    /// A capitalised word of two or three syllables.
    pub fn word(&mut self) -> String {
        let syllables = 2 + self.rng.int32_below(2);
        let mut word = String::new();
        word.push_str(self.pick(ONSETS));
        word.push_str(self.pick(VOWELS));
        for _ in 1..syllables {
            word.push_str(self.pick(MIDDLES));
            word.push_str(self.pick(VOWELS));
        }
        word.push_str(self.pick(CODAS));
        word
    }

    /// Name for a settled world, or for a station of the given kind.
    pub fn body_name(&mut self, body_type: BodyType) -> String {
        let word = self.word();
        match body_type {
            BodyType::OrbitalStarport => format!("{} {}", word, self.pick(ORBITAL_SUFFIXES)),
            BodyType::SurfaceStarport => self.pick(SURFACE_PATTERNS).replace("{}", &word),
            _ => word,
        }
    }

    /// A station name not yet used by any station of `system`.
    pub fn unique_station_name(&mut self, system: &StarSystem, body_type: BodyType) -> String {
        let taken = |name: &str| {
            system
                .space_stations()
                .iter()
                .any(|id| system[*id].name == name)
        };

        let mut name = self.body_name(body_type);
        for _ in 0..UNIQUE_NAME_ATTEMPTS {
            if !taken(&name) {
                return name;
            }
            name = self.body_name(body_type);
        }

        let mut numeral = 2;
        loop {
            let candidate = format!("{} {}", name, roman_numeral(numeral));
            if !taken(&candidate) {
                return candidate;
            }
            numeral += 1;
        }
    }
}

/// Roman numeral for `n` (1 to 3999; anything else prints as digits).
pub fn roman_numeral(n: u32) -> String {
    if n == 0 || n > 3999 {
        return n.to_string();
    }
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut rest = n;
    let mut out = String::new();
    for (value, digits) in TABLE {
        while rest >= value {
            out.push_str(digits);
            rest -= value;
        }
    }
    out
}
